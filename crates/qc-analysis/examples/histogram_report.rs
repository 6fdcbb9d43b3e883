//! Print a check-sheet style histogram report
//!
//! Run with `RUST_LOG=debug` to see the pipeline's tracing output:
//!
//! ```text
//! RUST_LOG=qc_analysis=debug,qc_histogram=debug cargo run -p qc-analysis --example histogram_report
//! ```

use anyhow::Result;
use qc_analysis::{AnalysisConfig, AnalysisInput, CachedAggregator};
use qc_core::CategoryCount;
use qc_histogram::BinCountRule;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Shaft diameters in mm, with one sensor glitch
    let mut rng = StdRng::seed_from_u64(42);
    let normal = Normal::new(10.0, 0.05)?;
    let mut diameters: Vec<f64> = (0..200).map(|_| normal.sample(&mut rng)).collect();
    diameters.push(f64::NAN);
    diameters.push(10.4);

    let config = AnalysisConfig::builder()
        .bin_rule(BinCountRule::Sturges)
        .limits(9.85, 10.15)
        .label_precision(3)
        .try_build()?;
    println!("config: {}", config.to_json()?);

    let aggregator = CachedAggregator::new(config);
    let analysis = aggregator.analyze(&AnalysisInput::Measurements(diameters));

    println!("\n== Shaft diameter ==");
    println!(
        "{} samples received, {} dropped",
        analysis.preparation.received, analysis.preparation.dropped
    );
    println!("{analysis}");
    if let Some(fences) = analysis.outliers.fences {
        println!(
            "Tukey fences: [{:.3}, {:.3}], flagged {:?}",
            fences.lower, fences.upper, analysis.outliers.tukey_outliers
        );
    }

    let defects = vec![
        CategoryCount::new("scratch", 42.0),
        CategoryCount::new("dent", 17.0),
        CategoryCount::new("burr", 9.0),
        CategoryCount::new("stain", 4.0),
    ];
    let defect_report = aggregator.analyze(&AnalysisInput::Categories(defects));
    println!("\n== Defect categories ==");
    println!("{defect_report}");

    // Asking again is answered from the cache
    aggregator.analyze(&AnalysisInput::Categories(vec![
        CategoryCount::new("scratch", 42.0),
        CategoryCount::new("dent", 17.0),
        CategoryCount::new("burr", 9.0),
        CategoryCount::new("stain", 4.0),
    ]));
    let stats = aggregator.stats();
    println!(
        "\ncache: {} hits, {} misses ({:.0}% hit rate)",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );

    Ok(())
}
