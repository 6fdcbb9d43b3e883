//! Compare bin-count rules on a simulated shaft-diameter sample

use qc_histogram::{BinCountRule, HistogramBuilder, TableOps};

fn main() {
    // Deterministic pseudo-measurements around 25.0 mm
    let data: Vec<f64> = (0..120)
        .map(|i| {
            let t = i as f64;
            25.0 + 0.05 * (t * 0.37).sin() + 0.03 * (t * 1.91).cos()
        })
        .collect();

    for rule in [
        BinCountRule::Fixed(6),
        BinCountRule::Sturges,
        BinCountRule::FreedmanDiaconis,
    ] {
        let table = rule.build(&data);
        println!("{} -> {}", rule.name(), table);

        let labels = table.labels(3);
        let percentages = table.percentages(1);
        for ((bin, label), pct) in table.bins().iter().zip(&labels).zip(&percentages) {
            println!("  {label:>15} | {:>3} | {pct:>5.1}%", bin.count);
        }
    }
}
