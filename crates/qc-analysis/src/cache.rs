//! Memoizing aggregator
//!
//! Analyses are pure functions of the input and the configuration, so they
//! can be shared between callers that ask for the same thing. Keys hold the
//! exact bit patterns of the input, never a lossy hash, so a hit always
//! returns what a fresh computation would.

use crate::aggregator::HistogramAggregator;
use crate::config::AnalysisConfig;
use crate::input::AnalysisInput;
use crate::output::HistogramAnalysis;
use dashmap::DashMap;
use qc_histogram::BinCountRule;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Cache eviction policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// No caching
    NoCache,
    /// Least recently used eviction
    Lru { max_entries: usize },
    /// Never evict
    Unbounded,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::Lru { max_entries: 256 }
    }
}

/// Hit/miss counters of a [`CachedAggregator`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

impl CacheStats {
    /// Share of lookups answered from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum InputKey {
    Measurements(Vec<u64>),
    Categories(Vec<(String, u64)>),
}

impl From<&AnalysisInput> for InputKey {
    fn from(input: &AnalysisInput) -> Self {
        match input {
            AnalysisInput::Measurements(values) => {
                Self::Measurements(values.iter().map(|v| v.to_bits()).collect())
            }
            AnalysisInput::Categories(pairs) => Self::Categories(
                pairs
                    .iter()
                    .map(|pair| (pair.category.clone(), pair.count.to_bits()))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ConfigKey {
    bin_rule: BinCountRule,
    lsl: Option<u64>,
    usl: Option<u64>,
    percentage_decimals: u32,
    label_precision: usize,
    curve_increments: usize,
}

impl From<&AnalysisConfig> for ConfigKey {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            bin_rule: config.bin_rule,
            lsl: config.spec_limits.lsl.map(f64::to_bits),
            usl: config.spec_limits.usl.map(f64::to_bits),
            percentage_decimals: config.percentage_decimals,
            label_precision: config.label_precision,
            curve_increments: config.curve_increments,
        }
    }
}

type CacheKey = (InputKey, ConfigKey);

#[derive(Debug)]
struct CacheEntry {
    analysis: Arc<HistogramAnalysis>,
    /// Tick of the most recent store or hit
    last_access: AtomicUsize,
}

/// A [`HistogramAggregator`] that remembers its results
///
/// Safe to share between threads; concurrent requests for a missing key may
/// both compute it, and both get identical results.
///
/// # Example
///
/// ```rust
/// use qc_analysis::{AnalysisConfig, AnalysisInput, CachedAggregator};
///
/// let cached = CachedAggregator::new(AnalysisConfig::default());
/// let input = AnalysisInput::from(vec![9.8, 10.0, 10.1, 10.3]);
///
/// let first = cached.analyze(&input);
/// let second = cached.analyze(&input);
/// assert_eq!(first, second);
/// assert_eq!(cached.stats().hits, 1);
/// ```
#[derive(Debug, Default)]
pub struct CachedAggregator {
    aggregator: HistogramAggregator,
    policy: CachePolicy,
    entries: DashMap<CacheKey, CacheEntry>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    access_counter: AtomicUsize,
}

impl CachedAggregator {
    /// Create a cached aggregator with the default policy
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_policy(config, CachePolicy::default())
    }

    pub fn with_policy(config: AnalysisConfig, policy: CachePolicy) -> Self {
        Self {
            aggregator: HistogramAggregator::new(config),
            policy,
            entries: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            access_counter: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.aggregator.config()
    }

    /// Analyze the input, reusing an earlier result when there is one
    pub fn analyze(&self, input: &AnalysisInput) -> Arc<HistogramAnalysis> {
        if self.policy == CachePolicy::NoCache {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return Arc::new(self.aggregator.analyze(input));
        }

        let key = (InputKey::from(input), ConfigKey::from(self.aggregator.config()));
        if let Some(hit) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            hit.last_access.store(self.tick(), Ordering::Relaxed);
            return Arc::clone(&hit.analysis);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let analysis = Arc::new(self.aggregator.analyze(input));

        if let CachePolicy::Lru { max_entries } = self.policy {
            while self.entries.len() >= max_entries.max(1) {
                if !self.evict_lru() {
                    break;
                }
            }
        }
        self.entries.insert(
            key,
            CacheEntry {
                analysis: Arc::clone(&analysis),
                last_access: AtomicUsize::new(self.tick()),
            },
        );
        analysis
    }

    fn tick(&self) -> usize {
        self.access_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Remove the entry with the oldest access tick; false when empty
    fn evict_lru(&self) -> bool {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().last_access.load(Ordering::Relaxed))
            .map(|entry| entry.key().clone());
        match oldest {
            Some(key) => {
                debug!("evicting least recently used analysis");
                self.entries.remove(&key).is_some()
            }
            None => false,
        }
    }

    /// Drop every cached result and reset the counters
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_core::CategoryCount;
    use std::thread;

    fn sample() -> AnalysisInput {
        AnalysisInput::from(vec![9.8, 10.0, 10.1, 10.1, 10.3, 9.9, 10.2])
    }

    #[test]
    fn test_hit_returns_same_result() {
        let cached = CachedAggregator::new(AnalysisConfig::default());
        let first = cached.analyze(&sample());
        let second = cached.analyze(&sample());

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, HistogramAggregator::default().analyze(&sample()));
        assert_eq!(
            cached.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
        assert_eq!(cached.stats().hit_rate(), 0.5);
    }

    #[test]
    fn test_distinct_inputs_miss() {
        let cached = CachedAggregator::new(AnalysisConfig::default());
        cached.analyze(&sample());
        cached.analyze(&AnalysisInput::from(vec![1.0, 2.0]));
        cached.analyze(&AnalysisInput::from(vec![CategoryCount::new("a", 1.0)]));
        // -0.0 and 0.0 compare equal but are different samples
        cached.analyze(&AnalysisInput::from(vec![0.0]));
        cached.analyze(&AnalysisInput::from(vec![-0.0]));

        assert_eq!(cached.stats().misses, 5);
        assert_eq!(cached.stats().entries, 5);
    }

    #[test]
    fn test_lru_evicts_one_entry() {
        let cached = CachedAggregator::with_policy(
            AnalysisConfig::default(),
            CachePolicy::Lru { max_entries: 2 },
        );
        let a = AnalysisInput::from(vec![1.0, 2.0]);
        let b = AnalysisInput::from(vec![3.0, 4.0]);
        let c = AnalysisInput::from(vec![5.0, 6.0]);

        cached.analyze(&a);
        cached.analyze(&b);
        cached.analyze(&a); // a is now more recent than b
        cached.analyze(&c); // evicts b only
        assert_eq!(cached.stats().entries, 2);

        cached.analyze(&a);
        cached.analyze(&c);
        assert_eq!(
            cached.stats(),
            CacheStats {
                hits: 3,
                misses: 3,
                entries: 2
            }
        );

        cached.analyze(&b);
        assert_eq!(cached.stats().misses, 4);
        assert_eq!(cached.stats().entries, 2);
    }

    #[test]
    fn test_no_cache_policy() {
        let cached = CachedAggregator::with_policy(AnalysisConfig::default(), CachePolicy::NoCache);
        cached.analyze(&sample());
        cached.analyze(&sample());

        let stats = cached.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.entries, 0);
    }

    #[test]
    fn test_clear() {
        let cached = CachedAggregator::new(AnalysisConfig::default());
        cached.analyze(&sample());
        cached.clear();
        assert_eq!(cached.stats(), CacheStats::default());
    }

    #[test]
    fn test_shared_between_threads() {
        let cached = Arc::new(CachedAggregator::new(AnalysisConfig::default()));
        let expected = HistogramAggregator::default().analyze(&sample());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cached = Arc::clone(&cached);
                thread::spawn(move || cached.analyze(&sample()))
            })
            .collect();
        for handle in handles {
            assert_eq!(*handle.join().unwrap(), expected);
        }
        assert_eq!(cached.stats().entries, 1);
        assert_eq!(cached.stats().hits + cached.stats().misses, 4);
    }
}
