//! Concurrent memo of pairwise verdicts keyed by (id A, id B, role pair).

use super::synergy::SynergyVerdict;
use crate::shared::RolePair;
use dashmap::DashMap;

type PairKey = (u8, u8, RolePair);

/// Safe to share between threads; verdicts are pure functions of the key, so a race
/// between two writers stores the same value.
#[derive(Debug, Default)]
pub struct PairScoreCache {
    verdicts: DashMap<PairKey, SynergyVerdict>,
}

impl PairScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, a: u8, b: u8, pair: RolePair) -> Option<SynergyVerdict> {
        self.verdicts.get(&(a, b, pair)).map(|v| *v)
    }

    /// Cached verdict for the key, computing and storing it on a miss.
    pub fn get_or_compute<F>(&self, a: u8, b: u8, pair: RolePair, compute: F) -> SynergyVerdict
    where
        F: FnOnce() -> SynergyVerdict,
    {
        if let Some(hit) = self.get(a, b, pair) {
            return hit;
        }
        let verdict = compute();
        self.verdicts.insert((a, b, pair), verdict);
        verdict
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn clear(&self) {
        self.verdicts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::synergy::SynergyRule;
    use std::cell::Cell;

    #[test]
    fn test_computes_once_per_key() {
        let cache = PairScoreCache::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            SynergyVerdict { score: 0.4, rule: SynergyRule::Structural }
        };

        let first = cache.get_or_compute(1, 64, RolePair::EngineSafe, compute);
        let second = cache.get_or_compute(1, 64, RolePair::EngineSafe, compute);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);

        // Direction and role pair are part of the key.
        cache.get_or_compute(64, 1, RolePair::EngineSafe, compute);
        cache.get_or_compute(1, 64, RolePair::InterfaceSafe, compute);
        assert_eq!(calls.get(), 3);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = PairScoreCache::new();
        cache.get_or_compute(2, 3, RolePair::EngineInterface, || SynergyVerdict {
            score: 0.0,
            rule: SynergyRule::Neutral,
        });
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(2, 3, RolePair::EngineInterface).is_none());
    }
}
