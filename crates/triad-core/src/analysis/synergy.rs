//! Pairwise synergy scoring.
//!
//! A pair is scored by an ordered decision chain; the first rule that produces a
//! value wins:
//!
//! 1. identity (same trait twice, banded by role pair)
//! 2. keyword overlap (returns only at `>= 0.7`)
//! 3. energy pattern (returns only at `>= 0.6`)
//! 4. role-pair heuristic
//! 5. structural position
//! 6. strength/weakness complementarity
//! 7. neutral `0.0`

use super::lexicon::Lexicon;
use super::structure::StructureDetector;
use crate::shared::RolePair;
use crate::taxonomy::TraitRecord;
use serde::{Deserialize, Serialize};

const KEYWORD_RETURN_FLOOR: f64 = 0.7;
const ENERGY_RETURN_FLOOR: f64 = 0.6;
const ENERGY_MATCH: f64 = 0.6;

/// Which step of the chain produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynergyRule {
    Identity,
    KeywordOverlap,
    EnergyPattern,
    RoleContext,
    Structural,
    StrengthWeakness,
    Neutral,
}

/// A score together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynergyVerdict {
    pub score: f64,
    pub rule: SynergyRule,
}

impl SynergyVerdict {
    fn new(score: f64, rule: SynergyRule) -> Self {
        Self { score, rule }
    }
}

pub struct SynergyCalculator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SynergyCalculator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score of `a` (first role) against `b` (second role) within `pair`.
    pub fn score(&self, a: &TraitRecord, b: &TraitRecord, pair: RolePair) -> f64 {
        self.evaluate(a, b, Some(pair)).score
    }

    /// Runs the full chain. `None` is the unscoped context: identity uses the generic
    /// band and the role-pair heuristic is skipped.
    pub fn evaluate(&self, a: &TraitRecord, b: &TraitRecord, pair: Option<RolePair>) -> SynergyVerdict {
        let verdict = self.run_chain(a, b, pair);
        tracing::debug!(
            target: "triad::synergy",
            a = a.id,
            b = b.id,
            pair = pair.map(|p| p.as_str()).unwrap_or("unscoped"),
            rule = ?verdict.rule,
            score = verdict.score,
            "Pair scored"
        );
        verdict
    }

    fn run_chain(&self, a: &TraitRecord, b: &TraitRecord, pair: Option<RolePair>) -> SynergyVerdict {
        if a.id == b.id {
            return SynergyVerdict::new(self.identity_score(a, pair), SynergyRule::Identity);
        }

        let keyword = self.keyword_score(&a.keywords, &b.keywords);
        if keyword >= KEYWORD_RETURN_FLOOR {
            return SynergyVerdict::new(keyword, SynergyRule::KeywordOverlap);
        }

        let energy = self.energy_score(&a.energy, &b.energy);
        if energy >= ENERGY_RETURN_FLOOR {
            return SynergyVerdict::new(energy, SynergyRule::EnergyPattern);
        }

        if let Some(score) = pair.and_then(|p| self.role_context_score(a, b, p)) {
            return SynergyVerdict::new(score, SynergyRule::RoleContext);
        }

        if let Some(score) = self.structural_score(a, b) {
            return SynergyVerdict::new(score, SynergyRule::Structural);
        }

        let sw = self.strength_weakness_score(a, b);
        if sw != 0.0 {
            return SynergyVerdict::new(sw, SynergyRule::StrengthWeakness);
        }

        SynergyVerdict::new(0.0, SynergyRule::Neutral)
    }

    /// Same trait in both roles: how well does it perform in this particular pair?
    pub fn identity_score(&self, record: &TraitRecord, pair: Option<RolePair>) -> f64 {
        let vocab = &self.lexicon.identity;
        let kw = &record.keywords;
        match pair {
            Some(RolePair::EngineInterface) => {
                if vocab.decisive.names_any(kw) {
                    0.6
                } else if vocab.introspective.names_any(kw) {
                    -0.1
                } else {
                    0.4
                }
            }
            Some(RolePair::EngineSafe) => {
                if vocab.ideal.names_any(kw) {
                    -0.2
                } else if vocab.harmony.names_any(kw) {
                    0.3
                } else if vocab.driving.names_any(kw) {
                    0.2
                } else {
                    0.1
                }
            }
            Some(RolePair::InterfaceSafe) => {
                if vocab.adjusting.names_any(kw) {
                    0.4
                } else if vocab.extreme.names_any(kw) {
                    -0.3
                } else if self.well_balanced(record, record) {
                    0.3
                } else {
                    0.2
                }
            }
            None => 0.3,
        }
    }

    /// 0.7 when a directed reinforcement pattern matches; otherwise literal overlap
    /// scaled as `0.5 + 0.1 * n`, capped at 0.7.
    pub fn keyword_score(&self, a: &[String], b: &[String]) -> f64 {
        let patterned = self
            .lexicon
            .keyword_synergies
            .iter()
            .any(|p| p.touches_directed(a, b));
        let mut best: f64 = if patterned { 0.7 } else { 0.0 };

        let common = a
            .iter()
            .filter(|k1| {
                b.iter()
                    .any(|k2| k1 == &k2 || k1.contains(k2.as_str()) || k2.contains(k1.as_str()))
            })
            .count();
        if common > 0 {
            // Tenths as integers keep the cap exact.
            let tenths = (5 + common).min(7);
            best = best.max(tenths as f64 / 10.0);
        }
        best
    }

    /// 0.6 for a reinforcing or balancing facet pair, else 0.0.
    pub fn energy_score(&self, a: &str, b: &str) -> f64 {
        let lex = self.lexicon;
        let matched = lex
            .compatible_energy
            .iter()
            .chain(lex.balancing_energy.iter())
            .any(|p| p.matches_text(a, b));
        if matched {
            ENERGY_MATCH
        } else {
            0.0
        }
    }

    fn role_context_score(&self, a: &TraitRecord, b: &TraitRecord, pair: RolePair) -> Option<f64> {
        match pair {
            RolePair::EngineInterface => self.similar_direction(a, b).then_some(0.5),
            RolePair::EngineSafe => {
                if self.healthy_complement(a, b) {
                    Some(0.4)
                } else if self.stressful_complement(a, b) {
                    Some(-0.3)
                } else {
                    None
                }
            }
            RolePair::InterfaceSafe => self.well_balanced(a, b).then_some(0.3),
        }
    }

    fn structural_score(&self, a: &TraitRecord, b: &TraitRecord) -> Option<f64> {
        let facts = StructureDetector::new(self.lexicon).facts(a.id, b.id);
        if facts.sum_complementary {
            Some(if self.stressful_complement(a, b) { -0.2 } else { 0.4 })
        } else if facts.adjacent {
            Some(0.3)
        } else if facts.numeric_opposite {
            Some(-0.1)
        } else if self.energy_conflicting(&a.energy, &b.energy) {
            Some(-0.2)
        } else {
            None
        }
    }

    /// Both traits fall in the same execution cluster, `a` on the left side.
    pub fn similar_direction(&self, a: &TraitRecord, b: &TraitRecord) -> bool {
        self.lexicon
            .execution_clusters
            .iter()
            .any(|c| c.touches_directed(&a.keywords, &b.keywords))
    }

    /// An action/stabilizer pairing that also relieves a weakness.
    pub fn healthy_complement(&self, a: &TraitRecord, b: &TraitRecord) -> bool {
        self.lexicon
            .healthy_complements
            .iter()
            .any(|p| p.touches_either(&a.keywords, &b.keywords))
            && self.strength_weakness_score(a, b) > 0.0
    }

    pub fn stressful_complement(&self, a: &TraitRecord, b: &TraitRecord) -> bool {
        let lex = self.lexicon;
        lex.stressful_complements
            .iter()
            .any(|p| p.touches_either(&a.keywords, &b.keywords))
            || a.strength == b.strength
            || self.shares_weakness(a, b)
    }

    /// A flexible/stable vocabulary pairing, or energy compatibility strictly inside (0.3, 0.7).
    pub fn well_balanced(&self, a: &TraitRecord, b: &TraitRecord) -> bool {
        if self
            .lexicon
            .balanced_pairs
            .iter()
            .any(|p| p.touches_either(&a.keywords, &b.keywords))
        {
            return true;
        }
        let energy = self.energy_score(&a.energy, &b.energy);
        energy > 0.3 && energy < 0.7
    }

    pub fn energy_conflicting(&self, a: &str, b: &str) -> bool {
        self.lexicon
            .conflicting_energy
            .iter()
            .any(|p| p.found_across(a, b))
    }

    fn shares_weakness(&self, a: &TraitRecord, b: &TraitRecord) -> bool {
        self.lexicon
            .shared_weaknesses
            .0
            .iter()
            .any(|w| a.weakness.contains(w.as_str()) && b.weakness.contains(w.as_str()))
    }

    /// +0.5 when one strength relieves the other's weakness, -0.3 on a shared weakness term.
    pub fn strength_weakness_score(&self, a: &TraitRecord, b: &TraitRecord) -> f64 {
        let relieved = self.lexicon.relief_pairs.iter().any(|r| {
            r.relieves(&a.strength, &b.weakness) || r.relieves(&b.strength, &a.weakness)
        });
        if relieved {
            0.5
        } else if self.shares_weakness(a, b) {
            -0.3
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Taxonomy;

    fn record(id: u8, keywords: &[&str], strength: &str, weakness: &str, energy: &str) -> TraitRecord {
        TraitRecord {
            id,
            name: format!("Trait {id}"),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            strength: strength.to_string(),
            weakness: weakness.to_string(),
            energy: energy.to_string(),
        }
    }

    fn verdict(a: i64, b: i64, pair: RolePair) -> SynergyVerdict {
        let t = Taxonomy::builtin();
        let lex = Lexicon::standard();
        SynergyCalculator::new(&lex).evaluate(t.get(a), t.get(b), Some(pair))
    }

    #[test]
    fn test_identity_is_role_sensitive() {
        assert_eq!(verdict(1, 1, RolePair::EngineSafe), SynergyVerdict::new(0.2, SynergyRule::Identity));
        assert_eq!(verdict(1, 1, RolePair::InterfaceSafe).score, 0.3);
        assert_eq!(verdict(1, 1, RolePair::EngineInterface).score, 0.4);
    }

    #[test]
    fn test_identity_bands() {
        assert_eq!(verdict(34, 34, RolePair::EngineInterface).score, 0.6);
        assert_eq!(verdict(29, 29, RolePair::EngineInterface).score, -0.1);
        assert_eq!(verdict(63, 63, RolePair::EngineSafe).score, -0.2);
        assert_eq!(verdict(2, 2, RolePair::EngineSafe).score, 0.3);
        assert_eq!(verdict(2, 2, RolePair::InterfaceSafe).score, 0.4);
        assert_eq!(verdict(28, 28, RolePair::InterfaceSafe).score, -0.3);
    }

    #[test]
    fn test_unscoped_identity_uses_generic_band() {
        let t = Taxonomy::builtin();
        let lex = Lexicon::standard();
        let v = SynergyCalculator::new(&lex).evaluate(t.get(34), t.get(34), None);
        assert_eq!(v.score, 0.3);
    }

    #[test]
    fn test_keyword_pattern_wins_first() {
        assert_eq!(
            verdict(1, 34, RolePair::EngineInterface),
            SynergyVerdict::new(0.7, SynergyRule::KeywordOverlap)
        );
    }

    #[test]
    fn test_literal_overlap_scaling() {
        let lex = Lexicon::standard();
        let calc = SynergyCalculator::new(&lex);
        let a: Vec<String> = vec!["hardship".into(), "endurance".into()];
        let one: Vec<String> = vec!["endurance".into()];
        let three: Vec<String> = vec!["hardship".into(), "endurance".into(), "end".into()];
        assert_eq!(calc.keyword_score(&a, &one), 0.6);
        assert_eq!(calc.keyword_score(&a, &three), 0.7);
        assert_eq!(calc.keyword_score(&a, &[]), 0.0);
        assert_eq!(verdict(36, 39, RolePair::EngineSafe).rule, SynergyRule::KeywordOverlap);
    }

    #[test]
    fn test_yin_yang_energy_balance() {
        assert_eq!(
            verdict(1, 2, RolePair::EngineInterface),
            SynergyVerdict::new(0.6, SynergyRule::EnergyPattern)
        );
    }

    #[test]
    fn test_role_context_heuristics() {
        assert_eq!(
            verdict(8, 17, RolePair::EngineInterface),
            SynergyVerdict::new(0.5, SynergyRule::RoleContext)
        );
        assert_eq!(
            verdict(1, 64, RolePair::EngineSafe),
            SynergyVerdict::new(-0.3, SynergyRule::RoleContext)
        );
        assert_eq!(
            verdict(2, 7, RolePair::InterfaceSafe),
            SynergyVerdict::new(0.3, SynergyRule::RoleContext)
        );
    }

    #[test]
    fn test_healthy_complement_needs_relief() {
        let lex = Lexicon::standard();
        let calc = SynergyCalculator::new(&lex);
        let actor = record(10, &["execution"], "decisiveness", "prone to arrogance", "bold");
        let steady = record(40, &["caution"], "quiet care", "lack of initiative", "calm");
        let steady_no_relief = record(40, &["caution"], "quiet care", "nothing notable", "calm");

        assert_eq!(
            calc.evaluate(&actor, &steady, Some(RolePair::EngineSafe)),
            SynergyVerdict::new(0.4, SynergyRule::RoleContext)
        );
        // Without relief the pairing is not healthy and falls through the chain.
        assert_eq!(
            calc.evaluate(&actor, &steady_no_relief, Some(RolePair::EngineSafe)),
            SynergyVerdict::new(0.0, SynergyRule::Neutral)
        );
    }

    #[test]
    fn test_structural_fallbacks() {
        assert_eq!(
            verdict(1, 64, RolePair::EngineInterface),
            SynergyVerdict::new(-0.2, SynergyRule::Structural)
        );
        assert_eq!(verdict(5, 6, RolePair::EngineInterface).score, 0.3);
        assert_eq!(verdict(1, 33, RolePair::EngineInterface).score, -0.1);
        assert_eq!(
            verdict(1, 23, RolePair::EngineSafe),
            SynergyVerdict::new(-0.2, SynergyRule::Structural)
        );
    }

    #[test]
    fn test_strength_weakness_interaction() {
        assert_eq!(
            verdict(5, 34, RolePair::EngineInterface),
            SynergyVerdict::new(0.5, SynergyRule::StrengthWeakness)
        );
        assert_eq!(
            verdict(3, 49, RolePair::EngineInterface),
            SynergyVerdict::new(-0.3, SynergyRule::StrengthWeakness)
        );
    }

    #[test]
    fn test_neutral_default() {
        assert_eq!(
            verdict(1, 29, RolePair::EngineSafe),
            SynergyVerdict::new(0.0, SynergyRule::Neutral)
        );
        assert_eq!(verdict(2, 29, RolePair::InterfaceSafe).score, 0.0);
    }

    #[test]
    fn test_short_keyword_sequences_never_fail() {
        let lex = Lexicon::standard();
        let calc = SynergyCalculator::new(&lex);
        let bare = record(9, &[], "", "", "");
        let one = record(10, &["harmony"], "s", "w", "yin");
        for pair in RolePair::all() {
            let v = calc.evaluate(&bare, &one, Some(pair));
            assert!(v.score.is_finite());
            let same = calc.evaluate(&bare, &bare, Some(pair));
            assert_eq!(same.rule, SynergyRule::Identity);
        }
    }

    /// (a, b, [engine-interface, engine-safe, interface-safe]) for the built-in tables.
    /// Covers wording where a stray substring would add or drop a match.
    const PINNED_SCORES: &[(i64, i64, [f64; 3])] = &[
        (1, 48, [0.0, 0.0, 0.0]),
        (48, 1, [0.0, 0.0, 0.0]),
        (2, 40, [0.0, 0.0, 0.0]),
        (7, 40, [0.0, 0.0, 0.0]),
        (8, 40, [-0.1, -0.1, -0.1]),
        (17, 40, [0.0, 0.0, 0.0]),
        (12, 18, [0.7, 0.7, 0.7]),
        (12, 49, [0.7, 0.7, 0.7]),
        (12, 48, [0.0, -0.3, 0.0]),
        (12, 50, [0.0, -0.3, 0.0]),
        (2, 52, [-0.2, -0.2, -0.2]),
        (52, 29, [-0.2, -0.2, -0.2]),
        (56, 64, [-0.3, -0.3, -0.3]),
        (35, 46, [0.0, 0.0, 0.0]),
        (42, 46, [0.0, 0.0, 0.0]),
        (58, 16, [0.0, 0.0, 0.0]),
        (1, 10, [0.0, 0.0, 0.3]),
        (1, 62, [0.0, 0.0, 0.3]),
        (29, 31, [0.0, 0.0, 0.0]),
        (10, 29, [0.0, 0.0, 0.0]),
        (41, 43, [0.0, 0.0, 0.0]),
        (40, 59, [0.0, 0.0, 0.0]),
        (11, 56, [0.0, 0.0, 0.0]),
        (5, 33, [0.0, 0.0, 0.0]),
        (2, 15, [0.0, 0.0, 0.0]),
        (56, 56, [0.4, 0.1, 0.2]),
    ];

    #[test]
    fn test_builtin_pair_scores_are_pinned() {
        let t = Taxonomy::builtin();
        let lex = Lexicon::standard();
        let calc = SynergyCalculator::new(&lex);
        for &(a, b, expected) in PINNED_SCORES {
            for (pair, want) in RolePair::all().into_iter().zip(expected) {
                let got = calc.score(t.get(a), t.get(b), pair);
                assert_eq!(got, want, "({a}, {b}) {pair}");
            }
        }
    }

    #[test]
    fn test_energy_clash_covers_motion_family() {
        let lex = Lexicon::standard();
        let calc = SynergyCalculator::new(&lex);
        assert!(calc.energy_conflicting("yin/passive/stability-oriented", "still/immovable/meditation-oriented"));
        assert!(calc.energy_conflicting("fluid/adaptive/depth-oriented", "still/immovable/meditation-oriented"));
        assert!(!calc.energy_conflicting("yang/assertive/upward-oriented", "wellspring/providing/stability-oriented"));
        assert_eq!(calc.energy_score("yang/assertive/upward-oriented", "wellspring/providing/stability-oriented"), 0.0);
    }

    #[test]
    fn test_score_distribution_over_all_builtin_pairs() {
        use std::collections::BTreeMap;

        let t = Taxonomy::builtin();
        let lex = Lexicon::standard();
        let calc = SynergyCalculator::new(&lex);
        let expected: [&[(i32, usize)]; 3] = [
            &[(-3, 15), (-2, 21), (-1, 67), (0, 3651), (3, 120), (4, 114), (5, 47), (6, 25), (7, 36)],
            &[(-3, 78), (-2, 21), (-1, 61), (0, 3634), (1, 50), (2, 2), (3, 121), (4, 57), (5, 12), (6, 24), (7, 36)],
            &[(-3, 15), (-2, 21), (-1, 63), (0, 3635), (2, 54), (3, 176), (4, 60), (5, 12), (6, 24), (7, 36)],
        ];
        for (pair, want) in RolePair::all().into_iter().zip(expected) {
            let mut tenths: BTreeMap<i32, usize> = BTreeMap::new();
            for a in t.records() {
                for b in t.records() {
                    let s = calc.score(a, b, pair);
                    *tenths.entry((s * 10.0).round() as i32).or_default() += 1;
                }
            }
            let want: BTreeMap<i32, usize> = want.iter().copied().collect();
            assert_eq!(tenths, want, "{pair}");
        }
    }

    #[test]
    fn test_all_pairs_bounded_and_deterministic() {
        let t = Taxonomy::builtin();
        let lex = Lexicon::standard();
        let calc = SynergyCalculator::new(&lex);
        for a in t.records() {
            for b in t.records() {
                for pair in RolePair::all() {
                    let first = calc.score(a, b, pair);
                    assert_eq!(first, calc.score(a, b, pair));
                    assert!((-1.0..=1.0).contains(&first), "{} {} {pair}: {first}", a.id, b.id);
                }
            }
        }
    }
}
