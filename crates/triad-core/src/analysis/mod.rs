//! Relationship inference for an Engine / Interface / Safe-Mode triad.
//!
//! ## Pipeline
//!
//! | Stage      | Type                   | Output                                   |
//! |------------|------------------------|------------------------------------------|
//! | Structure  | [`StructureDetector`]  | [`StructuralFacts`] and [`StructuralKind`] |
//! | Score      | [`SynergyCalculator`]  | [`SynergyVerdict`] in roughly [-1, 1]    |
//! | Classify   | [`RelationCategory`]   | SYNERGY / HARMONY / TENSION / CONFLICT   |
//! | Describe   | [`Narrator`]           | One-sentence pair summary                |
//! | Assemble   | [`Analyzer`]           | [`AnalysisReport`]                       |
//!
//! Every stage reads the injected [`Taxonomy`] and [`Lexicon`]; nothing is mutated after
//! construction, so one `Analyzer` can serve any number of concurrent callers.

mod cache;
mod classify;
mod lexicon;
mod narrative;
mod report;
mod structure;
mod synergy;

pub use cache::PairScoreCache;
pub use classify::RelationCategory;
pub use lexicon::{
    ConflictTheme, IdentityVocab, Lexicon, ReliefPair, SpecialCombination, TensionVocab, TermPair, Vocab,
    VocabPair,
};
pub use narrative::{Narrator, TensionFamily};
pub use report::{
    AnalysisReport, Affordances, Interactions, PairRelationship, RoleAffordance, RoleSummary, SynergyMatrix,
};
pub use structure::{StructuralFacts, StructuralKind, StructureDetector};
pub use synergy::{SynergyCalculator, SynergyRule, SynergyVerdict};

use crate::error::AnalyzerError;
use crate::shared::{AnalyzerConfig, Role, RoleAssignment, RolePair, DEFAULT_TRAIT_ID, REPORT_VERSION};
use crate::taxonomy::{Taxonomy, TraitRecord};
use report::Triad;
use std::sync::Arc;

/// Builds relationship reports from three role assignments.
#[derive(Debug, Clone)]
pub struct Analyzer {
    taxonomy: Arc<Taxonomy>,
    lexicon: Arc<Lexicon>,
    version: String,
    cache: Option<Arc<PairScoreCache>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Built-in taxonomy and standard lexicon, no memoization.
    pub fn new() -> Self {
        Self::with_tables(Arc::new(Taxonomy::builtin()), Arc::new(Lexicon::standard()))
    }

    /// Uses substitute tables (e.g. a test taxonomy with short keyword lists).
    pub fn with_tables(taxonomy: Arc<Taxonomy>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            taxonomy,
            lexicon,
            version: REPORT_VERSION.to_string(),
            cache: None,
        }
    }

    /// Builds an analyzer from configuration, loading a taxonomy file when one is named.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let taxonomy = match &config.taxonomy_path {
            Some(path) => Taxonomy::from_json_file(path)?,
            None => Taxonomy::builtin(),
        };
        let analyzer = Self::with_tables(Arc::new(taxonomy), Arc::new(Lexicon::standard()))
            .with_version(&config.report_version);
        let analyzer = if config.memoize_pair_scores {
            analyzer.with_memoization()
        } else {
            analyzer
        };
        tracing::info!(
            target: "triad::analysis",
            version = %analyzer.version,
            taxonomy = config.taxonomy_path.as_deref().unwrap_or("builtin"),
            memoize = config.memoize_pair_scores,
            "Analyzer ready"
        );
        Ok(analyzer)
    }

    /// Loads [`AnalyzerConfig`] from file/env and builds from it.
    pub fn from_env() -> Result<Self, AnalyzerError> {
        let config = AnalyzerConfig::load()?;
        Self::from_config(&config)
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Memoizes pair verdicts by (id A, id B, role pair). Clones share the cache.
    pub fn with_memoization(mut self) -> Self {
        self.cache = Some(Arc::new(PairScoreCache::new()));
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn cache(&self) -> Option<&PairScoreCache> {
        self.cache.as_deref()
    }

    /// Trait for an assignment, substituting [`DEFAULT_TRAIT_ID`] for a missing or unknown id.
    fn resolve_trait(&self, assignment: &RoleAssignment) -> &TraitRecord {
        match assignment.trait_id.and_then(|id| self.taxonomy.lookup(id)) {
            Some(record) => record,
            None => {
                tracing::warn!(
                    target: "triad::analysis",
                    role = assignment.role.label(),
                    trait_id = ?assignment.trait_id,
                    fallback = DEFAULT_TRAIT_ID,
                    "Unknown trait id; using fallback record"
                );
                self.taxonomy.get(i64::from(DEFAULT_TRAIT_ID))
            }
        }
    }

    fn resolve_score(&self, assignment: &RoleAssignment) -> f64 {
        if !assignment.score.is_some_and(f64::is_finite) {
            tracing::warn!(
                target: "triad::analysis",
                role = assignment.role.label(),
                score = ?assignment.score,
                "Missing role score; using default"
            );
        }
        assignment.resolved_score()
    }

    fn verdict(&self, a: &TraitRecord, b: &TraitRecord, pair: RolePair) -> SynergyVerdict {
        let calc = SynergyCalculator::new(&self.lexicon);
        match &self.cache {
            Some(cache) => cache.get_or_compute(a.id, b.id, pair, || calc.evaluate(a, b, Some(pair))),
            None => calc.evaluate(a, b, Some(pair)),
        }
    }

    /// Synergy score of two trait ids in a role pair (ids fall back like [`Taxonomy::get`]).
    pub fn pair_score(&self, id_a: i64, id_b: i64, pair: RolePair) -> f64 {
        self.verdict(self.taxonomy.get(id_a), self.taxonomy.get(id_b), pair).score
    }

    pub fn classify_structure(&self, id_a: i64, id_b: i64) -> StructuralKind {
        let (a, b) = (self.taxonomy.get(id_a), self.taxonomy.get(id_b));
        StructureDetector::new(&self.lexicon).classify(a.id, b.id)
    }

    fn build_relation(&self, a: &TraitRecord, b: &TraitRecord, pair: Option<RolePair>) -> PairRelationship {
        let verdict = match pair {
            Some(p) => self.verdict(a, b, p),
            None => SynergyCalculator::new(&self.lexicon).evaluate(a, b, None),
        };
        let facts = StructureDetector::new(&self.lexicon).facts(a.id, b.id);
        let structure = facts.kind();
        let category = RelationCategory::from_score(verdict.score);
        let summary = Narrator::new(&self.lexicon).describe(a, b, category, structure, pair);
        PairRelationship {
            pair,
            category,
            synergy: verdict.score,
            score: verdict.score.abs(),
            rule: verdict.rule,
            structure,
            facts,
            summary,
        }
    }

    /// Full relationship for two trait ids in a role pair.
    pub fn relate(&self, id_a: i64, id_b: i64, pair: RolePair) -> PairRelationship {
        self.build_relation(self.taxonomy.get(id_a), self.taxonomy.get(id_b), Some(pair))
    }

    /// Relationship for a role pair named by string. An unrecognized name is scored in the
    /// unscoped context, phrased generically, and returned with `pair: None`.
    pub fn explain_pair(&self, id_a: i64, id_b: i64, context: &str) -> PairRelationship {
        let pair = RolePair::parse(context);
        if pair.is_none() {
            tracing::warn!(
                target: "triad::analysis",
                context,
                "Unrecognized role pair; using generic phrasing"
            );
        }
        self.build_relation(self.taxonomy.get(id_a), self.taxonomy.get(id_b), pair)
    }

    /// Analyzes one triad. Never fails: unknown ids and missing scores fall back to defaults.
    pub fn analyze(
        &self,
        engine: RoleAssignment,
        interface: RoleAssignment,
        safe_mode: RoleAssignment,
    ) -> AnalysisReport {
        let slots = [
            (Role::Engine, engine),
            (Role::Interface, interface),
            (Role::SafeMode, safe_mode),
        ];
        for (expected, assignment) in &slots {
            if assignment.role != *expected {
                tracing::warn!(
                    target: "triad::analysis",
                    expected = expected.label(),
                    found = assignment.role.label(),
                    "Assignment role does not match its slot; slot wins"
                );
            }
        }

        let traits = slots.map(|(_, a)| self.resolve_trait(&a));
        let scores = slots.map(|(_, a)| self.resolve_score(&a));
        let summaries = [Role::Engine, Role::Interface, Role::SafeMode].map(|role| {
            let i = role.index();
            RoleSummary {
                role,
                id: traits[i].id,
                name: traits[i].name.clone(),
                score: scores[i],
            }
        });

        let pair_insights: Vec<PairRelationship> = RolePair::all()
            .into_iter()
            .map(|pair| {
                let (ra, rb) = pair.roles();
                self.build_relation(traits[ra.index()], traits[rb.index()], Some(pair))
            })
            .collect();

        let matrix = SynergyMatrix::cells_from_pairs(
            &pair_insights
                .iter()
                .filter_map(|p| p.pair.map(|pair| (pair, p.synergy)))
                .collect::<Vec<_>>(),
        );
        let mean = report::mean_off_diagonal(&matrix);

        let triad = Triad {
            engine: traits[0],
            interface: traits[1],
            safe: traits[2],
            scores,
        };

        tracing::debug!(
            target: "triad::analysis",
            engine = triad.engine.id,
            interface = triad.interface.id,
            safe_mode = triad.safe.id,
            mean_synergy = mean,
            "Triad analyzed"
        );

        let [engine, interface, safe_mode] = summaries;
        AnalysisReport {
            version: self.version.clone(),
            engine,
            interface,
            safe_mode,
            synergy: SynergyMatrix {
                matrix,
                notes: report::matrix_notes(&triad, mean),
            },
            interactions: Interactions {
                pair_insights,
                affordances: report::affordances(&triad),
                inner_conflicts: report::inner_conflicts(&triad, &self.lexicon),
                integration_prompts: report::integration_prompts(&triad),
            },
            strengths: report::strengths(&triad, mean, &self.lexicon),
            risks: report::risks(&triad, mean),
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TAXONOMY_SIZE;

    fn assign(role: Role, id: i64) -> RoleAssignment {
        RoleAssignment::new(role, id, 0.5)
    }

    fn report_for(analyzer: &Analyzer, ids: [i64; 3]) -> AnalysisReport {
        analyzer.analyze(
            assign(Role::Engine, ids[0]),
            assign(Role::Interface, ids[1]),
            assign(Role::SafeMode, ids[2]),
        )
    }

    fn without_timestamp(report: &AnalysisReport) -> String {
        let mut value = serde_json::to_value(report).unwrap();
        value.as_object_mut().unwrap().remove("created_at");
        serde_json::to_string(&value).unwrap()
    }

    #[test]
    fn test_end_to_end_creative_receptive_abysmal() {
        let analyzer = Analyzer::new();
        let report = report_for(&analyzer, [1, 2, 29]);

        assert_eq!(report.version, REPORT_VERSION);
        assert_eq!(report.interactions.pair_insights.len(), 3);
        for i in 0..3 {
            assert_eq!(report.synergy.matrix[i][i], 0.0);
        }
        assert!(report.strengths.len() >= 3);
        assert!(report.risks.len() >= 3);
        for role in Role::all() {
            let a = report.interactions.affordances.for_role(role);
            assert!(!a.thrives_with.is_empty());
            assert!(!a.struggles_with.is_empty());
        }

        let ei = report.pair(RolePair::EngineInterface).unwrap();
        assert_eq!(ei.category, RelationCategory::Synergy);
        assert_eq!(ei.structure, StructuralKind::Complementary);
        assert!(ei.facts.curated_complementary && !ei.facts.sum_complementary);

        assert_eq!(report.pair(RolePair::EngineSafe).unwrap().category, RelationCategory::Tension);
        assert_eq!(report.pair(RolePair::InterfaceSafe).unwrap().category, RelationCategory::Tension);

        // Special combination sentence for 1-2-29.
        assert_eq!(report.strengths.len(), 4);
        assert_eq!(report.interactions.integration_prompts.len(), 5);
    }

    #[test]
    fn test_matrix_symmetric_for_every_triad_sample() {
        let analyzer = Analyzer::new();
        for ids in [[1, 2, 29], [34, 34, 34], [64, 1, 33], [7, 49, 12]] {
            let m = report_for(&analyzer, ids).synergy.matrix;
            for i in 0..3 {
                assert_eq!(m[i][i], 0.0);
                for j in 0..3 {
                    assert_eq!(m[i][j], m[j][i]);
                }
            }
        }
    }

    #[test]
    fn test_repeat_analysis_is_identical_except_timestamp() {
        let analyzer = Analyzer::new();
        let first = report_for(&analyzer, [3, 4, 5]);
        let second = report_for(&analyzer, [3, 4, 5]);
        assert_eq!(without_timestamp(&first), without_timestamp(&second));
    }

    #[test]
    fn test_fallbacks_for_bad_input() {
        let analyzer = Analyzer::new();
        let report = analyzer.analyze(
            RoleAssignment::unscored(Role::Engine, 0),
            RoleAssignment::new(Role::Interface, 65, 0.7),
            RoleAssignment {
                role: Role::SafeMode,
                trait_id: None,
                score: None,
            },
        );
        assert_eq!(report.engine.id, 1);
        assert_eq!(report.engine.score, 0.5);
        assert_eq!(report.interface.id, 1);
        assert_eq!(report.safe_mode.id, 1);
        assert_eq!(report.safe_mode.score, 0.5);
        assert_eq!(report.interactions.pair_insights.len(), 3);
    }

    #[test]
    fn test_created_at_serializes_as_rfc3339() {
        let report = report_for(&Analyzer::new(), [1, 2, 29]);
        let value = serde_json::to_value(&report).unwrap();
        let stamp = value["created_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
        assert_eq!(value["interactions"]["pair_insights"][0]["pair"], "engine-interface");
        assert_eq!(value["interactions"]["pair_insights"][0]["category"], "SYNERGY");
    }

    #[test]
    fn test_explain_pair_with_unknown_context() {
        let analyzer = Analyzer::new();
        let rel = analyzer.explain_pair(34, 34, "sideways");
        assert_eq!(rel.pair, None);
        assert_eq!(rel.synergy, 0.3);
        assert!(rel.summary.starts_with("Two instances of The Power of the Great"));

        let rel = analyzer.explain_pair(1, 1, "Engine_Safe");
        assert_eq!(rel.pair, Some(RolePair::EngineSafe));
        assert_eq!(rel.synergy, 0.2);
        assert_eq!(rel.category, RelationCategory::Harmony);
    }

    #[test]
    fn test_relate_and_structure_helpers() {
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.classify_structure(1, 2), StructuralKind::Complementary);
        assert_eq!(analyzer.classify_structure(99, 1), StructuralKind::Identical);
        assert_eq!(analyzer.pair_score(1, 1, RolePair::EngineSafe), 0.2);
        assert_ne!(
            analyzer.pair_score(1, 1, RolePair::EngineSafe),
            analyzer.pair_score(1, 1, RolePair::InterfaceSafe)
        );
        let rel = analyzer.relate(1, 64, RolePair::EngineSafe);
        assert_eq!(rel.category, RelationCategory::Conflict);
        assert_eq!(rel.score, 0.3);
        assert!(rel.facts.sum_complementary);
    }

    #[test]
    fn test_injected_short_keyword_taxonomy() {
        let records: Vec<TraitRecord> = (1..=TAXONOMY_SIZE as u8)
            .map(|id| TraitRecord {
                id,
                name: format!("T{id}"),
                keywords: if id % 2 == 0 { vec![] } else { vec![format!("k{id}")] },
                strength: format!("strength {id}"),
                weakness: String::new(),
                energy: "plain".to_string(),
            })
            .collect();
        let taxonomy = Arc::new(Taxonomy::from_records(records).unwrap());
        let analyzer = Analyzer::with_tables(taxonomy, Arc::new(Lexicon::standard()));

        let report = report_for(&analyzer, [2, 3, 4]);
        assert_eq!(report.engine.name, "T2");
        assert!(report.interactions.affordances.engine.thrives_with[1].contains("strength 2"));
        assert!(report
            .interactions
            .integration_prompts
            .iter()
            .all(|p| !p.is_empty()));
    }

    #[test]
    fn test_memoized_analyzer_fills_cache() {
        let analyzer = Analyzer::new().with_memoization();
        let plain = Analyzer::new();
        let a = report_for(&analyzer, [1, 2, 29]);
        let b = report_for(&plain, [1, 2, 29]);
        assert_eq!(without_timestamp(&a), without_timestamp(&b));
        assert_eq!(analyzer.cache().map(PairScoreCache::len), Some(3));

        report_for(&analyzer, [1, 2, 29]);
        assert_eq!(analyzer.cache().map(PairScoreCache::len), Some(3));
        assert!(plain.cache().is_none());
    }

    #[test]
    fn test_from_config_loads_taxonomy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traits.json");
        std::fs::write(&path, Taxonomy::builtin().to_json()).unwrap();

        let config = AnalyzerConfig {
            report_version: "2.0".to_string(),
            taxonomy_path: Some(path.to_string_lossy().into_owned()),
            memoize_pair_scores: true,
        };
        let analyzer = Analyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.version(), "2.0");
        assert!(analyzer.cache().is_some());
        assert_eq!(report_for(&analyzer, [1, 2, 29]).version, "2.0");

        let missing = AnalyzerConfig {
            taxonomy_path: Some(dir.path().join("absent.json").to_string_lossy().into_owned()),
            ..AnalyzerConfig::default()
        };
        assert!(matches!(
            Analyzer::from_config(&missing),
            Err(AnalyzerError::Taxonomy(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_analyzer() {
        let analyzer = Arc::new(Analyzer::new().with_memoization());
        let expected = without_timestamp(&report_for(&analyzer, [1, 2, 29]));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let analyzer = Arc::clone(&analyzer);
            handles.push(tokio::spawn(async move {
                without_timestamp(&report_for(&analyzer, [1, 2, 29]))
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), expected);
        }
    }
}
