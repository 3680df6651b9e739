//! triad-core: trait taxonomy, role-pair synergy scoring, and relationship reports.
//!
//! Three role slots (Engine, Interface, Safe-Mode) each hold one of 64 taxonomy traits.
//! The [`Analyzer`] scores every role pair, classifies and describes the relationship,
//! and assembles an [`AnalysisReport`] with strengths, risks, affordances, and prompts.

mod analysis;
mod error;
mod shared;
mod taxonomy;

// Shared types and configuration
pub use shared::{
    AnalyzerConfig, Role, RoleAssignment, RolePair, DEFAULT_CONFIG_PATH, DEFAULT_ROLE_SCORE,
    DEFAULT_TRAIT_ID, REPORT_VERSION,
};

// Errors (construction time only; analysis itself never fails)
pub use error::{AnalyzerError, TaxonomyError};

// Taxonomy store
pub use taxonomy::{
    pick_descriptor, Taxonomy, TraitRecord, PRIMARY_KEYWORD, SECONDARY_KEYWORD, TAXONOMY_SIZE,
    TERTIARY_KEYWORD,
};

// Analysis engine
pub use analysis::{
    AnalysisReport, Analyzer, Affordances, IdentityVocab, Interactions, Lexicon, Narrator,
    PairRelationship, PairScoreCache, RelationCategory, ReliefPair, RoleAffordance, RoleSummary,
    SpecialCombination, StructuralFacts, StructuralKind, StructureDetector, SynergyCalculator,
    SynergyMatrix, SynergyRule, SynergyVerdict, TensionFamily, TensionVocab, TermPair, Vocab,
    VocabPair, ConflictTheme,
};
