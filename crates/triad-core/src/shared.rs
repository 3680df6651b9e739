//! Shared types used across the triad engine: roles, role pairs, assignments, and config.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Trait id substituted when an assignment has no id or an id outside the taxonomy.
pub const DEFAULT_TRAIT_ID: u8 = 1;

/// Role score substituted when an assignment carries no usable score.
pub const DEFAULT_ROLE_SCORE: f64 = 0.5;

/// Schema version stamped on every report unless configuration overrides it.
pub const REPORT_VERSION: &str = "1.1";

/// One of the three fixed role slots a trait can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Primary drive: what the person pursues.
    Engine,
    /// Outward coordination: how the person deals with others.
    Interface,
    /// Fallback under stress: how the person protects itself.
    SafeMode,
}

impl Role {
    /// Human-readable label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Engine => "Engine",
            Role::Interface => "Interface",
            Role::SafeMode => "Safe-Mode",
        }
    }

    /// Row/column of this role in the synergy matrix.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Role::Engine => 0,
            Role::Interface => 1,
            Role::SafeMode => 2,
        }
    }

    /// Returns all roles in matrix order.
    pub fn all() -> [Self; 3] {
        [Role::Engine, Role::Interface, Role::SafeMode]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of role pairs a relationship is evaluated in.
///
/// The first role of the pair is the "A" side of every directional computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RolePair {
    EngineInterface,
    EngineSafe,
    InterfaceSafe,
}

impl RolePair {
    pub fn as_str(&self) -> &'static str {
        match self {
            RolePair::EngineInterface => "engine-interface",
            RolePair::EngineSafe => "engine-safe",
            RolePair::InterfaceSafe => "interface-safe",
        }
    }

    /// Parses a role-pair name. Accepts `-`, `_`, `x`, or `×` between the two roles and
    /// `safe-mode`/`safemode` for the safe side. Returns None for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .replace("safe-mode", "safe")
            .replace("safe_mode", "safe")
            .replace("safemode", "safe")
            .chars()
            .map(|c| match c {
                '_' | '×' | ' ' => '-',
                other => other,
            })
            .collect();
        match normalized.as_str() {
            "engine-interface" | "enginexinterface" => Some(RolePair::EngineInterface),
            "engine-safe" | "enginexsafe" => Some(RolePair::EngineSafe),
            "interface-safe" | "interfacexsafe" => Some(RolePair::InterfaceSafe),
            _ => None,
        }
    }

    /// The two roles of this pair, in evaluation order.
    pub fn roles(&self) -> (Role, Role) {
        match self {
            RolePair::EngineInterface => (Role::Engine, Role::Interface),
            RolePair::EngineSafe => (Role::Engine, Role::SafeMode),
            RolePair::InterfaceSafe => (Role::Interface, Role::SafeMode),
        }
    }

    /// Returns all role pairs in report order.
    pub fn all() -> [Self; 3] {
        [
            RolePair::EngineInterface,
            RolePair::EngineSafe,
            RolePair::InterfaceSafe,
        ]
    }
}

impl fmt::Display for RolePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input from the upstream questionnaire: which trait fills a role and how strongly.
///
/// Both fields are optional on the wire; missing or unusable values are replaced by
/// [`DEFAULT_TRAIT_ID`] and [`DEFAULT_ROLE_SCORE`] at analysis time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: Role,
    #[serde(default, alias = "traitId", alias = "hexagram_id")]
    pub trait_id: Option<i64>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl RoleAssignment {
    pub fn new(role: Role, trait_id: i64, score: f64) -> Self {
        Self {
            role,
            trait_id: Some(trait_id),
            score: Some(score),
        }
    }

    /// Assignment with a trait id and no score (score falls back to the default).
    pub fn unscored(role: Role, trait_id: i64) -> Self {
        Self {
            role,
            trait_id: Some(trait_id),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Score clamped to [0, 1]; absent or NaN scores resolve to [`DEFAULT_ROLE_SCORE`].
    pub fn resolved_score(&self) -> f64 {
        match self.score {
            Some(s) if s.is_finite() => s.clamp(0.0, 1.0),
            _ => DEFAULT_ROLE_SCORE,
        }
    }
}

/// Engine configuration. Load from TOML or env.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Schema version stamped on reports.
    pub report_version: String,
    /// Optional JSON file holding a substitute 64-record taxonomy. None = built-in table.
    #[serde(default)]
    pub taxonomy_path: Option<String>,
    /// If true, pairwise scores are memoized by (id A, id B, role pair) across reports.
    #[serde(default)]
    pub memoize_pair_scores: bool,
}

/// Config file read when `TRIAD_CONFIG` is unset. The extension selects the format.
pub const DEFAULT_CONFIG_PATH: &str = "config/triad.toml";

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_version: REPORT_VERSION.to_string(),
            taxonomy_path: None,
            memoize_pair_scores: false,
        }
    }
}

impl AnalyzerConfig {
    /// Load config from file and environment. Precedence: env `TRIAD__*` > file named by
    /// `TRIAD_CONFIG` (default [`DEFAULT_CONFIG_PATH`]) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("TRIAD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load config from the given file (skipped if it does not exist), then environment.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("report_version", REPORT_VERSION)?
            .set_default("memoize_pair_scores", false)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("TRIAD").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}
