use serde::{Deserialize, Serialize};

/// Ordinal relationship category derived from a synergy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationCategory {
    Conflict,
    Tension,
    Harmony,
    Synergy,
}

impl RelationCategory {
    pub const SYNERGY_FLOOR: f64 = 0.6;
    pub const HARMONY_FLOOR: f64 = 0.2;
    pub const TENSION_FLOOR: f64 = -0.2;

    /// Lower-inclusive bands: `>= 0.6` synergy, `>= 0.2` harmony, `>= -0.2` tension.
    pub fn from_score(score: f64) -> Self {
        if score >= Self::SYNERGY_FLOOR {
            RelationCategory::Synergy
        } else if score >= Self::HARMONY_FLOOR {
            RelationCategory::Harmony
        } else if score >= Self::TENSION_FLOOR {
            RelationCategory::Tension
        } else {
            RelationCategory::Conflict
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RelationCategory::Synergy => "SYNERGY",
            RelationCategory::Harmony => "HARMONY",
            RelationCategory::Tension => "TENSION",
            RelationCategory::Conflict => "CONFLICT",
        }
    }
}
