//! Report types and the aggregate sections built from a resolved triad.

use super::classify::RelationCategory;
use super::lexicon::Lexicon;
use super::structure::{StructuralFacts, StructuralKind};
use super::synergy::SynergyRule;
use crate::shared::{Role, RolePair};
use crate::taxonomy::{TraitRecord, PRIMARY_KEYWORD, SECONDARY_KEYWORD, TERTIARY_KEYWORD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A role assignment echoed back after fallbacks were applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub role: Role,
    pub id: u8,
    pub name: String,
    pub score: f64,
}

/// Symmetric 3x3 matrix in [`Role::index`] order with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyMatrix {
    pub matrix: [[f64; 3]; 3],
    pub notes: String,
}

impl SynergyMatrix {
    pub(crate) fn cells_from_pairs(scores: &[(RolePair, f64)]) -> [[f64; 3]; 3] {
        let mut matrix = [[0.0; 3]; 3];
        for &(pair, score) in scores {
            let (a, b) = pair.roles();
            matrix[a.index()][b.index()] = score;
            matrix[b.index()][a.index()] = score;
        }
        matrix
    }

    pub fn get(&self, a: Role, b: Role) -> f64 {
        self.matrix[a.index()][b.index()]
    }

    /// Mean of the three off-diagonal cells.
    pub fn mean(&self) -> f64 {
        mean_off_diagonal(&self.matrix)
    }
}

pub(crate) fn mean_off_diagonal(m: &[[f64; 3]; 3]) -> f64 {
    (m[0][1] + m[0][2] + m[1][2]) / 3.0
}

/// Relationship between the traits of one role pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRelationship {
    /// None when the relationship was evaluated without a recognized role pair.
    pub pair: Option<RolePair>,
    pub category: RelationCategory,
    /// Signed synergy score.
    pub synergy: f64,
    /// Magnitude of `synergy`.
    pub score: f64,
    pub rule: SynergyRule,
    pub structure: StructuralKind,
    pub facts: StructuralFacts,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAffordance {
    pub thrives_with: Vec<String>,
    pub struggles_with: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affordances {
    pub engine: RoleAffordance,
    pub interface: RoleAffordance,
    pub safe_mode: RoleAffordance,
}

impl Affordances {
    pub fn for_role(&self, role: Role) -> &RoleAffordance {
        match role {
            Role::Engine => &self.engine,
            Role::Interface => &self.interface,
            Role::SafeMode => &self.safe_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interactions {
    pub pair_insights: Vec<PairRelationship>,
    pub affordances: Affordances,
    pub inner_conflicts: Vec<String>,
    pub integration_prompts: Vec<String>,
}

/// Full explanation of one Engine/Interface/Safe-Mode triad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub version: String,
    pub engine: RoleSummary,
    pub interface: RoleSummary,
    pub safe_mode: RoleSummary,
    pub synergy: SynergyMatrix,
    pub interactions: Interactions,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn pair(&self, pair: RolePair) -> Option<&PairRelationship> {
        self.interactions.pair_insights.iter().find(|p| p.pair == Some(pair))
    }

    pub fn role(&self, role: Role) -> &RoleSummary {
        match role {
            Role::Engine => &self.engine,
            Role::Interface => &self.interface,
            Role::SafeMode => &self.safe_mode,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The three resolved traits and their clamped role scores.
pub(crate) struct Triad<'t> {
    pub engine: &'t TraitRecord,
    pub interface: &'t TraitRecord,
    pub safe: &'t TraitRecord,
    pub scores: [f64; 3],
}

impl Triad<'_> {
    fn members(&self) -> [(&TraitRecord, f64); 3] {
        [
            (self.engine, self.scores[0]),
            (self.interface, self.scores[1]),
            (self.safe, self.scores[2]),
        ]
    }

    fn mean_score(&self) -> f64 {
        self.scores.iter().sum::<f64>() / 3.0
    }
}

pub(crate) fn strengths(t: &Triad<'_>, mean_synergy: f64, lexicon: &Lexicon) -> Vec<String> {
    let mut out = vec![
        format!("{} provides clear drive and direction", t.engine.name),
        format!("{} provides flexible coordination with other people", t.interface.name),
        format!("{} provides risk management and quality assurance", t.safe.name),
    ];
    if mean_synergy > 0.6 {
        out.push("High synergy among the three roles supports integrated judgment".to_string());
    }
    if let Some(special) = lexicon.special_combination(t.engine.id, t.interface.id, t.safe.id) {
        out.push(special.to_string());
    }
    out
}

pub(crate) fn risks(t: &Triad<'_>, mean_synergy: f64) -> Vec<String> {
    let mut out = vec![
        format!("Burnout from {} pushing too hard", t.engine.name),
        format!("Delayed decisions from {} putting harmony first", t.interface.name),
        format!("Missed opportunities from the caution of {}", t.safe.name),
    ];
    let conflict_level = (-mean_synergy).max(0.0);
    if conflict_level > 0.5 {
        out.push("Stalled decisions from conflict between the roles".to_string());
    }
    if let Some(imbalance) = imbalance(t) {
        out.push(imbalance);
    }
    out
}

/// Present when the spread between the highest and lowest role score exceeds 0.5.
fn imbalance(t: &Triad<'_>) -> Option<String> {
    let members = t.members();
    let max = t.scores.iter().copied().fold(f64::MIN, f64::max);
    let min = t.scores.iter().copied().fold(f64::MAX, f64::min);
    if max - min <= 0.5 {
        return None;
    }
    let dominant = members.iter().find(|(_, s)| *s == max)?.0;
    let weak = members.iter().find(|(_, s)| *s == min)?.0;
    Some(format!(
        "Loss of balance: \"{}\" dominates while \"{}\" is held back",
        dominant.name, weak.name
    ))
}

pub(crate) fn affordances(t: &Triad<'_>) -> Affordances {
    let (e, i, s) = (t.engine, t.interface, t.safe);
    Affordances {
        engine: RoleAffordance {
            thrives_with: vec![
                format!(
                    "Applying {} where {} can flourish",
                    e.strength,
                    i.descriptor(PRIMARY_KEYWORD)
                ),
                format!(
                    "Refining {} through {}",
                    e.descriptor(PRIMARY_KEYWORD),
                    s.descriptor(SECONDARY_KEYWORD)
                ),
                format!("A balance of freedom and discipline that lets {} run at full strength", e.energy),
            ],
            struggles_with: vec![
                format!("Situations of {} that expose {}", i.weakness_or_risk(), e.weakness_or_risk()),
                format!("{} being held back by {}", e.descriptor(SECONDARY_KEYWORD), s.energy),
                format!(
                    "Excessive {} that blocks {}",
                    s.descriptor(PRIMARY_KEYWORD),
                    e.descriptor(TERTIARY_KEYWORD)
                ),
            ],
        },
        interface: RoleAffordance {
            thrives_with: vec![
                format!(
                    "Using {} to coordinate {} with {}",
                    i.strength,
                    e.descriptor(PRIMARY_KEYWORD),
                    s.descriptor(PRIMARY_KEYWORD)
                ),
                format!(
                    "Fostering {} across the group through {}",
                    i.descriptor(TERTIARY_KEYWORD),
                    i.descriptor(SECONDARY_KEYWORD)
                ),
                format!("Cooperative settings that value {}", i.energy),
            ],
            struggles_with: vec![
                format!("Moments when {} keeps {} from coming through", i.weakness_or_risk(), e.strength),
                format!(
                    "Confusion from the contradiction between {} and {}",
                    i.descriptor(PRIMARY_KEYWORD),
                    s.descriptor(SECONDARY_KEYWORD)
                ),
                format!(
                    "Loss of {} through dissonance with {}",
                    i.descriptor(TERTIARY_KEYWORD),
                    e.energy
                ),
            ],
        },
        safe_mode: RoleAffordance {
            thrives_with: vec![
                format!("Stabilizing {} through {}", e.descriptor(TERTIARY_KEYWORD), s.strength),
                format!(
                    "Securing {} over the long term where {} is needed",
                    s.descriptor(SECONDARY_KEYWORD),
                    s.descriptor(PRIMARY_KEYWORD)
                ),
                format!("Keeping {} in check through {}", e.weakness_or_risk(), s.energy),
            ],
            struggles_with: vec![
                format!(
                    "Stagnation of {} caused by {}",
                    e.descriptor(PRIMARY_KEYWORD),
                    s.weakness_or_risk()
                ),
                format!(
                    "Confusion in {} from friction with {}",
                    s.descriptor(TERTIARY_KEYWORD),
                    i.energy
                ),
                format!("Missed chances from clinging to {}", s.descriptor(SECONDARY_KEYWORD)),
            ],
        },
    }
}

pub(crate) fn inner_conflicts(t: &Triad<'_>, lexicon: &Lexicon) -> Vec<String> {
    let (e, i, s) = (t.engine, t.interface, t.safe);
    let mut out = vec![
        format!(
            "Between {}'s \"{}\" and {}'s \"{}\": {}",
            e.name,
            e.descriptor(PRIMARY_KEYWORD),
            s.name,
            s.descriptor(PRIMARY_KEYWORD),
            lexicon.conflict_theme(&e.energy, &s.energy)
        ),
        format!(
            "{}'s \"{}\" makes it hard to pursue {} and {} at the same time",
            i.name,
            i.strength,
            e.descriptor(SECONDARY_KEYWORD),
            s.descriptor(SECONDARY_KEYWORD)
        ),
        format!(
            "Dissonance among the energy patterns {}, {} and {}",
            e.energy, i.energy, s.energy
        ),
        "Struggling to set priorities when the pull toward results collides with the need for harmony and safety"
            .to_string(),
    ];
    if (t.scores[0] - t.scores[1]).abs() > 0.3 {
        out.push("Ongoing adjustment between inner motivation and outward expression".to_string());
    }
    out
}

pub(crate) fn integration_prompts(t: &Triad<'_>) -> Vec<String> {
    let (e, i, s) = (t.engine, t.interface, t.safe);
    vec![
        format!(
            "What kind of {} environment would let your {} make the most of \"{}\"?",
            e.descriptor(TERTIARY_KEYWORD),
            e.name,
            e.strength
        ),
        format!(
            "How could {}'s \"{}\" and {}'s \"{}\" be made to reinforce each other in practice?",
            i.name,
            i.descriptor(PRIMARY_KEYWORD),
            e.name,
            e.descriptor(PRIMARY_KEYWORD)
        ),
        format!(
            "How could you draw on {}'s \"{}\" while working around {}?",
            s.name,
            s.strength,
            s.weakness_or_risk()
        ),
        "Can you name the time of day, the place and the people that bring out each of your three roles?"
            .to_string(),
        growth_direction(t.mean_score()).to_string(),
    ]
}

fn growth_direction(mean_score: f64) -> &'static str {
    if mean_score > 0.7 {
        "Your roles are already well balanced. Could sharpening the character of each one make you even more distinctive?"
    } else if mean_score > 0.4 {
        "There is room to grow. What if you deliberately sought out situations that call on your lowest-scoring role?"
    } else {
        "There is large growth potential. Start from the role you are most at home in and bring the others in step by step."
    }
}

pub(crate) fn matrix_notes(t: &Triad<'_>, mean_synergy: f64) -> String {
    if mean_synergy > 0.5 {
        format!(
            "A harmonious configuration overall: {} leads, {} coordinates and {} stabilizes in a virtuous cycle",
            t.engine.name, t.interface.name, t.safe.name
        )
    } else if mean_synergy > 0.0 {
        "A balanced configuration: each role keeps a healthy distance while doing its job".to_string()
    } else {
        "A configuration that carries tension: used as creative tension, it can become a distinctive strength"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Taxonomy;

    fn triad(t: &Taxonomy, ids: [i64; 3], scores: [f64; 3]) -> Triad<'_> {
        Triad {
            engine: t.get(ids[0]),
            interface: t.get(ids[1]),
            safe: t.get(ids[2]),
            scores,
        }
    }

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        let m = SynergyMatrix::cells_from_pairs(&[
            (RolePair::EngineInterface, 0.6),
            (RolePair::EngineSafe, -0.3),
            (RolePair::InterfaceSafe, 0.1),
        ]);
        for i in 0..3 {
            assert_eq!(m[i][i], 0.0);
            for j in 0..3 {
                assert_eq!(m[i][j], m[j][i]);
            }
        }
        assert_eq!(m[Role::Engine.index()][Role::SafeMode.index()], -0.3);
        assert!((mean_off_diagonal(&m) - 0.4 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_strength_bonuses() {
        let t = Taxonomy::builtin();
        let lex = Lexicon::standard();
        let special = triad(&t, [1, 2, 29], [0.5; 3]);
        assert_eq!(strengths(&special, 0.2, &lex).len(), 4);
        assert_eq!(strengths(&special, 0.61, &lex).len(), 5);
        let plain = triad(&t, [2, 1, 29], [0.5; 3]);
        assert_eq!(strengths(&plain, 0.6, &lex).len(), 3);
    }

    #[test]
    fn test_risk_bonuses() {
        let t = Taxonomy::builtin();
        let calm = triad(&t, [1, 2, 29], [0.5; 3]);
        assert_eq!(risks(&calm, -0.5).len(), 3);
        assert_eq!(risks(&calm, -0.51).len(), 4);

        let lopsided = triad(&t, [1, 2, 29], [0.9, 0.5, 0.3]);
        let r = risks(&lopsided, 0.0);
        assert_eq!(r.len(), 4);
        assert!(r[3].contains("\"The Creative\" dominates") && r[3].contains("\"The Abysmal\""));
    }

    #[test]
    fn test_affordances_have_three_items_per_list() {
        let t = Taxonomy::builtin();
        let a = affordances(&triad(&t, [1, 2, 29], [0.5; 3]));
        for role in Role::all() {
            let r = a.for_role(role);
            assert_eq!(r.thrives_with.len(), 3);
            assert_eq!(r.struggles_with.len(), 3);
        }
        assert!(a.engine.thrives_with[1].contains("crisis management"));
    }

    #[test]
    fn test_inner_conflicts_add_line_on_score_gap() {
        let t = Taxonomy::builtin();
        let lex = Lexicon::standard();
        let even = triad(&t, [1, 2, 29], [0.5, 0.5, 0.5]);
        let gap = triad(&t, [1, 2, 29], [0.9, 0.5, 0.5]);
        assert_eq!(inner_conflicts(&even, &lex).len(), 4);
        assert_eq!(inner_conflicts(&gap, &lex).len(), 5);
    }

    #[test]
    fn test_growth_prompt_follows_mean_score() {
        let t = Taxonomy::builtin();
        let high = integration_prompts(&triad(&t, [1, 2, 29], [0.9, 0.9, 0.9]));
        let mid = integration_prompts(&triad(&t, [1, 2, 29], [0.5, 0.5, 0.5]));
        let low = integration_prompts(&triad(&t, [1, 2, 29], [0.1, 0.1, 0.1]));
        assert_eq!(high.len(), 5);
        assert!(high[4].starts_with("Your roles are already well balanced"));
        assert!(mid[4].starts_with("There is room to grow"));
        assert!(low[4].starts_with("There is large growth potential"));
    }

    #[test]
    fn test_matrix_notes_bands() {
        let t = Taxonomy::builtin();
        let tr = triad(&t, [1, 2, 29], [0.5; 3]);
        assert!(matrix_notes(&tr, 0.51).contains("The Creative leads"));
        assert!(matrix_notes(&tr, 0.2).starts_with("A balanced configuration"));
        assert!(matrix_notes(&tr, 0.0).starts_with("A configuration that carries tension"));
    }
}
