//! Sentence templates describing one pair relationship.

use super::classify::RelationCategory;
use super::lexicon::Lexicon;
use super::structure::StructuralKind;
use super::synergy::SynergyCalculator;
use crate::shared::RolePair;
use crate::taxonomy::{TraitRecord, ENERGY_DELIMITER, PRIMARY_KEYWORD, SECONDARY_KEYWORD, TERTIARY_KEYWORD};
use serde::{Deserialize, Serialize};

/// Keyword clash family behind a tension that has no structural explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionFamily {
    Pace,
    Values,
    Timing,
    Direction,
}

impl TensionFamily {
    /// First matching family in priority order (pace, values, timing, direction).
    pub fn detect(a: &TraitRecord, b: &TraitRecord, lexicon: &Lexicon) -> Option<Self> {
        let t = &lexicon.tension;
        [
            (TensionFamily::Pace, &t.pace),
            (TensionFamily::Values, &t.values),
            (TensionFamily::Timing, &t.timing),
            (TensionFamily::Direction, &t.direction),
        ]
        .into_iter()
        .find(|(_, vocab)| vocab.names_either(&a.keywords, &b.keywords))
        .map(|(family, _)| family)
    }
}

fn facet_root(facet: &str) -> &str {
    facet.trim().trim_end_matches("-oriented")
}

fn facet_prefix(facet: &str) -> &str {
    let root = facet_root(facet);
    match root.char_indices().nth(6) {
        Some((i, _)) => &root[..i],
        None => root,
    }
}

fn facets_resemble(f1: &str, f2: &str) -> bool {
    let (r1, r2) = (facet_root(f1), facet_root(f2));
    if r1.is_empty() || r2.is_empty() {
        return false;
    }
    r1.contains(facet_prefix(f2)) || r2.contains(facet_prefix(f1))
}

fn facets(energy: &str) -> impl Iterator<Item = &str> {
    energy.split(ENERGY_DELIMITER).filter(|f| !f.trim().is_empty())
}

/// At least two facet pairings across the two energies share a six-letter stem.
pub(crate) fn have_similar_energy(e1: &str, e2: &str) -> bool {
    let matches = facets(e1)
        .flat_map(|f1| facets(e2).map(move |f2| (f1, f2)))
        .filter(|(f1, f2)| facets_resemble(f1, f2))
        .count();
    matches >= 2
}

/// Root of the first facet of `e1` that resembles a facet of `e2`.
pub(crate) fn common_energy_facet<'e>(e1: &'e str, e2: &str) -> Option<&'e str> {
    facets(e1)
        .find(|f1| facets(e2).any(|f2| facets_resemble(f1, f2)))
        .map(facet_root)
}

pub struct Narrator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Narrator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// One-sentence summary of `a` (first role) and `b` (second role).
    pub fn describe(
        &self,
        a: &TraitRecord,
        b: &TraitRecord,
        category: RelationCategory,
        kind: StructuralKind,
        pair: Option<RolePair>,
    ) -> String {
        match category {
            RelationCategory::Synergy => self.synergy(a, b, kind, pair),
            RelationCategory::Harmony => self.harmony(a, b, kind),
            RelationCategory::Tension => self.tension(a, b, kind, pair),
            RelationCategory::Conflict => self.conflict(a, b, kind, pair),
        }
    }

    fn synergy(&self, a: &TraitRecord, b: &TraitRecord, kind: StructuralKind, pair: Option<RolePair>) -> String {
        match kind {
            StructuralKind::Identical => {
                let roles = match pair {
                    Some(RolePair::EngineInterface) => {
                        "works seamlessly across the execution and coordination roles, delivering peak performance"
                    }
                    Some(RolePair::EngineSafe) => {
                        "serves as both the main drive and the safety net, sustaining stable high performance"
                    }
                    Some(RolePair::InterfaceSafe) => {
                        "serves as both coordinator and safety net, keeping everything in balance"
                    }
                    None => "produces consistently strong results across several roles",
                };
                format!("{}'s {} {}", a.name, a.strength, roles)
            }
            StructuralKind::Complementary => format!(
                "{} and {} complete each other as a complementary pair, and {} and {} amplify each other to the fullest",
                a.name,
                b.name,
                a.descriptor_or_name(PRIMARY_KEYWORD),
                b.descriptor_or_name(PRIMARY_KEYWORD)
            ),
            _ if a.energy.contains("yang") && b.energy.contains("yin") => format!(
                "{}'s {} energizes {}'s {}, striking an ideal balance of yin and yang",
                a.name,
                a.descriptor(PRIMARY_KEYWORD),
                b.name,
                b.descriptor(PRIMARY_KEYWORD)
            ),
            _ => format!(
                "{}'s {} and {}'s {} resonate and strengthen each other",
                a.name, a.strength, b.name, b.strength
            ),
        }
    }

    fn harmony(&self, a: &TraitRecord, b: &TraitRecord, kind: StructuralKind) -> String {
        match kind {
            StructuralKind::Identical => match self.lexicon.identity.harmony.first_named(&a.keywords) {
                Some(term) => format!(
                    "Two instances of {} provide a stable foundation through their shared {}",
                    a.name, term
                ),
                None => format!(
                    "Two instances of {} coexist calmly through their shared {}, keeping things stable",
                    a.name,
                    a.descriptor(PRIMARY_KEYWORD)
                ),
            },
            StructuralKind::Adjacent => format!(
                "Neighbouring {} and {} create a natural flow from {} to {}",
                a.name,
                b.name,
                a.descriptor(TERTIARY_KEYWORD),
                b.descriptor(TERTIARY_KEYWORD)
            ),
            _ if have_similar_energy(&a.energy, &b.energy) => format!(
                "{} and {} coexist calmly through a shared {} orientation",
                a.name,
                b.name,
                common_energy_facet(&a.energy, &b.energy).unwrap_or("common")
            ),
            _ => format!(
                "{}'s {} and {}'s {} respect each other in a harmonious relationship",
                a.name,
                a.descriptor(SECONDARY_KEYWORD),
                b.name,
                b.descriptor(SECONDARY_KEYWORD)
            ),
        }
    }

    fn tension(&self, a: &TraitRecord, b: &TraitRecord, kind: StructuralKind, pair: Option<RolePair>) -> String {
        match kind {
            StructuralKind::Identical => {
                if pair == Some(RolePair::EngineSafe) {
                    if self.lexicon.identity.harmony.names_any(&a.keywords) {
                        format!(
                            "Two instances of {} complement each other moderately in a stabilizing, harmonizing role",
                            a.name
                        )
                    } else {
                        format!(
                            "Two instances of {} hold a moderate tension over how to use {}, which encourages diversity",
                            a.name, a.strength
                        )
                    }
                } else {
                    format!(
                        "Two instances of {} compete over how to use {}, generating creative tension",
                        a.name, a.strength
                    )
                }
            }
            StructuralKind::Opposite => format!(
                "The opposing pair {} and {} create tension through the different directions of {} and {}",
                a.name,
                b.name,
                a.descriptor(PRIMARY_KEYWORD),
                b.descriptor(PRIMARY_KEYWORD)
            ),
            _ if SynergyCalculator::new(self.lexicon).energy_conflicting(&a.energy, &b.energy) => format!(
                "The {} energy of {} and the {} energy of {} differ at the root and need ongoing adjustment",
                a.energy, a.name, b.energy, b.name
            ),
            _ => self.relatable_tension(a, b, pair),
        }
    }

    /// Everyday phrasing of a tension, keyed by role pair and clash family.
    pub fn relatable_tension(&self, a: &TraitRecord, b: &TraitRecord, pair: Option<RolePair>) -> String {
        let family = TensionFamily::detect(a, b, self.lexicon);
        let (n1, n2) = (&a.name, &b.name);
        let k1 = a.descriptor(PRIMARY_KEYWORD);
        let k2 = b.descriptor(PRIMARY_KEYWORD);

        match (pair, family) {
            (Some(RolePair::EngineInterface), Some(TensionFamily::Pace)) => {
                format!("{n1}'s {k1} and {n2}'s {k2}: it is often hard to decide whose pace comes first")
            }
            (Some(RolePair::EngineInterface), Some(TensionFamily::Values)) => {
                format!("{n1} puts {k1} first while {n2} puts {k2} first, so settling on a course takes time")
            }
            (Some(RolePair::EngineInterface), Some(TensionFamily::Timing)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} read the timing differently and need coordination")
            }
            (Some(RolePair::EngineInterface), Some(TensionFamily::Direction)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} aim in different directions, which can be disorienting")
            }
            (Some(RolePair::EngineInterface), None) => {
                format!("{n1}'s {k1} and {n2}'s {k2} approach things differently, which easily breeds hesitation")
            }

            (Some(RolePair::EngineSafe), Some(TensionFamily::Pace)) => {
                format!("You want to push ahead with {n1}'s {k1}, yet {n2}'s {k2} matters too, so setting the speed is a struggle")
            }
            (Some(RolePair::EngineSafe), Some(TensionFamily::Values)) => {
                format!("The urge toward {n1}'s {k1} and the care for {n2}'s {k2} both refuse to give way")
            }
            (Some(RolePair::EngineSafe), Some(TensionFamily::Timing)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} leave you caught between the long view and short-term judgment")
            }
            (Some(RolePair::EngineSafe), Some(TensionFamily::Direction)) => {
                format!("Attack with {n1}'s {k1} or defend with {n2}'s {k2}? The choice is often unclear")
            }
            (Some(RolePair::EngineSafe), None) => {
                format!("{n1}'s {k1} and {n2}'s {k2} often leave you torn between ideal and reality")
            }

            (Some(RolePair::InterfaceSafe), Some(TensionFamily::Pace)) => {
                format!("Coordinating through {n1}'s {k1} or stabilizing through {n2}'s {k2}: picking a priority is hard")
            }
            (Some(RolePair::InterfaceSafe), Some(TensionFamily::Values)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} make it hard to weigh relationships against safety")
            }
            (Some(RolePair::InterfaceSafe), Some(TensionFamily::Timing)) => {
                format!("Change through {n1}'s {k1} and preservation through {n2}'s {k2} rarely line up in time")
            }
            (Some(RolePair::InterfaceSafe), Some(TensionFamily::Direction)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} make it confusing to know when to open up and when to stay careful")
            }
            (Some(RolePair::InterfaceSafe), None) => {
                format!("{n1}'s {k1} and {n2}'s {k2} take some ingenuity to keep in harmony")
            }

            (None, Some(TensionFamily::Pace)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} move at different paces, so coordination takes time")
            }
            (None, Some(TensionFamily::Values)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} hold different values, which makes the direction hard to settle")
            }
            (None, Some(TensionFamily::Timing)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} sense time differently, which makes timing difficult")
            }
            (None, Some(TensionFamily::Direction)) => {
                format!("{n1}'s {k1} and {n2}'s {k2} pursue different goals, which breeds hesitation")
            }
            (None, None) => {
                format!("{n1}'s {k1} and {n2}'s {k2} are still searching for a way to use their differences")
            }
        }
    }

    fn conflict(&self, a: &TraitRecord, b: &TraitRecord, kind: StructuralKind, pair: Option<RolePair>) -> String {
        if kind == StructuralKind::Identical {
            let outcome = match pair {
                Some(RolePair::EngineInterface) => {
                    "shows up in both the execution and coordination roles, disrupting the whole system"
                }
                Some(RolePair::EngineSafe) => {
                    "shows up in both the main drive and the safety net, creating a serious vulnerability"
                }
                Some(RolePair::InterfaceSafe) => {
                    "shows up in both the coordinator and the safety net, causing confusion that is hard to recover from"
                }
                None => "shows up in several roles at once and compounds destructively",
            };
            return format!("{}'s {} {}", a.name, a.weakness_or_risk(), outcome);
        }

        if a.weakness == b.weakness {
            format!(
                "{} and {} amplify each other's problems through their shared weakness, \"{}\"",
                a.name,
                b.name,
                a.weakness_or_risk()
            )
        } else if self.directly_opposing(a, b) {
            format!(
                "{}'s {} and {}'s {} collide head-on in a conflict that is hard to resolve",
                a.name,
                a.descriptor_or_name(PRIMARY_KEYWORD),
                b.name,
                b.descriptor_or_name(PRIMARY_KEYWORD)
            )
        } else {
            format!(
                "{}'s {} and {}'s {} feed each other in a destructive relationship",
                a.name,
                a.weakness_or_risk(),
                b.name,
                b.weakness_or_risk()
            )
        }
    }

    /// Keywords carry directly opposing concepts (creation/destruction, opening/blockage, ...).
    pub fn directly_opposing(&self, a: &TraitRecord, b: &TraitRecord) -> bool {
        self.lexicon
            .opposing_concepts
            .iter()
            .any(|c| c.matches_keywords(&a.keywords, &b.keywords))
    }
}
