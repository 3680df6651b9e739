//! Position-based relationships between two taxonomy ids.

use super::lexicon::Lexicon;
use serde::{Deserialize, Serialize};

/// Precedence-resolved structural relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralKind {
    Identical,
    Adjacent,
    Complementary,
    Opposite,
    Unrelated,
}

impl StructuralKind {
    pub fn label(&self) -> &'static str {
        match self {
            StructuralKind::Identical => "identical",
            StructuralKind::Adjacent => "adjacent",
            StructuralKind::Complementary => "complementary",
            StructuralKind::Opposite => "opposite",
            StructuralKind::Unrelated => "unrelated",
        }
    }
}

/// Every structural check for a pair, kept side by side.
///
/// Two notions of "complementary" exist and are never reconciled: the numeric
/// `sum_complementary` (ids add to 65) drives scoring, while the curated table
/// drives [`StructuralKind`] and narrative phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralFacts {
    pub identical: bool,
    pub adjacent: bool,
    pub sum_complementary: bool,
    pub curated_complementary: bool,
    pub curated_opposite: bool,
    pub numeric_opposite: bool,
}

impl StructuralFacts {
    /// identical > curated complementary > curated opposite > adjacent > unrelated.
    pub fn kind(&self) -> StructuralKind {
        if self.identical {
            StructuralKind::Identical
        } else if self.curated_complementary {
            StructuralKind::Complementary
        } else if self.curated_opposite {
            StructuralKind::Opposite
        } else if self.adjacent {
            StructuralKind::Adjacent
        } else {
            StructuralKind::Unrelated
        }
    }
}

pub struct StructureDetector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> StructureDetector<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn facts(&self, a: u8, b: u8) -> StructuralFacts {
        let diff = a.abs_diff(b);
        StructuralFacts {
            identical: a == b,
            adjacent: diff == 1,
            sum_complementary: u16::from(a) + u16::from(b) == 65,
            curated_complementary: self.lexicon.is_curated_complementary(a, b),
            curated_opposite: self.lexicon.is_curated_opposite(a, b),
            numeric_opposite: diff == 32,
        }
    }

    pub fn classify(&self, a: u8, b: u8) -> StructuralKind {
        self.facts(a, b).kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precedence() {
        let lex = Lexicon::standard();
        let d = StructureDetector::new(&lex);
        assert_eq!(d.classify(7, 7), StructuralKind::Identical);
        // Listed as both complementary and opposite; complementary wins.
        assert_eq!(d.classify(1, 2), StructuralKind::Complementary);
        assert_eq!(d.classify(30, 29), StructuralKind::Opposite);
        // Adjacent numerically but curated as complementary.
        assert_eq!(d.classify(11, 12), StructuralKind::Complementary);
        assert_eq!(d.classify(5, 6), StructuralKind::Adjacent);
        assert_eq!(d.classify(1, 29), StructuralKind::Unrelated);
    }

    #[test]
    fn test_both_complementary_notions_are_reported() {
        let lex = Lexicon::standard();
        let d = StructureDetector::new(&lex);

        let f = d.facts(1, 2);
        assert!(f.curated_complementary);
        assert!(!f.sum_complementary);

        let g = d.facts(1, 64);
        assert!(g.sum_complementary);
        assert!(!g.curated_complementary);
        assert_eq!(g.kind(), StructuralKind::Unrelated);
    }

    #[test]
    fn test_numeric_opposite() {
        let lex = Lexicon::standard();
        let d = StructureDetector::new(&lex);
        assert!(d.facts(1, 33).numeric_opposite);
        assert!(d.facts(40, 8).numeric_opposite);
        assert!(!d.facts(1, 32).numeric_opposite);
    }
}
