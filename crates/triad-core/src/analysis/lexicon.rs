//! Vocabulary tables consulted by the scorer and narrator.
//!
//! A [`Lexicon`] is a plain value: build it once (usually [`Lexicon::standard`]) and share it.
//! Two match modes appear throughout:
//!
//! - **touch**: some keyword *contains* some term (substring)
//! - **name**: some keyword *equals* some term (exact)

use serde::{Deserialize, Serialize};

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

/// A flat list of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocab(pub Vec<String>);

impl Vocab {
    pub fn new(terms: &[&str]) -> Self {
        Self(owned(terms))
    }

    /// True when some keyword contains some term.
    pub fn touches(&self, keywords: &[String]) -> bool {
        keywords
            .iter()
            .any(|k| self.0.iter().any(|t| k.contains(t.as_str())))
    }

    /// True when some keyword equals some term.
    pub fn names_any(&self, keywords: &[String]) -> bool {
        self.first_named(keywords).is_some()
    }

    /// First keyword (in keyword order) that equals a term.
    pub fn first_named<'k>(&self, keywords: &'k [String]) -> Option<&'k str> {
        keywords
            .iter()
            .find(|k| self.0.iter().any(|t| t == *k))
            .map(String::as_str)
    }

    /// True when `text` contains some term.
    pub fn found_in(&self, text: &str) -> bool {
        self.0.iter().any(|t| text.contains(t.as_str()))
    }

    /// A vocabulary holding this one's terms followed by `extra`.
    pub fn extended(&self, extra: &[&str]) -> Self {
        let mut terms = self.0.clone();
        terms.extend(owned(extra));
        Self(terms)
    }
}

/// Two vocabularies that stand in relation to each other (reinforcing, clashing, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabPair {
    pub left: Vocab,
    pub right: Vocab,
}

impl VocabPair {
    pub fn new(left: &[&str], right: &[&str]) -> Self {
        Self {
            left: Vocab::new(left),
            right: Vocab::new(right),
        }
    }

    /// `a` touches the left side and `b` touches the right side.
    pub fn touches_directed(&self, a: &[String], b: &[String]) -> bool {
        self.left.touches(a) && self.right.touches(b)
    }

    pub fn touches_either(&self, a: &[String], b: &[String]) -> bool {
        self.touches_directed(a, b) || self.touches_directed(b, a)
    }

    /// One text holds a left term while the other holds a right term.
    pub fn found_across(&self, t1: &str, t2: &str) -> bool {
        (self.left.found_in(t1) && self.right.found_in(t2))
            || (self.left.found_in(t2) && self.right.found_in(t1))
    }

    /// One side names the left vocabulary and the other names the right, in either order.
    pub fn names_either(&self, a: &[String], b: &[String]) -> bool {
        (self.left.names_any(a) && self.right.names_any(b))
            || (self.left.names_any(b) && self.right.names_any(a))
    }
}

/// Two substrings that, found one in each text, signal a relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPair(pub String, pub String);

impl TermPair {
    pub fn new(first: &str, second: &str) -> Self {
        Self(first.to_string(), second.to_string())
    }

    /// Either text holds the first term while the other holds the second.
    pub fn matches_text(&self, t1: &str, t2: &str) -> bool {
        (t1.contains(self.0.as_str()) && t2.contains(self.1.as_str()))
            || (t1.contains(self.1.as_str()) && t2.contains(self.0.as_str()))
    }

    /// Some keyword pair across the two sequences matches.
    pub fn matches_keywords(&self, a: &[String], b: &[String]) -> bool {
        a.iter()
            .any(|k1| b.iter().any(|k2| self.matches_text(k1, k2)))
    }
}

/// A strength cue whose presence relieves a specific weakness in the partner trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefPair {
    pub strength_cue: String,
    pub weakness: String,
}

impl ReliefPair {
    pub fn new(strength_cue: &str, weakness: &str) -> Self {
        Self {
            strength_cue: strength_cue.to_string(),
            weakness: weakness.to_string(),
        }
    }

    /// `strength` carries the cue and `weakness` carries the relieved weakness.
    pub fn relieves(&self, strength: &str, weakness: &str) -> bool {
        strength.contains(self.strength_cue.as_str()) && weakness.contains(self.weakness.as_str())
    }
}

/// A curated Engine/Interface/Safe-Mode id triple with its own strength sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCombination {
    pub ids: [u8; 3],
    pub description: String,
}

/// Inner-conflict theme chosen when the engine energy carries `engine_facet`
/// and the safe-mode energy carries `safe_facet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictTheme {
    pub engine_facet: String,
    pub safe_facet: String,
    pub theme: String,
}

/// Keyword buckets for scoring a trait paired with itself. Matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityVocab {
    pub decisive: Vocab,
    pub introspective: Vocab,
    pub ideal: Vocab,
    pub harmony: Vocab,
    pub driving: Vocab,
    pub adjusting: Vocab,
    pub extreme: Vocab,
}

/// Keyword clash families used to phrase tension. Matched exactly, in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensionVocab {
    pub pace: VocabPair,
    pub values: VocabPair,
    pub timing: VocabPair,
    pub direction: VocabPair,
}

/// All static tables the engine consults besides the taxonomy itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub complementary_pairs: Vec<(u8, u8)>,
    pub opposite_pairs: Vec<(u8, u8)>,
    pub keyword_synergies: Vec<VocabPair>,
    pub compatible_energy: Vec<TermPair>,
    pub balancing_energy: Vec<TermPair>,
    pub conflicting_energy: Vec<VocabPair>,
    pub execution_clusters: Vec<VocabPair>,
    pub healthy_complements: Vec<VocabPair>,
    pub stressful_complements: Vec<VocabPair>,
    pub balanced_pairs: Vec<VocabPair>,
    pub relief_pairs: Vec<ReliefPair>,
    pub shared_weaknesses: Vocab,
    pub identity: IdentityVocab,
    pub tension: TensionVocab,
    pub opposing_concepts: Vec<TermPair>,
    pub conflict_themes: Vec<ConflictTheme>,
    pub default_conflict_theme: String,
    pub special_combinations: Vec<SpecialCombination>,
}

fn unordered_contains(pairs: &[(u8, u8)], a: u8, b: u8) -> bool {
    pairs
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

impl Lexicon {
    pub fn is_curated_complementary(&self, a: u8, b: u8) -> bool {
        unordered_contains(&self.complementary_pairs, a, b)
    }

    pub fn is_curated_opposite(&self, a: u8, b: u8) -> bool {
        unordered_contains(&self.opposite_pairs, a, b)
    }

    /// Strength sentence for an exact Engine-Interface-Safe id triple, if curated.
    pub fn special_combination(&self, engine: u8, interface: u8, safe_mode: u8) -> Option<&str> {
        self.special_combinations
            .iter()
            .find(|c| c.ids == [engine, interface, safe_mode])
            .map(|c| c.description.as_str())
    }

    /// First theme whose facets appear in the given energies, else the default theme.
    pub fn conflict_theme(&self, engine_energy: &str, safe_energy: &str) -> &str {
        self.conflict_themes
            .iter()
            .find(|t| {
                engine_energy.contains(t.engine_facet.as_str())
                    && safe_energy.contains(t.safe_facet.as_str())
            })
            .map(|t| t.theme.as_str())
            .unwrap_or(&self.default_conflict_theme)
    }

    /// The tables shipped with the crate, matched against the built-in taxonomy wording.
    pub fn standard() -> Self {
        let decisive = Vocab::new(&["decisiveness", "execution", "assertiveness", "great strength", "might"]);
        let driving = decisive.extended(&["creative power", "leadership", "driving force"]);

        Self {
            complementary_pairs: vec![
                (1, 2), (3, 50), (11, 12), (13, 14), (31, 32),
                (41, 42), (43, 44), (53, 54), (61, 62), (63, 64),
            ],
            opposite_pairs: vec![(1, 2), (29, 30), (51, 57), (52, 58)],
            keyword_synergies: vec![
                VocabPair::new(&["creative power", "leadership"], &["great strength", "might", "assertiveness"]),
                VocabPair::new(&["decisiveness", "execution"], &["capacity for action", "valor"]),
                VocabPair::new(&["education", "guidance"], &["learning", "enlightenment"]),
                VocabPair::new(&["embracing capacity", "flexible nature"], &["harmony", "cooperation"]),
                VocabPair::new(&["introspection", "caution at the brink"], &["deep insight", "meditation"]),
                VocabPair::new(&["transformation", "innovation"], &["renewal", "reform"]),
                VocabPair::new(&["abundance", "prosperity"], &["success", "integration"]),
                VocabPair::new(&["persistence", "continuity"], &["permanence", "constancy"]),
                VocabPair::new(&["brightness", "illumination"], &["civilization", "wisdom"]),
                VocabPair::new(&["vitality", "vigor"], &["stimulation", "motive force"]),
            ],
            compatible_energy: vec![
                TermPair::new("yang", "yang"),
                TermPair::new("assertive", "assertive"),
                TermPair::new("upward-oriented", "growth-oriented"),
                TermPair::new("learning", "growing"),
                TermPair::new("radiating", "illuminating"),
                TermPair::new("fluid", "adaptive"),
                TermPair::new("yin", "yin"),
                TermPair::new("passive", "stability-oriented"),
                TermPair::new("inward-oriented", "depth-oriented"),
                TermPair::new("meditation-oriented", "still"),
            ],
            balancing_energy: vec![TermPair::new("yang", "yin")],
            conflicting_energy: vec![
                VocabPair::new(&["assertive"], &["passive"]),
                VocabPair::new(&["yang"], &["yin"]),
                VocabPair::new(&["outward"], &["inward"]),
                VocabPair::new(&["upward"], &["downward"]),
                VocabPair::new(&["radiating"], &["converging"]),
                // Anything in motion, including being moved, clashes with stillness.
                VocabPair::new(&["dynamic", "passive", "fluid", "active", "immovable", "moving"], &["still"]),
            ],
            execution_clusters: vec![
                VocabPair::new(
                    &["creative power", "leadership", "decisiveness"],
                    &["great strength", "might", "capacity for action", "assertiveness"],
                ),
                VocabPair::new(&["education", "guidance", "learning"], &["enlightenment", "growth", "development"]),
                VocabPair::new(&["harmony", "cooperation", "embracing"], &["flexib", "receptiv", "adapt"]),
                VocabPair::new(&["persistence", "continuity", "stability"], &["constancy", "permanence", "maintenance"]),
                VocabPair::new(&["transformation", "renewal", "innovation"], &["reform", "breakthrough", "pioneering"]),
            ],
            healthy_complements: vec![
                VocabPair::new(&["decisiveness", "execution"], &["caution", "introspection", "deep insight"]),
                VocabPair::new(&["assertive", "outward"], &["passive", "inward", "tranquil"]),
                VocabPair::new(&["creative", "renewal"], &["stability", "maintenance", "conservat"]),
                VocabPair::new(&["swift", "instant"], &["slow", "persistence", "continuity"]),
            ],
            stressful_complements: vec![
                VocabPair::new(
                    &["decisiveness", "execution", "creative power", "completion"],
                    &["unfinished", "continuity", "eternal", "infinite"],
                ),
                VocabPair::new(
                    &["stability", "maintenance", "conservat", "immovab"],
                    &["transformation", "renewal", "revolution", "destruction"],
                ),
                VocabPair::new(
                    &["introspection", "meditation", "tranquil", "solitude"],
                    &["interaction", "social", "opening", "diffusion"],
                ),
                VocabPair::new(
                    &["perfection", "precision", "strictness", "discipline"],
                    &["flexib", "casual", "ambigu", "freedom"],
                ),
            ],
            balanced_pairs: vec![
                VocabPair::new(&["learning", "growth", "development"], &["stability", "maintenance", "protection"]),
                VocabPair::new(&["flexib", "adapt", "adjustment"], &["discipline", "order", "structure"]),
                VocabPair::new(&["opening", "expansion", "expression"], &["convergence", "focus", "introspection"]),
                VocabPair::new(&["intuition", "sensitivity", "creative"], &["logic", "analysis", "caution"]),
            ],
            relief_pairs: vec![
                ReliefPair::new("decisiveness", "lack of initiative"),
                ReliefPair::new("harmony", "prone to arrogance"),
                ReliefPair::new("accumulating knowledge", "misjudgment from inexperience"),
                ReliefPair::new("waiting for the right moment", "failure from overeagerness"),
                ReliefPair::new("deep insight", "missed opportunities from delayed action"),
                ReliefPair::new("flexible responsiveness", "anxiety about completion"),
            ],
            shared_weaknesses: Vocab::new(&["anxiety", "confusion", "stagnation", "failure", "lack of"]),
            identity: IdentityVocab {
                decisive,
                introspective: Vocab::new(&["introspection", "caution", "deep insight", "meditation"]),
                ideal: Vocab::new(&["perfection", "ideal", "zenith"]),
                harmony: Vocab::new(&[
                    "harmony", "cooperation", "stability", "peace",
                    "receptivity", "embracing capacity", "flexible nature",
                ]),
                driving,
                adjusting: Vocab::new(&[
                    "flexible nature", "adaptation", "adjustment", "balance",
                    "embracing capacity", "receptivity",
                ]),
                extreme: Vocab::new(&["extremity", "excess", "intensification"]),
            },
            tension: TensionVocab {
                pace: VocabPair::new(
                    &[
                        "great strength", "might", "assertiveness", "valor", "shock", "liveliness",
                        "decision", "judgment", "bravery", "attack", "thunder", "lightning",
                    ],
                    &[
                        "moderation", "caution", "temperance", "introspection", "meditation",
                        "quiet observation", "endurance", "waiting", "preparation", "observation",
                        "insight", "humility", "step by step", "steady",
                    ],
                ),
                values: VocabPair::new(
                    &[
                        "individual", "independence", "freedom", "creation", "leadership",
                        "self-reliance", "initiative", "originality", "self-assertion",
                    ],
                    &[
                        "solidarity", "cooperation", "integration", "harmony", "gathering",
                        "rallying", "affinity", "collaboration", "comrades", "reconciliation",
                        "embracing", "receptivity",
                    ],
                ),
                timing: VocabPair::new(
                    &[
                        "innovation", "transformation", "renewal", "reform", "decay", "regeneration",
                        "responding to change", "reforming power", "new order", "reorganization",
                        "awakening", "change", "progress",
                    ],
                    &[
                        "stability", "maintenance", "constancy", "permanence", "persistence",
                        "continuity", "immutability", "conservatism", "status quo", "endurance",
                        "steadiness", "sustained", "lasting",
                    ],
                ),
                direction: VocabPair::new(
                    &[
                        "ascent", "development", "improvement", "progress", "growth", "advancement",
                        "promotion", "diffusion", "liberation", "dispersal", "clarity", "illumination",
                        "outwardness",
                    ],
                    &[
                        "latency", "retreat", "inwardness", "convergence", "strategic withdrawal",
                        "self-preservation", "seclusion", "introspection", "deep insight", "depth",
                        "blockage", "severance", "temperance", "restriction",
                    ],
                ),
            },
            opposing_concepts: vec![
                TermPair::new("creat", "destruct"),
                TermPair::new("integration", "separation"),
                TermPair::new("advance", "regress"),
                TermPair::new("opening", "blockage"),
                TermPair::new("brightness", "darkness"),
            ],
            conflict_themes: vec![
                ConflictTheme {
                    engine_facet: "assertive".into(),
                    safe_facet: "passive".into(),
                    theme: "a conflict rooted in fundamentally different speeds of action".into(),
                },
                ConflictTheme {
                    engine_facet: "outward".into(),
                    safe_facet: "inward".into(),
                    theme: "an inner split from pulling in different directions".into(),
                },
                ConflictTheme {
                    engine_facet: "upward".into(),
                    safe_facet: "stability".into(),
                    theme: "a conflict between growth and maintenance".into(),
                },
            ],
            default_conflict_theme: "difficulty reconciling qualitatively different energies".into(),
            special_combinations: vec![
                SpecialCombination {
                    ids: [1, 2, 29],
                    description: "Creation and receptivity, deepened by introspection, yield unusually deep insight".into(),
                },
                SpecialCombination {
                    ids: [3, 4, 5],
                    description: "Sustained development carried by a rhythm that moves from starting through growing into patient waiting".into(),
                },
            ],
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}
