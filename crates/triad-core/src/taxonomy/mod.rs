//! Taxonomy store: the immutable table of 64 trait records.
//!
//! | Field      | Meaning                                                        |
//! |------------|----------------------------------------------------------------|
//! | `id`       | Stable key 1..=64; numeric distance and sum carry meaning       |
//! | `keywords` | Short descriptors, most salient first (may be shorter than 3)   |
//! | `strength` | Primary positive capability                                     |
//! | `weakness` | Primary failure mode                                            |
//! | `energy`   | 2–3 facets joined by `/`, matched by substring                  |

mod builtin;

use crate::error::TaxonomyError;
use crate::shared::DEFAULT_TRAIT_ID;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Number of records every taxonomy must hold.
pub const TAXONOMY_SIZE: usize = 64;

/// Keyword priority lists for [`pick_descriptor`], most specific index first.
pub const PRIMARY_KEYWORD: &[usize] = &[0];
pub const SECONDARY_KEYWORD: &[usize] = &[1, 0];
pub const TERTIARY_KEYWORD: &[usize] = &[2, 1, 0];

/// Delimiter between facets of an `energy` descriptor.
pub(crate) const ENERGY_DELIMITER: char = '/';

/// One of the 64 archetypes. Immutable once loaded into a [`Taxonomy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRecord {
    pub id: u8,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub strength: String,
    pub weakness: String,
    pub energy: String,
}

impl TraitRecord {
    /// First keyword present at one of the `priority` indices, else `strength`.
    #[inline]
    pub fn descriptor(&self, priority: &[usize]) -> &str {
        pick_descriptor(&self.keywords, priority, &self.strength)
    }

    /// Like [`Self::descriptor`] but falls back to the trait name instead of the strength.
    #[inline]
    pub fn descriptor_or_name(&self, priority: &[usize]) -> &str {
        pick_descriptor(&self.keywords, priority, &self.name)
    }

    /// Iterates the facets of the energy descriptor.
    pub fn energy_facets(&self) -> impl Iterator<Item = &str> {
        self.energy
            .split(ENERGY_DELIMITER)
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }

    /// Weakness text, or "risk" when the record leaves it blank.
    pub fn weakness_or_risk(&self) -> &str {
        if self.weakness.trim().is_empty() {
            "risk"
        } else {
            &self.weakness
        }
    }
}

/// Returns the keyword at the first index in `priority` that exists and is non-empty,
/// falling back to `fallback` when none does. Never panics on short sequences.
pub fn pick_descriptor<'a>(keywords: &'a [String], priority: &[usize], fallback: &'a str) -> &'a str {
    priority
        .iter()
        .filter_map(|&i| keywords.get(i))
        .map(String::as_str)
        .find(|k| !k.trim().is_empty())
        .unwrap_or(fallback)
}

/// Validated, read-only table of exactly 64 trait records ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    records: Vec<TraitRecord>,
}

impl Taxonomy {
    /// The standard 64-trait table shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            records: builtin::records(),
        }
    }

    /// Validates and orders a substitute table. Ids must be exactly 1..=64 with no gaps.
    pub fn from_records(mut records: Vec<TraitRecord>) -> Result<Self, TaxonomyError> {
        if records.len() != TAXONOMY_SIZE {
            return Err(TaxonomyError::WrongSize {
                expected: TAXONOMY_SIZE,
                found: records.len(),
            });
        }
        let mut seen = HashSet::with_capacity(TAXONOMY_SIZE);
        for record in &records {
            if record.id == 0 || record.id as usize > TAXONOMY_SIZE {
                return Err(TaxonomyError::IdOutOfRange(record.id));
            }
            if !seen.insert(record.id) {
                return Err(TaxonomyError::DuplicateId(record.id));
            }
            if record.name.trim().is_empty() {
                return Err(TaxonomyError::EmptyName(record.id));
            }
        }
        records.sort_by_key(|r| r.id);
        tracing::info!(
            target: "triad::taxonomy",
            records = records.len(),
            "Taxonomy validated ({} records)",
            records.len()
        );
        Ok(Self { records })
    }

    /// Parses a JSON array of records and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        let records: Vec<TraitRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Reads a JSON taxonomy file and validates it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TaxonomyError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        tracing::info!(
            target: "triad::taxonomy",
            path = %path.display(),
            bytes = raw.len(),
            "Loading taxonomy from {}",
            path.display()
        );
        Self::from_json_str(&raw)
    }

    /// Record for `id`, if `id` is in 1..=64.
    pub fn lookup(&self, id: i64) -> Option<&TraitRecord> {
        if (1..=TAXONOMY_SIZE as i64).contains(&id) {
            self.records.get(id as usize - 1)
        } else {
            None
        }
    }

    /// Record for `id`; unknown ids return the record for [`DEFAULT_TRAIT_ID`].
    pub fn get(&self, id: i64) -> &TraitRecord {
        self.lookup(id).unwrap_or(&self.records[DEFAULT_TRAIT_ID as usize - 1])
    }

    /// All records in id order.
    pub fn records(&self) -> &[TraitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the table as a JSON array (the format [`Self::from_json_str`] reads).
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.records).unwrap_or_default()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
