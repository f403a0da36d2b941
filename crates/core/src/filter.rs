//! Filter criteria and predicate construction.
//!
//! A [`StudyFilter`] holds up to four independent optional criteria. Each
//! present criterion compiles to one predicate over [`StudyRecord`]; the
//! predicates are folded with logical AND, so an absent criterion never
//! excludes anything and an all-absent filter matches every record.

use crate::StudyRecord;
use serde::{Deserialize, Serialize};

/// One compiled constraint over a study record.
pub type StudyPredicate = Box<dyn Fn(&StudyRecord) -> bool + Send + Sync>;

/// Optional, independently combinable filter criteria.
///
/// `None` means "no constraint". Callers that receive criteria as strings
/// (query parameters, CLI flags) should map empty input to `None` before
/// building the filter; the engine itself treats only `None` as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyFilter {
    /// Case-insensitive substring match against `organism`.
    pub organism: Option<String>,
    /// Case-insensitive substring match against `data_type`.
    pub data_type: Option<String>,
    /// Comma-separated candidates, OR-ed: a record matches if
    /// `extracted_molecule` contains any candidate (case-insensitive).
    pub molecule: Option<String>,
    /// Exact, case-sensitive equality against `superseries`.
    pub superseries: Option<String>,
}

impl StudyFilter {
    /// True when no criterion is present (the filter matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organism.is_none()
            && self.data_type.is_none()
            && self.molecule.is_none()
            && self.superseries.is_none()
    }

    /// Compile the present criteria into one predicate per criterion.
    #[must_use]
    pub fn predicates(&self) -> Vec<StudyPredicate> {
        let mut preds: Vec<StudyPredicate> = Vec::new();

        if let Some(organism) = &self.organism {
            let needle = organism.to_lowercase();
            preds.push(Box::new(move |s: &StudyRecord| contains_ci(&s.organism, &needle)));
        }
        if let Some(data_type) = &self.data_type {
            let needle = data_type.to_lowercase();
            preds.push(Box::new(move |s: &StudyRecord| contains_ci(&s.data_type, &needle)));
        }
        if let Some(molecule) = &self.molecule {
            // Pre-folded OR over the comma-split candidates. A supplied value
            // that yields no usable candidates matches nothing: the caller
            // asked for a constraint, so we do not silently drop it.
            let terms = molecule_terms(molecule);
            preds.push(Box::new(move |s: &StudyRecord| {
                terms.iter().any(|t| contains_ci(&s.extracted_molecule, t))
            }));
        }
        if let Some(superseries) = &self.superseries {
            let wanted = superseries.clone();
            preds.push(Box::new(move |s: &StudyRecord| s.superseries == wanted));
        }

        preds
    }

    /// Fold all present criteria with AND.
    #[must_use]
    pub fn matches(&self, study: &StudyRecord) -> bool {
        self.predicates().iter().all(|p| p(study))
    }
}

/// Case-insensitive substring test. `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Split a molecule criterion on commas into lowercased candidate terms.
///
/// Surrounding whitespace is trimmed and empty fragments are dropped, so
/// `"DNA, RNA,"` yields `["dna", "rna"]` and `" , ,"` yields `[]`.
fn molecule_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect()
}
