//! Study record types.
//!
//! Field names are the wire contract: the HTTP API, the CSV loader and the
//! storage layer all speak this exact field set.

use serde::{Deserialize, Serialize};

/// One cataloged study, as stored and as served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRecord {
    /// Store-assigned row id. Never reused.
    pub id: i64,
    /// GEO accession, e.g. "GSE12345". Expected unique, not enforced here.
    pub geo_accession: String,
    pub title: String,
    pub organism: String,
    pub data_type: String,
    pub extracted_molecule: String,
    /// Expected domain {"yes", "no"}; matched by exact equality.
    pub superseries: String,
    pub summary: String,
    /// Opaque string date; never parsed or range-queried.
    pub publication_date: String,
}

/// A study as it arrives from ingestion: the full field set minus `id`.
///
/// Every field defaults to the empty string so a CSV with missing columns
/// still loads; an empty stored value participates normally in matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudy {
    #[serde(default)]
    pub geo_accession: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organism: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub extracted_molecule: String,
    #[serde(default)]
    pub superseries: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub publication_date: String,
}
