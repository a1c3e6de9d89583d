//! Core types shared by the harvest stages

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

/// URL of a single record resource (`links.self` of a listing hit)
pub type Link = String;

/// Link → subfield value, in fetch order
///
/// A link whose record has no such subfield maps to [`serde_json::Value::Null`].
/// A link whose fetch failed is not present at all.
pub type ResultMap = IndexMap<Link, serde_json::Value>;

/// Summary of one completed run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HarvestReport {
    /// Subfield that was harvested
    pub subfield: String,

    /// File the result map was written to
    pub output_path: PathBuf,

    /// Links produced by enumeration
    pub links_found: usize,

    /// Entries written to the output file
    pub entries_written: usize,
}

impl HarvestReport {
    /// Links that were enumerated but are missing from the output
    pub fn links_skipped(&self) -> usize {
        self.links_found.saturating_sub(self.entries_written)
    }
}
