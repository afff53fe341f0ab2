//! Job records and the lookup tables that classify them.
//!
//! A [`JobRecord`] stores its education level and salary band as numeric ids.
//! Everything the user sees (and everything the filter compares against) is
//! the human label, so each id is resolved through a [`LookupTable`] first.
//! Ids missing from a table resolve to [`UNSPECIFIED_LABEL`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown for an education or salary id that has no lookup entry.
pub const UNSPECIFIED_LABEL: &str = "Unspecified";

/// Positional identity of a job within the catalog.
///
/// The fixture carries no identifier of its own, so ids are assigned from the
/// 1-based position of each record when the catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u32);

impl JobId {
    /// Builds the id for the record at a zero-based catalog position.
    #[must_use]
    pub fn from_position(position: usize) -> Self {
        Self(u32::try_from(position).unwrap_or(u32::MAX - 1).saturating_add(1))
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One job posting.
///
/// Immutable once the catalog is loaded. `description` is markup supplied by
/// the data source; see [`crate::ui::markup`] for how it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: JobId,
    pub company_name: String,
    pub job_title: String,
    pub education_id: u32,
    pub salary_id: u32,
    pub preview: String,
    #[serde(rename = "companyPhoto")]
    pub company_photos: Vec<String>,
    pub description: String,
}

/// An `{ id, label }` pair from the education or salary lookup set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub id: u32,
    pub label: String,
}

impl LookupEntry {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// A small closed lookup set with unique ids.
///
/// Order is preserved as given by the fixture; it drives the order in which
/// the filter bar cycles through options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable {
    entries: Vec<LookupEntry>,
}

impl LookupTable {
    /// Builds a table, keeping the first entry for any duplicated id.
    #[must_use]
    pub fn new(entries: Vec<LookupEntry>) -> Self {
        let mut unique: Vec<LookupEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().any(|existing| existing.id == entry.id) {
                tracing::debug!(id = entry.id, label = %entry.label, "dropping duplicate lookup id");
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// Resolves an id to its label, falling back to [`UNSPECIFIED_LABEL`].
    ///
    /// ```
    /// use jobboard::domain::{LookupEntry, LookupTable, UNSPECIFIED_LABEL};
    ///
    /// let table = LookupTable::new(vec![LookupEntry::new(1, "Bachelor")]);
    /// assert_eq!(table.resolve(1), "Bachelor");
    /// assert_eq!(table.resolve(42), UNSPECIFIED_LABEL);
    /// ```
    #[must_use]
    pub fn resolve(&self, id: u32) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map_or(UNSPECIFIED_LABEL, |entry| entry.label.as_str())
    }

    #[must_use]
    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ids_are_one_based_positions() {
        assert_eq!(JobId::from_position(0), JobId(1));
        assert_eq!(JobId::from_position(12), JobId(13));
    }

    #[test]
    fn unresolvable_id_falls_back_to_unspecified() {
        let table = LookupTable::new(vec![LookupEntry::new(1, "High school"), LookupEntry::new(2, "Bachelor")]);

        assert_eq!(table.resolve(2), "Bachelor");
        assert_eq!(table.resolve(0), UNSPECIFIED_LABEL);
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let table = LookupTable::new(vec![LookupEntry::new(1, "First"), LookupEntry::new(1, "Second")]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(1), "First");
    }

    #[test]
    fn job_record_uses_fixture_field_names() {
        let json = r#"{
            "id": 3,
            "companyName": "Acme",
            "jobTitle": "Frontend Engineer",
            "educationId": 2,
            "salaryId": 1,
            "preview": "Build things",
            "companyPhoto": ["https://example.com/a.jpg"],
            "description": "<p>Hello</p>"
        }"#;

        let record: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, JobId(3));
        assert_eq!(record.company_photos.len(), 1);
    }
}
