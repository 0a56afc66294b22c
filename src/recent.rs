//! Recent-queries store
//!
//! Holds the last [`MAX_RECENT`] (query string, criteria record) pairs,
//! most-recent first, deduplicated by generated query string. Persisted as
//! a flat key-value file with a `[Recent]` section holding `query_<i>` (the
//! raw query string) and `parts_<i>` (the criteria record as a JSON string)
//! for i = 1..N. The file is read once at startup and rewritten in full on
//! every mutation.
//!
//! Failure policy: nothing here is fatal. A missing file counts as empty
//! (and is created), a malformed file is reported and the session continues
//! with an empty list, and a failed write leaves the in-memory list
//! authoritative.

use std::fs;
use std::path::{Path, PathBuf};

use crate::criteria::SearchCriteria;
use crate::error::{GsearchError, Result};
use crate::query::build_query;

/// Maximum number of entries kept in the list and on disk.
pub const MAX_RECENT: usize = 20;

/// File name, placed next to the executable.
pub const RECENT_FILENAME: &str = "gsearch.ini";

const SECTION: &str = "Recent";

/// One saved search: the generated query string plus the full record that
/// produced it, so the form can be restored exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    pub query: String,
    pub criteria: SearchCriteria,
}

/// Ordered recent-searches list backed by a flat file.
pub struct RecentStore {
    path: PathBuf,
    entries: Vec<RecentEntry>,
}

impl RecentStore {
    /// Create an empty store backed by `path`. Call [`load`](Self::load)
    /// to pull in what is on disk.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Default store location: `gsearch.ini` in the executable's directory.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(RECENT_FILENAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&RecentEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the list from disk. A missing file is treated as empty and an
    /// empty file is written in its place.
    pub fn load(&mut self) -> Result<()> {
        self.entries.clear();
        if !self.path.exists() {
            return self.write();
        }
        let text = fs::read_to_string(&self.path).map_err(GsearchError::RecentRead)?;
        self.entries = parse_recent(&text)?;
        Ok(())
    }

    /// Save a criteria record: prepend, dedupe by query string, truncate to
    /// [`MAX_RECENT`], rewrite the file. Criteria that build an empty query
    /// are rejected.
    pub fn save(&mut self, criteria: SearchCriteria) -> Result<()> {
        let query = build_query(&criteria);
        if query.is_empty() {
            return Err(GsearchError::EmptyQuery);
        }
        self.entries.retain(|entry| entry.query != query);
        self.entries.insert(0, RecentEntry { query, criteria });
        self.entries.truncate(MAX_RECENT);
        self.write()
    }

    /// Delete the entry at `index` and rewrite the file. Out-of-range
    /// indices are rejected without touching the list.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(GsearchError::InvalidSelection {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);
        self.write()
    }

    fn write(&self) -> Result<()> {
        let text = serialize_recent(&self.entries)?;
        fs::write(&self.path, text).map_err(GsearchError::RecentWrite)
    }
}

/// Parse the `[Recent]` section into an ordered entry list. Reading stops
/// at the first missing `query_<i>` key; a `parts_<i>` with invalid JSON
/// fails the whole parse.
pub fn parse_recent(text: &str) -> Result<Vec<RecentEntry>> {
    let root: toml::Table = text
        .parse()
        .map_err(|e: toml::de::Error| GsearchError::RecentParse(e.to_string()))?;

    let Some(section) = root.get(SECTION).and_then(|value| value.as_table()) else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    let mut i = 1usize;
    while let Some(query) = section
        .get(&format!("query_{}", i))
        .and_then(|value| value.as_str())
    {
        let criteria = match section
            .get(&format!("parts_{}", i))
            .and_then(|value| value.as_str())
        {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| GsearchError::RecentParse(format!("parts_{}: {}", i, e)))?,
            None => SearchCriteria::default(),
        };
        entries.push(RecentEntry {
            query: query.to_string(),
            criteria,
        });
        i += 1;
    }

    Ok(entries)
}

/// Serialize an entry list back into the `[Recent]` key-value text.
pub fn serialize_recent(entries: &[RecentEntry]) -> Result<String> {
    let mut section = toml::Table::new();
    for (i, entry) in entries.iter().enumerate() {
        let parts = serde_json::to_string(&entry.criteria)
            .map_err(|e| GsearchError::RecentSerialize(e.to_string()))?;
        section.insert(
            format!("query_{}", i + 1),
            toml::Value::String(entry.query.clone()),
        );
        section.insert(format!("parts_{}", i + 1), toml::Value::String(parts));
    }

    let mut root = toml::Table::new();
    root.insert(SECTION.to_string(), toml::Value::Table(section));
    toml::to_string(&root).map_err(|e| GsearchError::RecentSerialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{SearchType, TermsLocation};

    fn criteria_with_words(words: &str) -> SearchCriteria {
        SearchCriteria {
            all_words: words.to_string(),
            ..Default::default()
        }
    }

    fn store_in_temp() -> RecentStore {
        // Unique path per test so parallel tests never share a file.
        use std::sync::atomic::{AtomicUsize, Ordering};
        static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "gsearch-test-{}-{}.ini",
            std::process::id(),
            id
        ));
        let _ = fs::remove_file(&path);
        RecentStore::new(path)
    }

    #[test]
    fn serialize_parse_round_trip_preserves_records() {
        let criteria = SearchCriteria {
            all_words: "laptop".into(),
            terms_location: TermsLocation::Title,
            range_from: "500".into(),
            range_to: "1000".into(),
            range_unit: "$".into(),
            search_type: SearchType::Images,
            region: "Japan".into(),
            ..Default::default()
        };
        let entries = vec![RecentEntry {
            query: build_query(&criteria),
            criteria: criteria.clone(),
        }];

        let text = serialize_recent(&entries).unwrap();
        let restored = parse_recent(&text).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].criteria, criteria);
        assert_eq!(restored[0].query, build_query(&restored[0].criteria));
    }

    #[test]
    fn serialized_text_has_recent_section_keys() {
        let entries = vec![RecentEntry {
            query: "laptop".into(),
            criteria: criteria_with_words("laptop"),
        }];
        let text = serialize_recent(&entries).unwrap();
        assert!(text.contains("[Recent]"));
        assert!(text.contains("query_1"));
        assert!(text.contains("parts_1"));
    }

    #[test]
    fn parse_tolerates_empty_section() {
        assert!(parse_recent("[Recent]\n").unwrap().is_empty());
        assert!(parse_recent("").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_recent("not a key value file =").is_err());
    }

    #[test]
    fn parse_rejects_malformed_parts_json() {
        let text = "[Recent]\nquery_1 = \"laptop\"\nparts_1 = \"{not json\"\n";
        assert!(parse_recent(text).is_err());
    }

    #[test]
    fn parse_stops_at_first_gap() {
        let text = "[Recent]\nquery_1 = \"one\"\nquery_3 = \"three\"\n";
        let entries = parse_recent(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].query, "one");
    }

    #[test]
    fn save_prepends_most_recent() {
        let mut store = store_in_temp();
        store.save(criteria_with_words("first")).unwrap();
        store.save(criteria_with_words("second")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].query, "second");
        assert_eq!(store.entries()[1].query, "first");
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_dedupes_identical_queries() {
        let mut store = store_in_temp();
        store.save(criteria_with_words("laptop")).unwrap();
        store.save(criteria_with_words("cats")).unwrap();
        store.save(criteria_with_words("laptop")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].query, "laptop");
        assert_eq!(store.entries()[1].query, "cats");
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_truncates_to_max_recent() {
        let mut store = store_in_temp();
        for i in 0..MAX_RECENT + 5 {
            store.save(criteria_with_words(&format!("query {}", i))).unwrap();
        }
        assert_eq!(store.len(), MAX_RECENT);
        assert_eq!(store.entries()[0].query, format!("query {}", MAX_RECENT + 4));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_rejects_empty_query() {
        let mut store = store_in_temp();
        assert!(matches!(
            store.save(SearchCriteria::default()),
            Err(GsearchError::EmptyQuery)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_out_of_range_leaves_list_untouched() {
        let mut store = store_in_temp();
        store.save(criteria_with_words("laptop")).unwrap();

        assert!(matches!(
            store.delete(5),
            Err(GsearchError::InvalidSelection { index: 5, len: 1 })
        ));
        assert_eq!(store.len(), 1);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn delete_removes_by_position() {
        let mut store = store_in_temp();
        store.save(criteria_with_words("first")).unwrap();
        store.save(criteria_with_words("second")).unwrap();

        store.delete(1).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].query, "second");
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn load_missing_file_creates_empty_store() {
        let mut store = store_in_temp();
        store.load().unwrap();
        assert!(store.is_empty());
        assert!(store.path().exists());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn store_round_trips_through_disk() {
        let mut store = store_in_temp();
        let criteria = SearchCriteria {
            all_words: "olympic games".into(),
            range_from: "2000".into(),
            range_to: "2020".into(),
            ..Default::default()
        };
        store.save(criteria.clone()).unwrap();

        let mut reloaded = RecentStore::new(store.path().to_path_buf());
        reloaded.load().unwrap();

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].criteria, criteria);
        assert_eq!(reloaded.entries()[0].query, store.entries()[0].query);
        let _ = fs::remove_file(store.path());
    }
}
