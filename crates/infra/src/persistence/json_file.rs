use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::r#trait::{Persistence, PersistenceError, decode, encode};

/// JSON file adapter.
///
/// Saves are atomic with respect to crashes: the encoding is written to a
/// sibling `<path>.tmp` file first, then renamed over the target, so the
/// target always holds either the old or the new content. Parent directories
/// are not created.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
    tmp_path: PathBuf,
    location: String,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let mut tmp: OsString = path.clone().into_os_string();
        tmp.push(".tmp");

        Self {
            location: path.display().to_string(),
            tmp_path: PathBuf::from(tmp),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(&self, contents: &str) -> io::Result<()> {
        if let Err(err) = fs::write(&self.tmp_path, contents) {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(err);
        }

        if let Err(err) = fs::rename(&self.tmp_path, &self.path) {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(err);
        }

        Ok(())
    }
}

impl Persistence for JsonFilePersistence {
    fn location(&self) -> &str {
        &self.location
    }

    fn save<T>(&self, records: &[T]) -> Result<(), PersistenceError>
    where
        T: Serialize,
    {
        let json = encode(records)?;

        self.write_atomically(&json)
            .map_err(|e| PersistenceError::io(&self.location, e))?;

        tracing::debug!(path = %self.location, bytes = json.len(), "wrote json file");
        Ok(())
    }

    fn load<T>(&self) -> Result<Option<Vec<T>>, PersistenceError>
    where
        T: DeserializeOwned,
    {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(PersistenceError::io(&self.location, err)),
        };

        tracing::debug!(path = %self.location, bytes = json.len(), "read json file");
        decode(&self.location, &json).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;
    use stocklog_inventory::InventoryItem;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn load_before_any_save_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFilePersistence::new(dir.path().join("inventory.json"));

        let loaded: Option<Vec<InventoryItem>> = adapter.load().unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn saved_records_load_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFilePersistence::new(dir.path().join("inventory.json"));

        let items = vec![
            InventoryItem::new(1, "Laptop", 5, t(1)),
            InventoryItem::new(2, "Printer", 3, t(2)),
        ];
        adapter.save(&items).unwrap();

        let loaded: Vec<InventoryItem> = adapter.load().unwrap().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn empty_sequence_loads_as_empty_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFilePersistence::new(dir.path().join("inventory.json"));

        adapter.save::<InventoryItem>(&[]).unwrap();

        let loaded: Option<Vec<InventoryItem>> = adapter.load().unwrap();
        assert_eq!(loaded, Some(vec![]));
    }

    #[test]
    fn writes_field_tagged_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let adapter = JsonFilePersistence::new(&path);

        adapter
            .save(&[InventoryItem::new(7, "Router", 7, t(0))])
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let record = &value.as_array().unwrap()[0];
        assert_eq!(record["id"], 7);
        assert_eq!(record["name"], "Router");
        assert_eq!(record["quantity"], 7);
        assert!(record["dateAdded"].is_string());
    }

    #[test]
    fn save_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFilePersistence::new(dir.path().join("inventory.json"));

        adapter.save(&[InventoryItem::new(1, "Laptop", 5, t(0))]).unwrap();

        assert!(!dir.path().join("inventory.json.tmp").exists());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFilePersistence::new(dir.path().join("inventory.json"));

        adapter
            .save(&[
                InventoryItem::new(1, "Laptop", 5, t(0)),
                InventoryItem::new(2, "Printer", 3, t(0)),
            ])
            .unwrap();
        adapter.save(&[InventoryItem::new(3, "Router", 7, t(0))]).unwrap();

        let loaded: Vec<InventoryItem> = adapter.load().unwrap().unwrap();
        assert_eq!(loaded, vec![InventoryItem::new(3, "Router", 7, t(0))]);
    }

    #[test]
    fn save_into_missing_directory_is_io_error_and_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("inventory.json");
        let adapter = JsonFilePersistence::new(&path);

        let err = adapter
            .save(&[InventoryItem::new(1, "Laptop", 5, t(0))])
            .unwrap_err();

        assert!(matches!(err, PersistenceError::Io { .. }));
        assert!(err.to_string().contains("inventory.json"));
        assert!(!path.exists());
    }

    #[test]
    fn invalid_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "[{\"id\": 1, \"name\": ").unwrap();

        let adapter = JsonFilePersistence::new(&path);
        let err = adapter.load::<InventoryItem>().unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"id": 1, "name": "Laptop"}"#).unwrap();

        let adapter = JsonFilePersistence::new(&path);
        let err = adapter.load::<InventoryItem>().unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn reading_a_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let adapter = JsonFilePersistence::new(dir.path());
        let err = adapter.load::<InventoryItem>().unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: load(save(x)) == x for any ordered sequence, ids unsorted
        /// and possibly repeated.
        #[test]
        fn file_round_trip_preserves_sequence(
            rows in prop::collection::vec(
                (any::<i64>(), "[A-Za-z0-9 ]{0,24}", any::<i64>(), 0i64..2_000_000_000i64, 0u32..1_000_000_000u32),
                0..20,
            )
        ) {
            let items: Vec<InventoryItem> = rows
                .into_iter()
                .map(|(id, name, qty, secs, nanos)| {
                    InventoryItem::new(id, name, qty, Utc.timestamp_opt(secs, nanos).unwrap())
                })
                .collect();

            let dir = tempfile::tempdir().unwrap();
            let adapter = JsonFilePersistence::new(dir.path().join("inventory.json"));
            adapter.save(&items).unwrap();

            let loaded: Vec<InventoryItem> = adapter.load().unwrap().unwrap();
            prop_assert_eq!(loaded, items);
        }
    }
}
