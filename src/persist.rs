//! Reading and writing the learned table as `policy.json`.
//!
//! The file is a JSON array with one object per (state, action) entry:
//!
//! ```json
//! {"playerTotal":16,"aces":0,"dealerFaceName":"Ten","dealerFace":9,"action":"Hit","q":-41,"visits":97}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    pub player_total: u32,
    pub aces: u32,
    pub dealer_face_name: String,
    pub dealer_face: u8,
    pub action: String,
    pub q: i64,
    pub visits: u64,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to serialize policy: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to deserialize policy {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid policy record: {0}")]
    InvalidRecord(String),
}

pub fn save(path: &Path, records: &[PolicyRecord]) -> Result<(), Error> {
    let data = serde_json::to_vec(records).map_err(Error::Serialize)?;
    fs::write(path, data).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load(path: &Path) -> Result<Vec<PolicyRecord>, Error> {
    let data = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| Error::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PolicyRecord {
        PolicyRecord {
            player_total: 16,
            aces: 0,
            dealer_face_name: "Ten".to_string(),
            dealer_face: 9,
            action: "Hit".to_string(),
            q: -41,
            visits: 97,
        }
    }

    #[test]
    fn field_names_test() {
        let json = serde_json::to_value(&record()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["aces", "action", "dealerFace", "dealerFaceName", "playerTotal", "q", "visits"]
        );
        assert_eq!(object["dealerFaceName"], "Ten");
        assert_eq!(object["q"], -41);
    }

    #[test]
    fn save_and_load_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");

        let records = vec![record()];
        save(&path, &records).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with('['));
        assert_eq!(load(&path).unwrap(), records);
    }

    #[test]
    fn write_failure_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("policy.json");

        match save(&path, &[record()]) {
            Err(Error::Write { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn load_failure_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        assert!(matches!(load(&path), Err(Error::Read { .. })));

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load(&path), Err(Error::Deserialize { .. })));
    }
}
