//! College data set loading

use crate::error::{AppError, Result};
use crate::model::college::{CollegeRecord, DataSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// Data set compiled into the binary, used when no file is given
const BUNDLED_DATA: &str = include_str!("../../data/colleges.json");

/// Parse a data set from JSON text
pub fn parse_colleges(contents: &str) -> Result<Vec<CollegeRecord>> {
    let data: DataSet = serde_json::from_str(contents)?;
    Ok(data.into_records())
}

/// Load and parse a data set file
pub fn load_colleges<P: AsRef<Path>>(path: P) -> Result<Vec<CollegeRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| AppError::DataRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_colleges(&contents)?;
    info!(path = %path.display(), records = records.len(), "loaded data set");
    Ok(records)
}

/// The data set shipped with the binary
pub fn bundled_colleges() -> Result<Vec<CollegeRecord>> {
    let records = parse_colleges(BUNDLED_DATA)?;
    info!(records = records.len(), "loaded bundled data set");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_data_parses() {
        let records = bundled_colleges().unwrap();
        assert!(records.len() > 10);
        assert!(records.iter().any(|c| c.featured));
    }

    #[test]
    fn test_bundled_ids_are_unique() {
        let records = bundled_colleges().unwrap();
        let mut ids: Vec<String> = records.iter().map(|c| c.id.to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"colleges": [{{"id": 1, "name": "Test Institute", "qsRank": 12}}]}}"#
        )
        .unwrap();

        let records = load_colleges(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Test Institute");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_colleges(dir.path().join("nope.json"));
        assert!(matches!(result, Err(AppError::DataRead { .. })));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_colleges("{\"colleges\": 5}"),
            Err(AppError::DataParse(_))
        ));
    }
}
