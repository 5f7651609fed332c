use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::records::Record;

/// Write the deduplicated record set to `path` as a JSON array of
/// `{name, link}` objects, creating parent directories as needed.
pub fn write_records(records: &[Record], path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("Doc A", "https://catalog.test/a.ashx"),
            Record::new("Doc B", "https://catalog.test/b.ashx"),
        ]
    }

    #[test]
    fn test_written_file_parses_back_to_the_same_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");

        write_records(&sample_records(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Record> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, sample_records());
    }

    #[test]
    fn test_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/docs/links.json");

        write_records(&sample_records(), &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_empty_record_set_writes_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");

        write_records(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "plain file").unwrap();

        // The parent "directory" is a file, so the write cannot succeed
        let err = write_records(&sample_records(), &blocker.join("links.json")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
