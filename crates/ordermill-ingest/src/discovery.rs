//! Input file discovery.

use std::path::{Path, PathBuf};

use ordermill_model::Result;

/// Lists all JSON files directly inside a directory (non-recursive).
///
/// Returns files sorted by filename so enumeration order is stable. A
/// path that is not a directory yields no matches, the same as an
/// unmatched glob; the caller decides whether an empty listing is an
/// error.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry_result in std::fs::read_dir(dir)? {
        let entry = entry_result?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_json_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in &["b.json", "a.json", "notes.txt", "c.JSON"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = list_json_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.JSON"]);
    }

    #[test]
    fn missing_directory_yields_no_matches() {
        let files = list_json_files(Path::new("no/such/dir")).unwrap();
        assert!(files.is_empty());
    }
}
