use crate::core::errors::{PeError, PeResult};
use crate::export::document::PeDocument;
use log::info;
use std::path::{Path, PathBuf};

/// Write `<dir>/<name>.json` for the document and echo the JSON to stdout
pub fn export_json(document: &PeDocument, dir: &Path) -> PeResult<PathBuf> {
    info!("Generating json for module: \"{}\"", document.name());
    let json = document.to_json_pretty()?;
    println!("{}", json);

    let path = output_path(dir, document.name(), "json")?;
    write_file(&path, &json)?;
    info!("Exported '{}'", path.display());
    Ok(path)
}

/// Overwrite the session log with the circuit name
pub fn write_session_log(path: &Path, circuit_name: &str) -> PeResult<()> {
    write_file(path, circuit_name)?;
    info!("Session log written to '{}'", path.display());
    Ok(())
}

/// `<dir>/<name>.<ext>`; names that would leave `dir` are rejected
pub(crate) fn output_path(dir: &Path, name: &str, ext: &str) -> PeResult<PathBuf> {
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(PeError::InvalidCircuitName(name.to_string()));
    }
    Ok(dir.join(format!("{}.{}", name, ext)))
}

pub(crate) fn write_file(path: &Path, contents: &str) -> PeResult<()> {
    std::fs::write(path, contents).map_err(|source| PeError::ExportWriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_json(&PeDocument::empty("alu"), dir.path()).unwrap();

        assert_eq!(path, dir.path().join("alu.json"));
        let parsed = PeDocument::read(&path).unwrap();
        assert_eq!(parsed, PeDocument::empty("alu"));
    }

    #[test]
    fn test_session_log_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apex.log");
        write_session_log(&path, "first_circuit").unwrap();
        write_session_log(&path, "pe").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pe");
    }

    #[test]
    fn test_names_with_separators_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["../x", "a/b", "a\\b", ".."] {
            let result = export_json(&PeDocument::empty(name), dir.path());
            assert!(matches!(result, Err(PeError::InvalidCircuitName(_))), "{} should be rejected", name);
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_padded_name_is_used_as_typed() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_json(&PeDocument::empty(" alu "), dir.path()).unwrap();
        assert_eq!(path, dir.path().join(" alu .json"));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");
        let result = export_json(&PeDocument::empty("x"), &missing);
        assert!(matches!(result, Err(PeError::ExportWriteFailure { .. })));
    }
}
