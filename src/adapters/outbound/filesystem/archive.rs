use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use zip::ZipArchive;

use crate::shared::Result;

/// Unpacks a downloaded zip archive into `dest`, creating the directory
/// first. Returns the number of entries in the archive. The archive
/// handle lives only for the duration of this call.
///
/// `ZipArchive::extract` sanitizes entry names, so hostile archives
/// cannot write outside `dest`.
pub fn extract_zip(bytes: &[u8], dest: &Path) -> Result<u64> {
    std::fs::create_dir_all(dest)
        .with_context(|| format!("cannot create folder {}", dest.display()))?;

    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .with_context(|| format!("response for {} is not a valid zip archive", dest.display()))?;
    let entries = archive.len() as u64;

    archive
        .extract(dest)
        .with_context(|| format!("failed to unpack archive into {}", dest.display()))?;

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = ZipWriter::new(&mut buffer);
            let options = SimpleFileOptions::default();
            for (name, content) in files {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[test]
    fn test_extracts_all_entries() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("illuminance-9am");
        let bytes = zip_bytes(&[("grid.res", "300.5\n120.1\n"), ("grids_info.json", "[]")]);

        let entries = extract_zip(&bytes, &dest).unwrap();
        assert_eq!(entries, 2);
        assert!(dest.join("grid.res").exists());
        assert!(dest.join("grids_info.json").exists());
        assert_eq!(
            std::fs::read_to_string(dest.join("grid.res")).unwrap(),
            "300.5\n120.1\n"
        );
    }

    #[test]
    fn test_empty_archive_reports_zero_entries() {
        let temp = TempDir::new().unwrap();
        let bytes = zip_bytes(&[]);
        let entries = extract_zip(&bytes, &temp.path().join("empty")).unwrap();
        assert_eq!(entries, 0);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let temp = TempDir::new().unwrap();
        let result = extract_zip(b"definitely not a zip", &temp.path().join("bad"));
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("not a valid zip archive"));
    }
}
