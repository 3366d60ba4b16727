use crate::Result;
use std::fs;
use std::path::Path;

/// Copies every file under `src` into `dest`, creating directories as needed.
///
/// Returns the number of files copied.
pub fn copy_files_recursive(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in sorted_entries(src)? {
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copied += copy_files_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
            tracing::debug!(from = %from.display(), to = %to.display(), "Copied file");
            copied += 1;
        }
    }
    Ok(copied)
}

pub(super) fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_nested_tree() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::write(src.path().join("index.css"), "body {}").unwrap();
        fs::create_dir(src.path().join("images")).unwrap();
        fs::write(src.path().join("images/logo.png"), [0u8, 1, 2]).unwrap();

        let out = dest.path().join("public");
        let copied = copy_files_recursive(src.path(), &out).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(out.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read(out.join("images/logo.png")).unwrap(), vec![0u8, 1, 2]);
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let dest = tempfile::tempdir().unwrap();
        let result = copy_files_recursive(&dest.path().join("nope"), dest.path());
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
