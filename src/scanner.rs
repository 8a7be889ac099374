use crate::errors::AppError;
use crate::types::{Entry, EntryKind};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the immediate children of `dir` matching `kind`, sorted by name.
/// Hidden entries (leading dot) are skipped. Symlinks are classified by
/// their resolved type.
pub fn scan_entries(dir: &Path, kind: EntryKind) -> Result<Vec<Entry>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::NotFound(dir.to_path_buf()));
    }

    let mut entries: Vec<Entry> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|item| !item.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|item| {
            // fs::metadata follows symlinks, so links count as their target
            let meta = fs::metadata(item.path()).ok()?;
            match kind {
                EntryKind::File if meta.is_file() => Some(Entry::from_file(item.path(), &meta)),
                EntryKind::Folder if meta.is_dir() => Some(Entry::from_folder(item.path(), &meta)),
                _ => None,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("scanned {} entries under {}", entries.len(), dir.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryDetail;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_files_skips_hidden_and_sorts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.jpg"), b"jpg").unwrap();
        fs::write(tmp.path().join("a.txt"), b"txt").unwrap();
        fs::write(tmp.path().join(".secret"), b"shh").unwrap();

        let entries = scan_entries(tmp.path(), EntryKind::File).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.jpg"]);
    }

    #[test]
    fn test_scan_files_type_labels() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"txt").unwrap();
        fs::write(tmp.path().join("b.jpg"), b"jpg").unwrap();

        let entries = scan_entries(tmp.path(), EntryKind::File).unwrap();
        let labels: Vec<_> = entries.iter().map(|e| e.values()[4].clone()).collect();
        assert_eq!(labels, vec!["Plain Text File", "JPEG Image File"]);
    }

    #[test]
    fn test_scan_files_excludes_folders() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file.txt"), b"x").unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();

        let entries = scan_entries(tmp.path(), EntryKind::File).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "file.txt");
    }

    #[test]
    fn test_scan_folders_excludes_files_and_hidden() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("beta")).unwrap();
        fs::create_dir(tmp.path().join("alpha")).unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join("file.txt"), b"x").unwrap();

        let entries = scan_entries(tmp.path(), EntryKind::Folder).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("nested.txt"), b"x").unwrap();
        fs::write(tmp.path().join("top.txt"), b"x").unwrap();

        let entries = scan_entries(tmp.path(), EntryKind::File).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "top.txt");
    }

    #[test]
    fn test_scan_folder_child_count_includes_hidden() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("visible.txt"), b"x").unwrap();
        fs::write(sub.join(".hidden"), b"x").unwrap();

        let entries = scan_entries(tmp.path(), EntryKind::Folder).unwrap();
        match entries[0].detail {
            EntryDetail::Folder { child_count } => assert_eq!(child_count, 2),
            _ => panic!("expected a folder entry"),
        }
    }

    #[test]
    fn test_scan_missing_directory_is_not_found() {
        let result = scan_entries(Path::new("/definitely/not/here"), EntryKind::File);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_scan_path_to_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        let result = scan_entries(&file, EntryKind::File);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
