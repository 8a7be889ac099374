use crate::format::{describe_extension, format_child_count, format_size, format_timestamp};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    /// Column layout of the rename sheet for this kind.
    #[must_use]
    pub fn layout(self) -> SheetLayout {
        match self {
            EntryKind::File => SheetLayout {
                headers: &[
                    "File Name",
                    "Date Created",
                    "Date Last Modified",
                    "Size",
                    "Type",
                    "Rename",
                ],
                editable_col: 5,
            },
            EntryKind::Folder => SheetLayout {
                headers: &["Folder Name", "Date Last Modified", "Files", "Rename"],
                editable_col: 3,
            },
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "File(s)",
            EntryKind::Folder => "Folder(s)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Rename,
    Create,
}

/// Fixed column layout of one sheet flavor. The editable column is the only
/// one the user is expected to touch.
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    pub headers: &'static [&'static str],
    pub editable_col: usize,
}

/// Single-column sheet used when creating folders; the name column doubles
/// as the input column.
pub const CREATE_LAYOUT: SheetLayout = SheetLayout {
    headers: &["Folder Name"],
    editable_col: 0,
};

#[derive(Debug, Clone)]
pub enum EntryDetail {
    File { size: u64, extension: String },
    Folder { child_count: usize },
}

/// One scanned filesystem object. Immutable after the scan; edits happen in
/// the spreadsheet, never on the entry.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    pub detail: EntryDetail,
}

impl Entry {
    pub fn from_file(path: &Path, meta: &fs::Metadata) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        Self {
            name: base_name(path),
            created: timestamp_or_epoch(meta.created().ok()),
            modified: timestamp_or_epoch(meta.modified().ok()),
            detail: EntryDetail::File {
                size: meta.len(),
                extension,
            },
            path: path.to_path_buf(),
        }
    }

    pub fn from_folder(path: &Path, meta: &fs::Metadata) -> Self {
        let child_count = fs::read_dir(path).map(Iterator::count).unwrap_or(0);
        Self {
            name: base_name(path),
            created: timestamp_or_epoch(meta.created().ok()),
            modified: timestamp_or_epoch(meta.modified().ok()),
            detail: EntryDetail::Folder { child_count },
            path: path.to_path_buf(),
        }
    }

    /// Display-string projection of this entry in sheet column order. The
    /// trailing empty string is the editable cell.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        match &self.detail {
            EntryDetail::File { size, extension } => vec![
                self.name.clone(),
                format_timestamp(self.created),
                format_timestamp(self.modified),
                format_size(*size),
                describe_extension(extension).to_string(),
                String::new(),
            ],
            EntryDetail::Folder { child_count } => vec![
                self.name.clone(),
                format_timestamp(self.modified),
                format_child_count(*child_count),
                String::new(),
            ],
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

// UNIX_EPOCH fallback avoids falsely marking entries as recent when the
// platform cannot report the timestamp
fn timestamp_or_epoch(ts: Option<SystemTime>) -> DateTime<Local> {
    ts.unwrap_or(SystemTime::UNIX_EPOCH).into()
}
