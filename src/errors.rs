use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("'{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Permission denied for '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Input interrupted")]
    Interrupted,

    #[error("Invalid choice")]
    InvalidChoice,

    #[error("Failed to write spreadsheet: {0}")]
    SheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to read spreadsheet: {0}")]
    SheetRead(#[from] calamine::XlsxError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Maps a raw I/O error onto the taxonomy, keeping the offending path.
pub fn classify(err: io::Error, path: &Path) -> AppError {
    match err.kind() {
        io::ErrorKind::NotFound => AppError::NotFound(path.to_path_buf()),
        io::ErrorKind::AlreadyExists => AppError::AlreadyExists(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => AppError::PermissionDenied(path.to_path_buf()),
        _ => AppError::Io(err),
    }
}
