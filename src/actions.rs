use crate::errors::{AppError, classify};
use crate::messages::{Messages, fill};
use crate::sheet::SheetRow;
use crate::types::{Entry, EntryKind};
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Result of one batch pass: how many operations applied plus one report
/// line per skipped or failed row.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub applied: usize,
    pub reports: Vec<String>,
}

/// Applies the edited rename column back onto the filesystem. Rows are
/// matched to scanned entries by the original name in column 1; rows that
/// match nothing are ignored. One row's failure never stops the batch.
pub fn apply_renames(
    rows: &[SheetRow],
    dir: &Path,
    kind: EntryKind,
    entries: &[Entry],
    messages: &Messages,
) -> BatchOutcome {
    let lookup: HashMap<&str, &Path> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.path.as_path()))
        .collect();
    let editable_col = kind.layout().editable_col;

    let mut outcome = BatchOutcome::default();
    for row in rows {
        let Some(name) = row.first().and_then(Option::as_deref) else {
            continue;
        };
        let Some(&old_path) = lookup.get(name) else {
            log::debug!("row '{name}' matches no scanned entry, ignoring");
            continue;
        };
        let Some(new_name) = row.get(editable_col).and_then(Option::as_deref) else {
            continue;
        };

        let target = dir.join(new_name);
        match kind {
            EntryKind::File if target.is_file() => {
                outcome
                    .reports
                    .push(fill(messages.file_exists, &[("name", new_name)]));
            }
            EntryKind::Folder if target.is_dir() => {
                outcome
                    .reports
                    .push(fill(messages.folder_exists, &[("name", new_name)]));
            }
            _ => match fs::rename(old_path, &target) {
                Ok(()) => outcome.applied += 1,
                Err(err) => outcome.reports.push(report_failure(err, &target, messages)),
            },
        }
    }
    outcome
}

/// Creates one folder per non-blank name cell. Duplicates and other
/// failures are reported per row and the batch continues.
pub fn apply_creates(rows: &[SheetRow], dir: &Path, messages: &Messages) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for row in rows {
        let Some(name) = row.first().and_then(Option::as_deref) else {
            continue;
        };
        let target = dir.join(name);
        match fs::create_dir(&target) {
            Ok(()) => outcome.applied += 1,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                outcome
                    .reports
                    .push(fill(messages.folder_exists, &[("name", name)]));
            }
            Err(err) => outcome.reports.push(report_failure(err, &target, messages)),
        }
    }
    outcome
}

pub fn print_rename_outcome(outcome: &BatchOutcome, kind: EntryKind, messages: &Messages) {
    print_reports(outcome);
    let summary = fill(
        messages.renamed_summary,
        &[("count", &outcome.applied.to_string()), ("kind", kind.label())],
    );
    println!("{}\n", summary.green().bold());
}

pub fn print_create_outcome(outcome: &BatchOutcome, messages: &Messages) {
    print_reports(outcome);
    let summary = fill(
        messages.created_summary,
        &[("count", &outcome.applied.to_string())],
    );
    println!("{}\n", summary.green().bold());
}

fn print_reports(outcome: &BatchOutcome) {
    println!();
    for line in &outcome.reports {
        println!("{}", line.red().bold());
    }
}

fn report_failure(err: io::Error, path: &Path, messages: &Messages) -> String {
    match classify(err, path) {
        AppError::NotFound(p) => fill(messages.not_found, &[("path", &p.display().to_string())]),
        AppError::AlreadyExists(p) => fill(
            messages.already_exists,
            &[("path", &p.display().to_string())],
        ),
        AppError::PermissionDenied(p) => fill(
            messages.permission_denied,
            &[("path", &p.display().to_string())],
        ),
        other => fill(messages.unexpected, &[("err", &other.to_string())]),
    }
}
