mod actions;
mod errors;
mod format;
mod messages;
mod prompt;
mod scanner;
mod sheet;
mod types;

use crate::errors::AppError;
use crate::messages::Messages;
use crate::sheet::Sheet;
use crate::types::{ActionKind, Entry, EntryKind};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use comfy_table::Table;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to manage (prompted for interactively when omitted)
    #[arg(long, short = 'd')]
    dir: Option<PathBuf>,

    /// Manage files or folders, skipping the item menu
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Action to run, skipping the action menu
    #[arg(long, value_enum)]
    action: Option<ActionArg>,

    /// Keep the generated spreadsheet instead of deleting it at exit
    #[arg(long)]
    keep_sheet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    File,
    Folder,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ActionArg {
    Rename,
    Create,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {}
        Err(AppError::Interrupted) => {
            println!("{}", "*** Input Interrupted! ***\n".red().bold());
        }
        Err(AppError::InvalidChoice) => {
            println!("{}", "Invalid Choice!\n".red().bold());
        }
        Err(err) => {
            eprintln!("{}", err.to_string().red().bold());
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    loop {
        let Some(kind) = select_kind(args)? else {
            println!();
            return Ok(());
        };
        let Some(action) = select_action(args, kind)? else {
            // back to the item menu
            continue;
        };
        return run_session(args, kind, action);
    }
}

/// First menu: what to manage. `None` means the user chose to exit.
fn select_kind(args: &Args) -> Result<Option<EntryKind>, AppError> {
    if let Some(kind) = args.kind {
        return Ok(Some(match kind {
            KindArg::File => EntryKind::File,
            KindArg::Folder => EntryKind::Folder,
        }));
    }

    let choice = prompt::menu_select(
        "Select an item to manage:",
        &["...", "Files", "Folders"],
        "Enter item: ",
    )?;
    Ok(match choice {
        1 => Some(EntryKind::File),
        2 => Some(EntryKind::Folder),
        _ => None,
    })
}

/// Second menu: what to do. Create is offered for folders only. `None`
/// means "back".
fn select_action(args: &Args, kind: EntryKind) -> Result<Option<ActionKind>, AppError> {
    if let Some(action) = args.action {
        return match (kind, action) {
            (EntryKind::File, ActionArg::Create) => {
                eprintln!("{}", "Invalid Action 'create'!\n".red().bold());
                std::process::exit(1);
            }
            (_, ActionArg::Rename) => Ok(Some(ActionKind::Rename)),
            (_, ActionArg::Create) => Ok(Some(ActionKind::Create)),
        };
    }

    println!();
    match kind {
        EntryKind::File => {
            let choice = prompt::menu_select("Select action: ", &["..", "Rename"], "Enter action: ")?;
            Ok((choice == 1).then_some(ActionKind::Rename))
        }
        EntryKind::Folder => {
            let choice = prompt::menu_select(
                "Select action: ",
                &["..", "Create", "Rename"],
                "Enter action: ",
            )?;
            Ok(match choice {
                1 => Some(ActionKind::Create),
                2 => Some(ActionKind::Rename),
                _ => None,
            })
        }
    }
}

/// One full sheet session: build, hand off to the external editor, wait for
/// confirmation, apply the batch, clean up.
fn run_session(args: &Args, kind: EntryKind, action: ActionKind) -> Result<(), AppError> {
    println!();
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => prompt::read_directory()?,
    };
    if !dir.is_dir() {
        eprintln!(
            "{}",
            format!("'{}' not found.\n", dir.display()).red().bold()
        );
        std::process::exit(1);
    }

    let messages = Messages::default();
    let sheet = Sheet::new()?;

    let entries = match action {
        ActionKind::Create => {
            sheet.write_create(&dir)?;
            Vec::new()
        }
        ActionKind::Rename => {
            let entries = scanner::scan_entries(&dir, kind)?;
            if entries.is_empty() {
                eprintln!(
                    "{}",
                    format!("No entries found in '{}'.\n", dir.display())
                        .red()
                        .bold()
                );
                std::process::exit(1);
            }
            print_entries(&entries, kind);
            sheet.write_rename(&dir, &entries, kind.layout())?;
            entries
        }
    };

    sheet.open_in_viewer();

    if prompt::confirm_save()? {
        let rows = sheet.load_rows()?;
        match action {
            ActionKind::Create => {
                let outcome = actions::apply_creates(&rows, &dir, &messages);
                actions::print_create_outcome(&outcome, &messages);
            }
            ActionKind::Rename => {
                let outcome = actions::apply_renames(&rows, &dir, kind, &entries, &messages);
                actions::print_rename_outcome(&outcome, kind, &messages);
            }
        }
    } else {
        println!("{}", "*** Renaming Canceled! ***\n".red().bold());
    }

    if args.keep_sheet {
        println!("Spreadsheet kept at {}", sheet.path().display());
    } else {
        sheet.remove();
    }
    Ok(())
}

/// Terminal preview of what the sheet will contain, details only (the
/// editable column stays in the spreadsheet).
fn print_entries(entries: &[Entry], kind: EntryKind) {
    let layout = kind.layout();
    let detail_cols = layout.headers.len() - 1;

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(layout.headers[..detail_cols].to_vec());
    for entry in entries {
        table.add_row(entry.values()[..detail_cols].to_vec());
    }

    println!("\n{table}");
    println!(
        "{}",
        format!("{} {} found.\n", entries.len(), kind.label()).cyan()
    );
}
