use crate::errors::AppError;
use crate::types::{CREATE_LAYOUT, Entry, SheetLayout};
use calamine::{Data, Reader, Xlsx, open_workbook};
use colored::Colorize;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs, io, thread, time::Duration};
use uuid::Uuid;

const SHEET_TITLE: &str = "Rename Folders";
const FIRST_DATA_ROW: u32 = 2;
const INSTRUCTION_ROW: u32 = 0;
const HEADER_ROW: u32 = 1;
// Pre-seeded editable rows on the create sheet
const SEED_ROWS: u32 = 9;

const FONT: &str = "Verdana";
const BLUE_DODGER: Color = Color::RGB(0x1E90FF);
const GRAY_DARK: Color = Color::RGB(0x212427);
const GRAY_DARK_MEDIUM: Color = Color::RGB(0x808080);
const GRAY_LIGHT: Color = Color::RGB(0xC0C0C0);
const PURPLE: Color = Color::RGB(0x800080);

/// One reconciled spreadsheet row; blank cells are `None`.
pub type SheetRow = Vec<Option<String>>;

/// The generated spreadsheet on disk: written once, handed to an external
/// editor, read back once, deleted at the end of the session.
#[derive(Debug)]
pub struct Sheet {
    filename: String,
    save_dir: PathBuf,
}

impl Sheet {
    pub fn new() -> io::Result<Self> {
        Ok(Self::in_dir(&env::current_dir()?))
    }

    #[must_use]
    pub fn in_dir(save_dir: &Path) -> Self {
        Self {
            filename: format!("{}.xlsx", Uuid::new_v4()),
            save_dir: save_dir.to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.save_dir.join(&self.filename)
    }

    /// Writes the rename sheet: instruction row, header banner, one styled
    /// row per entry with a blank editable cell.
    pub fn write_rename(
        &self,
        input_dir: &Path,
        entries: &[Entry],
        layout: SheetLayout,
    ) -> Result<(), AppError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_TITLE)?;

        let last_col = (layout.headers.len() - 1) as u16;

        let instructions = self.instructions(
            "Enter new names in the 'Rename' column to update file or folder names.",
            input_dir,
        );
        worksheet.merge_range(
            INSTRUCTION_ROW,
            0,
            INSTRUCTION_ROW,
            last_col,
            instructions.as_str(),
            &instruction_format(),
        )?;
        worksheet.set_row_height(INSTRUCTION_ROW, 100)?;

        let header = header_format();
        for (col, title) in layout.headers.iter().enumerate() {
            worksheet.write_string_with_format(HEADER_ROW, col as u16, *title, &header)?;
            worksheet.set_column_width(col as u16, 25)?;
        }
        worksheet.set_row_height(HEADER_ROW, 26)?;

        let name_fmt = data_format(GRAY_DARK, FormatAlign::Left);
        let detail_fmt = data_format(GRAY_DARK_MEDIUM, FormatAlign::Right);
        let editable_fmt = data_format(PURPLE, FormatAlign::Left);

        for (i, entry) in entries.iter().enumerate() {
            let row = FIRST_DATA_ROW + i as u32;
            for (col, value) in entry.values().iter().enumerate() {
                let fmt = if col == 0 {
                    &name_fmt
                } else if col == layout.editable_col {
                    &editable_fmt
                } else {
                    &detail_fmt
                };
                worksheet.write_string_with_format(row, col as u16, value.as_str(), fmt)?;
            }
        }

        workbook.save(self.path())?;
        log::info!("wrote rename sheet to {}", self.path().display());
        Ok(())
    }

    /// Writes the create sheet: a single name column with pre-seeded blank
    /// editable rows.
    pub fn write_create(&self, input_dir: &Path) -> Result<(), AppError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_TITLE)?;

        worksheet.set_column_width(0, 67)?;

        let instructions = self.instructions(
            "Enter new names in the 'Folder Name' column to create new folders.",
            input_dir,
        );
        worksheet.write_string_with_format(
            INSTRUCTION_ROW,
            0,
            instructions.as_str(),
            &instruction_format(),
        )?;
        worksheet.set_row_height(INSTRUCTION_ROW, 100)?;

        worksheet.write_string_with_format(
            HEADER_ROW,
            0,
            CREATE_LAYOUT.headers[0],
            &header_format(),
        )?;
        worksheet.set_row_height(HEADER_ROW, 25)?;

        let editable_fmt = data_format(PURPLE, FormatAlign::Left);
        for row in FIRST_DATA_ROW..FIRST_DATA_ROW + SEED_ROWS {
            worksheet.write_string_with_format(row, 0, "", &editable_fmt)?;
        }

        workbook.save(self.path())?;
        log::info!("wrote create sheet to {}", self.path().display());
        Ok(())
    }

    /// Spawns the platform spreadsheet application on the saved file and
    /// waits a short fixed grace period. There is no readiness signal from
    /// the spawned application; the delay is the only synchronization.
    pub fn open_in_viewer(&self) {
        let command = match env::consts::OS {
            "macos" => Some("open"),
            "linux" => Some("libreoffice"),
            "windows" => Some("excel.exe"),
            _ => None,
        };

        let Some(command) = command else {
            println!("Please open the spreadsheet manually.");
            return;
        };

        match Command::new(command).arg(self.path()).spawn() {
            Ok(_) => {
                log::info!("launched {command} on {}", self.filename);
                println!("{}", "\nInitializing spreadsheet...\n".magenta());
                thread::sleep(Duration::from_secs(3));
            }
            Err(err) => {
                eprintln!("Could not launch '{command}': {err}");
                println!("Please open the spreadsheet manually.");
            }
        }
    }

    /// Reloads the saved sheet and returns its data rows (row 3 onwards) as
    /// computed cell values. Blank and whitespace-only cells come back as
    /// `None`. Single pass; reopen the file to restart.
    pub fn load_rows(&self) -> Result<Vec<SheetRow>, AppError> {
        let mut workbook: Xlsx<_> = open_workbook(self.path())?;
        let range = workbook.worksheet_range(SHEET_TITLE)?;

        let rows: Vec<SheetRow> = range
            .rows()
            .skip(FIRST_DATA_ROW as usize)
            .map(|row| row.iter().map(cell_value).collect())
            .collect();
        log::debug!("loaded {} data rows from {}", rows.len(), self.filename);
        Ok(rows)
    }

    /// Deletes the sheet file. Failure is reported, never fatal.
    pub fn remove(&self) {
        if let Err(err) = fs::remove_file(self.path()) {
            eprintln!(
                "{}",
                format!("Could not delete '{}': {err}", self.path().display())
                    .red()
                    .bold()
            );
        } else {
            log::info!("deleted {}", self.filename);
        }
    }

    fn instructions(&self, first_step: &str, input_dir: &Path) -> String {
        format!(
            "Working Directory:  {}\n\
             Instructions:\n\
             \x20   1. {first_step}\n\
             \x20   2. Save as: {}\n\
             \x20       in {}\n\
             \x20   3. Go back to the application and type 'yes' to save changes.",
            input_dir.display(),
            self.filename,
            self.save_dir.display()
        )
    }
}

fn instruction_format() -> Format {
    Format::new()
        .set_font_name(FONT)
        .set_font_color(GRAY_DARK)
        .set_italic()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
}

fn header_format() -> Format {
    Format::new()
        .set_font_name(FONT)
        .set_font_color(Color::White)
        .set_background_color(BLUE_DODGER)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(GRAY_LIGHT)
}

// "@" forces text format so names like "123" or "1/2/2024" survive the
// round trip through the external editor
fn data_format(color: Color, align: FormatAlign) -> Format {
    Format::new()
        .set_font_name(FONT)
        .set_font_color(color)
        .set_align(align)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(GRAY_LIGHT)
        .set_num_format("@")
}

fn cell_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_entries;
    use crate::types::EntryKind;
    use tempfile::TempDir;

    fn scan_files(dir: &Path) -> Vec<Entry> {
        scan_entries(dir, EntryKind::File).unwrap()
    }

    #[test]
    fn test_sheet_filenames_are_unique() {
        let tmp = TempDir::new().unwrap();
        let a = Sheet::in_dir(tmp.path());
        let b = Sheet::in_dir(tmp.path());
        assert_ne!(a.path(), b.path());
        assert_eq!(a.path().extension().unwrap(), "xlsx");
    }

    #[test]
    fn test_rename_sheet_round_trip_preserves_names() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir(&work).unwrap();
        fs::write(work.join("a.txt"), b"a").unwrap();
        fs::write(work.join("b.txt"), b"b").unwrap();

        let entries = scan_files(&work);
        let sheet = Sheet::in_dir(tmp.path());
        sheet
            .write_rename(&work, &entries, EntryKind::File.layout())
            .unwrap();

        let rows = sheet.load_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].as_deref(), Some("a.txt"));
        assert_eq!(rows[1][0].as_deref(), Some("b.txt"));
        // untouched editable cells reconcile to no pending operation
        assert!(rows[0][5].is_none());
        assert!(rows[1][5].is_none());
    }

    #[test]
    fn test_rename_sheet_detail_columns_survive() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir(&work).unwrap();
        fs::write(work.join("notes.txt"), vec![b'x'; 2048]).unwrap();

        let entries = scan_files(&work);
        let sheet = Sheet::in_dir(tmp.path());
        sheet
            .write_rename(&work, &entries, EntryKind::File.layout())
            .unwrap();

        let rows = sheet.load_rows().unwrap();
        assert_eq!(rows[0][3].as_deref(), Some("2 KB"));
        assert_eq!(rows[0][4].as_deref(), Some("Plain Text File"));
    }

    #[test]
    fn test_create_sheet_seeds_blank_rows() {
        let tmp = TempDir::new().unwrap();
        let sheet = Sheet::in_dir(tmp.path());
        sheet.write_create(tmp.path()).unwrap();

        let rows = sheet.load_rows().unwrap();
        assert_eq!(rows.len(), SEED_ROWS as usize);
        assert!(rows.iter().all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn test_load_rows_skips_instruction_and_header() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir(&work).unwrap();
        fs::write(work.join("only.txt"), b"x").unwrap();

        let entries = scan_files(&work);
        let sheet = Sheet::in_dir(tmp.path());
        sheet
            .write_rename(&work, &entries, EntryKind::File.layout())
            .unwrap();

        let rows = sheet.load_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0].as_deref(), Some("only.txt"));
    }

    #[test]
    fn test_remove_deletes_the_file() {
        let tmp = TempDir::new().unwrap();
        let sheet = Sheet::in_dir(tmp.path());
        sheet.write_create(tmp.path()).unwrap();
        assert!(sheet.path().exists());
        sheet.remove();
        assert!(!sheet.path().exists());
    }

    #[test]
    fn test_cell_value_blanks() {
        assert_eq!(cell_value(&Data::Empty), None);
        assert_eq!(cell_value(&Data::String("  ".to_string())), None);
        assert_eq!(
            cell_value(&Data::String("name".to_string())),
            Some("name".to_string())
        );
        // forced-text cells can still come back numeric from some editors
        assert_eq!(cell_value(&Data::Float(2.0)), Some("2".to_string()));
    }
}
