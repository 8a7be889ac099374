use crate::errors::AppError;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Prints a numbered menu and returns the chosen index. A non-numeric or
/// out-of-range answer is an invalid choice; end of input is an
/// interruption.
pub fn menu_select(title: &str, options: &[&str], prompt: &str) -> Result<usize, AppError> {
    println!("{}", title.blue());
    for (i, option) in options.iter().enumerate() {
        println!("{} {}", format!("[{i}]").bright_black(), option.magenta());
    }
    println!();

    let input = read_line(prompt)?;
    let choice: usize = input.parse().map_err(|_| AppError::InvalidChoice)?;
    if choice >= options.len() {
        return Err(AppError::InvalidChoice);
    }
    Ok(choice)
}

/// Reads a directory path, trimming surrounding quotes as pasted by file
/// managers.
pub fn read_directory() -> Result<PathBuf, AppError> {
    let input = read_line("Enter Directory Path: ")?;
    Ok(PathBuf::from(strip_quotes(&input)))
}

/// Yes/no confirmation loop; anything other than y/yes/n/no re-prompts.
pub fn confirm_save() -> Result<bool, AppError> {
    loop {
        let answer = read_line("Save changes? (y/n): ")?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", "Invalid Choice!\n".red().bold()),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{}", prompt.cyan());
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(AppError::Interrupted);
    }
    Ok(line.trim().to_string())
}

fn strip_quotes(input: &str) -> &str {
    input.trim_matches(|c| c == '\'' || c == '"')
}
