//! Output document writing and stdout reporting.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write the document to `path` as UTF-8, one line per row, each line
/// newline-terminated.
pub fn write_document(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for line in lines {
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
    }
    Ok(())
}

/// Echo the document to stdout.
pub fn print_document(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Character width of the last line, escapes included.
pub fn last_line_width(lines: &[String]) -> usize {
    lines.last().map_or(0, |line| line.chars().count())
}

/// Total character count with one newline per line. Used to check a
/// document against protocol message limits (e.g. IRC line length).
pub fn total_chars(lines: &[String]) -> usize {
    lines.iter().map(|line| line.chars().count() + 1).sum()
}

/// Print the width/size diagnostics that follow the echoed document.
pub fn print_stats(lines: &[String]) {
    println!("Width: {}", last_line_width(lines));
    println!("Total chars: {}", total_chars(lines));
}
