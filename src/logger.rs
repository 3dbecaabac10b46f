use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDateTime;

pub const LOG_FILE_NAME: &str = "vocab_quiz.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

pub fn init() {
    init_at(Path::new(LOG_FILE_NAME));
}

pub fn init_at(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

/// Appends a timestamped line. Silently does nothing before `init`.
pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let _ = write_entry(file, chrono::Local::now().naive_local(), message);
    }
}

fn write_entry<W: Write>(out: &mut W, at: NaiveDateTime, message: &str) -> io::Result<()> {
    writeln!(out, "[{}] {}", at.format("%Y-%m-%d %H:%M:%S"), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_entry_format() {
        let mut out = Vec::new();
        write_entry(&mut out, at(9, 7, 2), "Added \"cat\" to English").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[2024-03-05 09:07:02] Added \"cat\" to English\n"
        );
    }

    #[test]
    fn test_entries_append_one_per_line() {
        let mut out = Vec::new();
        write_entry(&mut out, at(23, 59, 59), "first").unwrap();
        write_entry(&mut out, at(0, 0, 0), "second").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["[2024-03-05 23:59:59] first", "[2024-03-05 00:00:00] second"]
        );
    }

    #[test]
    fn test_init_at_appends_timestamped_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("test.log");
        init_at(&path);
        log("Test log message");

        // No other test opens the global log file.
        let content = std::fs::read_to_string(&path).unwrap();
        let line = content
            .lines()
            .find(|line| line.ends_with("] Test log message"))
            .unwrap();
        let timestamp = &line[1..line.len() - "] Test log message".len()];
        assert!(NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
    }
}
