//! Append-only audit log shared by the scorer and the selector for one run.

use std::fs;
use std::io;
use std::path::Path;

/// Ordered text lines recording how each candidate was judged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLog {
    lines: Vec<String>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// One entry per line, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_keeps_order() {
        let mut log = AuditLog::new();
        log.push("first");
        log.push(String::from("second"));

        assert_eq!(log.lines(), &["first".to_string(), "second".to_string()]);
        assert_eq!(log.last(), Some("second"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_render_terminates_every_line() {
        let mut log = AuditLog::new();
        log.push("Method tried: drop");
        log.push("Nulls removed: 4");

        assert_eq!(log.render(), "Method tried: drop\nNulls removed: 4\n");
        assert_eq!(AuditLog::new().render(), "");
    }

    #[test]
    fn test_contains() {
        let mut log = AuditLog::new();
        log.push("Strategy score: 0.8000");
        assert!(log.contains("score: 0.8"));
        assert!(!log.contains("Best strategy"));
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut log = AuditLog::new();
        log.push("Processing file: in.csv");

        log.write_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Processing file: in.csv\n");
    }
}
