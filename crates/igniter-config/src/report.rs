//! Non-fatal diagnostics collected while parsing and translating.

use serde::Serialize;

/// Severity of a report entry. None of these ever fail a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Something was dropped or reinterpreted in a way that may change
    /// behaviour.
    Warning,
    /// A deprecated field was folded into its replacement.
    Deprecated,
    /// A structural change with no loss of meaning.
    Info,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Deprecated => write!(f, "deprecated"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// One diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Severity.
    pub kind: EntryKind,
    /// Dotted path of the field the entry refers to (e.g.
    /// `storage.files.0.path`), when it refers to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} at {path}: {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// Ordered accumulator of [`Entry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, kind: EntryKind, path: Option<String>, message: impl Into<String>) {
        let entry = Entry {
            kind,
            path,
            message: message.into(),
        };
        if kind == EntryKind::Warning {
            tracing::warn!(entry = %entry, "lossy translation");
        }
        self.entries.push(entry);
    }

    /// Append a warning about the field at `path`.
    pub fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(EntryKind::Warning, Some(path.into()), message);
    }

    /// Append a deprecation notice about the field at `path`.
    pub fn deprecated(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(EntryKind::Deprecated, Some(path.into()), message);
    }

    /// Append an informational entry about the field at `path`.
    pub fn info(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(EntryKind::Info, Some(path.into()), message);
    }

    /// All entries in the order they were recorded.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries of one kind.
    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_order_and_kinds() {
        let mut report = Report::new();
        report.info("storage.files.0", "moved");
        report.warn("storage.disks.0.partitions.1.size", "rounded down");
        report.deprecated("systemd.units.0.enable", "use enabled");

        assert_eq!(report.len(), 3);
        let kinds: Vec<_> = report.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EntryKind::Info, EntryKind::Warning, EntryKind::Deprecated]
        );
        assert_eq!(report.of_kind(EntryKind::Warning).count(), 1);
    }

    #[test]
    fn test_entry_display() {
        let mut report = Report::new();
        report.warn("passwd.users.0.shell", "conflicting value dropped");
        report.push(EntryKind::Info, None, "no path");

        let text = report.to_string();
        assert!(text.contains("warning at passwd.users.0.shell: conflicting value dropped"));
        assert!(text.contains("info: no path"));
    }

    #[test]
    fn test_report_serializes_as_list() {
        let mut report = Report::new();
        report.info("ignition.config.append", "renamed to merge");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json[0]["kind"], "info");
        assert_eq!(json[0]["path"], "ignition.config.append");
    }
}
