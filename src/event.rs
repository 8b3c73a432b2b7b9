//! Change notifications consumed by field handlers

/// Surrogate for one native file handle.
///
/// Only the display name participates in engine state; file bytes never
/// enter the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The only data a change handler reads from an incoming UI notification:
/// a textual value, a toggle state, or a native file collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// A textual value (text, number, select and textarea inputs)
    Input(String),
    /// A toggle state (checkbox inputs)
    Toggle(bool),
    /// The currently selected native file collection
    Files(Vec<FileEntry>),
}

impl ChangeEvent {
    pub fn input(value: impl Into<String>) -> Self {
        ChangeEvent::Input(value.into())
    }
}

/// True only for a non-empty file collection
pub fn is_file_list(files: &[FileEntry]) -> bool {
    !files.is_empty()
}
