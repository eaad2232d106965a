use serde::{Deserialize, Serialize};

/// Kind of drive node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

/// A node in the drive tree.
///
/// `children` is only meaningful for folders. `None` means the contents are
/// unknown, which is distinct from `Some(vec![])` (a known empty folder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Entry>>,
}

impl Entry {
    /// Create a file entry.
    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::File,
            children: None,
        }
    }

    /// Create a folder entry with known contents.
    pub fn folder(id: impl Into<String>, name: impl Into<String>, children: Vec<Entry>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::Folder,
            children: Some(children),
        }
    }

    /// Create a folder entry whose contents are not known.
    #[cfg(test)]
    pub fn unloaded_folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::Folder,
            children: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Label shown in the Type column.
    ///
    /// Folders read "Folder"; files use the upper-cased text after the last
    /// `.` in the name, or the whole name when it has no dot.
    pub fn type_label(&self) -> String {
        match self.kind {
            EntryKind::Folder => "Folder".to_string(),
            EntryKind::File => self
                .name
                .rsplit('.')
                .next()
                .unwrap_or_default()
                .to_uppercase(),
        }
    }

    /// Lower-cased extension used for icon lookup (empty for folders and dotless names).
    pub fn extension(&self) -> String {
        if self.kind == EntryKind::Folder {
            return String::new();
        }
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => String::new(),
        }
    }

    /// Anchor the entry is exposed under when activated as a file.
    pub fn link_target(&self) -> String {
        format!("#file-{}", self.id)
    }
}
