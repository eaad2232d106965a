use std::collections::HashSet;
use std::path::Path;

use crate::drive::entry::{Entry, EntryKind};
use crate::drive::navigator::ROOT_ID;
use crate::error::{AppError, Result};

/// The built-in "My Drive" contents.
pub fn builtin_dataset() -> Vec<Entry> {
    vec![
        Entry::folder(
            "1",
            "Documents",
            vec![
                Entry::file("1-1", "Report.docx"),
                Entry::file("1-2", "Presentation.pptx"),
            ],
        ),
        Entry::folder(
            "2",
            "Images",
            vec![
                Entry::file("2-1", "Vacation.jpg"),
                Entry::file("2-2", "Family.png"),
            ],
        ),
        Entry::file("3", "Budget.xlsx"),
        Entry::file("4", "Notes.txt"),
    ]
}

/// Read a JSON array of entries from `path` and validate it.
pub fn load_dataset(path: &Path) -> Result<Vec<Entry>> {
    let content = std::fs::read_to_string(path)?;
    let entries = parse_dataset(&content)?;
    log::info!(
        "loaded dataset from {} ({} root entries)",
        path.display(),
        entries.len()
    );
    Ok(entries)
}

/// Parse and validate a dataset from JSON text.
pub fn parse_dataset(json: &str) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;
    validate(&entries)?;
    Ok(entries)
}

/// Check that ids are unique across the whole tree and that files carry no children.
///
/// `ROOT_ID` belongs to the breadcrumb root marker and counts as taken.
pub fn validate(entries: &[Entry]) -> Result<()> {
    let mut seen = HashSet::from([ROOT_ID]);
    validate_level(entries, &mut seen)
}

fn validate_level<'a>(entries: &'a [Entry], seen: &mut HashSet<&'a str>) -> Result<()> {
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(AppError::DuplicateId(entry.id.clone()));
        }
        match (entry.kind, &entry.children) {
            (EntryKind::File, Some(_)) => {
                return Err(AppError::FileWithChildren(entry.id.clone()));
            }
            (EntryKind::Folder, Some(children)) => validate_level(children, seen)?,
            _ => {}
        }
    }
    Ok(())
}

/// Render a dataset as pretty JSON in the same shape `load_dataset` reads.
pub fn to_json(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
