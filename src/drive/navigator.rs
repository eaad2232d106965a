use crate::drive::entry::Entry;

/// Id of the synthetic entry at the head of every breadcrumb trail.
pub const ROOT_ID: &str = "root";

/// Default label of the root breadcrumb.
pub const DEFAULT_ROOT_LABEL: &str = "My Drive";

/// Folder navigation state over a read-only entry tree.
///
/// `visible` is always the children of the trail tail, or the root set when
/// the trail holds only the root marker.
#[derive(Debug, Clone)]
pub struct Navigator {
    root_entries: Vec<Entry>,
    trail: Vec<Entry>,
    visible: Vec<Entry>,
}

impl Navigator {
    /// Create a navigator at depth 0 over `root_entries`.
    pub fn new(root_entries: Vec<Entry>, root_label: &str) -> Self {
        let root = Entry::folder(ROOT_ID, root_label, Vec::new());
        Self {
            visible: root_entries.clone(),
            root_entries,
            trail: vec![root],
        }
    }

    pub fn visible_entries(&self) -> &[Entry] {
        &self.visible
    }

    pub fn breadcrumb_trail(&self) -> &[Entry] {
        &self.trail
    }

    pub fn root_entries(&self) -> &[Entry] {
        &self.root_entries
    }

    /// Number of folders below the root; 0 at the root.
    pub fn depth(&self) -> usize {
        self.trail.len() - 1
    }

    /// The folder whose contents are visible (the root marker at depth 0).
    pub fn current_folder(&self) -> &Entry {
        &self.trail[self.trail.len() - 1]
    }

    /// Enter a folder. Files are ignored.
    ///
    /// A folder with unknown contents is entered with an empty listing.
    pub fn descend_into(&mut self, entry: &Entry) {
        if !entry.is_folder() {
            log::debug!("ignoring descend into file {}", entry.id);
            return;
        }
        self.visible = entry.children.clone().unwrap_or_default();
        self.trail.push(entry.clone());
        log::debug!(
            "descended into {} ({} entries, depth {})",
            entry.id,
            self.visible.len(),
            self.depth()
        );
    }

    /// Truncate the trail so that segment `index` becomes the current folder.
    ///
    /// `index` must come from enumerating the current trail. Out-of-range
    /// indices panic in debug builds and are ignored in release builds.
    pub fn jump_to_breadcrumb(&mut self, index: usize) {
        debug_assert!(
            index < self.trail.len(),
            "breadcrumb index {} out of range for trail of length {}",
            index,
            self.trail.len()
        );
        if index >= self.trail.len() {
            log::warn!(
                "ignoring breadcrumb jump to {} (trail length {})",
                index,
                self.trail.len()
            );
            return;
        }

        self.trail.truncate(index + 1);
        self.visible = if index == 0 {
            self.root_entries.clone()
        } else {
            self.current_folder().children.clone().unwrap_or_default()
        };
        log::debug!("jumped to breadcrumb {}", index);
    }

    /// Go to the parent folder. No-op at the root.
    pub fn ascend(&mut self) {
        if self.depth() > 0 {
            self.jump_to_breadcrumb(self.depth() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::dataset::builtin_dataset;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn setup() -> Navigator {
        Navigator::new(builtin_dataset(), DEFAULT_ROOT_LABEL)
    }

    fn find(nav: &Navigator, name: &str) -> Entry {
        nav.visible_entries()
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .unwrap()
    }

    /// Visible entries must equal the tail's children (or the root set at depth 0).
    fn assert_consistent(nav: &Navigator) {
        let expected = if nav.breadcrumb_trail().len() == 1 {
            nav.root_entries().to_vec()
        } else {
            nav.current_folder().children.clone().unwrap_or_default()
        };
        assert_eq!(nav.visible_entries(), expected.as_slice());
        assert_eq!(nav.breadcrumb_trail()[0].id, ROOT_ID);
        assert_eq!(nav.breadcrumb_trail().len(), nav.depth() + 1);
    }

    fn deep_tree() -> Vec<Entry> {
        vec![Entry::folder(
            "a",
            "A",
            vec![Entry::folder(
                "b",
                "B",
                vec![
                    Entry::folder("c", "C", vec![Entry::file("c-1", "deep.txt")]),
                    Entry::unloaded_folder("u", "Unloaded"),
                ],
            )],
        )]
    }

    #[test]
    fn starts_at_root() {
        let nav = setup();
        assert_eq!(nav.depth(), 0);
        assert_eq!(names(nav.breadcrumb_trail()), ["My Drive"]);
        assert_eq!(nav.visible_entries(), builtin_dataset().as_slice());
    }

    #[test]
    fn root_label_is_configurable() {
        let nav = Navigator::new(vec![], "Shared");
        assert_eq!(nav.current_folder().name, "Shared");
        assert!(nav.visible_entries().is_empty());
    }

    #[test]
    fn open_documents_then_jump_home() {
        let mut nav = setup();
        let docs = find(&nav, "Documents");
        nav.descend_into(&docs);
        assert_eq!(
            names(nav.visible_entries()),
            ["Report.docx", "Presentation.pptx"]
        );
        assert_eq!(names(nav.breadcrumb_trail()), ["My Drive", "Documents"]);

        nav.jump_to_breadcrumb(0);
        assert_eq!(
            names(nav.visible_entries()),
            ["Documents", "Images", "Budget.xlsx", "Notes.txt"]
        );
        assert_eq!(names(nav.breadcrumb_trail()), ["My Drive"]);
    }

    #[test]
    fn descend_into_file_is_noop() {
        let mut nav = setup();
        let before = (nav.visible_entries().to_vec(), nav.breadcrumb_trail().to_vec());
        let budget = find(&nav, "Budget.xlsx");
        nav.descend_into(&budget);
        assert_eq!(nav.visible_entries(), before.0.as_slice());
        assert_eq!(nav.breadcrumb_trail(), before.1.as_slice());
    }

    #[test]
    fn descend_into_file_inside_folder_is_noop() {
        let mut nav = setup();
        let images = find(&nav, "Images");
        nav.descend_into(&images);
        let photo = find(&nav, "Family.png");
        nav.descend_into(&photo);
        assert_eq!(nav.depth(), 1);
        assert_eq!(names(nav.visible_entries()), ["Vacation.jpg", "Family.png"]);
    }

    #[test]
    fn unloaded_folder_shows_empty_and_advances_trail() {
        let mut nav = Navigator::new(deep_tree(), DEFAULT_ROOT_LABEL);
        nav.descend_into(&find(&nav, "A"));
        nav.descend_into(&find(&nav, "B"));
        nav.descend_into(&find(&nav, "Unloaded"));
        assert!(nav.visible_entries().is_empty());
        assert_eq!(names(nav.breadcrumb_trail()), ["My Drive", "A", "B", "Unloaded"]);
        assert_consistent(&nav);
    }

    #[test]
    fn jump_is_idempotent_at_every_depth() {
        let mut nav = Navigator::new(deep_tree(), DEFAULT_ROOT_LABEL);
        nav.descend_into(&find(&nav, "A"));
        nav.descend_into(&find(&nav, "B"));
        nav.descend_into(&find(&nav, "C"));

        for k in (0..=3).rev() {
            nav.jump_to_breadcrumb(k);
            let once = (nav.visible_entries().to_vec(), nav.breadcrumb_trail().to_vec());
            nav.jump_to_breadcrumb(k);
            assert_eq!(nav.visible_entries(), once.0.as_slice());
            assert_eq!(nav.breadcrumb_trail(), once.1.as_slice());
            assert_eq!(nav.depth(), k);
        }
    }

    #[test]
    fn jump_to_middle_segment() {
        let mut nav = Navigator::new(deep_tree(), DEFAULT_ROOT_LABEL);
        nav.descend_into(&find(&nav, "A"));
        nav.descend_into(&find(&nav, "B"));
        nav.descend_into(&find(&nav, "C"));
        assert_eq!(names(nav.visible_entries()), ["deep.txt"]);

        nav.jump_to_breadcrumb(1);
        assert_eq!(names(nav.breadcrumb_trail()), ["My Drive", "A"]);
        assert_eq!(names(nav.visible_entries()), ["B"]);
    }

    #[test]
    fn jump_to_current_tail_keeps_state() {
        let mut nav = setup();
        nav.descend_into(&find(&nav, "Documents"));
        nav.jump_to_breadcrumb(1);
        assert_eq!(names(nav.breadcrumb_trail()), ["My Drive", "Documents"]);
        assert_eq!(
            names(nav.visible_entries()),
            ["Report.docx", "Presentation.pptx"]
        );
    }

    #[test]
    fn every_root_folder_round_trips() {
        let root = builtin_dataset();
        for folder in root.iter().filter(|e| e.is_folder()) {
            let mut nav = setup();
            nav.descend_into(folder);
            nav.jump_to_breadcrumb(0);
            assert_eq!(nav.visible_entries(), root.as_slice());
            assert_eq!(names(nav.breadcrumb_trail()), ["My Drive"]);
        }
    }

    #[test]
    fn consistent_after_mixed_operations() {
        let mut nav = Navigator::new(deep_tree(), DEFAULT_ROOT_LABEL);
        assert_consistent(&nav);
        nav.descend_into(&find(&nav, "A"));
        assert_consistent(&nav);
        nav.descend_into(&find(&nav, "B"));
        assert_consistent(&nav);
        nav.jump_to_breadcrumb(1);
        assert_consistent(&nav);
        nav.descend_into(&find(&nav, "B"));
        nav.descend_into(&find(&nav, "C"));
        assert_consistent(&nav);
        nav.descend_into(&find(&nav, "deep.txt"));
        assert_consistent(&nav);
        nav.ascend();
        assert_consistent(&nav);
        nav.jump_to_breadcrumb(0);
        assert_consistent(&nav);
    }

    #[test]
    fn ascend_goes_to_parent_and_stops_at_root() {
        let mut nav = Navigator::new(deep_tree(), DEFAULT_ROOT_LABEL);
        nav.descend_into(&find(&nav, "A"));
        nav.descend_into(&find(&nav, "B"));
        nav.ascend();
        assert_eq!(nav.current_folder().name, "A");
        nav.ascend();
        assert_eq!(nav.depth(), 0);
        nav.ascend();
        assert_eq!(nav.depth(), 0);
        assert_eq!(nav.visible_entries(), nav.root_entries());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn jump_out_of_range_panics_in_debug() {
        let mut nav = setup();
        nav.jump_to_breadcrumb(1);
    }
}
