use std::time::Instant;

use ratatui::layout::Rect;

use crate::components::help::HelpState;
use crate::config::AppConfig;
use crate::drive::entry::Entry;
use crate::drive::navigator::Navigator;
use crate::theme::{self, ThemeColors};

/// Which region receives navigation keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Listing,
    Breadcrumb,
}

/// Screen regions recorded during the last render, used for mouse hit-testing.
#[derive(Debug, Default, Clone, Copy)]
pub struct HitAreas {
    pub breadcrumb: Rect,
    pub listing_rows: Rect,
}

/// Main application state.
pub struct App {
    pub navigator: Navigator,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub focus: Focus,
    pub breadcrumb_cursor: usize,
    pub should_quit: bool,
    pub help: Option<HelpState>,
    pub status_message: Option<(String, Instant)>,
    pub theme: ThemeColors,
    pub use_icons: bool,
    pub show_type_column: bool,
    pub hit_areas: HitAreas,
}

impl App {
    /// Create an App browsing `entries` with settings from `config`.
    pub fn new(entries: Vec<Entry>, config: &AppConfig) -> Self {
        Self {
            navigator: Navigator::new(entries, config.root_label()),
            selected_index: 0,
            scroll_offset: 0,
            focus: Focus::Listing,
            breadcrumb_cursor: 0,
            should_quit: false,
            help: None,
            status_message: None,
            theme: theme::resolve_theme(&config.theme),
            use_icons: config.use_icons(),
            show_type_column: config.show_type_column(),
            hit_areas: HitAreas::default(),
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message with current timestamp.
    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    /// Clear the status message if it has been displayed for more than 3 seconds.
    pub fn clear_expired_status(&mut self) {
        if let Some((_, ref created)) = self.status_message {
            if created.elapsed().as_secs() > 3 {
                self.status_message = None;
            }
        }
    }

    /// The entry under the cursor, if the folder is not empty.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.navigator.visible_entries().get(self.selected_index)
    }

    /// Breadcrumb names joined into a path, e.g. `My Drive / Documents`.
    pub fn current_path_label(&self) -> String {
        self.navigator
            .breadcrumb_trail()
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }

    // ── Listing selection ───────────────────────────────────────────────────

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        let len = self.navigator.visible_entries().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up by one item.
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Jump to the first item.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last item.
    pub fn select_last(&mut self) {
        let len = self.navigator.visible_entries().len();
        if len > 0 {
            self.selected_index = len - 1;
        }
    }

    /// Adjust scroll offset so the selected row is inside a window of `visible_height` rows.
    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected_index + 1 - visible_height;
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────────

    /// Open the selected folder, or report the link target of a selected file.
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };
        if entry.is_folder() {
            self.navigator.descend_into(&entry);
            self.reset_listing();
        } else {
            self.set_status_message(format!("{} → {}", entry.name, entry.link_target()));
        }
    }

    /// Select and activate the row at `index` in the visible listing.
    pub fn activate_index(&mut self, index: usize) {
        if index < self.navigator.visible_entries().len() {
            self.selected_index = index;
            self.activate_selected();
        }
    }

    /// Go to the parent folder and select the folder that was just left.
    pub fn go_up(&mut self) {
        if self.navigator.depth() == 0 {
            return;
        }
        let came_from = self.navigator.current_folder().id.clone();
        self.navigator.ascend();
        self.reset_listing();
        self.reselect(&came_from);
    }

    /// Jump to breadcrumb segment `index`, keeping the path child selected.
    ///
    /// Indices outside the current trail are ignored.
    pub fn jump_to_breadcrumb(&mut self, index: usize) {
        let trail = self.navigator.breadcrumb_trail();
        if index >= trail.len() {
            return;
        }
        let came_from = trail.get(index + 1).map(|e| e.id.clone());

        self.navigator.jump_to_breadcrumb(index);
        self.reset_listing();
        if let Some(id) = came_from {
            self.reselect(&id);
        }
    }

    /// Move the selection onto the visible entry with `id`, if present.
    fn reselect(&mut self, id: &str) {
        if let Some(pos) = self
            .navigator
            .visible_entries()
            .iter()
            .position(|e| e.id == id)
        {
            self.selected_index = pos;
        }
    }

    fn reset_listing(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.focus = Focus::Listing;
        self.breadcrumb_cursor = self.navigator.depth();
    }

    // ── Breadcrumb focus ────────────────────────────────────────────────────

    /// Switch keyboard focus between the listing and the breadcrumb strip.
    pub fn toggle_breadcrumb_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Listing => {
                self.breadcrumb_cursor = self.navigator.depth();
                Focus::Breadcrumb
            }
            Focus::Breadcrumb => Focus::Listing,
        };
    }

    pub fn breadcrumb_cursor_left(&mut self) {
        self.breadcrumb_cursor = self.breadcrumb_cursor.saturating_sub(1);
    }

    pub fn breadcrumb_cursor_right(&mut self) {
        if self.breadcrumb_cursor < self.navigator.depth() {
            self.breadcrumb_cursor += 1;
        }
    }

    /// Jump to the segment under the breadcrumb cursor.
    pub fn activate_breadcrumb_cursor(&mut self) {
        self.jump_to_breadcrumb(self.breadcrumb_cursor);
    }

    // ── Help overlay ────────────────────────────────────────────────────────

    pub fn toggle_help(&mut self) {
        self.help = match self.help {
            Some(_) => None,
            None => Some(HelpState::default()),
        };
    }
}
