use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::theme::ThemeColors;

/// State for the help overlay.
#[derive(Debug, Default)]
pub struct HelpState {
    /// Scroll offset for the help content.
    pub scroll_offset: usize,
}

impl HelpState {
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < HelpOverlay::total_lines() {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

/// A single keybinding entry for display.
struct KeyEntry {
    key: &'static str,
    description: &'static str,
}

/// A category of keybindings.
struct KeyCategory {
    name: &'static str,
    entries: &'static [KeyEntry],
}

const LISTING_KEYS: &[KeyEntry] = &[
    KeyEntry {
        key: "j / ↓",
        description: "Move down",
    },
    KeyEntry {
        key: "k / ↑",
        description: "Move up",
    },
    KeyEntry {
        key: "g / Home",
        description: "Jump to first item",
    },
    KeyEntry {
        key: "G / End",
        description: "Jump to last item",
    },
    KeyEntry {
        key: "Enter / l / →",
        description: "Open folder (files show their link)",
    },
    KeyEntry {
        key: "Backspace / h / ←",
        description: "Go to parent folder",
    },
];

const BREADCRUMB_KEYS: &[KeyEntry] = &[
    KeyEntry {
        key: "Tab",
        description: "Focus breadcrumb strip / listing",
    },
    KeyEntry {
        key: "← / →",
        description: "Move along the breadcrumb (when focused)",
    },
    KeyEntry {
        key: "Enter",
        description: "Jump to breadcrumb (when focused)",
    },
    KeyEntry {
        key: "1 - 9",
        description: "Jump to breadcrumb segment by position",
    },
];

const MOUSE_KEYS: &[KeyEntry] = &[
    KeyEntry {
        key: "Click row",
        description: "Open folder / show file link",
    },
    KeyEntry {
        key: "Click breadcrumb",
        description: "Jump to that folder",
    },
    KeyEntry {
        key: "Wheel",
        description: "Move selection",
    },
];

const GENERAL_KEYS: &[KeyEntry] = &[
    KeyEntry {
        key: "?",
        description: "Toggle this help",
    },
    KeyEntry {
        key: "q / Ctrl+C",
        description: "Quit",
    },
];

const CATEGORIES: &[KeyCategory] = &[
    KeyCategory {
        name: "Listing",
        entries: LISTING_KEYS,
    },
    KeyCategory {
        name: "Breadcrumb",
        entries: BREADCRUMB_KEYS,
    },
    KeyCategory {
        name: "Mouse",
        entries: MOUSE_KEYS,
    },
    KeyCategory {
        name: "General",
        entries: GENERAL_KEYS,
    },
];

/// Centered overlay listing every key binding.
pub struct HelpOverlay<'a> {
    theme: &'a ThemeColors,
    scroll_offset: usize,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a ThemeColors, scroll_offset: usize) -> Self {
        Self {
            theme,
            scroll_offset,
        }
    }

    fn build_content_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            " Keyboard & Mouse",
            Style::default()
                .fg(self.theme.accent_fg)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        for category in CATEGORIES {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("── {} ", category.name),
                    Style::default()
                        .fg(self.theme.accent_fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("─".repeat(30), Style::default().fg(self.theme.dim_fg)),
            ]));

            for entry in category.entries {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", entry.key),
                        Style::default()
                            .fg(self.theme.folder_icon_fg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(entry.description, Style::default().fg(self.theme.app_fg)),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            " Press ? or Esc to close ",
            Style::default().fg(self.theme.dim_fg),
        )]));

        lines
    }

    /// Get total number of content lines (for scroll bounds).
    pub fn total_lines() -> usize {
        let body: usize = CATEGORIES.iter().map(|c| c.entries.len() + 2).sum();
        // title + blank + body + footer
        2 + body + 1
    }
}

impl<'a> Widget for HelpOverlay<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlay_width = (area.width as f32 * 0.70).min(70.0) as u16;
        let overlay_height = (area.height as f32 * 0.80).min(30.0) as u16;
        if overlay_width < 4 || overlay_height < 3 {
            return;
        }

        let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
        let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
        let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

        Clear.render(overlay_area, buf);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused_fg))
            .style(Style::default().bg(self.theme.panel_bg));

        let inner = block.inner(overlay_area);
        block.render(overlay_area, buf);

        let content_lines = self.build_content_lines();
        let visible_height = inner.height as usize;

        for (i, line) in content_lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .enumerate()
        {
            buf.set_line(
                inner.x + 1,
                inner.y + i as u16,
                line,
                inner.width.saturating_sub(2),
            );
        }

        if content_lines.len() > visible_height {
            let total = content_lines.len();
            let indicator = Span::styled(
                format!(" {}/{} ", (self.scroll_offset + 1).min(total), total),
                Style::default().fg(self.theme.dim_fg),
            );
            let ind_width = indicator.width() as u16;
            let ind_x = overlay_area.x + overlay_area.width.saturating_sub(ind_width + 1);
            let ind_y = overlay_area.y + overlay_area.height - 1;
            buf.set_span(ind_x, ind_y, &indicator, ind_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_have_entries() {
        for cat in CATEGORIES {
            assert!(
                !cat.entries.is_empty(),
                "Category '{}' has no entries",
                cat.name
            );
        }
    }

    #[test]
    fn content_lines_match_total() {
        let theme = crate::theme::dark_theme();
        let overlay = HelpOverlay::new(&theme, 0);
        assert_eq!(overlay.build_content_lines().len(), HelpOverlay::total_lines());
    }

    #[test]
    fn scroll_is_bounded() {
        let mut state = HelpState::default();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        for _ in 0..200 {
            state.scroll_down();
        }
        assert_eq!(state.scroll_offset, HelpOverlay::total_lines() - 1);
    }

    #[test]
    fn renders_title_in_small_area() {
        let theme = crate::theme::dark_theme();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&theme, 0).render(area, &mut buf);
        let text: String = (0..20)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|pos| buf.cell(pos).unwrap().symbol().to_string())
            .collect();
        assert!(text.contains("Help"));
        assert!(text.contains("Keyboard & Mouse"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let theme = crate::theme::dark_theme();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&theme, 0).render(area, &mut buf);
    }
}
