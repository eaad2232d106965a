//! Page header and section header.
//!
//! The search box and the Search, Settings and Upload buttons are drawn
//! only. No key or click reaches them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

/// Placeholder text of the search box.
pub const SEARCH_PLACEHOLDER: &str = "Search in Drive";

const SEARCH_BOX_WIDTH: usize = 28;

/// Write `spans` flush against the right edge of `area`.
fn set_right_aligned(buf: &mut Buffer, area: Rect, spans: Vec<Span<'_>>) {
    let line = Line::from(spans);
    let width = (line.width() as u16).min(area.width);
    let x = area.x + area.width - width;
    buf.set_line(x, area.y, &line, width);
}

/// Top bar: application title, search box, Search and Settings buttons.
pub struct HeaderWidget<'a> {
    title: &'a str,
    theme: &'a ThemeColors,
    use_icons: bool,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(title: &'a str, theme: &'a ThemeColors, use_icons: bool) -> Self {
        Self {
            title,
            theme,
            use_icons,
        }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = Span::styled(
            self.title,
            Style::default()
                .fg(self.theme.app_fg)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_line(area.x, area.y, &Line::from(title), area.width);

        let button = Style::default()
            .bg(self.theme.button_bg)
            .fg(self.theme.app_fg);
        let (search_label, settings_label) = if self.use_icons {
            (" \u{f002} ", " \u{f013} ")
        } else {
            (" Search ", " Settings ")
        };
        let search_box = format!(" {:<width$}", SEARCH_PLACEHOLDER, width = SEARCH_BOX_WIDTH - 1);

        set_right_aligned(
            buf,
            area,
            vec![
                Span::styled(
                    search_box,
                    Style::default()
                        .bg(self.theme.button_bg)
                        .fg(self.theme.placeholder_fg),
                ),
                Span::raw(" "),
                Span::styled(search_label, button),
                Span::raw(" "),
                Span::styled(settings_label, button),
            ],
        );
    }
}

/// "Files and Folders" title with the Upload button on the right.
pub struct SectionHeaderWidget<'a> {
    theme: &'a ThemeColors,
}

impl<'a> SectionHeaderWidget<'a> {
    pub fn new(theme: &'a ThemeColors) -> Self {
        Self { theme }
    }
}

impl<'a> Widget for SectionHeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = Span::styled(
            "Files and Folders",
            Style::default()
                .fg(self.theme.app_fg)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_line(area.x, area.y, &Line::from(title), area.width);

        set_right_aligned(
            buf,
            area,
            vec![Span::styled(
                " + Upload ",
                Style::default()
                    .bg(self.theme.primary_button_bg)
                    .fg(self.theme.app_fg)
                    .add_modifier(Modifier::BOLD),
            )],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn header_shows_title_and_inert_controls() {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new("Drive", &tc, false).render(area, &mut buf);

        let content = row_text(&buf, 80);
        assert!(content.starts_with("Drive"));
        assert!(content.contains("Search in Drive"));
        assert!(content.trim_end().ends_with("Settings"));
        assert_eq!(buf.cell((79, 0)).unwrap().bg, tc.button_bg);
    }

    #[test]
    fn search_placeholder_uses_placeholder_color() {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new("Drive", &tc, false).render(area, &mut buf);

        let content = row_text(&buf, 80);
        let col = content.find("Search in Drive").unwrap() as u16;
        assert_eq!(buf.cell((col, 0)).unwrap().fg, tc.placeholder_fg);
    }

    #[test]
    fn section_header_has_upload_button() {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        SectionHeaderWidget::new(&tc).render(area, &mut buf);

        let content = row_text(&buf, 60);
        assert!(content.starts_with("Files and Folders"));
        assert!(content.contains("+ Upload"));
        assert_eq!(buf.cell((59, 0)).unwrap().bg, tc.primary_button_bg);
    }

    #[test]
    fn narrow_area_does_not_panic() {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new("Drive", &tc, true).render(area, &mut buf);
        SectionHeaderWidget::new(&tc).render(area, &mut buf);
    }
}
