use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::drive::entry::Entry;
use crate::theme::ThemeColors;

/// Text drawn between two breadcrumb segments.
pub const SEPARATOR: &str = " › ";

/// Column ranges `[start, end)` occupied by each segment, relative to the strip's left edge.
pub fn segment_columns(trail: &[Entry]) -> Vec<(u16, u16)> {
    let sep_width = Span::raw(SEPARATOR).width() as u16;
    let mut columns = Vec::with_capacity(trail.len());
    let mut x: u16 = 0;
    for (i, entry) in trail.iter().enumerate() {
        if i > 0 {
            x = x.saturating_add(sep_width);
        }
        let width = Span::raw(entry.name.as_str()).width() as u16;
        columns.push((x, x.saturating_add(width)));
        x = x.saturating_add(width);
    }
    columns
}

/// Index of the segment under column `col`, if any. Separators hit nothing.
pub fn segment_at(trail: &[Entry], col: u16) -> Option<usize> {
    segment_columns(trail)
        .iter()
        .position(|&(start, end)| col >= start && col < end)
}

/// Breadcrumb strip: the trail from the root to the current folder.
pub struct BreadcrumbWidget<'a> {
    trail: &'a [Entry],
    theme: &'a ThemeColors,
    cursor: Option<usize>,
}

impl<'a> BreadcrumbWidget<'a> {
    pub fn new(trail: &'a [Entry], theme: &'a ThemeColors) -> Self {
        Self {
            trail,
            theme,
            cursor: None,
        }
    }

    /// Highlight segment `index` as the keyboard cursor.
    pub fn cursor(mut self, index: usize) -> Self {
        self.cursor = Some(index);
        self
    }
}

impl<'a> Widget for BreadcrumbWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let last = self.trail.len().saturating_sub(1);
        let mut spans = Vec::with_capacity(self.trail.len() * 2);
        for (i, entry) in self.trail.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    SEPARATOR,
                    Style::default().fg(self.theme.separator_fg),
                ));
            }
            let mut style = if i == last {
                Style::default()
                    .fg(self.theme.app_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.link_fg)
            };
            if self.cursor == Some(i) {
                style = style
                    .bg(self.theme.selected_bg)
                    .add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(entry.name.as_str(), style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn trail() -> Vec<Entry> {
        vec![
            Entry::folder("root", "My Drive", vec![]),
            Entry::folder("1", "Documents", vec![]),
        ]
    }

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn columns_account_for_separator() {
        assert_eq!(segment_columns(&trail()), vec![(0, 8), (11, 20)]);
    }

    #[test]
    fn segment_at_hits_names_only() {
        let t = trail();
        assert_eq!(segment_at(&t, 0), Some(0));
        assert_eq!(segment_at(&t, 7), Some(0));
        assert_eq!(segment_at(&t, 9), None);
        assert_eq!(segment_at(&t, 11), Some(1));
        assert_eq!(segment_at(&t, 20), None);
    }

    #[test]
    fn renders_trail_with_separators() {
        let tc = theme::dark_theme();
        let t = trail();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        BreadcrumbWidget::new(&t, &tc).render(area, &mut buf);
        assert!(row_text(&buf, 40).starts_with("My Drive › Documents"));
    }

    #[test]
    fn ancestors_are_links_and_tail_is_bold() {
        let tc = theme::dark_theme();
        let t = trail();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        BreadcrumbWidget::new(&t, &tc).render(area, &mut buf);
        assert_eq!(buf.cell((0, 0)).unwrap().fg, tc.link_fg);
        let tail = buf.cell((11, 0)).unwrap();
        assert_eq!(tail.fg, tc.app_fg);
        assert!(tail.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn cursor_segment_is_highlighted() {
        let tc = theme::dark_theme();
        let t = trail();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        BreadcrumbWidget::new(&t, &tc).cursor(0).render(area, &mut buf);
        assert_eq!(buf.cell((0, 0)).unwrap().bg, tc.selected_bg);
        assert_ne!(buf.cell((11, 0)).unwrap().bg, tc.selected_bg);
    }

    #[test]
    fn zero_area_does_not_panic() {
        let tc = theme::dark_theme();
        let t = trail();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        BreadcrumbWidget::new(&t, &tc).render(area, &mut buf);
    }
}
