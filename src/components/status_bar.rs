use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

const KEY_HINTS: &str = " ⏎:open  ⌫:up  tab:path  ?:help  q:quit ";

/// Status bar widget that displays the current path, item count, key hints, or a status message.
pub struct StatusBarWidget<'a> {
    path_str: &'a str,
    item_info: &'a str,
    theme: &'a ThemeColors,
    status_message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(path_str: &'a str, item_info: &'a str, theme: &'a ThemeColors) -> Self {
        Self {
            path_str,
            item_info,
            theme,
            status_message: None,
        }
    }

    pub fn status_message(mut self, msg: &'a str) -> Self {
        self.status_message = Some(msg);
        self
    }
}

/// Keep the last `max` characters of `s`, prefixed by `...` when shortened.
fn truncate_left(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let tail: String = s.chars().skip(len - (max - 3)).collect();
    format!("...{}", tail)
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;
        let bar_style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        buf.set_style(area, bar_style);

        if let Some(msg) = self.status_message {
            let line = Line::from(Span::styled(
                format!(" {}", msg),
                bar_style.fg(self.theme.success_fg),
            ));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        // Normal bar: [path] [item info] ... [key hints]
        let hints_len = KEY_HINTS.chars().count();
        let remaining = width.saturating_sub(hints_len);
        let info_len = self.item_info.chars().count();
        let path_budget = remaining.saturating_sub(info_len + 3);
        let path_display = truncate_left(self.path_str, path_budget);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(path_display, bar_style.add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(self.item_info, bar_style.fg(self.theme.accent_fg)),
        ];

        let used: usize = spans.iter().map(|s| s.width()).sum();
        let pad = width.saturating_sub(used).saturating_sub(hints_len);
        if pad > 0 {
            spans.push(Span::raw(" ".repeat(pad)));
        }
        spans.push(Span::styled(
            KEY_HINTS,
            bar_style.fg(self.theme.dim_fg),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
