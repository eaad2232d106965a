use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::drive::entry::{Entry, EntryKind};
use crate::theme::ThemeColors;

/// Width of the right-aligned Type column.
pub const TYPE_COLUMN_WIDTH: u16 = 10;

const ICON_COLUMN_WIDTH: u16 = 3;

/// Listing table for the current folder: icon, name and type columns.
pub struct ListingWidget<'a> {
    entries: &'a [Entry],
    selected: usize,
    scroll_offset: usize,
    focused: bool,
    theme: &'a ThemeColors,
    use_icons: bool,
    show_type_column: bool,
    block: Option<Block<'a>>,
}

impl<'a> ListingWidget<'a> {
    pub fn new(entries: &'a [Entry], theme: &'a ThemeColors, use_icons: bool) -> Self {
        Self {
            entries,
            selected: 0,
            scroll_offset: 0,
            focused: true,
            theme,
            use_icons,
            show_type_column: true,
            block: None,
        }
    }

    pub fn selection(mut self, selected: usize, scroll_offset: usize) -> Self {
        self.selected = selected;
        self.scroll_offset = scroll_offset;
        self
    }

    /// Whether the listing owns keyboard focus; the selected row is only highlighted when it does.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn show_type_column(mut self, show: bool) -> Self {
        self.show_type_column = show;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Rows available for entries inside `area` (below the column header).
    pub fn rows_area(&self, area: Rect) -> Rect {
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        }
    }

    fn icon(&self, entry: &Entry) -> &'static str {
        if self.use_icons {
            match entry.kind {
                EntryKind::Folder => "\u{f07b} ",
                EntryKind::File => file_icon_by_ext(&entry.extension()),
            }
        } else {
            match entry.kind {
                EntryKind::Folder => "[D]",
                EntryKind::File => "[F]",
            }
        }
    }

    /// Width of the Type column for a row of `width` cells; 0 when it is hidden.
    fn type_column_width(&self, width: u16) -> u16 {
        if self.show_type_column && width > TYPE_COLUMN_WIDTH * 2 {
            TYPE_COLUMN_WIDTH
        } else {
            0
        }
    }

    fn render_column_header(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.theme.header_row_bg)
            .fg(self.theme.header_row_fg);
        buf.set_style(area, style);
        let name_x = area.x + ICON_COLUMN_WIDTH + 1;
        buf.set_stringn(
            name_x,
            area.y,
            "Name",
            area.width.saturating_sub(ICON_COLUMN_WIDTH + 1) as usize,
            style,
        );
        if self.type_column_width(area.width) > 0 {
            let type_x = area.x + area.width - 4;
            buf.set_stringn(type_x, area.y, "Type", 4, style);
        }
    }

    fn render_row(&self, entry: &Entry, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let row_style = if is_selected {
            Style::default().bg(self.theme.selected_bg)
        } else {
            Style::default().bg(self.theme.panel_bg)
        };
        buf.set_style(area, row_style);

        let icon_style = match entry.kind {
            EntryKind::Folder => row_style.fg(self.theme.folder_icon_fg),
            EntryKind::File => row_style.fg(self.theme.file_icon_fg),
        };
        let name_style = match entry.kind {
            EntryKind::Folder => row_style.fg(self.theme.app_fg),
            EntryKind::File => row_style.fg(self.theme.link_fg),
        };
        let name_style = if is_selected {
            name_style.add_modifier(Modifier::BOLD)
        } else {
            name_style
        };

        let type_width = self.type_column_width(area.width);
        let name_width = area
            .width
            .saturating_sub(ICON_COLUMN_WIDTH + 1)
            .saturating_sub(type_width);

        let line = Line::from(vec![
            Span::styled(self.icon(entry), icon_style),
            Span::styled(" ", row_style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width.min(ICON_COLUMN_WIDTH + 1));
        buf.set_stringn(
            area.x + ICON_COLUMN_WIDTH + 1,
            area.y,
            &entry.name,
            name_width as usize,
            name_style,
        );

        if type_width > 0 {
            let label = entry.type_label();
            let shown: String = label.chars().take(type_width as usize).collect();
            let label_width = Span::raw(shown.as_str()).width() as u16;
            let x = area.x + area.width - label_width;
            buf.set_stringn(
                x,
                area.y,
                &shown,
                label_width as usize,
                row_style.fg(self.theme.type_fg),
            );
        }
    }
}

/// Nerd Font icon for a file extension.
fn file_icon_by_ext(ext: &str) -> &'static str {
    match ext {
        "doc" | "docx" | "odt" | "rtf" => "\u{f1c2} ",
        "xls" | "xlsx" | "ods" | "csv" => "\u{f1c3} ",
        "ppt" | "pptx" | "odp" | "key" => "\u{f1c4} ",
        "pdf" => "\u{f1c1} ",
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" | "heic" => "\u{f1c5} ",
        "mp3" | "wav" | "flac" | "ogg" | "aac" => "\u{f1c7} ",
        "mp4" | "mkv" | "avi" | "mov" | "webm" => "\u{f1c8} ",
        "zip" | "tar" | "gz" | "xz" | "bz2" | "rar" | "7z" => "\u{f1c6} ",
        "txt" | "md" | "markdown" | "rst" => "\u{f15c} ",
        "rs" | "py" | "js" | "ts" | "go" | "c" | "cpp" | "java" | "html" | "css" | "json" => {
            "\u{f1c9} "
        }
        _ => "\u{f15b} ",
    }
}

impl<'a> Widget for ListingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_column_header(Rect { height: 1, ..inner }, buf);

        let rows = self.rows_area(area);
        if rows.height == 0 {
            return;
        }

        if self.entries.is_empty() {
            buf.set_style(rows, Style::default().bg(self.theme.panel_bg));
            buf.set_stringn(
                rows.x + ICON_COLUMN_WIDTH + 1,
                rows.y,
                "This folder is empty",
                rows.width.saturating_sub(ICON_COLUMN_WIDTH + 1) as usize,
                Style::default()
                    .bg(self.theme.panel_bg)
                    .fg(self.theme.dim_fg)
                    .add_modifier(Modifier::ITALIC),
            );
            return;
        }

        let visible = self
            .entries
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(rows.height as usize);

        for (i, (idx, entry)) in visible.enumerate() {
            let row = Rect::new(rows.x, rows.y + i as u16, rows.width, 1);
            let is_selected = self.focused && idx == self.selected;
            self.render_row(entry, is_selected, row, buf);
        }
    }
}
