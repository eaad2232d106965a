use ratatui::{
    layout::{Constraint, Layout, Margin},
    style::Style,
    widgets::{Block, BorderType, Borders},
    Frame,
};

use crate::app::{App, Focus};
use crate::components::breadcrumb::BreadcrumbWidget;
use crate::components::header::{HeaderWidget, SectionHeaderWidget};
use crate::components::help::HelpOverlay;
use crate::components::listing::ListingWidget;
use crate::components::status_bar::StatusBarWidget;

/// Title shown at the top left of the header.
pub const APP_TITLE: &str = "Drive";

/// Render the application UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let theme = app.theme.clone();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.app_bg).fg(theme.app_fg)),
        area,
    );

    let [body, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let body = body.inner(Margin::new(1, 0));
    let [header_area, _, breadcrumb_area, _, section_area, listing_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(body);

    frame.render_widget(
        HeaderWidget::new(APP_TITLE, &theme, app.use_icons),
        header_area,
    );

    let trail = app.navigator.breadcrumb_trail();
    let mut breadcrumb = BreadcrumbWidget::new(trail, &theme);
    if app.focus == Focus::Breadcrumb {
        breadcrumb = breadcrumb.cursor(app.breadcrumb_cursor);
    }
    frame.render_widget(breadcrumb, breadcrumb_area);

    frame.render_widget(SectionHeaderWidget::new(&theme), section_area);

    let border_fg = if app.focus == Focus::Listing {
        theme.border_focused_fg
    } else {
        theme.border_fg
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_fg))
        .style(Style::default().bg(theme.panel_bg));

    let rows_area = ListingWidget::new(&[], &theme, app.use_icons)
        .block(block.clone())
        .rows_area(listing_area);
    app.update_scroll(rows_area.height as usize);
    app.hit_areas.breadcrumb = breadcrumb_area;
    app.hit_areas.listing_rows = rows_area;

    let listing = ListingWidget::new(app.navigator.visible_entries(), &theme, app.use_icons)
        .selection(app.selected_index, app.scroll_offset)
        .focused(app.focus == Focus::Listing)
        .show_type_column(app.show_type_column)
        .block(block);
    frame.render_widget(listing, listing_area);

    app.clear_expired_status();
    let path = app.current_path_label();
    let count = app.navigator.visible_entries().len();
    let item_info = format!("{} item{}", count, if count == 1 { "" } else { "s" });
    let mut status = StatusBarWidget::new(&path, &item_info, &theme);
    if let Some((msg, _)) = &app.status_message {
        status = status.status_message(msg);
    }
    frame.render_widget(status, status_area);

    if let Some(help) = &app.help {
        frame.render_widget(HelpOverlay::new(&theme, help.scroll_offset), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::drive::dataset::builtin_dataset;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
    }

    #[test]
    fn renders_root_listing() {
        let cfg: AppConfig = toml::from_str("[listing]\nuse_icons = false").unwrap();
        let mut app = App::new(builtin_dataset(), &cfg);
        let terminal = draw(&mut app);
        let text = screen_text(&terminal);
        assert!(text.contains("Drive"));
        assert!(text.contains("Search in Drive"));
        assert!(text.contains("Files and Folders"));
        assert!(text.contains("+ Upload"));
        for name in ["Documents", "Images", "Budget.xlsx", "Notes.txt"] {
            assert!(text.contains(name), "missing {}", name);
        }
        assert!(text.contains("4 items"));
    }

    #[test]
    fn records_hit_areas() {
        let mut app = App::new(builtin_dataset(), &AppConfig::default());
        draw(&mut app);
        assert_eq!(app.hit_areas.breadcrumb.y, 2);
        assert_eq!(app.hit_areas.breadcrumb.x, 1);
        // section header at row 4, listing border at row 5, column header at row 6
        assert_eq!(app.hit_areas.listing_rows.y, 7);
        assert!(app.hit_areas.listing_rows.height > 0);
    }

    #[test]
    fn renders_breadcrumb_after_descend() {
        let mut app = App::new(builtin_dataset(), &AppConfig::default());
        app.activate_selected();
        let text = screen_text(&draw(&mut app));
        assert!(text.contains("My Drive › Documents"));
        assert!(text.contains("Report.docx"));
        assert!(!text.contains("Budget.xlsx"));
    }

    #[test]
    fn help_overlay_drawn_on_top() {
        let mut app = App::new(builtin_dataset(), &AppConfig::default());
        app.toggle_help();
        let text = screen_text(&draw(&mut app));
        assert!(text.contains("Keyboard & Mouse"));
    }
}
