//! Theme data model: built-in palettes and resolution from config.
//!
//! Two built-in palettes (dark and light) are provided, and a custom scheme
//! starts from the dark palette and applies hex overrides from the config file.

use ratatui::style::Color;

use crate::config::{ThemeColorsConfig, ThemeConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// All runtime colors used in the UI.
///
/// Constructed from a config-level `ThemeConfig` via `resolve_theme()`.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Page
    pub app_bg: Color,
    pub app_fg: Color,

    // Listing panel
    pub panel_bg: Color,
    pub header_row_bg: Color,
    pub header_row_fg: Color,
    pub selected_bg: Color,
    pub folder_icon_fg: Color,
    pub file_icon_fg: Color,
    pub link_fg: Color,
    pub type_fg: Color,

    // Breadcrumb strip
    pub separator_fg: Color,

    // Controls
    pub button_bg: Color,
    pub primary_button_bg: Color,
    pub placeholder_fg: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,

    // Borders & chrome
    pub border_fg: Color,
    pub border_focused_fg: Color,

    // Semantic colors (not configurable, consistent across themes)
    pub success_fg: Color,
    pub accent_fg: Color,
    pub dim_fg: Color,
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark theme using the Tailwind gray scale.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        app_bg: Color::Rgb(17, 24, 39),   // #111827 (gray-900)
        app_fg: Color::Rgb(243, 244, 246), // #f3f4f6 (gray-100)

        panel_bg: Color::Rgb(31, 41, 55),       // #1f2937 (gray-800)
        header_row_bg: Color::Rgb(55, 65, 81),  // #374151 (gray-700)
        header_row_fg: Color::Rgb(209, 213, 219), // #d1d5db (gray-300)
        selected_bg: Color::Rgb(55, 65, 81),    // #374151 (gray-700)
        folder_icon_fg: Color::Rgb(250, 204, 21), // #facc15 (yellow-400)
        file_icon_fg: Color::Rgb(156, 163, 175), // #9ca3af (gray-400)
        link_fg: Color::Rgb(96, 165, 250),      // #60a5fa (blue-400)
        type_fg: Color::Rgb(156, 163, 175),     // #9ca3af

        separator_fg: Color::Rgb(107, 114, 128), // #6b7280 (gray-500)

        button_bg: Color::Rgb(31, 41, 55),
        primary_button_bg: Color::Rgb(37, 99, 235), // #2563eb (blue-600)
        placeholder_fg: Color::Rgb(107, 114, 128),

        status_bg: Color::Rgb(31, 41, 55),
        status_fg: Color::Rgb(243, 244, 246),

        border_fg: Color::Rgb(55, 65, 81),
        border_focused_fg: Color::Rgb(96, 165, 250),

        success_fg: Color::Rgb(74, 222, 128), // #4ade80 (green-400)
        accent_fg: Color::Rgb(147, 197, 253), // #93c5fd (blue-300)
        dim_fg: Color::Rgb(107, 114, 128),
    }
}

/// Light theme, the same scale inverted.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        app_bg: Color::Rgb(249, 250, 251), // #f9fafb (gray-50)
        app_fg: Color::Rgb(17, 24, 39),

        panel_bg: Color::Rgb(255, 255, 255),
        header_row_bg: Color::Rgb(229, 231, 235), // #e5e7eb (gray-200)
        header_row_fg: Color::Rgb(55, 65, 81),
        selected_bg: Color::Rgb(229, 231, 235),
        folder_icon_fg: Color::Rgb(202, 138, 4), // #ca8a04 (yellow-600)
        file_icon_fg: Color::Rgb(107, 114, 128),
        link_fg: Color::Rgb(37, 99, 235),
        type_fg: Color::Rgb(107, 114, 128),

        separator_fg: Color::Rgb(156, 163, 175),

        button_bg: Color::Rgb(243, 244, 246),
        primary_button_bg: Color::Rgb(37, 99, 235),
        placeholder_fg: Color::Rgb(156, 163, 175),

        status_bg: Color::Rgb(229, 231, 235),
        status_fg: Color::Rgb(17, 24, 39),

        border_fg: Color::Rgb(209, 213, 219),
        border_focused_fg: Color::Rgb(37, 99, 235),

        success_fg: Color::Rgb(22, 163, 74), // #16a34a (green-600)
        accent_fg: Color::Rgb(29, 78, 216),  // #1d4ed8 (blue-700)
        dim_fg: Color::Rgb(156, 163, 175),
    }
}

// ── Color parsing ────────────────────────────────────────────────────────────

/// Parse a hex color string like `"#aabbcc"` into a `ratatui::style::Color`.
/// Returns `None` for malformed input.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

// ── Theme resolution ─────────────────────────────────────────────────────────

/// Resolve the final `ThemeColors` from config.
///
/// - `"dark"` (default): dark palette
/// - `"light"`: light palette
/// - `"custom"`: dark palette with custom hex values applied on top
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    match config.scheme.as_deref().unwrap_or("dark") {
        "light" => light_theme(),
        "custom" => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        other => {
            if other != "dark" {
                log::warn!("unknown theme scheme {:?}, using dark", other);
            }
            dark_theme()
        }
    }
}

/// Apply custom hex color overrides on top of an existing theme.
/// Malformed values leave the existing color in place.
fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    let overrides: [(&Option<String>, &mut Color); 15] = [
        (&custom.app_bg, &mut theme.app_bg),
        (&custom.app_fg, &mut theme.app_fg),
        (&custom.panel_bg, &mut theme.panel_bg),
        (&custom.header_row_bg, &mut theme.header_row_bg),
        (&custom.selected_bg, &mut theme.selected_bg),
        (&custom.folder_icon_fg, &mut theme.folder_icon_fg),
        (&custom.file_icon_fg, &mut theme.file_icon_fg),
        (&custom.link_fg, &mut theme.link_fg),
        (&custom.type_fg, &mut theme.type_fg),
        (&custom.separator_fg, &mut theme.separator_fg),
        (&custom.button_bg, &mut theme.button_bg),
        (&custom.primary_button_bg, &mut theme.primary_button_bg),
        (&custom.status_bg, &mut theme.status_bg),
        (&custom.status_fg, &mut theme.status_fg),
        (&custom.border_fg, &mut theme.border_fg),
    ];
    for (hex, slot) in overrides {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
