//! Table styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced on or off.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles for the table shell.
///
/// Without colors every state still differs by modifier (bold, reversed,
/// underlined, dim), so drag and focus stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    /// Header label.
    pub header: Style,
    /// Drag handle glyph.
    pub handle: Style,
    /// Header of the sorted column.
    pub sorted: Style,
    /// Header with keyboard focus.
    pub focused: Style,
    /// Header being dragged.
    pub dragging: Style,
    /// Header under the drag pointer.
    pub drop_target: Style,
    /// Enabled pagination control.
    pub control: Style,
    /// Disabled pagination control.
    pub control_disabled: Style,
    /// Error panel title.
    pub error: Style,
    /// Secondary text.
    pub muted: Style,
}

impl TableStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let base = Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            handle: Style::default(),
            sorted: Style::default().add_modifier(Modifier::BOLD),
            focused: Style::default().add_modifier(Modifier::UNDERLINED),
            dragging: Style::default().add_modifier(Modifier::REVERSED),
            drop_target: Style::default().add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
            control: Style::default().add_modifier(Modifier::BOLD),
            control_disabled: Style::default().add_modifier(Modifier::DIM),
            error: Style::default().add_modifier(Modifier::BOLD),
            muted: Style::default().add_modifier(Modifier::DIM),
        };

        if !config.colors_enabled() {
            return base;
        }

        Self {
            handle: base.handle.fg(Color::DarkGray),
            sorted: base.sorted.fg(Color::Green),
            focused: base.focused.fg(Color::Cyan),
            dragging: base.dragging.fg(Color::Yellow),
            drop_target: base.drop_target.fg(Color::Yellow),
            control: base.control.fg(Color::Cyan),
            control_disabled: base.control_disabled.fg(Color::DarkGray),
            error: base.error.fg(Color::Red),
            muted: base.muted.fg(Color::Gray),
            ..base
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
