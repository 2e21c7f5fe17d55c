//! Screen layout: table or status panel, pagination bar, key hints.

use crate::model::{ColumnId, LoadError};
use crate::state::HeaderLayout;
use crate::view::pagination_bar::{render_pagination_bar, NavLayout};
use crate::view::styles::TableStyles;
use crate::view::table::render_table;
use crate::view_state::Projection;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Title of the load-failure panel.
pub const ERROR_TITLE: &str = "Oops! Something went wrong.";
/// Title of the no-records panel.
pub const EMPTY_TITLE: &str = "No users found";
/// Body of the no-records panel.
pub const EMPTY_MESSAGE: &str = "There are currently no users to display. Please try again later.";
/// Shown while the provider has not answered.
pub const LOADING_MESSAGE: &str = "Loading users…";

const KEY_HINTS: &str =
    "drag ≡ reorder · click label sort · ←/→ page · +/- rows · tab focus · s sort · </> move · esc cancel · q quit";

/// What the body of the screen shows.
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    /// Waiting for data.
    Loading,
    /// The table for the current page.
    Table {
        /// Visible grid.
        projection: &'a Projection,
        /// Header with keyboard focus.
        focused: Option<&'a ColumnId>,
    },
    /// Loaded, but no records.
    Empty,
    /// Load failed.
    Failed(&'a LoadError),
}

/// Interactive regions recorded while drawing one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLayouts {
    /// Header cells of the table, empty when no table is shown.
    pub header: HeaderLayout,
    /// Pagination buttons, empty when no table is shown.
    pub nav: NavLayout,
}

/// Split the frame into body, pagination bar and hint line.
pub fn split(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Render one frame.
pub fn render_layout(frame: &mut Frame, screen: Screen<'_>, styles: &TableStyles) -> FrameLayouts {
    let [body, bar, hints] = split(frame.area());

    match screen {
        Screen::Loading => {
            render_message_panel(frame, body, LOADING_MESSAGE, "", styles.muted, styles);
            FrameLayouts::default()
        }
        Screen::Empty => {
            render_message_panel(frame, body, EMPTY_TITLE, EMPTY_MESSAGE, styles.error, styles);
            FrameLayouts::default()
        }
        Screen::Failed(error) => {
            render_message_panel(
                frame,
                body,
                ERROR_TITLE,
                &error.to_string(),
                styles.error,
                styles,
            );
            FrameLayouts::default()
        }
        Screen::Table {
            projection,
            focused,
        } => {
            let header = render_table(frame, body, projection, focused, styles);
            let nav = render_pagination_bar(frame, bar, &projection.pagination, styles);
            let summary = format!(
                "{} users · {} per page · {}",
                projection.pagination.record_count, projection.pagination.page_size, KEY_HINTS
            );
            frame.render_widget(Paragraph::new(Span::styled(summary, styles.muted)), hints);
            FrameLayouts { header, nav }
        }
    }
}

fn render_message_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    title_style: Style,
    styles: &TableStyles,
) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(title.to_string(), title_style))];
    if !message.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(message.to_string(), styles.muted)));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}
