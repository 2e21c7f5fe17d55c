//! Pagination bar widget.
//!
//! `« First  ‹ Prev  Page X of Y  Next ›  Last »`, centred, with disabled
//! controls dimmed. The rendered button positions are returned so clicks can
//! be mapped back to page actions.

use crate::state::PageAction;
use crate::view::styles::TableStyles;
use crate::view_state::{NavControl, PaginationView};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const GAP: &str = "  ";

/// Button caption for a page action.
pub fn control_label(action: PageAction) -> &'static str {
    match action {
        PageAction::First => "« First",
        PageAction::Previous => "‹ Prev",
        PageAction::Next => "Next ›",
        PageAction::Last => "Last »",
        PageAction::Index(_) => "",
    }
}

/// Page status between the buttons.
pub fn status_text(view: &PaginationView) -> String {
    format!("Page {} of {}", view.page_index + 1, view.page_count)
}

/// One clickable button as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    /// Action fired on click.
    pub action: PageAction,
    /// Leftmost screen column.
    pub x: u16,
    /// Width in screen columns.
    pub width: u16,
    /// Whether a click does anything.
    pub enabled: bool,
}

/// Button positions of the last drawn pagination bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLayout {
    y: u16,
    buttons: Vec<NavButton>,
}

impl NavLayout {
    /// Screen row of the bar.
    pub fn y(&self) -> u16 {
        self.y
    }

    /// Buttons in drawing order.
    pub fn buttons(&self) -> &[NavButton] {
        &self.buttons
    }

    /// Action of the enabled button under the point, if any.
    pub fn action_at(&self, x: u16, y: u16) -> Option<PageAction> {
        if y != self.y {
            return None;
        }
        self.buttons
            .iter()
            .find(|b| b.enabled && x >= b.x && x < b.x.saturating_add(b.width))
            .map(|b| b.action)
    }
}

enum Segment {
    Control(NavControl),
    Status(String),
}

fn segments(view: &PaginationView) -> Vec<Segment> {
    let [first, previous, next, last] = view.controls;
    vec![
        Segment::Control(first),
        Segment::Control(previous),
        Segment::Status(status_text(view)),
        Segment::Control(next),
        Segment::Control(last),
    ]
}

/// Render the bar centred in `area` and return the button positions.
pub fn render_pagination_bar(
    frame: &mut Frame,
    area: Rect,
    view: &PaginationView,
    styles: &TableStyles,
) -> NavLayout {
    if area.width == 0 || area.height == 0 {
        return NavLayout::default();
    }

    let segments = segments(view);
    let total: usize = segments
        .iter()
        .map(|s| match s {
            Segment::Control(c) => control_label(c.action).width(),
            Segment::Status(text) => text.width(),
        })
        .sum::<usize>()
        + GAP.width() * (segments.len() - 1);
    let total = total.min(area.width as usize) as u16;
    let start = area.x + (area.width - total) / 2;

    let mut spans = Vec::new();
    let mut buttons = Vec::new();
    let mut cursor = start;
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(GAP));
            cursor = cursor.saturating_add(GAP.width() as u16);
        }
        match segment {
            Segment::Control(control) => {
                let label = control_label(control.action);
                let style = if control.enabled {
                    styles.control
                } else {
                    styles.control_disabled
                };
                buttons.push(NavButton {
                    action: control.action,
                    x: cursor,
                    width: label.width() as u16,
                    enabled: control.enabled,
                });
                spans.push(Span::styled(label, style));
                cursor = cursor.saturating_add(label.width() as u16);
            }
            Segment::Status(text) => {
                spans.push(Span::raw(text.clone()));
                cursor = cursor.saturating_add(text.width() as u16);
            }
        }
    }

    let bar = Rect::new(start, area.y, total, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), bar);

    let right = area.x.saturating_add(area.width);
    buttons.retain(|b| b.x < right);
    NavLayout {
        y: area.y,
        buttons,
    }
}
