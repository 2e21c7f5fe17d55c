//! Header interaction controller.
//!
//! Pure functions and a small state holder that turn pointer events over the
//! header row into intents. Each header cell is split into two
//! non-overlapping regions: a drag handle on the left and the sort label
//! on the right. Pointer-down on the handle starts a drag; a press and
//! release on the same label is a sort click.

use crate::model::ColumnId;
use crate::state::drag::DragController;
use crate::state::table_state::Intent;
use tracing::trace;

/// Width of the drag handle at the left edge of every header cell.
pub const HANDLE_WIDTH: u16 = 2;

/// Horizontal placement of one header cell on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column shown in this cell.
    pub id: ColumnId,
    /// Leftmost screen column of the cell.
    pub x: u16,
    /// Width of the cell in screen columns.
    pub width: u16,
}

impl HeaderCell {
    fn contains_x(&self, x: u16) -> bool {
        x >= self.x && x < self.x.saturating_add(self.width)
    }
}

/// Which part of the header row a point falls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderRegion {
    /// Drag handle of a column.
    Handle(ColumnId),
    /// Sort label of a column.
    Label(ColumnId),
    /// Not on any header cell.
    Outside,
}

/// On-screen geometry of the header row, recorded by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLayout {
    y: u16,
    cells: Vec<HeaderCell>,
}

impl HeaderLayout {
    /// Layout from explicit cells on row `y`.
    pub fn new(y: u16, cells: Vec<HeaderCell>) -> Self {
        Self { y, cells }
    }

    /// Lay out cells left to right from `x`, separated by `spacing` columns.
    pub fn from_widths(x: u16, y: u16, columns: &[(ColumnId, u16)], spacing: u16) -> Self {
        let mut cursor = x;
        let cells = columns
            .iter()
            .map(|(id, width)| {
                let cell = HeaderCell {
                    id: id.clone(),
                    x: cursor,
                    width: *width,
                };
                cursor = cursor.saturating_add(*width).saturating_add(spacing);
                cell
            })
            .collect();
        Self { y, cells }
    }

    /// Cells in display order.
    pub fn cells(&self) -> &[HeaderCell] {
        &self.cells
    }

    /// Screen row of the header.
    pub fn y(&self) -> u16 {
        self.y
    }

    /// Classify a screen point.
    ///
    /// The first [`HANDLE_WIDTH`] columns of a cell are the handle, the rest
    /// is the label. A cell no wider than the handle has no label region.
    pub fn hit_test(&self, x: u16, y: u16) -> HeaderRegion {
        if y != self.y {
            return HeaderRegion::Outside;
        }
        match self.cells.iter().find(|cell| cell.contains_x(x)) {
            Some(cell) if x - cell.x < HANDLE_WIDTH => HeaderRegion::Handle(cell.id.clone()),
            Some(cell) => HeaderRegion::Label(cell.id.clone()),
            None => HeaderRegion::Outside,
        }
    }

    /// Column whose cell (handle or label) contains the point.
    pub fn column_at(&self, x: u16, y: u16) -> Option<ColumnId> {
        match self.hit_test(x, y) {
            HeaderRegion::Handle(id) | HeaderRegion::Label(id) => Some(id),
            HeaderRegion::Outside => None,
        }
    }
}

/// Platform-independent pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down {
        /// Screen column.
        x: u16,
        /// Screen row.
        y: u16,
    },
    /// Pointer moved with the primary button held.
    Drag {
        /// Screen column.
        x: u16,
        /// Screen row.
        y: u16,
    },
    /// Primary button released.
    Up {
        /// Screen column.
        x: u16,
        /// Screen row.
        y: u16,
    },
}

/// Routes header pointer events to the sort and drag controllers.
///
/// While a drag is in progress the header is drawn in preview order, so
/// moves and the drop are hit-tested against the layout captured when the
/// drag started rather than the one currently on screen.
#[derive(Debug, Clone, Default)]
pub struct HeaderController {
    drag: DragController,
    drag_origin: Option<HeaderLayout>,
    pressed_label: Option<ColumnId>,
}

impl HeaderController {
    /// Idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// The drag controller, for live preview rendering.
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Label currently held down, if any.
    pub fn pressed_label(&self) -> Option<&ColumnId> {
        self.pressed_label.as_ref()
    }

    /// Feed one pointer event; returns the intent it completes, if any.
    ///
    /// # Behavior
    /// - Down on a handle starts a drag of that column
    /// - Down on a label arms a sort click for that column
    /// - Drag updates the drag hover target (no intent)
    /// - Up ends a drag: reorder onto the header under the pointer, or nothing
    /// - Up on the armed label emits `ToggleSort`; anywhere else disarms it
    pub fn handle(&mut self, layout: &HeaderLayout, event: PointerEvent) -> Option<Intent> {
        trace!(?event, "Header pointer event");
        match event {
            PointerEvent::Down { x, y } => {
                self.reset();
                match layout.hit_test(x, y) {
                    HeaderRegion::Handle(id) => {
                        self.drag_origin = Some(layout.clone());
                        self.drag.begin(id);
                    }
                    HeaderRegion::Label(id) => self.pressed_label = Some(id),
                    HeaderRegion::Outside => {}
                }
                None
            }
            PointerEvent::Drag { x, y } => {
                if self.drag.is_dragging() {
                    let origin = self.drag_origin.as_ref().unwrap_or(layout);
                    self.drag.hover(origin.column_at(x, y));
                }
                None
            }
            PointerEvent::Up { x, y } => {
                if self.drag.is_dragging() {
                    self.pressed_label = None;
                    let target = self
                        .drag_origin
                        .take()
                        .unwrap_or_else(|| layout.clone())
                        .column_at(x, y);
                    return self.drag.drop_on(target);
                }
                let pressed = self.pressed_label.take()?;
                match layout.hit_test(x, y) {
                    HeaderRegion::Label(id) if id == pressed => Some(Intent::ToggleSort(id)),
                    _ => None,
                }
            }
        }
    }

    /// Drop any half-finished gesture.
    pub fn reset(&mut self) {
        self.drag.cancel();
        self.drag_origin = None;
        self.pressed_label = None;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
