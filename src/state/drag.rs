//! Drag interaction controller.
//!
//! Tracks a column drag from pointer-down on a header handle to release.
//! Hovering only updates the preview target; the column order store is
//! touched once, on a valid drop, through the emitted [`Intent`].

use crate::model::ColumnId;
use crate::state::table_state::Intent;
use tracing::debug;

/// Phase of a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A header handle is held.
    Dragging {
        /// Column being dragged.
        source: ColumnId,
        /// Header currently under the pointer, if any.
        hover: Option<ColumnId>,
    },
}

/// Converts drag gestures into reorder intents.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture phase.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Column being dragged.
    pub fn source(&self) -> Option<&ColumnId> {
        match &self.state {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    /// Header under the pointer during a drag.
    pub fn hover_target(&self) -> Option<&ColumnId> {
        match &self.state {
            DragState::Dragging { hover, .. } => hover.as_ref(),
            DragState::Idle => None,
        }
    }

    /// Start dragging `source`. Restarts any drag already in progress.
    pub fn begin(&mut self, source: ColumnId) {
        debug!(source = %source, "Drag started");
        self.state = DragState::Dragging {
            source,
            hover: None,
        };
    }

    /// Update the header under the pointer. Ignored while idle.
    pub fn hover(&mut self, target: Option<ColumnId>) {
        if let DragState::Dragging { hover, .. } = &mut self.state {
            *hover = target;
        }
    }

    /// Release the pointer over `target`.
    ///
    /// Returns a reorder intent when released over a different header.
    /// Release with no target, over the source header, or while idle yields
    /// nothing. The controller is idle afterwards in every case.
    pub fn drop_on(&mut self, target: Option<ColumnId>) -> Option<Intent> {
        let DragState::Dragging { source, .. } = std::mem::take(&mut self.state) else {
            return None;
        };

        match target {
            Some(target) if target != source => {
                debug!(from = %source, to = %target, "Drag dropped");
                Some(Intent::Reorder {
                    from: source,
                    to: target,
                })
            }
            _ => {
                debug!(source = %source, "Drag abandoned");
                None
            }
        }
    }

    /// Abandon the drag with no effect.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
