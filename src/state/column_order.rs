//! Column order store.
//!
//! Holds the display order of columns as a permutation of the schema's ids.
//! The only mutation is [`ColumnOrder::reorder`], which is atomic: the whole
//! permutation changes or nothing does.

use crate::model::ColumnId;
use tracing::debug;

/// Ordered sequence of column ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOrder {
    ids: Vec<ColumnId>,
}

impl ColumnOrder {
    /// Set the order at mount, normally the schema ids in declaration order.
    pub fn initialize(ids: Vec<ColumnId>) -> Self {
        Self { ids }
    }

    /// Ids in display order.
    pub fn ids(&self) -> &[ColumnId] {
        &self.ids
    }

    /// Display position of a column.
    pub fn position(&self, id: &ColumnId) -> Option<usize> {
        self.ids.iter().position(|c| c == id)
    }

    /// Whether the column is part of this order.
    pub fn contains(&self, id: &ColumnId) -> bool {
        self.position(id).is_some()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no columns.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Move `from` into the slot currently held by `to`.
    ///
    /// The dragged column takes the target's index and everything between
    /// shifts by one toward the vacated slot. Dragging rightwards therefore
    /// lands the column immediately after the target, dragging leftwards
    /// immediately before it. All other columns keep their relative order.
    ///
    /// Returns `false` and leaves the order untouched when `from == to` or
    /// either id is absent.
    pub fn reorder(&mut self, from: &ColumnId, to: &ColumnId) -> bool {
        if from == to {
            return false;
        }
        let (Some(old_index), Some(new_index)) = (self.position(from), self.position(to)) else {
            return false;
        };

        let moved = self.ids.remove(old_index);
        self.ids.insert(new_index, moved);
        debug!(from = %from, to = %to, old_index, new_index, "Reordered column");
        true
    }

    /// Id of the neighbour `offset` slots away from `id`, if in range.
    ///
    /// Used to express keyboard moves as a reorder onto the neighbour.
    pub fn neighbour(&self, id: &ColumnId, offset: isize) -> Option<&ColumnId> {
        let index = self.position(id)?;
        let target = index.checked_add_signed(offset)?;
        self.ids.get(target)
    }
}
