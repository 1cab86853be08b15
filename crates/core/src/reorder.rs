// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side list moves.
//!
//! Order is local to the client: nothing here is persisted. A move removes
//! the item at `from` and inserts it at `to`, so items between the two
//! positions shift by one.

use crate::error::{Error, Result};

/// Moves the item at `from` to position `to`, returning the new order.
///
/// `from == to` returns an equal sequence.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
    }
    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    Ok(moved)
}

/// Tracks one pointer-driven drag over a displayed list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DragSession {
    origin: Option<usize>,
    target: Option<usize>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging the item at `index`.
    pub fn begin_move(&mut self, index: usize) {
        tracing::trace!(index, "drag started");
        self.origin = Some(index);
        self.target = None;
    }

    /// Records the position currently hovered.
    pub fn hover_target(&mut self, index: usize) {
        self.target = Some(index);
    }

    /// The pointer left every drop target.
    pub fn leave_target(&mut self) {
        self.target = None;
    }

    /// Ends the drag without moving anything.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.target = None;
    }

    pub fn origin(&self) -> Option<usize> {
        self.origin
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.origin == Some(index)
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.target == Some(index)
    }

    /// Drops onto `index`.
    ///
    /// Returns the new order and calls `on_reorder(new_items, from, to)` when
    /// an item actually moved. Dropping without a drag in progress, or back
    /// onto the origin, returns `None`. The session ends either way.
    pub fn commit_move<T, F>(&mut self, index: usize, items: &[T], on_reorder: F) -> Result<Option<Vec<T>>>
    where
        T: Clone,
        F: FnOnce(&[T], usize, usize),
    {
        let origin = self.origin.take();
        self.target = None;

        let Some(from) = origin else {
            return Ok(None);
        };
        if from == index {
            return Ok(None);
        }

        let moved = reorder(items, from, index)?;
        tracing::debug!(from, to = index, "moved item");
        on_reorder(&moved, from, index);
        Ok(Some(moved))
    }
}

#[cfg(test)]
#[path = "reorder_tests.rs"]
mod tests;
