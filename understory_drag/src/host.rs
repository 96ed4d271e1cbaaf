// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::placement::Placement;

/// The environment that owns the dragged elements.
///
/// Elements are externally owned handles: the controller only reads their
/// layout offset and writes their position through this trait.
pub trait DragHost<E> {
    /// Current layout offset of `element` in its positioning coordinate space.
    ///
    /// Consulted at every start under
    /// [`Continuation::LayoutReadBack`](crate::Continuation::LayoutReadBack), and at an
    /// element's first start under remembered [`Positioning::Absolute`](crate::Positioning::Absolute).
    /// It must measure the same properties [`apply_position`](Self::apply_position) writes.
    fn layout_offset(&self, element: &E) -> Vec2 {
        let _ = element;
        Vec2::ZERO
    }

    /// Writes `placement` to `element`'s style.
    fn apply_position(&mut self, element: &E, placement: Placement);
}
