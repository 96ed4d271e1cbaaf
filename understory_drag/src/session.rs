// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single drag session: the anchor point, origin offset, and active flag.
//!
//! ## Usage
//!
//! 1) Begin a session with [`DragSession::begin`], giving the element's origin
//!    offset and the pointer position at button-down.
//! 2) On each move, [`DragSession::position`] gives the offset to apply.
//! 3) [`DragSession::deactivate`] at button-up. The session keeps its data so
//!    the last position can still be inspected.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag::{DragSession, ElementRegistry};
//!
//! let mut registry = ElementRegistry::new();
//! let id = registry.ensure(&7_u32).id;
//!
//! let mut session = DragSession::begin(7_u32, id, Vec2::new(20.0, 40.0), Point::new(10.0, 10.0));
//! assert!(session.is_active());
//!
//! // Zero displacement reproduces the origin exactly.
//! assert_eq!(session.position(Point::new(10.0, 10.0)), Vec2::new(20.0, 40.0));
//! assert_eq!(session.position(Point::new(15.0, 5.0)), Vec2::new(25.0, 35.0));
//!
//! session.deactivate();
//! assert!(!session.is_active());
//! ```

use kurbo::{Point, Vec2};

use crate::registry::ElementId;

/// State of one drag, from pointer-down to pointer-up.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<E> {
    target: E,
    id: ElementId,
    origin: Vec2,
    anchor: Point,
    last: Point,
    active: bool,
}

impl<E> DragSession<E> {
    /// Starts an active session on `target` anchored at `anchor`.
    pub fn begin(target: E, id: ElementId, origin: Vec2, anchor: Point) -> Self {
        Self {
            target,
            id,
            origin,
            anchor,
            last: anchor,
            active: true,
        }
    }

    /// The element owned by this session.
    pub fn target(&self) -> &E {
        &self.target
    }

    /// Identity of the element owned by this session.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element's offset when the session began.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Pointer position at the start of the session.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Last pointer position passed to [`record`](Self::record).
    pub fn last_pointer(&self) -> Point {
        self.last
    }

    /// Returns `true` between the start and the end of the drag.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer displacement from the anchor.
    pub fn translation(&self, pointer: Point) -> Vec2 {
        pointer - self.anchor
    }

    /// Offset the element should have with the pointer at `pointer`.
    ///
    /// Depends only on the anchor and `pointer`, never on intermediate moves.
    pub fn position(&self, pointer: Point) -> Vec2 {
        self.origin + self.translation(pointer)
    }

    /// Records the pointer position of a move.
    pub fn record(&mut self, pointer: Point) {
        self.last = pointer;
    }

    /// Marks the session as ended.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(origin: Vec2, anchor: Point) -> DragSession<u32> {
        let id = crate::ElementRegistry::new().ensure(&1_u32).id;
        DragSession::begin(1, id, origin, anchor)
    }

    #[test]
    fn begin_is_active_and_anchored() {
        let session = session_at(Vec2::ZERO, Point::new(10.0, 20.0));

        assert!(session.is_active());
        assert_eq!(session.anchor(), Point::new(10.0, 20.0));
        assert_eq!(session.last_pointer(), session.anchor());
        assert_eq!(*session.target(), 1);
    }

    #[test]
    fn record_keeps_latest_pointer_only() {
        let mut session = session_at(Vec2::ZERO, Point::new(0.0, 0.0));

        session.record(Point::new(5.0, 3.0));
        session.record(Point::new(8.0, 7.0));
        assert_eq!(session.last_pointer(), Point::new(8.0, 7.0));
        assert_eq!(session.anchor(), Point::new(0.0, 0.0));
    }

    #[test]
    fn position_ignores_intermediate_moves() {
        let mut session = session_at(Vec2::new(5.0, 5.0), Point::new(10.0, 20.0));

        session.record(Point::new(15.0, 25.0));
        session.record(Point::new(-40.0, 90.0));

        assert_eq!(
            session.position(Point::new(20.0, 35.0)),
            Vec2::new(15.0, 20.0)
        );
    }

    #[test]
    fn negative_translation() {
        let session = session_at(Vec2::ZERO, Point::new(100.0, 100.0));
        assert_eq!(
            session.translation(Point::new(90.0, 85.0)),
            Vec2::new(-10.0, -15.0)
        );
    }

    #[test]
    fn fractional_coordinates() {
        let session = session_at(Vec2::ZERO, Point::new(1.5, 2.7));
        let position = session.position(Point::new(3.2, 4.1));

        assert!((position.x - 1.7).abs() < f64::EPSILON * 10.0);
        assert!((position.y - 1.4).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn deactivate_keeps_offsets() {
        let mut session = session_at(Vec2::new(3.0, 4.0), Point::new(0.0, 0.0));
        session.record(Point::new(1.0, 1.0));
        session.deactivate();

        assert!(!session.is_active());
        assert_eq!(session.origin(), Vec2::new(3.0, 4.0));
        assert_eq!(session.position(session.last_pointer()), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn large_coordinate_values() {
        let session = session_at(Vec2::ZERO, Point::new(1000000.0, 2000000.0));
        assert_eq!(
            session.translation(Point::new(1000001.0, 2000002.0)),
            Vec2::new(1.0, 2.0)
        );
    }
}
