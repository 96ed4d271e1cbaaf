// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: headless drag sessions for repositioning UI elements.
//!
//! This crate owns the bookkeeping of a pointer drag: which element is being
//! dragged, where the pointer was when the drag began, and what offset the
//! element had at that moment. From those it derives the position to apply on
//! every pointer move:
//!
//! ```text
//! position(t) = origin_offset + (pointer(t) - pointer(t0))
//! ```
//!
//! Movement is anchor-relative: the element follows the pointer's displacement
//! from the exact point where the drag started, and never snaps its corner to
//! the pointer.
//!
//! It does **not** resolve selectors, register event listeners, or touch any
//! styling system directly. Callers are expected to:
//! - Feed pointer-down/move/up data into [`DragController::start`],
//!   [`DragController::move_to`] and [`DragController::end`].
//! - Provide a capability predicate deciding which targets are draggable.
//! - Implement [`DragHost`] to apply each [`Placement`] to the real element
//!   (and, for [`Continuation::LayoutReadBack`], report layout offsets).
//!
//! The `understory_drag_web` crate provides such a host for DOM elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_drag::{DragConfig, DragController, DragHost, MoveOutcome, Placement};
//!
//! #[derive(Default)]
//! struct Applied(Vec<(u32, Placement)>);
//!
//! impl DragHost<u32> for Applied {
//!     fn apply_position(&mut self, element: &u32, placement: Placement) {
//!         self.0.push((*element, placement));
//!     }
//! }
//!
//! // Only even ids are draggable; odd ids stand in for the container.
//! let mut drag = DragController::new(DragConfig::default(), |id: &u32| id % 2 == 0);
//! let mut host = Applied::default();
//!
//! drag.start(&4, Point::new(100.0, 100.0), &host);
//! let outcome = drag.move_to(Point::new(150.0, 130.0), &mut host);
//! assert!(outcome.prevents_default());
//! assert_eq!(outcome.placement().map(|p| p.offset()), Some(Vec2::new(50.0, 30.0)));
//! drag.end();
//!
//! // A second drag on the same element continues from (50, 30).
//! drag.start(&4, Point::new(200.0, 200.0), &host);
//! drag.move_to(Point::new(210.0, 205.0), &mut host);
//! assert_eq!(drag.offset_of(&4), Some(Vec2::new(60.0, 35.0)));
//!
//! // Moves without an active drag do nothing.
//! drag.end();
//! assert_eq!(drag.move_to(Point::new(0.0, 0.0), &mut host), MoveOutcome::Idle);
//! ```
//!
//! ## Offset continuation
//!
//! Two policies are supported and must not be mixed (see [`Continuation`]):
//! - [`Continuation::Remembered`]: the controller keeps each element's last
//!   applied offset in an [`ElementRegistry`] side-table. Works with any
//!   [`Positioning`], including transforms that layout cannot observe.
//! - [`Continuation::LayoutReadBack`]: the origin is read from the host's live
//!   layout offset at every start. Only valid with [`Positioning::Absolute`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod host;
mod placement;
mod registry;
mod session;

pub use config::{ConfigError, Continuation, DragConfig, Positioning};
pub use controller::{DragController, DragPhase, Draggable, MoveOutcome, StartOutcome};
pub use host::DragHost;
pub use placement::Placement;
pub use registry::{ElementId, ElementRegistry, TrackedElement};
pub use session::DragSession;
