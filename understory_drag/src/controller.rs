// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag controller: session lifecycle over an injected capability predicate.
//!
//! The controller is a two-state machine:
//!
//! ```text
//! Idle --start(draggable)--> Dragging --move--> Dragging --end--> Idle
//! ```
//!
//! `start` on a target the predicate rejects leaves it `Idle`, and `move`/`end`
//! while `Idle` are silent no-ops.

use core::fmt;
use core::hash::Hash;

use kurbo::{Point, Vec2};

use crate::config::{Continuation, DragConfig, Positioning};
use crate::host::DragHost;
use crate::placement::Placement;
use crate::registry::{ElementId, ElementRegistry};
use crate::session::DragSession;

/// Capability test deciding whether a pointer-down target may be dragged.
///
/// Implemented for every `Fn(&E) -> bool`, so a closure is usually enough.
pub trait Draggable<E> {
    /// Returns `true` if `element` belongs to the draggable set.
    fn is_draggable(&self, element: &E) -> bool;
}

impl<E, F> Draggable<E> for F
where
    F: Fn(&E) -> bool,
{
    fn is_draggable(&self, element: &E) -> bool {
        self(element)
    }
}

/// Coarse controller state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No drag in progress.
    Idle,
    /// A session is active and moves reposition its element.
    Dragging,
}

/// Result of [`DragController::start`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StartOutcome {
    /// A session started on the element with this identity.
    Started(ElementId),
    /// The target is not draggable; nothing changed.
    Ignored,
}

/// Result of [`DragController::move_to`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The element was moved to this placement.
    Moved(Placement),
    /// No session is active; nothing was applied.
    Idle,
}

impl MoveOutcome {
    /// Whether the host should suppress its default handling of the move event.
    ///
    /// This is `true` exactly when a session was active.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Moved(_))
    }

    /// The applied placement, if any.
    pub fn placement(&self) -> Option<Placement> {
        match *self {
            Self::Moved(placement) => Some(placement),
            Self::Idle => None,
        }
    }
}

/// Owns the drag session and per-element offset memory for one container.
///
/// `E` is the host's element handle; `P` is the capability predicate.
/// Controllers are independent of each other, so several containers can each
/// have their own.
pub struct DragController<E, P> {
    config: DragConfig,
    draggable: P,
    registry: ElementRegistry<E>,
    session: Option<DragSession<E>>,
}

impl<E: fmt::Debug, P> fmt::Debug for DragController<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<E, P> DragController<E, P>
where
    E: Clone + Eq + Hash,
    P: Draggable<E>,
{
    /// Creates an idle controller.
    pub fn new(config: DragConfig, draggable: P) -> Self {
        Self {
            config,
            draggable,
            registry: ElementRegistry::new(),
            session: None,
        }
    }

    /// Handles pointer-down on `target` at `pointer`.
    ///
    /// Non-draggable targets are ignored, which lets a container host the
    /// listener without becoming draggable itself. Otherwise the element gets
    /// an identity (on its first drag), its origin offset is resolved according
    /// to [`Continuation`], and a new session replaces any previous one.
    pub fn start<H>(&mut self, target: &E, pointer: Point, host: &H) -> StartOutcome
    where
        H: DragHost<E> + ?Sized,
    {
        if !self.draggable.is_draggable(target) {
            log::trace!("pointer-down on a non-draggable target ignored");
            return StartOutcome::Ignored;
        }

        let first_drag = self.registry.get(target).is_none();
        let tracked = self.registry.ensure(target);
        let origin = match self.config.continuation() {
            // Absolute positioning starts from wherever the stylesheet put the element.
            Continuation::Remembered
                if first_drag && self.config.positioning() == Positioning::Absolute =>
            {
                host.layout_offset(target)
            }
            Continuation::Remembered => tracked.end,
            Continuation::LayoutReadBack => host.layout_offset(target),
        };
        tracked.end = origin;
        let id = tracked.id;

        log::debug!(
            "drag start on {id:?} at ({}, {}) from offset ({}, {})",
            pointer.x,
            pointer.y,
            origin.x,
            origin.y
        );
        self.session = Some(DragSession::begin(target.clone(), id, origin, pointer));
        StartOutcome::Started(id)
    }

    /// Handles pointer-move to `pointer`.
    ///
    /// While a session is active the element is moved to
    /// `origin + (pointer - anchor)`, the offset is remembered, and the
    /// placement is applied through `host`.
    pub fn move_to<H>(&mut self, pointer: Point, host: &mut H) -> MoveOutcome
    where
        H: DragHost<E> + ?Sized,
    {
        let Some(session) = self.session.as_mut().filter(|s| s.is_active()) else {
            return MoveOutcome::Idle;
        };

        session.record(pointer);
        let offset = session.position(pointer);
        let placement = Placement::new(self.config.positioning(), offset);
        self.registry.set_offset(session.target(), offset);
        log::trace!("drag {:?} to ({}, {})", session.id(), offset.x, offset.y);
        host.apply_position(session.target(), placement);
        MoveOutcome::Moved(placement)
    }

    /// Handles pointer-up, returning the element whose session ended.
    ///
    /// Offsets are kept, so the next drag of the same element resumes where
    /// this one stopped.
    pub fn end(&mut self) -> Option<ElementId> {
        let session = self.session.as_mut().filter(|s| s.is_active())?;
        session.deactivate();
        log::debug!("drag end on {:?}", session.id());
        Some(session.id())
    }

    /// Aborts the active drag, putting the element back at its origin offset.
    ///
    /// For lost pointer capture (the pointer leaving the container, window
    /// blur). The origin is re-applied through `host` and remembered.
    pub fn cancel<H>(&mut self, host: &mut H) -> Option<ElementId>
    where
        H: DragHost<E> + ?Sized,
    {
        let session = self.session.as_mut().filter(|s| s.is_active())?;
        session.deactivate();
        let origin = session.origin();
        self.registry.set_offset(session.target(), origin);
        host.apply_position(
            session.target(),
            Placement::new(self.config.positioning(), origin),
        );
        log::debug!("drag cancelled on {:?}", session.id());
        Some(session.id())
    }

    /// Current phase.
    pub fn phase(&self) -> DragPhase {
        if self.is_dragging() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Returns `true` while a session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::is_active)
    }

    /// The element being dragged, if any.
    pub fn active_target(&self) -> Option<&E> {
        self.session
            .as_ref()
            .filter(|s| s.is_active())
            .map(DragSession::target)
    }

    /// The most recent session, active or not.
    pub fn session(&self) -> Option<&DragSession<E>> {
        self.session.as_ref()
    }

    /// The last applied offset of `element`.
    pub fn offset_of(&self, element: &E) -> Option<Vec2> {
        self.registry.offset_of(element)
    }

    /// The per-element offset memory.
    pub fn registry(&self) -> &ElementRegistry<E> {
        &self.registry
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// Drops everything known about `element`, e.g. after it left the host.
    ///
    /// A session on `element` is discarded along with it.
    pub fn forget(&mut self, element: &E) -> Option<ElementId> {
        if self.session.as_ref().is_some_and(|s| s.target() == element) {
            self.session = None;
        }
        self.registry.forget(element).map(|tracked| tracked.id)
    }

    /// Discards the session and all remembered offsets.
    pub fn reset(&mut self) {
        self.session = None;
        self.registry.clear();
    }
}
