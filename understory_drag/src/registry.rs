// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-table of dragged elements and their accumulated offsets.
//!
//! Identities live here rather than on the host's element objects, which the
//! controller does not own. An element gets its [`ElementId`] the first time
//! [`ElementRegistry::ensure`] sees it and keeps it until it is forgotten.

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Vec2;

/// Opaque identity assigned to an element on its first accepted drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    /// The raw counter value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Registry entry for one element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackedElement {
    /// Identity assigned on first drag.
    pub id: ElementId,
    /// Last applied offset (`endX`, `endY`), [`Vec2::ZERO`] until the first move.
    pub end: Vec2,
}

/// Maps host element handles to their [`TrackedElement`] records.
#[derive(Clone, Debug)]
pub struct ElementRegistry<E> {
    elements: HashMap<E, TrackedElement>,
    next_id: u32,
}

impl<E> Default for ElementRegistry<E> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<E: Clone + Eq + Hash> ElementRegistry<E> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `element`, assigning an identity if it has none.
    ///
    /// Identities are not reused after [`forget`](Self::forget); the counter
    /// only wraps after `u32::MAX` assignments.
    pub fn ensure(&mut self, element: &E) -> &mut TrackedElement {
        let next_id = &mut self.next_id;
        self.elements.entry(element.clone()).or_insert_with(|| {
            let id = ElementId(*next_id);
            *next_id = next_id.wrapping_add(1);
            log::debug!("assigned drag identity {id:?}");
            TrackedElement {
                id,
                end: Vec2::ZERO,
            }
        })
    }

    /// The record for `element`, if it has ever been dragged.
    pub fn get(&self, element: &E) -> Option<&TrackedElement> {
        self.elements.get(element)
    }

    /// The identity of `element`, if one has been assigned.
    pub fn id_of(&self, element: &E) -> Option<ElementId> {
        self.get(element).map(|tracked| tracked.id)
    }

    /// The last applied offset of `element`.
    pub fn offset_of(&self, element: &E) -> Option<Vec2> {
        self.get(element).map(|tracked| tracked.end)
    }

    /// Records `offset` as the last applied offset of an already tracked element.
    ///
    /// Returns `false` if `element` is not tracked.
    pub fn set_offset(&mut self, element: &E, offset: Vec2) -> bool {
        match self.elements.get_mut(element) {
            Some(tracked) => {
                tracked.end = offset;
                true
            }
            None => false,
        }
    }

    /// Drops the record for `element`, returning it.
    pub fn forget(&mut self, element: &E) -> Option<TrackedElement> {
        self.elements.remove(element)
    }

    /// Drops every record. The identity counter keeps counting.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element is tracked.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over tracked elements in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &TrackedElement)> {
        self.elements.iter()
    }
}
