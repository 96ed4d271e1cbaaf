// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration: how positions are expressed and how offsets carry over.

use core::fmt;

/// How a drag position is expressed on the element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Positioning {
    /// A 2D `translate(x, y)` transform; the element's layout position is untouched.
    Translate,
    /// A `translate3d(x, y, 0)` transform; the element's layout position is untouched.
    #[default]
    Translate3d,
    /// Write the layout offset properties directly, one per axis (`left` and `top`).
    Absolute,
}

impl Positioning {
    /// Returns `true` if this policy leaves the element's layout offset unchanged.
    pub fn is_transform(self) -> bool {
        matches!(self, Self::Translate | Self::Translate3d)
    }
}

/// Where the origin offset of a new drag comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Continuation {
    /// The controller remembers the last applied offset of every element it has dragged.
    ///
    /// An element's first drag starts from [`Vec2::ZERO`](kurbo::Vec2::ZERO) under
    /// transform positioning (the untransformed layout position). Under
    /// [`Positioning::Absolute`] the first origin is read from the host's layout
    /// offset instead, so a stylesheet `left`/`top` is kept; later drags use the
    /// remembered offset.
    #[default]
    Remembered,
    /// The origin is read back from the host's layout offset at each start.
    ///
    /// Requires [`Positioning::Absolute`]: a transform is not visible to layout.
    LayoutReadBack,
}

/// Error returned by [`DragConfig::new`] for policy combinations that cannot work.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Layout read-back was requested together with a transform-based positioning policy.
    TransformNotReadable {
        /// The rejected positioning policy.
        positioning: Positioning,
    },
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransformNotReadable { positioning } => write!(
                f,
                "ConfigError::TransformNotReadable {{ positioning: {positioning:?} }}"
            ),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransformNotReadable { positioning } => write!(
                f,
                "layout read-back cannot observe offsets applied with {positioning:?} positioning"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Validated pair of [`Positioning`] and [`Continuation`] policies.
///
/// The default is [`Positioning::Translate3d`] with [`Continuation::Remembered`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct DragConfig {
    positioning: Positioning,
    continuation: Continuation,
}

impl DragConfig {
    /// Creates a configuration, rejecting combinations that would lose offsets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransformNotReadable`] when `continuation` is
    /// [`Continuation::LayoutReadBack`] and `positioning` is a transform.
    pub fn new(positioning: Positioning, continuation: Continuation) -> Result<Self, ConfigError> {
        if continuation == Continuation::LayoutReadBack && positioning.is_transform() {
            return Err(ConfigError::TransformNotReadable { positioning });
        }
        Ok(Self {
            positioning,
            continuation,
        })
    }

    /// Transform positioning with controller-owned offset memory.
    #[must_use]
    pub const fn transform() -> Self {
        Self {
            positioning: Positioning::Translate3d,
            continuation: Continuation::Remembered,
        }
    }

    /// `left`/`top` positioning with the origin read back from layout.
    #[must_use]
    pub const fn absolute() -> Self {
        Self {
            positioning: Positioning::Absolute,
            continuation: Continuation::LayoutReadBack,
        }
    }

    /// The positioning policy.
    pub fn positioning(&self) -> Positioning {
        self.positioning
    }

    /// The continuation policy.
    pub fn continuation(&self) -> Continuation {
        self.continuation
    }
}
