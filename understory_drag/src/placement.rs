// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positions ready to be written to an element's style.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::config::Positioning;

/// A drag position expressed under one [`Positioning`] policy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Placement {
    /// `transform: translate(x, y)`.
    Translate(Vec2),
    /// `transform: translate3d(x, y, 0)`.
    Translate3d(Vec2),
    /// `left` / `top` layout offsets.
    Absolute {
        /// Horizontal offset, in CSS pixels.
        left: f64,
        /// Vertical offset, in CSS pixels.
        top: f64,
    },
}

impl Placement {
    /// Expresses `offset` under `positioning`.
    pub fn new(positioning: Positioning, offset: Vec2) -> Self {
        match positioning {
            Positioning::Translate => Self::Translate(offset),
            Positioning::Translate3d => Self::Translate3d(offset),
            Positioning::Absolute => Self::Absolute {
                left: offset.x,
                top: offset.y,
            },
        }
    }

    /// The offset this placement moves the element to.
    pub fn offset(&self) -> Vec2 {
        match *self {
            Self::Translate(offset) | Self::Translate3d(offset) => offset,
            Self::Absolute { left, top } => Vec2::new(left, top),
        }
    }

    /// CSS `(property, value)` pairs that realize this placement.
    ///
    /// Transform placements produce a single `transform` declaration; absolute
    /// placements produce exactly one declaration per axis.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        match *self {
            Self::Translate(v) => vec![(
                "transform",
                format!("translate({}px, {}px)", css_number(v.x), css_number(v.y)),
            )],
            Self::Translate3d(v) => vec![(
                "transform",
                format!("translate3d({}px, {}px, 0)", css_number(v.x), css_number(v.y)),
            )],
            Self::Absolute { left, top } => vec![
                ("left", format!("{}px", css_number(left))),
                ("top", format!("{}px", css_number(top))),
            ],
        }
    }
}

/// Normalizes `-0.0` so it never reaches a style string as `-0`.
fn css_number(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn offset_is_policy_independent() {
        let offset = Vec2::new(50.0, 30.0);
        for positioning in [
            Positioning::Translate,
            Positioning::Translate3d,
            Positioning::Absolute,
        ] {
            assert_eq!(Placement::new(positioning, offset).offset(), offset);
        }
    }

    #[test]
    fn translate3d_declaration() {
        let placement = Placement::new(Positioning::Translate3d, Vec2::new(50.0, 30.0));
        assert_eq!(
            placement.declarations(),
            vec![("transform", "translate3d(50px, 30px, 0)".to_string())]
        );
    }

    #[test]
    fn translate_declaration_keeps_fractions() {
        let placement = Placement::new(Positioning::Translate, Vec2::new(-2.5, 0.25));
        assert_eq!(
            placement.declarations(),
            vec![("transform", "translate(-2.5px, 0.25px)".to_string())]
        );
    }

    #[test]
    fn absolute_writes_one_property_per_axis() {
        let placement = Placement::new(Positioning::Absolute, Vec2::new(20.0, 40.0));
        assert_eq!(placement, Placement::Absolute { left: 20.0, top: 40.0 });
        assert_eq!(
            placement.declarations(),
            vec![
                ("left", "20px".to_string()),
                ("top", "40px".to_string())
            ]
        );
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        let placement = Placement::new(Positioning::Translate3d, Vec2::new(-0.0, 3.0));
        assert_eq!(
            placement.declarations(),
            vec![("transform", "translate3d(0px, 3px, 0)".to_string())]
        );
    }
}
