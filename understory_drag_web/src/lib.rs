// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag_web --heading-base-level=0

//! DOM bindings for [`understory_drag`].
//!
//! This crate wires a [`DragController`](understory_drag::DragController) to a
//! browser container element when targeting `wasm32`:
//!
//! - `mousedown`, `mousemove` and `mouseup` are listened to on the container,
//!   so any descendant carrying the draggable class can be dragged without
//!   per-element registration.
//! - The capability test is class membership (`"item"` by default).
//! - Positions are written with `style.setProperty`, using the declarations of
//!   each [`Placement`](understory_drag::Placement).
//! - Element identity comes from a `WeakMap` side-table; nothing is attached to
//!   the DOM objects themselves.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_draggable(
//!     container: &web_sys::Element,
//! ) -> Result<understory_drag_web::DragBinding, wasm_bindgen::JsValue> {
//!     understory_drag_web::DragBinding::attach(container, understory_drag_web::WebDragOptions::default())
//! }
//! ```
//!
//! Selector lookups and the stylesheet itself stay with the caller. The binding
//! removes its listeners when dropped.

#![no_std]

extern crate alloc;

use alloc::string::String;

use kurbo::Vec2;
use understory_drag::DragConfig;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomElement, DomHost, DragBinding, HasClass, WebDragController};

/// Class used by [`WebDragOptions::default`].
pub const DEFAULT_DRAGGABLE_CLASS: &str = "item";

/// Options for attaching drag handling to a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebDragOptions {
    /// Class an event target must carry to be draggable.
    pub class_name: String,
    /// Positioning and continuation policies.
    pub config: DragConfig,
    /// Cancel an active drag (restoring its origin) when the pointer leaves the container.
    ///
    /// Off by default: a drag then lasts until the button is released over the container.
    pub cancel_on_leave: bool,
}

impl Default for WebDragOptions {
    fn default() -> Self {
        Self {
            class_name: String::from(DEFAULT_DRAGGABLE_CLASS),
            config: DragConfig::default(),
            cancel_on_leave: false,
        }
    }
}

impl WebDragOptions {
    /// Options for elements carrying `class_name`, with default policies.
    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// Replaces the drag policies.
    #[must_use]
    pub fn config(mut self, config: DragConfig) -> Self {
        self.config = config;
        self
    }
}

/// Parses a computed CSS length in pixels, such as `"20px"` or `"-2.5px"`.
///
/// Returns `None` for `auto`, other units, and anything unparsable.
pub fn css_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = match value.strip_suffix("px") {
        Some(number) => number,
        None if value == "0" => value,
        None => return None,
    };
    number.trim_end().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The layout offset described by computed `left` / `top` values.
///
/// Axes that are not pixel lengths (typically `auto`) count as `0`, which is
/// where a positioned element with that value sits.
pub fn offset_from_css(left: &str, top: &str) -> Vec2 {
    Vec2::new(css_px(left).unwrap_or(0.0), css_px(top).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_drag::{Placement, Positioning};

    #[test]
    fn default_options_drag_items_with_transforms() {
        let options = WebDragOptions::default();
        assert_eq!(options.class_name, "item");
        assert_eq!(options.config, DragConfig::transform());
        assert!(!options.cancel_on_leave);
    }

    #[test]
    fn pixel_lengths_parse() {
        assert_eq!(css_px("20px"), Some(20.0));
        assert_eq!(css_px(" -2.5px "), Some(-2.5));
        assert_eq!(css_px("0"), Some(0.0));
    }

    #[test]
    fn non_pixel_lengths_are_rejected() {
        assert_eq!(css_px("auto"), None);
        assert_eq!(css_px("10%"), None);
        assert_eq!(css_px("2em"), None);
        assert_eq!(css_px("px"), None);
        assert_eq!(css_px(""), None);
    }

    #[test]
    fn offset_reads_back_what_absolute_placement_writes() {
        let written = Placement::new(Positioning::Absolute, Vec2::new(20.0, 40.0)).declarations();
        let value = |property: &str| {
            written
                .iter()
                .find(|(name, _)| *name == property)
                .map(|(_, value)| value.clone())
                .unwrap()
        };
        assert_eq!(
            offset_from_css(&value("left"), &value("top")),
            Vec2::new(20.0, 40.0)
        );
    }

    #[test]
    fn auto_offsets_count_as_zero() {
        assert_eq!(offset_from_css("auto", "12px"), Vec2::new(0.0, 12.0));
    }

    #[test]
    fn builder_overrides_class_and_config() {
        let options = WebDragOptions::with_class("card").config(DragConfig::absolute());
        assert_eq!(options.class_name, "card");
        assert_eq!(options.config, DragConfig::absolute());
    }
}
