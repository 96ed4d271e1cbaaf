// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `web-sys` host, predicate and listener wiring.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::hash::{Hash, Hasher};

use js_sys::{Object, WeakMap};
use kurbo::{Point, Vec2};
use understory_drag::{DragController, DragHost, Draggable, Placement};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::{WebDragOptions, offset_from_css};

/// The controller type driven by a [`DragBinding`].
pub type WebDragController = DragController<DomElement, HasClass>;

/// A DOM element paired with its side-table key.
///
/// Equality and hashing use the key, which is stable for the lifetime of the
/// underlying object.
#[derive(Clone, Debug)]
pub struct DomElement {
    key: u32,
    element: HtmlElement,
}

impl DomElement {
    /// The wrapped element.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl PartialEq for DomElement {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for DomElement {}

impl Hash for DomElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Hands out stable keys for DOM objects without mutating them.
#[derive(Debug)]
struct ElementKeys {
    keys: WeakMap,
    next: u32,
}

impl ElementKeys {
    fn new() -> Self {
        Self {
            keys: WeakMap::new(),
            next: 0,
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Keys are stored as JS numbers but only ever written from a u32 counter."
    )]
    fn wrap(&mut self, element: HtmlElement) -> DomElement {
        let object: &Object = element.as_ref();
        let key = match self.keys.get(object).as_f64() {
            Some(key) => key as u32,
            None => {
                let key = self.next;
                self.next = self.next.wrapping_add(1);
                self.keys.set(object, &JsValue::from(key));
                key
            }
        };
        DomElement { key, element }
    }
}

/// Capability test: the element's class list contains a given class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HasClass(pub String);

impl Draggable<DomElement> for HasClass {
    fn is_draggable(&self, element: &DomElement) -> bool {
        element.element.class_list().contains(&self.0)
    }
}

/// Style sink writing placements to inline styles.
#[derive(Copy, Clone, Debug, Default)]
pub struct DomHost;

impl DragHost<DomElement> for DomHost {
    /// Reads the computed `left` / `top`, the same properties absolute placements write.
    ///
    /// `offsetLeft`/`offsetTop` would include margins and static-flow position,
    /// making the element jump on every start.
    fn layout_offset(&self, element: &DomElement) -> Vec2 {
        match computed_left_top(&element.element) {
            Ok((left, top)) => offset_from_css(&left, &top),
            Err(err) => {
                log::warn!("could not read computed offsets: {err:?}");
                Vec2::ZERO
            }
        }
    }

    fn apply_position(&mut self, element: &DomElement, placement: Placement) {
        let style = element.element.style();
        for (property, value) in placement.declarations() {
            if let Err(err) = style.set_property(property, &value) {
                log::warn!("could not set `{property}: {value}`: {err:?}");
            }
        }
    }
}

fn computed_left_top(element: &HtmlElement) -> Result<(String, String), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let Some(style) = window.get_computed_style(element)? else {
        return Ok((String::new(), String::new()));
    };
    Ok((
        style.get_property_value("left")?,
        style.get_property_value("top")?,
    ))
}

struct State {
    controller: WebDragController,
    keys: ElementKeys,
    host: DomHost,
}

type Listener = Closure<dyn FnMut(MouseEvent)>;

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Drag handling attached to one container element.
///
/// Dropping the binding removes its listeners.
pub struct DragBinding {
    container: Element,
    state: Rc<RefCell<State>>,
    listeners: Vec<(&'static str, Listener)>,
}

impl core::fmt::Debug for DragBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragBinding")
            .field("container", &self.container)
            .field(
                "events",
                &self.listeners.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl DragBinding {
    /// Listens for mouse events on `container` and drags its matching descendants.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if a listener cannot be registered.
    /// Listeners registered before the failure are removed again.
    pub fn attach(container: &Element, options: WebDragOptions) -> Result<Self, JsValue> {
        let state = Rc::new(RefCell::new(State {
            controller: DragController::new(options.config, HasClass(options.class_name)),
            keys: ElementKeys::new(),
            host: DomHost,
        }));
        let mut binding = Self {
            container: container.clone(),
            state,
            listeners: Vec::new(),
        };

        binding.listen("mousedown", |state, event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let State {
                controller,
                keys,
                host,
            } = state;
            let target = keys.wrap(target);
            controller.start(&target, client_point(&event), &*host);
        })?;

        binding.listen("mousemove", |state, event| {
            let outcome = state
                .controller
                .move_to(client_point(&event), &mut state.host);
            if outcome.prevents_default() {
                event.prevent_default();
            }
        })?;

        binding.listen("mouseup", |state, _| {
            state.controller.end();
        })?;

        if options.cancel_on_leave {
            binding.listen("mouseleave", |state, _| {
                state.controller.cancel(&mut state.host);
            })?;
        }

        log::debug!(
            "drag binding attached with {} listeners",
            binding.listeners.len()
        );
        Ok(binding)
    }

    fn listen(
        &mut self,
        name: &'static str,
        mut handler: impl FnMut(&mut State, MouseEvent) + 'static,
    ) -> Result<(), JsValue> {
        let state = Rc::clone(&self.state);
        let listener: Listener = Closure::wrap(Box::new(move |event: MouseEvent| {
            // Listeners never run re-entrantly for one binding; skip if they somehow do.
            let Ok(mut state) = state.try_borrow_mut() else {
                return;
            };
            handler(&mut *state, event);
        }) as Box<dyn FnMut(MouseEvent)>);
        self.container
            .add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())?;
        self.listeners.push((name, listener));
        Ok(())
    }

    /// Runs `f` with the underlying controller, e.g. to inspect offsets.
    pub fn with_controller<R>(&self, f: impl FnOnce(&WebDragController) -> R) -> R {
        f(&self.state.borrow().controller)
    }

    /// Runs `f` with mutable access to the controller, e.g. to forget removed elements.
    pub fn with_controller_mut<R>(&self, f: impl FnOnce(&mut WebDragController) -> R) -> R {
        f(&mut self.state.borrow_mut().controller)
    }

    /// The container this binding listens on.
    pub fn container(&self) -> &Element {
        &self.container
    }
}

impl Drop for DragBinding {
    fn drop(&mut self) {
        for (name, listener) in self.listeners.drain(..) {
            if let Err(err) = self
                .container
                .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            {
                log::warn!("could not remove `{name}` listener: {err:?}");
            }
        }
    }
}
