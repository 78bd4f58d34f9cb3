//! Browser binding for the interaction core.
//!
//! ARCHITECTURE
//! ============
//! `InteractionSession` owns every browser resource one page's interaction
//! needs: window/document listeners, the pending settle timeout and the
//! pending animation frame. Listeners translate DOM events into core signals
//! and execute the returned commands; timers call back into the core by token.
//! Dropping the session removes the listeners and cancels the timers, so no
//! exit path can leave a callback behind.
//!
//! Fired timers stay in their slot until superseded or cancelled. Replacing
//! them from inside their own callback is never required, since settle and
//! frame callbacks only publish signals.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;
use interaction::command::Command;
use interaction::config::{InteractionConfig, TargetKind};
use interaction::pointer::PointerPosition;
use interaction::session::InteractionCore;
use interaction::timer::TimerToken;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, Node};

struct Inner {
    core: RefCell<InteractionCore>,
    settle: RefCell<Option<(TimerToken, Timeout)>>,
    frame: RefCell<Option<(TimerToken, AnimationFrame)>>,
    selecting: RwSignal<bool>,
    pointer: RwSignal<PointerPosition>,
}

pub struct InteractionSession {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl InteractionSession {
    /// Attach listeners for one page. Returns `None` outside a browser window.
    pub fn start(
        config: InteractionConfig,
        selecting: RwSignal<bool>,
        pointer: RwSignal<PointerPosition>,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let inner = Rc::new(Inner {
            core: RefCell::new(InteractionCore::new(config)),
            settle: RefCell::new(None),
            frame: RefCell::new(None),
            selecting,
            pointer,
        });

        let mut listeners = Vec::with_capacity(6);

        let handler = Rc::clone(&inner);
        // gloo listeners are passive unless asked otherwise.
        listeners.push(EventListener::new(&window, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let position = PointerPosition::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            let target = handler.classify(event);
            let out = handler.core.borrow_mut().pointer_move(position, target);
            handler.apply(out);
        }));

        let handler = Rc::clone(&inner);
        listeners.push(EventListener::new(&window, "mousedown", move |event| {
            let target = handler.classify(event);
            let out = handler.core.borrow_mut().pointer_down(target);
            handler.apply(out);
        }));

        let handler = Rc::clone(&inner);
        listeners.push(EventListener::new(&window, "mouseup", move |event| {
            let target = handler.classify(event);
            let out = handler.core.borrow_mut().pointer_up(target);
            handler.apply(out);
        }));

        let handler = Rc::clone(&inner);
        listeners.push(EventListener::new(&window, "selectstart", move |_| {
            let out = handler.core.borrow_mut().select_start();
            handler.apply(out);
        }));

        let handler = Rc::clone(&inner);
        listeners.push(EventListener::new(&window, "click", move |_| {
            let empty = selection_is_empty();
            let out = handler.core.borrow_mut().click(empty);
            handler.apply(out);
        }));

        let handler = Rc::clone(&inner);
        listeners.push(EventListener::new(&document, "selectionchange", move |_| {
            let empty = selection_is_empty();
            let out = handler.core.borrow_mut().selection_change(empty);
            handler.apply(out);
        }));

        log::debug!("interaction session started with {} listeners", listeners.len());
        Some(Self { inner, _listeners: listeners })
    }

    pub fn set_frozen(&self, frozen: bool) {
        let out = self.inner.core.borrow_mut().set_frozen(frozen);
        self.inner.apply(out);
    }
}

impl Drop for InteractionSession {
    fn drop(&mut self) {
        let out = self.inner.core.borrow_mut().teardown();
        self.inner.apply(out);
        // Fired timers are still parked in their slots.
        self.inner.settle.borrow_mut().take();
        self.inner.frame.borrow_mut().take();
        log::debug!("interaction session released");
    }
}

impl Inner {
    fn classify(&self, event: &Event) -> TargetKind {
        let Some(element) = event_element(event) else {
            return TargetKind::Plain;
        };
        self.core
            .borrow()
            .config()
            .classify(|selector| matches!(element.closest(selector), Ok(Some(_))))
    }

    fn apply(self: &Rc<Self>, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::ScheduleSettle { token, delay_ms } => {
                    let weak = Rc::downgrade(self);
                    let timeout = Timeout::new(delay_ms, move || {
                        let Some(inner) = weak.upgrade() else {
                            return;
                        };
                        let empty = selection_is_empty();
                        let out = inner.core.borrow_mut().settle_elapsed(token, empty);
                        inner.apply(out);
                    });
                    *self.settle.borrow_mut() = Some((token, timeout));
                }
                Command::CancelSettle(token) => {
                    let mut slot = self.settle.borrow_mut();
                    if slot.as_ref().is_some_and(|(live, _)| *live == token) {
                        slot.take();
                    }
                }
                Command::RequestFrame(token) => {
                    let weak = Rc::downgrade(self);
                    let frame = request_animation_frame(move |_timestamp| {
                        let Some(inner) = weak.upgrade() else {
                            return;
                        };
                        let out = inner.core.borrow_mut().frame_elapsed(token);
                        inner.apply(out);
                    });
                    *self.frame.borrow_mut() = Some((token, frame));
                }
                Command::CancelFrame(token) => {
                    let mut slot = self.frame.borrow_mut();
                    if slot.as_ref().is_some_and(|(live, _)| *live == token) {
                        slot.take();
                    }
                }
                Command::SelectingChanged(selecting) => self.selecting.set(selecting),
                Command::PointerMoved(position) => self.pointer.set(position),
            }
        }
    }
}

/// The element an event targeted, or the parent element of a targeted text node.
fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    if let Some(element) = target.dyn_ref::<Element>() {
        return Some(element.clone());
    }
    target.dyn_ref::<Node>().and_then(Node::parent_element)
}

/// Whether the document's live text selection is empty.
fn selection_is_empty() -> bool {
    match web_sys::window().map(|w| w.get_selection()) {
        Some(Ok(Some(selection))) => selection.to_string().length() == 0,
        _ => true,
    }
}
