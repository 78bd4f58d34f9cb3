//! Home scene host: canvas, drag input, frame loop and viewport tracking.
//!
//! ARCHITECTURE
//! ============
//! `SceneController` decides what the scene does; the external renderer
//! behind `JsSceneRenderer` draws it. This component owns the canvas, feeds
//! pointer drags and frame deltas into the controller, and mirrors the
//! controller's stage and rotation into signals for the info panel and the
//! cursor. All browser resources live in a `SceneRuntime` released with the
//! component.

use interaction::scene::Stage;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_events::EventListener;
#[cfg(feature = "hydrate")]
use gloo_render::{AnimationFrame, request_animation_frame};
#[cfg(feature = "hydrate")]
use interaction::scene::SceneController;
#[cfg(feature = "hydrate")]
use interaction::timing::COMPACT_VIEWPORT_PX;

#[cfg(feature = "hydrate")]
use crate::util::scene_bridge::JsSceneRenderer;

/// Signals the scene publishes to the rest of the home page.
#[derive(Clone, Copy)]
pub struct SceneSignals {
    pub progress: RwSignal<f64>,
    pub stage: RwSignal<Option<Stage>>,
    pub rotating: RwSignal<bool>,
}

impl SceneSignals {
    pub fn new() -> Self {
        Self { progress: RwSignal::new(0.0), stage: RwSignal::new(None), rotating: RwSignal::new(false) }
    }
}

impl Default for SceneSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
struct SceneRuntime {
    controller: RefCell<SceneController<JsSceneRenderer>>,
    frame: RefCell<Option<AnimationFrame>>,
    resize: RefCell<Option<EventListener>>,
    last_frame_ms: Cell<Option<f64>>,
    signals: SceneSignals,
}

#[cfg(feature = "hydrate")]
impl SceneRuntime {
    fn start(canvas: web_sys::HtmlCanvasElement, signals: SceneSignals) -> Option<Rc<Self>> {
        let window = web_sys::window()?;
        let progress = signals.progress;
        let renderer = match JsSceneRenderer::attach(canvas, move |value| progress.set(value)) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::warn!("scene renderer unavailable: {e:?}");
                progress.set(100.0);
                return None;
            }
        };
        let runtime = Rc::new(Self {
            controller: RefCell::new(SceneController::mount(renderer, viewport_width(&window))),
            frame: RefCell::new(None),
            resize: RefCell::new(None),
            last_frame_ms: Cell::new(None),
            signals,
        });

        let weak = Rc::downgrade(&runtime);
        let listener = EventListener::new(&window, "resize", move |_| {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                runtime.controller.borrow_mut().resize(viewport_width(&window));
            }
        });
        *runtime.resize.borrow_mut() = Some(listener);
        runtime.schedule_frame();
        log::debug!("scene mounted");
        Some(runtime)
    }

    fn schedule_frame(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            runtime.frame.borrow_mut().take();
            let delta = runtime
                .last_frame_ms
                .replace(Some(timestamp))
                .map_or(0.0, |previous| ((timestamp - previous) / 1000.0).max(0.0));
            runtime.controller.borrow_mut().frame(delta);
            runtime.schedule_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn with_controller(&self, f: impl FnOnce(&mut SceneController<JsSceneRenderer>)) {
        let (stage, rotating) = {
            let mut controller = self.controller.borrow_mut();
            f(&mut controller);
            (controller.stage(), controller.is_rotating())
        };
        if self.signals.stage.get_untracked() != stage {
            self.signals.stage.set(stage);
        }
        if self.signals.rotating.get_untracked() != rotating {
            self.signals.rotating.set(rotating);
        }
    }
}

#[cfg(feature = "hydrate")]
fn drive(
    runtime: StoredValue<Option<Rc<SceneRuntime>>, LocalStorage>,
    f: impl FnOnce(&mut SceneController<JsSceneRenderer>),
) {
    runtime.with_value(|runtime| {
        if let Some(runtime) = runtime {
            runtime.with_controller(f);
        }
    });
}

#[cfg(feature = "hydrate")]
fn viewport_width(window: &web_sys::Window) -> f64 {
    window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(COMPACT_VIEWPORT_PX)
}

/// Canvas for the island scene.
///
/// On hydration this attaches the external renderer, starts the frame loop
/// and routes pointer drags into the controller.
#[component]
pub fn SceneHost(signals: SceneSignals) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let rotating = signals.rotating;

    #[cfg(feature = "hydrate")]
    let runtime: StoredValue<Option<Rc<SceneRuntime>>, LocalStorage> = StoredValue::new_local(None);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if runtime.with_value(Option::is_some) {
                return;
            }
            runtime.set_value(SceneRuntime::start(canvas, signals));
        });
        on_cleanup(move || {
            if runtime.try_update_value(Option::take).is_none() {
                log::debug!("scene runtime already disposed");
            }
        });
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            ev.prevent_default();
            let x = f64::from(ev.client_x());
            drive(runtime, |controller| controller.drag_start(x));
        }
    };

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let x = f64::from(ev.client_x());
            drive(runtime, |controller| controller.drag_move(x));
        }
    };

    let on_pointer_end = move |_: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        drive(runtime, SceneController::drag_end);
    };

    view! {
        <canvas
            node_ref=canvas_ref
            class="scene-canvas"
            class:scene-canvas--grabbing=move || rotating.get()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointerleave=on_pointer_end
        ></canvas>
    }
}
