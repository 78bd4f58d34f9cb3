//! Parallax layers and floating cards for the content pages.
//!
//! Both read the page's `InteractionHandle` from context, so they must be
//! rendered below a page that called `use_interaction`.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use leptos::prelude::*;

use crate::state::interaction::InteractionHandle;
use crate::util::parallax_style::{card_delay_style, layer_style};

/// Background layer shifted against the pointer in proportion to `speed`.
#[component]
pub fn ParallaxLayer(speed: f64, #[prop(into)] class: String, children: Children) -> impl IntoView {
    let handle = expect_context::<InteractionHandle>();
    let style = move || layer_style(handle.selecting.get(), handle.offset(speed));

    view! {
        <div class=format!("parallax-layer {class}") style=style>
            {children()}
        </div>
    }
}

/// Content card that fades in once mounted, staggered by `delay` ms.
#[component]
pub fn FloatingCard(
    #[prop(into)] id: String,
    #[prop(optional)] delay: u32,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    view! {
        <div
            id=id
            class=format!("floating-card {class}")
            class:visible=move || mounted.get()
            style=card_delay_style(delay)
        >
            {children()}
        </div>
    }
}

/// Background element. `position` places the moving layer, `class` styles
/// what it carries; `content` is empty for blurred shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoration {
    pub speed: f64,
    pub position: &'static str,
    pub class: &'static str,
    pub content: &'static str,
}

pub const SHAPES: [Decoration; 4] = [
    Decoration { speed: 0.3, position: "backdrop__shape-1", class: "shape shape--emerald shape--round", content: "" },
    Decoration { speed: 0.5, position: "backdrop__shape-2", class: "shape shape--green shape--tilted", content: "" },
    Decoration { speed: 0.2, position: "backdrop__shape-3", class: "shape shape--teal shape--round", content: "" },
    Decoration { speed: 0.4, position: "backdrop__shape-4", class: "shape shape--yellow shape--diamond", content: "" },
];

pub const SYMBOLS: [Decoration; 10] = [
    Decoration { speed: 0.1, position: "backdrop__symbol-1", class: "symbol", content: "◊" },
    Decoration { speed: 0.15, position: "backdrop__symbol-2", class: "symbol", content: "⬟" },
    Decoration { speed: 0.08, position: "backdrop__symbol-3", class: "symbol", content: "⌘" },
    Decoration { speed: 0.12, position: "backdrop__symbol-4", class: "symbol", content: "◈" },
    Decoration { speed: 0.18, position: "backdrop__symbol-5", class: "symbol", content: "⬢" },
    Decoration { speed: 0.14, position: "backdrop__symbol-6", class: "symbol", content: "⬟" },
    Decoration { speed: 0.16, position: "backdrop__symbol-7", class: "symbol", content: "◊" },
    Decoration { speed: 0.20, position: "backdrop__symbol-8", class: "symbol", content: "◈" },
    Decoration { speed: 0.13, position: "backdrop__symbol-9", class: "symbol", content: "⬢" },
    Decoration { speed: 0.11, position: "backdrop__symbol-10", class: "symbol", content: "⌘" },
];

fn decoration_layers(decorations: &'static [Decoration]) -> impl IntoView {
    decorations
        .iter()
        .map(|d| {
            view! {
                <ParallaxLayer speed=d.speed class=d.position>
                    <div class=d.class>{d.content}</div>
                </ParallaxLayer>
            }
        })
        .collect_view()
}

/// Shared background of blurred shapes, drifting glyphs and clouds.
#[component]
pub fn ParallaxBackdrop() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__shapes">{decoration_layers(&SHAPES)}</div>
            <div class="backdrop__symbols">{decoration_layers(&SYMBOLS)}</div>
            <div class="backdrop__clouds">
                <div class="cloud cloud--slow"></div>
                <div class="cloud cloud--slower"></div>
            </div>
        </div>
    }
}
