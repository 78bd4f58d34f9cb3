//! Stage panel shown over the island once a stage is reached.

#[cfg(test)]
#[path = "home_info_test.rs"]
mod home_info_test;

use interaction::scene::Stage;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// A run of stage copy, optionally emphasized with a modifier class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopySpan {
    pub text: &'static str,
    pub emphasis: Option<&'static str>,
}

const fn plain(text: &'static str) -> CopySpan {
    CopySpan { text, emphasis: None }
}

const fn strong(text: &'static str, tone: &'static str) -> CopySpan {
    CopySpan { text, emphasis: Some(tone) }
}

const GREETING: &[CopySpan] = &[
    plain("Hi 👋, my name is "),
    strong("Hardin", "amber"),
    plain(", welcome to my first 3D web."),
];

const INTERESTS: &[CopySpan] = &[
    plain("I'm interested in "),
    strong("Cyber Security", "emerald"),
    plain(", and I have a hobby to create Web, Application, and 3D design."),
];

const CRAFT: &[CopySpan] = &[
    plain("I created this floating island using "),
    strong("low-poly 3D assets", "emerald"),
    plain(" that I had previously made for the final project in my 3D Computer Graphics and Animation course during the "),
    strong("4th semester", "orange"),
    plain("."),
];

const FAREWELL: &[CopySpan] = &[plain("Thanks for visiting my 3D world! 🌴✈️")];

pub fn stage_copy(stage: Stage) -> &'static [CopySpan] {
    match stage {
        Stage::Greeting => GREETING,
        Stage::Interests => INTERESTS,
        Stage::Craft => CRAFT,
        Stage::Farewell => FAREWELL,
    }
}

/// Plain text of a stage's copy, used for the panel's `aria-label`.
pub fn stage_text(stage: Stage) -> String {
    stage_copy(stage).iter().map(|span| span.text).collect()
}

#[component]
pub fn HomeInfo(#[prop(into)] stage: Signal<Option<Stage>>) -> impl IntoView {
    let navigate = use_navigate();
    move || {
        let navigate = navigate.clone();
        stage.get().map(|stage| {
            let spans = stage_copy(stage)
                .iter()
                .map(|span| match span.emphasis {
                    Some(tone) => view! { <strong class=format!("home-info__emphasis home-info__emphasis--{tone}")>{span.text}</strong> }.into_any(),
                    None => span.text.into_any(),
                })
                .collect_view();
            let link = stage.link().map(|link| {
                view! {
                    <button
                        class=format!("home-info__cta home-info__cta--{}", stage.index())
                        on:click=move |_| navigate(link.href, NavigateOptions::default())
                    >
                        {link.label}
                    </button>
                }
            });
            view! {
                <div class="home-info" aria-label=stage_text(stage)>
                    <p class="home-info__copy">{spans}</p>
                    {link}
                </div>
            }
        })
    }
}
