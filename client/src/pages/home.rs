//! Landing page: the floating island scene.

use interaction::scene::loading_complete;
use leptos::prelude::*;

use crate::components::home_info::HomeInfo;
use crate::components::loader::Loader;
use crate::components::scene_host::{SceneHost, SceneSignals};

#[component]
pub fn HomePage() -> impl IntoView {
    let signals = SceneSignals::new();
    let progress = signals.progress;
    let stage = signals.stage;

    view! {
        <section class="home">
            <div class="home__info">
                <HomeInfo stage=stage/>
            </div>
            <Show when=move || !loading_complete(progress.get())>
                <Loader progress=progress/>
            </Show>
            <SceneHost signals=signals/>
        </section>
    }
}
