//! Per-page interaction signals and the session that drives them.
//!
//! Each parallax page calls [`use_interaction`] once with its
//! [`InteractionConfig`]. Rendering reads the signals; in the browser a scoped
//! `InteractionSession` writes them, and is released when the page's reactive
//! owner is cleaned up (route change or unmount).

use interaction::config::InteractionConfig;
use interaction::parallax::{Translation2D, render_offset};
use interaction::pointer::PointerPosition;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::interaction_session::InteractionSession;

/// Handle shared through context with the page's parallax layers and forms.
#[derive(Clone, Copy)]
pub struct InteractionHandle {
    pub selecting: RwSignal<bool>,
    pub pointer: RwSignal<PointerPosition>,
    #[cfg(feature = "hydrate")]
    session: StoredValue<Option<InteractionSession>, LocalStorage>,
}

impl InteractionHandle {
    /// Translation for a layer at `speed`; tracks both signals.
    pub fn offset(&self, speed: f64) -> Translation2D {
        render_offset(self.selecting.get(), self.pointer.get(), speed)
    }

    /// Engage or release the hard freeze. No-op during SSR or on pages whose
    /// config does not opt in.
    pub fn set_frozen(&self, frozen: bool) {
        #[cfg(feature = "hydrate")]
        self.session.with_value(|session| {
            if let Some(session) = session {
                session.set_frozen(frozen);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        log::trace!("freeze {frozen} ignored outside the browser");
    }
}

/// Create the page's interaction signals, start the browser session after
/// hydration, and provide the handle through context.
pub fn use_interaction(config: InteractionConfig) -> InteractionHandle {
    let selecting = RwSignal::new(false);
    let pointer = RwSignal::new(PointerPosition::default());

    #[cfg(feature = "hydrate")]
    let handle = {
        let session: StoredValue<Option<InteractionSession>, LocalStorage> = StoredValue::new_local(None);
        Effect::new(move || {
            if session.with_value(Option::is_some) {
                return;
            }
            let started = InteractionSession::start(config.clone(), selecting, pointer);
            session.set_value(started);
        });
        on_cleanup(move || {
            if session.try_update_value(Option::take).is_none() {
                log::debug!("interaction session already disposed");
            }
        });
        InteractionHandle { selecting, pointer, session }
    };

    #[cfg(not(feature = "hydrate"))]
    let handle = {
        log::trace!("interaction session deferred to hydration ({} extra selectors)", config.extra_interactive.len());
        InteractionHandle { selecting, pointer }
    };

    provide_context(handle);
    handle
}
