//! Contact form bound to the persisted draft and the submission machine.
//!
//! ARCHITECTURE
//! ============
//! `ContactFormModel` owns the draft and status; this component mirrors them
//! into signals for rendering and runs the model's timers with gloo
//! `Timeout`s. Focus inside the form engages the page's hard freeze.

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
use interaction::draft::{ContactDraft, DraftField, DraftStore};
use interaction::submission::{ContactFormModel, FormStatus, SubmissionCommand};
use interaction::timer::TimerToken;
use leptos::prelude::*;

use crate::state::interaction::InteractionHandle;
use crate::util::local_storage::BrowserStorage;

type Model = ContactFormModel<BrowserStorage>;

/// Reactive handles for one mounted form. `Copy` so event handlers and timer
/// callbacks can share it.
#[derive(Clone, Copy)]
struct FormRuntime {
    model: StoredValue<Model, LocalStorage>,
    draft: RwSignal<ContactDraft>,
    status: RwSignal<FormStatus>,
    #[cfg(feature = "hydrate")]
    timer: StoredValue<Option<(TimerToken, Timeout)>, LocalStorage>,
}

impl FormRuntime {
    fn mount() -> Self {
        let model = ContactFormModel::mount(DraftStore::new(BrowserStorage));
        let draft = RwSignal::new(model.draft().clone());
        let status = RwSignal::new(model.status());
        Self {
            model: StoredValue::new_local(model),
            draft,
            status,
            #[cfg(feature = "hydrate")]
            timer: StoredValue::new_local(None),
        }
    }

    fn edit(self, field: DraftField, value: String) {
        let Some(draft) = self.model.try_update_value(|model| {
            model.edit(field, value);
            model.draft().clone()
        }) else {
            return;
        };
        self.draft.set(draft);
    }

    fn submit(self) {
        if let Some(out) = self.model.try_update_value(Model::submit) {
            if out.is_empty() {
                log::debug!("submit ignored in status {:?}", self.status.get_untracked());
            }
            self.apply(out);
        }
    }

    fn teardown(self) {
        if let Some(out) = self.model.try_update_value(Model::teardown) {
            self.apply(out);
        }
    }

    fn apply(self, commands: Vec<SubmissionCommand>) {
        for command in commands {
            match command {
                SubmissionCommand::ScheduleTimer { token, delay_ms } => self.schedule(token, delay_ms),
                SubmissionCommand::CancelTimer(token) => self.cancel(token),
                SubmissionCommand::StatusChanged(status) => {
                    log::debug!("contact form status: {status:?}");
                    self.status.try_set(status);
                }
                SubmissionCommand::DraftReset => {
                    if let Some(draft) = self.model.try_with_value(|model| model.draft().clone()) {
                        self.draft.try_set(draft);
                    }
                }
            }
        }
    }

    #[cfg(feature = "hydrate")]
    fn schedule(self, token: TimerToken, delay_ms: u32) {
        let timeout = Timeout::new(delay_ms, move || {
            self.timer.try_update_value(Option::take);
            if let Some(out) = self.model.try_update_value(|model| model.timer_elapsed(token)) {
                self.apply(out);
            }
        });
        self.timer.try_set_value(Some((token, timeout)));
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule(self, token: TimerToken, delay_ms: u32) {
        log::trace!("timer {} ({delay_ms} ms) not scheduled outside the browser", token.get());
    }

    #[cfg(feature = "hydrate")]
    fn cancel(self, token: TimerToken) {
        self.timer.try_update_value(|slot| {
            if slot.as_ref().is_some_and(|(live, _)| *live == token) {
                slot.take();
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn cancel(self, token: TimerToken) {
        log::trace!("timer {} has nothing to cancel", token.get());
    }
}

#[component]
fn DraftInput(
    runtime: FormRuntime,
    field: DraftField,
    #[prop(into)] label: String,
    #[prop(into)] kind: String,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let name = field.as_str();
    view! {
        <label class="contact-form__field" for=name>
            <span class="contact-form__label">{label}</span>
            <input
                id=name
                name=name
                type=kind
                required=true
                placeholder=placeholder
                prop:value=move || runtime.draft.with(|draft| draft.get(field).to_owned())
                on:input=move |ev| runtime.edit(field, event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let handle = expect_context::<InteractionHandle>();
    let runtime = FormRuntime::mount();
    on_cleanup(move || runtime.teardown());

    let status = runtime.status;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        runtime.submit();
    };

    view! {
        <form
            class="contact-form"
            on:submit=on_submit
            on:focusin=move |_| handle.set_frozen(true)
            on:focusout=move |_| handle.set_frozen(false)
        >
            <h2 class="contact-form__title">"Send a Message"</h2>
            <DraftInput runtime field=DraftField::Name label="Your Name" kind="text" placeholder="John Doe"/>
            <DraftInput runtime field=DraftField::Email label="Email Address" kind="email" placeholder="john@example.com"/>
            <DraftInput runtime field=DraftField::Subject label="Subject" kind="text" placeholder="Project Collaboration"/>
            <label class="contact-form__field" for="message">
                <span class="contact-form__label">"Message"</span>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    required=true
                    placeholder="Tell me about your project or just say hello..."
                    prop:value=move || runtime.draft.with(|draft| draft.get(DraftField::Message).to_owned())
                    on:input=move |ev| runtime.edit(DraftField::Message, event_target_value(&ev))
                ></textarea>
            </label>
            <button
                type="submit"
                class="contact-form__submit"
                class:contact-form__submit--sending=move || status.get() == FormStatus::Sending
                class:contact-form__submit--success=move || status.get() == FormStatus::Success
                disabled=move || status.get() == FormStatus::Sending
            >
                {move || status.get().button_label()}
            </button>
            <Show when=move || status.get() == FormStatus::Success>
                <p class="contact-form__note">"Thanks for reaching out! I'll get back to you soon."</p>
            </Show>
        </form>
    }
}
