//! Contact page: contact methods, socials and the message form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use interaction::config::InteractionConfig;
use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::parallax::{FloatingCard, ParallaxBackdrop};
use crate::state::interaction::use_interaction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: &'static str,
}

pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod { label: "Email", value: "hardin@example.com", tone: "blue" },
    ContactMethod { label: "Phone", value: "+62 123 456 7890", tone: "green" },
    ContactMethod { label: "Location", value: "Bekasi, West Java, Indonesia", tone: "red" },
];

pub const SOCIALS: [&str; 3] = ["LinkedIn", "Instagram", "GitHub"];

#[component]
pub fn ContactPage() -> impl IntoView {
    // The form's focus handlers toggle the freeze through this handle.
    use_interaction(InteractionConfig::contact());

    view! {
        <div class="page contact">
            <ParallaxBackdrop/>

            <header class="contact__header">
                <FloatingCard id="card-header" class="contact__intro">
                    <h1 class="selectable">"Get in " <span class="contact__accent">"Touch"</span></h1>
                    <p class="selectable">"Let's create something amazing together"</p>
                </FloatingCard>
            </header>

            <div class="contact__grid">
                <FloatingCard id="card-info" delay=200 class="contact__info">
                    <section class="contact__card">
                        <h2 class="selectable">"Let's Connect!"</h2>
                        <p class="selectable">
                            "I'm always excited to collaborate on creative projects, discuss 3D design ideas, or chat about technology and cyber security. Whether you have a project in mind or just want to say hello, I'd love to hear from you!"
                        </p>
                        <ul class="contact__methods">
                            {CONTACT_METHODS
                                .iter()
                                .map(|method| {
                                    view! {
                                        <li class=format!("contact-item contact-item--{}", method.tone)>
                                            <div class="contact-item__label">{method.label}</div>
                                            <div class="contact-item__value selectable">{method.value}</div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </section>

                    <section class="contact__socials">
                        <h3 class="selectable">"Follow My Journey"</h3>
                        <p class="selectable">"Stay updated with my latest 3D projects and creative adventures"</p>
                        <div class="contact__social-buttons">
                            {SOCIALS
                                .iter()
                                .map(|name| {
                                    view! {
                                        <button
                                            type="button"
                                            class=format!("social-button social-button--{}", name.to_lowercase())
                                            title=*name
                                        >
                                            {*name}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                </FloatingCard>

                <FloatingCard id="card-form" delay=400 class="contact__form">
                    <ContactForm/>
                </FloatingCard>
            </div>
        </div>
    }
}
