//! About page: parallax backdrop with profile, skills and study cards.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use interaction::config::InteractionConfig;
use leptos::prelude::*;

use crate::components::parallax::{FloatingCard, ParallaxBackdrop};
use crate::state::interaction::use_interaction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
}

pub const SKILLS: [Skill; 4] = [
    Skill { name: "3D Modeling", description: "Creating digital worlds", tone: "emerald" },
    Skill { name: "3D Animation", description: "Bringing scenes to life", tone: "green" },
    Skill { name: "Cyber Security", description: "Academic focus area", tone: "slate" },
    Skill { name: "Web Development", description: "developing a website", tone: "teal" },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    use_interaction(InteractionConfig::about());

    view! {
        <div class="page about">
            <ParallaxBackdrop/>

            <header class="about__header">
                <FloatingCard id="card-header" class="about__intro">
                    <h1 class="selectable">"Hi, I'm " <span class="about__name">"Hardin"</span></h1>
                    <p class="selectable">"Cyber Security Student at President University"</p>
                </FloatingCard>
            </header>

            <div class="about__grid">
                <FloatingCard id="card-main" delay=200 class="about__card about__card--wide">
                    <h2 class="selectable">"Welcome to my 3D Portfolio!"</h2>
                    <p class="about__tagline selectable">"Student & 3D Design Enthusiast"</p>
                    <div class="about__body selectable">
                        <p>
                            "I am a student at President University majoring in Information Technology, I have an interest in 3D modeling design, animation, and game development. This portfolio showcases my journey into the exciting world of 3D design."
                        </p>
                        <p>
                            "The 3D Maya island scene you see on the homepage is actually the result of my final assignment for the 4th semester "
                            <span class="highlight">"3D Computer Graphics and Animation (CGA)"</span>
                            " course. It represents countless hours of learning, experimenting, and pushing the boundaries of what I could create."
                        </p>
                        <p>
                            "While I study " <span class="highlight">"cyber security"</span>
                            " academically, 3D design has become my creative outlet and hobby. I love the intersection between technical precision and artistic expression that 3D modeling offers."
                        </p>
                    </div>
                </FloatingCard>

                <FloatingCard id="card-skills" delay=400 class="about__card about__card--skills">
                    <h3 class="selectable">"What I do"</h3>
                    <ul class="about__skills">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <li class=format!("skill-item skill-item--{}", skill.tone)>
                                        <div class="skill-item__name">{skill.name}</div>
                                        <div class="skill-item__description">{skill.description}</div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </FloatingCard>

                <FloatingCard id="card-projects" delay=600 class="about__card about__card--wide">
                    <h3 class="selectable">"My Academic Journey"</h3>
                    <p class="selectable">
                        "Currently pursuing my degree at President University with a focus on Cyber Security. The 3D Maya civilization scene featured on this portfolio was created as my final project for the 3D CGA course in my 4th semester. This project allowed me to combine my interest in ancient civilizations with modern 3D technology, creating something both educational and visually stunning."
                    </p>
                </FloatingCard>

                <FloatingCard id="card-connect" delay=800 class="about__card about__card--connect">
                    <h4 class="selectable">"Let's create together!"</h4>
                    <p class="selectable">"Interested in 3D design or have a creative project in mind?"</p>
                </FloatingCard>
            </div>
        </div>
    }
}
