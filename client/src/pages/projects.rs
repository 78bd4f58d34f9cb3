//! Projects page: filterable grid of portfolio work.
//!
//! `All` shows every project in a freshly shuffled order; a category filter
//! keeps declaration order. The first render always uses declaration order so
//! server and hydrated markup agree; the shuffle runs after hydration.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use interaction::config::InteractionConfig;
use leptos::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::components::parallax::{FloatingCard, ParallaxBackdrop};
use crate::state::interaction::use_interaction;
use crate::util::shuffle::page_rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Object3d,
    Animation,
    Cutscene,
    Game,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object3d => "3d-object",
            Self::Animation => "animation",
            Self::Cutscene => "cutscene",
            Self::Game => "game",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const BUTTONS: [Self; 5] = [
        Self::All,
        Self::Only(Category::Object3d),
        Self::Only(Category::Animation),
        Self::Only(Category::Cutscene),
        Self::Only(Category::Game),
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(Category::Object3d) => "3D Objects",
            Self::Only(Category::Animation) => "Animation",
            Self::Only(Category::Cutscene) => "Cutscenes",
            Self::Only(Category::Game) => "Games",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub featured: bool,
}

pub const PROJECTS: [Project; 8] = [
    Project {
        id: 1,
        title: "Maya Civilization Island",
        category: Category::Object3d,
        description: "A detailed 3D recreation of an ancient Maya civilization scene with temples, vegetation, and atmospheric lighting.",
        tech: &["Maya", "3D Modeling", "Texturing"],
        featured: true,
    },
    Project {
        id: 2,
        title: "Character Walk Cycle",
        category: Category::Animation,
        description: "Smooth character animation showcasing natural walking motion with proper weight distribution.",
        tech: &["Maya", "Animation", "Rigging"],
        featured: false,
    },
    Project {
        id: 3,
        title: "Temple Exploration",
        category: Category::Cutscene,
        description: "Cinematic cutscene showing exploration of ancient ruins with dynamic camera movements.",
        tech: &["Maya", "Cinematography", "Lighting"],
        featured: false,
    },
    Project {
        id: 4,
        title: "Puzzle Adventure Game",
        category: Category::Game,
        description: "Interactive 3D puzzle game with Maya-inspired themes and mechanics.",
        tech: &["Unity", "C#", "3D Design"],
        featured: false,
    },
    Project {
        id: 5,
        title: "Organic Tree Model",
        category: Category::Object3d,
        description: "Highly detailed organic tree model with realistic bark textures and foliage.",
        tech: &["Maya", "Substance Painter", "UV Mapping"],
        featured: false,
    },
    Project {
        id: 6,
        title: "Flying Through Clouds",
        category: Category::Animation,
        description: "Dynamic animation of flying through volumetric clouds with particle effects.",
        tech: &["Maya", "Particle Systems", "VFX"],
        featured: false,
    },
    Project {
        id: 7,
        title: "Sunset Ritual Scene",
        category: Category::Cutscene,
        description: "Atmospheric cutscene depicting an ancient ritual during golden hour.",
        tech: &["Maya", "Lighting", "Color Grading"],
        featured: true,
    },
    Project {
        id: 8,
        title: "Temple Runner",
        category: Category::Game,
        description: "Fast-paced endless runner game set in Maya temple environments.",
        tech: &["Unity", "Game Design", "Level Design"],
        featured: false,
    },
];

/// Projects matching `filter`, in declaration order.
pub fn filter_projects(filter: Filter) -> Vec<Project> {
    PROJECTS.iter().copied().filter(|project| filter.matches(project)).collect()
}

/// Projects to show for `filter`. `All` is reshuffled with `rng`.
pub fn visible_projects<R: Rng + ?Sized>(filter: Filter, rng: &mut R) -> Vec<Project> {
    let mut projects = filter_projects(filter);
    if filter == Filter::All {
        projects.shuffle(rng);
    }
    projects
}

/// Entrance delay for the card at `index` in the grid.
pub fn card_delay(index: usize) -> u32 {
    let step = u32::try_from(index).unwrap_or(u32::MAX / 100).saturating_mul(100);
    400_u32.saturating_add(step)
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <FloatingCard id=format!("project-{}", project.id) delay=card_delay(index) class="project-card">
            <div class=format!("project-card__preview project-card__preview--{}", project.category.as_str())>
                {project.featured.then(|| view! { <span class="project-card__featured">"Featured"</span> })}
            </div>
            <div class="project-card__body">
                <h3 class="selectable">{project.title}</h3>
                <p class="project-card__description selectable">{project.description}</p>
                <ul class="project-card__tech">
                    {project.tech.iter().map(|tech| view! { <li class="tag selectable">{*tech}</li> }).collect_view()}
                </ul>
            </div>
        </FloatingCard>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    use_interaction(InteractionConfig::projects());

    let filter = RwSignal::new(Filter::All);
    let projects = RwSignal::new(filter_projects(Filter::All));
    let rng = StoredValue::new(page_rng());

    let show = move |next: Filter| {
        if let Some(shown) = rng.try_update_value(|r| visible_projects(next, r)) {
            projects.set(shown);
        }
    };

    // Post-hydration reshuffle for the initial `All` view.
    Effect::new(move || show(Filter::All));

    let select = move |next: Filter| {
        filter.set(next);
        show(next);
    };

    view! {
        <div class="page projects">
            <ParallaxBackdrop/>

            <header class="projects__header">
                <FloatingCard id="card-header" class="projects__intro">
                    <h1 class="selectable">"My " <span class="projects__accent">"Projects"</span></h1>
                    <p class="selectable">"3D Creations & Digital Experiences"</p>
                </FloatingCard>
            </header>

            <FloatingCard id="filter-buttons" delay=200 class="projects__filters">
                {Filter::BUTTONS
                    .into_iter()
                    .map(|button| {
                        view! {
                            <button
                                class=format!("filter-button filter-button--{}", button.id())
                                class:filter-button--active=move || filter.get() == button
                                on:click=move |_| select(button)
                            >
                                {button.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </FloatingCard>

            <div class="projects__grid">
                {move || {
                    projects
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index/> })
                        .collect_view()
                }}
            </div>

            <Show when=move || projects.with(Vec::is_empty)>
                <FloatingCard id="empty-state" delay=600 class="projects__empty">
                    <h3 class="selectable">"No projects found"</h3>
                    <p class="selectable">"Try selecting a different category to see more projects."</p>
                </FloatingCard>
            </Show>
        </div>
    }
}
