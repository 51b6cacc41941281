//! Projects Page
//!
//! Category-filtered gallery. The catalog arrives after a short simulated
//! fetch delay.

use folio::timeline::presets;
use folio::{default_catalog, CategoryFilter, ProjectGallery, ProjectListing};
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::{Loading, Reveal};
use crate::state::GlobalState;

#[component]
pub fn Projects() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let gallery = create_rw_signal(ProjectGallery::new());

    let timer = store_value(Some(Timeout::new(
        state.site.project_load_delay_ms as u32,
        move || {
            let _ = gallery.try_update(|g| g.load(default_catalog()));
        },
    )));
    on_cleanup(move || {
        let _ = timer.try_update_value(|t| t.take());
    });

    view! {
        <div class="page projects">
            <Reveal step=presets::drop_in() class="page-title">
                <h1>"My "<span class="accent">"Projects"</span></h1>
            </Reveal>

            <div class="filter-buttons">
                {CategoryFilter::CHOICES
                    .into_iter()
                    .map(|choice| view! {
                        <button
                            class=move || {
                                if gallery.with(|g| g.active_filter()) == choice {
                                    "filter-button active"
                                } else {
                                    "filter-button"
                                }
                            }
                            on:click=move |_| gallery.update(|g| {
                                g.set_filter(choice);
                            })
                        >
                            {choice.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || {
                if gallery.with(|g| g.is_loading()) {
                    view! { <Loading label="Loading projects..." /> }.into_view()
                } else if gallery.with(|g| g.is_empty_view()) {
                    view! {
                        <div class="empty-state">
                            <h3>"No projects found"</h3>
                            <p>"No projects match this category yet."</p>
                        </div>
                    }
                    .into_view()
                } else {
                    let projects: Vec<ProjectListing> =
                        gallery.with(|g| g.visible().into_iter().cloned().collect());
                    view! {
                        <div class="projects-grid">
                            {projects
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ProjectCard(project: ProjectListing) -> impl IntoView {
    view! {
        <Reveal step=presets::rise_in() class="project-card">
            <img src=project.image_ref.clone() alt=project.title.clone() />
            <div class="project-body">
                <span class="project-category">{project.category.label()}</span>
                <h3>{project.title.clone()}</h3>
                <p>{project.description.clone()}</p>
                <div class="project-tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                </div>
                <div class="project-links">
                    <a href=project.live_link.clone() target="_blank" rel="noopener noreferrer">"Live Demo"</a>
                    <a href=project.github_link.clone() target="_blank" rel="noopener noreferrer">"Code"</a>
                </div>
            </div>
        </Reveal>
    }
}
