//! About Page
//!
//! Bio and skills overview.

use folio::timeline::presets;
use leptos::*;

use crate::components::{Reveal, Staggered};

const SKILLS: [(&str, &[&str]); 4] = [
    (
        "Frontend",
        &[
            "Rust + WebAssembly",
            "JavaScript (ES6+)",
            "HTML5 & CSS3",
            "Leptos",
            "Responsive Design",
        ],
    ),
    (
        "Backend",
        &["Axum", "Node.js", "RESTful APIs", "Authentication & Authorization"],
    ),
    ("Database", &["PostgreSQL", "MongoDB", "SQLite"]),
    ("Tools & Others", &["Git & GitHub", "Docker", "CI/CD", "Cloud Deployment"]),
];

#[component]
pub fn About() -> impl IntoView {
    let cards = SKILLS
        .iter()
        .map(|(title, skills)| {
            view! {
                <div class="skill-card">
                    <h3>{*title}</h3>
                    <ul>
                        {skills.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                    </ul>
                </div>
            }
            .into_view()
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page about">
            <Reveal step=presets::drop_in() class="page-title">
                <h1>"About "<span class="accent">"Me"</span></h1>
            </Reveal>

            <Reveal step=presets::rise_in() class="about-content">
                <p>
                    "Hello! I'm a full stack developer who loves building fast, accessible and \
                     good-looking web applications."
                </p>
                <p>
                    "I care about clean, maintainable code and about the details that make an \
                     interface feel right."
                </p>
                <p>
                    "When I'm not coding you'll find me exploring new technologies, contributing \
                     to open source, or outdoors with a camera."
                </p>
            </Reveal>

            <h2 class="section-title">"My Skills"</h2>
            <div class="skills-grid">
                <Staggered items=cards />
            </div>
        </div>
    }
}
