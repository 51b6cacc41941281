//! Reveal Component
//!
//! Plays a timeline step as a CSS transition: the element mounts with the
//! step's start style and flips to its end style on the next frames.

use folio::timeline::presets;
use folio::Step;
use leptos::*;
use std::time::Duration;

#[component]
pub fn Reveal(
    step: Step,
    #[prop(optional, into)]
    class: String,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let (shown, set_shown) = create_signal(false);

    // Two frames so the start style is painted before the transition begins
    request_animation_frame(move || {
        request_animation_frame(move || {
            let _ = set_shown.try_set(true);
        })
    });

    let start = step.start_style();
    let end = step.end_style();
    let transition = step.transition();

    view! {
        <div
            class=class
            style=move || {
                let target = if shown.get() { &end } else { &start };
                format!("{} {}", target, transition)
            }
        >
            {children.map(|c| c())}
        </div>
    }
}

/// Rises children into place one after another
#[component]
pub fn Staggered(
    items: Vec<View>,
    #[prop(default = Duration::from_millis(300))]
    delay_children: Duration,
    #[prop(default = Duration::from_millis(200))]
    interval: Duration,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let timeline = presets::stagger_children(items.len(), delay_children, interval);

    items
        .into_iter()
        .zip(timeline.steps().to_vec())
        .map(|(item, step)| {
            view! {
                <Reveal step=step class=class.clone()>
                    {item}
                </Reveal>
            }
        })
        .collect_view()
}
