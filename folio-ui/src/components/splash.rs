//! Splash Screen
//!
//! Shown by the loading gate until the shell mounts.

use folio::loader::{SPLASH_CAPTION, SPLASH_TITLE};
use folio::SplashAnimation;
use leptos::*;

use super::Reveal;

const PULSE_KEYFRAMES: &str = "folio-splash-pulse";

#[component]
pub fn Splash() -> impl IntoView {
    let animation = SplashAnimation::default();

    let letters = SPLASH_TITLE
        .chars()
        .zip(animation.letters.steps().to_vec())
        .map(|(letter, step)| {
            view! {
                <Reveal step=step class="splash-letter">
                    {letter.to_string()}
                </Reveal>
            }
        })
        .collect_view();

    let pulse_rule = animation.caption.keyframes(PULSE_KEYFRAMES);
    let pulse_style = animation.caption.animation(PULSE_KEYFRAMES);

    view! {
        <div class="splash">
            <style>{pulse_rule}</style>
            <h1 class="splash-title">{letters}</h1>
            <div class="splash-progress">
                <Reveal step=animation.progress class="splash-progress-bar" />
            </div>
            <p class="splash-caption" style=pulse_style>{SPLASH_CAPTION}</p>
        </div>
    }
}
