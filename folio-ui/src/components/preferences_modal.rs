//! Preferences Modal
//!
//! First-visit dialog asking the visitor's name, experience tier, mood and
//! whether to play music. Shown only while no name is stored.

use folio::timeline::presets;
use folio::{Experience, Mood, PreferenceDialog};
use leptos::*;

use super::Reveal;
use crate::state::GlobalState;

#[component]
pub fn PreferencesModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let preferences = state.preferences;
    let dialog = create_rw_signal(
        preferences.with_untracked(|p| PreferenceDialog::for_preferences(p.get())),
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut next = dialog.get_untracked();
        let mut submitted = None;
        preferences.update(|store| submitted = next.submit(store));
        if submitted.is_some() {
            dialog.set(next);
        }
    };

    view! {
        <Show when=move || dialog.with(|d| d.is_visible())>
            <div class="modal-backdrop" role="dialog" aria-modal="true">
                <Reveal step=presets::modal_enter() class="modal">
                    <button
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| dialog.update(|d| d.close())
                    >
                        "✕"
                    </button>

                    <h2>"Welcome!"</h2>
                    <p>"Tell me a little about yourself to personalize your visit."</p>

                    <form on:submit=on_submit>
                        <label for="pref-name">"Your name"</label>
                        <input
                            id="pref-name"
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || dialog.with(|d| d.draft().name.clone())
                            on:input=move |ev| dialog.update(|d| d.set_name(event_target_value(&ev)))
                        />

                        <fieldset class="choice-group">
                            <legend>"Experience"</legend>
                            {Experience::ALL
                                .into_iter()
                                .map(|experience| view! {
                                    <button
                                        type="button"
                                        class=move || choice_class(dialog.with(|d| d.draft().experience == experience))
                                        on:click=move |_| dialog.update(|d| d.choose_experience(experience))
                                    >
                                        {experience.label()}
                                    </button>
                                })
                                .collect_view()}
                        </fieldset>

                        <fieldset class="choice-group">
                            <legend>"Current mood"</legend>
                            {Mood::ALL
                                .into_iter()
                                .map(|mood| view! {
                                    <button
                                        type="button"
                                        class=move || choice_class(dialog.with(|d| d.draft().mood == mood))
                                        on:click=move |_| dialog.update(|d| d.choose_mood(mood))
                                    >
                                        {mood.label()}
                                    </button>
                                })
                                .collect_view()}
                        </fieldset>

                        <label class="music-toggle">
                            <input
                                type="checkbox"
                                prop:checked=move || dialog.with(|d| d.draft().play_music)
                                on:change=move |_| dialog.update(|d| d.toggle_music())
                            />
                            "Play background music"
                        </label>

                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || !dialog.with(|d| d.can_submit())
                        >
                            "Let's Go!"
                        </button>
                    </form>
                </Reveal>
            </div>
        </Show>
    }
}

fn choice_class(selected: bool) -> &'static str {
    if selected {
        "choice selected"
    } else {
        "choice"
    }
}
