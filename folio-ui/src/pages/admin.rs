//! Admin Page
//!
//! Read-only inbox of contact messages; fetched once on mount.

use folio::admin::EMPTY_INBOX_MESSAGE;
use folio::timeline::presets;
use folio::{AdminView, ContactMessage};
use leptos::*;

use crate::components::{Loading, Reveal, Staggered};
use crate::state::GlobalState;

#[component]
pub fn Admin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let inbox = create_rw_signal(AdminView::Loading);

    let backend = state.backend.clone();
    spawn_local(async move {
        let loaded = AdminView::load(&backend).await;
        if let AdminView::Error(_) = &loaded {
            web_sys::console::error_1(&"Failed to fetch messages".into());
        }
        let _ = inbox.try_set(loaded);
    });

    view! {
        <div class="page admin">
            <Reveal step=presets::drop_in() class="page-title">
                <h1>"Message "<span class="accent">"Dashboard"</span></h1>
            </Reveal>

            {move || {
                let current = inbox.get();
                let unread = current.unread_count();
                match current {
                    AdminView::Loading => view! { <Loading label="Loading messages..." /> }.into_view(),
                    AdminView::Error(message) => view! {
                        <div class="error-state">{message}</div>
                    }
                    .into_view(),
                    AdminView::Empty => view! {
                        <div class="empty-state">
                            <h3>"No Messages"</h3>
                            <p>{EMPTY_INBOX_MESSAGE}</p>
                        </div>
                    }
                    .into_view(),
                    AdminView::Messages(messages) => {
                        let cards = messages
                            .into_iter()
                            .map(|message| view! { <MessageCard message=message /> }.into_view())
                            .collect::<Vec<_>>();
                        view! {
                            <p class="inbox-summary">{format!("{} unread", unread)}</p>
                            <div class="messages">
                                <Staggered items=cards />
                            </div>
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn MessageCard(message: ContactMessage) -> impl IntoView {
    let accent = message.accent();

    view! {
        <article class=format!("message-card {}", accent.css_class())>
            <header class="message-header">
                <div>
                    <h3>{message.name.clone()}</h3>
                    <a href=message.mailto()>{message.email.clone()}</a>
                </div>
                <div class="message-meta">
                    <time>{message.timestamp.format_local()}</time>
                    <span class="message-status">{accent.label()}</span>
                </div>
            </header>
            <h4 class="message-subject">{message.subject_line().to_string()}</h4>
            <p class="message-body">{message.message.clone()}</p>
        </article>
    }
}
