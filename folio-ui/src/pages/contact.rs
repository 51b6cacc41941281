//! Contact Page
//!
//! Contact form driving the core submission flow, plus static contact
//! details.

use folio::timeline::presets;
use folio::{ContactField, ContactFlow, PortfolioBackend, CONTACT_DETAILS};
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::{Reveal, SocialLinks, Staggered};
use crate::state::GlobalState;

#[component]
pub fn Contact() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let flow = create_rw_signal(ContactFlow::new(state.site.contact_reset()));
    let reset_timer = store_value(None::<Timeout>);
    on_cleanup(move || {
        let _ = reset_timer.try_update_value(|t| t.take());
    });

    let backend = state.backend.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut payload = None;
        flow.update(|f| payload = f.begin_submit());
        let Some(payload) = payload else {
            return;
        };

        let backend = backend.clone();
        spawn_local(async move {
            let outcome = backend.submit_contact(&payload).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Contact submission failed: {}", e).into());
            }

            let ticket = flow.try_update(|f| f.complete(outcome)).flatten();
            if let Some(ticket) = ticket {
                let handle = Timeout::new(ticket.after.as_millis() as u32, move || {
                    let _ = flow.try_update(|f| f.reset(ticket));
                });
                // Replacing an older handle drops and clears it
                let _ = reset_timer.try_update_value(|t| *t = Some(handle));
            }
        });
    };

    let details = CONTACT_DETAILS
        .iter()
        .map(|detail| {
            let body = match detail.href {
                Some(href) => view! { <a href=href>{detail.value}</a> }.into_view(),
                None => view! { <p>{detail.value}</p> }.into_view(),
            };
            view! {
                <div class="contact-card">
                    <h3>{detail.label}</h3>
                    {body}
                </div>
            }
            .into_view()
        })
        .chain(std::iter::once(
            view! {
                <div class="contact-social">
                    <h3>"Connect With Me"</h3>
                    <SocialLinks />
                </div>
            }
            .into_view(),
        ))
        .collect::<Vec<_>>();

    view! {
        <div class="page contact">
            <Reveal step=presets::drop_in() class="page-title">
                <h1>"Get In "<span class="accent">"Touch"</span></h1>
            </Reveal>

            <div class="contact-grid">
                <Reveal step=presets::rise_in() class="contact-form-wrapper">
                    <form class="contact-form" on:submit=on_submit>
                        {move || {
                            flow.with(|f| {
                                let status = f.status();
                                status.submitted.then(|| {
                                    let class = if status.success {
                                        "form-status success"
                                    } else {
                                        "form-status error"
                                    };
                                    view! { <div class=class>{status.message.clone()}</div> }
                                })
                            })
                        }}

                        <FormField flow=flow field=ContactField::Name label="Your Name" />
                        <FormField flow=flow field=ContactField::Email label="Your Email" input_type="email" />
                        <FormField flow=flow field=ContactField::Subject label="Subject" />

                        <div class="form-group">
                            <label for="message">"Your Message"</label>
                            <textarea
                                id="message"
                                name="message"
                                required
                                prop:value=move || flow.with(|f| f.fields().message.clone())
                                on:input=move |ev| {
                                    flow.update(|f| f.set_field(ContactField::Message, event_target_value(&ev)))
                                }
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || flow.with(|f| f.is_in_flight())
                        >
                            {move || if flow.with(|f| f.is_in_flight()) { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </Reveal>

                <div class="contact-info">
                    <Staggered items=details />
                </div>
            </div>
        </div>
    }
}

/// Single-line input bound to one contact field
#[component]
fn FormField(
    flow: RwSignal<ContactFlow>,
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    let id = format!("{:?}", field).to_lowercase();

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                id=id.clone()
                name=id
                type=input_type
                required
                prop:value=move || flow.with(|f| f.fields().get(field).to_string())
                on:input=move |ev| flow.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}
