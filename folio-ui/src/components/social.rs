//! Social Links Row

use folio::SOCIAL_LINKS;
use leptos::*;

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="social-links">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    let external = link.is_external();
                    view! {
                        <a
                            class="social-link"
                            href=link.href
                            target=external.then_some("_blank")
                            rel=external.then_some("noopener noreferrer")
                            aria-label=link.label
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
