//! Footer Component

use chrono::Datelike;
use folio::profile::reachable_details;
use folio::NAV_LINKS;
use leptos::*;
use leptos_router::*;

use super::SocialLinks;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>"Portfolio"</h3>
                    <p>"Building thoughtful digital experiences."</p>
                    <SocialLinks />
                </div>

                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <li><A href=link.href()>{link.label}</A></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-links">
                    <h4>"Contact"</h4>
                    <ul>
                        {reachable_details()
                            .map(|detail| view! {
                                <li><a href=detail.href>{detail.value}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <p class="footer-copyright">
                {format!("© {} Portfolio. All rights reserved.", year)}
            </p>
        </footer>
    }
}
