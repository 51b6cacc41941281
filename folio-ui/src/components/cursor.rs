//! Cursor Overlay
//!
//! Two rings following the pointer. Hover detection is delegated to one
//! over/out listener pair on the window.

use folio::cursor::is_interactive;
use folio::{CursorOverlay, CursorVariant};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::GlobalState;

/// Whether the event target or any ancestor is a link or button
fn in_capability_set(target: Option<web_sys::EventTarget>) -> bool {
    let mut element = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok());
    while let Some(el) = element {
        if is_interactive(&el.tag_name(), el.get_attribute("role").as_deref()) {
            return true;
        }
        element = el.parent_element();
    }
    false
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

#[component]
pub fn Cursor() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let overlay = create_rw_signal(CursorOverlay::new(
        viewport_width(),
        state.site.cursor_breakpoint_px,
    ));

    let handles = [
        window_event_listener(ev::mousemove, move |e| {
            overlay.update(|o| o.pointer_moved(e.client_x() as f64, e.client_y() as f64));
        }),
        window_event_listener(ev::mouseover, move |e| {
            let interactive = in_capability_set(e.target());
            if interactive {
                overlay.update(|o| o.pointer_over(true));
            }
        }),
        window_event_listener(ev::mouseout, move |e| {
            let entering = in_capability_set(e.related_target());
            if !entering {
                overlay.update(|o| o.pointer_out(false));
            }
        }),
        window_event_listener(ev::resize, move |_| {
            overlay.update(|o| o.set_viewport_width(viewport_width()));
        }),
    ];
    on_cleanup(move || {
        for handle in handles {
            handle.remove();
        }
    });

    let ring_class = move |base: &'static str| {
        if overlay.with(|o| o.variant()) == CursorVariant::Hover {
            format!("{} hover", base)
        } else {
            base.to_string()
        }
    };

    view! {
        <Show when=move || overlay.with(|o| o.is_enabled())>
            <div
                class=move || ring_class("cursor-ring")
                style=move || overlay.with(|o| o.outer().style())
            />
            <div
                class=move || ring_class("cursor-dot")
                style=move || overlay.with(|o| o.inner().style())
            />
        </Show>
    }
}
