//! Reusable overlay dialog.
//!
//! The dialog does not own which document is active: the caller decides when
//! it exists (presence in the tree, not hidden visibility) and supplies the
//! close callback. While mounted it listens for Escape on the window and
//! detaches that listener on unmount.

use leptos::prelude::*;

/// Overlay dialog shell. Backdrop click, the close control, and Escape all
/// run `on_close`; dismissal itself belongs to the caller.
#[component]
pub fn Modal(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    #[cfg(feature = "web")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::events::EventListenerGuard;

        let escape = web_sys::window().map(|window| {
            EventListenerGuard::listen(window.into(), "keydown", move |event| {
                if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                    if key_event.key() == "Escape" {
                        on_close.run(());
                    }
                }
            })
        });
        on_cleanup(move || drop(escape));
    }

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3 class="modal__title">{title}</h3>
                    <button class="modal__close" on:click=move |_| on_close.run(()) title="Close">
                        "\u{2715}"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
