//! Application root: context wiring, observers, and the mount entry point.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::controller::PageController;
use crate::util::dark_mode;
use crate::util::storage::{BrowserStore, PreferenceStore};

/// Root component.
///
/// Startup order matters: the controller seeds theme (applying the document
/// class immediately) and consent state from the store first, then the
/// scroll and intersection watchers attach. Both are torn down with this
/// component, after which ambient signals can no longer mutate state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: Rc<dyn PreferenceStore> = Rc::new(BrowserStore);
    let controller = PageController::new(store, dark_mode::system_prefers_dark());
    provide_context(controller);

    #[cfg(feature = "web")]
    {
        use crate::util::viewport::{RevealObserver, ScrollWatcher};

        let reveals = RevealObserver::new(controller);
        provide_context(reveals.clone());
        let scroll = ScrollWatcher::attach(controller);

        on_cleanup(move || {
            drop(scroll);
            reveals.disconnect();
        });
    }

    view! {
        <Title text="Orkhan Valiyev, Advocate in Baku"/>
        <HomePage/>
    }
}

/// Find the `#root` element and mount the application into it.
///
/// A missing mount target is the one fatal startup condition: it is logged
/// and the application does not start.
#[cfg(feature = "web")]
pub fn mount() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("root"))
    else {
        log::error!("critical: #root element not found in the document; not mounting");
        return;
    };

    leptos::mount::mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
