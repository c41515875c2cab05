//! Wrapper for blocks that fade in on first viewport entry.

use leptos::prelude::*;

use crate::state::controller::PageController;
use crate::state::reveal::Region;

/// Renders its children in a block that starts hidden and fades in the first
/// time the intersection watcher sees it.
///
/// The wrapper registers its element with the shared [`RevealObserver`] once
/// it exists in the rendered tree and unobserves it on cleanup, so no
/// callback outlives the view.
///
/// [`RevealObserver`]: crate::util::viewport::RevealObserver
#[component]
pub fn Reveal(
    region: Region,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let controller = expect_context::<PageController>();
    let revealed = controller.revealed();
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "web")]
    {
        let reveals = expect_context::<crate::util::viewport::RevealObserver>();
        let on_mount = reveals.clone();
        Effect::new(move || {
            if let Some(el) = node.get() {
                on_mount.observe(&el);
            }
        });
        on_cleanup(move || {
            if let Some(el) = node.get_untracked() {
                reveals.unobserve(&el);
            }
        });
    }

    let class_list = move || {
        let mut classes = String::from("reveal");
        if revealed.get().contains(region) {
            classes.push_str(" reveal--visible");
        }
        if !class.is_empty() {
            classes.push(' ');
            classes.push_str(class);
        }
        classes
    };

    view! {
        <div node_ref=node class=class_list data-reveal=region.attr()>
            {children()}
        </div>
    }
}
