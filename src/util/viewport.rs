//! Scroll and intersection plumbing feeding the page controller.
//!
//! DESIGN
//! ======
//! Both watchers translate continuous browser signals into the controller's
//! discrete state transitions and are owned by the mounting view: dropping
//! the scroll watcher or disconnecting the observer detaches every callback,
//! so a torn-down view can no longer mutate state.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::state::controller::PageController;
use crate::state::reveal::Region;
use crate::util::events::EventListenerGuard;

/// Fraction of a marked element that must be visible to trigger its reveal.
const REVEAL_VISIBLE_FRACTION: f64 = 0.1;

/// Window scroll subscription.
///
/// Scroll events only schedule a sample; the actual offset read and flag
/// recompute run at most once per animation frame.
pub struct ScrollWatcher {
    window: web_sys::Window,
    pending_frame: Rc<Cell<Option<i32>>>,
    _scroll: EventListenerGuard,
    _frame: Rc<Closure<dyn FnMut(f64)>>,
}

impl ScrollWatcher {
    /// Attach to the window scroll stream. Returns `None` outside a browser.
    pub fn attach(controller: PageController) -> Option<Self> {
        let window = web_sys::window()?;
        let pending_frame = Rc::new(Cell::new(None::<i32>));

        let frame = {
            let window = window.clone();
            let pending_frame = Rc::clone(&pending_frame);
            Rc::new(Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                pending_frame.set(None);
                controller.on_scroll_offset(window.scroll_y().unwrap_or(0.0));
            }))
        };

        let scroll = {
            let window = window.clone();
            let pending_frame = Rc::clone(&pending_frame);
            let frame = Rc::clone(&frame);
            EventListenerGuard::listen(window.clone().into(), "scroll", move |_event| {
                if pending_frame.get().is_some() {
                    return;
                }
                match window.request_animation_frame((*frame).as_ref().unchecked_ref()) {
                    Ok(id) => pending_frame.set(Some(id)),
                    // No frame scheduling available: sample inline instead.
                    Err(_) => controller.on_scroll_offset(window.scroll_y().unwrap_or(0.0)),
                }
            })
        };

        Some(Self { window, pending_frame, _scroll: scroll, _frame: frame })
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Shared intersection watcher for reveal-on-scroll regions.
///
/// One `IntersectionObserver` serves every marked block; targets map back to
/// their [`Region`] through the `data-reveal` attribute. A revealed target is
/// unobserved immediately since reveal is permanent.
#[derive(Clone)]
pub struct RevealObserver {
    inner: Rc<ObserverInner>,
}

struct ObserverInner {
    observer: Option<web_sys::IntersectionObserver>,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl RevealObserver {
    /// Build the shared observer.
    ///
    /// An environment without the intersection API keeps the handle inert:
    /// regions simply stay in their default hidden state.
    pub fn new(controller: PageController) -> Self {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(region) = target
                        .get_attribute("data-reveal")
                        .as_deref()
                        .and_then(Region::from_attr)
                    {
                        controller.mark_revealed(region);
                    }
                    // Reveal is permanent; no need to keep watching.
                    observer.unobserve(&target);
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_VISIBLE_FRACTION));
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok();
        if observer.is_none() {
            leptos::logging::warn!("IntersectionObserver unavailable; reveal-on-scroll disabled");
        }

        Self { inner: Rc::new(ObserverInner { observer, _callback: callback }) }
    }

    pub fn observe(&self, element: &web_sys::Element) {
        if let Some(observer) = &self.inner.observer {
            observer.observe(element);
        }
    }

    pub fn unobserve(&self, element: &web_sys::Element) {
        if let Some(observer) = &self.inner.observer {
            observer.unobserve(element);
        }
    }

    /// Stop watching everything. Also runs when the last handle drops.
    pub fn disconnect(&self) {
        if let Some(observer) = &self.inner.observer {
            observer.disconnect();
        }
    }
}

impl Drop for ObserverInner {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Smooth-scroll the window back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
