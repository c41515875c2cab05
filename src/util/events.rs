//! RAII wrapper around DOM event listener registration.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Listener registration that detaches itself exactly once on drop.
///
/// Keeps the backing closure alive for as long as the listener is attached;
/// dropping the guard removes the listener before releasing the closure, so
/// the browser never holds a callback into freed WASM state.
pub struct EventListenerGuard {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListenerGuard {
    pub fn listen(
        target: web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self { target, event, callback }
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
