//! Scroll-triggered entrance animations.
//!
//! An element starts hidden and gets its entrance class the first time it
//! intersects the viewport. Once visible it stays visible. Native renderers
//! have no viewport to watch, so there everything starts visible.

use dioxus::prelude::*;

/// Holds elements back until they are revealed.
pub const PENDING_CLASS: &str = "reveal-pending";

/// Visibility latch for one element. Wire the element's `onmounted` to
/// [`watch_visibility`].
pub fn use_in_view() -> Signal<bool> {
    use_signal(|| !cfg!(target_arch = "wasm32"))
}

/// `base` plus either the entrance class or the pending class.
pub fn reveal_class(visible: bool, base: &str, reveal: &str) -> String {
    let state = if visible { reveal } else { PENDING_CLASS };
    if base.is_empty() {
        state.to_string()
    } else {
        format!("{} {}", base, state)
    }
}

pub fn watch_visibility(event: MountedEvent, visible: Signal<bool>) {
    #[cfg(target_arch = "wasm32")]
    {
        if *visible.peek() {
            return;
        }
        let data = event.data();
        match data.downcast::<web_sys::Element>() {
            Some(element) => observe(element, visible),
            None => {
                let mut visible = visible;
                visible.set(true);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event, visible);
    }
}

#[cfg(target_arch = "wasm32")]
fn observe(element: &web_sys::Element, mut visible: Signal<bool>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{ IntersectionObserver, IntersectionObserverEntry };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if intersecting {
                visible.set(true);
                observer.disconnect();
            }
        }
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(element);
            // Lives as long as the observer; it disconnects itself on reveal.
            callback.forget();
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
            visible.set(true);
        }
    }
}

/// A `div` that plays `reveal` the first time it scrolls into view.
#[component]
pub fn InView(
    #[props(default)] class: String,
    #[props(default = "fade-up".to_string())] reveal: String,
    #[props(default)] style: String,
    children: Element
) -> Element {
    let visible = use_in_view();

    rsx! {
        div {
            class: reveal_class(visible(), &class, &reveal),
            style,
            onmounted: move |event| watch_visibility(event, visible),
            {children}
        }
    }
}
