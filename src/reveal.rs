//! Scroll-triggered reveal animation.
//!
//! An element starts transparent and shifted down, then fades into place
//! the first time at least 10% of it enters the viewport. On the server
//! nothing happens and the element renders fully visible.

use leptos::html::Div;
use leptos::prelude::*;

const THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOptions {
    /// Wait before revealing once visible
    pub delay_ms: u32,
    /// Initial downward shift
    pub offset_px: u32,
    pub duration_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            offset_px: 30,
            duration_ms: 700,
        }
    }
}

impl RevealOptions {
    #[must_use]
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    #[must_use]
    pub fn transition(&self) -> String {
        format!(
            "opacity {d}ms ease, transform {d}ms ease",
            d = self.duration_ms
        )
    }
}

/// Attaches the reveal animation to the element behind `node_ref`.
pub fn use_scroll_reveal(node_ref: NodeRef<Div>, options: RevealOptions) {
    #[cfg(feature = "hydrate")]
    browser::observe(node_ref, options);

    #[cfg(not(feature = "hydrate"))]
    let _ = (node_ref, options, THRESHOLD);
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::time::Duration;

    use leptos::html::Div;
    use leptos::prelude::*;
    use send_wrapper::SendWrapper;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    use super::{RevealOptions, THRESHOLD};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    pub(super) fn observe(node_ref: NodeRef<Div>, options: RevealOptions) {
        Effect::new(move |_| {
            let Some(el) = node_ref.get() else {
                return;
            };
            hide(&el, &options);

            let callback: Callback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        observer.unobserve(&target);
                        schedule_show(target, options.delay_ms);
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(THRESHOLD));
            let Ok(observer) =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            else {
                // No observer support: leave the element visible.
                show(&el);
                return;
            };
            observer.observe(&el);

            let guard = SendWrapper::new((observer, callback));
            on_cleanup(move || {
                let (observer, _callback) = guard.take();
                observer.disconnect();
            });
        });
    }

    fn hide(el: &HtmlElement, options: &RevealOptions) {
        let style = el.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", &options.hidden_transform());
        let _ = style.set_property("transition", &options.transition());
    }

    fn show(el: &HtmlElement) {
        let style = el.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "translateY(0)");
    }

    fn schedule_show(target: Element, delay_ms: u32) {
        let Ok(el) = target.dyn_into::<HtmlElement>() else {
            return;
        };
        if delay_ms == 0 {
            show(&el);
        } else {
            set_timeout(
                move || show(&el),
                Duration::from_millis(u64::from(delay_ms)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.hidden_transform(), "translateY(30px)");
        assert_eq!(options.transition(), "opacity 700ms ease, transform 700ms ease");
    }

    #[test]
    fn custom_options() {
        let options = RevealOptions {
            delay_ms: 100,
            offset_px: 20,
            duration_ms: 500,
        };
        assert_eq!(options.hidden_transform(), "translateY(20px)");
        assert_eq!(options.transition(), "opacity 500ms ease, transform 500ms ease");
    }
}
