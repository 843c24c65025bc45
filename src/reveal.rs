//! One-shot "fade in when scrolled into view" support shared by every section.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Latches to true the first time its region is seen intersecting and never reverts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feeds one intersection report. Returns true only on the false -> true transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// CSS classes driving the opacity transition.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal reveal--visible"
    } else {
        "reveal"
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn attach(node: &NodeRef, visible: UseStateSetter<bool>) -> Option<Self> {
        let Some(element) = node.cast::<Element>() else {
            warn!("Reveal target was never mounted, showing it immediately");
            visible.set(true);
            return None;
        };

        let setter = visible.clone();
        let mut latch = RevealLatch::default();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if latch.observe(intersecting) {
                    debug!("Section entered the viewport");
                    setter.set(true);
                    observer.disconnect();
                }
            },
        );

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(e) => {
                warn!("IntersectionObserver unavailable ({:?}), showing section", e);
                visible.set(true);
                None
            }
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns a ref to attach to the section and whether it has been revealed.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let setter = visible.setter();
        use_effect_with_deps(
            move |_| {
                let observer = RevealObserver::attach(&node, setter);
                move || drop(observer)
            },
            (),
        );
    }

    (node, *visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_first_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert_eq!(latch, RevealLatch::default());

        assert!(latch.observe(true));
        assert_ne!(latch, RevealLatch::default());
    }

    #[test]
    fn stays_revealed_after_leaving_viewport() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        let revealed = latch;

        assert!(!latch.observe(false));
        assert_eq!(latch, revealed);
        assert!(!latch.observe(true));
    }

    #[test]
    fn classes_follow_visibility() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal reveal--visible");
    }
}
