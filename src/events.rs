//! DOM Event Wiring
//!
//! Explicit event subscriptions with a disposer, so listener lifecycle is a
//! value instead of a fire-and-forget closure.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// A registered DOM event listener. The closure stays alive as long as the
/// subscription value does; `detach` removes the listener again.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    /// Attach `handler` to `event` on `target`. Returns `None` when the
    /// browser rejects the registration.
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Remove the listener and drop the closure.
    pub fn detach(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Intercept clicks on same-page anchors and smooth-scroll to their targets.
///
/// Pure presentation; a missing target element means the click does nothing.
/// The returned subscriptions keep the handlers attached for as long as the
/// caller holds them.
pub fn intercept_anchor_clicks() -> Vec<EventSubscription> {
    let mut subscriptions = Vec::new();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return subscriptions;
    };
    let Ok(anchors) = document.query_selector_all("a[href^='#']") else {
        return subscriptions;
    };

    for i in 0..anchors.length() {
        let Some(node) = anchors.item(i) else { continue };
        let Ok(anchor) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };

        let document = document.clone();
        let handler = move |event: Event| {
            event.prevent_default();
            if let Ok(Some(target)) = document.query_selector(&href) {
                let mut options = web_sys::ScrollIntoViewOptions::new();
                options.behavior(web_sys::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        };

        if let Some(subscription) = EventSubscription::attach(anchor.as_ref(), "click", handler) {
            subscriptions.push(subscription);
        }
    }

    subscriptions
}
