//! Shared close-on-Escape / close-on-outside-click behavior for popups.

use crate::core::widgets::is_dismiss_key;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

/// While `open`, call `on_dismiss` on Escape and, when `container` is set,
/// on any click whose target lies outside it.
#[hook]
pub(crate) fn use_dismiss(open: bool, on_dismiss: Callback<()>, container: Option<NodeRef>) {
    use_effect_with_deps(
        move |open| {
            let listeners = open.then(|| {
                let keydown = EventListener::new(&document(), "keydown", {
                    let on_dismiss = on_dismiss.clone();
                    move |event| {
                        let key = event
                            .dyn_ref::<KeyboardEvent>()
                            .map(KeyboardEvent::key)
                            .unwrap_or_default();
                        if is_dismiss_key(&key) {
                            on_dismiss.emit(());
                        }
                    }
                });
                let click = container.map(|container| {
                    EventListener::new(&document(), "click", move |event| {
                        let Some(root) = container.cast::<Node>() else {
                            return;
                        };
                        let inside = event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok())
                            .is_some_and(|target| root.contains(Some(&target)));
                        if !inside {
                            on_dismiss.emit(());
                        }
                    })
                });
                (keydown, click)
            });
            move || drop(listeners)
        },
        open,
    );
}
