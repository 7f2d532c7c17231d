use crate::services::scroll::page_offset;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Report the page's vertical offset on mount and on every window scroll.
///
/// The listener is removed when the calling component unmounts.
#[hook]
pub fn use_scroll_tracker(on_scroll: Callback<f64>) {
    use_effect_with((), move |_| {
        on_scroll.emit(page_offset());

        let registration = web_sys::window().map(|window| {
            let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
                on_scroll.emit(page_offset());
            }) as Box<dyn FnMut(_)>);
            let _ = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            (window, listener)
        });

        move || {
            if let Some((window, listener)) = registration {
                let _ = window
                    .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }
        }
    });
}
