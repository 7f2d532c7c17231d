use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

/// True when `target` is `container` itself or one of its descendants
pub fn contains_target(container: &Node, target: Option<&Node>) -> bool {
    target.map_or(false, |target| container.contains(Some(target)))
}

/// Fire `on_outside` for any mousedown that lands outside `container`.
///
/// The document listener only exists while `active` is true, so closed
/// menus cost nothing.
#[hook]
pub fn use_outside_click(container: NodeRef, active: bool, on_outside: Callback<()>) {
    use_effect_with(active, move |active| {
        let mut registration = None;

        if *active {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                    let Some(container) = container.get() else {
                        return;
                    };
                    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                    if !contains_target(&container, target.as_ref()) {
                        on_outside.emit(());
                    }
                }) as Box<dyn FnMut(_)>);
                let _ = document
                    .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
                registration = Some((document, listener));
            }
        }

        move || {
            if let Some((document, listener)) = registration {
                let _ = document
                    .remove_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
            }
        }
    });
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_contains_target() {
        let document = web_sys::window().unwrap().document().unwrap();
        let menu = document.create_element("div").unwrap();
        let item = document.create_element("button").unwrap();
        let elsewhere = document.create_element("p").unwrap();
        menu.append_child(&item).unwrap();

        let menu: Node = menu.into();
        assert!(contains_target(&menu, Some(&item.into())));
        assert!(contains_target(&menu, Some(&menu)));
        assert!(!contains_target(&menu, Some(&elsewhere.into())));
        assert!(!contains_target(&menu, None));
    }
}
