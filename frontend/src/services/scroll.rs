//! Browser side of anchor navigation and the scrolled-past-header flag.

use anyhow::{anyhow, Result};
use loklok_shared::{resolve_scroll_top, Anchor};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window"))
}

/// Current vertical scroll offset of the page
pub fn page_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll so `anchor` sits just below the fixed header.
///
/// Returns the scroll target, or `None` when the section is not in the
/// document, in which case nothing moves.
pub fn scroll_to_anchor(anchor: Anchor, header_offset: f64) -> Result<Option<f64>> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("window has no document"))?;

    let element_top = document
        .get_element_by_id(anchor.id())
        .map(|element| element.get_bounding_client_rect().top());
    let page_y = window
        .scroll_y()
        .map_err(|e| anyhow!("failed to read scroll offset: {:?}", e))?;

    let Some(top) = resolve_scroll_top(anchor, element_top, page_y, header_offset) else {
        return Ok(None);
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(Some(top))
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_section_does_not_scroll() {
        let result = scroll_to_anchor(Anchor::Pets, 100.0).unwrap();
        assert_eq!(result, None);
    }

    #[wasm_bindgen_test]
    fn test_home_always_targets_top() {
        let result = scroll_to_anchor(Anchor::Home, 100.0).unwrap();
        assert_eq!(result, Some(0.0));
    }
}
