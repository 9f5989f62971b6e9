// =============================================================================
// Copper Falls Planner - Smooth In-Page Navigation
// =============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::PlannerConfig;
use crate::error::Result;

/// Element id named by an in-page link, e.g. `#trails` -> `trails`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `offset_top` just below the sticky header.
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Replace the default jump of every in-page nav link with a smooth scroll.
///
/// Returns the number of links wired.
pub fn install_smooth_scroll(document: &Document, config: &PlannerConfig) -> Result<u32> {
    let links = document.query_selector_all(config.nav_link_selector)?;
    let header_offset = config.header_offset;

    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        let href = link.get_attribute("href").unwrap_or_default();
        let document = document.clone();
        let on_click = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_fragment(&document, &href, header_offset);
        });

        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // Listener lives as long as the page.
        on_click.forget();
    }

    log::debug!("Smooth scrolling wired to {} nav links", links.length());
    Ok(links.length())
}

/// Scroll position for the element `href` points at, or `None` when there is
/// nothing to scroll to. `offset_top_of` looks an id up on the page.
pub fn resolve_scroll<F>(href: &str, header_offset: f64, offset_top_of: F) -> Option<f64>
where
    F: FnOnce(&str) -> Option<f64>,
{
    fragment_id(href)
        .and_then(offset_top_of)
        .map(|offset_top| scroll_target(offset_top, header_offset))
}

/// Unresolvable targets are ignored.
fn scroll_to_fragment(document: &Document, href: &str, header_offset: f64) {
    let Some(top) = resolve_scroll(href, header_offset, |id| {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_top() as f64)
    }) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HEADER_OFFSET;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#trails"), Some("trails"));
        assert_eq!(fragment_id("#budget-estimator"), Some("budget-estimator"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("https://example.com/#trails"), None);
        assert_eq!(fragment_id(""), None);
    }

    fn page(id: &str) -> Option<f64> {
        match id {
            "trails" => Some(1200.0),
            "packing" => Some(2400.0),
            _ => None,
        }
    }

    #[test]
    fn test_resolve_scroll_to_existing_section() {
        assert_eq!(resolve_scroll("#trails", HEADER_OFFSET, page), Some(1120.0));
        assert_eq!(resolve_scroll("#packing", HEADER_OFFSET, page), Some(2320.0));
    }

    #[test]
    fn test_missing_target_does_not_scroll() {
        assert_eq!(resolve_scroll("#campground", HEADER_OFFSET, page), None);
        assert_eq!(resolve_scroll("#", HEADER_OFFSET, page), None);
        assert_eq!(resolve_scroll("", HEADER_OFFSET, page), None);
    }

    #[test]
    fn test_bare_hash_never_looks_up() {
        let looked_up = std::cell::Cell::new(false);
        let result = resolve_scroll("#", HEADER_OFFSET, |_| {
            looked_up.set(true);
            Some(0.0)
        });
        assert_eq!(result, None);
        assert!(!looked_up.get());
    }

    #[test]
    fn test_scroll_target_clears_header() {
        assert_eq!(scroll_target(1200.0, HEADER_OFFSET), 1120.0);
        assert_eq!(scroll_target(40.0, HEADER_OFFSET), -40.0);
    }
}
