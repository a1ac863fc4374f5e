//! Small helpers over `web_sys` shared by all components

use super::error::{UiError, UiResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub const HIDDEN_CLASS: &str = "hidden";

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or_else(|| UiError::Js("no window".to_string()))
}

pub fn document() -> UiResult<Document> {
    window()?
        .document()
        .ok_or_else(|| UiError::Js("no document".to_string()))
}

/// Required element of a concrete type
pub fn element_by_id<T: JsCast>(document: &Document, id: &'static str) -> UiResult<T> {
    document
        .get_element_by_id(id)
        .ok_or(UiError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| UiError::WrongElementType(id))
}

/// Element that is rendered only for some roles; a wrong type counts as absent
pub fn optional_element<T: JsCast>(document: &Document, id: &'static str) -> Option<T> {
    match element_by_id(document, id) {
        Ok(element) => Some(element),
        Err(UiError::MissingElement(_)) => None,
        Err(e) => {
            leptos::logging::warn!("{}", e);
            None
        }
    }
}

pub fn set_hidden(element: &Element, hidden: bool) {
    let classes = element.class_list();
    let result = if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
    if let Err(e) = result {
        leptos::logging::warn!("class toggle failed: {:?}", e);
    }
}

pub fn toggle_class(element: &Element, class: &str, enabled: bool) {
    let classes = element.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        leptos::logging::warn!("class toggle failed for {}: {:?}", class, e);
    }
}

/// Nearest ancestor (or the target itself) of the event target matching `selector`
pub fn closest_from_event(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Attach a listener for the lifetime of the page
pub fn listen(
    target: &EventTarget,
    event_name: &str,
    handler: impl FnMut(Event) + 'static,
) -> UiResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
