use std::cell::RefCell;

use pa_console::ConsoleError;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget};

use crate::bindgen::Channel;

thread_local! {
    static CHANNEL: RefCell<Channel> = RefCell::new(Channel::default());
}

/// Queues DOM edits on the shared channel and flushes them in one call.
pub(crate) fn batch(edits: impl FnOnce(&mut Channel)) {
    CHANNEL.with(|channel| {
        let mut channel = channel.borrow_mut();
        edits(&mut channel);
        channel.flush();
    });
}

pub(crate) fn document() -> Result<Document, ConsoleError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ConsoleError::Dom("document is unavailable".to_string()))
}

pub(crate) fn by_id<T: JsCast>(id: &str) -> Result<T, ConsoleError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| ConsoleError::Dom(format!("#{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| ConsoleError::Dom(format!("#{id} is not the expected element type")))
}

/// Like [`by_id`] for elements a page may legitimately omit.
pub(crate) fn find<T: JsCast>(id: &str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

pub(crate) fn text_of(id: &str) -> Result<String, ConsoleError> {
    let element: Element = by_id(id)?;
    Ok(element.text_content().unwrap_or_default().trim().to_string())
}

pub(crate) fn query_all(selector: &str) -> Result<Vec<Element>, ConsoleError> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|_| ConsoleError::Dom(format!("invalid selector {selector}")))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn query_one<T: JsCast>(root: &Element, selector: &str) -> Result<Option<T>, ConsoleError> {
    let element = root
        .query_selector(selector)
        .map_err(|_| ConsoleError::Dom(format!("invalid selector {selector}")))?;
    Ok(element.and_then(|element| element.dyn_into::<T>().ok()))
}

pub(crate) fn event_closure(handler: impl FnMut(Event) + 'static) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(handler)
}

/// Attaches `handler` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), ConsoleError> {
    let closure = event_closure(handler);
    attach(target, event, &closure)?;
    closure.forget();
    Ok(())
}

pub(crate) fn attach(
    target: &EventTarget,
    event: &str,
    closure: &Closure<dyn FnMut(Event)>,
) -> Result<(), ConsoleError> {
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| ConsoleError::Dom(format!("failed to attach {event} listener")))
}
