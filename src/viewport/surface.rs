use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent,
};

use super::tracker::{NavViewState, ViewportTracker, ACTIVE_SECTION_RATIO};

/// Called with a fresh state snapshot after every fold.
pub type StateSink = Rc<dyn Fn(NavViewState)>;

/// A section only counts as visible once it is 50px inside the viewport
/// on both edges, so the fixed navbar cannot keep a section "active".
const OBSERVER_ROOT_MARGIN: &str = "-50px 0px -50px 0px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Owns the live browser subscriptions feeding a [`ViewportTracker`]:
/// the window scroll listener, the document keydown listener (Escape closes
/// the mobile menu) and an `IntersectionObserver` over `section[id]`
/// elements. Dropping the handle removes every listener and disconnects the
/// observer, so no callback can fire after teardown.
pub struct SurfaceHandle {
    scroll_cb: Closure<dyn FnMut()>,
    key_cb: Closure<dyn FnMut(KeyboardEvent)>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
}

impl SurfaceHandle {
    /// Subscribes the tracker to the browser surface. Returns `None` when
    /// there is no window/document to observe (e.g. a non-interactive
    /// rendering context); the tracker then simply keeps its defaults.
    pub fn acquire(tracker: Rc<RefCell<ViewportTracker>>, notify: StateSink) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let scroll_cb = {
            let tracker = tracker.clone();
            let notify = notify.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some((offset, max_offset)) = scroll_extent() {
                    tracker.borrow_mut().on_scroll(offset, max_offset);
                    notify(tracker.borrow().state().clone());
                }
            })
        };
        if let Err(err) = window
            .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
        {
            log::warn!("failed to register scroll listener: {:?}", err);
        }

        let key_cb = {
            let tracker = tracker.clone();
            let notify = notify.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    tracker.borrow_mut().close_menu();
                    notify(tracker.borrow().state().clone());
                }
            })
        };
        if let Err(err) = document
            .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
        {
            log::warn!("failed to register keydown listener: {:?}", err);
        }

        let observer = match observe_sections(&document, tracker.clone(), notify.clone()) {
            Ok(observer) => Some(observer),
            Err(err) => {
                // Section highlighting is cosmetic; scroll tracking still runs.
                log::warn!("section observation unavailable: {:?}", err);
                None
            }
        };

        // Initial sample so a restored scroll position is reflected on load.
        if let Some((offset, max_offset)) = scroll_extent() {
            tracker.borrow_mut().on_scroll(offset, max_offset);
            notify(tracker.borrow().state().clone());
        }

        Some(Self {
            scroll_cb,
            key_cb,
            observer,
        })
    }
}

impl Drop for SurfaceHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.scroll_cb.as_ref().unchecked_ref(),
            );
            if let Some(document) = window.document() {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    self.key_cb.as_ref().unchecked_ref(),
                );
            }
        }
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Current scroll offset and the maximum scrollable distance, or `None`
/// outside a browser context.
pub fn scroll_extent() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let offset = window.scroll_y().ok()?;
    let inner_height = window.inner_height().ok()?.as_f64()?;
    Some((offset, f64::from(root.scroll_height()) - inner_height))
}

fn observe_sections(
    document: &Document,
    tracker: Rc<RefCell<ViewportTracker>>,
    notify: StateSink,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            {
                // One batch folds in arrival order, so the last entry wins.
                let mut tracker = tracker.borrow_mut();
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        tracker.on_visibility_change(
                            &entry.target().id(),
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        );
                    }
                }
            }
            notify(tracker.borrow().state().clone());
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(OBSERVER_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(ACTIVE_SECTION_RATIO));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let sections = document.query_selector_all("section[id]")?;
    for index in 0..sections.length() {
        if let Some(node) = sections.item(index) {
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&element);
            }
        }
    }
    Ok((observer, callback))
}
