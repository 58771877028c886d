#![cfg(target_arch = "wasm32")]

//! Browser-side checks for the viewport surface: listeners attach against a
//! real DOM and stop firing once the handle is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::*;

use codeflick::viewport::{NavViewState, StateSink, SurfaceHandle, ViewportTracker};

wasm_bindgen_test_configure!(run_in_browser);

fn append_section(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let section = document.create_element("section").unwrap();
    section.set_id(id);
    document.body().unwrap().append_child(&section).unwrap();
}

fn attached_tracker() -> Rc<RefCell<ViewportTracker>> {
    append_section("home");
    append_section("services");
    let tracker = Rc::new(RefCell::new(ViewportTracker::new()));
    tracker
        .borrow_mut()
        .attach(["home", "services"])
        .expect("non-empty section list");
    tracker
}

#[wasm_bindgen_test]
fn surface_samples_on_acquire_and_goes_quiet_after_drop() {
    let tracker = attached_tracker();
    let seen: Rc<RefCell<Vec<NavViewState>>> = Rc::default();
    let sink: StateSink = {
        let seen = seen.clone();
        Rc::new(move |state: NavViewState| seen.borrow_mut().push(state))
    };

    let handle = SurfaceHandle::acquire(tracker.clone(), sink).expect("browser surface");
    assert!(!seen.borrow().is_empty(), "initial sample missing");
    assert_eq!(seen.borrow().last().unwrap().active_section, "home");

    let window = web_sys::window().unwrap();
    let before = seen.borrow().len();
    window
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();
    assert!(seen.borrow().len() > before, "scroll listener not wired");

    drop(handle);
    let after = seen.borrow().len();
    window
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();
    assert_eq!(seen.borrow().len(), after, "listener fired after release");
}

#[wasm_bindgen_test]
fn escape_key_closes_the_menu() {
    let tracker = attached_tracker();
    tracker.borrow_mut().toggle_menu();
    assert!(tracker.borrow().state().menu_open);

    let sink: StateSink = Rc::new(|_| {});
    let _handle = SurfaceHandle::acquire(tracker.clone(), sink).expect("browser surface");

    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let event =
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let document = web_sys::window().unwrap().document().unwrap();
    document.dispatch_event(&event).unwrap();

    assert!(!tracker.borrow().state().menu_open);
}
