use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::viewport::{NavViewState, StateSink, SurfaceHandle, ViewportTracker};

/// What the navbar gets back from [`use_navigation`]: the current state
/// snapshot plus the two explicit user-intent controls.
#[derive(Clone, PartialEq)]
pub struct NavigationHandle {
    pub state: NavViewState,
    pub toggle_menu: Callback<()>,
    pub close_menu: Callback<()>,
}

/// Owns a [`ViewportTracker`] for the lifetime of the calling component.
///
/// Attaches on mount and acquires the browser subscriptions one tick later,
/// after the section elements are in the DOM; everything is released again
/// on unmount. When the host surface is unavailable the state simply stays
/// at its defaults.
#[hook]
pub fn use_navigation(section_ids: &'static [&'static str]) -> NavigationHandle {
    let state = use_state(NavViewState::default);
    let tracker = use_mut_ref(ViewportTracker::new);
    let surface: Rc<RefCell<Option<SurfaceHandle>>> = use_mut_ref(|| None);

    {
        let state = state.clone();
        let tracker = tracker.clone();
        let surface = surface.clone();
        let ids: Vec<String> = section_ids.iter().map(|id| id.to_string()).collect();
        use_effect_with_deps(
            move |_| {
                match tracker.borrow_mut().attach(ids) {
                    Ok(()) => {}
                    Err(err) => log::error!("navigation tracker stays detached: {err}"),
                }
                state.set(tracker.borrow().state().clone());

                if tracker.borrow().is_attached() {
                    let notify: StateSink = {
                        let state = state.clone();
                        Rc::new(move |next| state.set(next))
                    };
                    let tracker_for_acquire = tracker.clone();
                    let surface_slot = surface.clone();
                    spawn_local(async move {
                        // Let the rest of the page commit before querying
                        // for section elements.
                        TimeoutFuture::new(0).await;
                        if !tracker_for_acquire.borrow().is_attached() {
                            return; // unmounted before the tick fired
                        }
                        let handle =
                            SurfaceHandle::acquire(tracker_for_acquire, notify);
                        if handle.is_none() {
                            log::warn!("host surface unavailable, navigation state is static");
                        }
                        *surface_slot.borrow_mut() = handle;
                    });
                }

                move || {
                    tracker.borrow_mut().detach();
                    surface.borrow_mut().take();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let state = state.clone();
        let tracker = tracker.clone();
        Callback::from(move |_| {
            tracker.borrow_mut().toggle_menu();
            state.set(tracker.borrow().state().clone());
        })
    };
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_| {
            tracker.borrow_mut().close_menu();
            state.set(tracker.borrow().state().clone());
        })
    };

    NavigationHandle {
        state: (*state).clone(),
        toggle_menu,
        close_menu,
    }
}
