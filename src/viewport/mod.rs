//! Viewport-driven navigation state: a host-agnostic event fold
//! ([`tracker`]) plus the browser subscriptions that feed it ([`surface`]).

pub mod surface;
pub mod tracker;

pub use surface::{SurfaceHandle, StateSink};
pub use tracker::{NavViewState, TrackerError, ViewportTracker};
