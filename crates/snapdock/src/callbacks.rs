#![forbid(unsafe_code)]

//! Host callback contract.
//!
//! The embedding surface registers at most one listener; every hook has a
//! no-op default, so hosts implement only what they react to (e.g. running
//! an elevation animation in `before_snap`). `after_*` hooks fire when the
//! host reports transition completion, not when the operation is issued.

use crate::geometry::DockEdge;

/// Lifecycle notifications around snap, pop, and close operations.
#[allow(unused_variables)]
pub trait PanelCallbacks {
    /// A snap transition to `edge` is starting.
    fn before_snap(&mut self, edge: DockEdge) {}

    /// The snap transition to `edge` finished.
    fn after_snap(&mut self, edge: DockEdge) {}

    /// A pop transition toward `(x, y)` is starting.
    fn before_pop(&mut self, x: i32, y: i32) {}

    /// The pop transition toward `(x, y)` finished.
    fn after_pop(&mut self, x: i32, y: i32) {}

    /// The hide-while-snapped collapse finished.
    fn after_close(&mut self) {}
}
