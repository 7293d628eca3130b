#![forbid(unsafe_code)]

//! Core: the interaction and layout state machine of a draggable,
//! resizable, edge-snapping panel.
//!
//! # Role
//! `snapdock` owns the panel's gesture interpretation (drag vs. resize vs.
//! tap), the snap/pop/resize geometry, and the transitions between floating,
//! animating, and snapped positions, including persistence across surface
//! recreation. It renders nothing and runs no animation clock.
//!
//! # Primary responsibilities
//! - **PanelController**: single owner of [`PanelState`], pointer routing,
//!   and the public command surface (show/hide, snap-to, pop-to).
//! - **Geometry**: movement bounds, nearest-edge distances, exact-equality
//!   edge classification, touch-slop tests.
//! - **Gestures**: three independent press/move/release state machines for
//!   move/snap, pop, and resize.
//! - **Overlays**: tick-driven fade/scale feedback for the snap zones.
//!
//! # How it fits in a host
//! The host feeds [`PointerEvent`]s and container sizes in, implements
//! [`LayoutDriver`] and [`PanelParts`] to expose its layout/animation engine
//! and view tree, and reports transition completion back through
//! [`PanelController::finish_transition`]. Lifecycle notifications flow out
//! through [`PanelCallbacks`]. Everything runs on one logical UI thread.

pub mod callbacks;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod event;
pub mod geometry;
pub(crate) mod gesture;
pub mod overlay;
pub mod state;

pub use callbacks::PanelCallbacks;
pub use config::{PanelConfig, SnapEdges, SnapExtent};
pub use controller::PanelController;
pub use driver::{
    LayoutDriver, PanelPart, PanelParts, PanelPlacement, Transition, TransitionKind,
    TransitionToken,
};
pub use error::{AttachError, Axis, ConfigError};
pub use event::{PointerEvent, PointerKind};
pub use geometry::{
    DockEdge, HorizontalEdge, HorizontalEdgeDistance, MoveBounds, Point, Rect, Size, VerticalEdge,
    VerticalEdgeDistance, is_significantly_distant, movement_bounds, position_for,
};
pub use overlay::{OverlayPhase, OverlayPose, Rgba};
pub use state::{PanelState, SavedLayout, SavedSize, Snap};
