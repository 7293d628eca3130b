#![forbid(unsafe_code)]

//! Pointer input events.
//!
//! The host translates its native press/move/release stream into
//! [`PointerEvent`] values and feeds them to the controller. Coordinates are
//! container-space, matching the bounds reported by
//! [`PanelParts`](crate::driver::PanelParts).

use crate::geometry::Point;

/// What a pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary pointer pressed down.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Primary pointer released.
    Up,
    /// Gesture aborted by the host (e.g. focus loss).
    Cancel,
}

/// A single pointer sample in container space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[inline]
    pub const fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    /// A press at the given position.
    #[inline]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    /// A move to the given position.
    #[inline]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    /// A release at the given position.
    #[inline]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    /// A host-initiated cancel.
    #[inline]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Cancel, x, y)
    }
}
