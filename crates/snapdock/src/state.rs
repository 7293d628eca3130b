#![forbid(unsafe_code)]

//! The persisted panel state record.
//!
//! [`PanelState`] is the single source of truth for the panel's mode and
//! geometry bookkeeping. It is created once per attachment (fresh, or
//! restored from bytes), mutated in place for the widget's lifetime, and
//! serialized out before the host surface is destroyed.
//!
//! # Invariants
//!
//! 1. Exactly one [`Snap`] value holds at a time; `Animating` is transient
//!    and resolves to `Floating` or `Snapped` before another gesture can be
//!    accepted.
//! 2. `position` is the docked edge while `Snapped`; while `Floating` it is
//!    the edge that would trigger a snap if the drag were released, and may
//!    legitimately be `None`.
//! 3. Resolved sizes (not the unset sentinel) are clamped to the configured
//!    `[min, max]` per axis by the resize path.
//! 4. Edge distances are non-negative and consistent with the panel's last
//!    known floating geometry.
//!
//! # Failure Modes
//!
//! Malformed or absent persisted bytes decode to `None`; callers fall back
//! to a freshly constructed state. That is the defined first-run path, not
//! an error.

use serde::{Deserialize, Serialize};

use crate::geometry::{
    DockEdge, HorizontalEdge, HorizontalEdgeDistance, Size, VerticalEdge, VerticalEdgeDistance,
};

/// The unset marker for one axis of [`SavedSize`].
const UNSET_EXTENT: i32 = -1;

/// The panel's docking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Snap {
    /// Freely positioned by absolute coordinates.
    #[default]
    Floating,
    /// Mid-transition between floating and snapped.
    Animating,
    /// Docked flush against one container edge.
    Snapped,
}

/// A persisted panel size. `-1` on an axis means "use the configured start
/// size" and is kept verbatim on the wire for compatibility with older
/// saved blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSize {
    pub width: i32,
    pub height: i32,
}

impl SavedSize {
    /// Both axes unset.
    pub const UNSET: SavedSize = SavedSize {
        width: UNSET_EXTENT,
        height: UNSET_EXTENT,
    };

    /// Create a saved size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether either axis carries the unset sentinel.
    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.width == UNSET_EXTENT || self.height == UNSET_EXTENT
    }

    /// Resolve to a concrete size: unset axes take the configured start
    /// size, stored axes are capped at the current container extent.
    pub fn resolve(self, start: Size, container: Size) -> Size {
        let width = if self.width == UNSET_EXTENT {
            start.width
        } else {
            self.width.min(container.width)
        };
        let height = if self.height == UNSET_EXTENT {
            start.height
        } else {
            self.height.min(container.height)
        };

        Size::new(width, height)
    }
}

impl Default for SavedSize {
    fn default() -> Self {
        Self::UNSET
    }
}

/// The persisted/restorable record of the panel's visibility, docking mode,
/// size, docked edge, and floating-position bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    /// Whether the panel is currently shown.
    pub visible: bool,
    /// Current docking mode.
    pub snap: Snap,
    /// Current panel dimensions (or the unset sentinel).
    pub size: SavedSize,
    /// Docked edge while snapped; candidate snap edge while floating.
    pub position: Option<DockEdge>,
    /// Horizontal offset from the nearest edge, for floating restoration.
    pub horizontal_edge_distance: HorizontalEdgeDistance,
    /// Vertical offset from the nearest edge, for floating restoration.
    pub vertical_edge_distance: VerticalEdgeDistance,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            visible: true,
            snap: Snap::Floating,
            size: SavedSize::UNSET,
            position: None,
            horizontal_edge_distance: HorizontalEdgeDistance::new(HorizontalEdge::Left, 0),
            vertical_edge_distance: VerticalEdgeDistance::new(VerticalEdge::Top, 0),
        }
    }
}

/// The persisted container: the host's own opaque state blob alongside the
/// panel state, round-tripped across a surface destroy/recreate cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLayout {
    /// Opaque host base state, passed through untouched.
    pub host: Vec<u8>,
    /// The panel's own state.
    pub panel: PanelState,
}

impl SavedLayout {
    /// Bundle host state with the panel state.
    pub fn new(host: Vec<u8>, panel: PanelState) -> Self {
        Self { host, panel }
    }

    /// Serialize for the host's persistence container.
    pub fn to_bytes(&self) -> Vec<u8> {
        // Serialization of this record cannot fail; an empty blob decodes to
        // the first-run default downstream.
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Decode persisted bytes. `None` means "start fresh".
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice(bytes).ok()
    }
}
