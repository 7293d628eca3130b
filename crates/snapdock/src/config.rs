#![forbid(unsafe_code)]

//! Widget configuration.
//!
//! [`PanelConfig`] is read once at controller construction and treated as
//! immutable for the widget's lifetime. All options from the host's styling
//! surface land here: size limits, snap target extents, edge enablement,
//! animation timing, and overlay tint.

use std::time::Duration;

use bitflags::bitflags;

use crate::error::{Axis, ConfigError};
use crate::geometry::{DockEdge, Size};
use crate::overlay::Rgba;

bitflags! {
    /// Which container edges accept a snap on release.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SnapEdges: u8 {
        const LEFT = 1;
        const TOP = 2;
        const RIGHT = 4;
        const BOTTOM = 8;
    }
}

impl SnapEdges {
    /// Whether snapping is enabled for the given edge.
    pub fn allows(self, edge: DockEdge) -> bool {
        self.contains(match edge {
            DockEdge::Left => SnapEdges::LEFT,
            DockEdge::Top => SnapEdges::TOP,
            DockEdge::Right => SnapEdges::RIGHT,
            DockEdge::Bottom => SnapEdges::BOTTOM,
        })
    }
}

/// A docked-panel extent: absolute pixels or a fraction of the container's
/// extent along the same axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapExtent {
    Px(i32),
    Fraction(f32),
}

impl SnapExtent {
    /// Resolve against the container extent along the relevant axis.
    pub fn resolve(self, container_extent: i32) -> i32 {
        match self {
            SnapExtent::Px(px) => px,
            SnapExtent::Fraction(fraction) => (container_extent as f32 * fraction).round() as i32,
        }
    }
}

const fn edge_slot(edge: DockEdge) -> usize {
    match edge {
        DockEdge::Left => 0,
        DockEdge::Top => 1,
        DockEdge::Right => 2,
        DockEdge::Bottom => 3,
    }
}

/// Immutable panel configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Enables the resize handle and its listener.
    pub resize_enabled: bool,
    /// Lower resize bound per axis.
    pub min_size: Size,
    /// Upper resize bound per axis.
    pub max_size: Size,
    /// Default floating size.
    pub start_size: Size,
    /// Docked extent when snapped to a vertical (left/right) edge.
    pub snap_width: SnapExtent,
    /// Docked extent when snapped to a horizontal (top/bottom) edge.
    pub snap_height: SnapExtent,
    /// Which edges accept a snap on release.
    pub snap_to_edges: SnapEdges,
    /// Duration of snap/pop/close transitions.
    pub snap_animation: Duration,
    /// Duration of overlay fade/scale animations.
    pub overlay_animation: Duration,
    /// Overlay tint.
    pub overlay_color: Rgba,
    /// Drag-vs-tap threshold in pixels (the host's touch slop).
    pub touch_slop: f32,
    /// Inset from container edges applied while popping a docked panel.
    pub pop_offset: i32,
    /// Per-edge overrides of the docked extent.
    dock_extents: [Option<SnapExtent>; 4],
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            resize_enabled: true,
            min_size: Size::new(100, 100),
            max_size: Size::new(800, 800),
            start_size: Size::new(300, 240),
            snap_width: SnapExtent::Px(320),
            snap_height: SnapExtent::Px(240),
            snap_to_edges: SnapEdges::all(),
            snap_animation: Duration::from_millis(300),
            overlay_animation: Duration::from_millis(150),
            overlay_color: Rgba::new(96, 125, 139, 96),
            touch_slop: 8.0,
            pop_offset: 4,
            dock_extents: [None; 4],
        }
    }
}

impl PanelConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the resize handle.
    #[must_use]
    pub fn resize_enabled(mut self, enabled: bool) -> Self {
        self.resize_enabled = enabled;
        self
    }

    /// Set the minimum resizable size.
    #[must_use]
    pub fn min_size(mut self, width: i32, height: i32) -> Self {
        self.min_size = Size::new(width, height);
        self
    }

    /// Set the maximum resizable size.
    #[must_use]
    pub fn max_size(mut self, width: i32, height: i32) -> Self {
        self.max_size = Size::new(width, height);
        self
    }

    /// Set the default floating size.
    #[must_use]
    pub fn start_size(mut self, width: i32, height: i32) -> Self {
        self.start_size = Size::new(width, height);
        self
    }

    /// Set the docked extent for left/right edges.
    #[must_use]
    pub fn snap_width(mut self, extent: SnapExtent) -> Self {
        self.snap_width = extent;
        self
    }

    /// Set the docked extent for top/bottom edges.
    #[must_use]
    pub fn snap_height(mut self, extent: SnapExtent) -> Self {
        self.snap_height = extent;
        self
    }

    /// Set which edges accept a snap on release.
    #[must_use]
    pub fn snap_to_edges(mut self, edges: SnapEdges) -> Self {
        self.snap_to_edges = edges;
        self
    }

    /// Set the snap/pop/close transition duration.
    #[must_use]
    pub fn snap_animation(mut self, duration: Duration) -> Self {
        self.snap_animation = duration;
        self
    }

    /// Set the overlay fade/scale duration.
    #[must_use]
    pub fn overlay_animation(mut self, duration: Duration) -> Self {
        self.overlay_animation = duration;
        self
    }

    /// Set the overlay tint.
    #[must_use]
    pub fn overlay_color(mut self, color: Rgba) -> Self {
        self.overlay_color = color;
        self
    }

    /// Set the drag-vs-tap threshold.
    #[must_use]
    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Set the pop movement-bounds inset.
    #[must_use]
    pub fn pop_offset(mut self, offset: i32) -> Self {
        self.pop_offset = offset;
        self
    }

    /// Override the docked extent for one edge.
    #[must_use]
    pub fn dock_extent(mut self, edge: DockEdge, extent: SnapExtent) -> Self {
        self.dock_extents[edge_slot(edge)] = Some(extent);
        self
    }

    /// The docked extent for an edge: the per-edge override if set, else the
    /// axis default.
    pub fn dock_extent_for(&self, edge: DockEdge) -> SnapExtent {
        self.dock_extents[edge_slot(edge)].unwrap_or(match edge {
            DockEdge::Left | DockEdge::Right => self.snap_width,
            DockEdge::Top | DockEdge::Bottom => self.snap_height,
        })
    }

    /// Preferred docked width against the current container.
    pub fn preferred_snap_width(&self, container: Size) -> i32 {
        self.snap_width.resolve(container.width)
    }

    /// Preferred docked height against the current container.
    pub fn preferred_snap_height(&self, container: Size) -> i32 {
        self.snap_height.resolve(container.height)
    }

    /// Validate option consistency. Called once at controller construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size.width > self.max_size.width {
            return Err(ConfigError::SizeRangeInverted {
                axis: Axis::Horizontal,
                min: self.min_size.width,
                max: self.max_size.width,
            });
        }
        if self.min_size.height > self.max_size.height {
            return Err(ConfigError::SizeRangeInverted {
                axis: Axis::Vertical,
                min: self.min_size.height,
                max: self.max_size.height,
            });
        }
        if self.start_size.width <= 0 {
            return Err(ConfigError::NonPositiveStartSize {
                axis: Axis::Horizontal,
                value: self.start_size.width,
            });
        }
        if self.start_size.height <= 0 {
            return Err(ConfigError::NonPositiveStartSize {
                axis: Axis::Vertical,
                value: self.start_size.height,
            });
        }
        if self.touch_slop < 0.0 {
            return Err(ConfigError::NegativeTouchSlop {
                value: self.touch_slop,
            });
        }
        if self.pop_offset < 0 {
            return Err(ConfigError::NegativePopOffset {
                value: self.pop_offset,
            });
        }
        Ok(())
    }
}
