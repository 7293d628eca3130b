#![forbid(unsafe_code)]

//! Error types.

use std::fmt;

use crate::driver::PanelPart;

/// A layout axis, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "width"),
            Axis::Vertical => write!(f, "height"),
        }
    }
}

/// Errors produced by [`PanelConfig::validate`](crate::config::PanelConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min > max` on one axis.
    SizeRangeInverted { axis: Axis, min: i32, max: i32 },
    /// Start size must be positive on both axes.
    NonPositiveStartSize { axis: Axis, value: i32 },
    /// Touch slop cannot be negative.
    NegativeTouchSlop { value: f32 },
    /// Pop offset cannot be negative.
    NegativePopOffset { value: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeRangeInverted { axis, min, max } => {
                write!(f, "min {axis} {min} exceeds max {axis} {max}")
            }
            Self::NonPositiveStartSize { axis, value } => {
                write!(f, "start {axis} must be positive, got {value}")
            }
            Self::NegativeTouchSlop { value } => {
                write!(f, "touch slop must be non-negative, got {value}")
            }
            Self::NegativePopOffset { value } => {
                write!(f, "pop offset must be non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors produced at attachment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachError {
    /// A required part has no bounds in the host's part lookup.
    MissingPart { part: PanelPart },
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPart { part } => {
                write!(
                    f,
                    "could not find required child ({})",
                    part.reference_name()
                )
            }
        }
    }
}

impl std::error::Error for AttachError {}
