//! Bezier-Spline-Engine Library.
//! Stückweise kubische Bézier-Splines mit Kontinuitätsmodi, exportiert
//! als Library für Editor-/Animations-Hosts und Tests.

pub mod core;
pub mod shared;

pub use crate::core::{anchor_index_of, is_anchor, mode_index_of};
pub use crate::core::{BezierSpline, ControlPointMode};
pub use crate::core::{Identity, LocalToWorld};
pub use crate::shared::{cubic_bezier_derivative, cubic_bezier_point};
