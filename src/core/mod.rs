//! Core-Domänentypen: Spline, Kontinuitätsmodi, Transform-Vertrag.

pub mod mode;
pub mod spline;
pub mod transform;

pub use mode::{anchor_index_of, is_anchor, mode_index_of, ControlPointMode};
pub use spline::BezierSpline;
pub use transform::{Identity, LocalToWorld};
