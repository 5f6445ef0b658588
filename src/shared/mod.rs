//! Geteilte, layer-neutrale Geometrie-Funktionen.
//!
//! Enthält reine Funktionen ohne Zustand, die von `core` und von
//! Host-seitigem Rendering gleichermaßen benutzt werden können.

pub mod bezier_math;

pub use bezier_math::{cubic_bezier_derivative, cubic_bezier_point};
