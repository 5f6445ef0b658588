//! Reine Geometrie-Funktionen für kubische Bézier-Kurven.
//!
//! Layer-neutral: kann von `core` und von Host-seitigem Rendering
//! importiert werden ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// B(u) = (1-u)³·P0 + 3(1-u)²u·P1 + 3(1-u)u²·P2 + u³·P3
pub fn cubic_bezier_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f32) -> Vec3 {
    let inv = 1.0 - u;
    let inv2 = inv * inv;
    let u2 = u * u;
    inv2 * inv * p0 + 3.0 * inv2 * u * p1 + 3.0 * inv * u2 * p2 + u2 * u * p3
}

/// B'(u) = 3(1-u)²·(P1-P0) + 6(1-u)u·(P2-P1) + 3u²·(P3-P2)
pub fn cubic_bezier_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f32) -> Vec3 {
    let inv = 1.0 - u;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (p3 - p2)
}
