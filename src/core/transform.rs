//! Der Local-zu-Welt-Vertrag zwischen Spline und Host.
//!
//! Die Spline rechnet ausschließlich im lokalen Raum ihres Besitzers.
//! Der Host (Editor, Animationssystem) injiziert die Abbildung in den
//! Welt-Raum als Parameter der Auswertungs-Methoden — nie als globaler
//! Zustand.

use glam::{Affine3A, Mat4, Vec3};

/// Affine, invertierbare Abbildung vom lokalen Raum in den Welt-Raum.
pub trait LocalToWorld {
    /// Bildet einen Punkt ab (inklusive Translation).
    fn transform_point(&self, point: Vec3) -> Vec3;

    /// Bildet eine Richtungsgröße ab: Punkt transformieren und den
    /// Ursprung der Abbildung abziehen. Die Translation hebt sich damit
    /// exakt auf, Rotation und Skalierung bleiben wirksam.
    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform_point(vector) - self.transform_point(Vec3::ZERO)
    }
}

/// Identitäts-Abbildung: Auswertung direkt im lokalen Raum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl LocalToWorld for Identity {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        point
    }

    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        vector
    }
}

impl LocalToWorld for Affine3A {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }

    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform_vector3(vector)
    }
}

impl LocalToWorld for Mat4 {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }

    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform_vector3(vector)
    }
}
