//! Die zentrale BezierSpline-Datenstruktur: Kontrollpunkte, Modi, Kontinuität.

use anyhow::{ensure, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::mode::{anchor_index_of, is_anchor, mode_index_of, ControlPointMode};
use super::transform::LocalToWorld;
use crate::shared::{cubic_bezier_derivative, cubic_bezier_point};

/// Stückweise kubische Bézier-Spline im lokalen Raum des Host-Objekts.
///
/// Die Punktfolge hat die Länge `3·K + 1` für `K >= 1` Segmente: Indizes
/// 0, 3, 6, … sind Anker (auf der Kurve, von Nachbar-Segmenten geteilt),
/// alle anderen sind Handles (Tangenten-Kontrollpunkte). Segment `i`
/// benutzt die Punkte `[3i .. 3i+3]`. Pro Anker existiert genau ein
/// Kontinuitätsmodus, auch an den beiden Endankern.
///
/// Invarianten nach jeder mutierenden Operation:
/// - `points.len() == 3·curve_count + 1` mit `curve_count >= 1`
/// - `modes.len() == curve_count + 1`
/// - Nicht-freie innere Gelenke erfüllen die Mirrored/Aligned-Beziehung exakt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierSpline {
    /// Kontrollpunkte (Anker und Handles, siehe Index-Layout oben)
    points: Vec<Vec3>,
    /// Kontinuitätsmodi, ein Eintrag pro Anker
    modes: Vec<ControlPointMode>,
}

impl BezierSpline {
    /// Erstellt die Standard-Spline: ein Segment aus vier kollinearen
    /// Punkten auf der X-Achse, beide Endmodi `Free`.
    pub fn new() -> Self {
        Self {
            points: vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
                Vec3::new(4.0, 0.0, 0.0),
            ],
            modes: vec![ControlPointMode::Free, ControlPointMode::Free],
        }
    }

    /// Setzt die Spline auf die Standard-Spline zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Erstellt eine Spline aus den beiden vom Host persistierten Arrays.
    ///
    /// Prüft nur die strukturellen Invarianten (Längen); die Handle-Geometrie
    /// des Hosts wird unverändert übernommen.
    pub fn from_parts(points: Vec<Vec3>, modes: Vec<ControlPointMode>) -> Result<Self> {
        let spline = Self { points, modes };
        spline.validate()?;
        Ok(spline)
    }

    /// Zerlegt die Spline in die beiden persistierten Arrays.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<ControlPointMode>) {
        (self.points, self.modes)
    }

    /// Prüft die strukturellen Invarianten, z.B. nach Deserialisierung.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.points.len() >= 4 && (self.points.len() - 1) % 3 == 0,
            "Punktzahl {} entspricht nicht 3·K+1 mit K >= 1",
            self.points.len()
        );
        ensure!(
            self.modes.len() == self.curve_count() + 1,
            "Modus-Anzahl {} passt nicht zu {} Segmenten (erwartet {})",
            self.modes.len(),
            self.curve_count(),
            self.curve_count() + 1
        );
        Ok(())
    }

    /// Gibt die Anzahl der Segmente zurück
    pub fn curve_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück
    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    /// Kontrollpunkte als Slice (read-only), z.B. für Gizmo-Rendering im Host
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Kontinuitätsmodi als Slice (read-only)
    pub fn modes(&self) -> &[ControlPointMode] {
        &self.modes
    }

    /// Liest einen Kontrollpunkt
    pub fn control_point(&self, index: usize) -> Result<Vec3> {
        ensure!(
            index < self.points.len(),
            "Punkt-Index {} außerhalb [0, {})",
            index,
            self.points.len()
        );
        Ok(self.points[index])
    }

    /// Setzt einen Kontrollpunkt und stellt die Kontinuität wieder her.
    ///
    /// Beim Verschieben eines Ankers wandern beide benachbarten Handles
    /// (sofern vorhanden) starr mit, damit die lokale Segmentform erhalten
    /// bleibt. Anschließend wird der Modus des betroffenen Gelenks
    /// durchgesetzt.
    pub fn set_control_point(&mut self, index: usize, position: Vec3) -> Result<()> {
        ensure!(
            index < self.points.len(),
            "Punkt-Index {} außerhalb [0, {})",
            index,
            self.points.len()
        );

        if is_anchor(index) {
            let delta = position - self.points[index];
            if index > 0 {
                self.points[index - 1] += delta;
            }
            if index + 1 < self.points.len() {
                self.points[index + 1] += delta;
            }
        }

        self.points[index] = position;
        self.enforce_mode(index);
        self.debug_validate();
        Ok(())
    }

    /// Liest den Kontinuitätsmodus des Gelenks, zu dem der Punkt gehört
    pub fn control_point_mode(&self, index: usize) -> Result<ControlPointMode> {
        ensure!(
            index < self.points.len(),
            "Punkt-Index {} außerhalb [0, {})",
            index,
            self.points.len()
        );
        Ok(self.modes[mode_index_of(index)])
    }

    /// Setzt den Kontinuitätsmodus des Gelenks und setzt ihn sofort durch
    pub fn set_control_point_mode(&mut self, index: usize, mode: ControlPointMode) -> Result<()> {
        ensure!(
            index < self.points.len(),
            "Punkt-Index {} außerhalb [0, {})",
            index,
            self.points.len()
        );
        self.modes[mode_index_of(index)] = mode;
        self.enforce_mode(index);
        self.debug_validate();
        Ok(())
    }

    /// Hängt ein Segment an: drei neue Punkte, die das Ende mit
    /// Einheits-Schritten entlang der X-Achse fortsetzen, plus ein Modus.
    ///
    /// Der neue Modus erbt den bisherigen End-Modus, danach wird die
    /// Kontinuität am neu entstandenen inneren Gelenk hergestellt.
    pub fn add_curve(&mut self) {
        let mut point = self.points[self.points.len() - 1];
        point.x += 1.0;
        self.points.push(point);
        point.x += 1.0;
        self.points.push(point);
        point.x += 1.0;
        self.points.push(point);

        let last_mode = self.modes[self.modes.len() - 1];
        self.modes.push(last_mode);

        self.enforce_mode(self.points.len() - 4);
        self.debug_validate();

        log::debug!(
            "Segment angehängt: {} Segmente, {} Kontrollpunkte",
            self.curve_count(),
            self.control_point_count()
        );
    }

    /// Stellt den Kontinuitätsmodus rund um das Gelenk des editierten
    /// Punkts wieder her.
    ///
    /// Die zuletzt editierte Seite ist die Referenz; die Gegenseite wird
    /// angepasst. `Free` und die beiden Endgelenke erzwingen nichts (dort
    /// fehlt die Gegenseite).
    fn enforce_mode(&mut self, index: usize) {
        let mode_index = mode_index_of(index);
        let mode = self.modes[mode_index];

        if mode == ControlPointMode::Free || mode_index == 0 || mode_index == self.modes.len() - 1 {
            return;
        }

        let middle_index = anchor_index_of(mode_index);
        let (fixed_index, enforced_index) = if index <= middle_index {
            (middle_index - 1, middle_index + 1)
        } else {
            (middle_index + 1, middle_index - 1)
        };

        let middle = self.points[middle_index];
        let mut tangent = middle - self.points[fixed_index];
        if mode == ControlPointMode::Aligned {
            // Richtung von der Referenzseite übernehmen, eigene Länge behalten
            let enforced_length = middle.distance(self.points[enforced_index]);
            tangent = tangent.normalize_or_zero() * enforced_length;
        }

        self.points[enforced_index] = middle + tangent;

        log::trace!(
            "Kontinuität am Gelenk {} erzwungen: Punkt {} folgt Punkt {}",
            mode_index,
            enforced_index,
            fixed_index
        );
    }

    /// Bestimmt für einen globalen Parameter t den Punkt-Offset des
    /// Segments und den lokalen Parameter u.
    fn locate_segment(&self, t: f32) -> (usize, f32) {
        if t >= 1.0 {
            (self.points.len() - 4, 1.0)
        } else {
            let scaled = t.clamp(0.0, 1.0) * self.curve_count() as f32;
            let segment = scaled.floor() as usize;
            (segment * 3, scaled - segment as f32)
        }
    }

    /// Position auf der Spline bei t ∈ [0, 1], abgebildet in den Welt-Raum.
    ///
    /// t wird geklemmt; t = 1 wählt das letzte Segment mit u = 1.
    pub fn position_at(&self, t: f32, transform: &impl LocalToWorld) -> Vec3 {
        let (i, u) = self.locate_segment(t);
        let local = cubic_bezier_point(
            self.points[i],
            self.points[i + 1],
            self.points[i + 2],
            self.points[i + 3],
            u,
        );
        transform.transform_point(local)
    }

    /// Erste Ableitung (Geschwindigkeit) bei t ∈ [0, 1] im Welt-Raum.
    ///
    /// Als Richtungsgröße wird nur Rotation/Skalierung der Abbildung
    /// angewendet, die Translation hebt sich auf.
    pub fn velocity_at(&self, t: f32, transform: &impl LocalToWorld) -> Vec3 {
        let (i, u) = self.locate_segment(t);
        let local = cubic_bezier_derivative(
            self.points[i],
            self.points[i + 1],
            self.points[i + 2],
            self.points[i + 3],
            u,
        );
        transform.transform_vector(local)
    }

    /// Normierte Geschwindigkeit bei t ∈ [0, 1].
    ///
    /// Ist die Geschwindigkeit exakt null (z.B. drei zusammenfallende
    /// Kontrollpunkte), wird der Nullvektor zurückgegeben — nie NaN.
    pub fn direction_at(&self, t: f32, transform: &impl LocalToWorld) -> Vec3 {
        self.velocity_at(t, transform).normalize_or_zero()
    }

    /// Tastet die gesamte Kette gleichmäßig im Parameterraum ab
    /// (Endpunkt inklusive), z.B. für eine Render-Polyline im Host.
    ///
    /// Keine Arc-Length-Verteilung: die Abstände folgen der
    /// Parametrisierung, nicht der Bogenlänge.
    pub fn sample_positions(
        &self,
        samples_per_curve: usize,
        transform: &impl LocalToWorld,
    ) -> Vec<Vec3> {
        let total = self.curve_count() * samples_per_curve.max(1);
        let mut result = Vec::with_capacity(total + 1);
        for i in 0..=total {
            let t = i as f32 / total as f32;
            result.push(self.position_at(t, transform));
        }
        result
    }

    /// Strukturelle Invarianten, in Debug-Builds nach jeder Mutation geprüft.
    fn debug_validate(&self) {
        debug_assert!(
            self.points.len() >= 4 && (self.points.len() - 1) % 3 == 0,
            "Punktzahl {} verletzt 3·K+1",
            self.points.len()
        );
        debug_assert_eq!(
            self.modes.len(),
            self.curve_count() + 1,
            "Modus-Anzahl passt nicht zur Segment-Anzahl"
        );
    }
}

impl Default for BezierSpline {
    fn default() -> Self {
        Self::new()
    }
}
