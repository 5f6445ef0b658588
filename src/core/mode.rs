//! Kontinuitätsmodi der Gelenke und die Index-Zuordnung Punkt ⇄ Gelenk.

use serde::{Deserialize, Serialize};

/// Kontinuitätsmodus eines Ankers
///
/// Bestimmt, wie die beiden Handles eines inneren Gelenks zueinander
/// stehen. An den beiden Endankern wird der Modus gespeichert, hat aber
/// keine Wirkung (die Gegenseite fehlt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlPointMode {
    /// Beide Handles bewegen sich unabhängig
    #[default]
    Free,
    /// Handles kollinear durch den Anker, eigene Länge bleibt erhalten
    Aligned,
    /// Handles punktgespiegelt am Anker (gleiche Länge, Gegenrichtung)
    Mirrored,
}

/// Gelenk-Index (Modus-Index) für einen Punkt-Index: ⌊(p+1)/3⌋
///
/// Zuordnungstabelle für eine Spline mit 3 Segmenten:
/// ```text
/// 0 1 | 2 3 4 | 5 6 7 | 8 9   Punkt-Index
/// 0 0 | 1 1 1 | 2 2 2 | 3 3   Gelenk-Index
/// ```
pub fn mode_index_of(point_index: usize) -> usize {
    (point_index + 1) / 3
}

/// Anker-Punkt-Index für einen Gelenk-Index: 3·m
pub fn anchor_index_of(mode_index: usize) -> usize {
    mode_index * 3
}

/// Prüft ob ein Punkt-Index ein Anker (auf der Kurve) ist
pub fn is_anchor(point_index: usize) -> bool {
    point_index % 3 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_index_zuordnungstabelle() {
        // Entspricht der Tabelle im Doc-Kommentar
        let expected = [0, 0, 1, 1, 1, 2, 2, 2, 3, 3];
        for (point_index, &mode_index) in expected.iter().enumerate() {
            assert_eq!(
                mode_index_of(point_index),
                mode_index,
                "Punkt {} muss zu Gelenk {} gehören",
                point_index,
                mode_index
            );
        }
    }

    #[test]
    fn test_anchor_index_roundtrip() {
        for mode_index in 0..8 {
            assert_eq!(mode_index_of(anchor_index_of(mode_index)), mode_index);
        }
    }

    #[test]
    fn test_is_anchor_pattern() {
        assert!(is_anchor(0));
        assert!(!is_anchor(1));
        assert!(!is_anchor(2));
        assert!(is_anchor(3));
        assert!(is_anchor(6));
        assert!(!is_anchor(7));
    }

    #[test]
    fn test_default_modus_ist_free() {
        assert_eq!(ControlPointMode::default(), ControlPointMode::Free);
    }
}
