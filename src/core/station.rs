//! Stations-Domänentypen: Kategorie und Stammdaten eines Bahnhofs.

use super::layers::LayerKey;

/// Kategorie eines Bahnhofs. Bestimmt Marker-Stil, Badge-Text und
/// den Layer, über den die Kategorie ein- und ausgeblendet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationCategory {
    /// Großer Endbahnhof / Terminal
    Major,
    /// Knotenbahnhof
    Junction,
    /// Regulärer Bahnhof
    Regular,
}

impl StationCategory {
    /// Alle Kategorien in Anzeige-Reihenfolge.
    pub const ALL: [StationCategory; 3] = [
        StationCategory::Major,
        StationCategory::Junction,
        StationCategory::Regular,
    ];

    /// Badge-Text für das Detail-Panel.
    pub fn label(self) -> &'static str {
        match self {
            StationCategory::Major => "Major Terminal",
            StationCategory::Junction => "Junction Station",
            StationCategory::Regular => "Regular Station",
        }
    }

    /// Layer-Schlüssel, der die Sichtbarkeit dieser Kategorie steuert.
    pub fn layer_key(self) -> LayerKey {
        match self {
            StationCategory::Major => LayerKey::MajorStations,
            StationCategory::Junction => LayerKey::JunctionStations,
            StationCategory::Regular => LayerKey::RegularStations,
        }
    }
}

/// Stammdaten eines Bahnhofs aus dem statischen Katalog.
/// Einträge sind unveränderlich und leben für die Prozess-Laufzeit.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Eindeutiger Bahnhofs-Code (z.B. "NDLS")
    pub id: &'static str,
    /// Anzeigename
    pub name: &'static str,
    /// Breitengrad (WGS84)
    pub lat: f64,
    /// Längengrad (WGS84)
    pub lng: f64,
    /// Kategorie (Major/Junction/Regular)
    pub category: StationCategory,
    /// Eisenbahn-Zone (z.B. "Northern Railway")
    pub zone: &'static str,
    /// Anzahl Bahnsteige (nicht für alle Bahnhöfe gepflegt)
    pub platforms: Option<u32>,
    /// Ausstattung; leere Liste = keine Angaben
    pub facilities: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayerKey;

    #[test]
    fn test_category_labels_match_detail_badges() {
        assert_eq!(StationCategory::Major.label(), "Major Terminal");
        assert_eq!(StationCategory::Junction.label(), "Junction Station");
        assert_eq!(StationCategory::Regular.label(), "Regular Station");
    }

    #[test]
    fn test_every_category_maps_to_a_station_layer() {
        // Jede Kategorie muss auf einen der drei Stations-Layer zeigen,
        // sonst wäre sie nie sichtbar schaltbar.
        for category in StationCategory::ALL {
            let key = category.layer_key();
            assert!(matches!(
                key,
                LayerKey::MajorStations | LayerKey::JunctionStations | LayerKey::RegularStations
            ));
        }
    }
}
