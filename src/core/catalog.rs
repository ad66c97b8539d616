//! Statischer Bahnhofs-Katalog und Berechnung der sichtbaren Menge.
//!
//! Der Katalog wird einmal beim Prozessstart angelegt und danach nie
//! verändert. Referenzdaten: 10 große Endbahnhöfe und 5 Knotenbahnhöfe
//! des indischen Netzes; reguläre Bahnhöfe sind noch nicht erfasst.

use super::layers::LayerVisibility;
use super::station::{Station, StationCategory};

/// Der feste Referenz-Katalog in Anzeige-Reihenfolge
/// (erst Major, dann Junction).
const ALL_STATIONS: &[Station] = &[
    Station {
        id: "NDLS",
        name: "New Delhi",
        lat: 28.6429,
        lng: 77.2197,
        category: StationCategory::Major,
        zone: "Northern Railway",
        platforms: Some(16),
        facilities: &["WiFi", "Food Plaza", "Retiring Rooms", "Escalators"],
    },
    Station {
        id: "CSTM",
        name: "Chhatrapati Shivaji Terminus",
        lat: 18.9398,
        lng: 72.8355,
        category: StationCategory::Major,
        zone: "Central Railway",
        platforms: Some(18),
        facilities: &["WiFi", "Food Plaza", "Heritage Building"],
    },
    Station {
        id: "HWH",
        name: "Howrah Junction",
        lat: 22.5854,
        lng: 88.3457,
        category: StationCategory::Major,
        zone: "Eastern Railway",
        platforms: Some(23),
        facilities: &["WiFi", "Food Plaza", "Retiring Rooms"],
    },
    Station {
        id: "MAS",
        name: "Chennai Central",
        lat: 13.0827,
        lng: 80.2707,
        category: StationCategory::Major,
        zone: "Southern Railway",
        platforms: Some(17),
        facilities: &["WiFi", "Food Plaza", "Escalators"],
    },
    Station {
        id: "SBC",
        name: "Bengaluru City",
        lat: 12.9716,
        lng: 77.5946,
        category: StationCategory::Major,
        zone: "South Western Railway",
        platforms: Some(10),
        facilities: &["WiFi", "Food Plaza"],
    },
    Station {
        id: "ADI",
        name: "Ahmedabad Junction",
        lat: 23.0225,
        lng: 72.5714,
        category: StationCategory::Major,
        zone: "Western Railway",
        platforms: Some(12),
        facilities: &["WiFi", "Retiring Rooms"],
    },
    Station {
        id: "JP",
        name: "Jaipur Junction",
        lat: 26.9124,
        lng: 75.7873,
        category: StationCategory::Major,
        zone: "North Western Railway",
        platforms: Some(8),
        facilities: &["WiFi", "Food Plaza"],
    },
    Station {
        id: "BZA",
        name: "Vijayawada Junction",
        lat: 16.5062,
        lng: 80.6480,
        category: StationCategory::Major,
        zone: "South Central Railway",
        platforms: Some(10),
        facilities: &["WiFi", "Retiring Rooms"],
    },
    Station {
        id: "PNBE",
        name: "Patna Junction",
        lat: 25.5941,
        lng: 85.1376,
        category: StationCategory::Major,
        zone: "East Central Railway",
        platforms: Some(10),
        facilities: &["WiFi", "Food Plaza"],
    },
    Station {
        id: "GUV",
        name: "Guwahati",
        lat: 26.1445,
        lng: 91.7362,
        category: StationCategory::Major,
        zone: "Northeast Frontier Railway",
        platforms: Some(7),
        facilities: &["WiFi"],
    },
    Station {
        id: "BPL",
        name: "Bhopal Junction",
        lat: 23.2599,
        lng: 77.4126,
        category: StationCategory::Junction,
        zone: "West Central Railway",
        platforms: Some(6),
        facilities: &[],
    },
    Station {
        id: "JUC",
        name: "Jalandhar City",
        lat: 31.3260,
        lng: 75.5762,
        category: StationCategory::Junction,
        zone: "Northern Railway",
        platforms: None,
        facilities: &[],
    },
    Station {
        id: "JBP",
        name: "Jabalpur",
        lat: 23.1815,
        lng: 79.9864,
        category: StationCategory::Junction,
        zone: "West Central Railway",
        platforms: Some(6),
        facilities: &[],
    },
    Station {
        id: "NGP",
        name: "Nagpur",
        lat: 21.1458,
        lng: 79.0882,
        category: StationCategory::Junction,
        zone: "Central Railway",
        platforms: Some(8),
        facilities: &[],
    },
    Station {
        id: "ITJ",
        name: "Itarsi Junction",
        lat: 22.6145,
        lng: 77.7639,
        category: StationCategory::Junction,
        zone: "West Central Railway",
        platforms: None,
        facilities: &[],
    },
];

/// Gibt den vollständigen Katalog in fester Reihenfolge zurück.
pub fn all_stations() -> &'static [Station] {
    ALL_STATIONS
}

/// Sucht einen Bahnhof per Code.
pub fn station_by_id(id: &str) -> Option<&'static Station> {
    ALL_STATIONS.iter().find(|s| s.id == id)
}

/// Berechnet die sichtbare Menge: alle Bahnhöfe, deren Kategorie-Layer
/// aktuell eingeschaltet ist. Marker-Ebene und Status-Leiste konsumieren
/// beide diese eine Funktion, damit Zählung und Darstellung nicht
/// auseinanderlaufen können.
pub fn visible_stations(layers: &LayerVisibility) -> impl Iterator<Item = &'static Station> + '_ {
    ALL_STATIONS
        .iter()
        .filter(|station| layers.get(station.category.layer_key()))
}

/// Anzahl der aktuell sichtbaren Bahnhöfe.
pub fn visible_station_count(layers: &LayerVisibility) -> usize {
    visible_stations(layers).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayerKey;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = all_stations().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), all_stations().len());
    }

    #[test]
    fn test_catalog_reference_counts() {
        let majors = all_stations()
            .iter()
            .filter(|s| s.category == StationCategory::Major)
            .count();
        let junctions = all_stations()
            .iter()
            .filter(|s| s.category == StationCategory::Junction)
            .count();
        let regulars = all_stations()
            .iter()
            .filter(|s| s.category == StationCategory::Regular)
            .count();

        assert_eq!(majors, 10);
        assert_eq!(junctions, 5);
        assert_eq!(regulars, 0);
    }

    #[test]
    fn test_catalog_coordinates_lie_within_india() {
        for station in all_stations() {
            assert!(
                (6.0..=38.0).contains(&station.lat),
                "{}: Breitengrad {} ausserhalb Indiens",
                station.id,
                station.lat
            );
            assert!(
                (68.0..=98.0).contains(&station.lng),
                "{}: Laengengrad {} ausserhalb Indiens",
                station.id,
                station.lng
            );
        }
    }

    #[test]
    fn test_default_layers_show_fifteen_stations() {
        let layers = LayerVisibility::new();
        assert_eq!(visible_station_count(&layers), 15);
    }

    #[test]
    fn test_toggling_regular_layer_without_members_keeps_count() {
        let mut layers = LayerVisibility::new();
        assert_eq!(visible_station_count(&layers), 15);

        // Der Regular-Layer hat im Referenz-Katalog keine Mitglieder.
        layers.set(LayerKey::RegularStations, true);
        assert_eq!(visible_station_count(&layers), 15);
    }

    #[test]
    fn test_toggle_off_and_on_restores_identical_visible_set() {
        let mut layers = LayerVisibility::new();
        let before: HashSet<_> = visible_stations(&layers).map(|s| s.id).collect();

        layers.set(LayerKey::JunctionStations, false);
        let reduced: HashSet<_> = visible_stations(&layers).map(|s| s.id).collect();
        assert_eq!(reduced.len(), 10);
        assert!(reduced.iter().all(|id| before.contains(id)));

        layers.set(LayerKey::JunctionStations, true);
        let after: HashSet<_> = visible_stations(&layers).map(|s| s.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_restored_set_is_independent_of_other_toggle_order() {
        let mut layers = LayerVisibility::new();

        // Andere Layer in beliebiger Reihenfolge schalten, dann
        // Junction aus und wieder ein: Menge muss identisch bleiben.
        layers.set(LayerKey::Trains, true);
        layers.set(LayerKey::Boundaries, true);
        layers.set(LayerKey::JunctionStations, false);
        layers.set(LayerKey::Trains, false);
        layers.set(LayerKey::JunctionStations, true);

        let after: HashSet<_> = visible_stations(&layers).map(|s| s.id).collect();
        let expected: HashSet<_> = visible_stations(&LayerVisibility::new())
            .map(|s| s.id)
            .collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_overlay_layers_contribute_no_stations() {
        let mut layers = LayerVisibility::new();
        layers.set(LayerKey::MajorStations, false);
        layers.set(LayerKey::JunctionStations, false);
        layers.set(LayerKey::RailwayTracks, true);
        layers.set(LayerKey::Trains, true);
        layers.set(LayerKey::Boundaries, true);

        assert_eq!(visible_station_count(&layers), 0);
    }

    #[test]
    fn test_station_by_id_finds_ndls() {
        use approx::assert_relative_eq;

        let station = station_by_id("NDLS").expect("NDLS muss im Katalog stehen");
        assert_eq!(station.name, "New Delhi");
        assert_eq!(station.category, StationCategory::Major);
        assert_relative_eq!(station.lat, 28.6429);
        assert_relative_eq!(station.lng, 77.2197);
    }

    #[test]
    fn test_station_by_id_unknown_code_returns_none() {
        assert!(station_by_id("XXXX").is_none());
    }
}
