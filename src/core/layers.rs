//! Layer-Schlüssel und Layer-Sichtbarkeit.
//!
//! Die sechs Layer-Schlüssel sind als Enum fixiert: ein unbekannter
//! Schlüssel ist damit im Typsystem nicht darstellbar, und die
//! Sichtbarkeits-Struktur kann nie einen Teilzustand annehmen.
//! `InvalidKey` existiert nur noch an der einen Stelle, an der ein
//! Schlüssel als Text ankommt (`FromStr`, z.B. aus der Optionen-Datei).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Gruppierung der Layer im Control-Panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerGroup {
    /// Bahnhofs-Kategorien
    Stations,
    /// Strecken und Grenzen
    Infrastructure,
    /// Live-Daten (Zugbewegungen)
    LiveData,
}

impl LayerGroup {
    /// Alle Gruppen in Anzeige-Reihenfolge.
    pub const ALL: [LayerGroup; 3] = [
        LayerGroup::Stations,
        LayerGroup::Infrastructure,
        LayerGroup::LiveData,
    ];

    /// Überschrift der Gruppe im Control-Panel.
    pub fn label(self) -> &'static str {
        match self {
            LayerGroup::Stations => "Stations",
            LayerGroup::Infrastructure => "Infrastructure",
            LayerGroup::LiveData => "Live Data",
        }
    }
}

/// Die sechs festen Layer-Schlüssel der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKey {
    /// Große Endbahnhöfe
    MajorStations,
    /// Knotenbahnhöfe
    JunctionStations,
    /// Reguläre Bahnhöfe
    RegularStations,
    /// Strecken-Overlay (noch ohne Daten)
    RailwayTracks,
    /// Zugbewegungs-Overlay (noch ohne Daten)
    Trains,
    /// Staatsgrenzen-Overlay (noch ohne Daten)
    Boundaries,
}

impl LayerKey {
    /// Alle Schlüssel in Anzeige-Reihenfolge.
    pub const ALL: [LayerKey; 6] = [
        LayerKey::MajorStations,
        LayerKey::JunctionStations,
        LayerKey::RegularStations,
        LayerKey::RailwayTracks,
        LayerKey::Boundaries,
        LayerKey::Trains,
    ];

    /// Kanonischer Schlüsselname (identisch mit dem Namen in der
    /// Optionen-Datei).
    pub fn name(self) -> &'static str {
        match self {
            LayerKey::MajorStations => "majorStations",
            LayerKey::JunctionStations => "junctionStations",
            LayerKey::RegularStations => "regularStations",
            LayerKey::RailwayTracks => "railwayTracks",
            LayerKey::Trains => "trains",
            LayerKey::Boundaries => "boundaries",
        }
    }

    /// Anzeigename des Toggles im Control-Panel.
    pub fn label(self) -> &'static str {
        match self {
            LayerKey::MajorStations => "Major Terminals",
            LayerKey::JunctionStations => "Junction Stations",
            LayerKey::RegularStations => "Regular Stations",
            LayerKey::RailwayTracks => "Railway Tracks",
            LayerKey::Trains => "Train Movement",
            LayerKey::Boundaries => "State Boundaries",
        }
    }

    /// Gruppe, unter der der Toggle im Control-Panel erscheint.
    pub fn group(self) -> LayerGroup {
        match self {
            LayerKey::MajorStations | LayerKey::JunctionStations | LayerKey::RegularStations => {
                LayerGroup::Stations
            }
            LayerKey::RailwayTracks | LayerKey::Boundaries => LayerGroup::Infrastructure,
            LayerKey::Trains => LayerGroup::LiveData,
        }
    }
}

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fehler beim Parsen eines Layer-Schlüssels aus Text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unbekannter Layer-Schluessel: {0}")]
pub struct LayerKeyParseError(pub String);

impl FromStr for LayerKey {
    type Err = LayerKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayerKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| LayerKeyParseError(s.to_string()))
    }
}

/// Sichtbarkeit aller sechs Layer. Gehört exklusiv dem `AppState`
/// und wird nur über `AppCommand::SetLayerVisible` mutiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    /// Große Endbahnhöfe anzeigen
    pub major_stations: bool,
    /// Knotenbahnhöfe anzeigen
    pub junction_stations: bool,
    /// Reguläre Bahnhöfe anzeigen
    pub regular_stations: bool,
    /// Strecken-Overlay anzeigen
    pub railway_tracks: bool,
    /// Zugbewegungs-Overlay anzeigen
    pub trains: bool,
    /// Staatsgrenzen-Overlay anzeigen
    pub boundaries: bool,
}

impl LayerVisibility {
    /// Startzustand: Major- und Junction-Bahnhöfe an, alles andere aus.
    pub fn new() -> Self {
        Self {
            major_stations: true,
            junction_stations: true,
            regular_stations: false,
            railway_tracks: false,
            trains: false,
            boundaries: false,
        }
    }

    /// Liest die Sichtbarkeit eines Layers.
    pub fn get(&self, key: LayerKey) -> bool {
        match key {
            LayerKey::MajorStations => self.major_stations,
            LayerKey::JunctionStations => self.junction_stations,
            LayerKey::RegularStations => self.regular_stations,
            LayerKey::RailwayTracks => self.railway_tracks,
            LayerKey::Trains => self.trains,
            LayerKey::Boundaries => self.boundaries,
        }
    }

    /// Setzt die Sichtbarkeit genau eines Layers; alle anderen
    /// Schlüssel bleiben unverändert.
    pub fn set(&mut self, key: LayerKey, visible: bool) {
        match key {
            LayerKey::MajorStations => self.major_stations = visible,
            LayerKey::JunctionStations => self.junction_stations = visible,
            LayerKey::RegularStations => self.regular_stations = visible,
            LayerKey::RailwayTracks => self.railway_tracks = visible,
            LayerKey::Trains => self.trains = visible,
            LayerKey::Boundaries => self.boundaries = visible,
        }
    }
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_defaults() {
        let layers = LayerVisibility::new();
        assert!(layers.get(LayerKey::MajorStations));
        assert!(layers.get(LayerKey::JunctionStations));
        assert!(!layers.get(LayerKey::RegularStations));
        assert!(!layers.get(LayerKey::RailwayTracks));
        assert!(!layers.get(LayerKey::Trains));
        assert!(!layers.get(LayerKey::Boundaries));
    }

    #[test]
    fn test_set_then_get_roundtrip_for_all_keys() {
        for key in LayerKey::ALL {
            for value in [true, false] {
                let mut layers = LayerVisibility::new();
                layers.set(key, value);
                assert_eq!(layers.get(key), value, "Schluessel {key} hat {value} verloren");
            }
        }
    }

    #[test]
    fn test_set_leaves_all_other_keys_unchanged() {
        for key in LayerKey::ALL {
            let before = LayerVisibility::new();
            let mut after = before;
            after.set(key, !before.get(key));

            for other in LayerKey::ALL {
                if other != key {
                    assert_eq!(
                        after.get(other),
                        before.get(other),
                        "set({key}) hat {other} veraendert"
                    );
                }
            }
        }
    }

    #[test]
    fn test_layer_key_from_str_accepts_all_canonical_names() {
        for key in LayerKey::ALL {
            assert_eq!(key.name().parse::<LayerKey>(), Ok(key));
        }
    }

    #[test]
    fn test_layer_key_from_str_rejects_unknown_names() {
        let err = "tramLines".parse::<LayerKey>().unwrap_err();
        assert_eq!(err, LayerKeyParseError("tramLines".to_string()));
    }

    #[test]
    fn test_every_key_belongs_to_exactly_one_group() {
        let mut counted = 0;
        for group in LayerGroup::ALL {
            counted += LayerKey::ALL
                .into_iter()
                .filter(|key| key.group() == group)
                .count();
        }
        assert_eq!(counted, LayerKey::ALL.len());
    }
}
