//! Core-Domänentypen: Bahnhofs-Katalog, Kategorien, Layer-Sichtbarkeit.

pub mod catalog;
pub mod layers;
pub mod station;

pub use catalog::{all_stations, station_by_id, visible_station_count, visible_stations};
pub use layers::{LayerGroup, LayerKey, LayerKeyParseError, LayerVisibility};
pub use station::{Station, StationCategory};
