//! Karten-Ebene: Tile-Quelle und Marker-Plugin für das Walkers-Widget.

pub mod markers;
pub mod tiles;

pub use markers::StationMarkers;
pub use tiles::{TemplateTileSource, OSM_ATTRIBUTION, OSM_ATTRIBUTION_URL};
