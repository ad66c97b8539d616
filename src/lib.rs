//! IndRail Vision Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod map;
pub mod net;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, SelectionState, StatusSnapshot, StatusState,
    ViewState, ZoomRequest,
};
pub use core::{
    all_stations, station_by_id, visible_station_count, visible_stations, LayerGroup, LayerKey,
    LayerKeyParseError, LayerVisibility, Station, StationCategory,
};
pub use map::{StationMarkers, TemplateTileSource};
pub use net::NetworkMonitor;
pub use shared::DashboardOptions;
