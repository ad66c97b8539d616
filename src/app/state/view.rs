//! View-bezogener Anwendungszustand.
//!
//! Pan und Zoom gehören dem Karten-Widget (`walkers::MapMemory`);
//! der State spiegelt nur die Zoomstufe für die Status-Leiste und
//! trägt angeforderte Zoom-Änderungen, die der Host-Loop nach dem
//! Frame auf das Widget anwendet.

use crate::shared::options::MAP_DEFAULT_ZOOM;

/// Vom Menü angeforderte Zoom-Änderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomRequest {
    /// Eine Stufe hineinzoomen
    In,
    /// Eine Stufe herauszoomen
    Out,
    /// Zurück auf Startposition und Start-Zoom
    Reset,
}

/// View-Zustand: gespiegelte Zoomstufe und offene Zoom-Anforderung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Aktuelle Zoomstufe der Karte (gespiegelt aus `MapMemory`)
    pub zoom: f64,
    /// Noch nicht angewandte Zoom-Anforderung aus dem Menü
    pub pending_zoom: Option<ZoomRequest>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            zoom: MAP_DEFAULT_ZOOM,
            pending_zoom: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
