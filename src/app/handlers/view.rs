//! Handler für View-Zustand (Zoom-Spiegel und Zoom-Anforderungen).

use crate::app::state::ZoomRequest;
use crate::app::AppState;

/// Übernimmt die vom Karten-Widget gemeldete Zoomstufe.
pub fn set_zoom_level(state: &mut AppState, zoom: f64) {
    state.view.zoom = zoom;
}

/// Merkt eine Zoom-Änderung vor; der Host-Loop wendet sie nach dem
/// Frame auf das Karten-Widget an.
pub fn request_zoom(state: &mut AppState, request: ZoomRequest) {
    state.view.pending_zoom = Some(request);
}
