//! Handler für Layer-Sichtbarkeit.

use crate::app::AppState;
use crate::core::LayerKey;

/// Setzt die Sichtbarkeit genau eines Layers; alle anderen Layer
/// bleiben unverändert.
pub fn set_layer_visible(state: &mut AppState, key: LayerKey, visible: bool) {
    state.layers.set(key, visible);
    log::info!(
        "Layer {} -> {}, sichtbare Bahnhoefe: {}",
        key,
        if visible { "an" } else { "aus" },
        state.visible_station_count()
    );
}
