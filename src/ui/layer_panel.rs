//! Layer-Control-Panel: ein Toggle pro Layer-Schlüssel, gruppiert
//! nach Stations / Infrastructure / Live Data.
//!
//! Das Panel hält keinen eigenen Zustand; es spiegelt immer die
//! aktuelle `LayerVisibility` des Containers und meldet Umschaltungen
//! als Intents.

use crate::app::{AppIntent, AppState};
use crate::core::{LayerGroup, LayerKey};

/// Rendert das schwebende Layer-Panel über der Karte und gibt
/// erzeugte Events zurück.
pub fn render_layer_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Window::new("🗺 Map Layers")
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .collapsible(true)
        .resizable(false)
        .show(ctx, |ui| {
            for (i, group) in LayerGroup::ALL.into_iter().enumerate() {
                if i > 0 {
                    ui.separator();
                }
                ui.label(egui::RichText::new(group.label()).small().strong());

                for key in LayerKey::ALL {
                    if key.group() != group {
                        continue;
                    }

                    let mut visible = state.layers.get(key);
                    if ui.checkbox(&mut visible, key.label()).changed() {
                        events.push(AppIntent::LayerToggled { key, visible });
                    }
                }
            }
        });

    events
}
