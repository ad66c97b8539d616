//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, StatusSnapshot};
use crate::map::{OSM_ATTRIBUTION, OSM_ATTRIBUTION_URL};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let snapshot = StatusSnapshot::capture(state);

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if snapshot.online {
                ui.label(
                    egui::RichText::new("⚡ Online").color(egui::Color32::from_rgb(22, 163, 74)),
                );
            } else {
                ui.label(
                    egui::RichText::new("⚡ Offline").color(egui::Color32::from_rgb(220, 38, 38)),
                );
            }

            ui.separator();

            ui.label(format!(
                "Updated {}",
                snapshot.last_updated.format("%H:%M:%S")
            ));

            ui.separator();

            ui.label(format!("📍 {} stations", snapshot.visible_stations));

            ui.separator();

            ui.label(format!("🚆 {} trains", snapshot.trains));

            ui.separator();

            ui.label(format!("Zoom: {:.0}", snapshot.zoom));

            // Tile-Attribution (Pflichtangabe, rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.hyperlink_to(OSM_ATTRIBUTION, OSM_ATTRIBUTION_URL);
            });
        });
    });
}
