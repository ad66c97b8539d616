//! Kopfzeile mit Produktname und Netz-Kurzstatus.

use crate::app::AppState;

/// Rendert die Kopfzeile. Reine Projektion, erzeugt keine Events.
pub fn render_header(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("🚆 IndRail Vision");
            ui.label(
                egui::RichText::new("Indian Railway Network Simulation")
                    .small()
                    .weak(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if state.status.online {
                    ui.label(
                        egui::RichText::new("Live Data").color(egui::Color32::from_rgb(22, 163, 74)),
                    );
                } else {
                    ui.label(
                        egui::RichText::new("Offline").color(egui::Color32::from_rgb(220, 38, 38)),
                    );
                }
                ui.separator();
                ui.label(format!(
                    "📍 {} Stations Visible",
                    state.visible_station_count()
                ));
            });
        });
    });
}
