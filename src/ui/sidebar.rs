//! Seitenleiste: Netzübersicht und Stations-Details.

use super::{overview, station_info};
use crate::app::{AppIntent, AppState};

/// Rendert die rechte Seitenleiste und gibt erzeugte Events zurück.
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("sidebar")
        .default_width(260.0)
        .min_width(220.0)
        .resizable(true)
        .show(ctx, |ui| {
            overview::render_overview(ui);
            ui.add_space(8.0);
            events.extend(station_info::render_station_info(ui, state));
        });

    events
}
