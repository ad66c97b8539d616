//! Detail-Panel für die ausgewählte Station.

use crate::app::{AppIntent, AppState};
use crate::core::Station;

/// Rendert das Stations-Detail-Panel in die Seitenleiste und gibt
/// erzeugte Events zurück.
pub fn render_station_info(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        match state.selection.selected {
            None => render_placeholder(ui),
            Some(station) => {
                if let Some(event) = render_details(ui, state, station) {
                    events.push(event);
                }
            }
        }
    });

    events
}

/// Leerer Zustand: keine Station ausgewählt.
fn render_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("📍").size(28.0));
        ui.label(egui::RichText::new("Click on a station to view details").weak());
        ui.add_space(24.0);
    });
}

/// Attribute der ausgewählten Station. Reine Projektion; die Auswahl
/// selbst wird hier nie verändert, nur ein Clear-Event gemeldet.
fn render_details(
    ui: &mut egui::Ui,
    state: &AppState,
    station: &'static Station,
) -> Option<AppIntent> {
    let mut event = None;

    ui.horizontal(|ui| {
        ui.heading(station.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Clear selection").clicked() {
                event = Some(AppIntent::SelectionCleared);
            }
        });
    });
    ui.label(
        egui::RichText::new(format!("Station Code: {}", station.id))
            .small()
            .weak(),
    );

    ui.add_space(4.0);
    category_badge(ui, state, station);
    ui.add_space(4.0);

    ui.label(format!("🚆 {}", station.zone));
    if let Some(platforms) = station.platforms {
        ui.label(format!("🚉 {} Platforms", platforms));
    }
    ui.label("🕓 24/7 Operations");

    if !station.facilities.is_empty() {
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Facilities").small().strong());
        ui.horizontal_wrapped(|ui| {
            for facility in station.facilities {
                ui.label(
                    egui::RichText::new(*facility)
                        .small()
                        .background_color(ui.visuals().faint_bg_color),
                );
            }
        });
    }

    event
}

/// Kategorie-Badge in der Marker-Farbe der Kategorie.
fn category_badge(ui: &mut egui::Ui, state: &AppState, station: &Station) {
    let color = state.options.marker_color(station.category);
    let fill = egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    );
    ui.label(
        egui::RichText::new(station.category.label())
            .small()
            .color(egui::Color32::WHITE)
            .background_color(fill),
    );
}
