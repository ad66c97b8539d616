//! Netzübersichts-Karte in der Seitenleiste (statische Kennzahlen).

/// Kennzahlen des Gesamtnetzes; unabhängig vom Karten-Katalog.
const NETWORK_FACTS: [(&str, &str); 4] = [
    ("4000+", "Total Stations"),
    ("18", "Railway Zones"),
    ("68000+", "Route KMs"),
    ("13000+", "Daily Trains"),
];

/// Rendert die Übersichts-Karte. Reine Projektion, keine Events.
pub fn render_overview(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new("📍 Network Overview").strong());
        ui.add_space(4.0);

        egui::Grid::new("network_overview_grid")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for chunk in NETWORK_FACTS.chunks(2) {
                    for (value, caption) in chunk {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(*value).heading());
                            ui.label(egui::RichText::new(*caption).small().weak());
                        });
                    }
                    ui.end_row();
                }
            });
    });
}
