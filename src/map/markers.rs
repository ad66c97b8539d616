//! Marker-Ebene der Karte: zeichnet die sichtbare Bahnhofsmenge und
//! meldet Marker-Klicks als Auswahl.
//!
//! Die Ebene hält keinen eigenen Zustand: die Marker werden in jedem
//! Frame neu aus Katalog + Layer-Sichtbarkeit berechnet. Ein Layer-
//! Toggle entfernt bzw. ergänzt damit exakt die Marker seiner
//! Kategorie, und ein wieder eingeschalteter Layer stellt dieselbe
//! Menge im selben Stil wieder her.

use walkers::{lat_lon, MapMemory, Plugin, Projector};

use crate::core::{visible_stations, LayerVisibility, Station};
use crate::shared::DashboardOptions;

/// Ab dieser Zoomstufe werden Bahnhofs-Codes an die Marker geschrieben.
const CODE_LABEL_MIN_ZOOM: f64 = 6.0;

/// Walkers-Plugin für die Stations-Marker.
pub struct StationMarkers<'a> {
    /// Aktuelle Layer-Sichtbarkeit
    pub layers: &'a LayerVisibility,
    /// Laufzeit-Optionen (Farben, Radien)
    pub options: &'a DashboardOptions,
    /// Aktuell ausgewählte Station (vergrößerter Marker + Namensfahne)
    pub selected: Option<&'static Station>,
    /// Aktuelle Zoomstufe (für die Code-Beschriftung)
    pub zoom: f64,
    /// Ausgabe: in diesem Frame angeklickte Station
    pub picked: &'a mut Option<&'static Station>,
}

impl Plugin for StationMarkers<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let painter = ui.painter();

        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };

        // Nächstgelegener Marker innerhalb des Pick-Radius gewinnt.
        let mut best_pick: Option<(f32, &'static Station)> = None;

        for station in visible_stations(self.layers) {
            let projected = projector.project(lat_lon(station.lat, station.lng));
            let pos = egui::pos2(projected.x, projected.y);

            let is_selected = self.selected == Some(station);
            let radius = if is_selected {
                self.options.marker_radius_px * 1.4
            } else {
                self.options.marker_radius_px
            };

            let fill = color32(self.options.marker_color(station.category));
            painter.circle_filled(pos, radius, fill);
            painter.circle_stroke(
                pos,
                radius,
                egui::Stroke::new(self.options.marker_outline_px, egui::Color32::WHITE),
            );

            if is_selected {
                // Namensfahne über dem ausgewählten Marker
                painter.text(
                    pos + egui::vec2(0.0, -radius - 4.0),
                    egui::Align2::CENTER_BOTTOM,
                    station.name,
                    egui::FontId::proportional(12.0),
                    egui::Color32::WHITE,
                );
            } else if self.zoom >= CODE_LABEL_MIN_ZOOM {
                painter.text(
                    pos + egui::vec2(0.0, -radius - 2.0),
                    egui::Align2::CENTER_BOTTOM,
                    station.id,
                    egui::FontId::proportional(9.0),
                    egui::Color32::from_rgb(220, 220, 220),
                );
            }

            if let Some(click) = click_pos {
                let distance = click.distance(pos);
                let pick_radius = self.options.selection_pick_radius_px.max(radius);
                let closer = best_pick.map_or(true, |(best, _)| distance < best);
                if distance <= pick_radius && closer {
                    best_pick = Some((distance, station));
                }
            }
        }

        // Klick neben allen Markern lässt die Auswahl unangetastet.
        if let Some((_, station)) = best_pick {
            *self.picked = Some(station);
        }
    }
}

/// Konvertiert eine RGBA-Farbe aus den Optionen in `egui::Color32`.
fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
