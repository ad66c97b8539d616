//! Optionen-Dialog für Marker-Farben und Radien.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.collapsing("Marker", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.marker_radius_px)
                                .range(2.0..=20.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Outline (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.marker_outline_px)
                                .range(0.0..=6.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Major Terminals:", &mut opts.marker_color_major);
                changed |= color_edit(ui, "Junction Stations:", &mut opts.marker_color_junction);
                changed |= color_edit(ui, "Regular Stations:", &mut opts.marker_color_regular);
            });

            ui.collapsing("Selection", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Pick-Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.selection_pick_radius_px)
                                .range(4.0..=50.0)
                                .speed(0.5),
                        )
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
