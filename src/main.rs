//! IndRail Vision.
//!
//! Interaktives Karten-Dashboard für das indische Eisenbahnnetz:
//! OSM-Basemap (walkers) mit schaltbaren Stations-Layern, Status-Bar
//! und Detail-Panel.

use std::time::{Duration, Instant};

use eframe::egui;
use walkers::{lat_lon, HttpOptions, HttpTiles, Map, MapMemory};

use indrail_vision::shared::options::MAP_ZOOM_STEP;
use indrail_vision::{
    ui, AppController, AppIntent, AppState, DashboardOptions, NetworkMonitor, StationMarkers,
    TemplateTileSource, ZoomRequest,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("IndRail Vision v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("IndRail Vision"),
            ..Default::default()
        };

        eframe::run_native(
            "IndRail Vision",
            options,
            Box::new(|cc| Ok(Box::new(DashboardApp::new(&cc.egui_ctx)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DashboardApp {
    state: AppState,
    controller: AppController,
    tiles: HttpTiles,
    map_memory: MapMemory,
    /// Scoped-Ressource: Probe-Thread endet beim Drop
    monitor: NetworkMonitor,
    last_tick: Instant,
    /// Zuletzt als Intent gemeldeter Konnektivitäts-Zustand
    reported_online: Option<bool>,
}

impl DashboardApp {
    fn new(egui_ctx: &egui::Context) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DashboardOptions::config_path();
        let dashboard_options = DashboardOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = dashboard_options;

        let source = TemplateTileSource::new(state.options.tile_url_template.clone());
        let tiles = HttpTiles::with_options(source, HttpOptions::default(), egui_ctx.clone());

        let mut map_memory = MapMemory::default();
        if let Err(e) = map_memory.set_zoom(state.options.default_zoom) {
            log::warn!("Start-Zoom konnte nicht gesetzt werden: {:?}", e);
        }

        let monitor = NetworkMonitor::start(
            state.options.probe_host.clone(),
            state.options.probe_interval(),
        );

        Self {
            state,
            controller: AppController::new(),
            tiles,
            map_memory,
            monitor,
            last_tick: Instant::now(),
            reported_online: None,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);
        events.extend(self.collect_environment_events());

        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        self.sync_map_view();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl DashboardApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_header(ctx, &self.state);
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_sidebar(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let center = lat_lon(
                    self.state.options.map_center_lat,
                    self.state.options.map_center_lng,
                );

                let mut picked = None;
                let markers = StationMarkers {
                    layers: &self.state.layers,
                    options: &self.state.options,
                    selected: self.state.selection.selected,
                    zoom: self.state.view.zoom,
                    picked: &mut picked,
                };

                ui.add(
                    Map::new(Some(&mut self.tiles), &mut self.map_memory, center)
                        .with_plugin(markers),
                );

                if let Some(station) = picked {
                    events.push(AppIntent::StationPicked { station });
                }
            });

        // Layer-Panel schwebt über der Karte, daher nach dem CentralPanel
        events.extend(ui::render_layer_panel(ctx, &self.state));

        // Escape hebt die Auswahl auf
        if self.state.selection.selected.is_some()
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            events.push(AppIntent::SelectionCleared);
        }

        events
    }

    /// Sammelt Events aus Umgebung und Widget-Zustand: Zoom-Spiegel,
    /// Aktualisierungs-Tick und Konnektivitäts-Übergänge.
    fn collect_environment_events(&mut self) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let zoom = self.map_memory.zoom();
        if (zoom - self.state.view.zoom).abs() > f64::EPSILON {
            events.push(AppIntent::MapViewChanged { zoom });
        }

        if self.last_tick.elapsed() >= self.state.options.refresh_interval() {
            self.last_tick = Instant::now();
            events.push(AppIntent::RefreshTicked {
                at: chrono::Local::now(),
            });
        }

        let online = self.monitor.is_online();
        if self.reported_online != Some(online) {
            self.reported_online = Some(online);
            events.push(AppIntent::ConnectivityChanged { online });
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Wendet vorgemerkte Zoom-Anforderungen auf das Karten-Widget an.
    fn sync_map_view(&mut self) {
        let Some(request) = self.state.view.pending_zoom.take() else {
            return;
        };

        let result = match request {
            ZoomRequest::In => self.map_memory.set_zoom(self.map_memory.zoom() + MAP_ZOOM_STEP),
            ZoomRequest::Out => self.map_memory.set_zoom(self.map_memory.zoom() - MAP_ZOOM_STEP),
            ZoomRequest::Reset => {
                self.map_memory.follow_my_position();
                self.map_memory.set_zoom(self.state.options.default_zoom)
            }
        };

        if let Err(e) = result {
            log::debug!("Zoom-Anforderung ausserhalb des gueltigen Bereichs: {:?}", e);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }

        // Uhr, Tick und Konnektivität brauchen auch ohne Eingaben Frames.
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}
