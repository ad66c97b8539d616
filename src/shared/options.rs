//! Zentrale Konfiguration für das IndRail-Vision-Dashboard.
//!
//! `DashboardOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Layer-Sichtbarkeiten werden bewusst NICHT persistiert.

use serde::{Deserialize, Serialize};

use crate::core::StationCategory;

// ── Karte ───────────────────────────────────────────────────────────

/// Geographischer Mittelpunkt Indiens (Startposition der Karte).
pub const MAP_CENTER_LAT: f64 = 20.5937;
/// Geographischer Mittelpunkt Indiens (Startposition der Karte).
pub const MAP_CENTER_LNG: f64 = 78.9629;
/// Start-Zoomstufe (ganz Indien im Bild).
pub const MAP_DEFAULT_ZOOM: f64 = 5.0;
/// Zoom-Schritt bei Menü-Buttons / Shortcuts.
pub const MAP_ZOOM_STEP: f64 = 1.0;
/// Tile-URL-Vorlage mit `{z}/{x}/{y}`-Platzhaltern.
pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

// ── Marker ──────────────────────────────────────────────────────────

/// Marker-Radius in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 6.0;
/// Breite des weißen Marker-Umrisses in Pixeln.
pub const MARKER_OUTLINE_PX: f32 = 2.0;
/// Farbe für Major-Terminals (RGBA: Signal-Rot).
pub const MARKER_COLOR_MAJOR: [f32; 4] = [0.863, 0.149, 0.149, 1.0];
/// Farbe für Junction-Bahnhöfe (RGBA: Eisenbahn-Blau).
pub const MARKER_COLOR_JUNCTION: [f32; 4] = [0.145, 0.388, 0.922, 1.0];
/// Farbe für reguläre Bahnhöfe (RGBA: Signal-Grün).
pub const MARKER_COLOR_REGULAR: [f32; 4] = [0.086, 0.639, 0.290, 1.0];

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius für Marker-Klicks in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 12.0;

// ── Status & Netz ───────────────────────────────────────────────────

/// Intervall des Aktualisierungs-Ticks in Sekunden.
pub const REFRESH_INTERVAL_SECS: u64 = 30;
/// Host für die Erreichbarkeits-Probe (TCP-Connect).
pub const CONNECTIVITY_PROBE_HOST: &str = "tile.openstreetmap.org:443";
/// Intervall der Erreichbarkeits-Probe in Sekunden.
pub const CONNECTIVITY_PROBE_INTERVAL_SECS: u64 = 5;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Dashboard-Optionen.
/// Wird als `indrail_vision.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Radius in Screen-Pixeln
    pub marker_radius_px: f32,
    /// Breite des Marker-Umrisses in Pixeln
    pub marker_outline_px: f32,
    /// Farbe für Major-Terminals (RGBA)
    pub marker_color_major: [f32; 4],
    /// Farbe für Junction-Bahnhöfe (RGBA)
    pub marker_color_junction: [f32; 4],
    /// Farbe für reguläre Bahnhöfe (RGBA)
    pub marker_color_regular: [f32; 4],

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Marker-Klicks in Screen-Pixeln
    pub selection_pick_radius_px: f32,

    // ── Karte ───────────────────────────────────────────────────
    /// Tile-URL-Vorlage mit `{z}/{x}/{y}`-Platzhaltern
    pub tile_url_template: String,
    /// Startposition der Karte: Breitengrad
    pub map_center_lat: f64,
    /// Startposition der Karte: Längengrad
    pub map_center_lng: f64,
    /// Start-Zoomstufe
    pub default_zoom: f64,

    // ── Status & Netz ───────────────────────────────────────────
    /// Intervall des Aktualisierungs-Ticks in Sekunden
    pub refresh_interval_secs: u64,
    /// Host für die Erreichbarkeits-Probe
    pub probe_host: String,
    /// Intervall der Erreichbarkeits-Probe in Sekunden
    #[serde(default = "default_probe_interval_secs")]
    pub probe_interval_secs: u64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            marker_radius_px: MARKER_RADIUS_PX,
            marker_outline_px: MARKER_OUTLINE_PX,
            marker_color_major: MARKER_COLOR_MAJOR,
            marker_color_junction: MARKER_COLOR_JUNCTION,
            marker_color_regular: MARKER_COLOR_REGULAR,

            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,

            tile_url_template: TILE_URL_TEMPLATE.to_string(),
            map_center_lat: MAP_CENTER_LAT,
            map_center_lng: MAP_CENTER_LNG,
            default_zoom: MAP_DEFAULT_ZOOM,

            refresh_interval_secs: REFRESH_INTERVAL_SECS,
            probe_host: CONNECTIVITY_PROBE_HOST.to_string(),
            probe_interval_secs: CONNECTIVITY_PROBE_INTERVAL_SECS,
        }
    }
}

/// Serde-Default für `probe_interval_secs` (Abwärtskompatibilität
/// bestehender TOML-Dateien).
fn default_probe_interval_secs() -> u64 {
    CONNECTIVITY_PROBE_INTERVAL_SECS
}

impl DashboardOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("indrail_vision"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("indrail_vision.toml")
    }

    /// Marker-Farbe für eine Kategorie. Eine Tabelle für Karte UND
    /// Detail-Badge, damit beide nicht auseinanderlaufen.
    pub fn marker_color(&self, category: StationCategory) -> [f32; 4] {
        match category {
            StationCategory::Major => self.marker_color_major,
            StationCategory::Junction => self.marker_color_junction,
            StationCategory::Regular => self.marker_color_regular,
        }
    }

    /// Intervall des Aktualisierungs-Ticks.
    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.refresh_interval_secs.max(1))
    }

    /// Intervall der Erreichbarkeits-Probe.
    pub fn probe_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.probe_interval_secs.max(1))
    }
}
