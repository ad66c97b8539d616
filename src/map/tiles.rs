//! Raster-Tile-Quelle für das Karten-Widget.

use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

/// Attributions-Text, der über der Karte angezeigt werden muss.
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";
/// Lizenz-Link zur Attribution.
pub const OSM_ATTRIBUTION_URL: &str = "https://www.openstreetmap.org/copyright";

/// Tile-Quelle mit konfigurierbarer `{z}/{x}/{y}`-URL-Vorlage.
///
/// Retry- und Platzhalter-Verhalten bei fehlgeschlagenen Tile-Downloads
/// liegt vollständig beim Widget; Fehler erreichen den Rest der
/// Anwendung nicht.
pub struct TemplateTileSource {
    url_template: String,
}

impl TemplateTileSource {
    /// Erstellt eine Tile-Quelle aus einer URL-Vorlage.
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    /// Setzt Zoom und Tile-Koordinaten in die Vorlage ein.
    fn fill_template(&self, tile_id: TileId) -> String {
        self.url_template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }
}

impl TileSource for TemplateTileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.fill_template(tile_id)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: OSM_ATTRIBUTION,
            url: OSM_ATTRIBUTION_URL,
            logo_light: None,
            logo_dark: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::TILE_URL_TEMPLATE;

    #[test]
    fn test_template_substitutes_all_placeholders() {
        let source = TemplateTileSource::new(TILE_URL_TEMPLATE);
        let url = source.fill_template(TileId {
            x: 23,
            y: 14,
            zoom: 5,
        });
        assert_eq!(url, "https://tile.openstreetmap.org/5/23/14.png");
    }

    #[test]
    fn test_template_without_placeholders_stays_unchanged() {
        let source = TemplateTileSource::new("https://example.org/fixed.png");
        let url = source.fill_template(TileId { x: 1, y: 2, zoom: 3 });
        assert_eq!(url, "https://example.org/fixed.png");
    }
}
