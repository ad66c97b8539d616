//! UI-Komponenten: Menü, Kopfzeile, Layer-Panel, Seitenleiste,
//! Status-Bar und Options-Dialog.

pub mod header;
pub mod layer_panel;
pub mod menu;
pub mod options_dialog;
pub mod overview;
pub mod sidebar;
pub mod station_info;
pub mod status;

pub use header::render_header;
pub use layer_panel::render_layer_panel;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use sidebar::render_sidebar;
pub use status::render_status_bar;
