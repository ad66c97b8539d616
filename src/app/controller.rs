//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Layer ===
            AppCommand::SetLayerVisible { key, visible } => {
                handlers::layers::set_layer_visible(state, key, visible)
            }

            // === Selektion ===
            AppCommand::SelectStation { station } => {
                handlers::selection::select_station(state, station)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Status ===
            AppCommand::UpdateLastRefresh { at } => {
                handlers::status::update_last_refresh(state, at)
            }
            AppCommand::SetConnectivity { online } => {
                handlers::status::set_connectivity(state, online)
            }

            // === View ===
            AppCommand::SetZoomLevel { zoom } => handlers::view::set_zoom_level(state, zoom),
            AppCommand::RequestZoom { request } => handlers::view::request_zoom(state, request),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
