//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::ZoomRequest;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::LayerToggled { key, visible } => {
            vec![AppCommand::SetLayerVisible { key, visible }]
        }
        AppIntent::StationPicked { station } => vec![AppCommand::SelectStation { station }],
        AppIntent::SelectionCleared => vec![AppCommand::ClearSelection],
        AppIntent::RefreshTicked { at } => vec![AppCommand::UpdateLastRefresh { at }],
        AppIntent::ConnectivityChanged { online } => vec![AppCommand::SetConnectivity { online }],
        AppIntent::MapViewChanged { zoom } => vec![AppCommand::SetZoomLevel { zoom }],
        AppIntent::ZoomInRequested => vec![AppCommand::RequestZoom {
            request: ZoomRequest::In,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::RequestZoom {
            request: ZoomRequest::Out,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::RequestZoom {
            request: ZoomRequest::Reset,
        }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
