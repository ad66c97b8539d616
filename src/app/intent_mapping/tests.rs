use crate::app::state::ZoomRequest;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::LayerKey;

use super::map_intent_to_commands;

#[test]
fn layer_toggled_maps_to_set_layer_visible() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::LayerToggled {
            key: LayerKey::RegularStations,
            visible: true,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetLayerVisible {
            key: LayerKey::RegularStations,
            visible: true
        }
    ));
}

#[test]
fn station_picked_maps_to_select_station() {
    let state = AppState::new();
    let station = crate::core::station_by_id("NDLS").unwrap();

    let commands = map_intent_to_commands(&state, AppIntent::StationPicked { station });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SelectStation { station: s } if s.id == "NDLS"
    ));
}

#[test]
fn zoom_intents_map_to_zoom_requests() {
    let state = AppState::new();

    let zoom_in = map_intent_to_commands(&state, AppIntent::ZoomInRequested);
    assert!(matches!(
        zoom_in[0],
        AppCommand::RequestZoom {
            request: ZoomRequest::In
        }
    ));

    let reset = map_intent_to_commands(&state, AppIntent::ResetViewRequested);
    assert!(matches!(
        reset[0],
        AppCommand::RequestZoom {
            request: ZoomRequest::Reset
        }
    ));
}

#[test]
fn connectivity_changed_maps_to_set_connectivity() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ConnectivityChanged { online: true });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetConnectivity { online: true }
    ));
}
