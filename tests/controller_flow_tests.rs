use chrono::{Local, TimeZone};
use std::collections::HashSet;

use indrail_vision::{
    station_by_id, visible_stations, AppCommand, AppController, AppIntent, AppState, LayerKey,
    StationCategory, StatusSnapshot, ZoomRequest,
};

fn visible_ids(state: &AppState) -> HashSet<&'static str> {
    visible_stations(&state.layers).map(|s| s.id).collect()
}

#[test]
fn test_layer_toggle_updates_exactly_one_key_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.layers;

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerToggled {
                key: LayerKey::Boundaries,
                visible: true,
            },
        )
        .expect("LayerToggled sollte ohne Fehler durchlaufen");

    assert!(state.layers.get(LayerKey::Boundaries));
    for key in LayerKey::ALL {
        if key != LayerKey::Boundaries {
            assert_eq!(state.layers.get(key), before.get(key));
        }
    }

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::SetLayerVisible { key, visible } => {
            assert_eq!(*key, LayerKey::Boundaries);
            assert!(*visible);
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_default_visible_count_is_majors_plus_junctions() {
    let state = AppState::new();

    // Referenz-Katalog: 10 Major + 5 Junction, Regular-Layer aus.
    assert_eq!(state.visible_station_count(), 15);
    assert_eq!(StatusSnapshot::capture(&state).visible_stations, 15);
}

#[test]
fn test_enabling_empty_regular_layer_keeps_visible_count() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerToggled {
                key: LayerKey::RegularStations,
                visible: true,
            },
        )
        .expect("LayerToggled sollte ohne Fehler durchlaufen");

    // Keine Regular-Stationen im Katalog: Anzahl bleibt 15.
    assert!(state.layers.get(LayerKey::RegularStations));
    assert_eq!(state.visible_station_count(), 15);
}

#[test]
fn test_toggle_off_and_on_restores_identical_marker_set() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = visible_ids(&state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerToggled {
                key: LayerKey::MajorStations,
                visible: false,
            },
        )
        .unwrap();

    let without_majors = visible_ids(&state);
    assert_eq!(without_majors.len(), 5);
    assert!(without_majors.iter().all(|id| before.contains(id)));

    // Andere Layer dazwischen schalten, Reihenfolge darf keine Rolle spielen.
    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerToggled {
                key: LayerKey::Trains,
                visible: true,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerToggled {
                key: LayerKey::MajorStations,
                visible: true,
            },
        )
        .unwrap();

    assert_eq!(visible_ids(&state), before);
}

#[test]
fn test_status_count_always_matches_visible_set() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let toggles = [
        (LayerKey::JunctionStations, false),
        (LayerKey::RegularStations, true),
        (LayerKey::MajorStations, false),
        (LayerKey::JunctionStations, true),
    ];

    for (key, visible) in toggles {
        controller
            .handle_intent(&mut state, AppIntent::LayerToggled { key, visible })
            .expect("LayerToggled sollte ohne Fehler durchlaufen");

        assert_eq!(
            StatusSnapshot::capture(&state).visible_stations,
            visible_ids(&state).len(),
            "Status-Zaehlung weicht nach Toggle {key:?} ab"
        );
    }
}

#[test]
fn test_station_pick_sets_selection_and_second_pick_replaces_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(state.selection.selected.is_none());

    let ndls = station_by_id("NDLS").expect("NDLS muss im Katalog stehen");
    controller
        .handle_intent(&mut state, AppIntent::StationPicked { station: ndls })
        .expect("StationPicked sollte ohne Fehler durchlaufen");

    let selected = state.selection.selected.expect("Auswahl muss gesetzt sein");
    assert_eq!(selected.id, "NDLS");
    assert_eq!(selected.category.label(), "Major Terminal");

    let bpl = station_by_id("BPL").expect("BPL muss im Katalog stehen");
    controller
        .handle_intent(&mut state, AppIntent::StationPicked { station: bpl })
        .expect("Zweiter Pick sollte ohne Fehler durchlaufen");

    // Die neue Auswahl ersetzt die alte vollständig.
    let selected = state.selection.selected.expect("Auswahl muss gesetzt sein");
    assert_eq!(selected.id, "BPL");
    assert_eq!(selected.category, StationCategory::Junction);
    assert_eq!(selected.category.label(), "Junction Station");
}

#[test]
fn test_clear_selection_returns_to_placeholder_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let station = station_by_id("MAS").unwrap();
    controller
        .handle_intent(&mut state, AppIntent::StationPicked { station })
        .unwrap();
    assert!(state.selection.selected.is_some());

    controller
        .handle_intent(&mut state, AppIntent::SelectionCleared)
        .expect("SelectionCleared sollte ohne Fehler durchlaufen");

    assert!(state.selection.selected.is_none());
}

#[test]
fn test_hiding_a_layer_does_not_clear_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let station = station_by_id("HWH").unwrap();
    controller
        .handle_intent(&mut state, AppIntent::StationPicked { station })
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerToggled {
                key: LayerKey::MajorStations,
                visible: false,
            },
        )
        .unwrap();

    // Auswahl wird nur explizit aufgehoben.
    assert_eq!(state.selection.selected.map(|s| s.id), Some("HWH"));
}

#[test]
fn test_connectivity_transitions_are_reflected_immediately() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Start: offline, bis der Monitor meldet.
    assert!(!StatusSnapshot::capture(&state).online);

    controller
        .handle_intent(&mut state, AppIntent::ConnectivityChanged { online: true })
        .expect("ConnectivityChanged sollte ohne Fehler durchlaufen");
    assert!(StatusSnapshot::capture(&state).online);

    controller
        .handle_intent(&mut state, AppIntent::ConnectivityChanged { online: false })
        .expect("ConnectivityChanged sollte ohne Fehler durchlaufen");
    assert!(!StatusSnapshot::capture(&state).online);
}

#[test]
fn test_refresh_tick_updates_last_updated_timestamp() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let at = Local.with_ymd_and_hms(2026, 8, 6, 14, 30, 0).unwrap();
    controller
        .handle_intent(&mut state, AppIntent::RefreshTicked { at })
        .expect("RefreshTicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.status.last_updated, at);
    assert_eq!(StatusSnapshot::capture(&state).last_updated, at);
}

#[test]
fn test_map_view_change_mirrors_zoom_into_status() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::MapViewChanged { zoom: 7.0 })
        .expect("MapViewChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.zoom, 7.0);
    assert_eq!(StatusSnapshot::capture(&state).zoom, 7.0);
}

#[test]
fn test_zoom_request_is_parked_for_the_host_loop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomInRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.pending_zoom, Some(ZoomRequest::In));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_options_dialog_open_and_close() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .unwrap();
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .unwrap();
    assert!(!state.show_options_dialog);
}

#[test]
fn test_trains_layer_is_a_no_op_overlay() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerToggled {
                key: LayerKey::Trains,
                visible: true,
            },
        )
        .unwrap();

    // Zug-Layer hat keine Daten: Zustand schaltbar, Anzeige unverändert.
    assert!(state.layers.get(LayerKey::Trains));
    let snapshot = StatusSnapshot::capture(&state);
    assert_eq!(snapshot.trains, 0);
    assert_eq!(snapshot.visible_stations, 15);
}
