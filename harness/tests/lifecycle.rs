//! Full player lifecycle against the live mock server.
//!
//! Each test starts its own server instance on a random port, so tests run
//! in parallel with fully isolated state — the same way independent
//! scenarios each own their ledger in a real suite.

mod common;

use common::{client_for, start_server};
use player_harness::{
    data, transport::Transport, CleanupLedger, CreatePlayer, CreateVerifier, DeleteVerifier,
    GetAllVerifier, GetByIdVerifier, UpdatePlayer, UpdateVerifier,
};

#[test]
fn create_get_roundtrip_preserves_every_field() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let request = data::valid_player(client.config());
    let create = CreateVerifier::new(&client, &ledger, request.clone()).unwrap();
    create
        .verify_status_code()
        .verify_response_time()
        .verify_json_schema()
        .verify_created_player();

    let created = create.created_player().unwrap().clone();
    assert!(ledger.contains(created.id));

    GetByIdVerifier::new(&client, created.id)
        .unwrap()
        .verify_status_code()
        .verify_response_time()
        .verify_json_schema()
        .verify_retrieved_player_matches(&created);

    // Teardown sweep removes everything this scenario created.
    assert_eq!(ledger.sweep(&client, &client.config().supervisor_editor), 1);
    assert!(ledger.is_empty());
    GetByIdVerifier::expecting(&client, created.id, 404)
        .unwrap()
        .verify_player_not_found();
}

#[test]
fn literal_create_scenario() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let request = CreatePlayer {
        login: "u1".to_string(),
        password: Some("p1".to_string()),
        role: "user".to_string(),
        age: 30,
        gender: "MALE".to_string(),
        screen_name: "S1".to_string(),
    };
    let create = CreateVerifier::new(&client, &ledger, request).unwrap();
    create.verify_status_code_is(200).verify_created_player();

    let created = create.created_player().unwrap();
    assert!(created.id > 0);
    assert_eq!(created.login, "u1");
    assert_eq!(created.password.as_deref(), Some("p1"));
}

#[test]
#[should_panic(expected = "password")]
fn stale_password_expectation_is_reported() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let create = CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();
    let mut expected = create.created_player().unwrap().clone();
    expected.password = Some("not-the-stored-password".to_string());

    GetByIdVerifier::new(&client, expected.id)
        .unwrap()
        .verify_retrieved_player_matches(&expected);
}

#[test]
fn request_headers_reach_the_server() {
    let client = client_for(start_server());
    let transport = Transport::new(client.config());

    // The get endpoint only accepts JSON bodies, so a 200 here proves the
    // content-type header attached by the builder was transmitted.
    let request = client.build_get_by_id(1).unwrap();
    let response = transport.execute(&request).unwrap();
    assert_eq!(response.status, 200);
}

#[test]
fn delete_is_final() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let create = CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();
    let id = create.created_player().unwrap().id;

    DeleteVerifier::new(&client, &ledger, id)
        .unwrap()
        .verify_status_code()
        .verify_response_time()
        .verify_deleted_player();
    assert!(!ledger.contains(id));

    GetByIdVerifier::expecting(&client, id, 404)
        .unwrap()
        .verify_status_code()
        .verify_player_not_found();

    GetAllVerifier::new(&client)
        .unwrap()
        .verify_status_code()
        .verify_absent(id);
}

#[test]
fn partial_update_leaves_untouched_fields_alone() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let create = CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();
    let id = create.created_player().unwrap().id;

    let initial = GetByIdVerifier::new(&client, id)
        .unwrap()
        .verify_retrieved_player()
        .retrieved_player()
        .unwrap()
        .clone();

    let request = UpdatePlayer {
        screen_name: Some("NewName".to_string()),
        ..UpdatePlayer::default()
    };
    let update = UpdateVerifier::builder(&client, id, request)
        .initial_player(initial.clone())
        .issue()
        .unwrap();
    update
        .verify_status_code()
        .verify_response_time()
        .verify_json_schema()
        .verify_player_updated()
        .verify_partial_update_against_initial();

    let updated = update.updated_player().unwrap();
    assert_eq!(updated.screen_name, "NewName");
    assert_eq!(updated.login, initial.login);
    assert_eq!(updated.age, initial.age);
    // Update responses never leak the password.
    assert!(updated.password.is_none());
}

#[test]
fn random_field_subset_update_holds_the_partial_contract() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let create = CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();
    let id = create.created_player().unwrap().id;
    let initial = GetByIdVerifier::new(&client, id)
        .unwrap()
        .retrieved_player()
        .unwrap()
        .clone();

    let request = data::partial_update(client.config());
    UpdateVerifier::builder(&client, id, request)
        .initial_player(initial)
        .issue()
        .unwrap()
        .verify_status_code()
        .verify_player_updated()
        .verify_partial_update_against_initial();
}

#[test]
fn full_update_replaces_every_field() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let create = CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();
    let id = create.created_player().unwrap().id;

    let request = data::valid_update(client.config());
    UpdateVerifier::builder(&client, id, request)
        .issue()
        .unwrap()
        .verify_status_code()
        .verify_json_schema()
        .verify_player_updated();
}

#[test]
fn update_by_unknown_editor_is_rejected() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let create = CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();
    let id = create.created_player().unwrap().id;

    let request = UpdatePlayer {
        screen_name: Some("Hax".to_string()),
        ..UpdatePlayer::default()
    };
    let update = UpdateVerifier::builder(&client, id, request)
        .editor(&client.config().invalid_editor)
        .expected_status(403)
        .issue()
        .unwrap();
    update.verify_status_code().verify_player_updated();
    assert!(update.updated_player().is_none());
}

#[test]
fn admin_editor_can_create_players() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let admin = client.config().admin_editor.clone();
    let create =
        CreateVerifier::as_editor(&client, &ledger, data::valid_player(client.config()), &admin)
            .unwrap();
    create.verify_status_code().verify_created_player();
    assert_eq!(create.editor(), admin);
}

#[test]
fn create_with_invalid_editor_leaves_no_ledger_entry() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let invalid_editor = client.config().invalid_editor.clone();
    let create = CreateVerifier::expecting(
        &client,
        &ledger,
        data::valid_player(client.config()),
        &invalid_editor,
        403,
    )
    .unwrap();
    create.verify_status_code().verify_response_time();

    assert!(create.created_player().is_none());
    assert!(ledger.is_empty());
}

#[test]
fn refused_delete_keeps_the_player_tracked() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let create = CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();
    let id = create.created_player().unwrap().id;

    let invalid_editor = client.config().invalid_editor.clone();
    DeleteVerifier::expecting(&client, &ledger, id, &invalid_editor, 403)
        .unwrap()
        .verify_status_code();

    // The entry survives a refused delete so the sweep can still reach it.
    assert!(ledger.contains(id));
    assert_eq!(ledger.sweep(&client, &client.config().supervisor_editor), 1);
    assert!(ledger.is_empty());
}

#[test]
fn list_contains_baseline_and_new_players() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    GetAllVerifier::new(&client)
        .unwrap()
        .verify_status_code()
        .verify_response_time()
        .verify_json_schema()
        .verify_player_list_amount()
        .verify_mandatory_players();

    let create = CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();
    let created = create.created_player().unwrap().clone();

    GetAllVerifier::new(&client)
        .unwrap()
        .verify_contains(&created);
}

#[test]
fn list_is_idempotent_without_mutations() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    CreateVerifier::new(&client, &ledger, data::valid_player(client.config())).unwrap();

    let mut first = GetAllVerifier::new(&client).unwrap().player_ids();
    let mut second = GetAllVerifier::new(&client).unwrap().player_ids();
    first.sort_unstable();
    second.sort_unstable();
    assert_eq!(first, second);
}

#[test]
fn boundary_values_are_accepted() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let request = data::boundary_player(client.config());
    CreateVerifier::new(&client, &ledger, request)
        .unwrap()
        .verify_status_code()
        .verify_created_player();
}

#[test]
fn malformed_input_yields_client_error_not_server_error() {
    let client = client_for(start_server());
    let ledger = CleanupLedger::new();

    let supervisor = client.config().supervisor_editor.clone();
    let create = CreateVerifier::expecting(
        &client,
        &ledger,
        data::invalid_player(client.config()),
        &supervisor,
        400,
    )
    .unwrap();
    create.verify_status_code().verify_response_time();
    assert!(create.response().status < 500);
    assert!(ledger.is_empty());
}
