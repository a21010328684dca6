//! End-to-end scenarios through a live session: gestures mutate the state and
//! every effective mutation lands on the (mocked) remote store

mod scenarii;

use chalkplan::dragdrop::{DragPayload, DropTarget};
use chalkplan::mock_behaviour::MockBehaviour;
use chalkplan::session::PlannerSession;

#[tokio::test]
async fn a_session_starts_from_whatever_the_provider_finds() {
    let _ = env_logger::builder().is_test(true).try_init();

    let state = scenarii::sample_state();
    let rig = scenarii::rig_with_remote_state(&state);
    let session = PlannerSession::open(rig.provider).await;
    assert_eq!(session.state(), &state);
}

#[tokio::test]
async fn adding_a_subject_saves_the_whole_state() {
    let _ = env_logger::builder().is_test(true).try_init();

    let rig = scenarii::rig();
    let mut session = PlannerSession::open(rig.provider).await;
    let id = session.add_subject(&scenarii::form("Math")).await.unwrap();
    assert_eq!(id, "1");

    // Reloading pulls what the save pushed to the remote store
    session.reload().await;
    assert_eq!(session.state().subjects().len(), 1);
    assert_eq!(session.state().subjects()[0].title(), "Math");
}

#[tokio::test]
async fn the_palette_to_cell_scenario_round_trips_to_the_store() {
    let _ = env_logger::builder().is_test(true).try_init();

    let rig = scenarii::rig();
    let mut session = PlannerSession::open(rig.provider).await;

    let id = session.add_subject(&scenarii::form("Math")).await.unwrap();
    let subject = session.state().subject(&id).unwrap().clone();
    let placed = session.handle_drop(
        DragPayload::FromPalette { subject },
        DropTarget::Cell("2024-05-10".to_string()),
    ).await;
    assert!(placed);

    // Reloading pulls the saved copy back from the remote store
    session.reload().await;
    assert_eq!(session.state().activities_on("2024-05-10")[0].title(), "Math");

    // Removing the subject cascades, prunes the date, and saves again
    assert!(session.remove_subject(&id).await);
    session.reload().await;
    assert!(session.state().is_empty());
}

#[tokio::test]
async fn invalid_forms_mutate_and_save_nothing() {
    let _ = env_logger::builder().is_test(true).try_init();

    let rig = scenarii::rig();
    let mut session = PlannerSession::open(rig.provider).await;

    let mut form = scenarii::form("Math");
    form.level.clear();
    assert!(session.add_subject(&form).await.is_err());
    assert!(session.state().is_empty());

    session.reload().await;
    assert!(session.state().is_empty());
}

#[tokio::test]
async fn drag_out_deletion_reaches_the_store() {
    let _ = env_logger::builder().is_test(true).try_init();

    let rig = scenarii::rig();
    let mut session = PlannerSession::open(rig.provider).await;

    let id = session.add_subject(&scenarii::form("Math")).await.unwrap();
    let subject = session.state().subject(&id).unwrap().clone();
    session.handle_drop(
        DragPayload::FromPalette { subject },
        DropTarget::Cell("2024-05-10".to_string()),
    ).await;

    let activity = session.state().activities_on("2024-05-10")[0].clone();
    assert!(session.handle_drop(
        DragPayload::FromCell { date: "2024-05-10".to_string(), activity },
        DropTarget::Outside,
    ).await);

    session.reload().await;
    assert!(session.state().activities().is_empty());
    assert_eq!(session.state().subjects().len(), 1);
}

#[tokio::test]
async fn clearing_a_month_leaves_other_months_alone() {
    let _ = env_logger::builder().is_test(true).try_init();

    let rig = scenarii::rig();
    let mut session = PlannerSession::open(rig.provider).await;

    let id = session.add_subject(&scenarii::form("Math")).await.unwrap();
    let subject = session.state().subject(&id).unwrap().clone();
    for date in &["2024-05-10", "2024-05-25", "2024-06-01"] {
        session.handle_drop(
            DragPayload::FromPalette { subject: subject.clone() },
            DropTarget::Cell(date.to_string()),
        ).await;
    }

    assert_eq!(session.clear_month(2024, 5).await, 2);
    session.reload().await;
    let dates: Vec<&String> = session.state().activities().keys().collect();
    assert_eq!(dates, vec!["2024-06-01"]);

    // Clearing an untouched month changes (and saves) nothing
    assert_eq!(session.clear_month(2024, 5).await, 0);
}

#[tokio::test]
async fn a_session_survives_a_dead_store() {
    let _ = env_logger::builder().is_test(true).try_init();

    let rig = scenarii::rig();
    *rig.mock.lock().unwrap() = MockBehaviour::fail_now(10);

    // Open falls back to empty; mutations still apply locally, saves are dropped
    let mut session = PlannerSession::open(rig.provider).await;
    assert!(session.state().is_empty());

    let id = session.add_subject(&scenarii::form("Math")).await.unwrap();
    let subject = session.state().subject(&id).unwrap().clone();
    session.handle_drop(
        DragPayload::FromPalette { subject },
        DropTarget::Cell("2024-05-10".to_string()),
    ).await;
    assert_eq!(session.state().activities_on("2024-05-10").len(), 1);
}

#[tokio::test]
async fn duplicate_drops_do_not_double_place() {
    let _ = env_logger::builder().is_test(true).try_init();

    let rig = scenarii::rig();
    let mut session = PlannerSession::open(rig.provider).await;

    let id = session.add_subject(&scenarii::form("Math")).await.unwrap();
    let subject = session.state().subject(&id).unwrap().clone();
    let payload = DragPayload::FromPalette { subject };

    assert!(session.handle_drop(payload.clone(), DropTarget::Cell("2024-05-10".to_string())).await);
    assert!(session.handle_drop(payload, DropTarget::Cell("2024-05-10".to_string())).await == false);
    assert_eq!(session.state().activities_on("2024-05-10").len(), 1);
}
