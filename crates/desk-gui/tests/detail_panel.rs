//! Behavioral tests for the user detail panel lifecycle.
//!
//! These drive `App::update` directly with messages, the same way the Iced
//! runtime does, and assert on the resulting state. Returned tasks are
//! dropped - the lookups they would spawn are simulated by feeding
//! `DetailMessage::Loaded` by hand, which also lets the tests control
//! settlement order.

use desk_client::PortalClient;
use desk_gui::app::App;
use desk_gui::message::{ComposeMessage, DetailMessage, DirectoryMessage, Message};
use desk_gui::state::{ComposeNotice, DetailContent, RosterState, Settings};
use desk_model::{UserId, UserRecord, UserSummary};

fn app() -> App {
    let client = PortalClient::new("http://localhost:8000").expect("client");
    let (app, _startup) = App::new(Settings::default(), client);
    app
}

fn uid(value: &str) -> UserId {
    UserId::from(value)
}

fn active_record(id: &str, username: &str) -> UserRecord {
    UserRecord {
        id: Some(uid(id)),
        username: Some(username.to_string()),
        email: Some(format!("{username}@example.com")),
        is_active: true,
        ..UserRecord::default()
    }
}

fn open(app: &mut App, id: &str) {
    let _ = app.update(Message::Detail(DetailMessage::Open(uid(id))));
}

fn settle(app: &mut App, id: &str, result: Result<UserRecord, String>) {
    let _ = app.update(Message::Detail(DetailMessage::Loaded {
        user_id: uid(id),
        result,
    }));
}

fn close(app: &mut App) {
    let _ = app.update(Message::Detail(DetailMessage::Close));
}

#[test]
fn open_shows_panel_before_lookup_settles() {
    let mut app = app();

    open(&mut app, "7");

    assert!(app.state.detail.open);
    assert_eq!(app.state.detail.content, DetailContent::Loading);
    assert_eq!(app.state.compose.receiver, None);
    assert!(!app.state.compose.hidden);
}

#[test]
fn last_open_wins_regardless_of_settlement_order() {
    let mut app = app();

    open(&mut app, "a");
    open(&mut app, "b");

    // The first lookup settles after the second open: dropped.
    settle(&mut app, "a", Ok(active_record("a", "alice")));
    assert_eq!(app.state.detail.content, DetailContent::Loading);
    assert_eq!(app.state.compose.receiver, None);

    // The current target's lookup settles: rendered.
    settle(&mut app, "b", Ok(active_record("b", "bob")));
    match &app.state.detail.content {
        DetailContent::Loaded(record) => {
            assert_eq!(record.username.as_deref(), Some("bob"));
        }
        other => panic!("expected loaded record, got {other:?}"),
    }
    assert_eq!(app.state.compose.receiver, Some(uid("b")));
}

#[test]
fn late_result_for_previous_target_cannot_overwrite_rendered_one() {
    let mut app = app();

    open(&mut app, "a");
    open(&mut app, "b");

    // Reverse order: b settles first, then a trickles in.
    settle(&mut app, "b", Ok(active_record("b", "bob")));
    settle(&mut app, "a", Ok(active_record("a", "alice")));

    match &app.state.detail.content {
        DetailContent::Loaded(record) => {
            assert_eq!(record.username.as_deref(), Some("bob"));
        }
        other => panic!("expected loaded record, got {other:?}"),
    }
    assert_eq!(app.state.compose.receiver, Some(uid("b")));
}

#[test]
fn stale_error_result_is_also_dropped() {
    let mut app = app();

    open(&mut app, "a");
    open(&mut app, "b");

    settle(&mut app, "a", Err("boom".to_string()));

    assert_eq!(app.state.detail.content, DetailContent::Loading);
    assert!(!app.state.compose.hidden);
}

#[test]
fn result_settling_after_close_is_dropped() {
    let mut app = app();

    open(&mut app, "7");
    close(&mut app);
    settle(&mut app, "7", Ok(active_record("7", "jdoe")));

    assert!(!app.state.detail.open);
    assert_eq!(app.state.detail.content, DetailContent::Empty);
    assert_eq!(app.state.compose.receiver, None);
}

#[test]
fn failed_lookup_hides_form_and_clears_receiver() {
    let mut app = app();

    open(&mut app, "7");
    settle(&mut app, "7", Err("unreachable".to_string()));

    assert_eq!(app.state.detail.content, DetailContent::Failed);
    assert_eq!(app.state.compose.receiver, None);
    assert!(app.state.compose.hidden);
}

#[test]
fn inactive_record_shows_only_unavailable() {
    let mut app = app();

    // The flags disagree on purpose: the explicit unavailability signal wins
    // even when the record claims to be active and carries display fields.
    let mut record = active_record("7", "jdoe");
    record.inactive = true;

    open(&mut app, "7");
    settle(&mut app, "7", Ok(record));

    assert_eq!(app.state.detail.content, DetailContent::Unavailable);
    assert_eq!(app.state.compose.receiver, None);
    assert!(app.state.compose.hidden);
}

#[test]
fn active_record_renders_and_gates_receiver_in() {
    let mut app = app();

    open(&mut app, "7");
    settle(&mut app, "7", Ok(active_record("7", "jdoe")));

    match &app.state.detail.content {
        DetailContent::Loaded(record) => {
            assert_eq!(record.username.as_deref(), Some("jdoe"));
            assert_eq!(record.status_label(), "Active");
        }
        other => panic!("expected loaded record, got {other:?}"),
    }
    assert_eq!(app.state.compose.receiver, Some(uid("7")));
    assert!(!app.state.compose.hidden);
}

#[test]
fn inactive_status_label_does_not_affect_the_gate() {
    let mut app = app();

    // `is_active: false` without the `inactive` flag: label only.
    let mut record = active_record("7", "jdoe");
    record.is_active = false;

    open(&mut app, "7");
    settle(&mut app, "7", Ok(record));

    match &app.state.detail.content {
        DetailContent::Loaded(record) => assert_eq!(record.status_label(), "Inactive"),
        other => panic!("expected loaded record, got {other:?}"),
    }
    assert_eq!(app.state.compose.receiver, Some(uid("7")));
    assert!(!app.state.compose.hidden);
}

#[test]
fn record_without_id_is_a_load_failure() {
    let mut app = app();

    let record = UserRecord {
        username: Some("jdoe".to_string()),
        is_active: true,
        ..UserRecord::default()
    };

    open(&mut app, "7");
    settle(&mut app, "7", Ok(record));

    assert_eq!(app.state.detail.content, DetailContent::Failed);
    assert_eq!(app.state.compose.receiver, None);
    assert!(app.state.compose.hidden);
}

#[test]
fn close_resets_panel_and_restores_form_from_any_state() {
    // From a rendered record.
    {
        let mut app = app();
        open(&mut app, "7");
        settle(&mut app, "7", Ok(active_record("7", "jdoe")));
        close(&mut app);
        assert!(!app.state.detail.open);
        assert_eq!(app.state.detail.content, DetailContent::Empty);
        assert_eq!(app.state.detail.target, None);
        assert_eq!(app.state.compose.receiver, None);
        assert!(!app.state.compose.hidden);
    }

    // From a failed lookup, where the form was hidden.
    let mut app = app();
    open(&mut app, "7");
    settle(&mut app, "7", Err("boom".to_string()));
    assert!(app.state.compose.hidden);
    close(&mut app);
    assert!(!app.state.detail.open);
    assert_eq!(app.state.detail.content, DetailContent::Empty);
    assert_eq!(app.state.compose.receiver, None);
    assert!(!app.state.compose.hidden);
}

#[test]
fn close_is_idempotent() {
    let mut app = app();

    open(&mut app, "7");
    settle(&mut app, "7", Ok(active_record("7", "jdoe")));

    close(&mut app);
    let detail_after_one = app.state.detail.clone();
    let compose_after_one = app.state.compose.clone();

    close(&mut app);
    assert_eq!(app.state.detail, detail_after_one);
    assert_eq!(app.state.compose, compose_after_one);
}

#[test]
fn reopening_never_reuses_the_previous_receiver() {
    let mut app = app();

    open(&mut app, "7");
    settle(&mut app, "7", Ok(active_record("7", "jdoe")));
    assert_eq!(app.state.compose.receiver, Some(uid("7")));

    // New open: receiver must be gone while the new lookup is pending.
    open(&mut app, "8");
    assert_eq!(app.state.detail.content, DetailContent::Loading);
    assert_eq!(app.state.compose.receiver, None);
    assert!(!app.state.compose.hidden);
}

#[test]
fn submit_is_rejected_without_a_receiver() {
    let mut app = app();

    let _ = app.update(Message::Compose(ComposeMessage::BodyChanged(
        "hello".to_string(),
    )));
    let _ = app.update(Message::Compose(ComposeMessage::Submit));

    assert!(!app.state.compose.sending);
}

#[test]
fn submit_round_trip_clears_draft_on_success() {
    let mut app = app();

    open(&mut app, "7");
    settle(&mut app, "7", Ok(active_record("7", "jdoe")));

    let _ = app.update(Message::Compose(ComposeMessage::SubjectChanged(
        "Hi".to_string(),
    )));
    let _ = app.update(Message::Compose(ComposeMessage::BodyChanged(
        "hello there".to_string(),
    )));
    let _ = app.update(Message::Compose(ComposeMessage::Submit));
    assert!(app.state.compose.sending);

    let _ = app.update(Message::Compose(ComposeMessage::SubmitComplete(Ok(()))));
    assert!(!app.state.compose.sending);
    assert_eq!(app.state.compose.notice, Some(ComposeNotice::Sent));
    assert!(app.state.compose.subject.is_empty());
    assert!(app.state.compose.body.is_empty());
}

#[test]
fn submit_failure_keeps_draft_and_reports() {
    let mut app = app();

    open(&mut app, "7");
    settle(&mut app, "7", Ok(active_record("7", "jdoe")));

    let _ = app.update(Message::Compose(ComposeMessage::BodyChanged(
        "hello there".to_string(),
    )));
    let _ = app.update(Message::Compose(ComposeMessage::Submit));
    let _ = app.update(Message::Compose(ComposeMessage::SubmitComplete(Err(
        "Could not reach the server.".to_string(),
    ))));

    assert!(!app.state.compose.sending);
    assert_eq!(
        app.state.compose.notice,
        Some(ComposeNotice::Failed("Could not reach the server.".to_string()))
    );
    assert_eq!(app.state.compose.body, "hello there");
}

#[test]
fn roster_transitions() {
    let mut app = app();
    assert!(matches!(app.state.roster, RosterState::Loading));

    let users = vec![UserSummary {
        id: uid("7"),
        username: "jdoe".to_string(),
        is_active: true,
    }];
    let _ = app.update(Message::Directory(DirectoryMessage::Loaded(Ok(
        users.clone()
    ))));
    assert!(matches!(&app.state.roster, RosterState::Loaded(u) if u == &users));

    let _ = app.update(Message::Directory(DirectoryMessage::Loaded(Err(
        "Could not reach the server.".to_string(),
    ))));
    assert!(matches!(&app.state.roster, RosterState::Failed(_)));

    let _ = app.update(Message::Directory(DirectoryMessage::Refresh));
    assert!(matches!(app.state.roster, RosterState::Loading));
}
