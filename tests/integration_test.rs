//! Integration tests for rowpick
//!
//! These tests drive a full `ListSession` against a scripted transport,
//! covering refresh, filtering, toggles, selection order and dispatch
//! end to end.

use rowpick::config::{AppConfig, ListingConfig};
use rowpick::listing::{EntryRegistry, clean};
use rowpick::remote::{MockTransport, RequestMethod};
use rowpick::selection::{RangeAnchor, SelectionMode, SelectionModel};
use rowpick::session::{ActionSpec, DispatchOutcome, EmptyInput, ListSession, SessionError};
use rowpick::toggles::ViewToggle;
use rowpick::ui::{MockClipboard, MockInput};

const EPISODES: &str = r#"
<div class="watched">A.mkv</div>
<div>[Group] B - 02 (1080p).mkv</div>
<div>C.mkv</div>
"#;

/// Helper function to create a loaded session over the given body
async fn loaded(body: &str) -> ListSession<MockTransport> {
    let mut session = ListSession::new(MockTransport::new().reply(200, body), "/list");
    session.refresh().await.unwrap();
    session
}

fn raw_labels(registry: &EntryRegistry) -> Vec<&str> {
    registry
        .entries()
        .iter()
        .map(|entry| entry.raw_label.as_str())
        .collect()
}

fn form(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[tokio::test]
async fn test_toggle_order_and_renumbering() {
    let mut session = loaded(EPISODES).await;
    assert_eq!(clean(&session.registry().entries()[1].raw_label), "B");

    let first = session.nth_visible(0).unwrap();
    let third = session.nth_visible(2).unwrap();
    session.toggle(first);
    session.toggle(third);

    let snapshot: Vec<&str> = session
        .snapshot()
        .iter()
        .map(|e| e.raw_label.as_str())
        .collect();
    assert_eq!(snapshot, vec!["A.mkv", "C.mkv"]);

    session.toggle(first);
    let third_entry = session.registry().get(third).unwrap();
    assert_eq!(third_entry.selection.position(), Some(1));
}

#[tokio::test]
async fn test_view_toggle_deselects_and_keeps_positions_dense() {
    let mut session = loaded(EPISODES).await;
    for n in 0..3 {
        let id = session.nth_visible(n).unwrap();
        session.toggle(id);
    }

    session.set_toggle("watched", true);

    let positions: Vec<Option<u32>> = session
        .registry()
        .entries()
        .iter()
        .map(|e| e.selection.position())
        .collect();
    assert_eq!(positions, vec![None, Some(1), Some(2)]);
    assert!(session.registry().selected().all(|e| e.is_visible()));
}

#[tokio::test]
async fn test_rejected_refresh_empties_registry_and_stales_ids() {
    let transport = MockTransport::new()
        .reply(200, EPISODES)
        .reply(500, "disk error");
    let mut session = ListSession::new(transport, "/list");
    session.refresh().await.unwrap();
    let stale = session.nth_visible(1).unwrap();

    let err = session.refresh().await.unwrap_err();

    assert!(matches!(err, SessionError::Rejected { status: 500, .. }));
    assert_eq!(err.to_string(), "disk error");
    assert!(session.registry().is_empty());

    assert!(!session.toggle(stale));
    assert!(!session.replace(stale));
    assert!(!session.range(stale));
    assert_eq!(session.registry().selected_count(), 0);
}

#[tokio::test]
async fn test_dispatch_without_selection_issues_no_request() {
    let mut session = loaded(EPISODES).await;
    let action = ActionSpec::new("play", "/play");

    let outcome = session
        .dispatch(&action, &MockInput::confirming(true))
        .await
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::NothingSelected);
    assert_eq!(session.transport().request_count(), 1);
}

#[tokio::test]
async fn test_filter_matches_case_insensitive_substring() {
    let mut session = loaded("<div>[GRP] show.mkv</div><div>other.mkv</div>").await;

    session.set_filter("grp");

    let visible: Vec<&str> = session
        .registry()
        .visible()
        .map(|e| e.raw_label.as_str())
        .collect();
    assert_eq!(visible, vec!["[GRP] show.mkv"]);
}

#[tokio::test]
async fn test_refresh_reapplies_filter_and_toggles() {
    let transport = MockTransport::new()
        .reply(200, EPISODES)
        .reply(200, r#"<div class="watched">c2.mkv</div><div>C3.mkv</div><div>D.mkv</div>"#);
    let mut session = ListSession::new(transport, "/list");
    session.refresh().await.unwrap();
    session.set_filter("c");
    session.set_toggle("watched", true);

    session.refresh().await.unwrap();

    assert_eq!(session.registry().generation(), 2);
    let visible: Vec<&str> = session
        .registry()
        .visible()
        .map(|e| e.raw_label.as_str())
        .collect();
    assert_eq!(visible, vec!["C3.mkv"]);
}

#[tokio::test]
async fn test_dispatch_payload_order_and_refresh() {
    let transport = MockTransport::new()
        .reply(200, EPISODES)
        .reply(200, "ok")
        .reply(200, "<div>E.mkv</div>");
    let mut session = ListSession::new(transport.clone(), "/files/list");
    session.refresh().await.unwrap();

    let c = session.nth_visible(2).unwrap();
    let b = session.nth_visible(1).unwrap();
    session.toggle(c);
    session.toggle(b);

    let mut action = ActionSpec::new("move", "/files/move");
    action.prompt = Some("Destination".into());
    action.refresh = true;
    action.extra.insert("mode".into(), "keep".into());

    let outcome = session
        .dispatch(&action, &MockInput::answering("Season 2"))
        .await
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::Sent { count: 2 });

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].method, RequestMethod::Post);
    assert_eq!(requests[1].url, "/files/move");
    assert_eq!(
        requests[1].form,
        form(&[
            ("input", "Season 2"),
            ("path", "C.mkv"),
            ("path", "[Group] B - 02 (1080p).mkv"),
            ("mode", "keep"),
        ])
    );
    assert_eq!(requests[2].method, RequestMethod::Get);
    assert_eq!(raw_labels(session.registry()), vec!["E.mkv"]);
}

#[tokio::test]
async fn test_empty_input_forwarded_when_configured() {
    let transport = MockTransport::new().reply(200, EPISODES).reply(200, "ok");
    let mut session = ListSession::new(transport.clone(), "/list");
    session.refresh().await.unwrap();
    let a = session.nth_visible(0).unwrap();
    session.replace(a);

    let mut action = ActionSpec::new("rename", "/rename");
    action.prompt = Some("Name".into());
    action.empty_input = EmptyInput::Forward;

    session
        .dispatch(&action, &MockInput::answering(""))
        .await
        .unwrap();

    assert_eq!(
        transport.requests()[1].form,
        form(&[("input", ""), ("path", "A.mkv")])
    );
}

#[tokio::test]
async fn test_range_direction_gives_same_set() {
    let body = "<div>a</div><div>b</div><div>c</div><div>d</div>";
    let mut forward = loaded(body).await;
    let mut backward = loaded(body).await;

    let (b, d) = (forward.nth_visible(1).unwrap(), forward.nth_visible(3).unwrap());
    forward.replace(b);
    forward.range(d);

    let (b, d) = (backward.nth_visible(1).unwrap(), backward.nth_visible(3).unwrap());
    backward.replace(d);
    backward.range(b);

    let selected = |session: &ListSession<MockTransport>| -> Vec<String> {
        session
            .registry()
            .selected()
            .map(|e| e.raw_label.clone())
            .collect()
    };
    assert_eq!(selected(&forward), vec!["b", "c", "d"]);
    assert_eq!(selected(&forward), selected(&backward));
}

#[tokio::test]
async fn test_listing_config_drives_session() {
    let mut listing = ListingConfig::new("/list");
    listing.sorted = true;
    listing.selection = SelectionMode::Unordered;
    listing.range_anchor = RangeAnchor::SpanSelection;
    listing.toggles.push(ViewToggle {
        name: "watched".into(),
        active: true,
    });

    let transport = MockTransport::new().reply(
        200,
        "<div>ep 10</div><div class=\"watched\">ep 2</div><div>Ep 9</div>",
    );
    let mut session = listing.session(transport);
    session.refresh().await.unwrap();

    assert_eq!(raw_labels(session.registry()), vec!["ep 2", "Ep 9", "ep 10"]);
    assert_eq!(session.registry().visible().count(), 2);
    assert_eq!(
        *session.selection(),
        SelectionModel::new(SelectionMode::Unordered, RangeAnchor::SpanSelection)
    );

    let mut config = AppConfig::default();
    config.listings.insert("eps".into(), listing);
    assert!(config.listing(Some("eps")).is_ok());
}

#[tokio::test]
async fn test_copy_follows_canonical_order() {
    let mut session = loaded(EPISODES).await;
    let c = session.nth_visible(2).unwrap();
    let a = session.nth_visible(0).unwrap();
    session.toggle(c);
    session.toggle(a);
    let mut clipboard = MockClipboard::new();

    session.copy_selection(&mut clipboard, false).unwrap();

    assert_eq!(clipboard.contents.as_deref(), Some("C.mkv\nA.mkv"));
}
