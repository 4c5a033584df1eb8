//! Resource loading and page model integration tests.
//!
//! These exercise the full path from raw resource bytes to the rendered
//! page model, including the fallback policy for broken resources.

use card_arena::{ArenaResources, AttributeKey, DirFetcher, PageModel, StaticFetcher};

const DECK_A_JSON: &str = r#"[
    {
        "id": "a-prof-joao",
        "teacher": "Prof. João",
        "nickname": "O Didático",
        "image": "/images/prof-joao.jpeg",
        "attributes": {"didatica":92,"carisma":85,"rigor":78,"prazos":88,"humor":70}
    }
]"#;

const DECK_B_JSON: &str = r#"[
    {
        "id": "b-profa-renata",
        "teacher": "Profa. Renata",
        "nickname": "A Estrategista",
        "image": "/images/profa-renata.jpeg",
        "attributes": {"didatica":85,"carisma":82,"rigor":88,"prazos":80,"humor":72}
    }
]"#;

const ARENA_JSON: &str = r#"{
    "round": "2025-10-01-1",
    "attribute": "carisma",
    "deckA": "a-prof-joao",
    "deckB": "b-profa-renata",
    "playerAName": "Ana",
    "playerBName": "Bruno"
}"#;

const WINNERS_JSON: &str = r#"[
    {
        "round": "2025-09-24-1",
        "winner": "b-profa-renata",
        "loser": "a-prof-joao",
        "attribute": "rigor",
        "diff": 10,
        "winnerName": "Bruno"
    }
]"#;

fn full_fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .with("/deckA.json", DECK_A_JSON)
        .with("/deckB.json", DECK_B_JSON)
        .with("/arena.json", ARENA_JSON)
        .with("/winners.json", WINNERS_JSON)
}

// =============================================================================
// Happy path
// =============================================================================

/// Test a full load: every resource present and well-formed.
#[test]
fn test_full_page_load() {
    let resources = ArenaResources::load(&full_fetcher());

    assert_eq!(resources.deck_a.len(), 1);
    assert_eq!(resources.deck_b.len(), 1);
    assert!(resources.arena.is_some());
    assert_eq!(resources.winners.len(), 1);
    assert!(resources.notices.is_empty());

    let model = PageModel::compute(&resources);
    let arena = model.arena.expect("arena configured");

    assert_eq!(arena.left.unwrap().teacher, "Prof. João");
    assert_eq!(arena.outcome.unwrap().diff(), 3.0);
    assert_eq!(arena.winner_label(), Some("Ana"));

    assert_eq!(model.history.len(), 1);
    assert_eq!(
        model.history[0].winner.unwrap().id.as_str(),
        "b-profa-renata"
    );
    assert_eq!(model.history[0].winner_label(), "Vencedor — Bruno");
}

// =============================================================================
// Fallback policy
// =============================================================================

/// Test that a fully missing site degrades to an empty page, not a crash.
#[test]
fn test_missing_everything_degrades_to_empty_page() {
    let resources = ArenaResources::load(&StaticFetcher::new());

    assert!(resources.deck_a.is_empty());
    assert!(resources.deck_b.is_empty());
    assert!(resources.arena.is_none());
    assert!(resources.winners.is_empty());
    assert_eq!(resources.notices.len(), 4);

    let model = PageModel::compute(&resources);
    assert!(model.arena.is_none());
    assert!(model.index.is_empty());
    assert!(model.history.is_empty());
}

/// Test that one broken resource never affects another's load.
#[test]
fn test_one_failure_never_affects_another() {
    let fetcher = StaticFetcher::new()
        .with("/deckA.json", "{definitely not json")
        .with("/deckB.json", DECK_B_JSON)
        .with("/arena.json", ARENA_JSON)
        .with("/winners.json", WINNERS_JSON);

    let resources = ArenaResources::load(&fetcher);

    assert!(resources.deck_a.is_empty());
    assert_eq!(resources.deck_b.len(), 1);
    assert!(resources.arena.is_some());
    assert_eq!(resources.winners.len(), 1);

    assert_eq!(resources.notices.len(), 1);
    assert!(resources.notices[0].contains("/deckA.json"));
}

/// Test that an empty body falls back like any other failure.
#[test]
fn test_empty_body_falls_back() {
    let fetcher = StaticFetcher::new()
        .with("/deckA.json", DECK_A_JSON)
        .with("/deckB.json", DECK_B_JSON)
        .with("/arena.json", "   ")
        .with("/winners.json", WINNERS_JSON);

    let resources = ArenaResources::load(&fetcher);

    assert!(resources.arena.is_none());
    assert_eq!(resources.notices.len(), 1);

    // No matchup, but the rest of the page still renders
    let model = PageModel::compute(&resources);
    assert!(model.arena.is_none());
    assert_eq!(model.history.len(), 1);
}

/// Test that an empty history resource renders the empty state.
#[test]
fn test_empty_history_renders_empty_state() {
    let fetcher = StaticFetcher::new()
        .with("/deckA.json", DECK_A_JSON)
        .with("/deckB.json", DECK_B_JSON)
        .with("/arena.json", ARENA_JSON)
        .with("/winners.json", "[]");

    let resources = ArenaResources::load(&fetcher);
    assert!(resources.winners.is_empty());
    assert!(resources.notices.is_empty());

    let model = PageModel::compute(&resources);
    assert!(model.history.is_empty());
    assert_eq!(model.index.len(), 2);
}

/// Test that a non-numeric score participates as zero.
#[test]
fn test_non_numeric_score_resolves_as_zero() {
    let fetcher = StaticFetcher::new()
        .with(
            "/deckA.json",
            r#"[{"id":"a-1","teacher":"A","image":"/a.png","attributes":{"carisma":"alta"}}]"#,
        )
        .with(
            "/deckB.json",
            r#"[{"id":"b-1","teacher":"B","image":"/b.png","attributes":{"carisma":10}}]"#,
        )
        .with(
            "/arena.json",
            r#"{"round":"r1","attribute":"carisma","deckA":"a-1","deckB":"b-1"}"#,
        )
        .with("/winners.json", "[]");

    let resources = ArenaResources::load(&fetcher);
    assert!(resources.notices.is_empty());

    let model = PageModel::compute(&resources);
    let outcome = model.arena.unwrap().outcome.unwrap();

    assert_eq!(outcome.attribute(), AttributeKey::Carisma);
    assert_eq!(outcome.winner().unwrap().id.as_str(), "b-1");
    assert_eq!(outcome.diff(), 10.0);
}

// =============================================================================
// Directory fetcher
// =============================================================================

/// Test that the directory fetcher serves a static site root.
#[test]
fn test_dir_fetcher_serves_site_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("deckA.json"), DECK_A_JSON).unwrap();
    std::fs::write(dir.path().join("arena.json"), ARENA_JSON).unwrap();

    let fetcher = DirFetcher::new(dir.path());
    let resources = ArenaResources::load(&fetcher);

    assert_eq!(resources.deck_a.len(), 1);
    assert!(resources.arena.is_some());

    // deckB and winners are absent on disk
    assert!(resources.deck_b.is_empty());
    assert!(resources.winners.is_empty());
    assert_eq!(resources.notices.len(), 2);
}
