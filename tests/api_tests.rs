use chess_rules::api::{self, ClickRequest, TargetsRequest};
use chess_rules::constants::STARTING_POSITION_FEN;

#[test]
fn test_targets_endpoint_returns_algebraic_squares() {
    let response = api::legal_targets(TargetsRequest {
        fen: STARTING_POSITION_FEN.to_string(),
        square: "e2".to_string(),
    })
    .unwrap();

    let mut targets = response.targets;
    targets.sort();
    assert_eq!(targets, vec!["e3", "e4"]);
}

#[test]
fn test_targets_endpoint_rejects_bad_input() {
    assert!(api::legal_targets(TargetsRequest {
        fen: "not a fen".to_string(),
        square: "e2".to_string(),
    })
    .is_err());

    assert!(api::legal_targets(TargetsRequest {
        fen: STARTING_POSITION_FEN.to_string(),
        square: "z9".to_string(),
    })
    .is_err());
}

#[test]
fn test_click_endpoint_selects_then_moves() {
    // First click: select the pawn
    let response = api::click(ClickRequest {
        fen: STARTING_POSITION_FEN.to_string(),
        selected: None,
        square: "e2".to_string(),
    })
    .unwrap();

    assert_eq!(response.moved, None);
    assert_eq!(response.selected.as_deref(), Some("e2"));
    assert!(response.targets.contains(&"e4".to_string()));
    assert_eq!(response.fen, STARTING_POSITION_FEN);

    // Second click: complete the move
    let response = api::click(ClickRequest {
        fen: STARTING_POSITION_FEN.to_string(),
        selected: Some("e2".to_string()),
        square: "e4".to_string(),
    })
    .unwrap();

    assert_eq!(
        response.moved,
        Some(("e2".to_string(), "e4".to_string()))
    );
    assert_eq!(response.selected, None);
    assert!(response.targets.is_empty());
    assert_eq!(
        response.fen,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_click_endpoint_treats_stray_clicks_as_deselects() {
    let response = api::click(ClickRequest {
        fen: STARTING_POSITION_FEN.to_string(),
        selected: Some("e2".to_string()),
        square: "e5".to_string(),
    })
    .unwrap();

    assert_eq!(response.moved, None);
    assert_eq!(response.selected, None);
    assert_eq!(response.fen, STARTING_POSITION_FEN);
}
