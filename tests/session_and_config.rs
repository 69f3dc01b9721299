use std::fs;

use parity_split::{
    Error,
    cli::commands::analyze::{analyze_row, export_report},
    config::{EngineConfig, GameConfig},
    game::{GameOutcome, Player, Row},
    search::{Algorithm, Side},
    session::{MatchResult, Participant, Session},
};
use tempfile::TempDir;

#[test]
fn config_file_drives_a_self_play_game() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");
    fs::write(
        &path,
        r#"{
            "numbers": [4, 1, 3, 2, 2],
            "first": "computer",
            "second": "computer",
            "engine": { "algorithm": "alpha-beta", "depth": 5 }
        }"#,
    )
    .unwrap();

    let config = GameConfig::load_from_file(&path).unwrap();
    assert_eq!(config.engine, EngineConfig::new().with_depth(5));

    let mut session = Session::new(&config).unwrap();
    assert_eq!(session.row().numbers(), &[4, 1, 3, 2, 2]);

    while !session.is_over() {
        let before = session.player_to_move();
        session.play_computer().unwrap();
        assert_eq!(session.player_to_move(), before.opponent());
    }

    let outcome = session.state().winner().unwrap();
    let result = session.result().unwrap();
    match (outcome, result) {
        (GameOutcome::Win(player), MatchResult::Winner { player: winner, participant }) => {
            assert_eq!(player, winner);
            assert_eq!(participant, Participant::Computer);
        }
        (GameOutcome::Draw, MatchResult::Draw) => {}
        other => panic!("outcome and result disagree: {other:?}"),
    }
}

#[test]
fn invalid_config_files_are_rejected() {
    let dir = TempDir::new().unwrap();

    let too_deep = dir.path().join("deep.json");
    fs::write(&too_deep, r#"{ "engine": { "depth": 99 } }"#).unwrap();
    assert!(matches!(
        GameConfig::load_from_file(&too_deep),
        Err(Error::InvalidDepth { depth: 99, .. })
    ));

    let out_of_range = dir.path().join("seven.json");
    fs::write(&out_of_range, r#"{ "numbers": [2, 7] }"#).unwrap();
    let err = GameConfig::load_from_file(&out_of_range).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert!(!err.to_string().contains("invalid move"));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        GameConfig::load_from_file(&broken),
        Err(Error::Serialization(_))
    ));

    assert!(matches!(
        GameConfig::load_from_file(dir.path().join("missing.json")),
        Err(Error::Io { .. })
    ));
}

#[test_log::test]
fn seeded_sessions_replay_identically() {
    let config = GameConfig::new()
        .with_row_length(9)
        .with_seed(2024)
        .with_participants(Participant::Computer, Participant::Computer)
        .with_engine(EngineConfig::new().with_depth(3).with_algorithm(Algorithm::Minimax));

    let play = || {
        let mut session = Session::new(&config).unwrap();
        while !session.is_over() {
            session.play_computer().unwrap();
        }
        session.history().to_vec()
    };

    let first = play();
    assert!(!first.is_empty());
    assert_eq!(first, play());
}

#[test]
fn human_and_computer_alternate() {
    let mut session = Session::with_row(
        Row::from_numbers(&[4, 3]).unwrap(),
        Participant::Human,
        Participant::Computer,
        EngineConfig::new(),
    )
    .unwrap();

    session.play_index(0, true).unwrap();
    assert_eq!(session.row().numbers(), &[2, 2, 3]);
    assert_eq!(session.side_to_move(), Side::Min);

    session.play_computer().unwrap();
    let turns = session.history();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].player, Player::One);
    assert_eq!(turns[1].player, Player::Two);
    assert_eq!(turns[1].participant, Participant::Computer);
    assert_eq!(session.row().to_state().counts(), session.state().counts());
}

#[test]
fn analysis_exports_as_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("analysis.json");
    let row = Row::parse("3, 2, 1, 4").unwrap();

    let report = analyze_row(&row, Side::Max, Some(4)).unwrap();
    export_report(&report, &path).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["row"], serde_json::json!([3, 2, 1, 4]));
    assert_eq!(json["depth"], 4);
    assert_eq!(json["tree"]["nodes"], report.tree.nodes);
    let searches = json["searches"].as_array().unwrap();
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0]["algorithm"], "minimax");
    assert_eq!(searches[1]["algorithm"], "alpha-beta");
    assert_eq!(searches[0]["value"], searches[1]["value"]);
    assert_eq!(searches[0]["chosen_move"], searches[1]["chosen_move"]);
}
