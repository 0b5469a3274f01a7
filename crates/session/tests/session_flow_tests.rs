//! End-to-end games through the registry, session and scheduler.

use othello_core::{Color, Engine, LocalEngine};
use session::{
    Control, GameRecord, GameSession, MoveScheduler, Notation, PlayerAssignment, StrategyId,
    StrategyRegistry,
};
use std::time::{Duration, Instant};

fn play_out(engine: &mut LocalEngine, black: StrategyId, white: StrategyId) -> GameSession {
    let mut session = GameSession::new();
    let mut control = session.start(
        engine,
        PlayerAssignment::Strategy(black),
        PlayerAssignment::Strategy(white),
    );
    let mut plies = 0;
    while let Control::BotToMove(_) = control {
        control = session.run_bot_move(engine).expect("bot to move");
        plies += 1;
        assert!(plies <= 130, "game did not terminate");
    }
    session
}

#[test]
fn test_every_strategy_finishes_a_game() {
    let registry = StrategyRegistry::standard();
    let mut engine = LocalEngine::new();

    for &id in registry.ids() {
        let session = play_out(&mut engine, id, StrategyId::Random);
        assert!(!session.is_active(), "{id} vs Random still running");
        assert!(!engine.has_legal_move(Color::Black));
        assert!(!engine.has_legal_move(Color::White));

        // moves in the log plus the four starting discs
        let placed = session
            .history()
            .iter()
            .filter(|e| matches!(e.notation, Notation::Move(_)))
            .count() as u32;
        let (black, white) = session.score(&engine);
        assert_eq!(black + white, placed + 4);
    }
}

#[test]
fn test_final_skips_are_logged() {
    let mut engine = LocalEngine::new();
    let session = play_out(&mut engine, StrategyId::TopLeft, StrategyId::BottomRight);

    let entries = session.history().entries();
    let last = entries.last().expect("non-empty history");
    assert_eq!(last.notation, Notation::Skip);
    for pair in entries.windows(2) {
        assert_ne!(pair[0].color, pair[1].color);
    }
}

#[test]
fn test_record_round_trips_through_json() {
    let mut engine = LocalEngine::new();
    let session = play_out(&mut engine, StrategyId::MinmaxScore, StrategyId::Center);

    let record = session.record(&engine);
    assert!(record.outcome.is_some());

    let json = serde_json::to_string(&record).unwrap();
    let back: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.history.transcript(), session.history().transcript());
}

#[test]
fn test_scheduled_game_against_human() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::new(Duration::from_millis(300));
    let registry = StrategyRegistry::standard();
    let t0 = Instant::now();

    let white = registry.assignment("deep heuristic").unwrap();
    let control = scheduler.restart(&mut session, &mut engine, PlayerAssignment::Human, white, t0);
    assert_eq!(control, Control::HumanToMove(Color::Black));

    // f4 is legal for Black at the start
    let control = scheduler.human_move(&mut session, &mut engine, 5, 4, t0);
    assert_eq!(control, Some(Control::BotToMove(Color::White)));
    assert_eq!(scheduler.next_due(), Some(t0 + Duration::from_millis(300)));

    // a human move while the bot is thinking is rejected
    assert_eq!(scheduler.human_move(&mut session, &mut engine, 2, 3, t0), None);

    let reply = scheduler.poll(t0 + Duration::from_millis(300), &mut session, &mut engine);
    assert_eq!(reply, Some(Control::HumanToMove(Color::Black)));
    let lines: Vec<String> = session.history().iter().map(|e| e.to_string()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "B: f4");
    assert!(lines[1].starts_with("W: "));
}
