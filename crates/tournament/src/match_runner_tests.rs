use super::*;
use crate::elo::K_FACTOR;

fn pair_registry() -> StrategyRegistry {
    StrategyRegistry::with([StrategyId::TopLeft, StrategyId::BottomRight])
}

#[test]
fn test_play_game_finishes() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let game = play_game(&mut engine, &mut session, StrategyId::Center, StrategyId::Edge);

    assert!(!session.is_active());
    assert_eq!(game.black, "Center Bot");
    assert_eq!(game.white, "Edge Bot");
    assert_eq!(game.outcome, Outcome::from_counts(game.black_discs, game.white_discs));
    assert!(game.black_discs + game.white_discs <= 64);
}

#[test]
fn test_round_covers_every_ordered_pair() {
    let mut runner = TournamentRunner::new(pair_registry());
    let mut seen = Vec::new();
    let games = runner.run_round(|g| seen.push((g.black.clone(), g.white.clone())));

    let expected = [
        ("Top Left Bot", "Top Left Bot"),
        ("Top Left Bot", "Bottom Right Bot"),
        ("Bottom Right Bot", "Top Left Bot"),
        ("Bottom Right Bot", "Bottom Right Bot"),
    ];
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(b, w)| (b.to_string(), w.to_string()))
        .collect();
    assert_eq!(seen, expected);
    assert_eq!(games.len(), 4);
    assert_eq!(runner.rounds_played(), 1);

    for (_, standing) in runner.tracker().iter() {
        // two self games plus one game per color against the other
        assert_eq!(standing.games, 4);
    }
}

/// Decisive games between different strategies are zero-sum; a decisive
/// self-game costs its strategy exactly half of K.
fn expected_total(games: &[GameSummary]) -> f64 {
    let self_losses = games
        .iter()
        .filter(|g| g.black == g.white && g.outcome != Outcome::Draw)
        .count();
    -(self_losses as f64) * K_FACTOR / 2.0
}

#[test]
fn test_rating_total_only_moves_on_self_games() {
    let registry = StrategyRegistry::with([
        StrategyId::Center,
        StrategyId::Edge,
        StrategyId::MinmaxScore,
    ]);
    let mut runner = TournamentRunner::new(registry);
    let mut games = runner.run_round(|_| {});
    games.extend(runner.run_round(|_| {}));

    let total: f64 = runner.tracker().iter().map(|(_, s)| s.rating).sum();
    assert!((total - expected_total(&games)).abs() < 1e-9);
}

#[test]
fn test_decisive_self_game_costs_the_loser_share() {
    let mut runner = TournamentRunner::new(StrategyRegistry::with([StrategyId::TopLeft]));
    let games = runner.run_round(|_| {});

    // Top Left against itself is deterministic and White wins 45-19
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].outcome, Outcome::WhiteWins);
    assert_eq!(runner.tracker().rating("Top Left Bot"), -8.0);
    assert_eq!(runner.tracker().standings_lines(), vec!["Top Left Bot: -8"]);
}

#[test]
fn test_run_stops_after_limit() {
    let mut runner = TournamentRunner::new(pair_registry());
    let events = std::cell::RefCell::new(Vec::new());
    runner
        .run(
            Some(3),
            |round| events.borrow_mut().push(format!("start {round}")),
            |round, tracker| {
                events.borrow_mut().push(format!("end {round} ({})", tracker.len()));
                Ok::<_, ()>(())
            },
        )
        .unwrap();

    assert_eq!(
        events.into_inner(),
        vec![
            "start 1", "end 1 (2)", "start 2", "end 2 (2)", "start 3", "end 3 (2)"
        ]
    );
    assert_eq!(runner.rounds_played(), 3);
}

#[test]
fn test_run_stops_on_callback_error() {
    let mut runner = TournamentRunner::new(pair_registry());
    let result = runner.run(None, |_| {}, |round, _| if round == 2 { Err(round) } else { Ok(()) });

    assert_eq!(result, Err(2));
    assert_eq!(runner.rounds_played(), 2);
}

#[test]
fn test_resume_from_tracker() {
    let mut saved = EloTracker::with_players(["Retired Bot", "Bottom Right Bot"]);
    saved.record_win("Bottom Right Bot", "Retired Bot");

    let runner = TournamentRunner::new(pair_registry()).with_tracker(saved);
    let tracker = runner.tracker();
    assert_eq!(tracker.rating("Bottom Right Bot"), 8.0);
    assert_eq!(tracker.get("Bottom Right Bot").unwrap().wins, 1);
    assert_eq!(tracker.rating("Top Left Bot"), 0.0);
    assert!(tracker.get("Retired Bot").is_none());
    assert_eq!(
        tracker.standings_lines(),
        vec!["Top Left Bot: 0", "Bottom Right Bot: 8"]
    );
}

#[test]
fn test_duel_counts_games() {
    let mut engine = LocalEngine::new();
    let result = duel(&mut engine, StrategyId::Random, StrategyId::ShallowScore, 5);

    assert_eq!(result.total_games(), 5);
    assert_eq!(result.black, "Random Bot");
    assert_eq!(result.white, "Shallow Score Bot");
}

#[test]
fn test_deterministic_duel_repeats_outcome() {
    let mut engine = LocalEngine::new();
    let result = duel(&mut engine, StrategyId::TopLeft, StrategyId::BottomRight, 3);

    let counts = [result.black_wins, result.white_wins, result.draws];
    assert!(counts.contains(&3));
}
