use super::*;

#[test]
fn random_strategy_returns_legal_move() {
    let mut strategy = RandomStrategy::new();
    let board = Board::new();

    for _ in 0..20 {
        let mv = strategy.choose_move(&board, Color::Black).unwrap();
        assert!(board.is_valid_move(mv, Color::Black));
    }
    assert_eq!(strategy.moves_played(), 20);
}

#[test]
fn random_strategy_handles_no_moves() {
    let mut strategy = RandomStrategy::new();
    let board = Board::empty();

    assert!(strategy.choose_move(&board, Color::White).is_none());
    assert_eq!(strategy.moves_played(), 0);
}

#[test]
fn random_strategy_resets_between_games() {
    let mut strategy = RandomStrategy::new();
    strategy.choose_move(&Board::new(), Color::Black);
    strategy.new_game();
    assert_eq!(strategy.moves_played(), 0);
}
