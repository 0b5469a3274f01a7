//! Whole-game checks of the reference rules through the `Engine` surface.

use othello_core::{decode, Board, Color, Coord, Engine, LocalEngine, Strategy};

struct FirstValid;

impl Strategy for FirstValid {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        board.valid_moves(color).first().copied()
    }

    fn name(&self) -> &str {
        "First"
    }
}

fn engine_with_bots() -> LocalEngine {
    let mut engine = LocalEngine::new();
    engine.stage_strategy(Box::new(FirstValid));
    engine.assign_staged(Color::Black);
    engine.stage_strategy(Box::new(FirstValid));
    engine.assign_staged(Color::White);
    engine.start_game();
    engine
}

#[test]
fn test_game_terminates_and_discs_are_consistent() {
    let mut engine = engine_with_bots();
    let mut turn = Color::Black;
    let mut placed = 4;

    for _ in 0..200 {
        if !engine.has_legal_move(turn) && !engine.has_legal_move(turn.other()) {
            break;
        }
        if engine.run_strategy_move(turn).is_some() {
            placed += 1;
        }
        turn = turn.other();

        let total = engine.count_pieces(Color::Black) + engine.count_pieces(Color::White);
        assert_eq!(total, placed);
        assert_eq!(engine.occupied_mask().count_ones(), placed);
    }

    assert!(!engine.has_legal_move(Color::Black));
    assert!(!engine.has_legal_move(Color::White));
}

#[test]
fn test_decoded_grid_matches_piece_counts() {
    let mut engine = engine_with_bots();
    for turn in [Color::Black, Color::White, Color::Black, Color::White] {
        engine.run_strategy_move(turn);
    }
    let grid = decode(engine.occupied_mask(), engine.color_mask());
    assert_eq!(grid.count(1) as u32, engine.count_pieces(Color::White));
    assert_eq!(grid.count(-1) as u32, engine.count_pieces(Color::Black));
}
