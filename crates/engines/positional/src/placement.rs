use othello_core::{Board, Color, Coord, Strategy};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Distance of a cell from the nearest edge, summed over both axes.
/// 0 for corners, 6 for the four center cells.
fn edge_distance(mv: &Coord) -> u8 {
    let x = if mv.x() < 4 { mv.x() } else { 7 - mv.x() };
    let y = if mv.y() < 4 { mv.y() } else { 7 - mv.y() };
    x + y
}

/// Number of axes on which the cell touches the border (2 for corners).
fn edge_contact(mv: &Coord) -> u8 {
    u8::from(mv.x() == 0 || mv.x() == 7) + u8::from(mv.y() == 0 || mv.y() == 7)
}

/// Plays the legal move furthest from the edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterStrategy;

impl CenterStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for CenterStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        board.valid_moves(color).into_iter().max_by_key(edge_distance)
    }

    fn name(&self) -> &str {
        "Center Bot"
    }
}

/// Plays the legal move closest to an edge, random among equals.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeStrategy;

impl EdgeStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for EdgeStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        let mut moves = board.valid_moves(color);
        moves.shuffle(&mut thread_rng());
        moves.into_iter().min_by_key(edge_distance)
    }

    fn name(&self) -> &str {
        "Edge Bot"
    }
}

/// Plays randomly unless a border cell is available, corners first.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeExclusiveStrategy;

impl EdgeExclusiveStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for EdgeExclusiveStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        let mut moves = board.valid_moves(color);
        moves.shuffle(&mut thread_rng());
        moves.into_iter().max_by_key(edge_contact)
    }

    fn name(&self) -> &str {
        "Edge Exclusive Bot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_distance() {
        assert_eq!(edge_distance(&Coord::new(0, 0).unwrap()), 0);
        assert_eq!(edge_distance(&Coord::new(3, 4).unwrap()), 6);
        assert_eq!(edge_distance(&Coord::new(7, 2).unwrap()), 2);
    }

    #[test]
    fn test_edge_contact() {
        assert_eq!(edge_contact(&Coord::new(0, 7).unwrap()), 2);
        assert_eq!(edge_contact(&Coord::new(0, 3).unwrap()), 1);
        assert_eq!(edge_contact(&Coord::new(3, 3).unwrap()), 0);
    }
}
