//! Game and match results, and their text reports

use serde::{Deserialize, Serialize};
use session::Outcome;

/// Final state of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub black: String,
    pub white: String,
    pub black_discs: u32,
    pub white_discs: u32,
    /// Plies in the history, skips included.
    pub plies: usize,
    pub outcome: Outcome,
}

impl GameSummary {
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::BlackWins => Some(&self.black),
            Outcome::WhiteWins => Some(&self.white),
            Outcome::Draw => None,
        }
    }
}

/// Result of repeated games between one ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelResult {
    pub black: String,
    pub white: String,
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
}

impl DuelResult {
    pub fn new(black: &str, white: &str) -> Self {
        Self {
            black: black.to_string(),
            white: white.to_string(),
            black_wins: 0,
            white_wins: 0,
            draws: 0,
        }
    }

    pub fn add(&mut self, game: &GameSummary) {
        match game.outcome {
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.black_wins + self.white_wins + self.draws
    }

    /// Score from Black's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn black_score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.black_wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Duel: {} (B) vs {} (W) ===\n",
            self.black, self.white
        ));
        report.push_str(&format!("Games: {}\n", self.total_games()));
        report.push_str(&format!(
            "{:<30} {:>6}\n{:<30} {:>6}\n{:<30} {:>6}\n",
            format!("{} wins", self.black),
            self.black_wins,
            format!("{} wins", self.white),
            self.white_wins,
            "Draws",
            self.draws
        ));
        report.push_str(&format!(
            "Black score: {:.1}%\n",
            self.black_score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(outcome: Outcome) -> GameSummary {
        GameSummary {
            black: "Edge Bot".to_string(),
            white: "Random Bot".to_string(),
            black_discs: 0,
            white_discs: 0,
            plies: 60,
            outcome,
        }
    }

    #[test]
    fn test_winner() {
        assert_eq!(game(Outcome::BlackWins).winner(), Some("Edge Bot"));
        assert_eq!(game(Outcome::WhiteWins).winner(), Some("Random Bot"));
        assert_eq!(game(Outcome::Draw).winner(), None);
    }

    #[test]
    fn test_duel_tally() {
        let mut duel = DuelResult::new("Edge Bot", "Random Bot");
        assert!((duel.black_score() - 0.5).abs() < 1e-9);

        duel.add(&game(Outcome::BlackWins));
        duel.add(&game(Outcome::BlackWins));
        duel.add(&game(Outcome::WhiteWins));
        duel.add(&game(Outcome::Draw));

        assert_eq!(duel.total_games(), 4);
        assert_eq!((duel.black_wins, duel.white_wins, duel.draws), (2, 1, 1));
        assert!((duel.black_score() - 0.625).abs() < 1e-9);

        let report = duel.generate_report();
        assert!(report.contains("Edge Bot (B) vs Random Bot (W)"));
        assert!(report.contains("62.5%"));
    }
}
