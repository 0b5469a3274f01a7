//! Round-robin and duel runners. Every game goes through a `GameSession`
//! and runs to completion with no delay between plies.

use othello_core::{Engine, LocalEngine};
use session::{Control, GameSession, Outcome, PlayerAssignment, StrategyId, StrategyRegistry};

use crate::elo::EloTracker;
use crate::results::{DuelResult, GameSummary};

/// Play one bot-vs-bot game on `engine` and summarize it.
pub fn play_game<E: Engine + ?Sized>(
    engine: &mut E,
    session: &mut GameSession,
    black: StrategyId,
    white: StrategyId,
) -> GameSummary {
    let mut control = session.start(
        engine,
        PlayerAssignment::Strategy(black),
        PlayerAssignment::Strategy(white),
    );
    while let Control::BotToMove(_) = control {
        match session.run_bot_move(engine) {
            Some(next) => control = next,
            None => break,
        }
    }

    let (black_discs, white_discs) = session.score(engine);
    let summary = GameSummary {
        black: black.name().to_string(),
        white: white.name().to_string(),
        black_discs,
        white_discs,
        plies: session.history().len(),
        outcome: Outcome::from_counts(black_discs, white_discs),
    };
    tracing::debug!(
        black = %summary.black,
        white = %summary.white,
        black_discs,
        white_discs,
        plies = summary.plies,
        "game finished"
    );
    summary
}

/// Play `games` games of one ordered pair.
pub fn duel<E: Engine + ?Sized>(
    engine: &mut E,
    black: StrategyId,
    white: StrategyId,
    games: u32,
) -> DuelResult {
    let mut session = GameSession::new();
    let mut result = DuelResult::new(black.name(), white.name());
    for _ in 0..games {
        let game = play_game(engine, &mut session, black, white);
        result.add(&game);
    }
    tracing::info!(
        black = %black,
        white = %white,
        black_wins = result.black_wins,
        white_wins = result.white_wins,
        draws = result.draws,
        "duel finished"
    );
    result
}

/// Round robin over a registry: every ordered pair, self-pairs included,
/// once per round. Ratings accumulate across rounds.
pub struct TournamentRunner<E: Engine = LocalEngine> {
    registry: StrategyRegistry,
    engine: E,
    session: GameSession,
    tracker: EloTracker,
    rounds_played: u32,
}

impl TournamentRunner<LocalEngine> {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self::with_engine(registry, LocalEngine::new())
    }
}

impl<E: Engine> TournamentRunner<E> {
    pub fn with_engine(registry: StrategyRegistry, engine: E) -> Self {
        let tracker = EloTracker::with_players(registry.names());
        Self {
            registry,
            engine,
            session: GameSession::new(),
            tracker,
            rounds_played: 0,
        }
    }

    /// Continue from saved standings. The table follows registry order;
    /// saved entries for strategies not taking part are dropped and new
    /// participants start at the default rating.
    pub fn with_tracker(mut self, saved: EloTracker) -> Self {
        self.tracker = saved.subset(self.registry.names());
        self
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn tracker(&self) -> &EloTracker {
        &self.tracker
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Feed one game result into the ratings.
    pub fn record(&mut self, game: &GameSummary) {
        match game.outcome {
            Outcome::BlackWins => self.tracker.record_win(&game.black, &game.white),
            Outcome::WhiteWins => self.tracker.record_win(&game.white, &game.black),
            Outcome::Draw => self.tracker.record_draw(&game.black, &game.white),
        }
    }

    /// Play one full round, calling `on_game` after each game.
    pub fn run_round(&mut self, mut on_game: impl FnMut(&GameSummary)) -> Vec<GameSummary> {
        let ids = self.registry.ids().to_vec();
        let mut games = Vec::with_capacity(ids.len() * ids.len());

        for &black in &ids {
            for &white in &ids {
                let game = play_game(&mut self.engine, &mut self.session, black, white);
                self.record(&game);
                on_game(&game);
                games.push(game);
            }
        }

        self.rounds_played += 1;
        tracing::info!(round = self.rounds_played, games = games.len(), "round finished");
        games
    }

    /// Play rounds until `rounds` is reached, or forever when `None`.
    /// `on_start` gets the number of the round about to be played;
    /// `on_round` sees that number and the standings once it is over. An
    /// error from `on_round` stops the run.
    pub fn run<S, F, Err>(
        &mut self,
        rounds: Option<u32>,
        mut on_start: S,
        mut on_round: F,
    ) -> Result<(), Err>
    where
        S: FnMut(u32),
        F: FnMut(u32, &EloTracker) -> Result<(), Err>,
    {
        let start = self.rounds_played;
        while rounds.map_or(true, |limit| self.rounds_played - start < limit) {
            on_start(self.rounds_played + 1);
            self.run_round(|_| {});
            on_round(self.rounds_played, &self.tracker)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
