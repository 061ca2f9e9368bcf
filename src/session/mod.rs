//! Running a round frame by frame.
//!
//! A [`GameSession`] owns a [`Board`] and a [`GameClock`] and is driven by
//! the host's render loop:
//!
//! ```text
//! input ──handle()──▶ Board (direction, last write wins)
//! frame(delta) ──▶ clock due? ──▶ Board::game_tick ──▶ sink.on_tick
//!                                                    └▶ sink.positions_changed
//! ```
//!
//! Everything is synchronous and single-threaded. Once the round is won or
//! lost, intents are dropped and frames only redraw.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use snake_words::core::{Position, SessionConfig};
//! use snake_words::session::{GameSession, InputIntent, RecordingSink};
//!
//! let mut session = GameSession::new(&SessionConfig::default()).unwrap();
//! let mut sink = RecordingSink::new();
//!
//! session.handle(InputIntent::Select(Position::new(12, 5))).unwrap();
//! session.handle(InputIntent::Down).unwrap();
//!
//! // Not enough time has passed for a tick yet
//! assert_eq!(session.frame(Duration::from_millis(16), &mut sink), None);
//! ```

mod clock;
mod input;
mod render;

pub use clock::GameClock;
pub use input::InputIntent;
pub use render::{RecordingSink, RenderSink, SinkCall};

use std::time::Duration;

use tracing::debug;

use crate::board::{Board, TickEvent};
use crate::core::{Result, SessionConfig};

/// A board plus the clock that paces it.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    clock: GameClock,
}

impl GameSession {
    /// Build a session from a validated configuration.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        Ok(Self::with_board(
            Board::from_config(config)?,
            config.tick_interval(),
        ))
    }

    /// Wrap an existing board.
    #[must_use]
    pub fn with_board(board: Board, tick_interval: Duration) -> Self {
        Self {
            board,
            clock: GameClock::new(tick_interval),
        }
    }

    /// The board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The logic clock.
    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Apply one player intent.
    ///
    /// Directions overwrite the snake's direction immediately; only the
    /// latest one before a tick counts. Selections go to
    /// [`Board::select_start_tile`]. After the round ends all intents are
    /// dropped.
    pub fn handle(&mut self, intent: InputIntent) -> Result<()> {
        if self.board.is_over() {
            debug!(?intent, "round over, dropping intent");
            return Ok(());
        }

        match intent {
            InputIntent::Select(pos) => {
                self.board.select_start_tile(pos)?;
            }
            _ => {
                if let Some(direction) = intent.direction() {
                    if !self.board.steer(direction) {
                        debug!(?intent, "no snake to steer");
                    }
                }
            }
        }
        Ok(())
    }

    /// Run one render frame that took `delta`.
    ///
    /// Runs at most one logic tick, reports its event, then reports
    /// positions for drawing. Once the round is over the elapsed fraction
    /// is always 1.0. Returns the tick's event, if any.
    pub fn frame<S: RenderSink + ?Sized>(
        &mut self,
        delta: Duration,
        sink: &mut S,
    ) -> Option<TickEvent> {
        let event = if !self.board.is_over() && self.clock.advance(delta) {
            self.board.game_tick()
        } else {
            None
        };

        if let Some(event) = &event {
            sink.on_tick(event);
        }
        // A finished round is drawn at rest
        let elapsed_fraction = if self.board.is_over() {
            1.0
        } else {
            self.clock.elapsed_fraction()
        };
        sink.positions_changed(&self.board.frame(), elapsed_fraction);

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Outcome;
    use crate::core::{Direction, Position};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn stock_session() -> GameSession {
        GameSession::new(&SessionConfig::default().with_tick_interval_ms(100)).unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = stock_session();
        assert_eq!(session.clock().interval(), ms(100));
        assert!(session.board().snake().is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SessionConfig::default().with_layout(["VQ"]);
        assert!(GameSession::new(&config).is_err());
    }

    #[test]
    fn test_frames_before_selection_only_draw() {
        let mut session = stock_session();
        let mut sink = RecordingSink::new();

        for _ in 0..5 {
            assert_eq!(session.frame(ms(60), &mut sink), None);
        }
        assert_eq!(sink.events().count(), 0);
        assert_eq!(sink.calls.len(), 5);
    }

    #[test]
    fn test_last_direction_wins() {
        let mut session = stock_session();
        session.handle(InputIntent::Select(Position::new(12, 5))).unwrap();
        session.handle(InputIntent::Left).unwrap();
        session.handle(InputIntent::Down).unwrap();

        assert_eq!(
            session.board().snake().unwrap().direction(),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_venom_spelled_on_stock_board() {
        // 'v' has two candidates; find a seed that picks "venom".
        let config = (0..64)
            .map(|seed| SessionConfig::default().with_tick_interval_ms(100).with_seed(seed))
            .find(|config| {
                let mut board = Board::from_config(config).unwrap();
                board.select_start_tile(Position::new(12, 5)).unwrap();
                board.win_word() == Some("venom")
            })
            .unwrap();

        let mut session = GameSession::new(&config).unwrap();
        let mut sink = RecordingSink::new();
        session.handle(InputIntent::Select(Position::new(12, 5))).unwrap();
        session.handle(InputIntent::Down).unwrap();

        for _ in 0..20 {
            session.frame(ms(101), &mut sink);
        }

        let events: Vec<_> = sink.events().copied().collect();
        assert_eq!(
            events,
            vec![
                TickEvent::Ate { letter: 'E' },
                TickEvent::Ate { letter: 'N' },
                TickEvent::Ate { letter: 'O' },
                TickEvent::Ate { letter: 'M' },
                TickEvent::Won,
            ]
        );
        assert_eq!(session.board().outcome(), Some(Outcome::Won));
    }

    #[test]
    fn test_intents_dropped_after_round_ends() {
        let mut session = stock_session();
        let mut sink = RecordingSink::new();
        session.handle(InputIntent::Select(Position::new(12, 5))).unwrap();
        session.handle(InputIntent::Right).unwrap();

        // (13, 5) is open, then (14, 5), then off the board
        let mut last = None;
        for _ in 0..5 {
            if let Some(event) = session.frame(ms(101), &mut sink) {
                last = Some(event);
            }
        }
        assert!(matches!(last, Some(TickEvent::Died { .. })));

        session.handle(InputIntent::Select(Position::new(7, 7))).unwrap();
        session.handle(InputIntent::Up).unwrap();
        assert_eq!(session.board().snake().unwrap().direction(), None);
        assert_eq!(session.board().snake().unwrap().head_position(), Position::new(14, 5));
    }
}
