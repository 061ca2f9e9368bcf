//! Per-round orchestration of grid, snake and win word.

use tracing::{debug, info};

use crate::core::{Direction, GameError, GameRng, Position, Result, SessionConfig};
use crate::grid::{Grid, Tile};
use crate::snake::Snake;
use crate::words::{Dictionary, Verdict, WordValidator};

use super::event::{DeathCause, Frame, Outcome, SegmentView, TickEvent};

/// Result of selecting a start tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A snake was created and a win word chosen.
    Started,
    /// Nothing happened: a snake already exists, or the cell has no letter.
    Ignored,
}

/// Owns one round: the grid, the (lazily created) snake and the win word.
///
/// At most one snake exists per round. Restarting means building a new
/// `Board`.
///
/// ## Usage
///
/// ```
/// use snake_words::board::{Board, Selection, TickEvent};
/// use snake_words::core::{Direction, Position, SessionConfig};
///
/// let config = SessionConfig::default()
///     .with_layout(["VINCE  "])
///     .with_dictionary(Default::default())
///     .with_words('v', ["vince"])
///     .with_words('i', ["ink"])
///     .with_words('n', ["nest"])
///     .with_words('c', ["coil"])
///     .with_words('e', ["eel"]);
/// let mut board = Board::from_config(&config).unwrap();
///
/// assert_eq!(board.select_start_tile(Position::new(0, 0)).unwrap(), Selection::Started);
/// board.steer(Direction::Right);
///
/// assert_eq!(board.game_tick(), Some(TickEvent::Ate { letter: 'I' }));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    dictionary: Dictionary,
    rng: GameRng,
    snake: Option<Snake>,
    validator: Option<WordValidator>,
    outcome: Option<Outcome>,
}

impl Board {
    /// Create a board, checking that every letter on it can start a word.
    pub fn new(grid: Grid, dictionary: Dictionary, seed: u64) -> Result<Self> {
        dictionary.ensure_covers(grid.tiles().map(|t| t.letter))?;

        Ok(Self {
            grid,
            dictionary,
            rng: GameRng::new(seed),
            snake: None,
            validator: None,
            outcome: None,
        })
    }

    /// Build the board described by `config`.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let grid = Grid::from_rows(&config.layout)?;
        let dictionary = Dictionary::new(&config.dictionary)?;
        Self::new(grid, dictionary, config.seed)
    }

    /// The letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The snake, once a start tile has been selected.
    #[must_use]
    pub fn snake(&self) -> Option<&Snake> {
        self.snake.as_ref()
    }

    /// The win word, once a start tile has been selected.
    #[must_use]
    pub fn win_word(&self) -> Option<&str> {
        self.validator.as_ref().map(WordValidator::win_word)
    }

    /// How the round ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once the round has been won or lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Start the round from the tile at `pos`.
    ///
    /// Removes the tile from the grid, picks the win word uniformly from the
    /// tile letter's candidates and creates a one-segment snake there.
    /// Returns `Selection::Ignored` if a snake already exists or the cell
    /// holds no letter.
    pub fn select_start_tile(&mut self, pos: Position) -> Result<Selection> {
        if self.snake.is_some() {
            debug!(%pos, "snake already exists, ignoring selection");
            return Ok(Selection::Ignored);
        }

        let Some(tile) = self.grid.tile_at(pos) else {
            debug!(%pos, "no letter at selected cell");
            return Ok(Selection::Ignored);
        };

        let win_word = self
            .rng
            .choose(self.dictionary.candidates(tile.letter))
            .cloned()
            .ok_or(GameError::EmptyDictionaryBucket(tile.letter.to_ascii_lowercase()))?;

        self.grid.remove(&tile);
        self.snake = Some(Snake::new(tile));
        self.validator = Some(WordValidator::new(win_word));

        info!(%pos, letter = %tile.letter, "snake spawned");
        Ok(Selection::Started)
    }

    /// Steer the snake. Returns false if there is no live snake to steer.
    pub fn steer(&mut self, direction: Direction) -> bool {
        match self.snake.as_mut() {
            Some(snake) if snake.is_alive() => {
                snake.set_direction(direction);
                true
            }
            _ => false,
        }
    }

    /// Advance the round by one logic step.
    ///
    /// Returns `None` when there is no live snake. Otherwise, in order:
    /// 1. a steered snake whose next cell is off the board or on its own
    ///    body dies
    /// 2. a snake spelling the win word wins
    /// 3. a snake about to eat a letter that breaks the win word dies
    /// 4. a snake facing an open cell moves into it
    /// 5. otherwise the snake eats the letter in front of it
    pub fn game_tick(&mut self) -> Option<TickEvent> {
        let (snake, validator) = match (self.snake.as_mut(), self.validator.as_ref()) {
            (Some(snake), Some(validator)) if snake.is_alive() => (snake, validator),
            _ => return None,
        };

        let next = snake.next_position();

        if snake.has_moved() {
            let cause = if self.grid.is_out_of_bounds(next) {
                Some(DeathCause::OutOfBounds)
            } else if snake.occupies(next) {
                Some(DeathCause::SelfCollision)
            } else {
                None
            };

            if let Some(cause) = cause {
                snake.kill();
                self.outcome = Some(Outcome::Died(cause));
                info!(?cause, %next, name = %snake.name(), "snake died");
                return Some(TickEvent::Died { cause });
            }
        }

        let target = self.grid.tile_at(next);
        let name = snake.name();

        match validator.verdict(&name, target.map(|t| t.letter)) {
            Verdict::Won => {
                snake.kill();
                self.outcome = Some(Outcome::Won);
                info!(word = %name, "win word spelled");
                Some(TickEvent::Won)
            }
            Verdict::Misspelled { attempted } => {
                snake.kill();
                let cause = DeathCause::Misspelled;
                self.outcome = Some(Outcome::Died(cause));
                info!(%attempted, "snake died");
                Some(TickEvent::Died { cause })
            }
            Verdict::Continue => match target {
                None => {
                    snake.advance(next);
                    debug!(head = %next, "moved");
                    Some(TickEvent::Moved { head: next })
                }
                Some(tile) => {
                    snake.grow(next, tile, &mut self.grid);
                    debug!(letter = %tile.letter, name = %snake.name(), "ate");
                    Some(TickEvent::Ate { letter: tile.letter })
                }
            },
        }
    }

    /// Every live tile with its logical cell before and after the last tick.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let segments = self
            .snake
            .iter()
            .flat_map(|snake| {
                snake
                    .tiles()
                    .zip(snake.previous_positions())
                    .map(|(tile, from): (&Tile, Position)| SegmentView {
                        letter: tile.letter,
                        from,
                        to: tile.position,
                    })
            })
            .collect();

        Frame {
            board_tiles: self.grid.tiles().collect(),
            segments,
        }
    }
}
