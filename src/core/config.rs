//! Ruleset configuration.
//!
//! Every constant the rules depend on lives in `GameConfig`:
//! - Board dimensions (`rows` x `cols`)
//! - Pieces per player
//! - Round and match thresholds
//! - Per-player symbol, movement direction, start row and win row
//!
//! The engine never hardcodes any of these - it reads them from the config
//! it was built with. `GameConfig::default()` is the standard 5x3,
//! three-pawn, best-of-3 ruleset.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::position::Position;
use crate::error::ConfigError;

/// Static per-player configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display symbol.
    pub symbol: char,

    /// Row delta of a forward step: `+1` (down) or `-1` (up).
    pub direction: i32,

    /// Row the player's pieces start on.
    pub start_row: i32,

    /// Reaching this row wins the round.
    pub win_row: i32,
}

/// Complete ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (board height).
    pub rows: i32,

    /// Number of columns (board width).
    pub cols: i32,

    /// Pieces each player starts a round with, placed in columns `1..=n`.
    pub pieces_per_player: u8,

    /// Round wins needed to take the match.
    pub rounds_to_win: u32,

    /// Maximum number of rounds in a match.
    pub total_rounds: u32,

    /// Per-player configuration.
    pub players: PlayerMap<PlayerConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 3,
            pieces_per_player: 3,
            rounds_to_win: 2,
            total_rounds: 3,
            players: PlayerMap::new(|player| match player {
                PlayerId::One => PlayerConfig {
                    symbol: 'O',
                    direction: 1,
                    start_row: 2,
                    win_row: 5,
                },
                PlayerId::Two => PlayerConfig {
                    symbol: 'X',
                    direction: -1,
                    start_row: 4,
                    win_row: 1,
                },
            }),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Look up a player's configuration.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerConfig {
        &self.players[player]
    }

    /// Check that a position lies on the board.
    ///
    /// ```
    /// use rust_pawns::core::{GameConfig, Position};
    ///
    /// let config = GameConfig::default();
    /// assert!(config.is_valid_position(Position::new(5, 3)));
    /// assert!(!config.is_valid_position(Position::new(6, 1)));
    /// assert!(!config.is_valid_position(Position::new(1, 0)));
    /// ```
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        (1..=self.rows).contains(&pos.row) && (1..=self.cols).contains(&pos.col)
    }

    /// Check the ruleset is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 {
            return Err(ConfigError::Validation(format!(
                "rows must be at least 2, got {}",
                self.rows
            )));
        }
        if self.cols < 1 {
            return Err(ConfigError::Validation(format!(
                "cols must be at least 1, got {}",
                self.cols
            )));
        }
        if self.pieces_per_player == 0 || i32::from(self.pieces_per_player) > self.cols {
            return Err(ConfigError::Validation(format!(
                "pieces_per_player must be in 1..={}, got {}",
                self.cols, self.pieces_per_player
            )));
        }

        let one = self.player(PlayerId::One);
        let two = self.player(PlayerId::Two);
        if one.direction.abs() != 1 || one.direction != -two.direction {
            return Err(ConfigError::Validation(format!(
                "player directions must be +1 and -1, got {} and {}",
                one.direction, two.direction
            )));
        }

        for player in PlayerId::ALL {
            let pc = self.player(player);
            let far_edge = if pc.direction > 0 { self.rows } else { 1 };
            if pc.win_row != far_edge {
                return Err(ConfigError::Validation(format!(
                    "{player} must win on row {far_edge}, got {}",
                    pc.win_row
                )));
            }
            if !(1..=self.rows).contains(&pc.start_row) || pc.start_row == pc.win_row {
                return Err(ConfigError::Validation(format!(
                    "{player} start row {} is not a playable row",
                    pc.start_row
                )));
            }
            if pc.symbol.is_whitespace() || pc.symbol == '.' || pc.symbol == '*' {
                return Err(ConfigError::Validation(format!(
                    "{player} symbol {:?} is reserved",
                    pc.symbol
                )));
            }
        }
        if one.start_row == two.start_row {
            return Err(ConfigError::Validation(
                "players cannot share a start row".to_string(),
            ));
        }
        if one.symbol == two.symbol {
            return Err(ConfigError::Validation(
                "players cannot share a symbol".to_string(),
            ));
        }

        if self.rounds_to_win == 0 {
            return Err(ConfigError::Validation(
                "rounds_to_win must be at least 1".to_string(),
            ));
        }
        let min_rounds = self
            .rounds_to_win
            .checked_mul(2)
            .map(|n| n - 1)
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "rounds_to_win {} is too large",
                    self.rounds_to_win
                ))
            })?;
        if self.total_rounds < min_rounds {
            return Err(ConfigError::Validation(format!(
                "total_rounds {} cannot decide a first-to-{} match",
                self.total_rounds, self.rounds_to_win
            )));
        }

        Ok(())
    }
}
