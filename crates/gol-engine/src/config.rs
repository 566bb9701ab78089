//! Game configuration, validation, and error types.
//!
//! [`GameConfig`] replaces a variadic options list with named fields and
//! documented defaults. It is validated and applied before the producer
//! thread starts.

use std::error::Error;
use std::fmt;

use gol_core::ValidationError;

// ── GameError ──────────────────────────────────────────────────────

/// Errors detected while constructing a [`Game`](crate::Game).
#[derive(Debug, PartialEq)]
pub enum GameError {
    /// The initial grid is malformed.
    Grid(ValidationError),
    /// Look-ahead capacity is below the minimum of 2.
    LookaheadTooSmall {
        /// The configured capacity that was too small.
        configured: usize,
    },
    /// The producer thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::LookaheadTooSmall { configured } => write!(
                f,
                "lookahead {configured} is below minimum of {}",
                GameConfig::MIN_LOOKAHEAD
            ),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for GameError {
    fn from(e: ValidationError) -> Self {
        Self::Grid(e)
    }
}

// ── GameConfig ─────────────────────────────────────────────────────

/// Configuration for a [`Game`](crate::Game).
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Number of generations computed ahead of the caller, which is also
    /// the number of preallocated grid buffers. Default: 16. Minimum: 2.
    pub lookahead: usize,
    /// Name given to the producer thread. Default: `"gol-producer"`.
    pub thread_name: String,
}

impl GameConfig {
    /// Default look-ahead capacity.
    pub const DEFAULT_LOOKAHEAD: usize = 16;

    /// Smallest workable look-ahead. With a single buffer the caller
    /// would hold it while waiting for the next generation, and the
    /// producer would have nothing to write into.
    pub const MIN_LOOKAHEAD: usize = 2;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.lookahead < Self::MIN_LOOKAHEAD {
            return Err(GameError::LookaheadTooSmall {
                configured: self.lookahead,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lookahead: Self::DEFAULT_LOOKAHEAD,
            thread_name: "gol-producer".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.lookahead, 16);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn minimum_lookahead_is_valid() {
        let cfg = GameConfig {
            lookahead: 2,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn lookahead_below_minimum_fails() {
        for lookahead in [0, 1] {
            let cfg = GameConfig {
                lookahead,
                ..GameConfig::default()
            };
            match cfg.validate() {
                Err(GameError::LookaheadTooSmall { configured }) => {
                    assert_eq!(configured, lookahead)
                }
                other => panic!("expected LookaheadTooSmall, got {other:?}"),
            }
        }
    }

    #[test]
    fn grid_error_exposes_source() {
        let err = GameError::from(ValidationError::EmptyGrid);
        let source = err.source().expect("grid error should have a source");
        assert_eq!(source.to_string(), "grid has no rows");
        assert_eq!(err.to_string(), "grid: grid has no rows");
    }

    #[test]
    fn thread_spawn_failed_display() {
        let err = GameError::ThreadSpawnFailed {
            reason: "generation producer: resource limit".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("thread spawn failed"));
        assert!(msg.contains("generation producer"));
        assert!(err.source().is_none());
    }

    #[test]
    fn lookahead_too_small_display() {
        let err = GameError::LookaheadTooSmall { configured: 1 };
        assert_eq!(err.to_string(), "lookahead 1 is below minimum of 2");
    }
}
