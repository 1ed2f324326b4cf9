//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the bug game and the help carousel.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: The same clicks always produce the same states
//! - **Testable**: Every transition is a pure function of state and event
//! - **Portable**: Can be mounted by any shell (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`catalog`]: Fixed, ordered set of bugs tagged friendly or hostile
//! - [`game_state`]: Win-condition state machine and the owning session
//! - [`carousel`]: Help pages with a clamped cursor
//! - [`snapshot`]: Render instructions for the shell
//! - [`error`]: The core error enum
//!
//! # Game Rules
//!
//! - Clicking a **hostile** bug counts it once; repeated clicks are idempotent
//! - Finding `target` distinct hostile bugs wins and clears progress
//! - Clicking a hostile bug after a win starts a fresh round with that bug
//! - Clicking a **friendly** bug always discards progress and any win
//! - Unknown bug identifiers are rejected, never guessed
//!
//! # Example
//!
//! ```
//! use bug_hunt_core::{GameSession, Phase};
//! use bug_hunt_types::FeedbackKind;
//!
//! let mut game = GameSession::default();
//!
//! assert_eq!(game.click("MITE").unwrap(), FeedbackKind::Correct);
//! assert_eq!(game.click("SLUG").unwrap(), FeedbackKind::Win);
//! assert_eq!(game.phase(), Phase::FeedbackWon);
//!
//! assert_eq!(game.click("LADY_BUG").unwrap(), FeedbackKind::Oops);
//! assert!(game.click("NONEXISTENT").is_err());
//! ```

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod game_state;
pub mod snapshot;

pub use bug_hunt_types as types;

// Re-export commonly used types for convenience
pub use carousel::{HelpCarousel, HelpPage};
pub use catalog::{BugCatalog, BugDescriptor, BugEntry, BugSlot};
pub use error::GameError;
pub use game_state::{classify, GameRules, GameSession, GameState, Phase, Transition};
pub use snapshot::{GameSnapshot, PageSnapshot};
