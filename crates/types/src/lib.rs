//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, event logging).
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_CORRECT_GUESSES` | 2 | Distinct hostile bugs needed to win |
//! | `MAX_CATALOG_BUGS` | 16 | Upper bound on catalog size |
//! | `TICK_MS` | 50 | Input poll interval of the terminal runner |
//! | `STATIC_REDRAW_MS` | 500 | Forced redraw interval when nothing changed |
//!
//! # Examples
//!
//! ```
//! use bug_hunt_types::{FeedbackKind, GameAction, Screen};
//!
//! // Feedback texts shown in the feedback panel
//! assert_eq!(FeedbackKind::Win.header(), "Congratulations!");
//! assert_eq!(FeedbackKind::Oops.body(), "That's a good bug.");
//!
//! // Event log tags
//! assert_eq!(GameAction::SelectBug(2).name(), "select");
//! assert_eq!(GameAction::NextPage.name(), "nextPage");
//!
//! // Screens
//! assert_eq!(Screen::from_str("HELP"), Some(Screen::Help));
//! ```

/// Number of distinct hostile bugs that must be found to win.
pub const TARGET_CORRECT_GUESSES: usize = 2;

/// Maximum number of entries a bug catalog may hold.
///
/// Game state tracks found bugs in a fixed-capacity set of this size.
pub const MAX_CATALOG_BUGS: usize = 16;

/// Input poll interval of the terminal runner in milliseconds.
pub const TICK_MS: u32 = 50;

/// Forced redraw interval when the screen content is unchanged (picks up resizes).
pub const STATIC_REDRAW_MS: u32 = 500;

/// Keyboard key that selects catalog slot `slot`: `1`..`9`, then `a`..`g`.
pub fn slot_key(slot: u8) -> Option<char> {
    match slot {
        0..=8 => Some((b'1' + slot) as char),
        9..=15 if (slot as usize) < MAX_CATALOG_BUGS => Some((b'a' + slot - 9) as char),
        _ => None,
    }
}

/// Inverse of [`slot_key`].
pub fn slot_for_key(key: char) -> Option<u8> {
    match key {
        '1'..='9' => Some(key as u8 - b'1'),
        'a'..='g' => Some(key as u8 - b'a' + 9).filter(|&s| (s as usize) < MAX_CATALOG_BUGS),
        _ => None,
    }
}


/// Which message the feedback panel shows after a click.
///
/// - **Correct**: a hostile bug was found (progress made or repeated)
/// - **Win**: the target count of distinct hostile bugs was reached
/// - **Oops**: a friendly bug was clicked and progress was reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Correct,
    Win,
    Oops,
}

impl FeedbackKind {
    /// Feedback panel header line.
    pub fn header(&self) -> &'static str {
        match self {
            FeedbackKind::Correct => "Correct!",
            FeedbackKind::Win => "Congratulations!",
            FeedbackKind::Oops => "Oops!",
        }
    }

    /// Feedback panel body text.
    pub fn body(&self) -> &'static str {
        match self {
            FeedbackKind::Correct => "That's a bad bug.",
            FeedbackKind::Win => "You have won the game.",
            FeedbackKind::Oops => "That's a good bug.",
        }
    }

    /// Lowercase name used in event logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Correct => "correct",
            FeedbackKind::Win => "win",
            FeedbackKind::Oops => "oops",
        }
    }
}

/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Game,
    Help,
}

impl Screen {
    /// Parse screen from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bug_hunt_types::Screen;
    ///
    /// assert_eq!(Screen::from_str("game"), Some(Screen::Game));
    /// assert_eq!(Screen::from_str("Help"), Some(Screen::Help));
    /// assert_eq!(Screen::from_str("menu"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "game" => Some(Screen::Game),
            "help" => Some(Screen::Help),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Game => "game",
            Screen::Help => "help",
        }
    }
}

/// Actions that the shell forwards to the application.
///
/// Bug selections carry the catalog slot (0-based position in the catalog);
/// the application resolves the slot to the bug identifier before handing it
/// to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Click the bug in the given catalog slot
    SelectBug(u8),
    /// Close the feedback panel
    ToggleFeedback,
    /// Help carousel: next page
    NextPage,
    /// Help carousel: previous page
    PrevPage,
    /// Switch to the help screen
    OpenHelp,
    /// Return from the help screen to the game
    Back,
}

impl GameAction {
    /// Action name without payload, used as the event log tag.
    pub fn name(&self) -> &'static str {
        match self {
            GameAction::SelectBug(_) => "select",
            GameAction::ToggleFeedback => "toggleFeedback",
            GameAction::NextPage => "nextPage",
            GameAction::PrevPage => "prevPage",
            GameAction::OpenHelp => "openHelp",
            GameAction::Back => "back",
        }
    }
}
