//! Bug-game state machine.
//!
//! Every click is resolved in two steps: [`classify`] picks a [`Transition`]
//! from the clicked bug and the current state, then [`GameRules::handle_bug_click`]
//! applies it and produces the next state plus the feedback to show. Both steps
//! are pure; [`GameSession`] is the thin owning wrapper the shell drives.

use arrayvec::ArrayVec;

use crate::catalog::{BugCatalog, BugSlot};
use crate::error::GameError;
use crate::snapshot::GameSnapshot;
use crate::types::{FeedbackKind, MAX_CATALOG_BUGS, TARGET_CORRECT_GUESSES};

/// One step of the win-condition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Friendly bug: all progress is discarded, any win is cleared.
    Reset,
    /// Hostile bug clicked while a win is shown: a new round starts with it.
    FreshRound,
    /// Hostile bug that is already counted: nothing changes.
    Repeat,
    /// New hostile bug that does not complete the target.
    Progress,
    /// New hostile bug that completes the target.
    Win,
}

impl Transition {
    pub fn feedback(self) -> FeedbackKind {
        match self {
            Transition::Reset => FeedbackKind::Oops,
            Transition::Win => FeedbackKind::Win,
            Transition::FreshRound | Transition::Repeat | Transition::Progress => {
                FeedbackKind::Correct
            }
        }
    }
}

/// Transition table.
///
/// `reaches_target` is whether counting the clicked bug brings the set to the
/// target size. A hostile click after a win always starts a fresh round, even
/// when that round's single bug already meets a target of 1.
pub fn classify(
    is_friendly: bool,
    has_won: bool,
    already_counted: bool,
    reaches_target: bool,
) -> Transition {
    match (is_friendly, has_won, already_counted, reaches_target) {
        (true, _, _, _) => Transition::Reset,
        (false, true, _, _) => Transition::FreshRound,
        (false, false, true, _) => Transition::Repeat,
        (false, false, false, true) => Transition::Win,
        (false, false, false, false) => Transition::Progress,
    }
}

/// Derived view of where the game is. Not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    FeedbackFriendly,
    FeedbackProgress,
    FeedbackWon,
}

/// Mutable part of a game. Created empty; replaced on every event.
///
/// `correct_bugs` is kept sorted so that equal sets compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    correct_bugs: ArrayVec<BugSlot, MAX_CATALOG_BUGS>,
    has_won: bool,
    current_bug: Option<BugSlot>,
    show_feedback: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn correct_bugs(&self) -> &[BugSlot] {
        &self.correct_bugs
    }

    pub fn is_counted(&self, slot: BugSlot) -> bool {
        self.correct_bugs.binary_search(&slot).is_ok()
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn current_bug(&self) -> Option<BugSlot> {
        self.current_bug
    }

    pub fn show_feedback(&self) -> bool {
        self.show_feedback
    }

    /// Flip feedback panel visibility; nothing else changes.
    pub fn toggle_feedback(&self) -> Self {
        Self {
            show_feedback: !self.show_feedback,
            ..self.clone()
        }
    }

    fn insert(&mut self, slot: BugSlot) {
        if let Err(pos) = self.correct_bugs.binary_search(&slot) {
            // Capacity equals the catalog bound, so a distinct slot always fits.
            self.correct_bugs.insert(pos, slot);
        }
    }
}

/// Catalog plus win target. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    catalog: BugCatalog,
    target: usize,
}

impl GameRules {
    /// Validate `target` against the catalog: `1 <= target <= hostile bugs`.
    pub fn new(catalog: BugCatalog, target: usize) -> Result<Self, GameError> {
        let hostile = catalog.hostile_count();
        if target == 0 || target > hostile {
            return Err(GameError::InvalidTarget { target, hostile });
        }
        Ok(Self { catalog, target })
    }

    /// Standard catalog with the default target.
    pub fn standard() -> Self {
        Self {
            catalog: BugCatalog::standard(),
            target: TARGET_CORRECT_GUESSES,
        }
    }

    pub fn catalog(&self) -> &BugCatalog {
        &self.catalog
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Resolve one click.
    ///
    /// Unknown ids are rejected with [`GameError::UnknownBugIdentifier`] and
    /// leave the caller's state untouched.
    pub fn handle_bug_click(
        &self,
        state: &GameState,
        bug_id: &str,
    ) -> Result<(GameState, FeedbackKind), GameError> {
        let (slot, entry) = self
            .catalog
            .lookup(bug_id)
            .and_then(|slot| self.catalog.get(slot).map(|entry| (slot, entry)))
            .ok_or_else(|| GameError::UnknownBugIdentifier {
                bug_id: bug_id.to_string(),
            })?;
        Ok(self.apply_click(state, slot, entry.descriptor.is_friendly))
    }

    fn apply_click(
        &self,
        state: &GameState,
        slot: BugSlot,
        is_friendly: bool,
    ) -> (GameState, FeedbackKind) {
        let transition = self.transition_for(state, slot, is_friendly);

        let mut next = state.clone();
        next.current_bug = Some(slot);
        next.show_feedback = true;

        match transition {
            Transition::Reset => {
                next.has_won = false;
                next.correct_bugs.clear();
            }
            Transition::FreshRound => {
                next.has_won = false;
                next.correct_bugs.clear();
                next.insert(slot);
            }
            Transition::Repeat => {}
            Transition::Progress => {
                next.insert(slot);
            }
            Transition::Win => {
                next.has_won = true;
                next.correct_bugs.clear();
            }
        }

        (next, transition.feedback())
    }

    // `slot` must come from a catalog lookup.
    fn transition_for(&self, state: &GameState, slot: BugSlot, is_friendly: bool) -> Transition {
        let already_counted = !state.has_won && state.is_counted(slot);
        let reaches_target = !state.has_won
            && !already_counted
            && state.correct_bugs.len() + 1 == self.target;
        classify(is_friendly, state.has_won, already_counted, reaches_target)
    }

    pub fn phase(&self, state: &GameState) -> Phase {
        let Some(slot) = state.current_bug else {
            return Phase::Idle;
        };
        if state.has_won {
            return Phase::FeedbackWon;
        }
        match self.catalog.get(slot) {
            Some(e) if e.descriptor.is_friendly => Phase::FeedbackFriendly,
            _ => Phase::FeedbackProgress,
        }
    }

    /// Feedback the panel should show for `state`, if any click happened yet.
    pub fn feedback_for(&self, state: &GameState) -> Option<FeedbackKind> {
        match self.phase(state) {
            Phase::Idle => None,
            Phase::FeedbackWon => Some(FeedbackKind::Win),
            Phase::FeedbackFriendly => Some(FeedbackKind::Oops),
            Phase::FeedbackProgress => Some(FeedbackKind::Correct),
        }
    }

    pub fn snapshot<'a>(&'a self, state: &'a GameState) -> GameSnapshot<'a> {
        GameSnapshot {
            catalog: &self.catalog,
            show_feedback: state.show_feedback,
            feedback: self.feedback_for(state),
            current_bug_id: state
                .current_bug
                .and_then(|slot| self.catalog.get(slot))
                .map(|e| e.id.as_str()),
            has_won: state.has_won,
            found: state.correct_bugs(),
            target: self.target,
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// A running game: rules plus the one state they drive.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    rules: GameRules,
    state: GameState,
}

impl GameSession {
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            state: GameState::new(),
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Click a bug by id. On error the state is unchanged.
    pub fn click(&mut self, bug_id: &str) -> Result<FeedbackKind, GameError> {
        let (next, feedback) = self.rules.handle_bug_click(&self.state, bug_id)?;
        self.state = next;
        Ok(feedback)
    }

    pub fn toggle_feedback(&mut self) {
        self.state = self.state.toggle_feedback();
    }

    pub fn phase(&self) -> Phase {
        self.rules.phase(&self.state)
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        self.rules.snapshot(&self.state)
    }
}
