//! Application shell: screen routing between the game and the help carousel.
//!
//! The app forwards bug selections to the state machine only for slots that
//! exist in the catalog, so the ids it hands over are always ones it
//! enumerated itself. Actions that make no sense on the current screen are
//! ignored.

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::{BugCatalog, BugSlot, GameError, GameRules, GameSession, HelpCarousel};
use crate::event_log::{EventLog, EventRecord, GameRecord};
use crate::term::{FrameBuffer, GameView, HelpView, Viewport};
use crate::types::{GameAction, Screen};

pub struct App {
    screen: Screen,
    game: GameSession,
    help: HelpCarousel,
    game_view: GameView,
    help_view: HelpView,
    log: EventLog,
    seq: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::with_parts(GameSession::default(), HelpCarousel::standard(), Screen::Game)
    }
}

impl App {
    /// Build the standard game with the configured target, start screen and log.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let rules = GameRules::new(BugCatalog::standard(), config.target)?;
        let mut app = Self::with_parts(
            GameSession::new(rules),
            HelpCarousel::standard(),
            config.start_screen,
        );
        if let Some(path) = &config.log_path {
            app.log = EventLog::open(path)?;
        }
        Ok(app)
    }

    pub fn with_parts(game: GameSession, help: HelpCarousel, screen: Screen) -> Self {
        Self {
            screen,
            game,
            help,
            game_view: GameView::default(),
            help_view: HelpView::default(),
            log: EventLog::disabled(),
            seq: 0,
        }
    }

    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameSession {
        &self.game
    }

    pub fn help(&self) -> &HelpCarousel {
        &self.help
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Apply one action. Returns whether it changed anything worth redrawing.
    ///
    /// A `GameError` here means the catalog and the shell disagree; it is
    /// passed up unchanged.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, GameError> {
        let mut bug_id: Option<String> = None;

        let handled = match (self.screen, action) {
            (Screen::Game, GameAction::SelectBug(slot)) => {
                match self.game.rules().catalog().get(BugSlot(slot)) {
                    Some(entry) => {
                        let id = entry.id.clone();
                        self.game.click(&id)?;
                        bug_id = Some(id);
                        true
                    }
                    None => false,
                }
            }
            (Screen::Game, GameAction::ToggleFeedback) => {
                // Close only; a hidden panel reopens on the next click.
                if self.game.state().show_feedback() {
                    self.game.toggle_feedback();
                    true
                } else {
                    false
                }
            }
            (Screen::Game, GameAction::OpenHelp) => {
                self.help.rewind();
                self.screen = Screen::Help;
                true
            }
            (Screen::Help, GameAction::NextPage) => self.help.page_up(),
            (Screen::Help, GameAction::PrevPage) => self.help.page_down(),
            (Screen::Help, GameAction::Back) => {
                self.screen = Screen::Game;
                true
            }
            _ => false,
        };

        if handled {
            self.log_event(action, bug_id.as_deref());
        }
        Ok(handled)
    }

    fn log_event(&mut self, action: GameAction, bug_id: Option<&str>) {
        self.seq += 1;
        if !self.log.is_enabled() {
            return;
        }

        let snap = self.game.snapshot();
        let found = snap
            .found
            .iter()
            .filter_map(|&slot| snap.catalog.get(slot))
            .map(|e| e.id.as_str())
            .collect();
        let record = EventRecord {
            seq: self.seq,
            event: action.name(),
            bug_id,
            screen: self.screen.as_str(),
            game: GameRecord {
                has_won: snap.has_won,
                show_feedback: snap.show_feedback,
                found,
                current_bug_id: snap.current_bug_id,
                feedback: snap.feedback.map(|f| f.as_str()),
            },
            page: self.help.index(),
        };
        self.log.record(&record);
    }

    /// Draw the current screen.
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Game => self
                .game_view
                .render_into(&self.game.snapshot(), viewport, fb),
            Screen::Help => self
                .help_view
                .render_into(&self.help.snapshot(), viewport, fb),
        }
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }
}
