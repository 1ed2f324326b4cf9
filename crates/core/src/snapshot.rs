//! Render instructions handed to the shell.
//!
//! Snapshots borrow from the rules/state they were taken from and are cheap to
//! build every frame.

use crate::carousel::HelpPage;
use crate::catalog::{BugCatalog, BugSlot};
use crate::types::FeedbackKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot<'a> {
    pub catalog: &'a BugCatalog,
    pub show_feedback: bool,
    pub feedback: Option<FeedbackKind>,
    pub current_bug_id: Option<&'a str>,
    pub has_won: bool,
    pub found: &'a [BugSlot],
    pub target: usize,
}

impl<'a> GameSnapshot<'a> {
    pub fn feedback_header(&self) -> &'static str {
        self.feedback.map(|f| f.header()).unwrap_or("")
    }

    pub fn feedback_body(&self) -> &'static str {
        self.feedback.map(|f| f.body()).unwrap_or("")
    }

    /// Whether the feedback panel should be drawn this frame.
    pub fn feedback_visible(&self) -> bool {
        self.show_feedback && self.feedback.is_some()
    }

    pub fn is_found(&self, slot: BugSlot) -> bool {
        self.found.contains(&slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSnapshot<'a> {
    pub page_index: usize,
    pub page_count: usize,
    pub image_ref: &'a str,
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> PageSnapshot<'a> {
    pub(crate) fn new(page_index: usize, page_count: usize, page: &'a HelpPage) -> Self {
        Self {
            page_index,
            page_count,
            image_ref: &page.image_ref,
            title: &page.title,
            body: &page.body,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}
