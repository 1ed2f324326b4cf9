use thiserror::Error;

/// Errors raised by the game core.
///
/// All of these are integration errors: the shell only ever emits bug ids it
/// enumerated from the catalog, and catalogs/rules are built once at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown bug identifier: {bug_id:?}")]
    UnknownBugIdentifier { bug_id: String },
    #[error("target of {target} correct guesses is invalid for a catalog with {hostile} hostile bugs")]
    InvalidTarget { target: usize, hostile: usize },
    #[error("invalid bug catalog: {0}")]
    InvalidCatalog(String),
    #[error("help carousel needs at least one page")]
    EmptyCarousel,
}
