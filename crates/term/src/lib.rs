//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! libraries and renders into a framebuffer that is diffed and flushed to the
//! terminal backend.
//!
//! - [`fb`]: framebuffer, styles and box glyphs
//! - [`game_view`]: bug row, progress line and feedback panel
//! - [`help_view`]: help carousel card
//! - [`renderer`]: crossterm backend with diff encoding
//! - [`throttle`]: skip redraws of unchanged frames

pub mod fb;
pub mod game_view;
pub mod help_view;
pub mod renderer;
pub mod throttle;

pub use bug_hunt_core as core;
pub use bug_hunt_types as types;

pub use fb::{BoxGlyphs, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, TileRect, Viewport};
pub use help_view::{wrap_words, HelpView};
pub use renderer::{changed_spans, encode_diff_into, encode_full_into, Span, TerminalRenderer};
pub use throttle::RenderThrottle;
