//! Terminal presentation: a pure view over session snapshots plus a small
//! raw-mode renderer that flushes it.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
