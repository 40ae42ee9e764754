pub mod history;
pub mod state;

pub use history::History;
pub use state::{HOME_DIR, Palette, ROOT_DIR, SessionState, Theme};
