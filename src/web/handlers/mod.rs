//! HTML page and form action handlers.

mod entries;
mod shortener;
mod statistics;
mod submit;
mod theme;

pub use entries::{add_entry_handler, delete_entry_handler, sync_handler};
pub use shortener::shortener_handler;
pub use statistics::{refresh_handler, statistics_handler};
pub use submit::submit_handler;
pub use theme::theme_handler;
