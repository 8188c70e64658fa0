pub mod command;
pub mod controller;
pub mod render;

pub use command::Command;
pub use controller::{PageView, SearchController, SearchState, SearchTicket, ViewStatus};
pub use render::render;
