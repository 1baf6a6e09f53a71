mod action;
mod advice;
mod backend;
mod disease;
mod event;
mod intent;
mod language;
mod quiz;
mod recommendations;
mod slash_commands;
mod speech;
mod turn;
mod weather;

pub use action::*;
pub use advice::*;
pub use backend::*;
pub use disease::*;
pub use event::*;
pub use intent::*;
pub use language::*;
pub use quiz::*;
pub use recommendations::*;
pub use slash_commands::*;
pub use speech::*;
pub use turn::*;
pub use weather::*;
