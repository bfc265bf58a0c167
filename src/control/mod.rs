mod command;
mod repeat;

pub use command::Command;
pub use repeat::HoldTimer;
