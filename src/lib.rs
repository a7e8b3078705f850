pub mod cli;
pub mod fetch;
pub mod parser;
pub mod schema;
pub mod seed;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use ui::{ConsoleUi, Phase, SilentUi, Ui};
