pub mod console;

pub use console::{parse_choice, Console, TerminalConsole};
