pub mod formatter;
pub mod session;

pub use formatter::AccountFormatter;
pub use session::ConsoleSession;
