// Guided entry: discrete add/remove editing over typed items, flattened into
// the same plain-text grammar the parsers read.

pub mod formatter;
pub mod handlers;
pub mod session;

pub use formatter::flatten;
pub use session::{EditingSession, GuidedAction};
