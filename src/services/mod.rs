pub mod busy;
pub mod notifier;
pub mod outcome;

pub use busy::{BusyFlag, BusyToken};
pub use notifier::{ConsoleNotifier, Notice, Notifier, RecordingNotifier};
pub use outcome::Outcome;
