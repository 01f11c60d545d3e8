//! Terminal Progress Spinner Library
//!
//! This library renders a rotating glyph next to a status message, lets the
//! message change while the spinner runs, and ends with a success or failure
//! summary line. On a terminal the line is redrawn in place; on pipes, files
//! and buffers each message is printed once as a plain line.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pin_spinner::{CancelToken, Color, Position, Spinner, SpinnerOption};
//!
//! #[tokio::main]
//! async fn main() {
//!     let spinner = Spinner::new(
//!         "Uploading",
//!         [
//!             SpinnerOption::Position(Position::Right),
//!             SpinnerOption::TextColor(Color::Yellow),
//!             SpinnerOption::FailColor(Color::Red),
//!         ],
//!     );
//!
//!     let cancel = spinner.start(&CancelToken::new());
//!     tokio::time::sleep(std::time::Duration::from_secs(2)).await;
//!
//!     spinner.update_message("Almost done...");
//!     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//!
//!     spinner.stop(Some("Upload complete")).await;
//!     cancel.cancel();
//! }
//! ```

pub mod constants;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod render;
pub mod spinner;
pub mod style;
pub mod theme;

// Re-export commonly used types for convenience
pub use context::CancelToken;
pub use error::PinError;
pub use output::{Destination, SharedBuffer, force_interactive, set_force_interactive};
pub use spinner::{Spinner, SpinnerOption};
pub use style::{Color, Position, Style};
pub use theme::Theme;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
