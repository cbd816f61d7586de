//! Process execution, platform detection and signal handling.

pub mod command;
#[cfg(test)]
pub(crate) mod fake;
pub mod platform;
pub mod signal;

pub use command::{CommandResult, CommandRunner, Invocation, SystemRunner};
pub use platform::{has_tty, is_ci};
pub use signal::{install_interrupt_handler, CANCELLED_NOTICE};
