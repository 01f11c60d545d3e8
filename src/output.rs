//! Output destinations and the interactivity decision.
//!
//! A destination is any `Write` sink that can also say whether it is backed by
//! a terminal. Terminal sinks get the animated redraw; everything else gets
//! plain newline-terminated lines.

use crossterm::tty::IsTty;
use std::fs::File;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

static FORCE_INTERACTIVE: AtomicBool = AtomicBool::new(false);

/// Treats every destination as a terminal while set.
///
/// Meant for test harnesses that capture output into buffers but still want
/// the animated path. Callers restore the previous value when done.
pub fn set_force_interactive(enabled: bool) {
    FORCE_INTERACTIVE.store(enabled, Ordering::SeqCst);
}

/// Current value of the force-interactive override
pub fn force_interactive() -> bool {
    FORCE_INTERACTIVE.load(Ordering::SeqCst)
}

/// A sink the spinner can render into.
pub trait Destination: Write + Send + 'static {
    /// Whether the sink is a character device attached to a terminal
    fn is_terminal(&self) -> bool {
        false
    }
}

impl Destination for Stdout {
    fn is_terminal(&self) -> bool {
        self.is_tty()
    }
}

impl Destination for Stderr {
    fn is_terminal(&self) -> bool {
        self.is_tty()
    }
}

impl Destination for File {
    fn is_terminal(&self) -> bool {
        self.is_tty()
    }
}

impl Destination for Vec<u8> {}

/// Decides once, at start time, how a destination is driven.
pub fn is_interactive(destination: &dyn Destination) -> bool {
    force_interactive() || destination.is_terminal()
}

/// Clonable in-memory sink. Every clone appends to the same buffer, so one
/// handle can be given to a spinner and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Drops everything written so far
    pub fn clear(&self) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Destination for SharedBuffer {}

/// Writes `text` and flushes, swallowing failures. A broken display must not
/// take the caller down with it.
pub(crate) fn write_best_effort(destination: &mut dyn Destination, text: &str) {
    let result = destination
        .write_all(text.as_bytes())
        .and_then(|()| destination.flush());
    if let Err(e) = result {
        tracing::debug!("Dropping spinner output after write failure: {e}");
    }
}
