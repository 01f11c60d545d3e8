//! The spinner state machine.
//!
//! A [`Spinner`] owns the message, the running flag and the render
//! configuration. `start` launches one background task per run: on a
//! terminal it redraws the current frame every tick, elsewhere it prints the
//! message once and then only waits for the run to end.

use crate::constants::TICK_INTERVAL_MS;
use crate::context::CancelToken;
use crate::output::{self, Destination, write_best_effort};
use crate::render::{self, Outcome};
use crate::style::{Color, Position, Style, clamp_alpha};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// One configuration override applied on top of the defaults.
///
/// Options are applied in order, so a later option for the same field wins.
pub enum SpinnerOption {
    SpinnerColor(Color),
    TextColor(Color),
    DoneSymbol(char),
    DoneSymbolColor(Color),
    FailSymbol(char),
    FailSymbolColor(Color),
    /// Text color of the final line after [`Spinner::fail`]
    FailColor(Color),
    Prefix(String),
    PrefixColor(Color),
    Separator(String),
    SeparatorColor(Color),
    /// Clamped to `[0, 1]`
    SeparatorAlpha(f32),
    Position(Position),
    /// Ignored when empty
    Frames(Vec<char>),
    Writer(Box<dyn Destination>),
}

impl SpinnerOption {
    /// Convenience for [`SpinnerOption::Writer`]
    pub fn writer(destination: impl Destination) -> Self {
        SpinnerOption::Writer(Box::new(destination))
    }

    fn apply(self, style: &mut Style, output: &mut Box<dyn Destination>) {
        match self {
            SpinnerOption::SpinnerColor(color) => style.spinner_color = color,
            SpinnerOption::TextColor(color) => style.text_color = color,
            SpinnerOption::DoneSymbol(symbol) => style.done_symbol = symbol,
            SpinnerOption::DoneSymbolColor(color) => style.done_symbol_color = color,
            SpinnerOption::FailSymbol(symbol) => style.fail_symbol = symbol,
            SpinnerOption::FailSymbolColor(color) => style.fail_symbol_color = color,
            SpinnerOption::FailColor(color) => style.fail_color = Some(color),
            SpinnerOption::Prefix(prefix) => style.prefix = prefix,
            SpinnerOption::PrefixColor(color) => style.prefix_color = color,
            SpinnerOption::Separator(separator) => style.separator = separator,
            SpinnerOption::SeparatorColor(color) => style.separator_color = color,
            SpinnerOption::SeparatorAlpha(alpha) => style.separator_alpha = clamp_alpha(alpha),
            SpinnerOption::Position(position) => style.position = position,
            SpinnerOption::Frames(frames) => {
                if frames.is_empty() {
                    tracing::warn!("Ignoring empty frame sequence, keeping the current frames");
                } else {
                    style.frames = frames;
                }
            }
            SpinnerOption::Writer(destination) => *output = destination,
        }
    }
}

/// State shared between the caller-facing handle and the background task.
struct Shared {
    message: RwLock<String>,
    running: AtomicBool,
    /// Decided at start time, read by stop/fail/update
    interactive: AtomicBool,
    style: Style,
    output: Mutex<Box<dyn Destination>>,
}

impl Shared {
    fn message(&self) -> String {
        self.message
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn write(&self, text: &str) {
        let mut output = self.output.lock().unwrap_or_else(|e| e.into_inner());
        write_best_effort(&mut **output, text);
    }

    fn detect_interactive(&self) -> bool {
        let output = self.output.lock().unwrap_or_else(|e| e.into_inner());
        output::is_interactive(&**output)
    }
}

/// Handle to the task of the current run.
struct Worker {
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl Worker {
    /// Requests termination and waits until the task has fully exited.
    async fn shutdown(self) {
        // Capacity 1: never blocks, and a pending request is as good as a new one.
        let _ = self.stop_tx.try_send(());
        if let Err(e) = self.handle.await
            && e.is_panic()
        {
            tracing::warn!("Spinner task panicked: {e}");
        }
    }
}

/// An animated terminal progress indicator.
///
/// # Examples
///
/// ```rust,no_run
/// use pin_spinner::{CancelToken, Color, Spinner, SpinnerOption};
///
/// #[tokio::main]
/// async fn main() {
///     let spinner = Spinner::new(
///         "Loading...",
///         [
///             SpinnerOption::SpinnerColor(Color::Cyan),
///             SpinnerOption::Prefix("ftl".to_string()),
///         ],
///     );
///     let cancel = spinner.start(&CancelToken::new());
///
///     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
///     spinner.update_message("Still working...");
///     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
///
///     spinner.stop(Some("Done!")).await;
///     cancel.cancel();
/// }
/// ```
pub struct Spinner {
    shared: Arc<Shared>,
    worker: Mutex<Option<Worker>>,
}

impl Spinner {
    /// Creates an idle spinner writing to stdout unless a
    /// [`SpinnerOption::Writer`] says otherwise.
    pub fn new(
        message: impl Into<String>,
        options: impl IntoIterator<Item = SpinnerOption>,
    ) -> Self {
        let mut style = Style::default();
        let mut output: Box<dyn Destination> = Box::new(io::stdout());
        for option in options {
            option.apply(&mut style, &mut output);
        }

        Self {
            shared: Arc::new(Shared {
                message: RwLock::new(message.into()),
                running: AtomicBool::new(false),
                interactive: AtomicBool::new(false),
                style,
                output: Mutex::new(output),
            }),
            worker: Mutex::new(None),
        }
    }

    /// Starts a run and returns a token that cancels it silently.
    ///
    /// Cancelling either `ctx` or the returned token ends the animation
    /// without a final line. When the spinner is already running nothing
    /// happens and the returned token is not observed by anyone.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self, ctx: &CancelToken) -> CancelToken {
        let mut slot = self.worker.lock().unwrap_or_else(|e| e.into_inner());
        if self
            .shared
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("Spinner already running, ignoring start");
            return CancelToken::new();
        }

        let interactive = self.shared.detect_interactive();
        self.shared.interactive.store(interactive, Ordering::SeqCst);
        tracing::debug!(interactive, "Starting spinner");

        let token = CancelToken::new();
        let (stop_tx, stop_rx) = mpsc::channel(1);
        let shared = Arc::clone(&self.shared);
        let parent = ctx.clone();
        let child = token.clone();

        let handle = if interactive {
            tokio::spawn(animate(shared, parent, child, stop_rx))
        } else {
            let line = format!("{}\n", self.shared.message());
            self.shared.write(&line);
            tokio::spawn(wait_for_end(shared, parent, child, stop_rx))
        };

        // A previous worker here has already exited through cancellation.
        *slot = Some(Worker { stop_tx, handle });
        token
    }

    /// Ends the run with the done symbol, printing `message` if given.
    pub async fn stop(&self, message: Option<&str>) {
        self.finish(Outcome::Done, message).await;
    }

    /// Ends the run with the fail symbol, printing `message` if given.
    pub async fn fail(&self, message: Option<&str>) {
        self.finish(Outcome::Failed, message).await;
    }

    async fn finish(&self, outcome: Outcome, message: Option<&str>) {
        let worker = {
            let mut slot = self.worker.lock().unwrap_or_else(|e| e.into_inner());
            if self
                .shared
                .running
                .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                return;
            }
            slot.take()
        };
        tracing::debug!(?outcome, "Stopping spinner");

        if !self.shared.interactive.load(Ordering::SeqCst) {
            if let Some(message) = message {
                self.shared.write(&format!("{message}\n"));
            }
            if let Some(worker) = worker {
                worker.shutdown().await;
            }
            return;
        }

        // No tick may land after the final line.
        if let Some(worker) = worker {
            worker.shutdown().await;
        }

        let mut text = render::clear_sequence();
        if let Some(message) = message {
            text.push_str(&render::final_line(&self.shared.style, outcome, message));
        }
        self.shared.write(&text);
    }

    /// Replaces the message shown by the running spinner.
    ///
    /// On a terminal the next tick picks it up; elsewhere it is printed
    /// right away as its own line.
    pub fn update_message(&self, message: impl Into<String>) {
        if !self.is_running() {
            return;
        }
        let message = message.into();
        {
            let mut current = self.shared.message.write().unwrap_or_else(|e| e.into_inner());
            current.clone_from(&message);
        }
        if !self.shared.interactive.load(Ordering::SeqCst) {
            self.shared.write(&format!("{message}\n"));
        }
    }

    pub fn message(&self) -> String {
        self.shared.message()
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst)
    }

    /// The render configuration after all options were applied
    pub fn style(&self) -> &Style {
        &self.shared.style
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        let slot = self.worker.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(worker) = slot.take() {
            let _ = worker.stop_tx.try_send(());
        }
    }
}

/// Redraw loop for terminal destinations.
async fn animate(
    shared: Arc<Shared>,
    parent: CancelToken,
    token: CancelToken,
    mut stop_rx: mpsc::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let frames = &shared.style.frames;
    let mut frame_index = 0;

    loop {
        tokio::select! {
            biased;
            _ = stop_rx.recv() => return,
            _ = parent.cancelled() => break,
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let message = shared.message();
                let line = render::frame_line(&shared.style, frames[frame_index], &message);
                shared.write(&line);
                tracing::trace!(frame_index, "Rendered spinner frame");
                frame_index = (frame_index + 1) % frames.len();
            }
        }
    }

    tracing::debug!("Spinner cancelled");
    shared.write(&render::clear_sequence());
    shared.running.store(false, Ordering::SeqCst);
}

/// Parks until the run ends on non-terminal destinations; never writes.
async fn wait_for_end(
    shared: Arc<Shared>,
    parent: CancelToken,
    token: CancelToken,
    mut stop_rx: mpsc::Receiver<()>,
) {
    tokio::select! {
        biased;
        _ = stop_rx.recv() => {}
        _ = parent.cancelled() => {
            tracing::debug!("Spinner cancelled");
            shared.running.store(false, Ordering::SeqCst);
        }
        _ = token.cancelled() => {
            tracing::debug!("Spinner cancelled");
            shared.running.store(false, Ordering::SeqCst);
        }
    }
}
