use pin_spinner::{CancelToken, SharedBuffer, Spinner, SpinnerOption};
use std::time::Duration;

fn buffered(message: &str) -> (Spinner, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let spinner = Spinner::new(message, [SpinnerOption::writer(buffer.clone())]);
    (spinner, buffer)
}

async fn wait_until_stopped(spinner: &Spinner) {
    for _ in 0..50 {
        if !spinner.is_running() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("spinner still running after cancellation");
}

#[tokio::test]
async fn test_message_sequence_is_printed_line_by_line() {
    let (spinner, buffer) = buffered("Initial");

    let cancel = spinner.start(&CancelToken::new());
    tokio::time::sleep(Duration::from_millis(150)).await;
    spinner.update_message("Updated");
    tokio::time::sleep(Duration::from_millis(150)).await;
    spinner.stop(Some("Done")).await;
    cancel.cancel();

    assert_eq!(buffer.contents(), "Initial\nUpdated\nDone\n");
}

#[tokio::test]
async fn test_running_flag_follows_lifecycle() {
    let (spinner, _buffer) = buffered("Working");
    assert!(!spinner.is_running());

    let _cancel = spinner.start(&CancelToken::new());
    assert!(spinner.is_running());

    spinner.stop(None).await;
    assert!(!spinner.is_running());
}

#[tokio::test]
async fn test_stop_without_message_prints_nothing() {
    let (spinner, buffer) = buffered("Working");
    let _cancel = spinner.start(&CancelToken::new());
    buffer.clear();

    spinner.stop(None).await;
    assert_eq!(buffer.contents(), "");
}

#[tokio::test]
async fn test_stop_with_message_prints_plain_line() {
    let (spinner, buffer) = buffered("Working");
    let _cancel = spinner.start(&CancelToken::new());
    buffer.clear();

    spinner.stop(Some("X")).await;
    assert_eq!(buffer.contents(), "X\n");
}

#[tokio::test]
async fn test_fail_with_message_prints_plain_line() {
    let (spinner, buffer) = buffered("Working");
    let _cancel = spinner.start(&CancelToken::new());
    spinner.fail(Some("Broken")).await;

    // No symbols or escape codes on non-terminal destinations
    assert_eq!(buffer.contents(), "Working\nBroken\n");
}

#[tokio::test]
async fn test_second_start_is_a_no_op() {
    let (spinner, buffer) = buffered("Testing");

    let first = spinner.start(&CancelToken::new());
    let second = spinner.start(&CancelToken::new());

    // The inert token does not end the run
    second.cancel();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(spinner.is_running());

    spinner.stop(Some("Done")).await;
    first.cancel();
    assert_eq!(buffer.contents(), "Testing\nDone\n");
}

#[tokio::test]
async fn test_calls_before_start_are_silent() {
    let (spinner, buffer) = buffered("Testing");
    spinner.update_message("Ignored");
    spinner.stop(Some("Done")).await;
    spinner.fail(Some("Failed")).await;

    assert_eq!(buffer.contents(), "");
    assert_eq!(spinner.message(), "Testing");
}

#[tokio::test]
async fn test_cancel_ends_run_without_final_line() {
    let (spinner, buffer) = buffered("Working");
    let cancel = spinner.start(&CancelToken::new());

    cancel.cancel();
    wait_until_stopped(&spinner).await;
    assert_eq!(buffer.contents(), "Working\n");

    // Stop after cancellation is a no-op
    spinner.stop(Some("Too late")).await;
    assert_eq!(buffer.contents(), "Working\n");
}

#[tokio::test]
async fn test_parent_context_cancellation_ends_run() {
    let (spinner, buffer) = buffered("Working");
    let parent = CancelToken::new();
    let _cancel = spinner.start(&parent);

    parent.cancel();
    wait_until_stopped(&spinner).await;
    assert_eq!(buffer.contents(), "Working\n");
}

#[tokio::test]
async fn test_cancel_is_idempotent_after_stop() {
    let (spinner, buffer) = buffered("Working");
    let cancel = spinner.start(&CancelToken::new());
    spinner.stop(Some("Done")).await;

    cancel.cancel();
    cancel.cancel();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(buffer.contents(), "Working\nDone\n");
    assert!(!spinner.is_running());
}

#[tokio::test]
async fn test_spinner_can_be_restarted() {
    let (spinner, buffer) = buffered("First");
    let _cancel = spinner.start(&CancelToken::new());
    spinner.stop(Some("First done")).await;

    spinner.update_message("ignored while stopped");
    let _cancel = spinner.start(&CancelToken::new());
    spinner.update_message("Second");
    spinner.stop(Some("Second done")).await;

    assert_eq!(
        buffer.contents(),
        "First\nFirst done\nFirst\nSecond\nSecond done\n"
    );
}

#[tokio::test]
async fn test_message_accessor_tracks_updates() {
    let (spinner, _buffer) = buffered("One");
    let _cancel = spinner.start(&CancelToken::new());
    spinner.update_message("Two");
    assert_eq!(spinner.message(), "Two");
    spinner.stop(None).await;
    assert_eq!(spinner.message(), "Two");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_updates_are_not_torn() {
    let (spinner, buffer) = buffered("start");
    let spinner = std::sync::Arc::new(spinner);
    let _cancel = spinner.start(&CancelToken::new());

    let mut handles = Vec::new();
    for worker in 0..4 {
        let spinner = std::sync::Arc::clone(&spinner);
        handles.push(tokio::spawn(async move {
            for step in 0..25 {
                spinner.update_message(format!("worker-{worker}-step-{step}"));
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    spinner.stop(None).await;

    let contents = buffer.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 101);
    assert!(
        lines[1..]
            .iter()
            .all(|line| line.starts_with("worker-") && line.contains("-step-"))
    );
}
