use std::time::Duration;

use shared_types::{CaseFacts, IntakeError, Summarizer, SummaryInput};

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Body of the deferred summarizer task: wait out `delay`, then ask the
/// summarizer for case facts. The caller feeds the result back with the
/// run's ticket.
pub async fn run_summarizer<S: Summarizer>(
    summarizer: &S,
    input: SummaryInput,
    delay: Duration,
) -> Result<CaseFacts, IntakeError> {
    sleep(delay).await;
    summarizer.summarize(input).await
}
