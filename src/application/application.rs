use super::ApplicationState;
use crate::dto::{
    input::{InputLine, NotificationRequest},
    output::Evaluation,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub emitted: usize,
    pub skipped: usize,
    pub malformed: usize,
}

///
/// Evaluates every newline delimited JSON [InputLine] until input ends.
///
/// Lines are evaluated one after another, so the same event repeated
/// in the input is shown only once. Malformed lines are logged and skipped.
///
pub async fn run<R>(state: &ApplicationState, input: R) -> anyhow::Result<RunSummary>
where
    R: AsyncBufRead + Unpin,
{
    let permission = state
        .notifications_service
        .ensure_permission_requested()
        .await;
    tracing::info!(permission = permission.as_ref(), "ready to notify");

    let mut summary = RunSummary::default();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request = match serde_json::from_str::<InputLine>(line) {
            Ok(input_line) => NotificationRequest::from(input_line),
            Err(err) => {
                tracing::warn!(%err, "malformed input line");
                summary.malformed += 1;
                continue;
            }
        };

        match state.notifications_service.notify(request).await {
            Evaluation::Emitted => summary.emitted += 1,
            Evaluation::Skipped(reason) => {
                tracing::debug!(reason = reason.as_ref(), "notification skipped");
                summary.skipped += 1;
            }
        }
    }

    tracing::info!(
        emitted = summary.emitted,
        skipped = summary.skipped,
        malformed = summary.malformed,
        "input finished"
    );

    Ok(summary)
}
