#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::fallback::FallbackGenerator;
use crate::domain::models::Action;
use crate::domain::models::AdviceRequest;
use crate::domain::models::AdviceResponse;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;

/// Asks the backend and downgrades any failure to the local fallback. The
/// caller can never tell which path answered.
pub async fn resolve_advice(backend: &BackendBox, request: &AdviceRequest) -> AdviceResponse {
    match backend.query_chat(request).await {
        Ok(res) => {
            tracing::debug!(backend = %backend.name(), context = %res.context, "Advice from backend");
            return res;
        }
        Err(err) => {
            tracing::warn!(
                error = ?err,
                backend = %backend.name(),
                "Advice request failed, using local fallback"
            );
            return FallbackGenerator::chat(request);
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let backend = Arc::new(backend);

        // Lazy default.
        let mut worker: JoinHandle<Result<()>> = tokio::spawn(async {
            return Ok(());
        });

        loop {
            let action = match rx.recv().await {
                Some(action) => action,
                None => return Ok(()),
            };

            match action {
                Action::AdviceAbort() => {
                    worker.abort();
                }
                Action::AdviceRequest(request_id, request) => {
                    if !worker.is_finished() {
                        tracing::debug!(request_id, "Aborting in-flight advice request");
                    }
                    worker.abort();

                    let worker_tx = tx.clone();
                    let worker_backend = backend.clone();
                    worker = tokio::spawn(async move {
                        let res = resolve_advice(&worker_backend, &request).await;
                        worker_tx.send(Event::AdviceReady(request_id, res))?;

                        return Ok(());
                    });
                }
            }
        }
    }
}
