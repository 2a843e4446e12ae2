use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Identifier of an accepted request
pub type Ticket = u64;

/// Which input a request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Primary query; the answer replaces the results
    Query,
    /// Follow-up question; the answer is appended to the results
    FollowUp,
}

/// A submission accepted by the session, to be answered by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub ticket: Ticket,
    pub kind: RequestKind,
    pub text: String,
}

/// Outcome of a request, delivered back to the session
#[derive(Debug, Clone)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Result<String, SearchError>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search timed out after {0:?}")]
    TimedOut(Duration),
    #[error("search backend unavailable: {0}")]
    Unavailable(String),
}

/// Anything able to answer a search request
pub trait Backend: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Produce the answer text for a request
    fn answer(
        &self,
        request: &Request,
    ) -> Pin<Box<dyn Future<Output = Result<String, SearchError>> + Send>>;
}

/// Stand-in backend: waits a fixed latency and echoes the text into a template.
pub struct SimulatedBackend {
    latency: Duration,
    follow_up_latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration, follow_up_latency: Duration) -> Self {
        Self {
            latency,
            follow_up_latency,
        }
    }
}

impl Backend for SimulatedBackend {
    fn name(&self) -> &str {
        "simulated"
    }

    fn answer(
        &self,
        request: &Request,
    ) -> Pin<Box<dyn Future<Output = Result<String, SearchError>> + Send>> {
        let (delay, answer) = match request.kind {
            RequestKind::Query => (self.latency, query_answer(&request.text)),
            RequestKind::FollowUp => (self.follow_up_latency, follow_up_answer(&request.text)),
        };
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(answer)
        })
    }
}

pub fn query_answer(query: &str) -> String {
    format!(
        "Research insights for \"{query}\": a real search backend would list sources and summaries here."
    )
}

pub fn follow_up_answer(question: &str) -> String {
    format!(
        "Follow-up on \"{question}\": a real search backend would expand on the previous answer here."
    )
}

/// Drive one request to completion, bounded by `timeout`.
pub async fn run(backend: Arc<dyn Backend>, request: Request, timeout: Duration) -> Completion {
    tracing::debug!(
        "Backend '{}' answering {:?} #{}",
        backend.name(),
        request.kind,
        request.ticket
    );

    let outcome = match tokio::time::timeout(timeout, backend.answer(&request)).await {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::warn!(
                "Backend '{}' timed out after {:?} on #{}",
                backend.name(),
                timeout,
                request.ticket
            );
            Err(SearchError::TimedOut(timeout))
        }
    };

    Completion {
        ticket: request.ticket,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: RequestKind, text: &str) -> Request {
        Request {
            ticket: 7,
            kind,
            text: text.to_string(),
        }
    }

    fn simulated() -> Arc<dyn Backend> {
        Arc::new(SimulatedBackend::new(
            Duration::from_millis(1500),
            Duration::from_millis(900),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn query_answer_embeds_text_after_latency() {
        let start = tokio::time::Instant::now();
        let completion = run(
            simulated(),
            request(RequestKind::Query, "quantum computing"),
            Duration::from_secs(10),
        )
        .await;

        assert_eq!(completion.ticket, 7);
        let text = completion.outcome.expect("simulated search succeeds");
        assert!(text.contains("quantum computing"));
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn follow_up_is_faster_than_query() {
        let start = tokio::time::Instant::now();
        let completion = run(
            simulated(),
            request(RequestKind::FollowUp, "explain more"),
            Duration::from_secs(10),
        )
        .await;

        let text = completion.outcome.expect("simulated follow-up succeeds");
        assert!(text.contains("explain more"));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(900));
        assert!(elapsed < Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_backend_times_out() {
        let completion = run(
            simulated(),
            request(RequestKind::Query, "slow"),
            Duration::from_millis(100),
        )
        .await;

        assert_eq!(
            completion.outcome,
            Err(SearchError::TimedOut(Duration::from_millis(100)))
        );
    }

    #[test]
    fn error_messages_are_readable() {
        let err = SearchError::Unavailable("offline".to_string());
        assert_eq!(err.to_string(), "search backend unavailable: offline");
    }
}
