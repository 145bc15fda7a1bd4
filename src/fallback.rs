// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Remote semantic fallback.
//!
//! An optional external service that, given a query and a compact view of the
//! dataset, names the one record it thinks fits best. It is retrieval only: it
//! answers with an id or nothing, never with generated text.
//!
//! The service is best-effort. `BestEffortFallback` bounds every call with a
//! timeout and folds every failure into `None`, so callers only ever see "this
//! id" or "no match".

use crate::config::DEFAULT_FALLBACK_TIMEOUT_MS;
use crate::dataset::KnowledgeEntry;
use crate::error::FallbackError;
use serde::Deserialize;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// A service that picks one record for a query.
///
/// `Ok(None)` means the service looked and found nothing relevant (greetings,
/// off-topic input). Ids it returns are not trusted: the controller checks them
/// against the dataset.
pub trait SemanticFallback: Send + Sync {
    fn find_match(
        &self,
        query: &str,
        knowledge: &[KnowledgeEntry],
    ) -> Result<Option<String>, FallbackError>;
}

impl<F> SemanticFallback for F
where
    F: Fn(&str, &[KnowledgeEntry]) -> Result<Option<String>, FallbackError> + Send + Sync,
{
    fn find_match(
        &self,
        query: &str,
        knowledge: &[KnowledgeEntry],
    ) -> Result<Option<String>, FallbackError> {
        self(query, knowledge)
    }
}

/// The body a retrieval service answers with.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchResponse {
    #[serde(default)]
    match_id: Option<String>,
}

/// Parse a `{ "matchId": "<id>" | null }` answer.
///
/// An empty body or an empty id string is "no match"; anything that isn't that
/// object is `MalformedResponse`.
pub fn parse_match_response(body: &str) -> Result<Option<String>, FallbackError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    let parsed: MatchResponse = serde_json::from_str(body)
        .map_err(|e| FallbackError::MalformedResponse(e.to_string()))?;
    Ok(parsed.match_id.filter(|id| !id.trim().is_empty()))
}

/// System instruction for a language-model backed retrieval service.
///
/// Embeds the knowledge map as JSON and pins the output format to the object
/// `parse_match_response` expects.
pub fn retrieval_instruction(knowledge: &[KnowledgeEntry]) -> Result<String, FallbackError> {
    let data = serde_json::to_string(knowledge)
        .map_err(|e| FallbackError::Unavailable(format!("could not encode knowledge map: {}", e)))?;
    Ok(format!(
        "You select records from a medical-religious rulings database.\n\
         DATA:\n{}\n\
         Find the single entry most relevant to the user's query. Related medical \
         concepts and misspelled or transliterated keywords count as relevant. \
         Greetings and unrelated input match nothing.\n\
         Reply with JSON only: {{ \"matchId\": \"<id>\" }} or {{ \"matchId\": null }}.",
        data
    ))
}

/// A fallback backed by an external program.
///
/// The program gets one JSON object on stdin,
/// `{ "instruction": ..., "query": ..., "knowledge": [...] }`, and must print a
/// `{ "matchId": ... }` object on stdout. A non-zero exit is `Unavailable`.
///
/// The program runs under its own deadline. Past it the child is killed and
/// reaped, and the call fails with `TimedOut`.
#[derive(Debug, Clone)]
pub struct CommandFallback {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

/// How often a running child is checked for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

impl CommandFallback {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        CommandFallback {
            program: program.into(),
            args,
            timeout: Duration::from_millis(DEFAULT_FALLBACK_TIMEOUT_MS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn timed_out(&self) -> FallbackError {
        FallbackError::TimedOut {
            after_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Kill and reap a child we are giving up on. Both calls fail harmlessly if
/// it already exited.
fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

impl SemanticFallback for CommandFallback {
    fn find_match(
        &self,
        query: &str,
        knowledge: &[KnowledgeEntry],
    ) -> Result<Option<String>, FallbackError> {
        let request = serde_json::json!({
            "instruction": retrieval_instruction(knowledge)?,
            "query": query,
            "knowledge": knowledge,
        });
        let deadline = Instant::now() + self.timeout;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                FallbackError::Unavailable(format!("{}: {}", self.program.display(), e))
            })?;

        // Dropping stdin at the end of this block closes the pipe
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(request.to_string().as_bytes()) {
                kill_and_reap(&mut child);
                return Err(FallbackError::Unavailable(e.to_string()));
            }
        }

        // Drain stdout on the side so a chatty child can't block on a full pipe
        let (tx, rx) = mpsc::channel();
        if let Some(mut stdout) = child.stdout.take() {
            let reader = thread::Builder::new()
                .name("faqih-fallback-stdout".into())
                .spawn(move || {
                    let mut body = Vec::new();
                    let _ = tx.send(stdout.read_to_end(&mut body).map(|_| body));
                });
            if let Err(e) = reader {
                kill_and_reap(&mut child);
                return Err(FallbackError::Unavailable(e.to_string()));
            }
        } else {
            drop(tx);
        }

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    kill_and_reap(&mut child);
                    tracing::debug!(
                        program = %self.program.display(),
                        "killed fallback program at deadline"
                    );
                    return Err(self.timed_out());
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    kill_and_reap(&mut child);
                    return Err(FallbackError::Unavailable(e.to_string()));
                }
            }
        };

        if !status.success() {
            return Err(FallbackError::Unavailable(format!(
                "{} exited with {}",
                self.program.display(),
                status
            )));
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        let body = match rx.recv_timeout(remaining) {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => return Err(FallbackError::Unavailable(e.to_string())),
            Err(mpsc::RecvTimeoutError::Timeout) => return Err(self.timed_out()),
            Err(mpsc::RecvTimeoutError::Disconnected) => Vec::new(),
        };

        parse_match_response(&String::from_utf8_lossy(&body))
    }
}

/// Runs a `SemanticFallback` on a worker thread under a deadline.
///
/// A call that errors, panics or misses the deadline is logged at `warn` and
/// reported as `None`. A timed-out worker is left to finish on its own and its
/// answer is dropped, so backends that hold resources (like `CommandFallback`)
/// enforce their own deadline too.
#[derive(Clone)]
pub struct BestEffortFallback {
    inner: Arc<dyn SemanticFallback>,
    timeout: Duration,
}

impl BestEffortFallback {
    pub fn new(inner: Arc<dyn SemanticFallback>, timeout: Duration) -> Self {
        BestEffortFallback { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn find_match(&self, query: &str, knowledge: Vec<KnowledgeEntry>) -> Option<String> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let query = query.to_string();

        let spawned = thread::Builder::new()
            .name("faqih-fallback".into())
            .spawn(move || {
                let result = inner.find_match(&query, &knowledge);
                // Receiver may be gone after a timeout
                let _ = tx.send(result);
            });
        if let Err(e) = spawned {
            tracing::warn!(error = %e, "could not start fallback worker");
            return None;
        }

        match rx.recv_timeout(self.timeout) {
            Ok(Ok(found)) => {
                tracing::debug!(match_id = ?found, "fallback answered");
                found
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "fallback failed; treating as no match");
                None
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let err = FallbackError::TimedOut {
                    after_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                };
                tracing::warn!(error = %err, "fallback timed out; treating as no match");
                None
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::warn!("fallback worker exited without answering; treating as no match");
                None
            }
        }
    }
}

impl std::fmt::Debug for BestEffortFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestEffortFallback")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
