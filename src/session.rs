// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query session: the conversation log and the one-query-at-a-time controller.
//!
//! State is explicit. `SessionState` holds the append-only log, the busy flag
//! and the id counter; `QueryController::submit` takes a state and returns the
//! next one. Event-driven callers that need to render the user message before
//! matching finishes use the two halves directly:
//!
//! ```text
//! begin_query(input) ──▶ PendingQuery ──▶ controller.run_query() ──▶ finish_query(pending, outcome)
//!   user message,                              matching (+ fallback)        model message,
//!   busy = true                                                             busy = false
//! ```
//!
//! Every accepted query ends with exactly one model message, whatever happens
//! in between. A `PendingQuery` only closes the query that issued it: a token
//! from another session, or one for a query that already finished, is ignored.

use crate::config::SearchConfig;
use crate::dataset::Dataset;
use crate::error::SearchError;
use crate::fallback::BestEffortFallback;
use crate::search::{LocalMatcher, Matcher};
use crate::types::ChatMessage;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Reply when nothing matched.
pub const NO_MATCH_TEXT: &str = "عذرًا، لم أجد فتوى مطابقة لهذا السؤال في قاعدة البيانات الحالية.";

/// Reply for exactly one match.
pub const SINGLE_MATCH_TEXT: &str = "ها هي الفتوى عزيزي الطبيب";

/// Reply when matching failed.
pub const ERROR_TEXT: &str = "عذرًا، حدث خطأ غير متوقَّع.";

/// Reply for `count` matches (2 or more).
pub fn many_matches_text(count: usize) -> String {
    format!("ها هي {} فتاوى مرتبطة بسؤالك من مصادر متعددة:", count)
}

/// Model reply text for a number of matches.
pub fn response_text(count: usize) -> String {
    match count {
        0 => NO_MATCH_TEXT.to_string(),
        1 => SINGLE_MATCH_TEXT.to_string(),
        n => many_matches_text(n),
    }
}

/// How a query ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Matched ids in rank order. Empty is a normal "nothing found".
    Matches(Vec<String>),
    /// Matching failed; the user sees the generic error text.
    Failed,
}

/// An accepted query waiting for its reply. Only `begin_query` makes these.
#[derive(Debug)]
#[must_use = "a pending query must be finished or the session stays busy"]
pub struct PendingQuery {
    session_id: u64,
    message_id: String,
    text: String,
}

impl PendingQuery {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Id of the user message this query appended.
    pub fn message_id(&self) -> &str {
        &self.message_id
    }
}

/// The conversation log plus the in-flight flag.
#[derive(Debug, Clone)]
pub struct SessionState {
    session_id: u64,
    messages: Vec<ChatMessage>,
    busy: bool,
    next_message_id: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            session_id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            messages: Vec::new(),
            busy: false,
            next_message_id: 1,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id.to_string()
    }

    /// Accept a query: append the user message and go busy.
    ///
    /// Blank input, or any input while a query is already in flight, is ignored
    /// and returns `None` with the state untouched.
    pub fn begin_query(&mut self, input: &str) -> Option<PendingQuery> {
        if input.trim().is_empty() {
            return None;
        }
        if self.busy {
            tracing::debug!("query ignored while another is in flight");
            return None;
        }
        let id = self.allocate_id();
        self.messages.push(ChatMessage::user(id.clone(), input));
        self.busy = true;
        Some(PendingQuery {
            session_id: self.session_id,
            message_id: id,
            text: input.to_string(),
        })
    }

    /// Close a query with exactly one model message and clear busy.
    ///
    /// Returns `None` and leaves the state untouched when `pending` was not
    /// issued for this session's in-flight query.
    pub fn finish_query(
        &mut self,
        pending: PendingQuery,
        outcome: QueryOutcome,
    ) -> Option<&ChatMessage> {
        if !self.is_in_flight(&pending) {
            tracing::debug!(message_id = %pending.message_id, "stale pending query ignored");
            return None;
        }
        let id = self.allocate_id();
        let message = match outcome {
            QueryOutcome::Matches(ids) => ChatMessage::model(id, response_text(ids.len()), ids),
            QueryOutcome::Failed => ChatMessage::model(id, ERROR_TEXT, Vec::new()),
        };
        self.messages.push(message);
        self.busy = false;
        self.messages.last()
    }

    // While busy nothing else appends, so the in-flight user message is last.
    fn is_in_flight(&self, pending: &PendingQuery) -> bool {
        self.busy
            && pending.session_id == self.session_id
            && self.last_message().is_some_and(|m| m.id == pending.message_id)
    }
}

/// Runs queries against a dataset and turns them into replies.
pub struct QueryController {
    dataset: Dataset,
    matcher: Box<dyn Matcher>,
    fallback: Option<BestEffortFallback>,
}

impl QueryController {
    /// Local lexical matching only.
    pub fn new(dataset: Dataset, config: SearchConfig) -> Self {
        QueryController {
            dataset,
            matcher: Box::new(LocalMatcher::new(config)),
            fallback: None,
        }
    }

    pub fn with_matcher(mut self, matcher: Box<dyn Matcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Consult `fallback` when local matching finds nothing.
    pub fn with_fallback(mut self, fallback: BestEffortFallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Reducer form: apply one input to a state.
    pub fn submit(&self, mut state: SessionState, input: &str) -> SessionState {
        if let Some(pending) = state.begin_query(input) {
            let outcome = self.run_query(pending.text());
            state.finish_query(pending, outcome);
        }
        state
    }

    /// Match a query. Never panics and never errors: failures become
    /// `QueryOutcome::Failed` and are logged.
    pub fn run_query(&self, query: &str) -> QueryOutcome {
        let records = self.dataset.as_slice();
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            self.matcher
                .find_matches(query, records)
                .map(|found| found.into_iter().map(|f| f.id.clone()).collect::<Vec<_>>())
        }));

        let ids = match attempt {
            Ok(Ok(ids)) => ids,
            Ok(Err(e)) => {
                tracing::error!(error = %e, query, "matching failed");
                return QueryOutcome::Failed;
            }
            Err(payload) => {
                let e = SearchError::Panicked(panic_message(payload.as_ref()));
                tracing::error!(error = %e, query, "matching failed");
                return QueryOutcome::Failed;
            }
        };

        if ids.is_empty() {
            if let Some(id) = self.ask_fallback(query) {
                return QueryOutcome::Matches(vec![id]);
            }
        }

        tracing::debug!(query, matches = ids.len(), "query answered");
        QueryOutcome::Matches(ids)
    }

    fn ask_fallback(&self, query: &str) -> Option<String> {
        let fallback = self.fallback.as_ref()?;
        let id = fallback.find_match(query, self.dataset.knowledge_map())?;
        if self.dataset.contains(&id) {
            tracing::debug!(query, match_id = %id, "fallback supplied a match");
            Some(id)
        } else {
            tracing::warn!(match_id = %id, "fallback named an unknown record; ignored");
            None
        }
    }
}

impl std::fmt::Debug for QueryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryController")
            .field("records", &self.dataset.len())
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
