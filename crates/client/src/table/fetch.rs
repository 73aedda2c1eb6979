//! Request sequencing for one table instance.
//!
//! Every outbound request gets a ticket carrying a monotonically increasing
//! sequence number and an abort registration. Starting a new request aborts
//! the one in flight, and only the outcome whose sequence matches the active
//! request is ever handed back to the caller.

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use shared_types::AppError;
use std::future::Future;

/// Tracks the single request a table is currently waiting on.
#[derive(Debug, Default)]
pub struct FetchCoordinator {
    next_seq: u64,
    active: Option<u64>,
    in_flight: Option<AbortHandle>,
    error: Option<AppError>,
}

/// Permission to run one request, keyed by what is being fetched.
#[derive(Debug)]
pub struct FetchTicket<K> {
    seq: u64,
    key: K,
    registration: AbortRegistration,
}

/// How a ticketed request ended.
#[derive(Debug)]
pub enum Completion<T> {
    Finished(Result<T, AppError>),
    Aborted,
}

#[derive(Debug)]
pub struct FetchOutcome<K, T> {
    pub seq: u64,
    pub key: K,
    pub completion: Completion<T>,
}

impl<K> FetchTicket<K> {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Drive `request` to completion unless the ticket is superseded first.
    pub async fn run<T, Fut>(self, request: Fut) -> FetchOutcome<K, T>
    where
        Fut: Future<Output = Result<T, AppError>>,
    {
        let completion = match Abortable::new(request, self.registration).await {
            Ok(result) => Completion::Finished(result),
            Err(_) => Completion::Aborted,
        };
        FetchOutcome {
            seq: self.seq,
            key: self.key,
            completion,
        }
    }

    /// Close the ticket with an already-known result.
    pub fn complete<T>(self, result: Result<T, AppError>) -> FetchOutcome<K, T> {
        FetchOutcome {
            seq: self.seq,
            key: self.key,
            completion: Completion::Finished(result),
        }
    }
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `key`: aborts whatever is in flight, marks the
    /// table loading and clears the previous error.
    pub fn begin<K>(&mut self, key: K) -> FetchTicket<K> {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.next_seq += 1;
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        self.active = Some(self.next_seq);
        self.error = None;
        FetchTicket {
            seq: self.next_seq,
            key,
            registration,
        }
    }

    /// Accept an outcome if it belongs to the active request.
    ///
    /// Returns `None` for superseded, aborted, or cancelled requests; the
    /// caller must not touch its displayed state in that case.
    pub fn accept<K, T>(&mut self, outcome: FetchOutcome<K, T>) -> Option<(K, Result<T, AppError>)> {
        if self.active != Some(outcome.seq) {
            tracing::debug!(seq = outcome.seq, active = ?self.active, "discarding stale response");
            return None;
        }
        let result = match outcome.completion {
            Completion::Finished(result) => result,
            Completion::Aborted => return None,
        };
        self.active = None;
        self.in_flight = None;
        if let Err(err) = &result {
            tracing::warn!(seq = outcome.seq, error = %err, "request failed");
            self.error = Some(err.clone());
        }
        Some((outcome.key, result))
    }

    /// Abort the in-flight request, e.g. when the screen unmounts.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.active = None;
    }

    pub fn is_loading(&self) -> bool {
        self.active.is_some()
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Sequence number of the most recently issued request.
    pub fn latest_seq(&self) -> u64 {
        self.next_seq
    }
}

impl Drop for FetchCoordinator {
    fn drop(&mut self) {
        self.cancel();
    }
}
