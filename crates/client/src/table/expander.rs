//! Single-row detail expansion.

use std::collections::HashMap;

use shared_types::{AppError, AppErrorKind};

use super::fetch::{FetchCoordinator, FetchOutcome, FetchTicket};

/// What the expanded row shows once its detail request settles.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<D> {
    Loaded(D),
    /// Backend reported the entity no longer exists.
    Missing,
    Failed(String),
}

/// At most one row is ever expanded.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Expansion<D> {
    #[default]
    Collapsed,
    Loading {
        id: String,
    },
    Expanded {
        id: String,
        state: DetailState<D>,
    },
}

impl<D> Expansion<D> {
    pub fn row_id(&self) -> Option<&str> {
        match self {
            Expansion::Collapsed => None,
            Expansion::Loading { id } | Expansion::Expanded { id, .. } => Some(id),
        }
    }
}

#[derive(Debug)]
pub struct DetailExpander<D> {
    expansion: Expansion<D>,
    coordinator: FetchCoordinator,
    cache: HashMap<String, D>,
}

impl<D> Default for DetailExpander<D> {
    fn default() -> Self {
        Self {
            expansion: Expansion::Collapsed,
            coordinator: FetchCoordinator::new(),
            cache: HashMap::new(),
        }
    }
}

impl<D: Clone> DetailExpander<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `id`. Collapses it if it is the open row; otherwise opens it,
    /// closing any other row. A row whose fetch failed stays open and is
    /// fetched again. Returns a ticket when the detail has to be fetched.
    pub fn toggle(&mut self, id: &str) -> Option<FetchTicket<String>> {
        if self.expansion.row_id() == Some(id) {
            if matches!(
                &self.expansion,
                Expansion::Expanded {
                    state: DetailState::Failed(_),
                    ..
                }
            ) {
                tracing::debug!(id = %id, "retrying failed detail");
                self.expansion = Expansion::Loading { id: id.to_string() };
                return Some(self.coordinator.begin(id.to_string()));
            }
            self.collapse();
            return None;
        }

        if let Some(detail) = self.cache.get(id) {
            self.coordinator.cancel();
            self.expansion = Expansion::Expanded {
                id: id.to_string(),
                state: DetailState::Loaded(detail.clone()),
            };
            return None;
        }

        self.expansion = Expansion::Loading { id: id.to_string() };
        Some(self.coordinator.begin(id.to_string()))
    }

    pub fn collapse(&mut self) {
        self.coordinator.cancel();
        self.expansion = Expansion::Collapsed;
    }

    /// Apply a finished detail request. Outcomes for a row that is no longer
    /// the one loading are dropped.
    pub fn settle(&mut self, outcome: FetchOutcome<String, D>) {
        let Some((id, result)) = self.coordinator.accept(outcome) else {
            return;
        };
        if !matches!(&self.expansion, Expansion::Loading { id: open } if *open == id) {
            return;
        }

        let state = match result {
            Ok(detail) => {
                self.cache.insert(id.clone(), detail.clone());
                DetailState::Loaded(detail)
            }
            Err(err) => detail_failure(err),
        };
        self.expansion = Expansion::Expanded { id, state };
    }

    /// Drop cached details and close the open row; called whenever a new
    /// page is committed.
    pub fn invalidate(&mut self) {
        self.cache.clear();
        self.collapse();
    }

    pub fn expansion(&self) -> &Expansion<D> {
        &self.expansion
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.row_id() == Some(id)
    }
}

fn detail_failure<D>(err: AppError) -> DetailState<D> {
    match err.kind {
        AppErrorKind::NotFound => DetailState::Missing,
        _ => DetailState::Failed(err.message),
    }
}
