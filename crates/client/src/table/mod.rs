//! The remote paginated table shared by every list screen.
//!
//! [`RemoteTable`] is a plain state machine: actions that need the network
//! hand back a [`FetchTicket`], the caller runs it against a [`PageSource`]
//! or [`DetailSource`] (see [`load_page`] / [`load_detail`]) and feeds the
//! outcome back through `settle_*`. Nothing here spawns tasks, so the same
//! code drives the Dioxus screens and the tests.

pub mod columns;
pub mod expander;
pub mod fetch;
pub mod filter;
pub mod local;
pub mod page;

pub use columns::*;
pub use expander::*;
pub use fetch::*;
pub use filter::*;
pub use local::*;
pub use page::*;

use shared_types::{AppError, Listable, PageResult, TableQuery};

use crate::resources::ListResource;

/// Anything that can serve one page of rows for an applied query.
#[allow(async_fn_in_trait)]
pub trait PageSource<Row> {
    async fn fetch_page(&self, query: &TableQuery) -> Result<PageResult<Row>, AppError>;
}

/// Anything that can serve the detail record for a row id.
#[allow(async_fn_in_trait)]
pub trait DetailSource<D> {
    async fn fetch_detail(&self, id: &str) -> Result<D, AppError>;
}

pub type PageTicket = FetchTicket<TableQuery>;
pub type PageOutcome<Row> = FetchOutcome<TableQuery, PageResult<Row>>;
pub type DetailTicket = FetchTicket<String>;
pub type DetailOutcome<D> = FetchOutcome<String, D>;

/// Run a page ticket against `source`.
pub async fn load_page<Row, S>(source: &S, ticket: PageTicket) -> PageOutcome<Row>
where
    S: PageSource<Row>,
{
    let query = ticket.key().clone();
    tracing::debug!(seq = ticket.seq(), page = query.page, sort = %query.sort, "fetching page");
    ticket.run(async move { source.fetch_page(&query).await }).await
}

/// Run a detail ticket against `source`.
pub async fn load_detail<D, S>(source: &S, ticket: DetailTicket) -> DetailOutcome<D>
where
    S: DetailSource<D>,
{
    let id = ticket.key().clone();
    tracing::debug!(seq = ticket.seq(), id = %id, "fetching detail");
    ticket.run(async move { source.fetch_detail(&id).await }).await
}

/// What happened to a settled page request.
#[derive(Debug)]
pub enum Settlement {
    /// The page slot now holds the response.
    Applied,
    /// The request failed; the previous page is still shown.
    Failed,
    /// Superseded or aborted; nothing changed.
    Stale,
    /// The requested page is past the last one; nothing was committed and
    /// the carried ticket asks for the last page instead.
    Clamped(PageTicket),
}

impl PartialEq for Settlement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Settlement::Clamped(a), Settlement::Clamped(b)) => a.seq() == b.seq(),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

pub struct RemoteTable<R: ListResource> {
    filters: FilterState,
    /// Query behind the page on screen.
    applied: TableQuery,
    /// Query of the most recently issued request.
    requested: TableQuery,
    page: Option<PageSlot<R::Row>>,
    fetch: FetchCoordinator,
    expander: DetailExpander<R::Detail>,
    columns: Vec<Column<R::Row>>,
    validation: Option<AppError>,
}

impl<R: ListResource> RemoteTable<R> {
    /// The unfiltered page-1 query for this resource.
    pub fn defaults(page_size: u32) -> TableQuery {
        TableQuery::initial(page_size, R::default_sort())
    }

    pub fn new(page_size: u32) -> Self {
        let defaults = Self::defaults(page_size);
        Self {
            filters: FilterState::new(defaults.clone()),
            applied: defaults.clone(),
            requested: defaults,
            page: None,
            fetch: FetchCoordinator::new(),
            expander: DetailExpander::new(),
            columns: R::columns(),
            validation: None,
        }
    }

    /// Table whose first query is restored from a URL query string.
    pub fn from_url(query_string: &str, page_size: u32) -> Self {
        let mut table = Self::new(page_size);
        let restored =
            TableQuery::from_query_string(query_string, &table.applied, &R::RULES);
        table.filters = FilterState::from_query(&restored, table.applied.clone());
        table.applied = restored.clone();
        table.requested = restored;
        table
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Pending filter intent. Edits take effect on the next [`Self::apply`].
    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Query behind the page on screen. Before the first page lands this is
    /// the query the table was created with.
    pub fn applied(&self) -> &TableQuery {
        &self.applied
    }

    /// Query of the most recently issued request, committed or not.
    pub fn requested(&self) -> &TableQuery {
        &self.requested
    }

    pub fn page(&self) -> Option<&PageSlot<R::Row>> {
        self.page.as_ref()
    }

    pub fn columns(&self) -> &[Column<R::Row>] {
        &self.columns
    }

    /// Fetch the last requested query again (mount, retry after an error,
    /// refresh after a mutation).
    pub fn reload(&mut self) -> PageTicket {
        self.issue(self.requested.clone())
    }

    /// Validate the pending filters and request page 1 with them. On a
    /// validation failure nothing is requested.
    pub fn apply(&mut self) -> Result<PageTicket, AppError> {
        match self.filters.snapshot(&R::RULES) {
            Ok(query) => {
                self.validation = None;
                Ok(self.issue(query))
            }
            Err(err) => {
                tracing::debug!(resource = R::NAME, error = %err, "filters rejected");
                self.validation = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Request `page` with the filters behind the page on screen. `None` when
    /// `page` is out of range for the page currently shown.
    pub fn go_to_page(&mut self, page: u32) -> Option<PageTicket> {
        if page < 1 {
            return None;
        }
        if let Some(slot) = &self.page {
            if page > slot.total_pages {
                return None;
            }
        }
        Some(self.issue(self.applied.with_page(page)))
    }

    pub fn next_page(&mut self) -> Option<PageTicket> {
        let slot = self.page.as_ref()?;
        if !slot.has_next() {
            return None;
        }
        let next = slot.page + 1;
        self.go_to_page(next)
    }

    pub fn prev_page(&mut self) -> Option<PageTicket> {
        let slot = self.page.as_ref()?;
        if !slot.has_prev() {
            return None;
        }
        let prev = slot.page - 1;
        self.go_to_page(prev)
    }

    /// Clear every filter back to the defaults and request page 1.
    pub fn reset_all(&mut self) -> PageTicket {
        self.filters.reset_all();
        self.validation = None;
        self.issue(self.filters.defaults().clone())
    }

    /// Toggle the server sort from the header of `column_id`. Returns `None`
    /// when the column does not drive a sort the endpoint accepts.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<PageTicket> {
        let field = self
            .columns
            .iter()
            .find(|c| c.id == column_id)?
            .sort_field?;
        if !R::RULES.sortable_field(field) {
            return None;
        }

        let toggled = self.applied.sort.toggled(field);
        let sort = if R::RULES.allows_sort(&toggled) {
            toggled
        } else {
            let flipped = shared_types::SortKey::new(field, toggled.direction.flipped());
            if !R::RULES.allows_sort(&flipped) || flipped == self.applied.sort {
                return None;
            }
            flipped
        };

        self.filters.set_sort(sort.clone());
        let query = TableQuery {
            sort,
            page: 1,
            ..self.applied.clone()
        };
        Some(self.issue(query))
    }

    fn issue(&mut self, query: TableQuery) -> PageTicket {
        self.requested = query.clone();
        let ticket = self.fetch.begin(query);
        tracing::debug!(resource = R::NAME, seq = ticket.seq(), "page request issued");
        ticket
    }

    /// Apply a finished page request.
    pub fn settle_page(&mut self, outcome: PageOutcome<R::Row>) -> Settlement {
        match self.fetch.accept(outcome) {
            None => Settlement::Stale,
            Some((query, Ok(result))) => {
                let last = result.total_pages.max(1);
                if query.page > last {
                    tracing::debug!(
                        resource = R::NAME,
                        page = query.page,
                        last,
                        "page past the end; requesting the last page"
                    );
                    return Settlement::Clamped(self.issue(query.with_page(last)));
                }
                self.page = Some(PageSlot::from_result(result, &query));
                self.applied = query;
                self.expander.invalidate();
                Settlement::Applied
            }
            Some((_, Err(_))) => Settlement::Failed,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    /// Banner error from the last page request.
    pub fn error(&self) -> Option<&AppError> {
        self.fetch.error()
    }

    pub fn clear_error(&mut self) {
        self.fetch.clear_error();
    }

    /// Inline filter errors from the last [`Self::apply`].
    pub fn validation_error(&self) -> Option<&AppError> {
        self.validation.as_ref()
    }

    pub fn rendered_rows(&self) -> Vec<RenderedRow> {
        match &self.page {
            Some(slot) => render_rows(slot, &self.columns, <R::Row as Listable>::row_id),
            None => Vec::new(),
        }
    }

    pub fn headers(&self) -> Vec<HeaderCell> {
        header_cells(&self.columns, &self.applied.sort, &R::RULES)
    }

    /// Toggle inline expansion of a row on the current page.
    pub fn toggle_row(&mut self, id: &str) -> Option<DetailTicket> {
        self.expander.toggle(id)
    }

    pub fn settle_detail(&mut self, outcome: DetailOutcome<R::Detail>) {
        self.expander.settle(outcome);
    }

    pub fn expansion(&self) -> &Expansion<R::Detail> {
        self.expander.expansion()
    }

    /// Query string mirroring the page on screen; empty when all defaults.
    pub fn url_query(&self) -> String {
        self.applied.to_query_string(self.filters.defaults())
    }

    /// Abort everything in flight, e.g. when the screen unmounts.
    pub fn cancel(&mut self) {
        self.fetch.cancel();
        self.expander.collapse();
    }
}
