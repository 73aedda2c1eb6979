//! Dioxus binding for [`client::RemoteTable`].
//!
//! The table itself is a plain state machine; this module owns it in a
//! signal, runs the tickets it hands out on the component's task scope, and
//! renders the shared toolbar / table / pager markup every list screen uses.

use client::{
    load_detail, load_page, CellValue, DetailState, DetailTicket, Expansion, FilterState,
    ListResource, PageTicket, RemoteSource, RemoteTable, Settlement,
};
use dioxus::prelude::*;
use shared_types::{parse_date, SortDirection, STATUS_ALL};
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableDetailRow, DataTableEmpty, DataTableExpandCell, DataTableHeader, DataTableRow,
    DataTableSortColumn, ErrorBanner, FormSelect, InlineNotice, Input, Pagination, SearchBar,
    SearchBarActions, SkeletonRows, SortIndicator, StatusBadge,
};

use crate::auth::use_api;
use crate::format_helpers::date_input;

/// Copyable handle to one mounted table.
pub struct TableHandle<R: ListResource> {
    pub table: Signal<RemoteTable<R>>,
    source: Signal<RemoteSource<R>>,
    mirror: Callback<String>,
}

impl<R: ListResource> Clone for TableHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for TableHandle<R> {}

impl<R: ListResource> PartialEq for TableHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.source == other.source
    }
}

/// Mount a table for `R`, restoring its first query from `initial_query`
/// and reporting the query string of every committed page to `mirror`.
pub fn use_remote_table<R: ListResource>(
    initial_query: String,
    mirror: Callback<String>,
) -> TableHandle<R> {
    let api = use_api();
    let mut table = use_signal(|| {
        RemoteTable::<R>::from_url(&initial_query, client::config().tables.page_size)
    });
    let source = use_signal(|| api.source::<R>());
    let handle = TableHandle {
        table,
        source,
        mirror,
    };

    use_hook(move || handle.reload());
    use_drop(move || {
        if let Ok(mut table) = table.try_write() {
            table.cancel();
        }
    });

    handle
}

impl<R: ListResource> TableHandle<R> {
    pub fn reload(self) {
        let mut table = self.table;
        let ticket = table.write().reload();
        self.run_page(ticket);
    }

    pub fn edit_filters(self, edit: impl FnOnce(&mut FilterState)) {
        let mut table = self.table;
        edit(table.write().filters_mut());
    }

    pub fn apply(self) {
        let mut table = self.table;
        let applied = table.write().apply();
        if let Ok(ticket) = applied {
            self.run_page(ticket);
        }
    }

    pub fn reset(self) {
        let mut table = self.table;
        let ticket = table.write().reset_all();
        self.run_page(ticket);
    }

    pub fn next(self) {
        let mut table = self.table;
        let ticket = table.write().next_page();
        self.navigate(ticket);
    }

    pub fn prev(self) {
        let mut table = self.table;
        let ticket = table.write().prev_page();
        self.navigate(ticket);
    }

    pub fn go_to(self, page: u32) {
        let mut table = self.table;
        let ticket = table.write().go_to_page(page);
        self.navigate(ticket);
    }

    pub fn sort(self, column_id: &'static str) {
        let mut table = self.table;
        let ticket = table.write().toggle_sort(column_id);
        self.navigate(ticket);
    }

    pub fn dismiss_error(self) {
        let mut table = self.table;
        table.write().clear_error();
    }

    pub fn toggle_row(self, id: String) {
        let mut table = self.table;
        let ticket = table.write().toggle_row(&id);
        if let Some(ticket) = ticket {
            self.run_detail(ticket);
        }
    }

    fn navigate(self, ticket: Option<PageTicket>) {
        if let Some(ticket) = ticket {
            self.run_page(ticket);
        }
    }

    fn mirror_url(self) {
        let query = self.table.peek().url_query();
        self.mirror.call(query);
    }

    fn run_page(self, ticket: PageTicket) {
        let mut table = self.table;
        let source = self.source.peek().clone();
        let handle = self;
        spawn(async move {
            let mut ticket = ticket;
            loop {
                let outcome = load_page(&source, ticket).await;
                let settled = table.write().settle_page(outcome);
                match settled {
                    Settlement::Applied => handle.mirror_url(),
                    Settlement::Failed => {
                        tracing::warn!(resource = R::NAME, "page request failed; keeping previous page");
                    }
                    Settlement::Stale => {}
                    Settlement::Clamped(last) => {
                        ticket = last;
                        continue;
                    }
                }
                break;
            }
        });
    }

    fn run_detail(self, ticket: DetailTicket) {
        let mut table = self.table;
        let source = self.source.peek().clone();
        spawn(async move {
            let outcome = load_detail(&source, ticket).await;
            table.write().settle_detail(outcome);
        });
    }
}

/// Renders the body of an expanded row.
pub type DetailView<R> = fn(&<R as ListResource>::Detail, TableHandle<R>) -> Element;

fn status_options<R: ListResource>() -> Vec<(String, String)> {
    std::iter::once((STATUS_ALL.to_string(), "All statuses".to_string()))
        .chain(
            R::RULES
                .statuses
                .iter()
                .map(|s| (s.to_string(), client::humanize_status(s))),
        )
        .collect()
}

fn cell(value: &CellValue) -> Element {
    let text = value.display();
    match value {
        CellValue::Status(code) => rsx! {
            StatusBadge { status: code.clone(), label: text }
        },
        CellValue::Empty => rsx! { span { class: "cell-empty", "{text}" } },
        _ => rsx! { "{text}" },
    }
}

/// Toolbar, table, expanded row and pager for one mounted table.
pub fn remote_table<R: ListResource>(handle: TableHandle<R>, detail: DetailView<R>) -> Element {
    let table = handle.table.read();
    let filters = table.filters();
    let field_error = |name: &str| {
        table
            .validation_error()
            .and_then(|e| e.field(name))
            .unwrap_or_default()
            .to_string()
    };

    let search_text = filters.search_text().to_string();
    let status = filters.status().as_str().to_string();
    let start_date = date_input(filters.start_date());
    let end_date = date_input(filters.end_date());
    let status_error = field_error("status");
    let start_error = field_error("startDate");
    let end_error = field_error("endDate");
    let sort_error = field_error("sortby");

    let headers = table.headers();
    let rows = table.rendered_rows();
    let colspan = headers.len() + 2;
    let loading = table.is_loading();
    let banner = table.error().map(|e| e.message.clone());
    let open_row = table.expansion().row_id().map(str::to_string);
    let pager = table
        .page()
        .map(|slot| (slot.page, slot.total_pages, slot.total_count));
    let mut detail_body = match table.expansion() {
        Expansion::Collapsed => None,
        Expansion::Loading { .. } => Some(rsx! { SkeletonRows { rows: 3 } }),
        Expansion::Expanded { state, .. } => Some(match state {
            DetailState::Loaded(record) => detail(record, handle),
            DetailState::Missing => rsx! {
                p { class: "table-detail-empty", "No data available" }
            },
            DetailState::Failed(message) => rsx! {
                InlineNotice { message: message.clone() }
            },
        }),
    };
    drop(table);

    let mut body_rows = Vec::with_capacity(rows.len());
    for row in rows {
        let expanded = open_row.as_deref() == Some(row.id.as_str());
        let id = row.id.clone();
        let body = if expanded { detail_body.take() } else { None };
        body_rows.push(rsx! {
            DataTableRow {
                key: "{row.id}",
                expanded,
                onclick: move |_| handle.toggle_row(id.clone()),
                DataTableCell { "{row.serial}" }
                for value in row.cells.iter() {
                    DataTableCell { {cell(value)} }
                }
                DataTableExpandCell { expanded }
            }
            if let Some(body) = body {
                DataTableDetailRow { colspan, {body} }
            }
        });
    }
    let empty = body_rows.is_empty();

    rsx! {
        div { class: "remote-table",
            SearchBar {
                Input {
                    value: search_text,
                    label: "Search",
                    placeholder: "Search...",
                    on_input: move |evt: FormEvent| {
                        handle.edit_filters(|f| f.set_search_text(evt.value()));
                    },
                }
                FormSelect {
                    label: "Status",
                    value: status,
                    options: status_options::<R>(),
                    error: status_error,
                    onchange: move |evt: FormEvent| {
                        handle.edit_filters(|f| f.set_status_filter(&evt.value()));
                    },
                }
                Input {
                    label: "From",
                    input_type: "date",
                    value: start_date,
                    error: start_error,
                    on_input: move |evt: FormEvent| {
                        handle.edit_filters(|f| f.set_start_date(parse_date(&evt.value())));
                    },
                }
                Input {
                    label: "To",
                    input_type: "date",
                    value: end_date,
                    error: end_error,
                    on_input: move |evt: FormEvent| {
                        handle.edit_filters(|f| f.set_end_date(parse_date(&evt.value())));
                    },
                }
                SearchBarActions {
                    Button { busy: loading, onclick: move |_| handle.apply(), "Apply" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| handle.reset(),
                        "Reset"
                    }
                }
            }

            if !sort_error.is_empty() {
                InlineNotice { message: sort_error }
            }

            if let Some(message) = banner {
                ErrorBanner {
                    message,
                    on_retry: move |_| handle.reload(),
                    on_dismiss: move |_| handle.dismiss_error(),
                }
            }

            match pager {
                None => rsx! { SkeletonRows {} },
                Some((page, total_pages, total_count)) => rsx! {
                    DataTable { loading,
                        DataTableHeader {
                            DataTableColumn { "#" }
                            for header in headers {
                                if header.sortable {
                                    DataTableSortColumn {
                                        key: "{header.id}",
                                        label: header.label.to_string(),
                                        indicator: match header.sorted {
                                            Some(SortDirection::Asc) => SortIndicator::Ascending,
                                            Some(SortDirection::Desc) => SortIndicator::Descending,
                                            None => SortIndicator::Unsorted,
                                        },
                                        onclick: move |_| handle.sort(header.id),
                                    }
                                } else {
                                    DataTableColumn { key: "{header.id}", "{header.label}" }
                                }
                            }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            if empty {
                                DataTableEmpty { colspan, message: "No data available".to_string() }
                            }
                            for row in body_rows {
                                {row}
                            }
                        }
                    }
                    Pagination {
                        page,
                        total_pages,
                        total_count,
                        busy: loading,
                        on_prev: move |_| handle.prev(),
                        on_next: move |_| handle.next(),
                        on_page: move |page: u32| handle.go_to(page),
                    }
                },
            }
        }
    }
}
