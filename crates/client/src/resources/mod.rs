//! Per-resource table contracts.
//!
//! Each list screen is one zero-sized type implementing [`ListResource`]:
//! where its rows come from, which filters the endpoint accepts, and how its
//! columns read a row.

use serde::de::DeserializeOwned;
use shared_types::*;

use crate::table::{CellValue, Column};

/// HTTP method a list endpoint expects its query on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMethod {
    /// Query parameters in the URL.
    Get,
    /// Query parameters as a JSON body.
    Post,
}

pub trait ListResource: 'static {
    type Row: Listable + DeserializeOwned + Clone + PartialEq + 'static;
    type Detail: DeserializeOwned + Clone + PartialEq + 'static;

    /// Short machine name, used in logs and routes.
    const NAME: &'static str;
    /// Heading shown above the table.
    const TITLE: &'static str;
    const LIST_PATH: &'static str;
    /// Detail records live at `{DETAIL_PATH}/{id}`.
    const DETAIL_PATH: &'static str;
    /// Key of the rows array in the list envelope.
    const ROWS_FIELD: &'static str;
    const LIST_METHOD: ListMethod = ListMethod::Get;
    const RULES: QueryRules;

    fn default_sort() -> SortKey {
        SortKey::default()
    }

    fn columns() -> Vec<Column<Self::Row>>;
}

fn created_column<R: Listable>() -> Column<R> {
    Column::new("createdAt", "Created", |r: &R| CellValue::Timestamp(r.created_at()))
        .sorted_by("createdAt")
}

fn status_column<R: Listable>() -> Column<R> {
    Column::new("status", "Status", |r: &R| CellValue::Status(r.status().to_string()))
}

pub struct Rides;

impl ListResource for Rides {
    type Row = Ride;
    type Detail = RideDetail;
    const NAME: &'static str = "rides";
    const TITLE: &'static str = "Rides";
    const LIST_PATH: &'static str = "/admin/rides";
    const DETAIL_PATH: &'static str = "/admin/rides";
    const ROWS_FIELD: &'static str = "rides";
    const RULES: QueryRules = QueryRules {
        statuses: RIDE_STATUSES,
        sort_keys: RIDE_SORT_KEYS,
    };

    fn columns() -> Vec<Column<Ride>> {
        vec![
            Column::new("id", "Ride ID", |r: &Ride| CellValue::text(r.id.clone())),
            Column::new("rider", "Rider", |r: &Ride| CellValue::text(r.rider_name.clone())),
            Column::new("driver", "Driver", |r: &Ride| {
                CellValue::optional_text(r.driver_name.as_deref())
            }),
            Column::new("pickup", "Pickup", |r: &Ride| CellValue::text(r.pickup.clone())),
            Column::new("dropoff", "Drop-off", |r: &Ride| CellValue::text(r.dropoff.clone())),
            Column::new("fare", "Fare", |r: &Ride| CellValue::Money(r.fare)).sorted_by("fare"),
            status_column(),
            created_column(),
        ]
    }
}

/// Support tickets. The list endpoint takes its query as a POST body.
pub struct Issues;

impl ListResource for Issues {
    type Row = Issue;
    type Detail = IssueDetail;
    const NAME: &'static str = "issues";
    const TITLE: &'static str = "Issues";
    const LIST_PATH: &'static str = "/admin/issues/search";
    const DETAIL_PATH: &'static str = "/admin/issues";
    const ROWS_FIELD: &'static str = "issues";
    const LIST_METHOD: ListMethod = ListMethod::Post;
    const RULES: QueryRules = QueryRules {
        statuses: ISSUE_STATUSES,
        sort_keys: ISSUE_SORT_KEYS,
    };

    fn columns() -> Vec<Column<Issue>> {
        vec![
            Column::new("ticket", "Ticket", |i: &Issue| CellValue::text(i.ticket_number.clone())),
            Column::new("subject", "Subject", |i: &Issue| CellValue::text(i.subject.clone())),
            Column::new("raisedBy", "Raised by", |i: &Issue| CellValue::text(i.raised_by.clone())),
            Column::new("category", "Category", |i: &Issue| {
                CellValue::optional_text(i.category.as_deref())
            }),
            Column::new("priority", "Priority", |i: &Issue| CellValue::Status(i.priority.clone()))
                .sorted_by("priority"),
            status_column(),
            Column::new("agent", "Assigned to", |i: &Issue| {
                CellValue::optional_text(i.assigned_agent.as_deref())
            }),
            created_column(),
        ]
    }
}

pub struct Users;

impl ListResource for Users {
    type Row = User;
    type Detail = UserDetail;
    const NAME: &'static str = "users";
    const TITLE: &'static str = "Users";
    const LIST_PATH: &'static str = "/admin/users";
    const DETAIL_PATH: &'static str = "/admin/users";
    const ROWS_FIELD: &'static str = "users";
    const RULES: QueryRules = QueryRules {
        statuses: USER_STATUSES,
        sort_keys: USER_SORT_KEYS,
    };

    fn columns() -> Vec<Column<User>> {
        vec![
            Column::new("name", "Name", |u: &User| CellValue::text(u.full_name())).sorted_by("name"),
            Column::new("email", "Email", |u: &User| CellValue::text(u.email.clone())),
            Column::new("phone", "Phone", |u: &User| CellValue::optional_text(u.phone.as_deref())),
            Column::new("rides", "Rides", |u: &User| CellValue::text(u.total_rides.to_string()))
                .sorted_by("totalRides"),
            Column::new("churn", "Churn risk", |u: &User| match u.churn_risk {
                Some(risk) => CellValue::Percent(risk * 100.0),
                None => CellValue::Empty,
            }),
            status_column(),
            created_column(),
        ]
    }
}

pub struct Drivers;

impl ListResource for Drivers {
    type Row = Driver;
    type Detail = DriverDetail;
    const NAME: &'static str = "drivers";
    const TITLE: &'static str = "Drivers";
    const LIST_PATH: &'static str = "/admin/drivers";
    const DETAIL_PATH: &'static str = "/admin/drivers";
    const ROWS_FIELD: &'static str = "drivers";
    const RULES: QueryRules = QueryRules {
        statuses: DRIVER_STATUSES,
        sort_keys: DRIVER_SORT_KEYS,
    };

    fn columns() -> Vec<Column<Driver>> {
        vec![
            Column::new("name", "Name", |d: &Driver| CellValue::text(d.full_name())),
            Column::new("phone", "Phone", |d: &Driver| CellValue::text(d.phone.clone())),
            Column::new("vehicle", "Vehicle", |d: &Driver| {
                CellValue::optional_text(d.vehicle_number.as_deref())
            }),
            Column::new("rating", "Rating", |d: &Driver| match d.rating {
                Some(r) => CellValue::Rating(r),
                None => CellValue::Empty,
            })
            .sorted_by("rating"),
            Column::new("online", "Online", |d: &Driver| {
                CellValue::text(if d.online { "Online" } else { "Offline" })
            }),
            status_column(),
            created_column(),
        ]
    }
}

pub struct Agents;

impl ListResource for Agents {
    type Row = Agent;
    type Detail = AgentDetail;
    const NAME: &'static str = "agents";
    const TITLE: &'static str = "Agents";
    const LIST_PATH: &'static str = "/admin/agents";
    const DETAIL_PATH: &'static str = "/admin/agents";
    const ROWS_FIELD: &'static str = "agents";
    const RULES: QueryRules = QueryRules {
        statuses: AGENT_STATUSES,
        sort_keys: AGENT_SORT_KEYS,
    };

    fn columns() -> Vec<Column<Agent>> {
        vec![
            Column::new("name", "Name", |a: &Agent| CellValue::text(a.name.clone())),
            Column::new("email", "Email", |a: &Agent| CellValue::text(a.email.clone())),
            Column::new("openTickets", "Open tickets", |a: &Agent| {
                CellValue::text(a.open_tickets.to_string())
            })
            .sorted_by("openTickets"),
            status_column(),
            created_column(),
        ]
    }
}

/// Vehicle categories have no separate detail record.
pub struct Categories;

impl ListResource for Categories {
    type Row = Category;
    type Detail = Category;
    const NAME: &'static str = "categories";
    const TITLE: &'static str = "Categories";
    const LIST_PATH: &'static str = "/admin/categories";
    const DETAIL_PATH: &'static str = "/admin/categories";
    const ROWS_FIELD: &'static str = "categories";
    const RULES: QueryRules = QueryRules {
        statuses: CATEGORY_STATUSES,
        sort_keys: CATEGORY_SORT_KEYS,
    };

    fn columns() -> Vec<Column<Category>> {
        vec![
            Column::new("name", "Name", |c: &Category| CellValue::text(c.name.clone()))
                .sorted_by("name"),
            Column::new("baseFare", "Base fare", |c: &Category| CellValue::Money(c.base_fare)),
            Column::new("seats", "Seats", |c: &Category| CellValue::text(c.seats.to_string())),
            status_column(),
            created_column(),
        ]
    }
}

pub struct Offers;

impl ListResource for Offers {
    type Row = Offer;
    type Detail = Offer;
    const NAME: &'static str = "offers";
    const TITLE: &'static str = "Offers";
    const LIST_PATH: &'static str = "/admin/offers";
    const DETAIL_PATH: &'static str = "/admin/offers";
    const ROWS_FIELD: &'static str = "offers";
    const RULES: QueryRules = QueryRules {
        statuses: OFFER_STATUSES,
        sort_keys: OFFER_SORT_KEYS,
    };

    fn columns() -> Vec<Column<Offer>> {
        vec![
            Column::new("code", "Code", |o: &Offer| CellValue::text(o.code.clone())),
            Column::new("title", "Title", |o: &Offer| CellValue::text(o.title.clone())),
            Column::new("discount", "Discount", |o: &Offer| CellValue::Percent(o.discount_percent))
                .sorted_by("discountPercent"),
            Column::new("maxDiscount", "Max discount", |o: &Offer| match o.max_discount {
                Some(v) => CellValue::Money(v),
                None => CellValue::Empty,
            }),
            Column::new("validFrom", "Valid from", |o: &Offer| CellValue::Day(o.valid_from)),
            Column::new("validUntil", "Valid until", |o: &Offer| CellValue::Day(o.valid_until))
                .sorted_by("validUntil"),
            Column::new("redemptions", "Redeemed", |o: &Offer| {
                CellValue::text(o.redemptions.to_string())
            }),
            status_column(),
        ]
    }
}

pub struct BlogPosts;

impl ListResource for BlogPosts {
    type Row = BlogPost;
    type Detail = BlogPostDetail;
    const NAME: &'static str = "blogs";
    const TITLE: &'static str = "Blog posts";
    const LIST_PATH: &'static str = "/admin/blogs";
    const DETAIL_PATH: &'static str = "/admin/blogs";
    const ROWS_FIELD: &'static str = "blogs";
    const RULES: QueryRules = QueryRules {
        statuses: BLOG_STATUSES,
        sort_keys: BLOG_SORT_KEYS,
    };

    fn columns() -> Vec<Column<BlogPost>> {
        vec![
            Column::new("title", "Title", |b: &BlogPost| CellValue::text(b.title.clone()))
                .sorted_by("title"),
            Column::new("author", "Author", |b: &BlogPost| CellValue::text(b.author.clone())),
            status_column(),
            created_column(),
        ]
    }
}
