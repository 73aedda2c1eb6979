use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Colour family for a backend status or priority code.
pub fn status_variant(status: &str) -> BadgeVariant {
    match status.to_ascii_uppercase().as_str() {
        "COMPLETED" | "ACTIVE" | "VERIFIED" | "RESOLVED" | "PUBLISHED" => BadgeVariant::Success,
        "REQUESTED" | "ACCEPTED" | "ONGOING" | "OPEN" | "IN_PROGRESS" | "PENDING"
        | "SCHEDULED" | "MEDIUM" => BadgeVariant::Warning,
        "CANCELLED" | "BLOCKED" | "REJECTED" | "EXPIRED" | "HIGH" | "URGENT" => {
            BadgeVariant::Destructive
        }
        "CLOSED" | "INACTIVE" | "DRAFT" | "LOW" => BadgeVariant::Outline,
        _ => BadgeVariant::Secondary,
    }
}

/// Inline label for short statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge coloured by [`status_variant`]. `label` is what the user reads.
#[component]
pub fn StatusBadge(status: String, label: String) -> Element {
    rsx! {
        Badge { variant: status_variant(&status), "{label}" }
    }
}
