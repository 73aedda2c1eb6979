use client::{BlogPosts, ListResource};
use dioxus::prelude::*;
use shared_types::BlogPostDetail;
use shared_ui::{Badge, BadgeVariant, DetailItem, DetailList, PageHeader, PageTitle};

use crate::format_helpers::timestamp;
use crate::remote_table::{remote_table, use_remote_table, TableHandle};
use crate::routes::Route;

#[component]
pub fn BlogList(query: String) -> Element {
    let mirror = use_callback(|query: String| {
        navigator().replace(Route::BlogList { query });
    });
    let table = use_remote_table::<BlogPosts>(query, mirror);
    let title = BlogPosts::TITLE;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }
            {remote_table(table, blog_detail)}
        }
    }
}

fn blog_detail(detail: &BlogPostDetail, _table: TableHandle<BlogPosts>) -> Element {
    let post = &detail.post;
    rsx! {
        div { class: "blog-detail",
            if let Some(url) = detail.cover_image_url.clone() {
                img { class: "blog-cover", src: "{url}", alt: "{post.title}" }
            }
            DetailList {
                DetailItem { label: "Title", value: post.title.clone() }
                DetailItem { label: "Author", value: post.author.clone() }
                DetailItem { label: "Created", value: timestamp(post.created_at) }
            }
            p { class: "detail-body", "{detail.summary}" }
            div { class: "blog-tags",
                for tag in detail.tags.iter().cloned() {
                    Badge { key: "{tag}", variant: BadgeVariant::Outline, "{tag}" }
                }
            }
        }
    }
}
