use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, SortValue};

pub const BLOG_STATUSES: &[&str] = &["PUBLISHED", "DRAFT"];

pub const BLOG_SORT_KEYS: &[&str] = &["createdAt:desc", "createdAt:asc", "title:asc"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn status_label(&self) -> &'static str {
        if self.published {
            "PUBLISHED"
        } else {
            "DRAFT"
        }
    }
}

impl Listable for BlogPost {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        self.status_label()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_haystack(&self) -> String {
        format!("{} {}", self.title, self.author)
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "title" => Some(SortValue::Text(self.title.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub post: BlogPost,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}
