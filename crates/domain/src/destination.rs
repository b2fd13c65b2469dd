use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use wayfarer_core::{ApiQuery, Page};

use crate::category::Category;
use crate::profile::MemberBasicProfile;

/// Core destination fields, embedded in journey contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSummary {
    /// Stable destination id.
    pub id: i64,
    /// Destination name.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Destination category.
    pub category: Category,
}

/// Full destination projection returned by the destination endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Stable destination id.
    pub id: i64,
    /// Destination name.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Destination category.
    pub category: Category,
    /// First page of attached image file names.
    pub images: Page<String>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
    /// Member who registered the destination.
    pub creator: MemberBasicProfile,
}

/// Destination create/update request; both operations share the shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationForm {
    /// Destination category.
    pub category: Category,
    /// Destination name.
    pub title: String,
    /// Street address.
    pub address: String,
}

/// Query for searchable destination lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Number of items per page.
    pub size: u32,
    /// Category filter; absent means all categories.
    pub categories: Option<Vec<Category>>,
    /// Title search keyword; absent means no keyword filter.
    pub query: Option<String>,
}

impl ItemListQuery {
    /// Creates an unfiltered query for a 1-based page number.
    #[must_use]
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            categories: None,
            query: None,
        }
    }
}

impl ApiQuery for ItemListQuery {
    fn page(&self) -> Option<u32> {
        Some(self.page)
    }

    fn size(&self) -> Option<u32> {
        Some(self.size)
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(categories) = &self.categories {
            for category in categories {
                params.push(("categories".to_owned(), category.as_str().to_owned()));
            }
        }
        if let Some(query) = &self.query {
            params.push(("query".to_owned(), query.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wayfarer_core::ApiQuery;

    use super::{Category, Destination, ItemListQuery};

    #[test]
    fn destination_decodes_category_and_image_page() {
        let destination: Destination = serde_json::from_value(json!({
            "id": 7,
            "title": "Seaside Market",
            "address": "1 Harbor Road",
            "category": "RESTAURANT",
            "images": { "data": ["a.png", "b.png"], "total": 5 },
            "createdAt": "2024-03-01T09:30:00",
            "updatedAt": "2024-03-02T10:00:00",
            "creator": {
                "nickname": "roamer",
                "createdAt": "2024-01-01T00:00:00",
                "updatedAt": "2024-01-01T00:00:00",
            },
        }))
        .unwrap_or_else(|error| panic!("decode failed: {error}"));

        assert_eq!(destination.category, Category::Restaurant);
        assert_eq!(destination.images.total, 5);
        assert_eq!(destination.creator.nickname, "roamer");
    }

    #[test]
    fn unfiltered_query_has_no_params() {
        let query = ItemListQuery::page(2, 12);
        assert_eq!(query.page(), Some(2));
        assert!(query.params().is_empty());
    }

    #[test]
    fn filters_serialize_with_repeated_category_key() {
        let query = ItemListQuery {
            page: 1,
            size: 12,
            categories: Some(vec![Category::Restaurant, Category::Enjoyment]),
            query: Some("harbor".to_owned()),
        };

        assert_eq!(
            query.params(),
            vec![
                ("categories".to_owned(), "RESTAURANT".to_owned()),
                ("categories".to_owned(), "ENJOYMENT".to_owned()),
                ("query".to_owned(), "harbor".to_owned()),
            ]
        );
    }
}
