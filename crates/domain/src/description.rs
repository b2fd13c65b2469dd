use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::profile::MemberBasicProfile;

/// Review ("description") attached to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    /// Stable description id.
    pub id: i64,
    /// Member who wrote the description.
    pub creator: MemberBasicProfile,
    /// Review text.
    pub content: String,
    /// Attached image file names.
    pub images: Vec<String>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
}

/// Request to attach a new description to a destination.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionForm {
    /// Destination the description belongs to.
    pub destination_id: i64,
    /// Review text.
    pub content: String,
    /// File names of previously uploaded images.
    pub store_file_names: Vec<String>,
}

/// Request to rewrite an existing description.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionUpdateForm {
    /// Review text.
    pub content: String,
    /// File names of previously uploaded images.
    pub store_file_names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Description, DescriptionForm};

    #[test]
    fn description_decodes_images_and_creator() {
        let description: Description = serde_json::from_value(json!({
            "id": 11,
            "creator": {
                "nickname": "roamer",
                "createdAt": "2024-01-01T00:00:00",
                "updatedAt": "2024-01-01T00:00:00",
            },
            "content": "Great seafood.",
            "images": ["x.png"],
            "createdAt": "2024-03-01T09:30:00",
            "updatedAt": "2024-03-02T10:00:00",
        }))
        .unwrap_or_else(|error| panic!("decode failed: {error}"));

        assert_eq!(description.images, vec!["x.png"]);
        assert_eq!(description.creator.nickname, "roamer");
    }

    #[test]
    fn form_serializes_store_file_names_camel_case() {
        let form = DescriptionForm {
            destination_id: 7,
            content: "Great seafood.".to_owned(),
            store_file_names: vec!["x.png".to_owned()],
        };

        let value = serde_json::to_value(&form)
            .unwrap_or_else(|error| panic!("serialize failed: {error}"));
        assert_eq!(value["destinationId"], 7);
        assert_eq!(value["storeFileNames"][0], "x.png");
    }
}
