use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::description::Description;
use crate::destination::DestinationSummary;
use crate::profile::MemberBasicProfile;

/// One stop of a journey: a destination plus the description written for
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyContent {
    /// Destination visited at this stop.
    pub destination: DestinationSummary,
    /// Description attached to this stop.
    pub description: Description,
}

/// Multi-stop journey composed from descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// Stable journey id.
    pub id: i64,
    /// Member who composed the journey.
    pub creator: MemberBasicProfile,
    /// Journey title.
    pub title: String,
    /// Overall review text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
    /// Stops in itinerary order.
    pub journey_contents: Vec<JourneyContent>,
}

/// Journey create/update request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyForm {
    /// Journey title.
    pub title: String,
    /// Overall review text.
    pub review: String,
    /// Description ids forming the stops, in itinerary order.
    pub contents: Vec<i64>,
}

/// Comment left on a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyComment {
    /// Stable comment id.
    pub id: i64,
    /// Member who wrote the comment.
    pub creator: MemberBasicProfile,
    /// Comment text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
}

/// Request to leave a comment on a journey.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyCommentForm {
    /// Comment text.
    pub comment: String,
}

/// Request to rewrite an existing journey comment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyCommentUpdateForm {
    /// Comment text.
    pub comment: String,
}
