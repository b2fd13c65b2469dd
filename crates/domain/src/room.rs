use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use wayfarer_core::ApiQuery;

use crate::payment::PaymentMethod;
use crate::profile::MemberBasicProfile;

/// Room offered by an accommodation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Stable room id.
    pub id: i64,
    /// Accommodation the room belongs to.
    pub accommodation_id: i64,
    /// Accommodation display name.
    pub accommodation_name: String,
    /// Room display name.
    pub name: String,
    /// Nightly price.
    pub price: i64,
    /// Check-in time, as the backend formats it.
    pub in_time: String,
}

/// Room paired with its availability for a requested date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailability {
    /// The room on offer.
    pub room: Room,
    /// Whether the room can be reserved for the requested range.
    pub reservation_availability: bool,
}

/// Request to register a room under an accommodation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomForm {
    /// Room display name.
    pub name: String,
    /// Nightly price.
    pub price: i64,
    /// Number of identical rooms available per night.
    pub stock: u32,
    /// Check-in time, as the backend formats it.
    pub in_time: String,
}

/// Request to reserve a room for a date range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRoomForm {
    /// How the reservation is paid.
    pub payment_method: PaymentMethod,
    /// First night.
    pub start_date: NaiveDate,
    /// Checkout day.
    pub end_date: NaiveDate,
}

/// Date range used when listing rooms with availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomDateQuery {
    /// First night.
    pub start: NaiveDate,
    /// Checkout day.
    pub end: NaiveDate,
}

impl ApiQuery for RoomDateQuery {
    fn params(&self) -> Vec<(String, String)> {
        vec![
            ("start".to_owned(), self.start.to_string()),
            ("end".to_owned(), self.end.to_string()),
        ]
    }
}

/// Lifecycle of a room order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Reserved, awaiting confirmation by the accommodation.
    Created,
    /// Cancelled by either party.
    Cancelled,
    /// Confirmed by the accommodation.
    Confirmed,
}

impl OrderStatus {
    /// Wire token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Cancelled => "CANCELLED",
            Self::Confirmed => "CONFIRMED",
        }
    }
}

/// Reservation order for a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOrder {
    /// Stable order id.
    pub id: i64,
    /// Accommodation the room belongs to.
    pub accommodation_id: i64,
    /// Accommodation display name.
    pub accommodation_name: String,
    /// Reserved room id.
    pub room_id: i64,
    /// Reserved room display name.
    pub room_name: String,
    /// Nightly price at reservation time.
    pub room_price: i64,
    /// Check-in time, as the backend formats it.
    pub in_time: String,
    /// Total charged for the stay.
    pub total_price: i64,
    /// First night.
    pub start_date: NaiveDate,
    /// Checkout day.
    pub end_date: NaiveDate,
    /// Member who placed the order.
    pub member: MemberBasicProfile,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use wayfarer_core::ApiQuery;

    use super::{OrderStatus, RoomAvailability, RoomDateQuery, RoomOrder};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("bad test date {year}-{month}-{day}"))
    }

    #[test]
    fn date_query_exposes_iso_dates_without_paging() {
        let query = RoomDateQuery {
            start: date(2024, 7, 1),
            end: date(2024, 7, 3),
        };

        assert_eq!(query.page(), None);
        assert_eq!(query.size(), None);
        assert_eq!(
            query.params(),
            vec![
                ("start".to_owned(), "2024-07-01".to_owned()),
                ("end".to_owned(), "2024-07-03".to_owned()),
            ]
        );
    }

    #[test]
    fn availability_decodes_nested_room() {
        let availability: RoomAvailability = serde_json::from_value(json!({
            "room": {
                "id": 4,
                "accommodationId": 2,
                "accommodationName": "Harbor Inn",
                "name": "Twin 201",
                "price": 90_000,
                "inTime": "15:00",
            },
            "reservationAvailability": false,
        }))
        .unwrap_or_else(|error| panic!("decode failed: {error}"));

        assert_eq!(availability.room.name, "Twin 201");
        assert!(!availability.reservation_availability);
    }

    #[test]
    fn order_decodes_status_token() {
        let order: RoomOrder = serde_json::from_value(json!({
            "id": 9,
            "accommodationId": 2,
            "accommodationName": "Harbor Inn",
            "roomId": 4,
            "roomName": "Twin 201",
            "roomPrice": 90_000,
            "inTime": "15:00",
            "totalPrice": 180_000,
            "startDate": "2024-07-01",
            "endDate": "2024-07-03",
            "member": {
                "nickname": "roamer",
                "createdAt": "2024-01-01T00:00:00",
                "updatedAt": "2024-01-01T00:00:00",
            },
            "status": "CONFIRMED",
            "createdAt": "2024-06-20T12:00:00",
            "updatedAt": "2024-06-21T12:00:00",
        }))
        .unwrap_or_else(|error| panic!("decode failed: {error}"));

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.status.as_str(), "CONFIRMED");
        assert_eq!(order.start_date, date(2024, 7, 1));
    }
}
