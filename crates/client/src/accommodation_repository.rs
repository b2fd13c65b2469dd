use std::sync::Arc;

use wayfarer_core::{Envelope, NoQuery, Page, PageQuery};
use wayfarer_domain::{
    CreateRoomForm, ReserveRoomForm, Room, RoomAvailability, RoomDateQuery, RoomOrder,
};

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/accommodations`: rooms, reservations, and the orders
/// they produce.
#[derive(Clone)]
pub struct AccommodationRepository {
    transport: Arc<ApiTransport>,
}

impl AccommodationRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Lists an accommodation's rooms with availability over a date
    /// range.
    pub async fn rooms_for_reserve(
        &self,
        accommodation_id: i64,
        query: &RoomDateQuery,
    ) -> Envelope<Vec<RoomAvailability>> {
        self.transport
            .get(
                "/accommodations/{pv}",
                Some(&accommodation_id.to_string()),
                query,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Pages through the rooms registered by the signed-in producer.
    pub async fn rooms_by_producer(&self, query: &PageQuery) -> Envelope<Page<Room>> {
        self.transport
            .get("/accommodations/rooms", None, query, AuthPolicy::Enforce)
            .await
    }

    /// Fetches one room.
    pub async fn room(&self, id: i64) -> Envelope<Room> {
        self.transport
            .get(
                "/accommodations/rooms/{pv}",
                Some(&id.to_string()),
                &NoQuery,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Registers a room under an accommodation.
    pub async fn create_room(
        &self,
        accommodation_id: i64,
        form: &CreateRoomForm,
    ) -> Envelope<String> {
        self.transport
            .post(
                "/accommodations/{pv}",
                Some(&accommodation_id.to_string()),
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Reserves a room for a date range, paying with the chosen method.
    pub async fn reserve_room(&self, room_id: i64, form: &ReserveRoomForm) -> Envelope<String> {
        self.transport
            .post(
                "/accommodations/rooms/{pv}",
                Some(&room_id.to_string()),
                &NoQuery,
                form,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Confirms a pending order.
    pub async fn confirm_order(&self, order_id: i64) -> Envelope<String> {
        self.transport
            .post_empty(
                "/accommodations/orders/{pv}/confirm",
                Some(&order_id.to_string()),
                &NoQuery,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Cancels an order.
    pub async fn cancel_order(&self, order_id: i64) -> Envelope<String> {
        self.transport
            .post_empty(
                "/accommodations/orders/{pv}/cancel",
                Some(&order_id.to_string()),
                &NoQuery,
                AuthPolicy::Enforce,
            )
            .await
    }

    /// Pages through the signed-in member's orders.
    pub async fn orders(&self, query: &PageQuery) -> Envelope<Page<RoomOrder>> {
        self.transport
            .get("/accommodations/orders", None, query, AuthPolicy::Enforce)
            .await
    }

    /// Pages through the orders placed against one room.
    pub async fn orders_by_room(
        &self,
        room_id: i64,
        query: &PageQuery,
    ) -> Envelope<Page<RoomOrder>> {
        self.transport
            .get(
                "/accommodations/orders/rooms/{pv}",
                Some(&room_id.to_string()),
                query,
                AuthPolicy::Enforce,
            )
            .await
    }
}
