//! Domain types for the travel-booking client: accounts, roles,
//! destinations, descriptions, journeys, rooms, orders, and payments.

#![forbid(unsafe_code)]

mod admin;
mod auth;
mod category;
mod description;
mod destination;
mod journey;
mod payment;
mod profile;
mod role;
mod room;
mod validation;

pub use admin::{BanForm, MemberListQuery, RoleUpdateForm};
pub use auth::{LoginForm, LoginGrant, RegisterForm};
pub use category::Category;
pub use description::{Description, DescriptionForm, DescriptionUpdateForm};
pub use destination::{Destination, DestinationForm, DestinationSummary, ItemListQuery};
pub use journey::{
    Journey, JourneyComment, JourneyCommentForm, JourneyCommentUpdateForm, JourneyContent,
    JourneyForm,
};
pub use payment::{
    CreateCreditCardForm, CreditCard, DepositForm, PaymentKind, PaymentMethod, PaymentMethods,
    TravelPay,
};
pub use profile::{MemberBasicProfile, MemberProfile, UpdateNicknameForm, UpdatePasswordForm};
pub use role::Role;
pub use room::{
    CreateRoomForm, OrderStatus, ReserveRoomForm, Room, RoomAvailability, RoomDateQuery, RoomOrder,
};
pub use validation::{
    ACCOUNT_MAX_LENGTH, ACCOUNT_MIN_LENGTH, NICKNAME_MAX_LENGTH, NICKNAME_MIN_LENGTH,
    PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, validate_account, validate_nickname,
    validate_password,
};
