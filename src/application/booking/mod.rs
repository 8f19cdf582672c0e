mod booking_service;
mod errors;

pub use booking_service::{
    BookingView, create_booking, decide_booking, get_booking, list_bookings_by_booker,
    list_bookings_by_owner,
};
pub use errors::{BookingApplicationError, Result};
