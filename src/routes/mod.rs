pub mod booking_routes;
pub mod event_routes;
pub mod spot_routes;
