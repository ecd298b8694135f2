//! UI Components
//!
//! Reusable Leptos components for the portal pages.

pub mod add_doctor_modal;
pub mod booking_overlay;
pub mod doctor_filters;
pub mod fragment;
pub mod header;
pub mod login_modal;

pub use add_doctor_modal::AddDoctorModal;
pub use booking_overlay::BookingOverlay;
pub use doctor_filters::DoctorFilters;
pub use fragment::{node_view, NodeList};
pub use header::Header;
pub use login_modal::LoginModal;
