//! Page Components
//!
//! Top-level route components.

pub mod admin_dashboard;
pub mod doctor_dashboard;
pub mod landing;
pub mod patient_dashboard;
pub mod patient_login;

pub use admin_dashboard::AdminDashboardPage;
pub use doctor_dashboard::DoctorDashboardPage;
pub use landing::Landing;
pub use patient_dashboard::PatientDashboardPage;
pub use patient_login::PatientLoginPage;
