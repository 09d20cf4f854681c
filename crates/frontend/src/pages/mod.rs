//! Top-level routed pages

pub mod dashboard;
pub mod driver_licenses;
pub mod drivers;
pub mod login;
pub mod not_found;
pub mod tucs;

pub use dashboard::DashboardPage;
pub use driver_licenses::DriverLicensesPage;
pub use drivers::DriversPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use tucs::TucsPage;
