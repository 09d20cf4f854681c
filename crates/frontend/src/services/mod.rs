//! Backend services used by the pages

pub mod auth;
pub mod drivers;
pub mod licenses;
pub mod tucs;

pub use auth::AuthService;
pub use drivers::DriverService;
pub use licenses::LicenseService;
pub use tucs::TucService;
