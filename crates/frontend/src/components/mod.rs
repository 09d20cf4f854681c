//! Shared UI components

pub mod dialogs;
pub mod layout;
pub mod pagination;
pub mod spinner;

pub use layout::Layout;
pub use pagination::Pagination;
pub use spinner::LoadingSpinner;
