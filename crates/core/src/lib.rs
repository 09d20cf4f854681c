//! FISCAMOTO core types and session logic
//!
//! Everything in this crate is platform independent: browser storage, timers
//! and HTTP are reached through the traits defined here so the same logic runs
//! in the WASM frontend and in native tests.

pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod pagination;
pub mod refresh;
pub mod session;
pub mod storage;
pub mod task;
pub mod user;

pub use config::{AppConfig, StorageKeys};
pub use error::{CoreError, CoreResult};
pub use models::{
    CreateLicenseRequest, Driver, EntityId, License, LicenseField, LicenseForm, Paginated, Tuc,
};
pub use notify::{Toast, ToastVariant};
pub use pagination::{PaginationState, page_window};
pub use refresh::{ProbeStopped, TokenVerifier, run_refresh_probe};
pub use session::{ENTRY_ROUTE, EndReason, Session, SessionEffects, SessionEvent, SessionState};
pub use storage::{MemoryStore, TokenStore};
pub use task::ScheduledTask;
pub use user::{CurrentUser, ProfileEnvelope, RawProfile, load_current_user};
