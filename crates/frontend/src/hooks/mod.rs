//! Custom hooks for the application

pub mod use_current_user;
pub mod use_debounce;
pub mod use_paginated;
pub mod use_scroll_restore;
pub mod use_token_refresh;

pub use use_current_user::use_current_user;
pub use use_debounce::use_debounce;
pub use use_paginated::{use_paginated, ListRequest};
pub use use_scroll_restore::use_scroll_restore;
pub use use_token_refresh::use_token_refresh;
