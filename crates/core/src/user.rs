//! Current user profile and its best-effort resolution

use crate::models::EntityId;
use crate::storage::TokenStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::future::Future;
use tracing::{debug, warn};

/// Profile exactly as returned by `GET /users/me`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub platform: Option<String>,
}

/// The profile endpoint answers either `{ "data": {...} }` or the object itself
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ProfileEnvelope {
    Wrapped { data: RawProfile },
    Direct(RawProfile),
}

impl ProfileEnvelope {
    #[must_use]
    pub fn into_profile(self) -> RawProfile {
        match self {
            Self::Wrapped { data } | Self::Direct(data) => data,
        }
    }
}

/// Normalised profile of the signed-in user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Option<EntityId>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub roles: BTreeSet<String>,
    pub platform: Option<String>,
}

impl CurrentUser {
    /// Name shown in the header: username, then email, then a placeholder
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Usuario")
    }

    #[must_use]
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

impl From<RawProfile> for CurrentUser {
    fn from(raw: RawProfile) -> Self {
        let roles = match (raw.roles, raw.role) {
            (Some(roles), _) => roles.into_iter().collect(),
            (None, Some(role)) => BTreeSet::from([role]),
            (None, None) => BTreeSet::new(),
        };

        Self {
            id: raw.id,
            username: raw.username.or(raw.name),
            email: raw.email,
            roles,
            platform: raw.platform,
        }
    }
}

/// Resolve the signed-in user.
///
/// Without a token there is no user and `fetch` is never called. A successful
/// fetch is normalised and its display fields are written back to the store;
/// a failed fetch falls back to the cached display fields.
pub async fn load_current_user<S, F, Fut, E>(store: &S, fetch: F) -> Option<CurrentUser>
where
    S: TokenStore + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawProfile, E>>,
    E: Display,
{
    store.token()?;

    match fetch().await {
        Ok(raw) => {
            let user = CurrentUser::from(raw);
            if let Err(e) = store.remember_profile(&user) {
                warn!("Failed to cache profile fields: {e}");
            }
            debug!(username = ?user.username, "Loaded current user");
            Some(user)
        }
        Err(e) => {
            warn!("Profile fetch failed, using cached fields: {e}");
            store.cached_profile()
        }
    }
}
