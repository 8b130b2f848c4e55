//! "My account": the current user's profile and account deletion.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::Notice;
use crate::api::UserApi;
use crate::api::types::User;
use crate::error::FlowError;
use crate::guard::Route;
use crate::session::SessionStore;

pub const DELETED: &str = "Your account has been deleted !";

/// Profile plus what the account view may offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountView {
    pub user: User,
    /// Admins cannot delete themselves here; they see "You are admin".
    pub can_delete: bool,
}

#[derive(Clone, Debug)]
pub struct Account<A> {
    api: A,
    store: SessionStore,
}

impl<A: UserApi> Account<A> {
    pub fn new(api: A, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// # Errors
    ///
    /// [`FlowError::NotLogged`] without an identity, else API failures.
    pub async fn load(&self) -> Result<AccountView, FlowError> {
        let identity = self.store.current_identity().ok_or(FlowError::NotLogged)?;
        let user = self.api.get_user(identity.user_id).await?;
        Ok(AccountView { can_delete: !user.admin, user })
    }

    /// Delete the account, then log out. On failure the session is kept.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotLogged`] without an identity, else API failures.
    pub async fn delete(&self) -> Result<Notice, FlowError> {
        let identity = self.store.current_identity().ok_or(FlowError::NotLogged)?;
        self.api.delete_user(identity.user_id).await?;
        tracing::info!(user_id = identity.user_id, "account: deleted");
        self.store.log_out();
        Ok(Notice { message: DELETED, navigate_to: Route::Home })
    }
}
