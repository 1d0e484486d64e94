//! Workflows behind the catalog pages, independent of any view state.

use crate::domain::user::User;

pub mod catalog;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};

/// Fails with [`ServiceError::Unauthorized`] unless the user is admin or superuser.
pub fn ensure_can_manage(user: &User) -> ServiceResult<()> {
    if user.can_manage() {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}
