use async_trait::async_trait;

use crate::domain::LoginCipher;

/// Master-password re-entry prompt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepromptPort: Send + Sync {
    /// Ask the user to re-enter the master password before `cipher` is changed.
    ///
    /// Resolves to `false` if the user cancels or enters the wrong password.
    async fn confirm(&self, cipher: &LoginCipher) -> bool;
}
