use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use vault_notify_core::LoginCipher;
use vault_notify_core::ports::RepromptPort;

/// Master-password prompt with a preset answer.
#[derive(Debug)]
pub struct ScriptedReprompt {
    accept: AtomicBool,
    prompts: AtomicUsize,
}

impl ScriptedReprompt {
    pub const fn new(accept: bool) -> Self {
        Self {
            accept: AtomicBool::new(accept),
            prompts: AtomicUsize::new(0),
        }
    }

    pub fn set_accept(&self, accept: bool) {
        self.accept.store(accept, Ordering::SeqCst);
    }

    /// How many times the user was prompted.
    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedReprompt {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl RepromptPort for ScriptedReprompt {
    async fn confirm(&self, _cipher: &LoginCipher) -> bool {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        self.accept.load(Ordering::SeqCst)
    }
}
