//! Decide command handler.
//!
//! Evaluates one decision procedure over a form and its candidates, with no
//! vault, settings or queue involved, and prints the decision as JSON.

use anyhow::Result;
use vault_notify_core::notification::{
    Decision, decide_add_login, decide_changed_password, decide_cipher_notification,
};

use crate::scenario::{DecideInput, DecideMode};

/// Execute the decide command.
pub fn execute(input: &DecideInput) -> Result<()> {
    let decision = decide(input);
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

/// Run the procedure selected by `input.mode`.
pub fn decide(input: &DecideInput) -> Decision {
    match input.mode {
        DecideMode::Unified => decide_cipher_notification(&input.form, &input.candidates),
        DecideMode::AddLogin => decide_add_login(&input.form, &input.candidates),
        DecideMode::ChangedPassword => decide_changed_password(&input.form, &input.candidates),
    }
}
