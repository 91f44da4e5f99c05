//! Credential-save decision procedures.
//!
//! Pure functions over a form submission and the candidates already matched
//! to the page. Lock state, settings and queue state are the caller's
//! concern; the same inputs always yield the same [`Decision`].

use serde::Serialize;

use crate::domain::{CredentialCandidate, FormSubmission};

use super::types::{AddLoginData, ChangePasswordData, NotificationKind};

/// What the user should be offered for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Decision {
    /// Save a new login.
    AddLogin { username: String, password: String },
    /// Update the password of every listed login.
    ChangePassword {
        cipher_ids: Vec<String>,
        new_password: String,
    },
    /// Nothing to offer.
    NoChange,
}

impl Decision {
    fn add(username: &str, password: &str) -> Self {
        Self::AddLogin {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn change<'a>(
        candidates: impl IntoIterator<Item = &'a CredentialCandidate>,
        new_password: &str,
    ) -> Self {
        Self::ChangePassword {
            cipher_ids: candidates.into_iter().map(|c| c.id.clone()).collect(),
            new_password: new_password.to_string(),
        }
    }

    /// Queue payload for this decision; `uri` is the submitting page.
    pub fn into_kind(self, uri: &str) -> Option<NotificationKind> {
        match self {
            Self::AddLogin { username, password } => {
                Some(NotificationKind::AddLogin(AddLoginData {
                    username,
                    password,
                    uri: uri.to_string(),
                }))
            }
            Self::ChangePassword {
                cipher_ids,
                new_password,
            } => Some(NotificationKind::ChangePassword(ChangePasswordData {
                cipher_ids: Some(cipher_ids),
                new_password,
            })),
            Self::NoChange => None,
        }
    }
}

/// Decide for the unified form-submission trigger.
///
/// Rules are evaluated in order and the first that applies wins. Every
/// qualifying candidate is included in a `ChangePassword` decision.
pub fn decide_cipher_notification(
    form: &FormSubmission,
    candidates: &[CredentialCandidate],
) -> Decision {
    let username = form.username.as_str();
    let password = form.password.as_str();
    let new_password = form.new_password.as_str();
    let target = form.target_password();

    let username_match =
        |c: &CredentialCandidate| !username.is_empty() && c.username_matches(username);
    let password_match =
        |c: &CredentialCandidate| !password.is_empty() && c.password == password;
    let new_password_match =
        |c: &CredentialCandidate| !new_password.is_empty() && c.password == new_password;

    // Username-only submission: the login is either known or new.
    if !form.has_password_field() {
        if !form.has_username() || candidates.iter().any(username_match) {
            return Decision::NoChange;
        }
        return Decision::add(username, "");
    }

    // A stored login already holds the final state.
    let already_current = candidates
        .iter()
        .any(|c| c.password == target && (username.is_empty() || username_match(c)));
    if already_current {
        return Decision::NoChange;
    }

    if form.has_username() {
        let by_username: Vec<_> = candidates.iter().filter(|&c| username_match(c)).collect();
        if !by_username.is_empty() {
            let exact: Vec<_> = by_username
                .iter()
                .copied()
                .filter(|&c| password_match(c))
                .collect();
            let chosen = if exact.is_empty() { by_username } else { exact };
            return Decision::change(chosen, target);
        }
    }

    // The new password belongs to a login under another username.
    if candidates.iter().any(new_password_match) {
        if form.has_username() && form.has_password() {
            return Decision::add(username, target);
        }
        return Decision::NoChange;
    }

    let by_password: Vec<_> = candidates.iter().filter(|&c| password_match(c)).collect();
    if !by_password.is_empty() {
        return Decision::change(by_password, target);
    }

    let single_password_field = form.has_password() != form.has_new_password();
    if !form.has_username() && single_password_field && !candidates.is_empty() {
        return Decision::change(candidates, target);
    }

    Decision::add(username, target)
}

/// Decide for the legacy "new login submitted" trigger.
///
/// Offers an update only when exactly one login with the same username holds
/// a different password.
pub fn decide_add_login(form: &FormSubmission, candidates: &[CredentialCandidate]) -> Decision {
    let matching: Vec<_> = candidates
        .iter()
        .filter(|c| c.username_matches(&form.username))
        .collect();

    match matching.as_slice() {
        [] => Decision::add(&form.username, &form.password),
        [only] if only.password != form.password => {
            Decision::change([*only], &form.password)
        }
        _ => Decision::NoChange,
    }
}

/// Decide for the legacy "password changed" trigger.
pub fn decide_changed_password(
    form: &FormSubmission,
    candidates: &[CredentialCandidate],
) -> Decision {
    if !form.has_password_field() {
        return Decision::NoChange;
    }
    let secret = form.target_password();

    let mut scoped: Vec<_> = candidates
        .iter()
        .filter(|c| !form.has_username() || c.username_matches(&form.username))
        .collect();

    if form.has_password() && scoped.iter().any(|c| c.password == form.password) {
        scoped.retain(|c| c.password == form.password);
    }
    scoped.retain(|c| c.password != secret);

    if scoped.is_empty() {
        Decision::NoChange
    } else {
        Decision::change(scoped, secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://archive.org/login";

    fn form(username: &str, password: &str, new_password: &str) -> FormSubmission {
        FormSubmission::new(PAGE)
            .with_username(username)
            .with_password(password)
            .with_new_password(new_password)
    }

    fn cand(id: &str, username: &str, password: &str) -> CredentialCandidate {
        CredentialCandidate::new(id, username, password)
    }

    fn change(ids: &[&str], new_password: &str) -> Decision {
        Decision::ChangePassword {
            cipher_ids: ids.iter().map(|s| (*s).to_string()).collect(),
            new_password: new_password.to_string(),
        }
    }

    fn add(username: &str, password: &str) -> Decision {
        Decision::AddLogin {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_new_password_owned_by_other_user_adds_login() {
        let decision = decide_cipher_notification(
            &form("gandalfG", "UShallKnotPassword", "Edro2x"),
            &[cand("c2", "shadowfax", "Edro2x")],
        );
        assert_eq!(decision, add("gandalfG", "Edro2x"));
    }

    #[test]
    fn test_username_and_password_match_changes_password() {
        let decision = decide_cipher_notification(
            &form("gandalfG", "UShallKnotPassword", "Edro2x"),
            &[cand("c1", "gandalfG", "UShallKnotPassword")],
        );
        assert_eq!(decision, change(&["c1"], "Edro2x"));
    }

    #[test]
    fn test_password_only_with_no_match_changes_all_candidates() {
        let candidates = [cand("c1", "frodo", "ring"), cand("c2", "sam", "potatoes")];
        let decision = decide_cipher_notification(&form("", "p1", ""), &candidates);
        assert_eq!(decision, change(&["c1", "c2"], "p1"));
    }

    #[test]
    fn test_new_password_only_with_no_match_changes_all_candidates() {
        let candidates = [cand("c1", "frodo", "ring")];
        let decision = decide_cipher_notification(&form("", "", "n1"), &candidates);
        assert_eq!(decision, change(&["c1"], "n1"));
    }

    #[test]
    fn test_password_only_without_candidates_adds_login() {
        let decision = decide_cipher_notification(&form("", "p1", ""), &[]);
        assert_eq!(decision, add("", "p1"));
    }

    #[test]
    fn test_username_only() {
        let candidates = [cand("c1", "Frodo", "ring")];
        assert_eq!(
            decide_cipher_notification(&form("frodo", "", ""), &candidates),
            Decision::NoChange
        );
        assert_eq!(
            decide_cipher_notification(&form("sam", "", ""), &candidates),
            add("sam", "")
        );
    }

    #[test]
    fn test_blank_submission_is_no_change() {
        assert_eq!(
            decide_cipher_notification(&form("", "", ""), &[cand("c1", "a", "b")]),
            Decision::NoChange
        );
    }

    #[test]
    fn test_already_current_guard_for_every_field_combination() {
        let candidates = [cand("c1", "gandalf", "final")];
        let submissions = [
            form("gandalf", "final", ""),
            form("gandalf", "", "final"),
            form("gandalf", "old", "final"),
            form("GANDALF", "old", "final"),
            form("", "final", ""),
            form("", "", "final"),
            form("", "old", "final"),
        ];
        for submission in &submissions {
            assert_eq!(
                decide_cipher_notification(submission, &candidates),
                Decision::NoChange,
                "expected no change for {submission:?}"
            );
        }
    }

    #[test]
    fn test_username_match_without_password_match_changes_all_username_matches() {
        let candidates = [
            cand("c1", "gandalf", "a"),
            cand("c2", "Gandalf", "b"),
            cand("c3", "saruman", "c"),
        ];
        let decision = decide_cipher_notification(&form("gandalf", "x", "y"), &candidates);
        assert_eq!(decision, change(&["c1", "c2"], "y"));
    }

    #[test]
    fn test_username_and_password_match_narrows_selection() {
        let candidates = [cand("c1", "gandalf", "a"), cand("c2", "gandalf", "b")];
        let decision = decide_cipher_notification(&form("gandalf", "b", "c"), &candidates);
        assert_eq!(decision, change(&["c2"], "c"));
    }

    #[test]
    fn test_new_password_match_without_current_password_is_no_change() {
        let candidates = [cand("c1", "shadowfax", "Edro2x")];
        let decision = decide_cipher_notification(&form("gandalfG", "", "Edro2x"), &candidates);
        assert_eq!(decision, Decision::NoChange);
    }

    #[test]
    fn test_password_match_under_other_username_changes_that_login() {
        let candidates = [cand("c1", "frodo", "shared")];
        let decision = decide_cipher_notification(&form("sam", "shared", "next"), &candidates);
        assert_eq!(decision, change(&["c1"], "next"));
    }

    #[test]
    fn test_password_match_without_username_changes_matching() {
        let candidates = [cand("c1", "frodo", "old"), cand("c2", "sam", "other")];
        let decision = decide_cipher_notification(&form("", "old", "new"), &candidates);
        assert_eq!(decision, change(&["c1"], "new"));
    }

    #[test]
    fn test_both_password_fields_no_match_adds_login() {
        let candidates = [cand("c1", "frodo", "ring")];
        let decision = decide_cipher_notification(&form("", "old", "new"), &candidates);
        assert_eq!(decision, add("", "new"));
    }

    #[test]
    fn test_unknown_username_adds_login() {
        let decision =
            decide_cipher_notification(&form("sam", "pw", ""), &[cand("c1", "frodo", "ring")]);
        assert_eq!(decision, add("sam", "pw"));
    }

    #[test]
    fn test_decision_is_deterministic() {
        let submission = form("", "p1", "");
        let candidates = [cand("c1", "a", "x"), cand("c2", "b", "y")];
        assert_eq!(
            decide_cipher_notification(&submission, &candidates),
            decide_cipher_notification(&submission, &candidates)
        );
    }

    #[test]
    fn test_decide_add_login() {
        let submission = form("Frodo", "ring", "");
        assert_eq!(decide_add_login(&submission, &[]), add("Frodo", "ring"));
        assert_eq!(
            decide_add_login(&submission, &[cand("c1", "frodo", "old")]),
            change(&["c1"], "ring")
        );
        assert_eq!(
            decide_add_login(&submission, &[cand("c1", "frodo", "ring")]),
            Decision::NoChange
        );
        assert_eq!(
            decide_add_login(
                &submission,
                &[cand("c1", "frodo", "a"), cand("c2", "FRODO", "b")]
            ),
            Decision::NoChange
        );
    }

    #[test]
    fn test_decide_add_login_blank_username_matches_blank() {
        let submission = form("", "ring", "");
        assert_eq!(
            decide_add_login(&submission, &[cand("c1", "", "old")]),
            change(&["c1"], "ring")
        );
        assert_eq!(
            decide_add_login(&submission, &[cand("c1", "frodo", "old")]),
            add("", "ring")
        );
    }

    #[test]
    fn test_decide_changed_password() {
        let candidates = [
            cand("c1", "frodo", "old"),
            cand("c2", "frodo", "other"),
            cand("c3", "sam", "old"),
        ];

        assert_eq!(
            decide_changed_password(&form("frodo", "old", "new"), &candidates),
            change(&["c1"], "new")
        );
        assert_eq!(
            decide_changed_password(&form("frodo", "unknown", "new"), &candidates),
            change(&["c1", "c2"], "new")
        );
        assert_eq!(
            decide_changed_password(&form("", "old", "new"), &candidates),
            change(&["c1", "c3"], "new")
        );
        assert_eq!(
            decide_changed_password(&form("frodo", "", ""), &candidates),
            Decision::NoChange
        );
    }

    #[test]
    fn test_decide_changed_password_skips_logins_already_updated() {
        let candidates = [cand("c1", "frodo", "new"), cand("c2", "frodo", "old")];
        assert_eq!(
            decide_changed_password(&form("frodo", "", "new"), &candidates),
            change(&["c2"], "new")
        );
        assert_eq!(
            decide_changed_password(&form("frodo", "", "new"), &candidates[..1]),
            Decision::NoChange
        );
    }

    #[test]
    fn test_into_kind() {
        let kind = change(&["c1"], "n").into_kind(PAGE).unwrap();
        assert!(matches!(
            kind,
            NotificationKind::ChangePassword(ChangePasswordData { cipher_ids: Some(ref ids), .. }) if ids == &["c1".to_string()]
        ));
        assert!(Decision::NoChange.into_kind(PAGE).is_none());
    }
}
