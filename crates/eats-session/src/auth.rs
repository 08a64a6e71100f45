//! In-memory mock authentication.
//!
//! Accounts live only for the lifetime of the [`AuthService`]. Passwords are
//! kept as salted SHA-256 digests so plain text never sits in the store.

use std::collections::HashMap;

use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::SessionError;
use crate::profile::{Avatar, FriendRecommendation, ProfileUpdate, UserProfile};

pub const MIN_PASSWORD_LEN: usize = 6;

pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub avatar: Option<Avatar>,
}

#[derive(Debug, Clone)]
struct StoredUser {
    profile: UserProfile,
    password_digest: String,
}

/// Mock account store plus the currently logged-in user.
pub struct AuthService {
    /// Keyed by normalized (trimmed, lowercase) email.
    users: HashMap<String, StoredUser>,
    current: Option<String>,
    salt: String,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("users", &self.users.len())
            .field("current", &self.current)
            .field("salt", &"[redacted]")
            .finish()
    }
}

impl AuthService {
    #[must_use]
    pub fn new(salt: impl Into<String>) -> Self {
        Self {
            users: HashMap::new(),
            current: None,
            salt: salt.into(),
        }
    }

    /// A service pre-populated with the demo account, logged out.
    #[must_use]
    pub fn with_demo_user(salt: impl Into<String>) -> Self {
        let mut service = Self::new(salt);
        let profile = UserProfile {
            id: Uuid::new_v4(),
            name: "測試用戶".to_string(),
            email: DEMO_EMAIL.to_string(),
            avatar: Avatar::Dog,
            created_at: Utc::now(),
            friend_recommendations: Vec::new(),
        };
        let password_digest = service.digest(DEMO_PASSWORD);
        service.users.insert(
            normalize_email(DEMO_EMAIL),
            StoredUser {
                profile,
                password_digest,
            },
        );
        service
    }

    /// Create an account and log it in.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields, an email without `@`, a
    /// short or mismatched password, or [`SessionError::EmailTaken`].
    pub fn register(&mut self, form: RegisterForm) -> Result<UserProfile, SessionError> {
        validate_register_form(&form)?;

        let key = normalize_email(&form.email);
        if self.users.contains_key(&key) {
            return Err(SessionError::EmailTaken(form.email.trim().to_string()));
        }

        let profile = UserProfile {
            id: Uuid::new_v4(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            avatar: form.avatar.unwrap_or_default(),
            created_at: Utc::now(),
            friend_recommendations: Vec::new(),
        };
        let password_digest = self.digest(&form.password);

        tracing::info!(user_id = %profile.id, "registered new user");

        self.users.insert(
            key.clone(),
            StoredUser {
                profile: profile.clone(),
                password_digest,
            },
        );
        self.current = Some(key);
        Ok(profile)
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingField`] for blank input and
    /// [`SessionError::InvalidCredentials`] when no account matches.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, SessionError> {
        if email.trim().is_empty() {
            return Err(SessionError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(SessionError::MissingField("password"));
        }

        let key = normalize_email(email);
        let digest = self.digest(password);
        let user = self
            .users
            .get(&key)
            .filter(|u| u.password_digest == digest)
            .ok_or_else(|| {
                tracing::warn!("login failed: unknown email or wrong password");
                SessionError::InvalidCredentials
            })?;

        tracing::info!(user_id = %user.profile.id, "user logged in");
        let profile = user.profile.clone();
        self.current = Some(key);
        Ok(profile)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take().and_then(|key| self.users.get(&key)) {
            tracing::info!(user_id = %user.profile.id, "user logged out");
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current
            .as_ref()
            .and_then(|key| self.users.get(key))
            .map(|u| &u.profile)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Apply a partial profile edit to the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when nobody is logged in and
    /// [`SessionError::MissingField`] when the new name is blank.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<UserProfile, SessionError> {
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(SessionError::MissingField("name"));
        }

        let profile = self.current_profile_mut()?;
        if let Some(name) = update.name {
            profile.name = name.trim().to_string();
        }
        if let Some(avatar) = update.avatar {
            profile.avatar = avatar;
        }
        Ok(profile.clone())
    }

    /// Record a friend's suggestion on the logged-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when nobody is logged in.
    pub fn add_friend_recommendation(
        &mut self,
        recommendation: FriendRecommendation,
    ) -> Result<(), SessionError> {
        let profile = self.current_profile_mut()?;
        profile.add_friend_recommendation(recommendation);
        Ok(())
    }

    fn current_profile_mut(&mut self) -> Result<&mut UserProfile, SessionError> {
        let key = self.current.as_ref().ok_or(SessionError::NotAuthenticated)?;
        self.users
            .get_mut(key)
            .map(|u| &mut u.profile)
            .ok_or(SessionError::NotAuthenticated)
    }

    fn digest(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(b":");
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_register_form(form: &RegisterForm) -> Result<(), SessionError> {
    if form.name.trim().is_empty() {
        return Err(SessionError::MissingField("name"));
    }
    if form.email.trim().is_empty() {
        return Err(SessionError::MissingField("email"));
    }
    if form.password.is_empty() {
        return Err(SessionError::MissingField("password"));
    }
    if form.confirm_password.is_empty() {
        return Err(SessionError::MissingField("confirm_password"));
    }
    if !form.email.contains('@') {
        return Err(SessionError::InvalidEmail(form.email.trim().to_string()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SessionError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if form.password != form.confirm_password {
        return Err(SessionError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
