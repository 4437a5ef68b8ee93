// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The bylines developers

//! Authentication for the WordPress.com API.

use std::env;
use thiserror::Error;

/// Holds the bearer token used to authenticate API requests.
#[derive(Debug)]
pub struct Auth {
    api_key: String,
}

impl Auth {
    /// Creates a new `Auth` structure using the given token.
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self { api_key }
    }

    /// Retrieves a token from the environment.
    ///
    /// Returns an error if the token cannot be retrieved from the
    /// environment. An empty token counts as unset.
    pub fn from_env(envvar: &str) -> AuthResult {
        let api_key = env::var(envvar)
            .and_then(|key| {
                if key.is_empty() {
                    Err(env::VarError::NotPresent)
                } else {
                    Ok(key)
                }
            })
            .map_err(|err| AuthError::EnvError {
                envvar: envvar.to_string(),
                source: err,
            })?;
        Ok(Self { api_key })
    }

    /// The actual token.
    ///
    /// # Examples
    ///
    /// ```
    /// use bylines::auth::Auth;
    /// let auth = Auth::new("ThisIsMyToken");
    /// assert_eq!(auth.api_key(), "ThisIsMyToken");
    /// ```
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Standard result type for [`Auth`] creation.
pub type AuthResult = Result<Auth, AuthError>;

/// Indicates an error when reading an authentication token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An error occurred while retrieving a token from the environment.
    #[error(
        "Error: {envvar} environment variable not set\nSet it with: export {envvar}='your_token_here'"
    )]
    EnvError {
        /// Name of the environment variable that was read.
        envvar: String,

        /// Why the variable could not be read.
        source: env::VarError,
    },
}
