// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The bylines developers

//! HTTPS connector for the WordPress.com API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the WordPress.com REST API over HTTPS, essentially a specialized
//! HTTPS client for a single site's resources.

use crate::auth::Auth;
use crate::conf::SiteConfig;
use crate::http::{HTTPError, HTTPResult, HTTPService};
use log::debug;
use reqwest::{Client, header};

/// Query string parameters attached to a resource request.
pub type Query<'a> = [(&'a str, String)];

/// A service for retrieving a site's resources.
///
/// Using this trait, clients can implement different ways of connecting
/// to the WordPress.com API, such as an actual connector for production
/// code, and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request for the site's `resource` (such as `posts` or
    /// `stats/top-authors`) with the given `query` and returns the raw body.
    fn get_resource(
        &self,
        resource: &str,
        query: &Query<'_>,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the WordPress.com API directly.
#[derive(Debug)]
pub struct WordPressService {
    client: Client,
    auth: Auth,
    api_url: String,
    site_id: String,
}

impl HTTPService for WordPressService {}

impl WordPressService {
    /// Creates a new service for the site described by `config`, sending
    /// `auth` as a bearer token with every request.
    pub fn new(config: &SiteConfig, auth: Auth) -> HTTPResult<Self> {
        let client = Self::client()?;
        Ok(Self {
            client,
            auth,
            api_url: config.url().to_string(),
            site_id: config.id().to_string(),
        })
    }

    fn uri(&self, resource: &str) -> String {
        format!("{}/sites/{}/{resource}", self.api_url, self.site_id)
    }
}

impl Service for WordPressService {
    async fn get_resource(&self, resource: &str, query: &Query<'_>) -> HTTPResult<String> {
        let uri = self.uri(resource);
        debug!("GET {uri} {query:?}");

        let resp = self
            .client
            .get(&uri)
            .query(query)
            .bearer_auth(self.auth.api_key())
            .send()
            .await?;

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .ok_or(HTTPError::MissingContentType)?
                .to_str()?;
            if !content_type.starts_with("application/json") {
                Err(HTTPError::UnexpectedContentType(content_type.to_string()))
            } else {
                resp.text().await.map_err(HTTPError::Body)
            }
        }
    }
}
