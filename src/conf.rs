//! Site configuration.
//!
//! Everything that ties a report to one particular site lives in a
//! [`SiteConfig`], which is built once per run and handed to the
//! [`Site`](crate::wordpress::Site) that fetches data and the
//! [`Aggregator`](crate::report::Aggregator) that ranks it.

/// Environment variable holding the WordPress.com bearer token.
pub const TOKEN_ENV: &str = "WP_ACCESS_TOKEN";

/// Root of the WordPress.com REST API.
pub const DEFAULT_API_URL: &str = "https://public-api.wordpress.com/rest/v1.1";

/// WordPress.com site ID of boingboing.net.
pub const DEFAULT_SITE_ID: &str = "87954168";

/// Display name of the default site.
pub const DEFAULT_SITE_NAME: &str = "Boing Boing";

/// Bylines shared by the whole site rather than a single writer.
pub const DEFAULT_EXCLUDED_AUTHORS: [&str; 2] = ["Boing Boing", "Boing Boing's Shop"];

/// Number of posts requested per page of the posts feed.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Identifies a site and how it should be reported on.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    name: String,
    site_id: String,
    api_url: String,
    excluded_authors: Vec<String>,
    page_size: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.to_string(),
            site_id: DEFAULT_SITE_ID.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            excluded_authors: DEFAULT_EXCLUDED_AUTHORS.map(String::from).to_vec(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SiteConfig {
    /// Uses the given WordPress.com site ID.
    pub fn site_id(self, site_id: impl Into<String>) -> Self {
        let site_id = site_id.into();
        Self { site_id, ..self }
    }

    /// Uses the given API root, such as a local mock server.
    ///
    /// A trailing slash is dropped.
    pub fn api_url(self, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { api_url, ..self }
    }

    /// Requests `page_size` posts per page of the posts feed.
    pub fn page_size(self, page_size: usize) -> Self {
        Self { page_size, ..self }
    }

    /// Name of the site, used in the report heading.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The WordPress.com site ID.
    pub fn id(&self) -> &str {
        &self.site_id
    }

    /// Root URL of the API.
    pub fn url(&self) -> &str {
        &self.api_url
    }

    /// Authors that never appear in a report.
    pub fn excluded_authors(&self) -> &[String] {
        &self.excluded_authors
    }

    /// Number of posts requested per page.
    pub fn posts_per_page(&self) -> usize {
        self.page_size
    }
}
