// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The bylines developers

//! Clients for reading data from a WordPress.com site.

use crate::auth::Auth;
use crate::conf::SiteConfig;
use crate::http;
use crate::month::ReportMonth;
use crate::wordpress::service::{Service, WordPressService};
use crate::wordpress::thing::{self, Post, TopAuthors};
use chrono::NaiveDate;
use log::{debug, info, warn};
use thiserror::Error;

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("{0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}

/// Reads stats and posts for a single site.
#[derive(Debug)]
pub struct Site<S: Service = WordPressService> {
    service: S,
    page_size: usize,
}

impl Site {
    /// Creates a client for the site described by `config`, authenticating
    /// with `auth`.
    pub fn new(config: &SiteConfig, auth: Auth) -> Result<Self, Error> {
        let service = WordPressService::new(config, auth)?;
        Ok(Self::with_service(service, config.posts_per_page()))
    }
}

impl<S: Service> Site<S> {
    /// Creates a client that retrieves data through `service`, requesting
    /// `page_size` posts at a time.
    pub fn with_service(service: S, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self { service, page_size }
    }

    /// Retrieves per-author view statistics for the month containing `date`.
    pub async fn top_authors(&self, date: NaiveDate) -> Result<TopAuthors, Error> {
        let query = [
            ("period", String::from("month")),
            ("date", date.format("%Y-%m-%d").to_string()),
        ];
        let data = self
            .service
            .get_resource("stats/top-authors", &query)
            .await?;
        let stats = TopAuthors::parse(&data)?;
        info!(
            "retrieved stats for {} authors for the period starting {}",
            stats.authors().len(),
            stats.period()
        );
        Ok(stats)
    }

    /// Pages through the posts published during `month`.
    ///
    /// Nothing is fetched until [`PostPages::next_page()`] is called.
    pub fn post_pages(&self, month: &ReportMonth) -> PostPages<'_, S> {
        PostPages::new(self, month)
    }

    /// Retrieves every post published during `month`.
    ///
    /// Stops at the first page that cannot be retrieved.
    pub async fn posts(&self, month: &ReportMonth) -> Result<Vec<Post>, Error> {
        let mut posts = Vec::new();
        let mut pages = self.post_pages(month);
        while let Some(page) = pages.next_page().await {
            posts.extend(page?);
        }
        info!("retrieved {} posts for {month}", posts.len());
        for post in outside_month(&posts, *month) {
            warn!(
                "post {} \"{}\" is dated {}, outside {month}",
                post.id(),
                post.title(),
                post.date()
            );
        }
        Ok(posts)
    }
}

/// Posts whose publication date, in the site's own time zone, does not fall
/// inside `month`.
fn outside_month(posts: &[Post], month: ReportMonth) -> impl Iterator<Item = &Post> {
    posts
        .iter()
        .filter(move |post| !month.contains(post.date().date_naive()))
}

/// A lazy, finite sequence of pages from the posts feed.
///
/// The sequence ends after an empty page or a page holding fewer posts than
/// were requested. If a page cannot be retrieved the error is returned and
/// the position is kept, so calling [`PostPages::next_page()`] again retries
/// the same page.
#[derive(Debug)]
pub struct PostPages<'a, S: Service> {
    site: &'a Site<S>,
    after: String,
    before: String,
    offset: usize,
    done: bool,
}

impl<'a, S: Service> PostPages<'a, S> {
    fn new(site: &'a Site<S>, month: &ReportMonth) -> Self {
        Self {
            site,
            after: month.after(),
            before: month.before(),
            offset: 0,
            done: false,
        }
    }

    /// Offset of the next page to be retrieved.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once the last page has been retrieved.
    pub fn is_done(&self) -> bool {
        self.done
    }

    fn query(&self) -> [(&'static str, String); 5] {
        [
            ("number", self.site.page_size.to_string()),
            ("offset", self.offset.to_string()),
            ("after", self.after.clone()),
            ("before", self.before.clone()),
            ("fields", String::from("ID,author,date,title")),
        ]
    }

    /// Retrieves the next page of posts, or `None` once the feed is
    /// exhausted.
    pub async fn next_page(&mut self) -> Option<Result<Vec<Post>, Error>> {
        if self.done {
            return None;
        }

        debug!("retrieving posts at offset {}", self.offset);
        let page = match self.fetch().await {
            Ok(page) => page,
            Err(err) => return Some(Err(err)),
        };

        if page.is_empty() {
            self.done = true;
            return None;
        }

        self.offset += self.site.page_size;
        if page.len() < self.site.page_size {
            self.done = true;
        }
        Some(Ok(page))
    }

    async fn fetch(&self) -> Result<Vec<Post>, Error> {
        let data = self
            .site
            .service
            .get_resource("posts", &self.query())
            .await?;
        Ok(Post::parse_page(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HTTPError, HTTPResult};
    use crate::test_utils::{TestService, november};
    use crate::wordpress::service::Query;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn it_retrieves_top_authors() {
        let site = Site::with_service(TestService::new("november"), 100);
        let stats = site.top_authors(november().first_day()).await.unwrap();
        assert_eq!(stats.authors().len(), 6);
        assert_eq!(stats.period(), november().first_day());
    }

    #[tokio::test]
    async fn it_retrieves_a_single_page_of_posts() {
        let site = Site::with_service(TestService::new("november"), 100);
        let posts = site.posts(&november()).await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id()).collect();
        assert_eq!(ids, [101, 102, 103, 104, 105, 106]);
    }

    #[test]
    fn it_finds_posts_dated_outside_the_month() {
        let page = r#"{"posts": [
            {"ID": 1, "author": {"name": "Alice"}, "date": "2025-10-31T23:30:00-08:00", "title": "Late"},
            {"ID": 2, "author": {"name": "Alice"}, "date": "2025-11-01T00:00:00-08:00", "title": "On time"},
            {"ID": 3, "author": {"name": "Bob"}, "date": "2025-11-30T23:59:59-08:00", "title": "Just made it"},
            {"ID": 4, "author": {"name": "Bob"}, "date": "2025-12-01T00:00:00-08:00", "title": "Early"}
        ]}"#;
        let posts = Post::parse_page(page).unwrap();
        let ids: Vec<_> = outside_month(&posts, november()).map(|p| p.id()).collect();
        assert_eq!(ids, [1, 4]);
    }

    #[tokio::test]
    async fn it_finds_no_stray_posts_in_a_month_of_posts() {
        let site = Site::with_service(TestService::new("november"), 100);
        let posts = site.posts(&november()).await.unwrap();
        assert_eq!(outside_month(&posts, november()).count(), 0);
    }

    #[tokio::test]
    async fn it_stops_at_a_short_page() {
        let site = Site::with_service(TestService::new("paged"), 2);
        let posts = site.posts(&november()).await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id()).collect();
        assert_eq!(ids, [201, 202, 203, 204, 205]);
    }

    #[tokio::test]
    async fn it_stops_at_an_empty_page() {
        let site = Site::with_service(TestService::new("exact"), 2);
        let mut pages = site.post_pages(&november());

        assert_eq!(pages.next_page().await.unwrap().unwrap().len(), 2);
        assert_eq!(pages.offset(), 2);
        assert!(!pages.is_done());

        assert!(pages.next_page().await.is_none());
        assert!(pages.is_done());
        assert!(pages.next_page().await.is_none());
    }

    #[tokio::test]
    async fn it_fetches_nothing_until_asked() {
        let site = Site::with_service(TestService::new("missing"), 100);
        let pages = site.post_pages(&november());
        assert_eq!(pages.offset(), 0);
        assert!(!pages.is_done());
    }

    #[tokio::test]
    async fn it_fails_when_a_page_is_unavailable() {
        let site = Site::with_service(TestService::new("missing"), 100);
        let err = site.posts(&november()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Service(HTTPError::Http(StatusCode::NOT_FOUND))
        ));
    }

    #[tokio::test]
    async fn it_fails_when_stats_are_unavailable() {
        let site = Site::with_service(TestService::new("missing"), 100);
        let err = site.top_authors(november().first_day()).await.unwrap_err();
        assert_eq!(err.to_string(), "API Error: 404 Not Found");
    }

    #[tokio::test]
    async fn it_fails_when_a_page_cannot_be_parsed() {
        let site = Site::with_service(TestService::new("garbled"), 100);
        let err = site.posts(&november()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(thing::Error::Json(_))));
    }

    /// Fails the first request, then serves pages from the "paged" fixtures.
    struct FlakyService {
        calls: AtomicUsize,
        inner: TestService<'static>,
    }

    impl Service for FlakyService {
        async fn get_resource(&self, resource: &str, query: &Query<'_>) -> HTTPResult<String> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 1 {
                Err(HTTPError::Http(StatusCode::BAD_GATEWAY))
            } else {
                self.inner.get_resource(resource, query).await
            }
        }
    }

    #[tokio::test]
    async fn it_retries_the_same_page_after_a_failure() {
        let service = FlakyService {
            calls: AtomicUsize::new(0),
            inner: TestService::new("paged"),
        };
        let site = Site::with_service(service, 2);
        let mut pages = site.post_pages(&november());

        let first = pages.next_page().await.unwrap().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(pages.offset(), 2);

        assert!(pages.next_page().await.unwrap().is_err());
        assert_eq!(pages.offset(), 2);
        assert!(!pages.is_done());

        let second = pages.next_page().await.unwrap().unwrap();
        let ids: Vec<_> = second.iter().map(|p| p.id()).collect();
        assert_eq!(ids, [203, 204]);
        assert_eq!(pages.offset(), 4);
    }
}
