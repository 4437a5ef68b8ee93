// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The bylines developers

//! Records read from the WordPress.com posts and stats feeds.
//!
//! These structures mirror the JSON payloads closely enough to be
//! deserialized directly by serde. Fields the report does not need are
//! ignored.

use crate::text::convert_html_entities;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A WordPress post identifier, unique within a site.
pub type PostId = u64;

/// An error parsing a feed payload.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload is not the JSON we expected.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The stats payload does not cover any period.
    #[error("stats response contains no reporting period")]
    MissingPeriod,

    /// The stats payload's period is not a date.
    #[error("invalid reporting period '{period}': {source}")]
    InvalidPeriod {
        /// The period key as it appeared in the payload.
        period: String,

        /// Why it could not be parsed.
        source: chrono::ParseError,
    },
}

/// A published post, as listed by the posts feed.
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    #[serde(rename = "ID")]
    id: PostId,

    #[serde(default)]
    author: Byline,

    date: DateTime<FixedOffset>,

    #[serde(default)]
    title: String,
}

#[derive(Clone, Debug, Deserialize)]
struct Byline {
    #[serde(default = "Byline::unknown")]
    name: String,
}

impl Byline {
    fn unknown() -> String {
        String::from("Unknown")
    }
}

impl Default for Byline {
    fn default() -> Self {
        Self {
            name: Self::unknown(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PostsPage {
    #[serde(default)]
    posts: Vec<Post>,
}

impl Post {
    /// Parses one page of the posts feed into a list of posts.
    ///
    /// A page without a `posts` list is treated as empty.
    pub fn parse_page(data: &str) -> Result<Vec<Self>, Error> {
        let page: PostsPage = serde_json::from_str(data)?;
        Ok(page.posts)
    }

    /// The post's identifier.
    pub fn id(&self) -> PostId {
        self.id
    }

    /// Display name of the post's author, or "Unknown" if the feed did not
    /// include one.
    pub fn author(&self) -> &str {
        &self.author.name
    }

    /// When the post was published.
    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    /// The post's title, with HTML entities decoded.
    pub fn title(&self) -> String {
        convert_html_entities(&self.title)
    }
}

/// Monthly view statistics for every author on a site.
#[derive(Clone, Debug)]
pub struct TopAuthors {
    period: NaiveDate,
    authors: Vec<AuthorStats>,
}

#[derive(Debug, Deserialize)]
struct TopAuthorsResponse {
    days: BTreeMap<String, StatsDay>,
}

#[derive(Debug, Deserialize)]
struct StatsDay {
    #[serde(default)]
    authors: Vec<AuthorStats>,
}

impl TopAuthors {
    /// Parses a response from the `stats/top-authors` endpoint.
    ///
    /// The endpoint keys its results by the first day of each period it
    /// covers; a monthly request covers exactly one.
    pub fn parse(data: &str) -> Result<Self, Error> {
        let response: TopAuthorsResponse = serde_json::from_str(data)?;
        let (period, day) = response
            .days
            .into_iter()
            .next()
            .ok_or(Error::MissingPeriod)?;
        let period = NaiveDate::parse_from_str(&period, "%Y-%m-%d")
            .map_err(|source| Error::InvalidPeriod { period, source })?;
        Ok(Self {
            period,
            authors: day.authors,
        })
    }

    /// First day of the period the statistics cover.
    pub fn period(&self) -> NaiveDate {
        self.period
    }

    /// Per-author statistics, in the order the feed listed them.
    pub fn authors(&self) -> &[AuthorStats] {
        &self.authors
    }
}

/// Views an author received during the period, across all of their posts.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AuthorStats {
    name: String,
    views: u64,

    #[serde(default)]
    posts: Vec<PostViews>,
}

impl AuthorStats {
    /// Creates a stats record; mostly useful for tests and fixtures.
    pub fn new(name: impl Into<String>, views: u64, posts: Vec<PostViews>) -> Self {
        let name = name.into();
        Self { name, views, posts }
    }

    /// The author's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Views across every post by the author, new and old.
    pub fn views(&self) -> u64 {
        self.views
    }

    /// Views broken down by post.
    pub fn posts(&self) -> &[PostViews] {
        &self.posts
    }
}

/// Views a single post received during the period.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PostViews {
    id: PostId,
    views: u64,

    #[serde(default)]
    title: String,
}

impl PostViews {
    /// Creates a per-post record; mostly useful for tests and fixtures.
    pub fn new(id: PostId, views: u64, title: impl Into<String>) -> Self {
        let title = title.into();
        Self { id, views, title }
    }

    /// The post's identifier.
    pub fn id(&self) -> PostId {
        self.id
    }

    /// Number of views.
    pub fn views(&self) -> u64 {
        self.views
    }

    /// The post's title, with HTML entities decoded.
    pub fn title(&self) -> String {
        convert_html_entities(&self.title)
    }
}
