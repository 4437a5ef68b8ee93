// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The bylines developers

//! Ranks authors and posts for a month.
//!
//! The [`Aggregator`] joins the posts published during a month with the
//! site's per-author view statistics. Posts are matched to stats by author
//! name, and each author's per-post view records are narrowed down to the
//! month's posts by post ID.

use crate::wordpress::thing::{AuthorStats, Post, PostId};
use counter::Counter;
use itertools::Itertools;
use log::trace;
use std::collections::HashSet;

/// Number of posts published during the month, by author name.
pub type PostCounts = Counter<String>;

/// IDs of the posts published during the month.
pub type MonthPostIds = HashSet<PostId>;

/// Length of the top posts list.
pub const TOP_POSTS: usize = 3;

/// Derived performance figures for one author.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorMetric {
    /// The author's display name.
    pub name: String,

    /// Posts the author published during the month; always at least 1.
    pub num_posts: usize,

    /// Views on the author's posts from this month.
    pub month_views: u64,

    /// `month_views` divided by `num_posts`.
    pub avg_new: f64,

    /// Views on all of the author's posts, new and old.
    pub all_views: u64,

    /// `all_views` divided by `num_posts`.
    pub evergreen: f64,
}

/// One of the month's most-viewed posts.
#[derive(Clone, Debug, PartialEq)]
pub struct TopPost {
    pub title: String,
    pub views: u64,
    pub author: String,
}

/// The results of aggregating a month of data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rankings {
    /// Authors by evergreen score, highest first.
    pub authors: Vec<AuthorMetric>,

    /// At most [`TOP_POSTS`] posts from the month by views, highest first.
    pub top_posts: Vec<TopPost>,
}

/// Joins posts and author stats into rankings.
#[derive(Debug)]
pub struct Aggregator {
    excluded_authors: HashSet<String>,
}

impl Aggregator {
    /// Creates an aggregator that leaves `excluded_authors` out of every
    /// ranking.
    pub fn new<I, S>(excluded_authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let excluded_authors = excluded_authors.into_iter().map(Into::into).collect();
        Self { excluded_authors }
    }

    /// Ranks authors and posts.
    ///
    /// `posts` must be every post published during the month. `authors` is
    /// the stats feed, whose per-post records may include posts from any
    /// month.
    ///
    /// Authors who published nothing during the month are left out, as are
    /// excluded authors. Ties keep the order of the stats feed.
    pub fn aggregate(&self, posts: &[Post], authors: &[AuthorStats]) -> Rankings {
        let counts = Self::count_posts(posts);
        let month_ids = Self::month_post_ids(posts);

        let ranked = authors
            .iter()
            .filter(|author| !self.is_excluded(author))
            .filter_map(|author| Self::measure(author, &counts, &month_ids))
            .sorted_by(|lhs, rhs| rhs.evergreen.total_cmp(&lhs.evergreen))
            .collect();

        let top_posts = authors
            .iter()
            .filter(|author| !self.is_excluded(author))
            .flat_map(|author| Self::month_posts(author, &month_ids))
            .sorted_by(|lhs, rhs| rhs.views.cmp(&lhs.views))
            .take(TOP_POSTS)
            .collect();

        Rankings {
            authors: ranked,
            top_posts,
        }
    }

    fn is_excluded(&self, author: &AuthorStats) -> bool {
        self.excluded_authors.contains(author.name())
    }

    fn count_posts(posts: &[Post]) -> PostCounts {
        posts.iter().map(|post| post.author().to_string()).collect()
    }

    fn month_post_ids(posts: &[Post]) -> MonthPostIds {
        posts.iter().map(Post::id).collect()
    }

    fn month_posts<'a>(
        author: &'a AuthorStats,
        month_ids: &'a MonthPostIds,
    ) -> impl Iterator<Item = TopPost> + 'a {
        author
            .posts()
            .iter()
            .filter(move |post| month_ids.contains(&post.id()))
            .map(move |post| TopPost {
                title: post.title(),
                views: post.views(),
                author: author.name().to_string(),
            })
    }

    fn measure(
        author: &AuthorStats,
        counts: &PostCounts,
        month_ids: &MonthPostIds,
    ) -> Option<AuthorMetric> {
        let num_posts = counts.get(author.name()).copied().unwrap_or(0);
        if num_posts == 0 {
            trace!("skipping {}: no posts this month", author.name());
            return None;
        }

        let month_views = author
            .posts()
            .iter()
            .filter(|post| month_ids.contains(&post.id()))
            .map(|post| post.views())
            .sum();
        let all_views = author.views();

        Some(AuthorMetric {
            name: author.name().to_string(),
            num_posts,
            month_views,
            avg_new: month_views as f64 / num_posts as f64,
            all_views,
            evergreen: all_views as f64 / num_posts as f64,
        })
    }
}
