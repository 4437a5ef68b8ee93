// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The bylines developers

//! bylines is a command-line tool that produces a monthly author performance
//! report for a WordPress.com site. It combines the site's per-author view
//! statistics with the list of posts published in the month, then prints a
//! ranked table of authors and the month's three most-viewed posts.
//!
//! Authors are ranked by their _evergreen score_: every view the author's
//! work received during the month, old posts included, divided by the number
//! of posts they published that month. A high score means a strong back
//! catalog relative to new output.
//!
//! # Examples
//!
//! Report on the current month:
//!
//! ```bash
//! bylines
//! ```
//!
//! Report on November 2025:
//!
//! ```bash
//! bylines 2025-11
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! bylines --help
//! ```
//!
//! # WordPress.com API Setup
//!
//! bylines reads from the [WordPress.com REST API], which requires an OAuth2
//! bearer token with access to the site's stats. Store the token in your
//! shell's `$WP_ACCESS_TOKEN` environment variable:
//!
//! ```bash
//! $ export WP_ACCESS_TOKEN='your_token_here'
//! ```
//!
//! By default bylines reports on boingboing.net. Set `$WP_SITE_ID` (or pass
//! `--site`) to report on a different site.
//!
//! # License
//!
//! bylines is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [WordPress.com REST API]: https://developer.wordpress.com/docs/api/

pub mod auth;
pub mod cli;
pub mod clock;
pub mod conf;
pub mod http;
pub mod month;
pub mod report;
pub mod text;
pub mod view;
pub mod wordpress;

#[cfg(test)]
mod test_utils;
