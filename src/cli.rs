//! Drives the command-line program.

use crate::auth::{Auth, AuthError};
use crate::clock::Clock;
use crate::conf::{self, SiteConfig};
use crate::month::ReportMonth;
use crate::report::{Aggregator, Rankings};
use crate::view::{PerformanceReport, ViewOptions, Viewable};
use crate::wordpress::client::{self, Site};
use crate::wordpress::service::Service;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::warn;
use std::process;
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Ranks a WordPress.com site's authors by monthly performance", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Month to report on, as YYYY-MM (defaults to the current month)
    month: Option<ReportMonth>,

    /// Do not explain the report's columns
    #[arg(long, default_value_t = false)]
    no_legend: bool,

    /// WordPress.com site ID
    #[arg(long, env = "WP_SITE_ID", default_value = conf::DEFAULT_SITE_ID)]
    site: String,

    /// Root URL of the WordPress.com REST API
    #[arg(long, env = "WP_API_URL", default_value = conf::DEFAULT_API_URL, hide = true)]
    api_url: String,
}

impl Config {
    pub fn verbosity(&self) -> &Verbosity {
        &self.verbosity
    }

    /// The month requested on the command line, if any.
    pub fn month(&self) -> Option<ReportMonth> {
        self.month
    }

    /// The site to report on.
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig::default()
            .site_id(&self.site)
            .api_url(&self.api_url)
    }

    fn view_options(&self) -> ViewOptions {
        ViewOptions::default().legend(!self.no_legend)
    }
}

/// A fatal error that ends the program.
#[derive(Debug, Error)]
pub enum Error {
    /// The API token is missing or unreadable.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Data could not be retrieved from the site.
    #[error(transparent)]
    Client(#[from] client::Error),

    /// The clock reports a date with no representable month.
    #[error("current date is out of range")]
    MonthOutOfRange,
}

/// Runs the command-line program using the options in `config`, taking
/// "now" from `clock`.
///
/// The month and the API token are both checked before anything is fetched.
pub async fn run<C: Clock>(config: Config, clock: &C) -> Result<(), Error> {
    let month = match config.month() {
        Some(month) => month,
        None => ReportMonth::current(clock).ok_or(Error::MonthOutOfRange)?,
    };

    let auth = Auth::from_env(conf::TOKEN_ENV)?;
    let site_config = config.site_config();
    let site = Site::new(&site_config, auth)?;

    let rankings = Runner::new(&site, &site_config, month).rankings().await?;
    let report = PerformanceReport::new(site_config.name(), &month, &rankings);
    println!("{}", report.view(&config.view_options()));
    Ok(())
}

/// Collects a month of data from a site and ranks it.
#[derive(Debug)]
pub struct Runner<'a, S: Service> {
    site: &'a Site<S>,
    config: &'a SiteConfig,
    month: ReportMonth,
}

impl<'a, S: Service> Runner<'a, S> {
    /// Creates a runner for `month` on `site`.
    pub fn new(site: &'a Site<S>, config: &'a SiteConfig, month: ReportMonth) -> Self {
        Self {
            site,
            config,
            month,
        }
    }

    /// Fetches stats and then every post for the month, reporting progress
    /// on stdout, and ranks the results.
    ///
    /// All posts are collected before anything is aggregated.
    pub async fn rankings(&self) -> Result<Rankings, client::Error> {
        println!("Fetching stats for {}...", self.month.label());
        let stats = self.site.top_authors(self.month.first_day()).await?;
        if !self.month.contains(stats.period()) {
            warn!(
                "stats cover the period starting {}, not {}",
                stats.period(),
                self.month
            );
        }

        println!("Fetching posts...");
        let posts = self.site.posts(&self.month).await?;
        println!("Found {} posts\n", posts.len());

        let aggregator = Aggregator::new(self.config.excluded_authors().iter().cloned());
        Ok(aggregator.aggregate(&posts, stats.authors()))
    }
}
