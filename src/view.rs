//! Draws viewable objects into a terminal window.

use crate::month::ReportMonth;
use crate::report::{AuthorMetric, Rankings, TopPost};
use crate::text::{separate_thousands, separate_thousands_f64, truncate};
use indoc::indoc;

/// Longest post title shown in the top posts list.
pub const TITLE_WIDTH: usize = 50;

const LEGEND: &str = indoc! {"
    Posts: Articles written this month
    New Views: Views on posts written this month
    Avg/New: Average views per new post
    All Views: Total views across all posts (new + evergreen)
    Evergreen: All views divided by new posts (higher = stronger back catalog)"
};

/// View renderer options.
#[derive(Debug)]
pub struct ViewOptions {
    legend: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { legend: true }
    }
}

impl ViewOptions {
    /// Sets whether the legend explaining each column is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use bylines::view::ViewOptions;
    /// let opts = ViewOptions::default().legend(false);
    /// ```
    pub fn legend(self, legend: bool) -> Self {
        Self { legend }
    }

    /// True if the legend is shown.
    pub fn shows_legend(&self) -> bool {
        self.legend
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self, opts: &ViewOptions) -> String;
}

/// A month's rankings for a named site, ready to be printed.
#[derive(Debug)]
pub struct PerformanceReport<'a> {
    site_name: &'a str,
    month: &'a ReportMonth,
    rankings: &'a Rankings,
}

impl<'a> PerformanceReport<'a> {
    /// Wraps `rankings` for `month` on the site called `site_name`.
    pub fn new(site_name: &'a str, month: &'a ReportMonth, rankings: &'a Rankings) -> Self {
        Self {
            site_name,
            month,
            rankings,
        }
    }

    fn heading(&self) -> String {
        let rule = "=".repeat(70);
        format!(
            "{rule}\n{} AUTHOR PERFORMANCE REPORT - {}\n{rule}",
            self.site_name.to_uppercase(),
            self.month.label()
        )
    }

    fn table(&self) -> String {
        let header = format!(
            "{:<20} {:>6} {:>12} {:>10} {:>12} {:>12}",
            "Author", "Posts", "New Views", "Avg/New", "All Views", "Evergreen"
        );
        let mut lines = vec![header, "-".repeat(80)];
        lines.extend(self.rankings.authors.iter().map(|author| author.view_row()));
        lines.join("\n")
    }

    fn top_posts(&self) -> Option<String> {
        if self.rankings.top_posts.is_empty() {
            return None;
        }
        let mut lines = vec![String::from("TOP 3 POSTS THIS MONTH"), "-".repeat(80)];
        lines.extend(
            self.rankings
                .top_posts
                .iter()
                .enumerate()
                .map(|(i, post)| post.view_line(i + 1)),
        );
        Some(lines.join("\n"))
    }
}

impl Viewable for PerformanceReport<'_> {
    fn view(&self, opts: &ViewOptions) -> String {
        let mut s = format!("{}\n\n{}\n\n{}", self.heading(), self.table(), "=".repeat(80));
        if opts.legend {
            s += "\n\n";
            s += LEGEND;
        }
        if let Some(top_posts) = self.top_posts() {
            s += "\n\n";
            s += &top_posts;
        }
        s
    }
}

impl AuthorMetric {
    fn view_row(&self) -> String {
        format!(
            "{:<20} {:>6} {:>12} {:>10} {:>12} {:>12}",
            self.name,
            self.num_posts,
            separate_thousands(self.month_views),
            separate_thousands_f64(self.avg_new),
            separate_thousands(self.all_views),
            separate_thousands_f64(self.evergreen),
        )
    }
}

impl TopPost {
    fn view_line(&self, rank: usize) -> String {
        format!(
            "{rank}. {} views - {} ({})",
            separate_thousands(self.views),
            truncate(&self.title, TITLE_WIDTH),
            self.author
        )
    }
}
