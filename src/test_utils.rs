use crate::clock::{Clock, DateTime, Utc};
use crate::http::{HTTPError, HTTPResult};
use crate::month::ReportMonth;
use crate::wordpress::service::{Query, Service};
use reqwest::StatusCode;
use std::fs;

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

pub fn load_output(filename: &str) -> String {
    let filename = format!("tests/output/{filename}.out");
    String::from(
        fs::read_to_string(&filename)
            .unwrap_or_else(|_| panic!("could not load test data from {filename}"))
            .trim_end(),
    )
}

pub fn november() -> ReportMonth {
    ReportMonth::new(2025, 11).unwrap()
}

/// Serves fixtures from `tests/data`, named after the resource, the
/// service's suffix, and (for paged resources) the requested offset, e.g.
/// `posts_november_0.json`. Missing fixtures are reported as a 404.
pub struct TestService<'a> {
    suffix: &'a str,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self { suffix }
    }
}

impl Service for TestService<'_> {
    async fn get_resource(&self, resource: &str, query: &Query<'_>) -> HTTPResult<String> {
        let page = query
            .iter()
            .find(|(name, _)| *name == "offset")
            .map(|(_, offset)| format!("_{offset}"))
            .unwrap_or_default();
        let filename = format!(
            "tests/data/{}_{}{page}.json",
            resource.replace('/', "_"),
            self.suffix
        );
        fs::read_to_string(&filename).map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))
    }
}

pub struct FrozenClock {
    datetime: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        FrozenClock { datetime }
    }
}

impl Default for FrozenClock {
    fn default() -> Self {
        let datetime = DateTime::parse_from_rfc3339("2025-11-15T12:00:00Z")
            .expect("invalid date supplied")
            .with_timezone(&Utc);
        Self::new(datetime)
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.datetime
    }
}
