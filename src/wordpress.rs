//! WordPress.com API clients and services for communicating with a site's
//! stats and posts feeds over HTTP.

pub mod client;
pub mod service;
pub mod thing;

pub use client::Site;
