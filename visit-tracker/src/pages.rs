//! HTML pages rendered with askama. Templates live in `templates/`.

use crate::config::Config;
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage<'a> {
    pub site_title: &'a str,
    pub owner_name: &'a str,
    pub owner_tagline: &'a str,
    pub quote: &'a str,
    pub count: i64,
    pub enable_reset: bool,
}

impl<'a> HomePage<'a> {
    pub fn new(config: &'a Config, quote: &'a str, count: i64) -> Self {
        Self {
            site_title: &config.site_title,
            owner_name: &config.owner_name,
            owner_tagline: &config.owner_tagline,
            quote,
            count,
            enable_reset: config.enable_reset,
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage<'a> {
    pub site_title: &'a str,
    pub owner_name: &'a str,
    pub owner_tagline: &'a str,
    pub owner_bio: &'a str,
    pub github_url: &'a str,
    pub linkedin_url: &'a str,
}

impl<'a> AboutPage<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            site_title: &config.site_title,
            owner_name: &config.owner_name,
            owner_tagline: &config.owner_tagline,
            owner_bio: &config.owner_bio,
            github_url: &config.github_url,
            linkedin_url: &config.linkedin_url,
        }
    }
}
