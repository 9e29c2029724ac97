use dataset::pagination::DEFAULT_PAGE_SIZE;

use super::Configuration;

pub struct PageSize;

impl Configuration for PageSize {
    type Type = usize;

    fn default() -> Option<Self::Type> {
        Some(DEFAULT_PAGE_SIZE)
    }

    fn key() -> &'static str {
        "page-size"
    }

    fn env_key() -> &'static str {
        "PAGE_SIZE"
    }

    fn parse(raw: &str) -> Option<Self::Type> {
        raw.parse().ok().filter(|size| *size >= 1)
    }
}
