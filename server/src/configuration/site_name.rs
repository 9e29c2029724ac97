use super::Configuration;

pub struct SiteName;

impl Configuration for SiteName {
    type Type = String;

    fn default() -> Option<Self::Type> {
        Some(String::from("Authors & Articles"))
    }

    fn key() -> &'static str {
        "site-name"
    }

    fn env_key() -> &'static str {
        "SITE_NAME"
    }

    fn parse(raw: &str) -> Option<Self::Type> {
        Some(raw.to_owned())
    }
}
