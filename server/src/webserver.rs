use std::{collections::HashMap, env, marker::PhantomData, path::PathBuf};

use chrono::DateTime;
use rocket::{
    fairing::AdHoc,
    figment::Figment,
    fs::FileServer,
    request::{FromRequest, Outcome},
    Build, Request, Rocket,
};
use rocket_dyn_templates::{tera, tera::Value, Template};
use serde::{Deserialize, Serialize};

use dataset::{loader, LoadState};

use crate::configuration::{Configuration, ConfigurationManager, DatasetPath, SiteName};

mod articles;

pub async fn main() -> anyhow::Result<()> {
    rocket_server().launch().await?;
    Ok(())
}

fn root_path() -> PathBuf {
    if let Ok(value) = env::var("CARGO_MANIFEST_DIR") {
        let path = PathBuf::from(value);
        path.parent().unwrap().to_path_buf()
    } else {
        std::env::current_dir().unwrap()
    }
}

fn figment() -> Figment {
    rocket::Config::figment().merge((
        "template_dir",
        root_path().join("templates").display().to_string(),
    ))
}

fn base_server(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Template::custom(|engines| {
            engines.tera.register_filter("short_date", ShortDate);
            engines
                .tera
                .register_function("site_name", TeraConfiguration::<SiteName>::default());
        }))
        .mount("/", routes![articles::home])
        .mount("/static", FileServer::from(root_path().join("static")))
}

fn rocket_server() -> Rocket<Build> {
    base_server(figment()).attach(dataset_loader())
}

/// One-shot dataset load, run during ignite so it is visible in the operator
/// log. A failed load still launches the server; handlers render the empty
/// state from `LoadState::Failed`.
fn dataset_loader() -> AdHoc {
    AdHoc::on_ignite("Dataset", |rocket| async {
        let path = root_path().join(DatasetPath::get().unwrap());
        let state = match loader::load_from_path(&path).await {
            Ok(dataset) => {
                log::info!(
                    "loaded {} articles by {} authors from {}",
                    dataset.articles.len(),
                    dataset.authors.len(),
                    path.display()
                );
                LoadState::Loaded(dataset)
            }
            Err(error) => {
                log::error!("error fetching dataset from {}: {}", path.display(), error);
                LoadState::Failed
            }
        };

        rocket.manage(state)
    })
}

pub struct TeraConfiguration<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for TeraConfiguration<T> {
    fn default() -> Self {
        Self {
            _phantom: Default::default(),
        }
    }
}

impl<T> tera::Function for TeraConfiguration<T>
where
    T: Configuration + Send + Sync,
    T::Type: ToString,
{
    fn call(&self, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        let manager = ConfigurationManager::shared();
        let value = manager
            .get::<T>()
            .ok_or_else(|| tera::Error::msg("no value found"))?;
        Ok(Value::String(value.to_string()))
    }
}

/// Formats an RFC 3339 timestamp as an abbreviated month plus numeric day,
/// e.g. "Jan 13".
struct ShortDate;

impl tera::Filter for ShortDate {
    fn filter(&self, timestamp: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
        let raw = timestamp.as_str().ok_or_else(|| {
            tera::Error::msg("Value passed to short_date filter needs to be a string")
        })?;
        let timestamp = DateTime::parse_from_rfc3339(raw).map_err(|_| {
            tera::Error::msg("Value passed to short_date filter needs to be an RFC 3339 timestamp")
        })?;
        Ok(Value::String(timestamp.format("%b %-d").to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestData {
    pub current_path: String,
    pub current_query: Option<String>,
    pub current_path_and_query: String,
}

#[derive(Debug)]
pub struct FullPathAndQuery {
    pub path: String,
    pub query: Option<String>,
}

impl RequestData {
    pub fn new(path: FullPathAndQuery) -> Self {
        let mut current_path_and_query = path.path.clone();
        if let Some(query) = &path.query {
            current_path_and_query += "?";
            current_path_and_query += query;
        }

        Self {
            current_path: path.path,
            current_query: path.query,
            current_path_and_query,
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for FullPathAndQuery {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let path = request.uri().path().as_str().to_owned();
        let query = request.uri().query().map(|query| query.as_str().to_owned());

        Outcome::Success(FullPathAndQuery { path, query })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rocket::{http::Status, local::blocking::Client};
    use rocket_dyn_templates::tera::{Filter, Value};

    use chrono::{TimeZone, Utc};
    use dataset::{Article, Author, Dataset, LoadState};

    use super::ShortDate;

    fn fixture() -> Dataset {
        let authors = vec![
            Author {
                id: 1,
                name: String::from("Ada"),
            },
            Author {
                id: 2,
                name: String::from("Grace"),
            },
            Author {
                id: 3,
                name: String::from("Edsger"),
            },
        ];
        let articles = (1..=5)
            .map(|id| Article {
                id,
                author_id: (id - 1) % 3 + 1,
                title: format!("Article {}", id),
                body: format!("Body of article {}", id),
                image_url: format!("https://example.com/{}.jpg", id),
                created_at: Utc.with_ymd_and_hms(2024, 1, 13, 9, 30, 0).unwrap(),
            })
            .collect();
        Dataset { authors, articles }
    }

    fn client(state: LoadState) -> Client {
        Client::tracked(super::base_server(super::figment()).manage(state)).unwrap()
    }

    #[test]
    fn renders_the_first_page() {
        let client = client(LoadState::Loaded(fixture()));
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body = response.into_string().unwrap();
        assert!(body.contains("authors-articles"));
        assert!(body.contains("Article 1"));
        assert!(body.contains("Ada"));
        assert!(body.contains("Jan 13"));
        assert!(!body.contains("Article 2"));
    }

    #[test]
    fn out_of_range_page_clamps_to_the_last() {
        let client = client(LoadState::Loaded(fixture()));
        let body = client
            .get("/?page=99")
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains("Article 5"));
        assert!(!body.contains("Article 4"));
    }

    #[test]
    fn failed_load_renders_the_empty_state() {
        let client = client(LoadState::Failed);
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body = response.into_string().unwrap();
        assert!(!body.contains("card-img-overlay"));
    }

    #[test]
    fn short_date_formats_month_and_day() {
        let formatted = ShortDate
            .filter(
                &Value::String(String::from("2024-01-13T09:30:00Z")),
                &HashMap::new(),
            )
            .unwrap();
        assert_eq!(formatted, Value::String(String::from("Jan 13")));
    }

    #[test]
    fn short_date_rejects_non_timestamps() {
        assert!(ShortDate
            .filter(&Value::String(String::from("yesterday")), &HashMap::new())
            .is_err());
        assert!(ShortDate.filter(&Value::from(13), &HashMap::new()).is_err());
    }
}
