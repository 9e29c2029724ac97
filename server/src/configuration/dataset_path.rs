use super::Configuration;

pub struct DatasetPath;

impl Configuration for DatasetPath {
    type Type = String;

    fn default() -> Option<Self::Type> {
        Some(String::from("data/data.json"))
    }

    fn key() -> &'static str {
        "dataset-path"
    }

    fn env_key() -> &'static str {
        "DATASET_PATH"
    }

    fn parse(raw: &str) -> Option<Self::Type> {
        Some(raw.to_owned())
    }
}
