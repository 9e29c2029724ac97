mod dataset_path;
mod page_size;
mod site_name;

pub use self::{dataset_path::DatasetPath, page_size::PageSize, site_name::SiteName};

use once_cell::sync::OnceCell;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::HashMap,
    env,
    sync::{Arc, RwLock},
};

pub trait Configuration {
    type Type: Serialize + DeserializeOwned;

    fn default() -> Option<Self::Type>;
    fn key() -> &'static str;
    fn env_key() -> &'static str;
    fn parse(raw: &str) -> Option<Self::Type>;

    fn get() -> Option<Self::Type>
    where
        Self: Sized,
    {
        ConfigurationManager::shared().get::<Self>()
    }
}

static SHARED_MANAGER: OnceCell<ConfigurationManager> = OnceCell::new();

#[derive(Clone, Debug)]
pub struct ConfigurationManager {
    active_configuration: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl ConfigurationManager {
    pub fn shared() -> Self {
        SHARED_MANAGER
            .get_or_init(|| {
                let active_configuration = Arc::new(RwLock::new(HashMap::new()));

                Self {
                    active_configuration,
                }
            })
            .clone()
    }

    pub fn get<T: Configuration>(&self) -> Option<T::Type> {
        let configuration = self.active_configuration.read().ok()?;
        match configuration.get(T::key()) {
            Some(value) => serde_json::value::from_value(value.clone()).ok(),
            None => T::default(),
        }
    }

    pub fn load_from_env(&self) {
        self.load::<SiteName>();
        self.load::<PageSize>();
        self.load::<DatasetPath>();
    }

    fn load<T: Configuration>(&self) {
        let raw = match env::var(T::env_key()) {
            Ok(raw) => raw,
            Err(_) => return,
        };

        match T::parse(&raw) {
            Some(value) => {
                if let (Ok(value), Ok(mut configuration)) = (
                    serde_json::value::to_value(value),
                    self.active_configuration.write(),
                ) {
                    configuration.insert(T::key().to_owned(), value);
                }
            }
            None => log::warn!("ignoring invalid {} value {:?}", T::env_key(), raw),
        }
    }
}
