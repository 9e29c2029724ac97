#[macro_use]
extern crate rocket;

mod configuration;
mod webserver;

use crate::configuration::ConfigurationManager;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    ConfigurationManager::shared().load_from_env();

    webserver::main().await
}
