use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_rabbitmq_host")]
    pub rabbitmq_host: String,

    #[serde(default = "default_rabbitmq_port")]
    pub rabbitmq_port: u16,

    #[serde(default = "default_publish_timeout_seconds")]
    pub publish_timeout_seconds: u64,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

fn default_rabbitmq_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rabbitmq_port() -> u16 {
    5672
}

fn default_publish_timeout_seconds() -> u64 {
    5
}

fn default_server_port() -> u16 {
    8000
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid environmental variable"))?;
        Ok(config)
    }

    pub fn amqp_url(&self) -> String {
        format!("amqp://{}:{}/%2f", self.rabbitmq_host, self.rabbitmq_port)
    }

    pub fn publish_timeout(&self) -> Duration {
        Duration::from_secs(self.publish_timeout_seconds)
    }
}
