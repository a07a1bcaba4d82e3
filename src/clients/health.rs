use std::collections::HashMap;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use lapin::{Connection, ConnectionProperties};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{
    config::Config,
    models::health::{HealthCheckResponse, HealthStatus, ServiceHealth},
};

pub struct HealthChecker {
    config: Config,
}

impl HealthChecker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        let rabbitmq_health = self.check_rabbitmq().await;
        checks.insert("message_broker".to_string(), rabbitmq_health);

        let overall_status = if checks
            .values()
            .any(|health| health.status == HealthStatus::Unhealthy)
        {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        };

        HealthCheckResponse {
            status: overall_status,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            checks,
        }
    }

    async fn check_rabbitmq(&self) -> ServiceHealth {
        let start = Instant::now();

        let amqp_url = self.config.amqp_url();
        let connecting = Connection::connect(&amqp_url, ConnectionProperties::default());

        match timeout(self.config.publish_timeout(), connecting).await {
            Ok(Ok(connection)) => {
                let elapsed = start.elapsed().as_millis() as u64;
                debug!(response_time_ms = elapsed, "RabbitMQ health check passed");

                if let Err(error) = connection.close(200, "").await {
                    warn!(error = %error, "Failed to close health check connection");
                }

                ServiceHealth::healthy(elapsed)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "RabbitMQ connection failed");
                ServiceHealth::unhealthy(format!("Connection failed: {}", e))
            }
            Err(_) => {
                warn!("RabbitMQ connection timed out");
                ServiceHealth::unhealthy("Connection timed out".to_string())
            }
        }
    }
}
