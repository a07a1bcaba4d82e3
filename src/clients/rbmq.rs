use lapin::{
    BasicProperties, Connection, ConnectionProperties,
    options::{BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::{config::Config, error::PublishError, models::message::MessageEnvelope};

const CLOSE_OK: u16 = 200;

pub struct RabbitMqPublisher {
    amqp_url: String,
    timeout: Duration,
}

impl RabbitMqPublisher {
    pub fn new(config: &Config) -> Self {
        Self {
            amqp_url: config.amqp_url(),
            timeout: config.publish_timeout(),
        }
    }

    /// Opens a fresh connection, declares the durable destination queue and
    /// publishes the envelope marked persistent. The connection is closed
    /// before returning; a close failure never masks a publish failure.
    pub async fn publish(&self, envelope: &MessageEnvelope) -> Result<(), PublishError> {
        let queue = envelope.queue_name();

        let payload = serde_json::to_vec(envelope).map_err(|source| PublishError::Serialize {
            message_id: envelope.id.clone(),
            source,
        })?;

        let connection = self.connect().await?;

        let result = match timeout(self.timeout, publish_to_queue(&connection, &queue, &payload))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(PublishError::Timeout(self.timeout)),
        };

        if let Err(error) = connection.close(CLOSE_OK, "").await {
            warn!(error = %error, "Failed to close broker connection");
        }

        if result.is_ok() {
            info!(message_id = %envelope.id, queue = %queue, "Message published");
        }

        result
    }

    async fn connect(&self) -> Result<Connection, PublishError> {
        debug!(endpoint = %self.amqp_url, "Connecting to RabbitMQ");

        let connecting = Connection::connect(&self.amqp_url, ConnectionProperties::default());

        match timeout(self.timeout, connecting).await {
            Ok(Ok(connection)) => Ok(connection),
            Ok(Err(source)) => Err(PublishError::Connect {
                endpoint: self.amqp_url.clone(),
                source,
            }),
            Err(_) => Err(PublishError::Timeout(self.timeout)),
        }
    }
}

async fn publish_to_queue(
    connection: &Connection,
    queue: &str,
    payload: &[u8],
) -> Result<(), PublishError> {
    let channel = connection
        .create_channel()
        .await
        .map_err(PublishError::Channel)?;

    channel
        .queue_declare(
            queue,
            QueueDeclareOptions {
                durable: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await
        .map_err(|source| PublishError::QueueDeclare {
            queue: queue.to_string(),
            source,
        })?;

    channel
        .basic_publish(
            "",
            queue,
            BasicPublishOptions::default(),
            payload,
            BasicProperties::default().with_delivery_mode(2),
        )
        .await
        .map_err(|source| PublishError::Publish {
            queue: queue.to_string(),
            source,
        })?;

    Ok(())
}
