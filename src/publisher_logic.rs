// src/publisher_logic.rs

use crate::config::broker::{load_broker_config, BrokerConfig};
use crate::config::publisher::Args;
use crate::data_model::{Message, PublishOutcome, PublishReport};
use crate::error::{PublisherError, Result};
use crate::message::load_message;
use crate::utils::common::connect_rabbitmq;
use async_trait::async_trait;
use clap::ValueEnum;
use lapin::{
    options::BasicPublishOptions, protocol::basic::AMQPProperties, Channel, Connection,
};
use tracing::{error, info, instrument, warn};

pub const CONTENT_TYPE: &str = "text/plain";
/// AMQP delivery mode 1: the broker keeps the message in memory only.
pub const TRANSIENT_DELIVERY_MODE: u8 = 1;
const REPLY_SUCCESS: u16 = 200;

/// How a failed publish to one queue affects the rest of the run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishPolicy {
    /// Log the failure and move on to the next queue. The run still succeeds.
    #[default]
    BestEffort,
    /// Stop at the first failure and fail the run.
    FailFast,
}

/// An open channel to the broker that can publish to a named queue.
#[async_trait]
pub trait BrokerChannel: Send + Sync {
    async fn publish(&self, queue: &str, payload: &[u8]) -> Result<()>;

    /// Closes the channel and the connection underneath it.
    async fn close(&self) -> Result<()>;
}

/// Opens one connection plus one channel for a run.
#[async_trait]
pub trait BrokerConnector: Send + Sync {
    type Channel: BrokerChannel;

    async fn open(&self, config: &BrokerConfig) -> Result<Self::Channel>;
}

/// Production connector backed by `lapin`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LapinConnector;

pub struct LapinChannel {
    addr: String,
    connection: Connection,
    channel: Channel,
}

#[async_trait]
impl BrokerConnector for LapinConnector {
    type Channel = LapinChannel;

    async fn open(&self, config: &BrokerConfig) -> Result<LapinChannel> {
        let addr = config.display_addr();
        info!(broker = %addr, "Connecting to rabbit");
        let connection = connect_rabbitmq(config.amqp_uri())
            .await
            .map_err(|e| PublisherError::Connection {
                addr: addr.clone(),
                reason: e.to_string(),
            })?;
        info!("Rabbit connected");

        info!("Opening channel");
        let channel = match connection.create_channel().await {
            Ok(channel) => channel,
            Err(e) => {
                if let Err(close_err) = connection.close(REPLY_SUCCESS, "channel failed").await {
                    warn!(error = %close_err, "Failed to close connection after channel error");
                }
                return Err(PublisherError::Channel(e.to_string()));
            }
        };
        info!(channel_id = channel.id(), "Channel opened");

        Ok(LapinChannel {
            addr,
            connection,
            channel,
        })
    }
}

#[async_trait]
impl BrokerChannel for LapinChannel {
    async fn publish(&self, queue: &str, payload: &[u8]) -> Result<()> {
        let to_publish_error = |e: lapin::Error| PublisherError::Publish {
            queue: queue.to_string(),
            reason: e.to_string(),
        };

        // Confirm mode is never enabled, so the returned confirm resolves as
        // soon as the frames are queued and nothing waits on the broker.
        self.channel
            .basic_publish(
                "", // Default exchange
                queue,
                BasicPublishOptions {
                    mandatory: false,
                    immediate: false,
                },
                payload,
                AMQPProperties::default()
                    .with_content_type(CONTENT_TYPE.into())
                    .with_delivery_mode(TRANSIENT_DELIVERY_MODE),
            )
            .await
            .map_err(to_publish_error)?
            .await
            .map_err(to_publish_error)?;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let channel_result = self.channel.close(REPLY_SUCCESS, "OK").await;
        let connection_result = self.connection.close(REPLY_SUCCESS, "OK").await;

        channel_result.map_err(|e| PublisherError::Channel(e.to_string()))?;
        connection_result.map_err(|e| PublisherError::Connection {
            addr: self.addr.clone(),
            reason: e.to_string(),
        })
    }
}

/// Publishes `message` to every queue in order over an already open channel.
pub async fn publish_to_queues<C>(
    channel: &C,
    queues: &[String],
    message: &Message,
    policy: PublishPolicy,
) -> Result<PublishReport>
where
    C: BrokerChannel + ?Sized,
{
    let mut report = PublishReport::default();

    for queue in queues {
        info!(queue = %queue, "Publishing message");
        match channel.publish(queue, message.as_bytes()).await {
            Ok(()) => {
                info!(queue = %queue, "Message published");
                report.outcomes.push(PublishOutcome::delivered(queue));
            }
            Err(e) => {
                error!(queue = %queue, error = %e, "Failed to publish message");
                report.outcomes.push(PublishOutcome::failed(queue, e.to_string()));
                if policy == PublishPolicy::FailFast {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

/// Opens the broker session, publishes to every configured queue and closes
/// the session again whatever the per-queue results were.
#[instrument(skip_all, fields(queues = config.queues.len()))]
pub async fn run_publisher<K>(
    connector: &K,
    config: &BrokerConfig,
    message: &Message,
    policy: PublishPolicy,
) -> Result<PublishReport>
where
    K: BrokerConnector,
{
    let channel = connector.open(config).await?;

    let result = publish_to_queues(&channel, &config.queues, message, policy).await;

    if let Err(e) = channel.close().await {
        warn!(error = %e, "Failed to close broker session cleanly");
    } else {
        info!("Channel and connection closed");
    }

    let report = result?;
    info!(
        attempted = report.attempted(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Publishing finished"
    );
    if report.failed() > 0 {
        warn!(
            failed_queues = ?report.failed_queues(),
            "Some queues did not receive the message"
        );
    }
    Ok(report)
}

/// Full run: message first, then config, then the broker. Nothing touches the
/// network unless both files loaded cleanly.
pub async fn execute_run<K>(connector: &K, args: &Args) -> Result<PublishReport>
where
    K: BrokerConnector,
{
    let message = load_message(&args.message)?;
    let config = load_broker_config(&args.config)?;
    run_publisher(connector, &config, &message, args.on_publish_error).await
}
