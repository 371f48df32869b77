pub mod coordinator;
pub mod events;
pub mod payloads;
pub mod receiver;

pub use coordinator::{StreamCoordinator, VerifyOutcome};
pub use events::{Ohlcvc, OpenInterest, Quote, StreamEvent, TapeStatus, Trade};

use std::time::Duration;

use chrono::NaiveDate;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::broadcast;

use crate::date::format_yyyymmdd;
use crate::errors::ClientError;
use crate::models::{MessageType, OptionReqType, OptionRight, SecType};
use crate::wire::write_request_half;

/// A live stream subscription session: owns the write half of the stream
/// socket and the [`StreamCoordinator`] shared with the receiver task
/// spawned by [`crate::client::RequestClient::connect_stream`].
#[derive(Debug)]
pub struct StreamSession {
  write_half: OwnedWriteHalf,
  coordinator: StreamCoordinator,
  /// `None` for sessions opened via `connect_stream_with_callback`, which
  /// deliver events to the callback on the receiver task instead.
  events_tx: Option<broadcast::Sender<StreamEvent>>,
  verify_timeout: Duration,
}

impl StreamSession {
  pub(crate) fn new(
    write_half: OwnedWriteHalf,
    coordinator: StreamCoordinator,
    events_tx: Option<broadcast::Sender<StreamEvent>>,
    verify_timeout: Duration,
  ) -> Self {
    Self {
      write_half,
      coordinator,
      events_tx,
      verify_timeout,
    }
  }

  /// Subscribe to a new broadcast receiver for decoded stream events.
  ///
  /// Panics if this session was opened via `connect_stream_with_callback`;
  /// that mode delivers events to the callback instead of a channel.
  pub fn events(&self) -> broadcast::Receiver<StreamEvent> {
    self
      .events_tx
      .as_ref()
      .expect("events() is not available on a session opened with connect_stream_with_callback")
      .subscribe()
  }

  async fn send_stream_req(
    &mut self,
    fields: &[(&str, &str)],
  ) -> Result<u32, ClientError> {
    let req_id = self.coordinator.allocate();
    write_request_half(&mut self.write_half, MessageType::StreamReq.code(), fields).await?;
    Ok(req_id)
  }

  async fn send_stream_remove(&mut self, fields: &[(&str, &str)]) -> Result<(), ClientError> {
    write_request_half(&mut self.write_half, MessageType::StreamRemove.code(), fields).await
  }

  /// Subscribe to every option trade across the market.
  pub async fn subscribe_full_trade(&mut self) -> Result<u32, ClientError> {
    self
      .send_stream_req(&[
        ("sec", SecType::Option.as_wire_str()),
        ("req", &OptionReqType::Trade.code().to_string()),
      ])
      .await
  }

  /// Subscribe to every option open-interest update across the market.
  pub async fn subscribe_full_open_interest(&mut self) -> Result<u32, ClientError> {
    self
      .send_stream_req(&[
        ("sec", SecType::Option.as_wire_str()),
        ("req", &OptionReqType::OpenInterest.code().to_string()),
      ])
      .await
  }

  /// Subscribe to trades on a single option contract.
  pub async fn subscribe_trade(
    &mut self,
    root: &str,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
  ) -> Result<u32, ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let strike_s = strike_milli.to_string();
    self
      .send_stream_req(&[
        ("root", root),
        ("exp", &exp_s),
        ("strike", &strike_s),
        ("right", right.as_wire_str()),
        ("sec", SecType::Option.as_wire_str()),
        ("req", &OptionReqType::Trade.code().to_string()),
      ])
      .await
  }

  /// Subscribe to quotes on a single option contract.
  pub async fn subscribe_quote(
    &mut self,
    root: &str,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
  ) -> Result<u32, ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let strike_s = strike_milli.to_string();
    self
      .send_stream_req(&[
        ("root", root),
        ("exp", &exp_s),
        ("strike", &strike_s),
        ("right", right.as_wire_str()),
        ("sec", SecType::Option.as_wire_str()),
        ("req", &OptionReqType::Quote.code().to_string()),
      ])
      .await
  }

  /// Unsubscribe from a previously subscribed single-contract trade stream.
  pub async fn unsubscribe_trade(
    &mut self,
    root: &str,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
  ) -> Result<(), ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let strike_s = strike_milli.to_string();
    self
      .send_stream_remove(&[
        ("root", root),
        ("exp", &exp_s),
        ("strike", &strike_s),
        ("right", right.as_wire_str()),
        ("sec", SecType::Option.as_wire_str()),
        ("req", &OptionReqType::Trade.code().to_string()),
      ])
      .await
  }

  /// Unsubscribe from a previously subscribed single-contract quote stream.
  pub async fn unsubscribe_quote(
    &mut self,
    root: &str,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
  ) -> Result<(), ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let strike_s = strike_milli.to_string();
    self
      .send_stream_remove(&[
        ("root", root),
        ("exp", &exp_s),
        ("strike", &strike_s),
        ("right", right.as_wire_str()),
        ("sec", SecType::Option.as_wire_str()),
        ("req", &OptionReqType::Quote.code().to_string()),
      ])
      .await
  }

  /// Unsubscribe from the every-option-trade firehose.
  pub async fn unsubscribe_full_trade(&mut self) -> Result<(), ClientError> {
    self
      .send_stream_remove(&[
        ("sec", SecType::Option.as_wire_str()),
        ("req", &OptionReqType::Trade.code().to_string()),
      ])
      .await
  }

  /// Unsubscribe from the every-option-open-interest firehose.
  pub async fn unsubscribe_full_open_interest(&mut self) -> Result<(), ClientError> {
    self
      .send_stream_remove(&[
        ("sec", SecType::Option.as_wire_str()),
        ("req", &OptionReqType::OpenInterest.code().to_string()),
      ])
      .await
  }

  /// Wait for `req_id`'s subscription ack, failing if the Terminal never responds.
  pub async fn verify(&self, req_id: u32) -> Result<VerifyOutcome, ClientError> {
    self.coordinator.verify(req_id, self.verify_timeout).await
  }
}
