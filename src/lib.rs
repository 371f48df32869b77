#![allow(clippy::cognitive_complexity, clippy::large_enum_variant)]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]
#![doc(test(
  no_crate_inject,
  attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! # thetadata-client
//!
//! Async Rust client for the ThetaData Terminal's binary historical and
//! streaming market-data protocol.
//!
//! The Terminal exposes two loopback TCP sockets: a control socket for
//! request/response historical and snapshot queries, and a stream socket
//! carrying a tagged sequence of live quote/trade/OHLCVC/open-interest
//! frames. This crate decodes both wire formats into typed Rust values and
//! manages the stream subscription handshake.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use thetadata_client::{ClientConfig, OptionReqType, OptionRight, RequestClient, SecType};
//! use chrono::NaiveDate;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), thetadata_client::ClientError> {
//! let client = RequestClient::connect(ClientConfig::default()).await?;
//! let roots = client.get_roots(SecType::Option).await?;
//! let strikes = client
//!   .get_strikes("AAPL", NaiveDate::from_ymd_opt(2022, 12, 16).unwrap())
//!   .await?;
//! # let _ = (roots, strikes, OptionReqType::Eod, OptionRight::Call);
//! # Ok(()) }
//! ```
//!
//! ## Streaming
//!
//! ```rust,no_run
//! use thetadata_client::{ClientConfig, RequestClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), thetadata_client::ClientError> {
//! let client = RequestClient::connect(ClientConfig::default()).await?;
//! let mut stream = client.connect_stream().await?;
//! let req_id = stream.subscribe_full_trade().await?;
//! stream.verify(req_id).await?;
//! let mut events = stream.events();
//! while let Ok(event) = events.recv().await {
//!   println!("{event:?}");
//! }
//! # Ok(()) }
//! ```
//!
//! ## Error handling
//!
//! Every fallible operation returns [`ClientError`], a closed taxonomy built
//! with `thiserror` distinguishing connection failures, timeouts, the
//! Terminal's own "no data"/"disconnected" error bodies, and malformed wire
//! data. See [`ClientError`] for the full list.
//!
//! ## Logging
//!
//! Internal connection lifecycle, request dispatch, and stream decode events
//! are logged via the `log` facade at `debug`/`warn` level. The crate does
//! not install a logger; applications should initialize one (e.g.
//! `env_logger`) if they want to see these messages.

mod client;
mod config;
mod date;
pub mod decode;
mod errors;
mod models;
mod strike;
pub mod stream;
mod wire;

pub use client::RequestClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use date::{format_yyyymmdd, parse_yyyymmdd};
pub use decode::{decode_dates, decode_strikes, decode_tokens, decode_tick_table, Cell, TickTable};
pub use errors::ClientError;
pub use models::{
  price_type_multiplier, Contract, DataType, Exchange, MessageType, OptionReqType, OptionRight,
  QuoteCondition, SecType, StockReqType, StreamMsgType, StreamResponseType, TradeCondition,
};
pub use strike::{decimal_to_milli, milli_to_decimal};
pub use stream::{
  Ohlcvc, OpenInterest, Quote, StreamCoordinator, StreamEvent, StreamSession, TapeStatus, Trade,
  VerifyOutcome,
};
pub use wire::Header;
