use chrono::NaiveDate;

use crate::errors::ClientError;
use crate::models::Contract;

/// A quote update for one contract, prices already scaled to USD.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quote {
  pub ms_of_day: u32,
  pub bid_size: u32,
  pub bid_exchange: u32,
  pub bid: f64,
  pub bid_condition: u32,
  pub ask_size: u32,
  pub ask_exchange: u32,
  pub ask: f64,
  pub ask_condition: u32,
  pub date: NaiveDate,
}

/// A trade print for one contract.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trade {
  pub ms_of_day: u32,
  pub sequence: u32,
  pub size: u32,
  pub condition: u32,
  pub price: f64,
  pub exchange: u32,
  pub date: NaiveDate,
}

/// One OHLCVC bar for one contract.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ohlcvc {
  pub ms_of_day: u32,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  pub volume: u32,
  pub count: u32,
  pub date: NaiveDate,
}

/// An open-interest update for one contract.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpenInterest {
  pub open_interest: f64,
  pub date: NaiveDate,
}

/// Tape status carried by `START`/`RESTART`/`STOP` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TapeStatus {
  Start,
  Restart,
  Stop,
}

/// A decoded event delivered by the stream receiver.
///
/// Every frame on the wire carries a contract immediately after its tag byte,
/// with no exceptions for control frames; every variant except
/// [`StreamEvent::Error`] and [`StreamEvent::StreamDead`] (which have no
/// associated frame) carries that `Contract` accordingly.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
  Quote { contract: Contract, quote: Quote },
  Trade { contract: Contract, trade: Trade },
  Ohlcvc { contract: Contract, bar: Ohlcvc },
  OpenInterest { contract: Contract, oi: OpenInterest },
  ReqResponse { contract: Contract, req_id: u32, response_code: u32 },
  TapeStatus { contract: Contract, status: TapeStatus, date: NaiveDate },
  Disconnected { contract: Contract },
  Reconnected { contract: Contract },
  /// A single frame failed to decode; the receiver could not safely resume
  /// reading the stream and will emit [`StreamEvent::StreamDead`] next.
  Error(ClientError),
  /// The stream socket closed or desynchronized; no further events follow.
  StreamDead,
}
