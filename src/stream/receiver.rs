use byteorder::{BigEndian, ByteOrder};
use log::{debug, warn};
use tokio::io::AsyncReadExt;
use tokio::net::tcp::OwnedReadHalf;
use tokio::sync::broadcast;
use zerocopy::Ref;

use crate::date::parse_yyyymmdd;
use crate::errors::ClientError;
use crate::models::{price_type_multiplier, Contract, StreamMsgType};
use crate::stream::coordinator::StreamCoordinator;
use crate::stream::events::{Ohlcvc, OpenInterest, Quote, StreamEvent, TapeStatus, Trade};
use crate::stream::payloads::{
  OhlcvcRaw, OpenInterestRaw, QuoteRaw, TradeRaw, OHLCVC_SIZE, OPEN_INTEREST_SIZE, QUOTE_SIZE,
  TRADE_SIZE,
};

/// Default channel depth for the stream event broadcast, matching the
/// teacher's `msg_tx` buffer for its ticks channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 1000;

/// Where decoded events go: a broadcast channel (the teacher's `msg_tx`
/// pattern) or a user callback invoked synchronously on the receiver task.
pub enum EventSink {
  Channel(broadcast::Sender<StreamEvent>),
  Callback(Box<dyn Fn(StreamEvent) + Send + Sync>),
}

impl EventSink {
  fn dispatch(&self, event: StreamEvent) {
    match self {
      EventSink::Channel(tx) => {
        let _ = tx.send(event);
      }
      EventSink::Callback(f) => f(event),
    }
  }
}

async fn read_exact_vec(
  stream: &mut OwnedReadHalf,
  n: usize,
) -> Result<Vec<u8>, ClientError> {
  let mut buf = vec![0u8; n];
  stream
    .read_exact(&mut buf)
    .await
    .map_err(|e| ClientError::ConnectionError(format!("reading stream frame: {e}")))?;
  Ok(buf)
}

async fn read_contract(stream: &mut OwnedReadHalf) -> Result<Contract, ClientError> {
  let mut len_buf = [0u8; 1];
  stream
    .read_exact(&mut len_buf)
    .await
    .map_err(|e| ClientError::ConnectionError(format!("reading contract length: {e}")))?;
  let total_len = len_buf[0] as usize;
  if total_len == 0 {
    return Err(ClientError::ParseError(
      "contract frame has zero length".to_string(),
    ));
  }
  // total_len includes the length byte itself, per the wire convention.
  let rest = read_exact_vec(stream, total_len - 1).await?;
  let mut wire = Vec::with_capacity(total_len);
  wire.push(len_buf[0]);
  wire.extend_from_slice(&rest);
  Contract::from_wire(&wire)
}

fn quote_from_raw(raw: &QuoteRaw) -> Result<Quote, ClientError> {
  let multiplier = price_type_multiplier(raw.price_type.get() as i32)?;
  Ok(Quote {
    ms_of_day: raw.ms_of_day.get(),
    bid_size: raw.bid_size.get(),
    bid_exchange: raw.bid_exchange.get(),
    bid: raw.bid_price_raw.get() as f64 * multiplier,
    bid_condition: raw.bid_condition.get(),
    ask_size: raw.ask_size.get(),
    ask_exchange: raw.ask_exchange.get(),
    ask: raw.ask_price_raw.get() as f64 * multiplier,
    ask_condition: raw.ask_condition.get(),
    date: parse_yyyymmdd(raw.date.get() as i32)?,
  })
}

fn trade_from_raw(raw: &TradeRaw) -> Result<Trade, ClientError> {
  let multiplier = price_type_multiplier(raw.price_type.get() as i32)?;
  Ok(Trade {
    ms_of_day: raw.ms_of_day.get(),
    sequence: raw.sequence.get(),
    size: raw.size.get(),
    condition: raw.condition.get(),
    price: raw.price_raw.get() as f64 * multiplier,
    exchange: raw.exchange.get(),
    date: parse_yyyymmdd(raw.date.get() as i32)?,
  })
}

fn ohlcvc_from_raw(raw: &OhlcvcRaw) -> Result<Ohlcvc, ClientError> {
  let multiplier = price_type_multiplier(raw.price_type.get() as i32)?;
  Ok(Ohlcvc {
    ms_of_day: raw.ms_of_day.get(),
    open: raw.open_raw.get() as f64 * multiplier,
    high: raw.high_raw.get() as f64 * multiplier,
    low: raw.low_raw.get() as f64 * multiplier,
    close: raw.close_raw.get() as f64 * multiplier,
    volume: raw.volume.get(),
    count: raw.count.get(),
    date: parse_yyyymmdd(raw.date.get() as i32)?,
  })
}

fn open_interest_from_raw(raw: &OpenInterestRaw) -> Result<OpenInterest, ClientError> {
  Ok(OpenInterest {
    // Open interest has no PRICE_TYPE field on this frame; it is carried as
    // a plain integer contract count, not a scaled price.
    open_interest: raw.open_interest.get() as f64,
    date: parse_yyyymmdd(raw.date.get() as i32)?,
  })
}

async fn read_one_frame(
  stream: &mut OwnedReadHalf,
  coordinator: &StreamCoordinator,
) -> Result<Option<StreamEvent>, ClientError> {
  let mut tag_buf = [0u8; 1];
  stream
    .read_exact(&mut tag_buf)
    .await
    .map_err(|e| ClientError::ConnectionError(format!("reading stream tag: {e}")))?;
  let tag = StreamMsgType::from_code(tag_buf[0])?;

  match tag {
    StreamMsgType::Ping => {
      let _contract = read_contract(stream).await?;
      let _ = read_exact_vec(stream, 4).await?;
      Ok(None)
    }
    StreamMsgType::ReqResponse => {
      let contract = read_contract(stream).await?;
      let body = read_exact_vec(stream, 8).await?;
      let req_id = BigEndian::read_u32(&body[0..4]);
      let response_code = BigEndian::read_u32(&body[4..8]);
      coordinator.record_ack(req_id, response_code)?;
      Ok(Some(StreamEvent::ReqResponse {
        contract,
        req_id,
        response_code,
      }))
    }
    StreamMsgType::Disconnected => {
      let contract = read_contract(stream).await?;
      let _ = read_exact_vec(stream, 4).await?;
      Ok(Some(StreamEvent::Disconnected { contract }))
    }
    StreamMsgType::Reconnected => {
      let contract = read_contract(stream).await?;
      let _ = read_exact_vec(stream, 4).await?;
      Ok(Some(StreamEvent::Reconnected { contract }))
    }
    StreamMsgType::Start | StreamMsgType::Restart | StreamMsgType::Stop => {
      let contract = read_contract(stream).await?;
      let body = read_exact_vec(stream, 4).await?;
      let date = parse_yyyymmdd(BigEndian::read_u32(&body) as i32)?;
      let status = match tag {
        StreamMsgType::Start => TapeStatus::Start,
        StreamMsgType::Restart => TapeStatus::Restart,
        _ => TapeStatus::Stop,
      };
      Ok(Some(StreamEvent::TapeStatus {
        contract,
        status,
        date,
      }))
    }
    StreamMsgType::Quote => {
      let contract = read_contract(stream).await?;
      let body = read_exact_vec(stream, QUOTE_SIZE).await?;
      let raw = Ref::<_, QuoteRaw>::from_bytes(&body[..])
        .map_err(|_| ClientError::ParseError("malformed QUOTE payload".to_string()))?;
      let quote = quote_from_raw(&raw)?;
      Ok(Some(StreamEvent::Quote { contract, quote }))
    }
    StreamMsgType::Trade => {
      let contract = read_contract(stream).await?;
      let body = read_exact_vec(stream, TRADE_SIZE).await?;
      let raw = Ref::<_, TradeRaw>::from_bytes(&body[..])
        .map_err(|_| ClientError::ParseError("malformed TRADE payload".to_string()))?;
      let trade = trade_from_raw(&raw)?;
      Ok(Some(StreamEvent::Trade { contract, trade }))
    }
    StreamMsgType::Ohlcvc => {
      let contract = read_contract(stream).await?;
      let body = read_exact_vec(stream, OHLCVC_SIZE).await?;
      let raw = Ref::<_, OhlcvcRaw>::from_bytes(&body[..])
        .map_err(|_| ClientError::ParseError("malformed OHLCVC payload".to_string()))?;
      let bar = ohlcvc_from_raw(&raw)?;
      Ok(Some(StreamEvent::Ohlcvc { contract, bar }))
    }
    StreamMsgType::OpenInterest => {
      let contract = read_contract(stream).await?;
      let body = read_exact_vec(stream, OPEN_INTEREST_SIZE).await?;
      let raw = Ref::<_, OpenInterestRaw>::from_bytes(&body[..])
        .map_err(|_| ClientError::ParseError("malformed OPEN_INTEREST payload".to_string()))?;
      let oi = open_interest_from_raw(&raw)?;
      Ok(Some(StreamEvent::OpenInterest { contract, oi }))
    }
    other => Err(ClientError::ParseError(format!(
      "unexpected stream frame tag: {other:?}"
    ))),
  }
}

/// Drive the stream socket's read half to completion, delivering decoded
/// events to `sink`.
///
/// A single frame decode failure is treated as fatal: the contract-prefixed
/// grammar has no outer length prefix to resynchronize on, so one corrupt
/// frame can desynchronize every read after it. The receiver reports the
/// failure, then emits `StreamDead` and returns.
pub async fn run(mut stream: OwnedReadHalf, coordinator: StreamCoordinator, sink: EventSink) {
  loop {
    match read_one_frame(&mut stream, &coordinator).await {
      Ok(Some(event)) => {
        debug!("stream event: {event:?}");
        sink.dispatch(event);
      }
      Ok(None) => continue, // PING, silently dropped
      Err(ClientError::ConnectionError(msg)) => {
        warn!("stream socket closed: {msg}");
        sink.dispatch(StreamEvent::StreamDead);
        return;
      }
      Err(e) => {
        warn!("stream frame decode failed, tearing down session: {e}");
        sink.dispatch(StreamEvent::Error(e));
        sink.dispatch(StreamEvent::StreamDead);
        return;
      }
    }
  }
}
