//! The request client: owns the control socket, serializes request/response
//! round-trips, and opens the stream socket on demand.

use chrono::NaiveDate;
use log::{info, warn};
use rust_decimal::Decimal;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::{broadcast, Mutex};
use tokio::time::sleep;

use crate::config::ClientConfig;
use crate::date::format_yyyymmdd;
use crate::decode::{decode_dates, decode_strikes, decode_tick_table, decode_tokens, TickTable};
use crate::errors::ClientError;
use crate::models::{MessageType, OptionReqType, OptionRight, SecType, StockReqType};
use crate::stream::receiver::EventSink;
use crate::stream::{StreamCoordinator, StreamEvent, StreamSession};
use crate::wire::{read_body, read_header, write_request, Header};

/// A connected session against a ThetaData Terminal's control socket.
///
/// Mirrors the teacher's split between a connection owner and a ready-to-use
/// handle: `RequestClient` owns the socket, serializing concurrent callers
/// behind a `tokio::sync::Mutex`, the same way the teacher funnels writes
/// through its `cmd_tx` channel. This library does not multiplex requests
/// onto one socket; every call waits for its own response before the next
/// is sent.
#[derive(Debug)]
pub struct RequestClient {
  stream: Mutex<TcpStream>,
  config: ClientConfig,
}

impl RequestClient {
  /// Open the control socket, retrying on connection refusal, then perform
  /// the version handshake.
  pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
    let stream = connect_with_retries(&config.host, config.request_port, &config).await?;
    let client = Self {
      stream: Mutex::new(stream),
      config,
    };
    client.send_version_handshake().await?;
    info!("connected to terminal at {}", client.config.host);
    Ok(client)
  }

  async fn send_version_handshake(&self) -> Result<(), ClientError> {
    // The handshake reuses MSG_CODE=HIST, exactly as the Terminal's own
    // client does; there is no dedicated VERSION request code on the wire.
    let mut guard = self.stream.lock().await;
    write_request(
      &mut guard,
      MessageType::Hist.code(),
      &[("version", &self.config.client_version)],
    )
    .await
  }

  async fn round_trip(&self, msg_code: u16, fields: &[(&str, &str)]) -> Result<(Header, bytes::Bytes), ClientError> {
    let mut guard = self.stream.lock().await;
    write_request(&mut guard, msg_code, fields).await?;
    self.read_response(&mut guard).await
  }

  /// Read and classify the response following a request already written to
  /// `guard`. Shared by `round_trip` and `get_req`'s raw passthrough.
  async fn read_response(&self, guard: &mut TcpStream) -> Result<(Header, bytes::Bytes), ClientError> {
    let header = tokio::time::timeout(self.config.request_timeout, read_header(guard))
      .await
      .map_err(|_| ClientError::Timeout("reading response header".to_string()))??;
    let body = tokio::time::timeout(
      self.config.request_timeout,
      read_body(guard, header.body_size),
    )
    .await
    .map_err(|_| ClientError::Timeout("reading response body".to_string()))??;
    if header.is_error() {
      let text = std::str::from_utf8(&body)
        .map_err(|e| ClientError::ParseError(format!("error body is not utf-8: {e}")))?;
      return Err(ClientError::classify_response(text));
    }
    Ok((header, body))
  }

  async fn tick_table_request(
    &self,
    msg_code: u16,
    fields: &[(&str, &str)],
  ) -> Result<TickTable, ClientError> {
    let (header, body) = self.round_trip(msg_code, fields).await?;
    decode_tick_table(&header, &body)
  }

  async fn token_list_request(
    &self,
    msg_code: u16,
    fields: &[(&str, &str)],
  ) -> Result<Vec<String>, ClientError> {
    let (_header, body) = self.round_trip(msg_code, fields).await?;
    decode_tokens(&body)
  }

  async fn date_list_request(
    &self,
    msg_code: u16,
    fields: &[(&str, &str)],
  ) -> Result<Vec<NaiveDate>, ClientError> {
    let (_header, body) = self.round_trip(msg_code, fields).await?;
    decode_dates(&body)
  }

  /// Historical end-of-day (or intraday, via `ivl`) series for an option contract.
  #[allow(clippy::too_many_arguments)]
  pub async fn get_hist_option(
    &self,
    root: &str,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
    req: OptionReqType,
    start: NaiveDate,
    end: NaiveDate,
    ivl_ms: u32,
    rth: bool,
  ) -> Result<TickTable, ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let strike_s = strike_milli.to_string();
    let req_s = req.code().to_string();
    let start_s = format_yyyymmdd(start).to_string();
    let end_s = format_yyyymmdd(end).to_string();
    let ivl_s = ivl_ms.to_string();
    self
      .tick_table_request(
        MessageType::Hist.code(),
        &[
          ("START_DATE", &start_s),
          ("END_DATE", &end_s),
          ("root", root),
          ("exp", &exp_s),
          ("strike", &strike_s),
          ("right", right.as_wire_str()),
          ("sec", SecType::Option.as_wire_str()),
          ("req", &req_s),
          ("rth", bool_str(rth)),
          ("IVL", &ivl_s),
        ],
      )
      .await
  }

  /// Historical end-of-day (or intraday) series for a stock.
  pub async fn get_hist_stock(
    &self,
    root: &str,
    req: StockReqType,
    start: NaiveDate,
    end: NaiveDate,
    ivl_ms: u32,
    rth: bool,
  ) -> Result<TickTable, ClientError> {
    let req_s = req.code().to_string();
    let start_s = format_yyyymmdd(start).to_string();
    let end_s = format_yyyymmdd(end).to_string();
    let ivl_s = ivl_ms.to_string();
    self
      .tick_table_request(
        MessageType::Hist.code(),
        &[
          ("START_DATE", &start_s),
          ("END_DATE", &end_s),
          ("root", root),
          ("sec", SecType::Stock.as_wire_str()),
          ("req", &req_s),
          ("rth", bool_str(rth)),
          ("IVL", &ivl_s),
        ],
      )
      .await
  }

  /// A snapshot at a specific millisecond-of-day for an option contract.
  #[allow(clippy::too_many_arguments)]
  pub async fn get_opt_at_time(
    &self,
    root: &str,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
    req: OptionReqType,
    start: NaiveDate,
    end: NaiveDate,
    ms_of_day: u32,
    rth: bool,
  ) -> Result<TickTable, ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let strike_s = strike_milli.to_string();
    let req_s = req.code().to_string();
    let start_s = format_yyyymmdd(start).to_string();
    let end_s = format_yyyymmdd(end).to_string();
    let ivl_s = ms_of_day.to_string();
    self
      .tick_table_request(
        MessageType::AtTime.code(),
        &[
          ("START_DATE", &start_s),
          ("END_DATE", &end_s),
          ("root", root),
          ("exp", &exp_s),
          ("strike", &strike_s),
          ("right", right.as_wire_str()),
          ("sec", SecType::Option.as_wire_str()),
          ("req", &req_s),
          ("rth", bool_str(rth)),
          ("IVL", &ivl_s),
        ],
      )
      .await
  }

  /// A snapshot at a specific millisecond-of-day for a stock.
  pub async fn get_stk_at_time(
    &self,
    root: &str,
    req: StockReqType,
    start: NaiveDate,
    end: NaiveDate,
    ms_of_day: u32,
    rth: bool,
  ) -> Result<TickTable, ClientError> {
    let req_s = req.code().to_string();
    let start_s = format_yyyymmdd(start).to_string();
    let end_s = format_yyyymmdd(end).to_string();
    let ivl_s = ms_of_day.to_string();
    self
      .tick_table_request(
        MessageType::AtTime.code(),
        &[
          ("START_DATE", &start_s),
          ("END_DATE", &end_s),
          ("root", root),
          ("sec", SecType::Stock.as_wire_str()),
          ("req", &req_s),
          ("rth", bool_str(rth)),
          ("IVL", &ivl_s),
        ],
      )
      .await
  }

  /// The most recent value for an option contract.
  pub async fn get_last_option(
    &self,
    root: &str,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
    req: OptionReqType,
  ) -> Result<TickTable, ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let strike_s = strike_milli.to_string();
    let req_s = req.code().to_string();
    self
      .tick_table_request(
        MessageType::Last.code(),
        &[
          ("root", root),
          ("exp", &exp_s),
          ("strike", &strike_s),
          ("right", right.as_wire_str()),
          ("sec", SecType::Option.as_wire_str()),
          ("req", &req_s),
        ],
      )
      .await
  }

  /// The most recent value for a stock.
  pub async fn get_last_stock(
    &self,
    root: &str,
    req: StockReqType,
  ) -> Result<TickTable, ClientError> {
    let req_s = req.code().to_string();
    self
      .tick_table_request(
        MessageType::Last.code(),
        &[
          ("root", root),
          ("sec", SecType::Stock.as_wire_str()),
          ("req", &req_s),
        ],
      )
      .await
  }

  /// All root symbols known to the Terminal for a security type.
  pub async fn get_roots(&self, sec: SecType) -> Result<Vec<String>, ClientError> {
    self
      .token_list_request(MessageType::AllRoots.code(), &[("sec", sec.as_wire_str())])
      .await
  }

  /// All expirations listed for a root.
  pub async fn get_expirations(&self, root: &str) -> Result<Vec<NaiveDate>, ClientError> {
    self
      .date_list_request(MessageType::AllExpirations.code(), &[("root", root)])
      .await
  }

  /// All strikes listed for a root and expiration, as exact decimal USD.
  pub async fn get_strikes(
    &self,
    root: &str,
    exp: NaiveDate,
  ) -> Result<Vec<Decimal>, ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let (_header, body) = self
      .round_trip(MessageType::AllStrikes.code(), &[("root", root), ("exp", &exp_s)])
      .await?;
    decode_strikes(&body)
  }

  /// All dates with data for an option contract and request type.
  pub async fn get_dates_opt(
    &self,
    root: &str,
    exp: NaiveDate,
    strike_milli: i64,
    right: OptionRight,
    req: OptionReqType,
  ) -> Result<Vec<NaiveDate>, ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let strike_s = strike_milli.to_string();
    let req_s = req.code().to_string();
    self
      .date_list_request(
        MessageType::AllDates.code(),
        &[
          ("root", root),
          ("exp", &exp_s),
          ("strike", &strike_s),
          ("right", right.as_wire_str()),
          ("sec", SecType::Option.as_wire_str()),
          ("req", &req_s),
        ],
      )
      .await
  }

  /// All dates with data for every strike/right on a root/expiration at once.
  pub async fn get_dates_opt_bulk(
    &self,
    root: &str,
    exp: NaiveDate,
    req: OptionReqType,
  ) -> Result<Vec<NaiveDate>, ClientError> {
    let exp_s = format_yyyymmdd(exp).to_string();
    let req_s = req.code().to_string();
    self
      .date_list_request(
        MessageType::AllDatesBulk.code(),
        &[
          ("root", root),
          ("exp", &exp_s),
          ("sec", SecType::Option.as_wire_str()),
          ("req", &req_s),
        ],
      )
      .await
  }

  /// All dates with data for a stock and request type.
  pub async fn get_dates_stk(
    &self,
    root: &str,
    req: StockReqType,
  ) -> Result<Vec<NaiveDate>, ClientError> {
    let req_s = req.code().to_string();
    self
      .date_list_request(
        MessageType::AllDates.code(),
        &[
          ("root", root),
          ("sec", SecType::Stock.as_wire_str()),
          ("req", &req_s),
        ],
      )
      .await
  }

  /// Raw passthrough for a pre-formatted `MSG_CODE=<code>&...` request line,
  /// mirroring the Python client's `get_req(req)` debugging escape hatch. The
  /// caller is responsible for formatting a request that decodes cleanly as
  /// a tick table on the response side.
  pub async fn get_req(&self, req: &str) -> Result<TickTable, ClientError> {
    let mut line = req.to_string();
    if !line.ends_with('\n') {
      line.push('\n');
    }
    let mut guard = self.stream.lock().await;
    guard
      .write_all(line.as_bytes())
      .await
      .map_err(|e| ClientError::ConnectionError(format!("writing request: {e}")))?;
    let (header, body) = self.read_response(&mut guard).await?;
    decode_tick_table(&header, &body)
  }

  /// Tell the Terminal to exit. Subsequent requests on this client fail.
  pub async fn kill(&self) -> Result<(), ClientError> {
    let mut guard = self.stream.lock().await;
    write_request(&mut guard, MessageType::Kill.code(), &[]).await
  }

  /// Open the stream socket and spawn the receiver task, returning a handle
  /// for issuing subscriptions and observing decoded events on a broadcast
  /// channel (the teacher's `msg_tx` pattern).
  pub async fn connect_stream(&self) -> Result<StreamSession, ClientError> {
    let (read_half, write_half, coordinator) = self.open_stream_socket().await?;
    let (events_tx, _) = broadcast::channel(crate::stream::receiver::EVENT_CHANNEL_CAPACITY);

    let task_coordinator = coordinator.clone();
    let sink = EventSink::Channel(events_tx.clone());
    tokio::spawn(async move {
      crate::stream::receiver::run(read_half, task_coordinator, sink).await;
    });

    Ok(StreamSession::new(
      write_half,
      coordinator,
      Some(events_tx),
      self.config.stream_timeout,
    ))
  }

  /// Open the stream socket and spawn the receiver task, delivering decoded
  /// events synchronously to `callback` on the receiver task instead of a
  /// broadcast channel — offered for parity with the Python client's
  /// callback-based `_recv_stream`. Handlers run on the receiver task, so
  /// long work must be offloaded by the caller.
  pub async fn connect_stream_with_callback(
    &self,
    callback: impl Fn(StreamEvent) + Send + Sync + 'static,
  ) -> Result<StreamSession, ClientError> {
    let (read_half, write_half, coordinator) = self.open_stream_socket().await?;

    let task_coordinator = coordinator.clone();
    let sink = EventSink::Callback(Box::new(callback));
    tokio::spawn(async move {
      crate::stream::receiver::run(read_half, task_coordinator, sink).await;
    });

    Ok(StreamSession::new(
      write_half,
      coordinator,
      None,
      self.config.stream_timeout,
    ))
  }

  async fn open_stream_socket(
    &self,
  ) -> Result<
    (
      tokio::net::tcp::OwnedReadHalf,
      tokio::net::tcp::OwnedWriteHalf,
      StreamCoordinator,
    ),
    ClientError,
  > {
    let stream = connect_with_retries(&self.config.host, self.config.stream_port, &self.config).await?;
    let (read_half, write_half) = stream.into_split();
    Ok((read_half, write_half, StreamCoordinator::new()))
  }
}

fn bool_str(b: bool) -> &'static str {
  if b {
    "True"
  } else {
    "False"
  }
}

async fn connect_with_retries(
  host: &str,
  port: u16,
  config: &ClientConfig,
) -> Result<TcpStream, ClientError> {
  let addr = format!("{host}:{port}");
  let mut attempt = 0;
  loop {
    match TcpStream::connect(&addr).await {
      Ok(stream) => return Ok(stream),
      Err(e) => {
        attempt += 1;
        if attempt >= config.connect_retries {
          return Err(ClientError::ConnectionError(format!(
            "failed to connect to {addr} after {attempt} attempts: {e}"
          )));
        }
        warn!("connect to {addr} failed ({e}), retrying ({attempt}/{})", config.connect_retries);
        sleep(config.connect_backoff).await;
      }
    }
  }
}
