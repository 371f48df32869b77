//! End-to-end tests against an in-process mock Terminal: a bare
//! `tokio::net::TcpListener` task that serves canned control- and
//! stream-socket responses, exercising the public surface the same way a
//! live Terminal connection would.

use std::time::Duration;

use byteorder::{BigEndian, ByteOrder};
use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use thetadata_client::{
  decode_tick_table, ClientConfig, ClientError, Header, MessageType, OptionReqType, OptionRight,
  RequestClient, SecType, StockReqType, StreamEvent,
};

async fn test_config(request_port: u16, stream_port: u16) -> ClientConfig {
  ClientConfig::builder()
    .host("127.0.0.1")
    .request_port(request_port)
    .stream_port(stream_port)
    .connect_retries(3)
    .connect_backoff(Duration::from_millis(5))
    .request_timeout(Duration::from_secs(5))
    .stream_timeout(Duration::from_secs(2))
    .build()
}

fn encode_header(message_type: u16, format_len: u8, body_size: u32) -> [u8; 20] {
  let mut buf = [0u8; 20];
  BigEndian::write_u16(&mut buf[0..2], message_type);
  BigEndian::write_u64(&mut buf[2..10], 0);
  BigEndian::write_u16(&mut buf[10..12], 0);
  BigEndian::write_u16(&mut buf[12..14], 0);
  buf[15] = format_len;
  BigEndian::write_u32(&mut buf[16..20], body_size);
  buf
}

fn push_i32(buf: &mut Vec<u8>, v: i32) {
  buf.extend_from_slice(&v.to_be_bytes());
}

/// Accept one control-socket connection, discard the version handshake line,
/// discard the next request line, then write a single canned response.
async fn serve_one_control_response(listener: TcpListener, message_type: u16, format_len: u8, body: Vec<u8>) {
  let (mut socket, _) = listener.accept().await.unwrap();
  let mut reader = tokio::io::BufReader::new(&mut socket);
  let mut line = String::new();
  reader.read_line(&mut line).await.unwrap(); // handshake
  line.clear();
  reader.read_line(&mut line).await.unwrap(); // the real request

  let header = encode_header(message_type, format_len, body.len() as u32);
  socket.write_all(&header).await.unwrap();
  socket.write_all(&body).await.unwrap();
  // Keep the connection open briefly so the client finishes its read.
  tokio::time::sleep(Duration::from_millis(20)).await;
}

fn encode_stock_contract(root: &str) -> Vec<u8> {
  let mut v = vec![0u8, root.len() as u8];
  v.extend_from_slice(root.as_bytes());
  v.push(0); // is_option = false
  v[0] = v.len() as u8;
  v
}

fn encode_option_contract(root: &str, exp: u32, is_call: bool, strike_milli: u32) -> Vec<u8> {
  let mut v = vec![0u8, root.len() as u8];
  v.extend_from_slice(root.as_bytes());
  v.push(1);
  v.extend_from_slice(&exp.to_be_bytes());
  v.push(if is_call { 1 } else { 0 });
  v.push(0);
  v.extend_from_slice(&strike_milli.to_be_bytes());
  v[0] = v.len() as u8;
  v
}

#[tokio::test]
async fn historical_eod_option_single_day() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let stream_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let stream_addr = stream_listener.local_addr().unwrap();
  drop(stream_listener);

  // columns: DATE, OPEN, HIGH, LOW, CLOSE, VOLUME, COUNT, PRICE_TYPE
  let mut body = Vec::new();
  for code in [0i32, 191, 192, 193, 194, 141, 142, 4] {
    push_i32(&mut body, code);
  }
  push_i32(&mut body, 20221115);
  push_i32(&mut body, 15000);
  push_i32(&mut body, 15200);
  push_i32(&mut body, 14900);
  push_i32(&mut body, 15100);
  push_i32(&mut body, 1000);
  push_i32(&mut body, 50);
  push_i32(&mut body, 8); // price_type -> 1e-2
  for _ in 0..8 {
    push_i32(&mut body, 0);
  }

  let server = tokio::spawn(serve_one_control_response(
    listener,
    MessageType::Hist.code(),
    8,
    body,
  ));

  let client = RequestClient::connect(test_config(addr.port(), stream_addr.port()).await)
    .await
    .unwrap();
  let table = client
    .get_hist_option(
      "AAPL",
      NaiveDate::from_ymd_opt(2022, 12, 16).unwrap(),
      150_000,
      OptionRight::Call,
      OptionReqType::Eod,
      NaiveDate::from_ymd_opt(2022, 11, 15).unwrap(),
      NaiveDate::from_ymd_opt(2022, 11, 15).unwrap(),
      0,
      true,
    )
    .await
    .unwrap();

  assert_eq!(table.rows.len(), 1);
  server.await.unwrap();
}

#[tokio::test]
async fn strike_listing_is_exact_decimal() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let stream_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let stream_addr = stream_listener.local_addr().unwrap();
  drop(stream_listener);

  let server = tokio::spawn(serve_one_control_response(
    listener,
    MessageType::AllStrikes.code(),
    0,
    b"140000,145000,150000".to_vec(),
  ));

  let client = RequestClient::connect(test_config(addr.port(), stream_addr.port()).await)
    .await
    .unwrap();
  let strikes = client
    .get_strikes("AAPL", NaiveDate::from_ymd_opt(2022, 12, 16).unwrap())
    .await
    .unwrap();

  assert_eq!(strikes[0].to_string(), "140.000");
  assert_eq!(strikes[1].to_string(), "145.000");
  assert_eq!(strikes[2].to_string(), "150.000");
  server.await.unwrap();
}

#[tokio::test]
async fn no_data_error_body_is_classified() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let stream_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let stream_addr = stream_listener.local_addr().unwrap();
  drop(stream_listener);

  let body = b"No data for the specified contract".to_vec();
  let server = tokio::spawn(serve_one_control_response(
    listener,
    MessageType::Error.code(),
    0,
    body,
  ));

  let client = RequestClient::connect(test_config(addr.port(), stream_addr.port()).await)
    .await
    .unwrap();
  let result = client.get_last_stock("AAPL", StockReqType::Quote).await;
  assert!(matches!(result, Err(ClientError::NoData(_))));
  server.await.unwrap();
}

#[tokio::test]
async fn full_feed_trade_subscription_verifies_and_decodes() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let stream_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let stream_addr = stream_listener.local_addr().unwrap();

  let control_server = tokio::spawn(async move {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut reader = tokio::io::BufReader::new(&mut socket);
    let mut line = String::new();
    reader.read_line(&mut line).await.unwrap(); // handshake only
    tokio::time::sleep(Duration::from_millis(50)).await;
  });

  let stream_server = tokio::spawn(async move {
    let (mut socket, _) = stream_listener.accept().await.unwrap();

    // REQ_RESPONSE: contract (dummy, empty-root stock), req_id=0, code=SUBSCRIBED(0)
    let ack_contract = encode_stock_contract("");
    let mut frame = vec![40u8];
    frame.extend_from_slice(&ack_contract);
    frame.extend_from_slice(&0u32.to_be_bytes());
    frame.extend_from_slice(&0u32.to_be_bytes());
    socket.write_all(&frame).await.unwrap();

    // TRADE frame for {AAPL 2022-12-16 150 CALL}, price_raw=1234, price_type=8
    let contract = encode_option_contract("AAPL", 20221216, true, 150_000);
    let mut trade_frame = vec![22u8];
    trade_frame.extend_from_slice(&contract);
    trade_frame.extend_from_slice(&0u32.to_be_bytes()); // ms_of_day
    trade_frame.extend_from_slice(&1u32.to_be_bytes()); // sequence
    trade_frame.extend_from_slice(&1u32.to_be_bytes()); // size
    trade_frame.extend_from_slice(&0u32.to_be_bytes()); // condition
    trade_frame.extend_from_slice(&1234i32.to_be_bytes()); // price_raw
    trade_frame.extend_from_slice(&0u32.to_be_bytes()); // exchange
    trade_frame.extend_from_slice(&8u32.to_be_bytes()); // price_type
    trade_frame.extend_from_slice(&20221216u32.to_be_bytes()); // date
    socket.write_all(&trade_frame).await.unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
  });

  let client = RequestClient::connect(test_config(addr.port(), stream_addr.port()).await)
    .await
    .unwrap();
  let mut session = client.connect_stream().await.unwrap();
  let mut events = session.events();

  let req_id = session.subscribe_full_trade().await.unwrap();
  let outcome = session.verify(req_id).await.unwrap();
  assert_eq!(outcome, thetadata_client::VerifyOutcome::Subscribed);

  let _ack_event = events.recv().await.unwrap();
  let trade_event = events.recv().await.unwrap();
  match trade_event {
    StreamEvent::Trade { contract, trade } => {
      assert_eq!(contract.root, "AAPL");
      assert!((trade.price - 12.34).abs() < 1e-9);
    }
    other => panic!("expected Trade, got {other:?}"),
  }

  control_server.await.unwrap();
  stream_server.await.unwrap();
}

#[test]
fn sentinel_row_is_trimmed_from_decoded_table() {
  // columns: SEQUENCE, SIZE — 2 data rows followed by a sentinel row of zeros.
  let mut body = Vec::new();
  push_i32(&mut body, 131);
  push_i32(&mut body, 132);
  push_i32(&mut body, 1);
  push_i32(&mut body, 100);
  push_i32(&mut body, 2);
  push_i32(&mut body, 200);
  push_i32(&mut body, 0);
  push_i32(&mut body, 0);

  let header = Header {
    message_type: MessageType::Hist.code(),
    id: 0,
    latency: 0,
    error: 0,
    format_len: 2,
    body_size: body.len() as u32,
  };
  let table = decode_tick_table(&header, &body).unwrap();
  assert_eq!(table.rows.len(), 2);
}

#[tokio::test]
async fn request_after_kill_fails() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let stream_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let stream_addr = stream_listener.local_addr().unwrap();
  drop(stream_listener);

  let server = tokio::spawn(async move {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut reader = tokio::io::BufReader::new(&mut socket);
    let mut line = String::new();
    reader.read_line(&mut line).await.unwrap(); // handshake
    line.clear();
    reader.read_line(&mut line).await.unwrap(); // KILL request
    drop(socket);
  });

  let client = RequestClient::connect(test_config(addr.port(), stream_addr.port()).await)
    .await
    .unwrap();
  client.kill().await.unwrap();
  server.await.unwrap();

  let result = client.get_last_stock("AAPL", StockReqType::Quote).await;
  assert!(matches!(
    result,
    Err(ClientError::ConnectionError(_)) | Err(ClientError::Timeout(_))
  ));
}
