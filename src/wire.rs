//! Binary framing for the request and stream sockets: a fixed 20-byte header
//! followed by a length-prefixed body, and the ASCII key/value request line
//! the Terminal expects on the control socket.

use byteorder::{BigEndian, ByteOrder};
use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::errors::ClientError;
use crate::models::MessageType;

/// Header preceding every response body on the request socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
  pub message_type: u16,
  pub id: u64,
  pub latency: u16,
  pub error: u16,
  pub format_len: u8,
  pub body_size: u32,
}

const HEADER_LEN: usize = 20;
/// Bounded chunk size for body reads, mirroring the Terminal client's own
/// partial-read loop so a single huge `body_size` can't force one giant
/// allocation-then-read in one syscall.
const BODY_CHUNK: usize = 4096;

impl Header {
  /// Parse the fixed 20-byte header.
  ///
  /// Byte layout (big-endian): `message_type:u16 | id:u64 | latency:u16 |
  /// error:u16 | reserved:u8 | format_len:u8 | body_size:u32`.
  pub fn parse(buf: &[u8; HEADER_LEN]) -> Self {
    Header {
      message_type: BigEndian::read_u16(&buf[0..2]),
      id: BigEndian::read_u64(&buf[2..10]),
      latency: BigEndian::read_u16(&buf[10..12]),
      error: BigEndian::read_u16(&buf[12..14]),
      // buf[14] is reserved.
      format_len: buf[15],
      body_size: BigEndian::read_u32(&buf[16..20]),
    }
  }

  pub fn is_error(&self) -> bool {
    self.message_type == MessageType::Error.code()
  }
}

/// Read exactly one 20-byte header from `stream`.
pub async fn read_header(stream: &mut TcpStream) -> Result<Header, ClientError> {
  let mut buf = [0u8; HEADER_LEN];
  stream
    .read_exact(&mut buf)
    .await
    .map_err(|e| ClientError::ConnectionError(format!("reading header: {e}")))?;
  Ok(Header::parse(&buf))
}

/// Read exactly `size` body bytes from `stream` in bounded chunks.
pub async fn read_body(stream: &mut TcpStream, size: u32) -> Result<Bytes, ClientError> {
  let mut out = BytesMut::with_capacity(size as usize);
  let mut remaining = size as usize;
  while remaining > 0 {
    let take = remaining.min(BODY_CHUNK);
    let start = out.len();
    out.resize(start + take, 0);
    stream
      .read_exact(&mut out[start..start + take])
      .await
      .map_err(|e| ClientError::ConnectionError(format!("reading body: {e}")))?;
    remaining -= take;
  }
  Ok(out.freeze())
}

/// Build a single key/value request line: `MSG_CODE=<code>&k1=v1&k2=v2\n`.
pub fn encode_kv(msg_code: u16, fields: &[(&str, &str)]) -> Vec<u8> {
  let mut line = format!("MSG_CODE={msg_code}");
  for (key, value) in fields {
    line.push('&');
    line.push_str(key);
    line.push('=');
    line.push_str(value);
  }
  line.push('\n');
  line.into_bytes()
}

/// Write a request line to the control socket.
pub async fn write_request(
  stream: &mut TcpStream,
  msg_code: u16,
  fields: &[(&str, &str)],
) -> Result<(), ClientError> {
  write_request_to(stream, msg_code, fields).await
}

/// Write a request line to an owned write half (used by the stream socket,
/// which keeps its write half separate from the receiver's read half).
pub async fn write_request_half(
  stream: &mut tokio::net::tcp::OwnedWriteHalf,
  msg_code: u16,
  fields: &[(&str, &str)],
) -> Result<(), ClientError> {
  write_request_to(stream, msg_code, fields).await
}

async fn write_request_to<W: AsyncWriteExt + Unpin>(
  writer: &mut W,
  msg_code: u16,
  fields: &[(&str, &str)],
) -> Result<(), ClientError> {
  let bytes = encode_kv(msg_code, fields);
  writer
    .write_all(&bytes)
    .await
    .map_err(|e| ClientError::ConnectionError(format!("writing request: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn header_parses_big_endian_fields() {
    let mut buf = [0u8; HEADER_LEN];
    BigEndian::write_u16(&mut buf[0..2], 200);
    BigEndian::write_u64(&mut buf[2..10], 42);
    BigEndian::write_u16(&mut buf[10..12], 5);
    BigEndian::write_u16(&mut buf[12..14], 0);
    buf[15] = 3;
    BigEndian::write_u32(&mut buf[16..20], 48);

    let header = Header::parse(&buf);
    assert_eq!(header.message_type, 200);
    assert_eq!(header.id, 42);
    assert_eq!(header.latency, 5);
    assert_eq!(header.format_len, 3);
    assert_eq!(header.body_size, 48);
    assert!(!header.is_error());
  }

  #[test]
  fn encode_kv_builds_expected_line() {
    let line = encode_kv(200, &[("root", "AAPL"), ("sec", "STOCK")]);
    assert_eq!(line, b"MSG_CODE=200&root=AAPL&sec=STOCK\n");
  }
}
