use byteorder::{BigEndian, ByteOrder};
use chrono::NaiveDate;

use crate::date::parse_yyyymmdd;
use crate::errors::ClientError;
use crate::models::{price_type_multiplier, DataType};
use crate::wire::Header;

/// One decoded cell, tagged by its column's `DataType`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Cell {
  Int(i32),
  Price(f64),
  Date(NaiveDate),
}

/// A decoded tick-format response: column descriptors plus the data rows.
///
/// The `PRICE_TYPE` column, if present in the wire body, is consumed during
/// decoding and never appears in `columns`/`rows`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TickTable {
  pub columns: Vec<DataType>,
  pub rows: Vec<Vec<Cell>>,
}

/// Decode a tick-format response body per its header's `format_len`.
pub fn decode(header: &Header, body: &[u8]) -> Result<TickTable, ClientError> {
  let format_len = header.format_len as usize;
  if format_len == 0 {
    return Err(ClientError::ParseError(
      "tick response has format_len == 0".to_string(),
    ));
  }
  if body.is_empty() {
    return Err(ClientError::ParseError(
      "tick response has an empty body".to_string(),
    ));
  }
  let row_bytes = format_len * 4;
  if body.len() % row_bytes != 0 {
    return Err(ClientError::ParseError(format!(
      "body size {} is not a multiple of format_len*4 ({})",
      body.len(),
      row_bytes
    )));
  }
  let total_rows = body.len() / row_bytes;
  if total_rows < 1 {
    return Err(ClientError::ParseError(
      "tick response has no format row".to_string(),
    ));
  }

  let columns: Vec<DataType> = (0..format_len)
    .map(|i| {
      let raw = BigEndian::read_i32(&body[i * 4..i * 4 + 4]);
      DataType::from_code(raw)
    })
    .collect::<Result<_, _>>()?;

  let mut raw_rows: Vec<Vec<i32>> = Vec::with_capacity(total_rows.saturating_sub(1));
  for row_idx in 1..total_rows {
    let row_start = row_idx * row_bytes;
    let mut row = Vec::with_capacity(format_len);
    for col in 0..format_len {
      let off = row_start + col * 4;
      row.push(BigEndian::read_i32(&body[off..off + 4]));
    }
    raw_rows.push(row);
  }

  if let Some(last) = raw_rows.last() {
    if last.iter().all(|&v| v == 0) {
      raw_rows.pop();
    }
  }

  let price_type_idx = columns.iter().position(|c| matches!(c, DataType::PriceType));

  let mut rows = Vec::with_capacity(raw_rows.len());
  for raw in &raw_rows {
    let multiplier = match price_type_idx {
      Some(idx) => price_type_multiplier(raw[idx])?,
      None => 1.0,
    };
    let mut cells = Vec::with_capacity(columns.len());
    for (col_idx, dtype) in columns.iter().enumerate() {
      if matches!(dtype, DataType::PriceType) {
        continue;
      }
      let raw_val = raw[col_idx];
      let cell = if dtype.is_price() {
        Cell::Price(raw_val as f64 * multiplier)
      } else if dtype.is_date() {
        Cell::Date(parse_yyyymmdd(raw_val)?)
      } else {
        Cell::Int(raw_val)
      };
      cells.push(cell);
    }
    rows.push(cells);
  }

  let columns: Vec<DataType> = columns
    .into_iter()
    .filter(|c| !matches!(c, DataType::PriceType))
    .collect();

  Ok(TickTable { columns, rows })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn header(format_len: u8, body_size: u32) -> Header {
    Header {
      message_type: 200,
      id: 1,
      latency: 0,
      error: 0,
      format_len,
      body_size,
    }
  }

  fn push_i32(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_be_bytes());
  }

  #[test]
  fn decodes_eod_table_with_price_type_and_date() {
    // columns: DATE, OPEN, CLOSE, PRICE_TYPE
    let mut body = Vec::new();
    for code in [0i32, 191, 194, 4] {
      push_i32(&mut body, code);
    }
    // one data row
    push_i32(&mut body, 20221115); // date
    push_i32(&mut body, 15000); // open raw
    push_i32(&mut body, 15100); // close raw
    push_i32(&mut body, 8); // price_type -> 1e-2
    // sentinel row
    for _ in 0..4 {
      push_i32(&mut body, 0);
    }

    let h = header(4, body.len() as u32);
    let table = decode(&h, &body).unwrap();
    assert_eq!(table.columns, vec![DataType::Date, DataType::Open, DataType::Close]);
    assert_eq!(table.rows.len(), 1);
    match table.rows[0][0] {
      Cell::Date(d) => assert_eq!(d, NaiveDate::from_ymd_opt(2022, 11, 15).unwrap()),
      ref other => panic!("expected Date, got {other:?}"),
    }
    match table.rows[0][1] {
      Cell::Price(p) => assert!((p - 150.0).abs() < 1e-9),
      ref other => panic!("expected Price, got {other:?}"),
    }
  }

  #[test]
  fn empty_body_is_an_error() {
    let h = header(2, 0);
    assert!(decode(&h, &[]).is_err());
  }

  #[test]
  fn misaligned_body_is_an_error() {
    let h = header(2, 7);
    assert!(decode(&h, &[0u8; 7]).is_err());
  }

  #[test]
  fn non_sentinel_last_row_is_kept() {
    // columns: SEQUENCE, SIZE
    let mut body = Vec::new();
    push_i32(&mut body, 131);
    push_i32(&mut body, 132);
    push_i32(&mut body, 1);
    push_i32(&mut body, 100);
    let h = header(2, body.len() as u32);
    let table = decode(&h, &body).unwrap();
    assert_eq!(table.rows.len(), 1);
  }
}
