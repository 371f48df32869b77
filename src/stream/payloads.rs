//! Zero-copy views over the fixed-width payloads that follow a stream frame's
//! tag byte and contract. Each struct mirrors the wire layout exactly; the
//! receiver converts these into owned, price-scaled [`crate::stream::events::StreamEvent`]
//! payloads before handing them to the caller.

use zerocopy::big_endian::{I32 as BeI32, U32 as BeU32};
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

pub const QUOTE_SIZE: usize = 44;
pub const TRADE_SIZE: usize = 32;
pub const OHLCVC_SIZE: usize = 36;
pub const OPEN_INTEREST_SIZE: usize = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Unaligned, KnownLayout, Immutable, FromBytes)]
pub struct QuoteRaw {
  pub ms_of_day: BeU32,
  pub bid_size: BeU32,
  pub bid_exchange: BeU32,
  pub bid_price_raw: BeI32,
  pub bid_condition: BeU32,
  pub ask_size: BeU32,
  pub ask_exchange: BeU32,
  pub ask_price_raw: BeI32,
  pub ask_condition: BeU32,
  pub price_type: BeU32,
  pub date: BeU32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Unaligned, KnownLayout, Immutable, FromBytes)]
pub struct TradeRaw {
  pub ms_of_day: BeU32,
  pub sequence: BeU32,
  pub size: BeU32,
  pub condition: BeU32,
  pub price_raw: BeI32,
  pub exchange: BeU32,
  pub price_type: BeU32,
  pub date: BeU32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Unaligned, KnownLayout, Immutable, FromBytes)]
pub struct OhlcvcRaw {
  pub ms_of_day: BeU32,
  pub open_raw: BeI32,
  pub high_raw: BeI32,
  pub low_raw: BeI32,
  pub close_raw: BeI32,
  pub volume: BeU32,
  pub count: BeU32,
  pub price_type: BeU32,
  pub date: BeU32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Unaligned, KnownLayout, Immutable, FromBytes)]
pub struct OpenInterestRaw {
  pub open_interest: BeU32,
  pub date: BeU32,
}

#[cfg(test)]
mod tests {
  use super::*;
  use zerocopy::Ref;

  #[test]
  fn quote_raw_is_exactly_44_bytes() {
    assert_eq!(std::mem::size_of::<QuoteRaw>(), QUOTE_SIZE);
  }

  #[test]
  fn trade_raw_views_big_endian_fields() {
    let mut bytes = [0u8; TRADE_SIZE];
    bytes[4..8].copy_from_slice(&7u32.to_be_bytes()); // sequence
    let view = Ref::<_, TradeRaw>::from_bytes(&bytes[..]).unwrap();
    assert_eq!(view.sequence.get(), 7);
  }
}
