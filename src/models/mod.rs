mod contract;
mod data_type;
mod exchange;
mod message_type;
mod quote_condition;
mod sec_type;
mod stream_types;
mod trade_condition;

pub use self::contract::Contract;
pub use self::data_type::{price_type_multiplier, DataType};
pub use self::exchange::Exchange;
pub use self::message_type::MessageType;
pub use self::quote_condition::QuoteCondition;
pub use self::sec_type::{OptionReqType, OptionRight, SecType, StockReqType};
pub use self::stream_types::{StreamMsgType, StreamResponseType};
pub use self::trade_condition::TradeCondition;
