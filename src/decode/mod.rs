pub mod list;
pub mod tick_table;

pub use list::{decode_dates, decode_strikes, decode_tokens};
pub use tick_table::{decode as decode_tick_table, Cell, TickTable};
