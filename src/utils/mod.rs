mod format;
mod time;

pub use format::{format_price, format_size};
pub use time::current_time_millis;
