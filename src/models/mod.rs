pub mod direction;
pub mod percent;
pub mod trade;

pub use direction::*;
pub use percent::{Percent, Ratio};
pub use trade::Trade;
