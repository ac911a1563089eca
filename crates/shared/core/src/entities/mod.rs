mod order;
mod side;
mod story;
mod ticker;

pub use order::{Order, OrderSeq};
pub use side::Side;
pub use story::Story;
pub use ticker::Ticker;
