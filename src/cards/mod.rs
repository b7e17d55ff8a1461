pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod rank;
pub use rank::*;

pub mod shard;
pub use shard::*;
