pub mod census;
pub use census::*;

pub mod meld;
pub use meld::*;

pub mod oracle;
pub use oracle::*;
