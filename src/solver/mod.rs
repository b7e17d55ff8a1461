pub mod audit;
pub use audit::*;

pub mod extras;
pub use extras::*;

pub mod outcome;
pub use outcome::*;

pub mod search;
pub use search::*;

pub mod shortcut;
pub use shortcut::*;
