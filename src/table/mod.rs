pub mod exporter;
pub use exporter::*;

pub mod format;
pub use format::*;

pub mod lookup;
pub use lookup::*;

pub mod progress;
pub use progress::*;

pub mod reader;
pub use reader::*;

pub mod record;
pub use record::*;

pub mod summary;
pub use summary::*;

pub mod writer;
pub use writer::*;
