pub mod acquisition;
pub mod dashboard;
pub mod record;
pub mod sample;
pub mod supply;

pub use acquisition::*;
pub use dashboard::*;
pub use record::*;
pub use supply::*;
