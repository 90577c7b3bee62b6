pub mod config;
pub mod remote;
pub mod render;
pub mod session;

pub use config::{Config, DataSource};
pub use remote::RemoteSupplier;
pub use session::{load, load_from_config};
