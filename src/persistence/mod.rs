pub mod error;
pub mod files;
pub mod gateway;
pub mod store;

pub use error::PersistError;
pub use files::{ensure_data_dir, init_local_data_dir, log_file};
pub use gateway::{clear, load, save, Snapshot};
pub use store::{FileStore, KeyValueStore};
