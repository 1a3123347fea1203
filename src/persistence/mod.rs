pub mod files;
pub mod habits;
pub mod store;

pub use files::{ensure_dir, init_local_dir, log_file, resolve_data_dir};
pub use habits::{clear_habits, load_habits, save_habits};
pub use store::{FileStore, KeyValueStore, MemoryStore};
