pub mod codec;
pub mod files;
pub mod store;

pub use codec::{decode_tasks, decode_theme, encode_tasks, encode_theme, TASKS_KEY, THEME_KEY};
pub use files::{create_data_dir, get_data_dir, init_local_data_dir, read_file, LOG_FILE_NAME};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
