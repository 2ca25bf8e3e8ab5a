mod file_key_value_store;
mod in_memory_key_value_store;
mod key_value_store;

pub use file_key_value_store::*;
pub use in_memory_key_value_store::*;
pub use key_value_store::*;
