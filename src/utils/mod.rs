pub mod clock;
pub mod kv_store;
pub mod time_format;
