mod daily;
mod file_storage;
#[cfg(test)]
mod memory;

pub use daily::DailyStateStore;
pub use file_storage::FileStorage;
#[cfg(test)]
pub use memory::MemoryStorage;

/// Durable, synchronous, string-keyed persistence backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

