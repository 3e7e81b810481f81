//! Key/value store port
//!
//! The durable storage the snapshot store writes through.

/// String-keyed durable storage
///
/// Implementations must replace a value atomically: a reader sees either the
/// previous value or the new one, never a mix.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key was never set or was deleted
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn delete(&self, key: &str) -> anyhow::Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> anyhow::Result<()> {
        (**self).delete(key)
    }
}
