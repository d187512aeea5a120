use serde::{Deserialize, Serialize};

/// Asana `{"data": ...}` envelope, used for requests and responses.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AsanaData<T> {
    /// Wrapped value.
    pub data: T,
}

impl<T> AsanaData<T> {
    /// Wrap a value.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
