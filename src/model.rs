use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Common interface of every request, response and nested model
///
/// `Default` is the empty model and `Clone` gives value-copy semantics.
/// Decoding looks up every field by its own key: missing keys and `null`
/// values leave fields at their defaults, so decoding `null` itself gives
/// `Self::default()`.
pub trait Model: Serialize + DeserializeOwned + Default + Clone {
    fn from_json(value: &Value) -> serde_json::Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }

        <Self as Deserialize>::deserialize(value)
    }

    /// Encode the model, writing every field including empty ones
    #[inline]
    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn from_json_str(json: &str) -> serde_json::Result<Self> {
        Self::from_json(&serde_json::from_str::<Value>(json)?)
    }

    #[inline]
    fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<T> Model for T where T: Serialize + DeserializeOwned + Default + Clone {}
