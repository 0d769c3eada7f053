use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

/// Closed set of symbolic values with one fixed wire string per value
///
/// Implemented by every enumeration declared with `wire_enum!`.
/// Encoding is total, decoding is partial:
///
/// ```
/// use playfab_core::prelude::*;
/// use playfab_core::cloud_script::models::ContinentCode;
///
/// assert_eq!(ContinentCode::EU.as_str(), "EU");
/// assert_eq!(ContinentCode::from_wire("EU"), Some(ContinentCode::EU));
/// assert_eq!(ContinentCode::from_wire("Atlantis"), None);
/// ```
pub trait WireEnum: Sized + Copy + Eq + Hash + Debug + 'static {
    /// Name of the enumeration, used in diagnostics
    const NAME: &'static str;

    /// Every value in declaration order
    fn list() -> &'static [Self];

    /// Canonical wire string of the value
    fn as_str(&self) -> &'static str;

    /// Try to find a value by its wire string
    fn from_wire(value: &str) -> Option<Self>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {name} value: {value}")]
pub struct UnknownVariant {
    pub name: &'static str,
    pub value: String
}
