/// Declare a closed enumeration together with its wire strings
///
/// ```ignore
/// wire_enum! {
///     pub enum ExperimentType {
///         Active => "Active",
///         Snapshot => "Snapshot"
///     }
/// }
/// ```
///
/// Generates `as_str`, `from_wire`, `list`, `Display`, `FromStr`, serde
/// impls (strict deserialization) and the `WireEnum` trait impl used by
/// the lenient field helpers from `json`.
///
/// `Default` is the first declared value.
macro_rules! wire_enum {
    (@first $first:ident $($rest:ident)*) => {
        Self::$first
    };

    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            const WIRE_NAMES: &'static [&'static str] = &[$($wire),+];

            #[inline]
            pub fn list() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)+
                    _ => None
                }
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                wire_enum!(@first $($variant)+)
            }
        }

        impl $crate::wire::WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn list() -> &'static [Self] {
                $name::list()
            }

            #[inline]
            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            #[inline]
            fn from_wire(value: &str) -> Option<Self> {
                $name::from_wire(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::wire::UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_wire(value).ok_or_else(|| $crate::wire::UnknownVariant {
                    name: stringify!($name),
                    value: value.to_string()
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;

                Self::from_wire(&value)
                    .ok_or_else(|| serde::de::Error::unknown_variant(&value, Self::WIRE_NAMES))
            }
        }
    };
}

/// Declare blocking route functions of an API namespace
///
/// Every entry expands into `pub fn name(client, request) -> Result<Response, PlayFabError>`
/// which posts `request` to the given route with the given credentials kind.
macro_rules! api_calls {
    (
        $(
            $(#[$meta:meta])*
            fn $name:ident($route:literal, $auth:ident): $request:ty => $response:ty;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[tracing::instrument(level = "trace", skip(client, request))]
            pub fn $name(
                client: &$crate::client::PlayFabClient,
                request: &$request
            ) -> Result<$response, $crate::error::PlayFabError> {
                client.post($route, $crate::auth::AuthKind::$auth, request)
            }
        )+
    };
}
