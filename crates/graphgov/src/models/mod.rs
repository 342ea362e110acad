//! Graph resource types used by the identity governance API.
//!
//! Every model is a property bag: all properties are optional, names follow
//! the service's camelCase JSON, and properties this client does not know
//! about are kept in `additional_data` so they survive a read-modify-write.
//!
//! Entity types embed [`Entity`] (flattened) for `id` and `@odata.type`, and
//! implement [`GraphEntity`] so collections of them can be indexed by id.

use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Defines a Graph enumeration.
///
/// Values serialize as their camelCase wire names. Each enumeration gets an
/// `UnknownFutureValue` member, which is also what any member added to the
/// service later deserializes into.
macro_rules! graph_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Sentinel for members this client does not know yet.
            UnknownFutureValue,
        }

        impl $name {
            /// Wire name of the member.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::UnknownFutureValue => "unknownFutureValue",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    "unknownFutureValue" => Ok(Self::UnknownFutureValue),
                    other => Err($crate::models::ParseEnumError {
                        enum_name: stringify!($name),
                        value: other.to_string(),
                    }),
                }
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
                Ok(value.parse().unwrap_or(Self::UnknownFutureValue))
            }
        }
    };
}

/// Declares which collections an entity type lives in.
macro_rules! graph_entity {
    ($($name:ident => $odata_type:literal, $key:literal;)+) => {
        $(
            impl $crate::models::GraphEntity for $name {
                const ODATA_TYPE: &'static str = $odata_type;
                const KEY: &'static str = $key;
            }
        )+
    };
}

mod access_reviews;
mod app_consent;
mod base;
mod entitlement_management;
mod enums;
mod identity_governance;
mod lifecycle_workflows;
mod privileged_access;
mod terms_of_use;

pub use access_reviews::*;
pub use app_consent::*;
pub use base::*;
pub use entitlement_management::*;
pub use enums::*;
pub use identity_governance::*;
pub use lifecycle_workflows::*;
pub use privileged_access::*;
pub use terms_of_use::*;

/// An entity type addressable by key inside a Graph collection.
pub trait GraphEntity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// OData type name, e.g. `#microsoft.graph.accessPackage`.
    const ODATA_TYPE: &'static str;

    /// Path parameter that holds the key when a collection of this type is
    /// indexed, e.g. `accessPackage%2Did`.
    const KEY: &'static str;
}

/// Error returned when a string is not a member of a Graph enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Name of the enumeration
    pub enum_name: &'static str,
    /// The rejected value
    pub value: String,
}

impl Display for ParseEnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} is not a valid {}", self.value, self.enum_name)
    }
}

impl std::error::Error for ParseEnumError {}
