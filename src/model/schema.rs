/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Base contract for request and response payloads
//!
//! Every payload type implements [`Schema`]. Fields follow one population
//! policy: input may spell a field by its wire name or by its Rust name, and
//! serialisation always emits the wire name.
//!
//! Payloads declared with [`schema!`](crate::schema) get the policy from the
//! declaration itself: `field as "wireName"` sets the wire name and the Rust
//! name is accepted on input.
//!
//! ```
//! use http_api_client::model::schema::Schema;
//! use http_api_client::schema;
//!
//! schema! {
//!     #[derive(Debug)]
//!     pub struct Pet {
//!         pub class_name as "class": String,
//!     }
//! }
//!
//! let by_alias = Pet::from_json(r#"{"class": "cat"}"#).unwrap();
//! let by_name = Pet::from_json(r#"{"class_name": "cat"}"#).unwrap();
//! assert_eq!(by_alias.class_name, by_name.class_name);
//! assert_eq!(by_name.to_json().unwrap(), r#"{"class":"cat"}"#);
//! ```
//!
//! Hand-written serde types can join through [`impl_schema!`](crate::impl_schema),
//! declaring `#[serde(rename = "wire", alias = "field")]` themselves.

use crate::error::AppError;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shared base for payload schemas
pub trait Schema: Serialize + DeserializeOwned {
    /// `(rust_name, wire_name)` pairs of renamed fields
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[];

    /// Populates the schema from decoded JSON
    ///
    /// # Errors
    /// Returns `AppError::Validation` when required fields are missing or
    /// values have the wrong shape.
    fn from_value(mut value: Value) -> Result<Self, AppError> {
        canonicalize(&mut value, Self::FIELD_ALIASES);
        parse_as(value)
    }

    /// Populates the schema from JSON text
    ///
    /// # Errors
    /// Returns `AppError::Validation` when the text is not valid JSON or does
    /// not fit the schema.
    fn from_json(text: &str) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| AppError::Validation(e.to_string()))?;
        Self::from_value(value)
    }

    /// Serialises the schema using wire spellings
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if a field cannot be represented as JSON.
    fn to_wire(&self) -> Result<Value, AppError> {
        serde_json::to_value(self).map_err(|e| AppError::Serialization(e.to_string()))
    }

    /// Serialises the schema to JSON text using wire spellings
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if a field cannot be represented as JSON.
    fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

/// Parses decoded JSON into any deserialisable shape, e.g. `Vec<T>` of schemas
///
/// # Errors
/// Returns `AppError::Validation` when `value` does not fit `T`.
pub fn parse_as<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))
}

/// Rewrites Rust field names in a JSON object to their wire names
///
/// A wire name already present wins over the Rust spelling of the same
/// field. Values that are not objects are left alone.
pub fn canonicalize(value: &mut Value, aliases: &[(&str, &str)]) {
    let Value::Object(map) = value else {
        return;
    };
    for &(name, wire) in aliases {
        if name == wire {
            continue;
        }
        if let Some(field) = map.remove(name) {
            if !map.contains_key(wire) {
                map.insert(wire.to_string(), field);
            }
        }
    }
}

/// Deserialises a value by its wire names after canonicalising Rust names
///
/// Used by the `Deserialize` impls that [`schema!`](crate::schema) generates.
///
/// # Errors
/// Any error from `deserializer`, or a custom error if the input does not
/// fit `T`.
#[doc(hidden)]
pub fn deserialize_with_aliases<'de, D, T>(
    deserializer: D,
    aliases: &[(&str, &str)],
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let mut value = Value::deserialize(deserializer)?;
    canonicalize(&mut value, aliases);
    serde_json::from_value(value).map_err(D::Error::custom)
}

/// Declares a payload struct that implements [`Schema`]
///
/// `field as "wireName": Type` serialises the field as `wireName` and accepts
/// either spelling on input. Fields without `as` use their Rust name on the
/// wire. Field attributes such as `#[serde(default)]` are passed through.
///
/// The generated type implements `Serialize`, `Deserialize` and [`Schema`],
/// so nested payloads declared this way follow the same policy.
///
/// ```
/// use http_api_client::model::schema::Schema;
/// use http_api_client::schema;
///
/// schema! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Owner {
///         pub id: u64,
///         #[serde(default)]
///         pub display_name as "displayName": Option<String>,
///     }
/// }
///
/// let owner = Owner::from_json(r#"{"id": 1, "display_name": "Ann"}"#).unwrap();
/// assert_eq!(owner.display_name.as_deref(), Some("Ann"));
/// assert_eq!(Owner::FIELD_ALIASES, &[("display_name", "displayName")]);
/// ```
#[macro_export]
macro_rules! schema {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident $(as $wire:literal)? : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(::serde::Serialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $(#[serde(rename = $wire)])?
                $field_vis $field: $ty,
            )*
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                struct WireFormat {
                    $(
                        $(#[$field_meta])*
                        $(#[serde(rename = $wire)])?
                        $field: $ty,
                    )*
                }

                let wire: WireFormat = $crate::model::schema::deserialize_with_aliases(
                    deserializer,
                    <$name as $crate::model::schema::Schema>::FIELD_ALIASES,
                )?;
                ::std::result::Result::Ok($name {
                    $($field: wire.$field,)*
                })
            }
        }

        impl $crate::model::schema::Schema for $name {
            const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[
                $($((stringify!($field), $wire),)?)*
            ];
        }
    };
}

/// Implements [`Schema`] for a list of payload types
///
/// ```
/// use http_api_client::impl_schema;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Tag { name: String }
///
/// #[derive(Serialize, Deserialize)]
/// struct Owner { id: u64 }
///
/// impl_schema!(Tag, Owner);
/// ```
#[macro_export]
macro_rules! impl_schema {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::schema::Schema for $ty {}
        )+
    };
}
