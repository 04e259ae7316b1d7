//! Datacontract - member selection for JSON Schema generation
//!
//! Decides which members of a type become schema properties, under which
//! names, and which are required, from the annotations on the type:
//!
//! ```ignore
//! use datacontract::DescribeType;
//!
//! #[derive(DescribeType)]
//! #[data_contract]
//! struct Person {
//!     #[data_member(name = "id", required)]
//!     person_id: u64,
//!     #[serde(rename = "displayName")]
//!     display_name: String,
//!     cache_key: String,
//! }
//!
//! let properties = Person::schema_properties();
//! assert!(properties.get("id").unwrap().is_required);
//! assert!(properties.contains_key("displayName"));
//! assert!(!properties.contains_key("cache_key"));
//! ```

extern crate self as datacontract;

pub use datacontract_core::{
    Exclusion, MemberAnnotation, MemberDescriptor, MemberResolution, PropertyMap, SchemaProperty,
    SerializationAnnotation, TypeDescriptor, resolve, resolve_member,
};
pub use datacontract_macro::DescribeType;

// Re-export serde_json so callers can hand resolved properties to an emitter
pub use serde_json;

/// Types that can describe their members for schema generation.
///
/// Usually derived with `#[derive(DescribeType)]`.
pub trait DescribeType {
    /// Snapshot of the type's members and annotations
    fn type_descriptor() -> TypeDescriptor;

    /// Resolved schema properties, in member declaration order
    fn schema_properties() -> PropertyMap {
        resolve(&Self::type_descriptor())
    }
}

/// Resolved schema properties of `T`
pub fn schema_properties<T: DescribeType>() -> PropertyMap {
    T::schema_properties()
}

/// Resolved schema properties of `T` as a JSON object
pub fn schema_properties_json<T: DescribeType>() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(T::schema_properties())
}
