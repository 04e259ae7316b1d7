//! Core model for data-contract aware schema generation.
//!
//! - [`descriptor`] - type and member snapshots with their annotations
//! - [`property`] - resolved schema properties
//! - [`resolve`] - the member inclusion and naming rules

pub mod descriptor;
pub mod property;
pub mod resolve;

pub use descriptor::{MemberAnnotation, MemberDescriptor, SerializationAnnotation, TypeDescriptor};
pub use property::{PropertyMap, SchemaProperty};
pub use resolve::{Exclusion, MemberResolution, resolve, resolve_member};
