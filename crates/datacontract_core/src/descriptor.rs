//! Type and member descriptors.
//!
//! A [`TypeDescriptor`] is an immutable snapshot of the metadata attached to a
//! type: whether it opted into data-contract member selection, and for each
//! member the annotations that influence its schema property.

use serde::{Deserialize, Serialize};

/// Snapshot of one type under inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Schema name of the type
    pub name: String,
    /// Whether only explicitly annotated members are considered
    #[serde(default)]
    pub has_contract_marker: bool,
    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    /// Create a descriptor without a contract marker and without members
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_contract_marker: false,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_contract_marker(mut self) -> Self {
        self.has_contract_marker = true;
        self
    }

    /// Append a member after the ones already declared
    #[must_use]
    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }
}

/// Snapshot of one field or property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    /// Source identifier
    pub declared_name: String,
    /// Contract-member marker, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_annotation: Option<MemberAnnotation>,
    /// Serialization-library naming annotation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialization_annotation: Option<SerializationAnnotation>,
    /// Explicit exclusion marker
    #[serde(default)]
    pub ignore_annotation: bool,
}

impl MemberDescriptor {
    /// Create an unannotated member
    #[must_use]
    pub fn new(declared_name: impl Into<String>) -> Self {
        Self {
            declared_name: declared_name.into(),
            member_annotation: None,
            serialization_annotation: None,
            ignore_annotation: false,
        }
    }

    #[must_use]
    pub fn with_member_annotation(mut self, annotation: MemberAnnotation) -> Self {
        self.member_annotation = Some(annotation);
        self
    }

    #[must_use]
    pub fn with_serialization_name(mut self, name: impl Into<String>) -> Self {
        self.serialization_annotation = Some(SerializationAnnotation { name: name.into() });
        self
    }

    #[must_use]
    pub fn ignored(mut self) -> Self {
        self.ignore_annotation = true;
        self
    }
}

/// Contract-member annotation: optional override name and required flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAnnotation {
    /// Override name; `None` or empty means "use the next name source"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub is_required: bool,
}

impl MemberAnnotation {
    /// Bare annotation: no name override, not required
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            is_required: false,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }
}

/// Serialization-library naming annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializationAnnotation {
    pub name: String,
}
