//! Member inclusion and naming resolution.
//!
//! Decides, for every member of a [`TypeDescriptor`], whether it becomes a
//! schema property, under which name, and whether it is required.
//!
//! # Precedence
//!
//! From highest to lowest:
//!
//! 1. ignore annotation (always excludes)
//! 2. contract gate (a type with a contract marker excludes members that carry
//!    neither a member annotation nor a serialization annotation)
//! 3. member annotation name
//! 4. serialization annotation name
//! 5. declared name
//!
//! Names are only overridden for types with a contract marker. Without the
//! marker every non-ignored member is included under its declared name and is
//! never required.

use tracing::{debug, trace, warn};

use crate::descriptor::{MemberDescriptor, TypeDescriptor};
use crate::property::{PropertyMap, SchemaProperty};

/// Why a member did not become a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The member carries an ignore annotation
    Ignored,
    /// The type has a contract marker and the member did not opt in
    NotContractMember,
}

impl Exclusion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::NotContractMember => "not_contract_member",
        }
    }
}

/// Outcome for a single member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberResolution {
    Included(SchemaProperty),
    Excluded(Exclusion),
}

impl MemberResolution {
    #[must_use]
    pub fn into_property(self) -> Option<SchemaProperty> {
        match self {
            Self::Included(property) => Some(property),
            Self::Excluded(_) => None,
        }
    }
}

/// Resolve the schema properties of a type.
///
/// Members are visited in declaration order. If two members end up with the
/// same effective name the first one is kept.
pub fn resolve(descriptor: &TypeDescriptor) -> PropertyMap {
    let strict = descriptor.has_contract_marker;
    let mut properties = PropertyMap::new();

    for member in &descriptor.members {
        match resolve_member(strict, member) {
            MemberResolution::Included(property) => {
                trace!(
                    type_name = %descriptor.name,
                    member = %member.declared_name,
                    property = %property.name,
                    required = property.is_required,
                    "member included"
                );
                let name = property.name.clone();
                if !properties.insert_first(property) {
                    warn!(
                        type_name = %descriptor.name,
                        member = %member.declared_name,
                        property = %name,
                        "duplicate property name, keeping the earlier member"
                    );
                }
            }
            MemberResolution::Excluded(reason) => {
                trace!(
                    type_name = %descriptor.name,
                    member = %member.declared_name,
                    reason = reason.as_str(),
                    "member excluded"
                );
            }
        }
    }

    debug!(
        type_name = %descriptor.name,
        contract = strict,
        members = descriptor.members.len(),
        properties = properties.len(),
        "resolved schema properties"
    );
    properties
}

/// Classify one member.
///
/// `strict` is the owning type's contract marker.
pub fn resolve_member(strict: bool, member: &MemberDescriptor) -> MemberResolution {
    if member.ignore_annotation {
        return MemberResolution::Excluded(Exclusion::Ignored);
    }

    if !strict {
        return MemberResolution::Included(SchemaProperty::new(
            member.declared_name.as_str(),
            false,
        ));
    }

    let serialization_name = member
        .serialization_annotation
        .as_ref()
        .map(|a| a.name.as_str())
        .filter(|name| !name.is_empty());

    match &member.member_annotation {
        Some(annotation) => {
            let name = annotation
                .name
                .as_deref()
                .filter(|name| !name.is_empty())
                .or(serialization_name)
                .unwrap_or(member.declared_name.as_str());
            MemberResolution::Included(SchemaProperty::new(name, annotation.is_required))
        }
        // A serialization annotation opts the member in on its own
        None if member.serialization_annotation.is_some() => MemberResolution::Included(
            SchemaProperty::new(serialization_name.unwrap_or(member.declared_name.as_str()), false),
        ),
        None => MemberResolution::Excluded(Exclusion::NotContractMember),
    }
}
