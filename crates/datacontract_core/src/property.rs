//! Resolved schema properties.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de};

/// One property of the generated object schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaProperty {
    /// Effective property name
    pub name: String,
    pub is_required: bool,
}

impl SchemaProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, is_required: bool) -> Self {
        Self {
            name: name.into(),
            is_required,
        }
    }
}

/// Property name to [`SchemaProperty`], in member declaration order.
///
/// Keys are unique and always equal the name of the property they map to.
/// Serializes as a JSON object whose key order matches the declaration order
/// of the members that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap {
    properties: IndexMap<String, SchemaProperty>,
}

impl PropertyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property unless its name is already taken.
    ///
    /// Returns `false` (and leaves the map untouched) when a property with the
    /// same name was inserted earlier.
    pub(crate) fn insert_first(&mut self, property: SchemaProperty) -> bool {
        match self.properties.entry(property.name.clone()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(property);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.get(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaProperty)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Names of required properties, in insertion order.
    ///
    /// This is what an object schema lists under `required`.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, p)| p.is_required)
            .map(|(k, _)| k.as_str())
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let properties = IndexMap::<String, SchemaProperty>::deserialize(deserializer)?;
        if let Some((key, property)) = properties.iter().find(|(k, p)| **k != p.name) {
            return Err(de::Error::custom(format!(
                "property key `{key}` does not match its name `{}`",
                property.name
            )));
        }
        Ok(Self { properties })
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a SchemaProperty);
    type IntoIter = indexmap::map::Iter<'a, String, SchemaProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
