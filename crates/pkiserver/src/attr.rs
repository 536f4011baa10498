//! Attribute editing on configuration elements.
//!
//! Every mutation goes through [`AttrUpdate`], which keeps "leave it alone"
//! distinct from "clear it". A cleared attribute is removed from the element;
//! an empty string is never stored.

use xmltree::Element;

/// A requested change to a single attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttrUpdate {
    /// No value was supplied; the attribute is left untouched.
    #[default]
    Keep,
    /// Assign this value.
    Set(String),
    /// An explicitly empty value was supplied; the attribute is removed.
    Clear,
}

impl AttrUpdate {
    /// Build an update from a value the caller may or may not have supplied.
    pub fn from_input(value: Option<&str>) -> Self {
        match value {
            None => Self::Keep,
            Some("") => Self::Clear,
            Some(v) => Self::Set(v.to_string()),
        }
    }
}

impl From<Option<String>> for AttrUpdate {
    fn from(value: Option<String>) -> Self {
        match value {
            None => Self::Keep,
            Some(v) if v.is_empty() => Self::Clear,
            Some(v) => Self::Set(v),
        }
    }
}

impl From<&str> for AttrUpdate {
    fn from(value: &str) -> Self {
        Self::from_input(Some(value))
    }
}

/// Get an attribute value if present.
pub fn get_attr<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element.attributes.get(name).map(String::as_str)
}

/// Apply an update to an attribute.
pub fn set_attr(element: &mut Element, name: &str, update: impl Into<AttrUpdate>) {
    match update.into() {
        AttrUpdate::Keep => {}
        AttrUpdate::Set(value) if value.is_empty() => remove_attr(element, name),
        AttrUpdate::Set(value) => {
            element.attributes.insert(name.to_string(), value);
        }
        AttrUpdate::Clear => remove_attr(element, name),
    }
}

/// Remove an attribute. Removing an absent attribute is not an error.
pub fn remove_attr(element: &mut Element, name: &str) {
    element.attributes.shift_remove(name);
}
