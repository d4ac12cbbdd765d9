use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::describe::Describe;
use crate::shape::Shape;

/// Getter method name pattern: `get`/`is` prefix, uppercase-starting suffix.
static GETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:get|is)([A-Z])(.*)$").unwrap());

/// Derive the canonical property name from a getter-style method name.
///
/// The prefix is stripped and the leading character of the suffix is
/// lowercased: `getFoo` → `foo`, `isEnabled` → `enabled`, `getX` → `x`.
/// Names outside the convention yield `None`.
pub fn canonical_getter_name(method_name: &str) -> Option<String> {
    let caps = GETTER_PATTERN.captures(method_name)?;
    let head = caps.get(1)?.as_str();
    let tail = caps.get(2).map_or("", |m| m.as_str());
    Some(format!("{}{}", head.to_lowercase(), tail))
}

/// A property's value slot: a borrow of a member living inside the dumped
/// value, or the owned result of an accessor invocation, kept alive for the
/// duration of the dump.
pub enum PropertyValue<'a> {
    Borrowed(&'a dyn Describe),
    Owned(Box<dyn Describe + 'a>),
}

impl<'a> PropertyValue<'a> {
    /// Take ownership of a computed accessor result.
    pub fn owned<T: Describe + 'a>(value: T) -> Self {
        PropertyValue::Owned(Box::new(value))
    }

    pub(crate) fn describe(&self) -> Shape<'_> {
        match self {
            PropertyValue::Borrowed(value) => value.describe(),
            PropertyValue::Owned(value) => (**value).describe(),
        }
    }
}

impl<'a, T: Describe> From<&'a T> for PropertyValue<'a> {
    fn from(value: &'a T) -> Self {
        PropertyValue::Borrowed(value)
    }
}

/// Property discovery for one composite value.
///
/// A composite's [`Describe`] implementation registers its members here; the
/// scan enforces the discovery rules and keeps entries sorted by canonical
/// name (ascending, case-sensitive):
///
/// - an accessor claims its canonical name unconditionally — it replaces an
///   earlier same-named accessor and any same-named field entry;
/// - a field never replaces an existing entry;
/// - a registration that failed to produce a value (`try_*` with `None`) is
///   omitted, leaving the name claimable by a later field;
/// - registering the value's string conversion via [`display`] abandons the
///   whole scan in favor of that text — properties registered before or
///   after it are discarded, and the first `display` wins.
///
/// [`display`]: PropertyScan::display
pub struct PropertyScan<'a> {
    properties: BTreeMap<String, PropertyValue<'a>>,
    text_override: Option<String>,
}

impl<'a> PropertyScan<'a> {
    pub fn new() -> Self {
        PropertyScan {
            properties: BTreeMap::new(),
            text_override: None,
        }
    }

    /// Register an accessor under its method name, e.g. `getTotal` or
    /// `isClosed`. Names outside the getter convention are silently ignored,
    /// exactly as a reflective scan skips non-getter methods.
    pub fn getter(&mut self, method_name: &str, value: impl Into<PropertyValue<'a>>) -> &mut Self {
        self.try_getter(method_name, Some(value))
    }

    /// Register an accessor whose invocation may have failed; `None` omits
    /// the property without aborting the dump.
    pub fn try_getter(
        &mut self,
        method_name: &str,
        value: Option<impl Into<PropertyValue<'a>>>,
    ) -> &mut Self {
        if self.text_override.is_some() {
            return self;
        }
        let Some(name) = canonical_getter_name(method_name) else {
            return self;
        };
        if let Some(value) = value {
            self.properties.insert(name, value.into());
        }
        self
    }

    /// Register a field under its own name.
    pub fn field(&mut self, name: &str, value: impl Into<PropertyValue<'a>>) -> &mut Self {
        self.try_field(name, Some(value))
    }

    /// Register a field whose value may be unreadable; `None` omits the
    /// property without aborting the dump.
    pub fn try_field(
        &mut self,
        name: &str,
        value: Option<impl Into<PropertyValue<'a>>>,
    ) -> &mut Self {
        if self.text_override.is_some() {
            return self;
        }
        if let Some(value) = value {
            if !self.properties.contains_key(name) {
                self.properties.insert(name.to_string(), value.into());
            }
        }
        self
    }

    /// Register the value's universal string conversion. The rendered text,
    /// quoted and escaped, becomes the whole representation of this
    /// composite; every property registration is abandoned.
    pub fn display(&mut self, value: &dyn fmt::Display) -> &mut Self {
        if self.text_override.is_none() {
            self.text_override = Some(value.to_string());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub(crate) fn text_override(&self) -> Option<&str> {
        self.text_override.as_deref()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &PropertyValue<'a>)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Default for PropertyScan<'_> {
    fn default() -> Self {
        Self::new()
    }
}
