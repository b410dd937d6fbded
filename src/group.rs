//! Shared display tag marking a set of series as siblings.
//!
//! A series may or may not have a group. Think of [`PlotGroup`] as a way to
//! say that certain series belong together for display purposes; it carries
//! a name and display attributes and no behavior.
//!
//! Groups are shared by reference across any number of series through
//! [`GroupRef`]: reference counting extends the group's lifetime to the
//! longest-lived holder, so destroying one series never destroys a group a
//! sibling still references. The `Rc<RefCell<_>>` form also makes the
//! crate's single-threaded contract explicit in the types.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeValue, Attributes, PlotAttribute, set_checked};
use crate::error::Result;

/// Reference-counted handle to a shared [`PlotGroup`].
pub type GroupRef = Rc<RefCell<PlotGroup>>;

/// Named set of display attributes shared by sibling series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotGroup {
    name: String,
    attributes: Attributes,
}

impl PlotGroup {
    /// Creates a group with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates a group already wrapped in a shared handle.
    pub fn shared(name: impl Into<String>) -> GroupRef {
        Rc::new(RefCell::new(Self::new(name)))
    }

    /// The group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All assigned attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The value assigned to `attribute`, if any.
    #[must_use]
    pub fn attribute(&self, attribute: PlotAttribute) -> Option<AttributeValue> {
        self.attributes.get(&attribute).cloned()
    }

    /// Assigns `value` to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::TypeMismatch`](crate::error::AttributeError)
    /// when the value kind does not match the attribute; the group is left
    /// unchanged.
    pub fn set_attribute(
        &mut self,
        attribute: PlotAttribute,
        value: AttributeValue,
    ) -> Result<()> {
        set_checked(&mut self.attributes, attribute, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Rgba;

    #[test]
    fn group_outlives_a_dropped_holder() {
        let group = PlotGroup::shared("powertrain");
        let sibling = Rc::clone(&group);

        group
            .borrow_mut()
            .set_attribute(
                PlotAttribute::ColorHint,
                AttributeValue::Color(Rgba::opaque(10, 120, 200)),
            )
            .unwrap();

        drop(group);

        assert_eq!(sibling.borrow().name(), "powertrain");
        assert_eq!(
            sibling.borrow().attribute(PlotAttribute::ColorHint),
            Some(AttributeValue::Color(Rgba::opaque(10, 120, 200)))
        );
    }

    #[test]
    fn group_attributes_are_validated() {
        let mut group = PlotGroup::new("misc");
        let result =
            group.set_attribute(PlotAttribute::ItalicFonts, AttributeValue::Text("x".into()));

        assert!(result.is_err());
        assert!(group.attributes().is_empty());
    }
}
