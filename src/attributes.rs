//! Display metadata attached to series and groups.
//!
//! Attributes are a small enumerated set of display hints consumed by the
//! embedding GUI (curve list and plot area). Each attribute requires a
//! specific value kind; assigning a value of the wrong kind is rejected
//! without being stored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AttributeError, Result};

/// RGBA color carried by color-valued attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is fully opaque.
    pub a: u8,
}

impl Rgba {
    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Display metadata kinds recognized by the GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotAttribute {
    /// Color of the series label in the curve list. Value kind: color.
    TextColor,
    /// Whether the curve list renders the label in italics. Value kind: bool.
    ItalicFonts,
    /// Tooltip shown when hovering the series label. Value kind: text.
    ToolTip,
    /// Preferred color of the curve in the plot area. Value kind: color.
    ColorHint,
}

impl PlotAttribute {
    /// Name of the value kind this attribute requires, used in error
    /// messages.
    #[must_use]
    pub fn expected_kind(self) -> &'static str {
        match self {
            Self::TextColor | Self::ColorHint => "color",
            Self::ItalicFonts => "bool",
            Self::ToolTip => "text",
        }
    }

    /// Whether `value` has the kind this attribute requires.
    #[must_use]
    pub fn accepts(self, value: &AttributeValue) -> bool {
        matches!(
            (self, value),
            (Self::TextColor | Self::ColorHint, AttributeValue::Color(_))
                | (Self::ItalicFonts, AttributeValue::Bool(_))
                | (Self::ToolTip, AttributeValue::Text(_))
        )
    }
}

/// A runtime-typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// An RGBA color.
    Color(Rgba),
    /// A boolean flag.
    Bool(bool),
    /// A text string.
    Text(String),
}

impl AttributeValue {
    /// Short name of the value kind, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
        }
    }
}

/// Map from attribute kind to assigned value.
pub type Attributes = HashMap<PlotAttribute, AttributeValue>;

/// Validates `value` against the kind `attribute` requires and stores it.
///
/// Shared by series and group metadata. On a kind mismatch the map is left
/// untouched.
pub(crate) fn set_checked(
    map: &mut Attributes,
    attribute: PlotAttribute,
    value: AttributeValue,
) -> Result<()> {
    if !attribute.accepts(&value) {
        return Err(AttributeError::TypeMismatch {
            attribute,
            expected: attribute.expected_kind(),
            actual: value.kind(),
        }
        .into());
    }
    map.insert(attribute, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_attribute_accepts_only_its_value_kind() {
        let color = AttributeValue::Color(Rgba::opaque(200, 40, 40));
        let flag = AttributeValue::Bool(true);
        let text = AttributeValue::Text("engine RPM".to_string());

        assert!(PlotAttribute::TextColor.accepts(&color));
        assert!(PlotAttribute::ColorHint.accepts(&color));
        assert!(PlotAttribute::ItalicFonts.accepts(&flag));
        assert!(PlotAttribute::ToolTip.accepts(&text));

        assert!(!PlotAttribute::TextColor.accepts(&flag));
        assert!(!PlotAttribute::ItalicFonts.accepts(&text));
        assert!(!PlotAttribute::ToolTip.accepts(&color));
    }

    #[test]
    fn mismatched_value_is_rejected_without_being_stored() {
        let mut map = Attributes::new();
        let result = set_checked(
            &mut map,
            PlotAttribute::ToolTip,
            AttributeValue::Bool(false),
        );

        assert!(result.is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn valid_value_replaces_a_previous_assignment() {
        let mut map = Attributes::new();
        set_checked(
            &mut map,
            PlotAttribute::ToolTip,
            AttributeValue::Text("old".to_string()),
        )
        .unwrap();
        set_checked(
            &mut map,
            PlotAttribute::ToolTip,
            AttributeValue::Text("new".to_string()),
        )
        .unwrap();

        assert_eq!(
            map.get(&PlotAttribute::ToolTip),
            Some(&AttributeValue::Text("new".to_string()))
        );
    }
}
