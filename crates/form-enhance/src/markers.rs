//! Marker configuration: which classes and attributes identify toggle pairs,
//! validated forms and field groups, and which labels and classes get written.
//!
//! Defaults match Bootstrap 5 markup with Bootstrap Icons. A JSON file may
//! override any subset of fields.

use crate::dom::Matcher;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TOGGLE_WRAPPER_CLASS: &str = "password-toggle-wrapper";
pub const DEFAULT_TOGGLE_TRIGGER_ATTR: &str = "data-password-toggle";
pub const DEFAULT_ICON_TAG: &str = "i";
pub const DEFAULT_VISIBLE_ICON_CLASS: &str = "bi-eye";
pub const DEFAULT_HIDDEN_ICON_CLASS: &str = "bi-eye-slash";
pub const DEFAULT_SHOW_LABEL: &str = "Show password";
pub const DEFAULT_HIDE_LABEL: &str = "Hide password";
pub const DEFAULT_VALIDATE_FORM_ATTR: &str = "data-validate";
pub const DEFAULT_FIELD_GROUP_CLASS: &str = "mb-3";
pub const DEFAULT_INVALID_CLASS: &str = "was-validated";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Class on the element wrapping a password input and its toggle.
    pub toggle_wrapper_class: String,
    /// Attribute marking the toggle control inside the wrapper.
    pub toggle_trigger_attr: String,
    /// Tag of the optional icon inside the toggle control.
    pub icon_tag: String,
    /// Icon class present while the password is shown.
    pub visible_icon_class: String,
    /// Icon class present while the password is obscured.
    pub hidden_icon_class: String,
    /// Label offering to reveal the password.
    pub show_label: String,
    /// Label offering to obscure the password.
    pub hide_label: String,
    /// Attribute opting a `<form>` into inline validation.
    pub validate_form_attr: String,
    /// Class of the container that receives the invalid marker.
    pub field_group_class: String,
    /// The invalid marker itself.
    pub invalid_class: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            toggle_wrapper_class: DEFAULT_TOGGLE_WRAPPER_CLASS.into(),
            toggle_trigger_attr: DEFAULT_TOGGLE_TRIGGER_ATTR.into(),
            icon_tag: DEFAULT_ICON_TAG.into(),
            visible_icon_class: DEFAULT_VISIBLE_ICON_CLASS.into(),
            hidden_icon_class: DEFAULT_HIDDEN_ICON_CLASS.into(),
            show_label: DEFAULT_SHOW_LABEL.into(),
            hide_label: DEFAULT_HIDE_LABEL.into(),
            validate_form_attr: DEFAULT_VALIDATE_FORM_ATTR.into(),
            field_group_class: DEFAULT_FIELD_GROUP_CLASS.into(),
            invalid_class: DEFAULT_INVALID_CLASS.into(),
        }
    }
}

impl Markers {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let markers: Self = serde_json::from_str(json)?;
        markers.validate()?;
        Ok(markers)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Class and attribute names must be single non-empty tokens, and the two
    /// icon classes must differ or the icon could not show state.
    pub fn validate(&self) -> Result<()> {
        let tokens = [
            ("toggle_wrapper_class", &self.toggle_wrapper_class),
            ("toggle_trigger_attr", &self.toggle_trigger_attr),
            ("icon_tag", &self.icon_tag),
            ("visible_icon_class", &self.visible_icon_class),
            ("hidden_icon_class", &self.hidden_icon_class),
            ("validate_form_attr", &self.validate_form_attr),
            ("field_group_class", &self.field_group_class),
            ("invalid_class", &self.invalid_class),
        ];
        for (field, value) in tokens {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(Error::InvalidMarkers(format!(
                    "{field} must be a single non-empty token, got {value:?}"
                )));
            }
        }
        if self.visible_icon_class == self.hidden_icon_class {
            return Err(Error::InvalidMarkers(
                "visible_icon_class and hidden_icon_class must differ".into(),
            ));
        }
        if self.show_label.trim().is_empty() || self.hide_label.trim().is_empty() {
            return Err(Error::InvalidMarkers("labels must not be blank".into()));
        }
        Ok(())
    }

    pub(crate) fn toggle_wrapper(&self) -> Matcher {
        Matcher::Class(self.toggle_wrapper_class.clone())
    }

    pub(crate) fn toggle_trigger(&self) -> Matcher {
        Matcher::Attr(self.toggle_trigger_attr.clone())
    }

    pub(crate) fn icon(&self) -> Matcher {
        Matcher::Tag(self.icon_tag.clone())
    }

    pub(crate) fn validated_form(&self) -> Matcher {
        Matcher::All(vec![
            Matcher::Tag("form".into()),
            Matcher::Attr(self.validate_form_attr.clone()),
        ])
    }

    pub(crate) fn field_group(&self) -> Matcher {
        Matcher::Class(self.field_group_class.clone())
    }
}

pub(crate) fn password_input() -> Matcher {
    Matcher::Tag("input".into())
}

pub(crate) fn required_field() -> Matcher {
    Matcher::Attr("required".into())
}
