//! Inline required-field validation.
//!
//! Opted-in forms get a [`SubmitGuard`] that re-checks every required field on
//! submit and cancels the submission when any is blank. Each required field
//! present at install time also gets a [`BlurCheck`] for earlier feedback.
//! Feedback is a single marker class on the field's enclosing group.

use crate::dom::{Document, NodeId};
use crate::event::{Event, EventKind, Handler};
use crate::markers::{self, Markers};
use crate::page::Page;
use serde::Serialize;
use std::rc::Rc;

/// Validity of one field as shown by its group's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    Valid,
    Invalid,
}

/// Forms and fields bound by [`install`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateInstall {
    pub forms: usize,
    pub fields: usize,
}

/// A value counts as filled once surrounding whitespace is removed.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Re-evaluate one field and update its group's marker.
///
/// Returns `None` when the field has no enclosing group; nothing changes then.
pub fn check_field(doc: &mut Document, field: NodeId, markers: &Markers) -> Option<FieldState> {
    let group = doc.closest(field, &markers.field_group())?;
    let filled = doc.element(field).is_some_and(|el| is_filled(el.value()));
    let state = if filled {
        FieldState::Valid
    } else {
        FieldState::Invalid
    };
    let group = doc.element_mut(group)?;
    group.toggle_class(&markers.invalid_class, state == FieldState::Invalid);
    Some(state)
}

/// Submit handler for one form.
#[derive(Debug, Clone)]
pub struct SubmitGuard {
    form: NodeId,
    markers: Rc<Markers>,
}

impl Handler for SubmitGuard {
    fn handle(&self, doc: &mut Document, event: &mut Event) {
        // Required fields are collected per submission, not at install time.
        let fields = doc.find_all(self.form, &markers::required_field());
        let mut valid = true;
        for field in fields {
            if check_field(doc, field, &self.markers) == Some(FieldState::Invalid) {
                valid = false;
            }
        }
        if !valid {
            event.prevent_default();
        }
    }
}

/// Blur handler for one required field. Never cancels anything.
#[derive(Debug, Clone)]
pub struct BlurCheck {
    field: NodeId,
    markers: Rc<Markers>,
}

impl Handler for BlurCheck {
    fn handle(&self, doc: &mut Document, _event: &mut Event) {
        check_field(doc, self.field, &self.markers);
    }
}

/// Bind submit and blur handlers in every opted-in form.
pub fn install(page: &mut Page, markers: &Rc<Markers>) -> ValidateInstall {
    let doc = page.document();
    let forms = doc.find_all(doc.root(), &markers.validated_form());

    let mut result = ValidateInstall::default();
    for form in forms {
        let guard = SubmitGuard {
            form,
            markers: Rc::clone(markers),
        };
        if page
            .add_listener(form, EventKind::Submit, Rc::new(guard))
            .is_ok()
        {
            result.forms += 1;
        }

        let fields = page.document().find_all(form, &markers::required_field());
        for field in fields {
            let check = BlurCheck {
                field,
                markers: Rc::clone(markers),
            };
            if page
                .add_listener(field, EventKind::Blur, Rc::new(check))
                .is_ok()
            {
                result.fields += 1;
            }
        }
    }
    result
}
