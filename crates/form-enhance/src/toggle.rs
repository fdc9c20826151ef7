//! Password visibility toggle.
//!
//! Every toggle wrapper found at install time that holds both an `input` and a
//! trigger control gets one [`ToggleControl`] bound to the control's click
//! event. Wrappers missing either element are skipped.

use crate::dom::{Document, NodeId};
use crate::event::{Event, EventKind, Handler};
use crate::markers::{self, Markers};
use crate::page::Page;
use serde::Serialize;
use std::rc::Rc;

/// Whether an input's content is obscured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Hidden,
    Visible,
}

impl Mode {
    /// Only `type="password"` counts as hidden; every other type shows its text.
    pub fn of(input_type: &str) -> Self {
        if input_type == "password" {
            Self::Hidden
        } else {
            Self::Visible
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Visible => "text",
        }
    }
}

/// Wrappers bound and skipped by [`install`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleInstall {
    pub bound: usize,
    pub skipped: usize,
}

/// Click handler for one toggle pair.
#[derive(Debug, Clone)]
pub struct ToggleControl {
    input: NodeId,
    control: NodeId,
    markers: Rc<Markers>,
}

impl ToggleControl {
    /// Set the control's initial label from the input's current mode.
    fn label_initial(&self, doc: &mut Document) {
        let Some(mode) = doc.element(self.input).map(|el| Mode::of(&el.input_type())) else {
            return;
        };
        if let Some(control) = doc.element_mut(self.control) {
            control.set_attr("aria-label", label_for(&self.markers, mode));
        }
    }
}

impl Handler for ToggleControl {
    fn handle(&self, doc: &mut Document, _event: &mut Event) {
        let Some(current) = doc.element(self.input).map(|el| Mode::of(&el.input_type())) else {
            return;
        };
        let next = current.flipped();

        if let Some(input) = doc.element_mut(self.input) {
            input.set_input_type(next.input_type());
        }
        if let Some(control) = doc.element_mut(self.control) {
            control.set_attr("aria-label", label_for(&self.markers, next));
        }

        let icon = doc.find_first(self.control, &self.markers.icon());
        if let Some(icon) = icon.and_then(|id| doc.element_mut(id)) {
            icon.toggle_class(&self.markers.visible_icon_class, next == Mode::Visible);
            icon.toggle_class(&self.markers.hidden_icon_class, next == Mode::Hidden);
        }
    }
}

/// The label describes the action the control offers next.
pub fn label_for(markers: &Markers, mode: Mode) -> &str {
    match mode {
        Mode::Hidden => &markers.show_label,
        Mode::Visible => &markers.hide_label,
    }
}

/// Locate the input and control of a wrapper. `None` when either is missing.
pub fn locate_pair(
    doc: &Document,
    wrapper: NodeId,
    markers: &Markers,
) -> Option<(NodeId, NodeId)> {
    let input = doc.find_first(wrapper, &markers::password_input())?;
    let control = doc.find_first(wrapper, &markers.toggle_trigger())?;
    Some((input, control))
}

/// Bind a [`ToggleControl`] to every complete toggle pair on the page.
pub fn install(page: &mut Page, markers: &Rc<Markers>) -> ToggleInstall {
    let doc = page.document();
    let wrappers = doc.find_all(doc.root(), &markers.toggle_wrapper());

    let mut result = ToggleInstall::default();
    for wrapper in wrappers {
        let Some((input, control)) = locate_pair(page.document(), wrapper, markers) else {
            result.skipped += 1;
            continue;
        };
        let handler = ToggleControl {
            input,
            control,
            markers: Rc::clone(markers),
        };
        handler.label_initial(page.document_mut());
        if page
            .add_listener(control, EventKind::Click, Rc::new(handler))
            .is_ok()
        {
            result.bound += 1;
        }
    }
    result
}
