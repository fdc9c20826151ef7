//! Read-only snapshot of the enhanced UI state.

use crate::dom::{Document, NodeId};
use crate::enhance::Bindings;
use crate::markers::{self, Markers};
use crate::page::{Page, ReadyState};
use crate::toggle::{self, Mode};
use crate::validate::{self, FieldState};
use serde::Serialize;

/// Which glyph a toggle icon currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconState {
    Open,
    Slashed,
    /// Neither or both classes present.
    Unmarked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleReport {
    pub wrapper: String,
    /// `None` for wrappers missing their input or control.
    pub input: Option<String>,
    pub control: Option<String>,
    pub mode: Option<Mode>,
    pub label: Option<String>,
    pub icon: Option<IconState>,
}

impl ToggleReport {
    pub fn is_complete(&self) -> bool {
        self.input.is_some() && self.control.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub form: String,
    pub field: String,
    pub filled: bool,
    /// Enclosing group, if any.
    pub group: Option<String>,
    /// Marker state of the group; `None` when there is no group.
    pub state: Option<FieldState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub ready_state: ReadyState,
    pub bindings: Option<Bindings>,
    pub toggles: Vec<ToggleReport>,
    pub fields: Vec<FieldReport>,
}

impl PageReport {
    pub fn capture(page: &Page, markers: &Markers) -> Self {
        let doc = page.document();
        let toggles = doc
            .find_all(doc.root(), &markers.toggle_wrapper())
            .into_iter()
            .map(|wrapper| toggle_report(doc, wrapper, markers))
            .collect();

        let mut fields = Vec::new();
        for form in doc.find_all(doc.root(), &markers.validated_form()) {
            for field in doc.find_all(form, &markers::required_field()) {
                fields.push(field_report(doc, form, field, markers));
            }
        }

        Self {
            ready_state: page.ready_state(),
            bindings: page.bindings().copied(),
            toggles,
            fields,
        }
    }

    /// Fields whose group currently carries the invalid marker.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields
            .iter()
            .filter(|f| f.state == Some(FieldState::Invalid))
    }
}

fn toggle_report(doc: &Document, wrapper: NodeId, markers: &Markers) -> ToggleReport {
    let mut report = ToggleReport {
        wrapper: doc.describe(wrapper),
        input: None,
        control: None,
        mode: None,
        label: None,
        icon: None,
    };
    let Some((input, control)) = toggle::locate_pair(doc, wrapper, markers) else {
        return report;
    };

    report.input = Some(doc.describe(input));
    report.control = Some(doc.describe(control));
    report.mode = doc.element(input).map(|el| Mode::of(&el.input_type()));
    report.label = doc
        .element(control)
        .and_then(|el| el.attr("aria-label"))
        .map(String::from);
    report.icon = doc
        .find_first(control, &markers.icon())
        .and_then(|icon| doc.element(icon))
        .map(|icon| {
            let open = icon.has_class(&markers.visible_icon_class);
            let slashed = icon.has_class(&markers.hidden_icon_class);
            match (open, slashed) {
                (true, false) => IconState::Open,
                (false, true) => IconState::Slashed,
                _ => IconState::Unmarked,
            }
        });
    report
}

fn field_report(doc: &Document, form: NodeId, field: NodeId, markers: &Markers) -> FieldReport {
    let group = doc.closest(field, &markers.field_group());
    let state = group.and_then(|g| doc.element(g)).map(|g| {
        if g.has_class(&markers.invalid_class) {
            FieldState::Invalid
        } else {
            FieldState::Valid
        }
    });
    FieldReport {
        form: doc.describe(form),
        field: doc.describe(field),
        filled: doc
            .element(field)
            .is_some_and(|el| validate::is_filled(el.value())),
        group: group.map(|g| doc.describe(g)),
        state,
    }
}
