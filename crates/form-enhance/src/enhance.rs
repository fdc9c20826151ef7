//! One-time page initialization.

use crate::error::Result;
use crate::markers::Markers;
use crate::page::Page;
use crate::{toggle, validate};
use serde::Serialize;
use std::rc::Rc;
use tracing::debug;

/// What the enhancer bound when it ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bindings {
    /// Toggle wrappers with both an input and a control.
    pub toggle_pairs: usize,
    /// Toggle wrappers missing their input or control.
    pub skipped_wrappers: usize,
    /// Forms carrying the validation opt-in attribute.
    pub forms: usize,
    /// Required fields bound for blur feedback.
    pub blur_fields: usize,
}

/// Install the visibility toggles and required-field validation once the
/// page structure is ready.
///
/// Runs immediately on a ready page and is deferred on a loading one. Calling
/// it again on the same page is a no-op once bindings exist.
pub fn enhance(page: &mut Page, markers: Markers) -> Result<()> {
    markers.validate()?;
    let markers = Rc::new(markers);
    page.on_ready(move |page| install_all(page, &markers));
    Ok(())
}

fn install_all(page: &mut Page, markers: &Rc<Markers>) {
    if page.bindings().is_some() {
        debug!("page already enhanced");
        return;
    }

    let toggles = toggle::install(page, markers);
    let validation = validate::install(page, markers);
    let bindings = Bindings {
        toggle_pairs: toggles.bound,
        skipped_wrappers: toggles.skipped,
        forms: validation.forms,
        blur_fields: validation.fields,
    };
    debug!(
        toggle_pairs = bindings.toggle_pairs,
        forms = bindings.forms,
        blur_fields = bindings.blur_fields,
        "page enhanced"
    );
    page.set_bindings(bindings);
}
