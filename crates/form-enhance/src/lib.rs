//! Progressive enhancement for server-rendered HTML forms.
//!
//! Two independent behaviours are installed on a parsed [`Page`] once its
//! structure is ready:
//!
//! - **Password visibility toggles** ([`toggle`]): a control next to a
//!   password input flips it between obscured and clear text, keeping the
//!   control's `aria-label` and eye icon in step.
//! - **Inline required-field validation** ([`validate`]): opted-in forms mark
//!   the group of every blank required field and refuse to submit until all
//!   are filled. Blur gives the same feedback per field.
//!
//! ```
//! use form_enhance::{enhance, Markers, Page, SubmitOutcome};
//!
//! let mut page = Page::parse(
//!     r#"<form id="f" data-validate><div class="mb-3"><input id="u" required></div></form>"#,
//! );
//! enhance(&mut page, Markers::default()).unwrap();
//!
//! let form = page.document().by_id("f").unwrap();
//! assert_eq!(page.submit(form).unwrap(), SubmitOutcome::Blocked);
//! ```

pub mod dom;
pub mod enhance;
pub mod error;
pub mod event;
pub mod markers;
pub mod page;
pub mod report;
pub mod toggle;
pub mod validate;

pub use dom::{Document, Element, Matcher, NodeId};
pub use enhance::{enhance, Bindings};
pub use error::{Error, Result};
pub use event::{Event, EventKind, Handler};
pub use markers::Markers;
pub use page::{Page, ReadyState, SubmitOutcome};
pub use report::PageReport;
