//! A loaded page: document, listeners, ready state and user actions.

use crate::dom::{Document, Matcher, NodeId};
use crate::enhance::Bindings;
use crate::error::{Error, Result};
use crate::event::{Event, EventKind, Handler, ListenerStore};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Document loading phase, mirroring `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// What happened to a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    Submitted,
    Blocked,
}

type ReadyCallback = Box<dyn FnOnce(&mut Page)>;

pub struct Page {
    document: Document,
    listeners: ListenerStore,
    ready_state: ReadyState,
    pending: Vec<ReadyCallback>,
    bindings: Option<Bindings>,
}

impl Page {
    /// A page whose structure is still being parsed. Ready callbacks queue
    /// until [`finish_parsing`](Self::finish_parsing).
    pub fn loading(html: &str) -> Self {
        Self::with_state(Document::parse(html), ReadyState::Loading)
    }

    /// A page whose structure is already available.
    pub fn parse(html: &str) -> Self {
        Self::with_state(Document::parse(html), ReadyState::Interactive)
    }

    pub fn with_state(document: Document, ready_state: ReadyState) -> Self {
        Self {
            document,
            listeners: ListenerStore::default(),
            ready_state,
            pending: Vec::new(),
            bindings: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn listeners(&self) -> &ListenerStore {
        &self.listeners
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Run `callback` once the structure is ready: now if it already is,
    /// otherwise when parsing finishes.
    pub fn on_ready<F>(&mut self, callback: F)
    where
        F: FnOnce(&mut Page) + 'static,
    {
        if self.ready_state == ReadyState::Loading {
            self.pending.push(Box::new(callback));
        } else {
            callback(self);
        }
    }

    /// Structure parsed: move to `Interactive` and fire queued ready callbacks
    /// exactly once, in registration order.
    pub fn finish_parsing(&mut self) {
        if self.ready_state != ReadyState::Loading {
            return;
        }
        self.ready_state = ReadyState::Interactive;
        let callbacks = std::mem::take(&mut self.pending);
        debug!(callbacks = callbacks.len(), "document structure ready");
        for callback in callbacks {
            callback(self);
        }
    }

    /// All subresources loaded.
    pub fn finish_loading(&mut self) {
        self.finish_parsing();
        self.ready_state = ReadyState::Complete;
    }

    pub fn add_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        handler: Rc<dyn Handler>,
    ) -> Result<()> {
        self.document.node(node)?;
        self.listeners.add(node, kind, handler);
        Ok(())
    }

    /// Dispatch `kind` at `target`, walking up the ancestors for bubbling kinds.
    pub fn dispatch(&mut self, target: NodeId, kind: EventKind) -> Result<Event> {
        self.document.node(target)?;
        let mut event = Event::new(kind, target);

        let mut cursor = Some(target);
        while let Some(current) = cursor {
            event.current_target = current;
            for handler in self.listeners.get(current, kind) {
                handler.handle(&mut self.document, &mut event);
            }
            if !kind.bubbles() {
                break;
            }
            cursor = self.document.parent(current);
        }

        debug!(
            event = %kind,
            target = %self.document.describe(target),
            default_prevented = event.default_prevented(),
            "dispatched"
        );
        Ok(event)
    }

    pub fn click(&mut self, target: NodeId) -> Result<Event> {
        self.dispatch(target, EventKind::Click)
    }

    /// Replace a form control's value, as typing would.
    pub fn fill(&mut self, target: NodeId, value: &str) -> Result<()> {
        self.document.try_element_mut(target)?.set_value(value);
        Ok(())
    }

    pub fn blur(&mut self, target: NodeId) -> Result<Event> {
        self.dispatch(target, EventKind::Blur)
    }

    /// Submit the form containing `target` (the form itself or a control in it).
    pub fn submit(&mut self, target: NodeId) -> Result<SubmitOutcome> {
        self.document.node(target)?;
        let form = self
            .document
            .closest(target, &Matcher::Tag("form".into()))
            .ok_or(Error::NoEnclosingForm(target))?;
        let event = self.dispatch(form, EventKind::Submit)?;
        Ok(if event.default_prevented() {
            SubmitOutcome::Blocked
        } else {
            SubmitOutcome::Submitted
        })
    }

    pub fn bindings(&self) -> Option<&Bindings> {
        self.bindings.as_ref()
    }

    pub(crate) fn set_bindings(&mut self, bindings: Bindings) {
        self.bindings = Some(bindings);
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("nodes", &self.document.len())
            .field("listeners", &self.listeners)
            .field("ready_state", &self.ready_state)
            .field("pending", &self.pending.len())
            .field("bindings", &self.bindings)
            .finish()
    }
}
