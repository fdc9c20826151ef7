//! Events, handlers and the per-node listener store.

use crate::dom::{Document, NodeId};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// The events the enhancements react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    Submit,
    Blur,
}

impl EventKind {
    /// Whether the event propagates from the target to its ancestors.
    pub fn bubbles(self) -> bool {
        match self {
            Self::Click | Self::Submit => true,
            Self::Blur => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::Blur => "blur",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dispatched event.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub kind: EventKind,
    /// Node the event was dispatched at.
    pub target: NodeId,
    /// Node whose listener is currently running.
    pub current_target: NodeId,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            default_prevented: false,
        }
    }

    /// Cancel the default action (e.g. form submission).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Something that reacts to an event on the node it is registered on.
///
/// Each grouping on the page gets its own handler value holding the node ids
/// it operates on. Handlers must not fail; missing structure is skipped.
pub trait Handler {
    fn handle(&self, doc: &mut Document, event: &mut Event);
}

/// Listeners keyed by node, then by event kind, in registration order.
#[derive(Default, Clone)]
pub struct ListenerStore {
    map: HashMap<NodeId, HashMap<EventKind, Vec<Rc<dyn Handler>>>>,
}

impl ListenerStore {
    pub fn add(&mut self, node: NodeId, kind: EventKind, handler: Rc<dyn Handler>) {
        self.map
            .entry(node)
            .or_default()
            .entry(kind)
            .or_default()
            .push(handler);
    }

    /// Snapshot of the listeners for `node`, so handlers can run while the
    /// store stays untouched.
    pub fn get(&self, node: NodeId, kind: EventKind) -> Vec<Rc<dyn Handler>> {
        self.map
            .get(&node)
            .and_then(|events| events.get(&kind))
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, node: NodeId, kind: EventKind) -> usize {
        self.map
            .get(&node)
            .and_then(|events| events.get(&kind))
            .map_or(0, Vec::len)
    }

    pub fn total(&self) -> usize {
        self.map
            .values()
            .flat_map(|events| events.values())
            .map(Vec::len)
            .sum()
    }
}

impl fmt::Debug for ListenerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerStore")
            .field("nodes", &self.map.len())
            .field("listeners", &self.total())
            .finish()
    }
}
