//! Selection and hover state for the architecture diagram.

use crate::catalog::DiagramNode;

/// A fixed set of diagram nodes with a selected and a hovered slot.
///
/// Both slots hold an index into `nodes` or nothing, so state can never
/// point at a node that does not exist.
#[derive(Debug, Clone)]
pub struct InteractiveDiagram {
    nodes: Vec<DiagramNode>,
    selected: Option<usize>,
    hovered: Option<usize>,
}

impl InteractiveDiagram {
    pub fn new(nodes: Vec<DiagramNode>) -> Self {
        Self {
            nodes,
            selected: None,
            hovered: None,
        }
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Pointer entered node `id`.
    pub fn hover(&mut self, id: &str) {
        match self.index_of(id) {
            Some(i) => self.hovered = Some(i),
            None => tracing::trace!(id, "hover on unknown node"),
        }
    }

    /// Pointer left node `id`. Only clears the hover slot if it still holds `id`,
    /// so a late leave event for a previous node does not wipe a newer hover.
    pub fn unhover(&mut self, id: &str) {
        if let Some(i) = self.hovered {
            if self.nodes[i].id == id {
                self.hovered = None;
            }
        }
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    pub fn select(&mut self, id: &str) {
        let Some(i) = self.index_of(id) else {
            tracing::trace!(id, "select on unknown node");
            return;
        };
        if self.selected == Some(i) {
            tracing::debug!(id, "node deselected");
            self.selected = None;
        } else {
            tracing::debug!(id, "node selected");
            self.selected = Some(i);
        }
    }

    /// Forget both selection and hover.
    pub fn clear(&mut self) {
        self.selected = None;
        self.hovered = None;
    }

    pub fn selected(&self) -> Option<&DiagramNode> {
        self.selected.map(|i| &self.nodes[i])
    }

    pub fn hovered(&self) -> Option<&DiagramNode> {
        self.hovered.map(|i| &self.nodes[i])
    }

    /// The node whose details are shown: the selection wins over the hover.
    pub fn active_detail(&self) -> Option<&DiagramNode> {
        self.selected().or_else(|| self.hovered())
    }

    /// The hover tooltip, shown only while nothing is selected.
    pub fn tooltip(&self) -> Option<&DiagramNode> {
        match self.selected {
            Some(_) => None,
            None => self.hovered(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected().is_some_and(|n| n.id == id)
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered().is_some_and(|n| n.id == id)
    }
}
