// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node-state store and its read-only node views.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::OnceCell;

use hashbrown::HashMap;
use kurbo::Point;
use netview_geometry::BoundingBox;
use tracing::{debug, trace};

use crate::error::{Result, StateError};
use crate::resolver::StyleResolver;
use crate::style::{LabelText, NodeGlowConfig, NodeLabelStyle, Selectable, ShapeStyle};
use crate::types::{Interaction, NodeData, OppositeNode};

#[derive(Clone, Debug, Default)]
struct NodeEntry {
    data: NodeData,
    interaction: Interaction,
    // edge id -> node id at the other end
    opposite_node_ids: HashMap<String, String>,
}

#[derive(Clone, Debug)]
struct EdgeEnds {
    source: String,
    target: String,
}

/// Per-node visual state for one graph, keyed by node id.
///
/// Only facts are stored: each node's [`NodeData`], its [`Interaction`] flags and the raw
/// edge → opposite-node mapping. Everything else (shape, label, z-index, ...) is derived by
/// [`NodeView`] from those facts and the [`StyleResolver`] on every read.
///
/// Every committed write bumps [`revision`](Self::revision).
pub struct NodeStates<R> {
    resolver: R,
    nodes: HashMap<String, NodeEntry>,
    edges: HashMap<String, EdgeEnds>,
    revision: u64,
    // Highest base z-index; cleared on every write.
    top_z_index: OnceCell<i32>,
}

impl<R> core::fmt::Debug for NodeStates<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeStates")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<R: Default> Default for NodeStates<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R> NodeStates<R> {
    /// Create an empty store resolving styles through `resolver`.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            nodes: HashMap::new(),
            edges: HashMap::new(),
            revision: 0,
            top_z_index: OnceCell::new(),
        }
    }

    /// The style resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Replace the style resolver, returning the old one.
    pub fn set_resolver(&mut self, resolver: R) -> R {
        self.bump();
        core::mem::replace(&mut self.resolver, resolver)
    }

    /// Write counter; changes whenever a stored fact or the resolver changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of connected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Endpoints `(source, target)` of a connected edge.
    pub fn edge(&self, edge_id: &str) -> Option<(&str, &str)> {
        self.edges
            .get(edge_id)
            .map(|e| (e.source.as_str(), e.target.as_str()))
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.top_z_index.take();
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut NodeEntry> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| StateError::UnknownNode(String::from(id)))
    }

    /// Add a node. Its interaction flags start cleared and it has no opposite nodes.
    pub fn insert(&mut self, id: impl Into<String>, data: NodeData) -> Result<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(StateError::EmptyNodeId);
        }
        if self.nodes.contains_key(&id) {
            return Err(StateError::DuplicateNode(id));
        }
        debug!(node = %id, "insert node");
        self.nodes.insert(
            id,
            NodeEntry {
                data,
                ..Default::default()
            },
        );
        self.bump();
        Ok(())
    }

    /// Remove a node and every edge incident to it, returning its data.
    ///
    /// Surviving endpoints of those edges lose the matching opposite-node entries.
    pub fn remove(&mut self, id: &str) -> Option<NodeData> {
        let entry = self.nodes.remove(id)?;
        for (edge_id, other) in &entry.opposite_node_ids {
            self.edges.remove(edge_id.as_str());
            if let Some(o) = self.nodes.get_mut(other.as_str()) {
                o.opposite_node_ids.remove(edge_id.as_str());
            }
        }
        debug!(
            node = id,
            edges = entry.opposite_node_ids.len(),
            "remove node"
        );
        self.bump();
        Some(entry.data)
    }

    /// Replace a node's data record.
    pub fn set_data(&mut self, id: &str, data: NodeData) -> Result<()> {
        self.entry_mut(id)?.data = data;
        self.bump();
        Ok(())
    }

    /// Record an edge between two stored nodes.
    ///
    /// Each endpoint gets `edge_id -> other endpoint` in its opposite-node mapping; a
    /// self-loop maps the node to itself.
    pub fn connect(
        &mut self,
        edge_id: impl Into<String>,
        source: &str,
        target: &str,
    ) -> Result<()> {
        let edge_id = edge_id.into();
        if edge_id.is_empty() {
            return Err(StateError::EmptyEdgeId);
        }
        if self.edges.contains_key(&edge_id) {
            return Err(StateError::DuplicateEdge(edge_id));
        }
        for end in [source, target] {
            if !self.nodes.contains_key(end) {
                return Err(StateError::UnknownNode(String::from(end)));
            }
        }
        self.entry_mut(source)?
            .opposite_node_ids
            .insert(edge_id.clone(), String::from(target));
        self.entry_mut(target)?
            .opposite_node_ids
            .insert(edge_id.clone(), String::from(source));
        trace!(edge = %edge_id, source, target, "connect");
        self.edges.insert(
            edge_id,
            EdgeEnds {
                source: String::from(source),
                target: String::from(target),
            },
        );
        self.bump();
        Ok(())
    }

    /// Forget an edge recorded by [`connect`](Self::connect).
    pub fn disconnect(&mut self, edge_id: &str) -> Result<()> {
        let ends = self
            .edges
            .remove(edge_id)
            .ok_or_else(|| StateError::UnknownEdge(String::from(edge_id)))?;
        for end in [&ends.source, &ends.target] {
            if let Some(e) = self.nodes.get_mut(end.as_str()) {
                e.opposite_node_ids.remove(edge_id);
            }
        }
        trace!(edge = edge_id, "disconnect");
        self.bump();
        Ok(())
    }

    /// Current interaction flags of a node.
    pub fn interaction(&self, id: &str) -> Option<Interaction> {
        self.nodes.get(id).map(|e| e.interaction)
    }

    /// Mutable access to a node's interaction flags.
    ///
    /// The revision moves as soon as access is granted.
    pub fn interaction_mut(&mut self, id: &str) -> Option<&mut Interaction> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        self.bump();
        self.nodes.get_mut(id).map(|e| &mut e.interaction)
    }

    fn set_flag(&mut self, id: &str, flag: Interaction, value: bool) -> Result<bool> {
        let entry = self.entry_mut(id)?;
        let previous = entry.interaction.contains(flag);
        if previous != value {
            entry.interaction.set(flag, value);
            trace!(node = id, ?flag, value, "interaction");
            self.bump();
        }
        Ok(previous)
    }

    /// Set or clear the `selected` flag, returning its previous value.
    pub fn set_selected(&mut self, id: &str, selected: bool) -> Result<bool> {
        self.set_flag(id, Interaction::SELECTED, selected)
    }

    /// Set or clear the `hovered` flag, returning its previous value.
    pub fn set_hovered(&mut self, id: &str, hovered: bool) -> Result<bool> {
        self.set_flag(id, Interaction::HOVERED, hovered)
    }

    /// Clear the `selected` flag on every node.
    pub fn clear_selection(&mut self) {
        let mut changed = false;
        for e in self.nodes.values_mut() {
            changed |= e.interaction.selected();
            e.interaction.set_selected(false);
        }
        if changed {
            self.bump();
        }
    }

    /// Ids of selected nodes, in no particular order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes
            .iter()
            .filter(|(_, e)| e.interaction.selected())
            .map(|(id, _)| id.as_str())
    }

    /// Ids of hovered nodes, in no particular order.
    pub fn hovered_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes
            .iter()
            .filter(|(_, e)| e.interaction.hovered())
            .map(|(id, _)| id.as_str())
    }

    /// Raw edge → opposite node mapping of a node.
    pub fn opposite_node_ids(&self, id: &str) -> Option<&HashMap<String, String>> {
        self.nodes.get(id).map(|e| &e.opposite_node_ids)
    }
}

impl<R: StyleResolver> NodeStates<R> {
    /// Read-only view of one node, exposing its derived fields.
    pub fn node(&self, id: &str) -> Option<NodeView<'_, R>> {
        let (id, entry) = self.nodes.get_key_value(id)?;
        Some(NodeView {
            id: id.as_str(),
            entry,
            store: self,
        })
    }

    /// Views of all nodes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = NodeView<'_, R>> + '_ {
        self.nodes.iter().map(move |(id, entry)| NodeView {
            id: id.as_str(),
            entry,
            store: self,
        })
    }

    /// Merge of every positioned node's static-shape bounds.
    ///
    /// `position` supplies graph-space centers; nodes it returns `None` for are skipped.
    /// Returns `None` when no node is positioned. Feed the result to a viewport's
    /// fit-to-contents.
    pub fn bounds<F>(&self, mut position: F) -> Option<BoundingBox>
    where
        F: FnMut(&str) -> Option<Point>,
    {
        BoundingBox::merge_all(self.iter().filter_map(|node| {
            let center = position(node.id())?;
            Some(node.static_shape().bounds_at(center))
        }))
    }

    /// Select a node if its [`Selectable`] policy allows it, returning the previous value.
    ///
    /// Unlike [`set_selected`](Self::set_selected), which input handlers may use to force a
    /// state, this counts the other selected nodes against [`Selectable::Limit`]. Selecting an
    /// already selected node always succeeds.
    pub fn select(&mut self, id: &str) -> Result<bool> {
        let node = self
            .node(id)
            .ok_or_else(|| StateError::UnknownNode(String::from(id)))?;
        if node.selected() {
            return Ok(true);
        }
        let others = self.selected_ids().count();
        if !node.selectable().allows(others) {
            debug!(node = id, selected = others, "selection refused");
            return Err(StateError::NotSelectable(String::from(id)));
        }
        self.set_selected(id, true)
    }

    /// Computed once per revision.
    fn max_base_z_index(&self) -> i32 {
        *self.top_z_index.get_or_init(|| {
            self.nodes
                .iter()
                .map(|(id, e)| self.resolver.z_index(id, &e.data))
                .max()
                .unwrap_or(0)
        })
    }
}

/// Borrowed, read-only view of one node.
///
/// Stored facts are returned as-is; derived fields are recomputed from the resolver on each
/// call. There is no way to write a derived field.
pub struct NodeView<'a, R> {
    id: &'a str,
    entry: &'a NodeEntry,
    store: &'a NodeStates<R>,
}

impl<R> Clone for NodeView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for NodeView<'_, R> {}

impl<R> core::fmt::Debug for NodeView<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id)
            .field("interaction", &self.entry.interaction)
            .field("opposite_node_ids", &self.entry.opposite_node_ids)
            .finish_non_exhaustive()
    }
}

impl<'a, R: StyleResolver> NodeView<'a, R> {
    /// Node identifier.
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// The node's data record.
    pub fn data(&self) -> &'a NodeData {
        &self.entry.data
    }

    /// Interaction flags.
    pub fn interaction(&self) -> Interaction {
        self.entry.interaction
    }

    /// Whether the node is selected.
    pub fn selected(&self) -> bool {
        self.entry.interaction.selected()
    }

    /// Whether the node is hovered.
    pub fn hovered(&self) -> bool {
        self.entry.interaction.hovered()
    }

    fn resolver(&self) -> &'a R {
        &self.store.resolver
    }

    /// Shape to paint now: the selected shape when selected, else the hover shape when
    /// hovered, else the normal shape. A missing variant falls through to the next one.
    pub fn shape(&self) -> ShapeStyle {
        let r = self.resolver();
        let data = self.data();
        if self.selected()
            && let Some(s) = r.selected_shape(self.id, data)
        {
            return s;
        }
        if self.hovered()
            && let Some(s) = r.hover_shape(self.id, data)
        {
            return s;
        }
        r.normal_shape(self.id, data)
    }

    /// Shape ignoring hover and selection; used for framing and edge endpoints.
    pub fn static_shape(&self) -> ShapeStyle {
        self.resolver().normal_shape(self.id, self.data())
    }

    /// Glow style.
    pub fn glow(&self) -> NodeGlowConfig {
        self.resolver().glow(self.id, self.data())
    }

    /// Label style.
    pub fn label(&self) -> NodeLabelStyle {
        self.resolver().label(self.id, self.data())
    }

    /// Label text, taken from the field named by the label style.
    pub fn label_text(&self) -> Cow<'a, str> {
        let data = self.data();
        match self.label().text {
            LabelText::Name => data.name.as_deref().map(Cow::Borrowed).unwrap_or_default(),
            LabelText::Id => Cow::Borrowed(self.id),
            LabelText::Property(key) => data
                .property(&key)
                .map(Cow::Borrowed)
                .unwrap_or_default(),
        }
    }

    /// Whether the node may be dragged.
    pub fn draggable(&self) -> bool {
        self.resolver().draggable(self.id, self.data())
    }

    /// Whether, and how far, the node may be selected.
    pub fn selectable(&self) -> Selectable {
        self.resolver().selectable(self.id, self.data())
    }

    /// Stacking order.
    ///
    /// `0` unless z-ordering is enabled. Otherwise the resolver's base value, except that a
    /// hovered node (with bring-to-front-on-hover) sits above every base value plus one,
    /// and a selected node (with bring-to-front-on-selected) directly above every base value.
    pub fn z_index(&self) -> i32 {
        let r = self.resolver();
        let z_order = r.z_order();
        if !z_order.enabled {
            return 0;
        }
        if (self.hovered() && z_order.bring_to_front_on_hover)
            || (self.selected() && z_order.bring_to_front_on_selected)
        {
            let top = self.store.max_base_z_index();
            let lift = if self.hovered() && z_order.bring_to_front_on_hover {
                2
            } else {
                1
            };
            return top.saturating_add(lift);
        }
        r.z_index(self.id, self.data())
    }

    /// Raw edge → opposite node mapping.
    pub fn opposite_node_ids(&self) -> &'a HashMap<String, String> {
        &self.entry.opposite_node_ids
    }

    /// Opposite nodes keyed by edge id, each resolved to its id, data, current shape and
    /// label. Entries whose node is no longer stored are skipped.
    pub fn opposite_nodes(&self) -> HashMap<&'a str, OppositeNode<'a>> {
        let store = self.store;
        self.entry
            .opposite_node_ids
            .iter()
            .filter_map(|(edge_id, node_id)| {
                let other = store.node(node_id)?;
                Some((
                    edge_id.as_str(),
                    OppositeNode {
                        id: other.id(),
                        data: other.data(),
                        shape: other.shape(),
                        label: other.label(),
                    },
                ))
            })
            .collect()
    }

    /// Ids of distinct neighbors, sorted.
    pub fn neighbor_ids(&self) -> Vec<&'a str> {
        let mut ids: Vec<&'a str> = self
            .entry
            .opposite_node_ids
            .values()
            .map(String::as_str)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::NodeStyleConfig;
    use crate::style::{ShapeKind, ZOrderConfig};
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::Cell;

    fn circle(radius: f64, color: &str) -> ShapeStyle {
        ShapeStyle {
            kind: ShapeKind::Circle { radius },
            color: color.to_string(),
            stroke: None,
        }
    }

    fn config() -> NodeStyleConfig {
        NodeStyleConfig {
            normal: circle(10.0, "normal"),
            hover: Some(circle(12.0, "hover")),
            selected: Some(circle(14.0, "selected")),
            ..Default::default()
        }
    }

    fn triangle() -> NodeStates<NodeStyleConfig> {
        let mut s = NodeStates::new(config());
        s.insert("a", NodeData::named("Alpha")).unwrap();
        s.insert("b", NodeData::named("Beta")).unwrap();
        s.insert("c", NodeData::default()).unwrap();
        s.connect("ab", "a", "b").unwrap();
        s.connect("bc", "b", "c").unwrap();
        s.connect("ca", "c", "a").unwrap();
        s
    }

    // Resolver reading the base z-index from the "z" property.
    struct ByProperty;

    impl StyleResolver for ByProperty {
        fn normal_shape(&self, _id: &str, _data: &NodeData) -> ShapeStyle {
            circle(5.0, "p")
        }

        fn label(&self, _id: &str, _data: &NodeData) -> NodeLabelStyle {
            NodeLabelStyle {
                text: LabelText::Property("title".to_string()),
                ..Default::default()
            }
        }

        fn z_index(&self, _id: &str, data: &NodeData) -> i32 {
            data.property("z").and_then(|z| z.parse().ok()).unwrap_or(0)
        }

        fn z_order(&self) -> ZOrderConfig {
            ZOrderConfig {
                enabled: true,
                ..Default::default()
            }
        }
    }

    // Counts base z-index lookups; glows only hub nodes.
    #[derive(Default)]
    struct Counting {
        z_lookups: Cell<usize>,
    }

    impl StyleResolver for Counting {
        fn normal_shape(&self, _id: &str, _data: &NodeData) -> ShapeStyle {
            circle(5.0, "c")
        }

        fn label(&self, _id: &str, _data: &NodeData) -> NodeLabelStyle {
            NodeLabelStyle::default()
        }

        fn glow(&self, id: &str, _data: &NodeData) -> NodeGlowConfig {
            NodeGlowConfig {
                visible: id.starts_with("hub"),
                ..Default::default()
            }
        }

        fn selectable(&self, id: &str, _data: &NodeData) -> Selectable {
            if id.starts_with("hub") {
                Selectable::No
            } else {
                Selectable::Limit(2)
            }
        }

        fn z_index(&self, _id: &str, data: &NodeData) -> i32 {
            self.z_lookups.set(self.z_lookups.get() + 1);
            data.property("z").and_then(|z| z.parse().ok()).unwrap_or(0)
        }

        fn z_order(&self) -> ZOrderConfig {
            ZOrderConfig {
                enabled: true,
                ..Default::default()
            }
        }
    }

    #[test]
    fn insert_rejects_empty_and_duplicate_ids() {
        let mut s = NodeStates::new(config());
        assert_eq!(s.insert("", NodeData::default()), Err(StateError::EmptyNodeId));
        s.insert("a", NodeData::default()).unwrap();
        assert_eq!(
            s.insert("a", NodeData::named("again")),
            Err(StateError::DuplicateNode("a".to_string()))
        );
        assert_eq!(s.len(), 1);
        assert_eq!(s.node("a").unwrap().data().name, None, "original data kept");
    }

    #[test]
    fn connect_records_both_directions() {
        let s = triangle();
        let a = s.node("a").unwrap();
        assert_eq!(a.opposite_node_ids().get("ab").map(String::as_str), Some("b"));
        assert_eq!(a.opposite_node_ids().get("ca").map(String::as_str), Some("c"));
        assert_eq!(a.opposite_node_ids().len(), 2);
        assert_eq!(a.neighbor_ids(), vec!["b", "c"]);
        assert_eq!(s.edge("bc"), Some(("b", "c")));
        assert_eq!(s.edge_count(), 3);
    }

    #[test]
    fn connect_validates_inputs() {
        let mut s = triangle();
        assert_eq!(
            s.connect("ab", "a", "c"),
            Err(StateError::DuplicateEdge("ab".to_string()))
        );
        assert_eq!(
            s.connect("ax", "a", "x"),
            Err(StateError::UnknownNode("x".to_string()))
        );
        assert_eq!(s.connect("", "a", "b"), Err(StateError::EmptyEdgeId));
        assert!(
            !s.node("a").unwrap().opposite_node_ids().contains_key("ax"),
            "failed connect must not leave a half edge"
        );
    }

    #[test]
    fn self_loop_maps_to_itself() {
        let mut s = triangle();
        s.connect("aa", "a", "a").unwrap();
        let a = s.node("a").unwrap();
        assert_eq!(a.opposite_node_ids().get("aa").map(String::as_str), Some("a"));
        s.disconnect("aa").unwrap();
        assert!(!s.node("a").unwrap().opposite_node_ids().contains_key("aa"));
    }

    #[test]
    fn disconnect_removes_both_sides() {
        let mut s = triangle();
        s.disconnect("ab").unwrap();
        assert!(!s.node("a").unwrap().opposite_node_ids().contains_key("ab"));
        assert!(!s.node("b").unwrap().opposite_node_ids().contains_key("ab"));
        assert_eq!(
            s.disconnect("ab"),
            Err(StateError::UnknownEdge("ab".to_string()))
        );
    }

    #[test]
    fn remove_drops_incident_edges() {
        let mut s = triangle();
        let data = s.remove("a").unwrap();
        assert_eq!(data.name.as_deref(), Some("Alpha"));
        assert!(!s.contains("a"));
        assert_eq!(s.edge_count(), 1);
        assert_eq!(s.edge("ab"), None);
        let b = s.node("b").unwrap();
        assert_eq!(b.opposite_node_ids().len(), 1);
        assert!(b.opposite_node_ids().contains_key("bc"));
        assert_eq!(s.remove("a"), None);
    }

    #[test]
    fn shape_follows_interaction() {
        let mut s = triangle();
        let shape = |s: &NodeStates<NodeStyleConfig>| s.node("a").unwrap().shape().color;

        assert_eq!(shape(&s), "normal");
        s.set_hovered("a", true).unwrap();
        assert_eq!(shape(&s), "hover");
        s.set_selected("a", true).unwrap();
        assert_eq!(shape(&s), "selected", "selection wins over hover");
        s.set_hovered("a", false).unwrap();
        assert_eq!(shape(&s), "selected");
        s.set_selected("a", false).unwrap();
        assert_eq!(shape(&s), "normal");

        let a = s.node("a").unwrap();
        assert_eq!(a.static_shape(), circle(10.0, "normal"));
    }

    #[test]
    fn missing_selected_shape_falls_back_to_hover() {
        let mut s = NodeStates::new(NodeStyleConfig {
            selected: None,
            ..config()
        });
        s.insert("a", NodeData::default()).unwrap();
        s.set_selected("a", true).unwrap();
        assert_eq!(s.node("a").unwrap().shape().color, "normal");
        s.set_hovered("a", true).unwrap();
        assert_eq!(s.node("a").unwrap().shape().color, "hover");
    }

    #[test]
    fn interaction_changes_leave_other_fields_alone() {
        let mut s = triangle();
        let before = s.node("a").unwrap();
        let (id, ids, label, static_shape, glow, draggable, selectable) = (
            before.id().to_string(),
            before.opposite_node_ids().clone(),
            before.label(),
            before.static_shape(),
            before.glow(),
            before.draggable(),
            before.selectable(),
        );
        s.set_selected("a", true).unwrap();
        s.set_hovered("a", true).unwrap();
        let after = s.node("a").unwrap();
        assert_eq!(after.id(), id);
        assert_eq!(after.opposite_node_ids(), &ids);
        assert_eq!(after.label(), label);
        assert_eq!(after.static_shape(), static_shape);
        assert_eq!(after.glow(), glow);
        assert_eq!(after.draggable(), draggable);
        assert_eq!(after.selectable(), selectable);
        assert!(after.selected() && after.hovered());
    }

    #[test]
    fn set_flag_reports_previous_and_bumps_revision_on_change() {
        let mut s = triangle();
        let r0 = s.revision();
        assert_eq!(s.set_selected("a", true), Ok(false));
        let r1 = s.revision();
        assert!(r1 > r0);
        assert_eq!(s.set_selected("a", true), Ok(true));
        assert_eq!(s.revision(), r1, "no-op write keeps the revision");
        assert_eq!(
            s.set_hovered("zz", true),
            Err(StateError::UnknownNode("zz".to_string()))
        );
    }

    #[test]
    fn interaction_mut_and_selection_queries() {
        let mut s = triangle();
        s.interaction_mut("b").unwrap().set_selected(true);
        s.set_selected("c", true).unwrap();
        s.set_hovered("a", true).unwrap();
        let mut selected: Vec<_> = s.selected_ids().collect();
        selected.sort_unstable();
        assert_eq!(selected, vec!["b", "c"]);
        assert_eq!(s.hovered_ids().collect::<Vec<_>>(), vec!["a"]);
        s.clear_selection();
        assert_eq!(s.selected_ids().count(), 0);
        assert_eq!(s.interaction("a"), Some(Interaction::HOVERED));
        assert!(s.interaction_mut("missing").is_none());
    }

    #[test]
    fn label_text_sources() {
        let mut s = triangle();
        assert_eq!(s.node("a").unwrap().label_text(), "Alpha");
        assert_eq!(s.node("c").unwrap().label_text(), "", "no name, empty label");

        let mut by_id = config();
        by_id.label.text = LabelText::Id;
        s.set_resolver(by_id);
        assert_eq!(s.node("c").unwrap().label_text(), "c");

        let mut p = NodeStates::new(ByProperty);
        p.insert("n", NodeData::default().with_property("title", "Edge router"))
            .unwrap();
        p.insert("m", NodeData::default()).unwrap();
        assert_eq!(p.node("n").unwrap().label_text(), "Edge router");
        assert_eq!(p.node("m").unwrap().label_text(), "");
    }

    #[test]
    fn z_index_disabled_is_zero() {
        let mut s = triangle();
        s.set_hovered("a", true).unwrap();
        assert_eq!(s.node("a").unwrap().z_index(), 0);
    }

    #[test]
    fn z_index_brings_hovered_and_selected_to_front() {
        let mut s = NodeStates::new(ByProperty);
        s.insert("low", NodeData::default().with_property("z", "1"))
            .unwrap();
        s.insert("high", NodeData::default().with_property("z", "7"))
            .unwrap();
        s.insert("mid", NodeData::default().with_property("z", "3"))
            .unwrap();
        assert_eq!(s.node("low").unwrap().z_index(), 1);
        assert_eq!(s.node("high").unwrap().z_index(), 7);

        s.set_selected("low", true).unwrap();
        assert_eq!(s.node("low").unwrap().z_index(), 8);
        s.set_hovered("mid", true).unwrap();
        assert_eq!(s.node("mid").unwrap().z_index(), 9, "hover ranks above selection");
        s.set_hovered("low", true).unwrap();
        assert_eq!(s.node("low").unwrap().z_index(), 9);
    }

    #[test]
    fn top_z_index_is_computed_once_per_revision() {
        let mut s = NodeStates::new(Counting::default());
        for (id, z) in [("a", "1"), ("b", "4"), ("c", "2")] {
            s.insert(id, NodeData::default().with_property("z", z))
                .unwrap();
        }
        s.set_hovered("a", true).unwrap();
        s.set_selected("c", true).unwrap();

        let lookups = || s.resolver().z_lookups.get();
        let before = lookups();
        let z: Vec<i32> = ["a", "b", "c"]
            .iter()
            .map(|id| s.node(id).unwrap().z_index())
            .collect();
        assert_eq!(z, vec![6, 4, 5]);
        // One scan of three nodes plus b's own lookup.
        assert_eq!(lookups() - before, 4);
        assert_eq!(s.node("a").unwrap().z_index(), 6);
        assert_eq!(lookups() - before, 4, "cached until the next write");

        s.set_data("b", NodeData::default().with_property("z", "10"))
            .unwrap();
        assert_eq!(s.node("a").unwrap().z_index(), 12);
        assert_eq!(s.node("c").unwrap().z_index(), 11);
    }

    #[test]
    fn glow_comes_from_the_resolver() {
        let mut s = NodeStates::new(Counting::default());
        s.insert("hub1", NodeData::default()).unwrap();
        s.insert("leaf", NodeData::default()).unwrap();
        assert!(s.node("hub1").unwrap().glow().visible);
        assert!(!s.node("leaf").unwrap().glow().visible);

        let glow = NodeGlowConfig {
            visible: true,
            color: "#ff0000".to_string(),
            width: 6.0,
        };
        let mut u = NodeStates::new(NodeStyleConfig {
            glow: glow.clone(),
            ..config()
        });
        u.insert("n", NodeData::default()).unwrap();
        u.set_hovered("n", true).unwrap();
        assert_eq!(u.node("n").unwrap().glow(), glow);
    }

    #[test]
    fn select_honors_selectable_policy() {
        let mut s = NodeStates::new(Counting::default());
        for id in ["hub", "x", "y", "z"] {
            s.insert(id, NodeData::default()).unwrap();
        }
        assert_eq!(
            s.select("hub"),
            Err(StateError::NotSelectable("hub".to_string()))
        );
        assert_eq!(s.select("x"), Ok(false));
        assert_eq!(s.select("y"), Ok(false));
        assert_eq!(
            s.select("z"),
            Err(StateError::NotSelectable("z".to_string())),
            "limit of two reached"
        );
        assert_eq!(s.select("y"), Ok(true), "already selected");
        assert_eq!(
            s.select("nope"),
            Err(StateError::UnknownNode("nope".to_string()))
        );

        s.set_selected("x", false).unwrap();
        assert_eq!(s.select("z"), Ok(false));
        // Forcing through set_selected bypasses the policy.
        assert_eq!(s.set_selected("hub", true), Ok(false));
    }

    #[test]
    fn opposite_nodes_project_current_state() {
        let mut s = triangle();
        s.set_hovered("b", true).unwrap();
        let a = s.node("a").unwrap();
        let opp = a.opposite_nodes();
        assert_eq!(opp.len(), 2);
        let b = &opp["ab"];
        assert_eq!(b.id, "b");
        assert_eq!(b.data.name.as_deref(), Some("Beta"));
        assert_eq!(b.shape.color, "hover");
        assert_eq!(opp["ca"].id, "c");
        assert_eq!(opp["ca"].shape.color, "normal");
    }

    #[test]
    fn revision_tracks_all_writes() {
        let mut s = NodeStates::new(config());
        let mut last = s.revision();
        let mut check = |s: &NodeStates<NodeStyleConfig>| {
            assert!(s.revision() > last);
            last = s.revision();
        };
        s.insert("a", NodeData::default()).unwrap();
        check(&s);
        s.insert("b", NodeData::default()).unwrap();
        check(&s);
        s.connect("ab", "a", "b").unwrap();
        check(&s);
        s.set_data("a", NodeData::named("A")).unwrap();
        check(&s);
        s.set_resolver(config());
        check(&s);
        s.disconnect("ab").unwrap();
        check(&s);
        s.remove("b");
        check(&s);
    }

    #[test]
    fn bounds_merges_positioned_static_shapes() {
        let mut s = triangle();
        // Hover must not change framing.
        s.set_hovered("a", true).unwrap();
        let positions: HashMap<&str, Point> = [
            ("a", Point::new(0.0, 0.0)),
            ("b", Point::new(100.0, 50.0)),
        ]
        .into_iter()
        .collect();
        let b = s.bounds(|id| positions.get(id).copied()).unwrap();
        assert_eq!(b, BoundingBox::new(-10.0, -10.0, 110.0, 60.0));
        assert_eq!(s.bounds(|_| None), None);
    }

    #[test]
    fn bounds_propagate_nan_positions() {
        let s = triangle();
        let b = s
            .bounds(|id| {
                Some(match id {
                    "a" => Point::new(f64::NAN, 0.0),
                    _ => Point::new(50.0, 50.0),
                })
            })
            .unwrap();
        assert!(b.left.is_nan() && b.right.is_nan());
        assert!(b.validate().is_err());
    }
}
