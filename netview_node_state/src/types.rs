// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stored per-node facts: data record and interaction flags, plus the opposite-node descriptor.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::style::{NodeLabelStyle, ShapeStyle};

/// User data attached to a node.
///
/// Style resolution and label text read from it; the store never interprets it otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeData {
    /// Display name.
    pub name: Option<String>,
    /// Free-form string properties.
    pub properties: BTreeMap<String, String>,
}

impl NodeData {
    /// A record with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property insertion.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Look up a property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

bitflags::bitflags! {
    /// Interaction flags of a node.
    ///
    /// The two bits are independent: every combination is reachable and any bit may be set
    /// or cleared at any time. These are the only node fields input handling may write.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Interaction: u8 {
        /// Node is part of the selection.
        const SELECTED = 0b0000_0001;
        /// Pointer is over the node.
        const HOVERED  = 0b0000_0010;
    }
}

impl Interaction {
    /// Whether [`SELECTED`](Self::SELECTED) is set.
    pub fn selected(self) -> bool {
        self.contains(Self::SELECTED)
    }

    /// Whether [`HOVERED`](Self::HOVERED) is set.
    pub fn hovered(self) -> bool {
        self.contains(Self::HOVERED)
    }

    /// Set or clear [`SELECTED`](Self::SELECTED).
    pub fn set_selected(&mut self, value: bool) {
        self.set(Self::SELECTED, value);
    }

    /// Set or clear [`HOVERED`](Self::HOVERED).
    pub fn set_hovered(&mut self, value: bool) {
        self.set(Self::HOVERED, value);
    }
}

/// The node at the far end of an edge, as seen from one endpoint.
///
/// A projection built on demand by
/// [`NodeView::opposite_nodes`](crate::NodeView::opposite_nodes); it borrows the store
/// and has no lifecycle of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct OppositeNode<'a> {
    /// Identifier of the opposite node.
    pub id: &'a str,
    /// Its data record.
    pub data: &'a NodeData,
    /// Its current shape (hover and selection applied).
    pub shape: ShapeStyle,
    /// Its label style.
    pub label: NodeLabelStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_flags_are_independent() {
        let mut i = Interaction::default();
        assert!(!i.selected() && !i.hovered());
        i.set_hovered(true);
        assert!(i.hovered() && !i.selected());
        i.set_selected(true);
        assert_eq!(i, Interaction::SELECTED | Interaction::HOVERED);
        i.set_hovered(false);
        assert!(i.selected() && !i.hovered());
        i.set_selected(false);
        assert!(i.is_empty());
    }

    #[test]
    fn node_data_builder() {
        let d = NodeData::named("Router").with_property("site", "east");
        assert_eq!(d.name.as_deref(), Some("Router"));
        assert_eq!(d.property("site"), Some("east"));
        assert_eq!(d.property("rack"), None);
    }
}
