// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store errors.

use alloc::string::String;

/// Errors returned by [`NodeStates`](crate::NodeStates) mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Node identifiers must be non-empty.
    #[error("node id must not be empty")]
    EmptyNodeId,
    /// Edge identifiers must be non-empty.
    #[error("edge id must not be empty")]
    EmptyEdgeId,
    /// A node with this id is already stored.
    #[error("node already exists: {0}")]
    DuplicateNode(String),
    /// No node with this id is stored.
    #[error("unknown node: {0}")]
    UnknownNode(String),
    /// An edge with this id is already connected.
    #[error("edge already connected: {0}")]
    DuplicateEdge(String),
    /// No edge with this id is connected.
    #[error("unknown edge: {0}")]
    UnknownEdge(String),
    /// The node's [`Selectable`](crate::Selectable) policy refuses one more selection.
    #[error("node not selectable: {0}")]
    NotSelectable(String),
}

/// Result alias for store mutations.
pub type Result<T> = core::result::Result<T, StateError>;
