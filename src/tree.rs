// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A small file-system tree that computes full names by parent-chain traversal.
//!
//! This is the consumer side of the name contract. A node's full name is its
//! parent's full name with the node's base name appended, so the only name
//! operation the tree needs is [`Name::append`].
//!
//! Nodes live in an arena owned by [`FileSystem`] and are addressed by
//! [`NodeId`]. The root is a directory with an empty base name, which makes
//! `as_string()` of a full name look like an absolute path (`/usr/bin`).

use tracing::debug;

use crate::error::{NameError, Result};
use crate::name::{Name, StringArrayName};

/// Delimiter used for full names.
pub const PATH_DELIMITER: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
    /// Base-name reads and renames go to the target.
    Link { target: Option<NodeId> },
}

#[derive(Debug, Clone)]
struct Node {
    base_name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

#[derive(Debug, Clone)]
pub struct FileSystem {
    nodes: Vec<Node>,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem {
    /// A tree holding only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                base_name: String::new(),
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Directory,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn add_directory(&mut self, parent: NodeId, base_name: &str) -> Result<NodeId> {
        self.add_node(parent, base_name, NodeKind::Directory)
    }

    pub fn add_file(&mut self, parent: NodeId, base_name: &str) -> Result<NodeId> {
        self.add_node(parent, base_name, NodeKind::File)
    }

    pub fn add_link(
        &mut self,
        parent: NodeId,
        base_name: &str,
        target: Option<NodeId>,
    ) -> Result<NodeId> {
        if let Some(target) = target {
            self.node(target)?;
        }
        self.add_node(parent, base_name, NodeKind::Link { target })
    }

    pub fn kind(&self, id: NodeId) -> Result<NodeKind> {
        Ok(self.node(id)?.kind)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Point `link` at `target`.
    pub fn set_link_target(&mut self, link: NodeId, target: NodeId) -> Result<()> {
        self.node(target)?;
        match &mut self.node_mut(link)?.kind {
            NodeKind::Link { target: slot } => {
                *slot = Some(target);
                Ok(())
            }
            _ => Err(NameError::illegal_argument(format!(
                "node {:?} is not a link",
                link
            ))),
        }
    }

    /// Base name of `id`. A link reports its target's base name.
    pub fn base_name(&self, id: NodeId) -> Result<&str> {
        let resolved = self.resolve(id)?;
        Ok(&self.node(resolved)?.base_name)
    }

    /// Rename `id`. Renaming a link renames its target.
    pub fn rename(&mut self, id: NodeId, base_name: &str) -> Result<()> {
        check_base_name(base_name)?;
        let resolved = self.resolve(id)?;
        if resolved == self.root() {
            return Err(NameError::illegal_argument("the root cannot be renamed"));
        }
        debug!(?resolved, base_name, "rename");
        self.node_mut(resolved)?.base_name = base_name.to_owned();
        Ok(())
    }

    /// Move `id` under the directory `to`.
    pub fn move_to(&mut self, id: NodeId, to: NodeId) -> Result<()> {
        if self.node(to)?.kind != NodeKind::Directory {
            return Err(NameError::illegal_argument(format!(
                "move target {:?} is not a directory",
                to
            )));
        }
        let Some(old_parent) = self.node(id)?.parent else {
            return Err(NameError::illegal_argument("the root cannot be moved"));
        };
        if self.is_ancestor_or_self(id, to)? {
            return Err(NameError::illegal_argument(format!(
                "cannot move {:?} into its own subtree",
                id
            )));
        }

        self.node_mut(old_parent)?.children.retain(|child| *child != id);
        self.node_mut(to)?.children.push(id);
        self.node_mut(id)?.parent = Some(to);
        debug!(?id, ?old_parent, ?to, "move");

        self.check_node_invariant(id)
    }

    /// Full name of `id`, built by appending base names from the root down.
    pub fn full_name(&self, id: NodeId) -> Result<StringArrayName> {
        self.check_node_invariant(id)?;
        match self.node(id)?.parent {
            None => StringArrayName::new([""], Some(PATH_DELIMITER)),
            Some(parent) => self.full_name(parent)?.append(self.base_name(id)?),
        }
    }

    /// Every node at or below `from` whose [`base_name`](Self::base_name) is
    /// `base_name`, depth first.
    ///
    /// A link matches on its target's base name. Links without a target have
    /// no base name and never match.
    pub fn find_nodes(&self, from: NodeId, base_name: &str) -> Result<Vec<NodeId>> {
        check_base_name(base_name)?;
        let mut matches = Vec::new();
        let mut stack = vec![from];

        while let Some(id) = stack.pop() {
            let node = self.node(id)?;
            let resolved = match node.kind {
                NodeKind::Link { target: None } => None,
                _ => Some(self.base_name(id)?),
            };
            if resolved == Some(base_name) {
                matches.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }

        Ok(matches)
    }

    fn add_node(&mut self, parent: NodeId, base_name: &str, kind: NodeKind) -> Result<NodeId> {
        check_base_name(base_name)?;
        if self.node(parent)?.kind != NodeKind::Directory {
            return Err(NameError::illegal_argument(format!(
                "parent {:?} is not a directory",
                parent
            )));
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            base_name: base_name.to_owned(),
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.node_mut(parent)?.children.push(id);
        debug!(?id, ?parent, base_name, "add node");
        Ok(id)
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| NameError::illegal_argument(format!("unknown node {:?}", id)))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| NameError::illegal_argument(format!("unknown node {:?}", id)))
    }

    fn resolve(&self, id: NodeId) -> Result<NodeId> {
        match self.node(id)?.kind {
            NodeKind::Link { target: Some(target) } => Ok(target),
            NodeKind::Link { target: None } => Err(NameError::illegal_argument(format!(
                "link {:?} has no target",
                id
            ))),
            _ => Ok(id),
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> Result<bool> {
        loop {
            if id == ancestor {
                return Ok(true);
            }
            match self.node(id)?.parent {
                Some(parent) => id = parent,
                None => return Ok(false),
            }
        }
    }

    /// Non-root nodes have a non-empty base name and appear in their parent's children.
    fn check_node_invariant(&self, id: NodeId) -> Result<()> {
        let node = self.node(id)?;
        let Some(parent) = node.parent else {
            return Ok(());
        };
        if node.base_name.is_empty() {
            return Err(NameError::invariant_violated(format!(
                "node {:?} has an empty base name",
                id
            )));
        }
        if !self.node(parent)?.children.contains(&id) {
            return Err(NameError::invariant_violated(format!(
                "node {:?} is missing from the children of {:?}",
                id, parent
            )));
        }
        Ok(())
    }
}

fn check_base_name(base_name: &str) -> Result<()> {
    if base_name.is_empty() {
        return Err(NameError::illegal_argument("base name can't be empty"));
    }
    Ok(())
}
