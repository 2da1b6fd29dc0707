use super::node::{Node, NodeId};
use crate::error::GraphError;
use ahash::AHashMap;

/// Ceiling on the number of steps any single traversal may take. The shipped
/// graph is ~30 nodes deep at most; hitting this means an authoring error.
pub const MAX_TRAVERSAL_DEPTH: usize = 64;

/// An immutable `id -> Node` lookup table with a designated entry node.
///
/// Built once at load time from hand-authored data and never mutated, so it
/// can be freely shared between any number of concurrent sessions. Because
/// the data is hand-authored, [`NodeTable::validate`] should be run (and is
/// run by the test suite for the shipped tables) to reject dangling
/// references, cycles and unreachable outcomes before the table is used.
#[derive(Debug, Clone)]
pub struct NodeTable {
    nodes: AHashMap<NodeId, Node>,
    entry_id: NodeId,
}

impl NodeTable {
    /// Builds a table from a list of nodes. Rejects duplicate ids and a
    /// missing entry node; deeper structural checks live in [`validate`].
    ///
    /// [`validate`]: NodeTable::validate
    pub fn new(nodes: Vec<Node>, entry_id: impl Into<NodeId>) -> Result<Self, GraphError> {
        let entry_id = entry_id.into();
        let mut map = AHashMap::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id().to_string();
            if map.insert(id.clone(), node).is_some() {
                return Err(GraphError::DuplicateNode(id));
            }
        }
        if !map.contains_key(&entry_id) {
            return Err(GraphError::EntryNotFound(entry_id));
        }
        Ok(Self {
            nodes: map,
            entry_id,
        })
    }

    /// The id of the entry node.
    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id. Absence is an authoring defect surfaced as
    /// `UnknownNode`; `referenced_by` names the node that held the reference.
    pub fn get(&self, id: &str, referenced_by: &str) -> Result<&Node, GraphError> {
        self.nodes.get(id).ok_or_else(|| GraphError::UnknownNode {
            missing_node_id: id.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Checks the structural invariants of the graph:
    ///
    /// 1. every successor reference resolves to an existing node (closure);
    /// 2. every non-terminal node has at least one successor;
    /// 3. the graph reachable from the entry is acyclic;
    /// 4. every path from the entry terminates at an outcome within
    ///    [`MAX_TRAVERSAL_DEPTH`] steps.
    ///
    /// Acyclicity plus closure already bound every path, but the depth check
    /// keeps the limit explicit and catches tables that grow past what a
    /// wizard session should ever ask of a user.
    pub fn validate(&self) -> Result<(), GraphError> {
        for node in self.nodes.values() {
            if !node.is_terminal() && node.successors().is_empty() {
                return Err(GraphError::DeadEnd(node.id().to_string()));
            }
            for succ in node.successors() {
                self.get(succ, node.id())?;
            }
        }
        self.check_acyclic_and_bounded(&self.entry_id, &mut Vec::new())
    }

    /// Depth-first walk over every branch, tracking the current path to
    /// detect cycles. The path stack doubles as the depth counter.
    fn check_acyclic_and_bounded<'a>(
        &'a self,
        id: &'a str,
        path: &mut Vec<&'a str>,
    ) -> Result<(), GraphError> {
        if path.iter().any(|visited| *visited == id) {
            return Err(GraphError::CycleDetected(id.to_string()));
        }
        if path.len() >= MAX_TRAVERSAL_DEPTH {
            return Err(GraphError::UnboundedPath {
                from: self.entry_id.clone(),
                limit: MAX_TRAVERSAL_DEPTH,
            });
        }

        let node = self.get(id, path.last().copied().unwrap_or("entry"))?;
        if node.is_terminal() {
            return Ok(());
        }

        path.push(id);
        for succ in node.successors() {
            self.check_acyclic_and_bounded(succ, path)?;
        }
        path.pop();
        Ok(())
    }
}
