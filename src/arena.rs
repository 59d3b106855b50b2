use crate::error::CapacityExceeded;
use std::fmt;
use std::ops::Index;

/// Atomic proposition id. Parsed symbols are non-negative, fresh ones handed out
/// while printing a derivation are negative.
pub type Symbol = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Imply(NodeId, NodeId),
	Negative(NodeId),
	Leaf(Symbol),
	// metavariable
	Unknown,
	// a bound metavariable, stands for its target
	Virtual(NodeId),
	// antecedent -> consequent introduced by modus ponens, antecedent starts Unknown
	MpRoot(NodeId, NodeId),
}

impl NodeKind {
	/// Both operands if this is an implication, synthetic or not.
	pub fn implication(self) -> Option<(NodeId, NodeId)> {
		match self {
			NodeKind::Imply(l, r) | NodeKind::MpRoot(l, r) => Some((l, r)),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
	pub kind: NodeKind,
	// the goal to prove after this one; the pending worklist is threaded through here
	pub next: Option<NodeId>,
}

/// Append-only node storage with a hard size limit.
///
/// Cloning an arena is how a search branch gets private state: indices stay valid in
/// the copy and nothing written there is seen by siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arena {
	nodes: Vec<Node>,
	capacity: usize,
}

impl Arena {
	pub fn with_capacity(capacity: usize) -> Arena {
		Arena {
			nodes: Vec::new(),
			capacity,
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Highest populated index.
	pub fn last(&self) -> Option<NodeId> {
		self.nodes.len().checked_sub(1).map(NodeId)
	}

	pub fn push(&mut self, kind: NodeKind) -> Result<NodeId, CapacityExceeded> {
		self.push_node(kind, None)
	}

	pub fn push_node(
		&mut self,
		kind: NodeKind,
		next: Option<NodeId>,
	) -> Result<NodeId, CapacityExceeded> {
		if self.nodes.len() >= self.capacity {
			return Err(CapacityExceeded {
				capacity: self.capacity,
			});
		}
		let id = NodeId(self.nodes.len());
		self.nodes.push(Node { kind, next });
		Ok(id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
		self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
	}

	// rewrites the kind in place, the continuation link is kept
	pub(crate) fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
		self.nodes[id.0].kind = kind;
	}

	/// Follows `Virtual` bindings to the node they stand for. Chains are left as they are.
	pub fn resolve(&self, mut id: NodeId) -> NodeId {
		while let NodeKind::Virtual(target) = self[id].kind {
			id = target;
		}
		id
	}

	/// Occurs check: is `index` the node `root` or somewhere below it, bindings included.
	pub fn is_descendant_or_self(&self, root: NodeId, index: NodeId) -> bool {
		if root == index {
			return true;
		}
		match self[root].kind {
			NodeKind::Leaf(_) | NodeKind::Unknown => false,
			NodeKind::Negative(a) | NodeKind::Virtual(a) => self.is_descendant_or_self(a, index),
			NodeKind::Imply(a, b) | NodeKind::MpRoot(a, b) => {
				self.is_descendant_or_self(a, index) || self.is_descendant_or_self(b, index)
			}
		}
	}

	// id must be Unknown
	pub fn grow_into_imply(&mut self, id: NodeId) -> Result<(NodeId, NodeId), CapacityExceeded> {
		debug_assert_eq!(self[id].kind, NodeKind::Unknown);
		let left = self.push(NodeKind::Unknown)?;
		let right = self.push(NodeKind::Unknown)?;
		self.set_kind(id, NodeKind::Imply(left, right));
		Ok((left, right))
	}

	// id must be Unknown
	pub fn grow_into_negative(&mut self, id: NodeId) -> Result<NodeId, CapacityExceeded> {
		debug_assert_eq!(self[id].kind, NodeKind::Unknown);
		let operand = self.push(NodeKind::Unknown)?;
		self.set_kind(id, NodeKind::Negative(operand));
		Ok(operand)
	}
}

impl Index<NodeId> for Arena {
	type Output = Node;

	fn index(&self, id: NodeId) -> &Node {
		&self.nodes[id.0]
	}
}
