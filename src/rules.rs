use crate::arena::{Arena, NodeId, NodeKind};
use crate::error::CapacityExceeded;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
	ModusPonens,
	// A -> (C -> A)
	Weaken,
	// (A -> (B -> C)) -> ((A -> B) -> (A -> C))
	Distribute,
	// (~A -> ~B) -> (B -> A)
	Contrapose,
}

impl Rule {
	pub fn id(self) -> u8 {
		match self {
			Rule::ModusPonens => 0,
			Rule::Weaken => 1,
			Rule::Distribute => 2,
			Rule::Contrapose => 3,
		}
	}

	/// The rules worth trying on a resolved goal of this kind, most specific first.
	pub fn candidates(kind: NodeKind) -> &'static [Rule] {
		match kind {
			NodeKind::Leaf(_) => &[],
			// no template concludes a negation
			NodeKind::Negative(_) => &[Rule::ModusPonens],
			NodeKind::MpRoot(..) => &[Rule::Distribute, Rule::Weaken, Rule::ModusPonens],
			_ => &[
				Rule::Contrapose,
				Rule::Distribute,
				Rule::Weaken,
				Rule::ModusPonens,
			],
		}
	}

	/// The axiom schema behind this rule. Modus ponens has none, its expansion is
	/// `expand_by_modus_ponens`.
	pub fn template(self) -> Option<Template> {
		match self {
			Rule::ModusPonens => None,
			Rule::Weaken => Some(weaken as Template),
			Rule::Distribute => Some(distribute as Template),
			Rule::Contrapose => Some(contrapose as Template),
		}
	}
}

/// Forces a schema's shape onto the goal, growing metavariables where the shape needs
/// structure, then unifies the positions the schema requires equal.
///
/// `Ok(false)` covers both a shape mismatch and a failed unification; the arena may be
/// half-modified then and should be dropped.
pub type Template = fn(&mut Arena, NodeId) -> Result<bool, CapacityExceeded>;

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "L{}", self.id())
	}
}

// Ok(None) from a shape fit means the template does not match
macro_rules! fit {
	($e:expr) => {
		match $e? {
			Some(parts) => parts,
			None => return Ok(false),
		}
	};
}

fn implication(arena: &mut Arena, id: NodeId) -> Result<Option<(NodeId, NodeId)>, CapacityExceeded> {
	let id = arena.resolve(id);
	let kind = arena[id].kind;
	match kind {
		NodeKind::Unknown => arena.grow_into_imply(id).map(Some),
		kind => Ok(kind.implication()),
	}
}

fn negation(arena: &mut Arena, id: NodeId) -> Result<Option<NodeId>, CapacityExceeded> {
	let id = arena.resolve(id);
	let kind = arena[id].kind;
	match kind {
		NodeKind::Unknown => arena.grow_into_negative(id).map(Some),
		NodeKind::Negative(operand) => Ok(Some(operand)),
		_ => Ok(None),
	}
}

// A -> (C -> B), A = B
fn weaken(arena: &mut Arena, goal: NodeId) -> Result<bool, CapacityExceeded> {
	let (a, r) = fit!(implication(arena, goal));
	// a synthetic implication is never the consequent here
	if let NodeKind::MpRoot(..) = arena[arena.resolve(r)].kind {
		return Ok(false);
	}
	let (_, b) = fit!(implication(arena, r));
	Ok(arena.unify(a, b))
}

// (LL -> (LRL -> LRR)) -> ((RLL -> RLR) -> (RRL -> RRR))
fn distribute(arena: &mut Arena, goal: NodeId) -> Result<bool, CapacityExceeded> {
	let (l, r) = fit!(implication(arena, goal));
	let (ll, lr) = fit!(implication(arena, l));
	let (lrl, lrr) = fit!(implication(arena, lr));
	let (rl, rr) = fit!(implication(arena, r));
	let (rll, rlr) = fit!(implication(arena, rl));
	let (rrl, rrr) = fit!(implication(arena, rr));
	Ok(arena.unify(rll, rrl)
		&& arena.unify(ll, rll)
		&& arena.unify(lrl, rlr)
		&& arena.unify(lrr, rrr))
}

// (~LLL -> ~LRL) -> (RL -> RR)
fn contrapose(arena: &mut Arena, goal: NodeId) -> Result<bool, CapacityExceeded> {
	let (l, r) = fit!(implication(arena, goal));
	// consequent first, a mismatch there must not grow the antecedent
	let (rl, rr) = fit!(implication(arena, r));
	let (ll, lr) = fit!(implication(arena, l));
	let lll = fit!(negation(arena, ll));
	let lrl = fit!(negation(arena, lr));
	Ok(arena.unify(lll, rr) && arena.unify(lrl, rl))
}

/// To prove `goal`, prove a fresh `X` and `X -> goal`.
///
/// `from` is the worklist entry that led to `goal`, possibly a binding of it; `X`
/// inherits its continuation. Returns the new `MpRoot`, which continues with `X`.
pub fn expand_by_modus_ponens(
	arena: &mut Arena,
	from: NodeId,
	goal: NodeId,
) -> Result<NodeId, CapacityExceeded> {
	let next = arena[from].next;
	let hypothesis = arena.push_node(NodeKind::Unknown, next)?;
	arena.push_node(NodeKind::MpRoot(hypothesis, goal), Some(hypothesis))
}
