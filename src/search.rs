use crate::arena::{Arena, NodeId};
use crate::config::ProverConfig;
use crate::error::ProveError;
use crate::parse::Problem;
use crate::rules::{expand_by_modus_ponens, Rule};
use tracing::{debug, info, trace};

/// One rule application: `rule` discharged the goal resolved at `node`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
	pub node: NodeId,
	pub rule: Rule,
}

/// A finished search: the arena as it stood when the last goal was discharged, and
/// the rules that got there. Steps are recorded while the recursion unwinds, so the
/// deepest goal comes first and the original goal last.
#[derive(Clone, Debug)]
pub struct Proof {
	pub arena: Arena,
	pub trace: Vec<Step>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Failure {
	// nothing applied and nothing was cut off, more budget would not change that
	DeadEnd,
	// some branch ran out of budget
	DepthExhausted,
}

#[derive(Clone, Debug)]
pub enum SearchOutcome {
	Proved(Proof),
	Failed(Failure),
}

/// Bounded depth-first search.
///
/// `goal` heads the worklist of `pending` goals; the rest hang off `next` links.
/// Each rule application spends one unit of `budget`. Every attempt works on its
/// own copy of `arena`, the caller's copy is never touched.
pub fn search(
	arena: &Arena,
	goal: Option<NodeId>,
	pending: u32,
	budget: u32,
) -> Result<SearchOutcome, ProveError> {
	// each pending goal costs at least one more step
	if budget < pending {
		return Ok(SearchOutcome::Failed(Failure::DepthExhausted));
	}
	if pending == 0 {
		return Ok(SearchOutcome::Proved(Proof {
			arena: arena.clone(),
			trace: Vec::new(),
		}));
	}
	if budget == 0 {
		return Ok(SearchOutcome::Failed(Failure::DepthExhausted));
	}
	let root = match goal {
		Some(root) => root,
		// worklist ran dry with goals still counted, only a malformed start gets here
		None => return Ok(SearchOutcome::Failed(Failure::DeadEnd)),
	};
	let target = arena.resolve(root);

	let mut failure = Failure::DeadEnd;
	for &rule in Rule::candidates(arena[target].kind) {
		trace!(%rule, node = %target, pending, budget, "trying rule");
		let mut branch = arena.clone();
		let outcome = match rule.template() {
			None => {
				let implication = expand_by_modus_ponens(&mut branch, root, target)?;
				search(&branch, Some(implication), pending + 1, budget - 1)?
			}
			Some(template) => {
				if !template(&mut branch, target)? {
					continue;
				}
				search(&branch, branch[root].next, pending - 1, budget - 1)?
			}
		};
		match outcome {
			SearchOutcome::Proved(mut proof) => {
				proof.trace.push(Step { node: target, rule });
				return Ok(SearchOutcome::Proved(proof));
			}
			SearchOutcome::Failed(reason) => failure = failure.max(reason),
		}
	}
	Ok(SearchOutcome::Failed(failure))
}

/// A proof together with the bound it was found at.
#[derive(Clone, Debug)]
pub struct Solution {
	pub bound: u32,
	pub proof: Proof,
}

/// Iterative deepening over `search`: bounds 1, 3, 5, ... until one succeeds.
pub fn prove(problem: &Problem, config: &ProverConfig) -> Result<Solution, ProveError> {
	let mut last = None;
	for bound in config.bounds() {
		if last.is_some() {
			info!(bound, "raising search bound");
		}
		match search(&problem.arena, Some(problem.root), 1, bound)? {
			SearchOutcome::Proved(proof) => {
				debug!(
					bound,
					steps = proof.trace.len(),
					nodes = proof.arena.len(),
					"proof found"
				);
				return Ok(Solution { bound, proof });
			}
			SearchOutcome::Failed(Failure::DeadEnd) => {
				return Err(ProveError::Unprovable { bound });
			}
			SearchOutcome::Failed(Failure::DepthExhausted) => last = Some(bound),
		}
	}
	Err(ProveError::BoundLimit {
		bound: last.unwrap_or(0),
	})
}
