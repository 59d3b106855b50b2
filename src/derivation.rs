use crate::arena::{Arena, NodeId, NodeKind, Symbol};
use crate::rules::Rule;
use crate::search::Proof;
use std::collections::HashMap;
use std::fmt::{self, Write};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
	pub rule: Rule,
	pub formula: String,
}

/// A printable proof: one line per trace entry, in trace order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation {
	pub lines: Vec<Line>,
}

impl Derivation {
	/// Renders every step of `proof`. Metavariables that are still unbound become
	/// fresh symbols -1, -2, ... in order of first appearance across the whole
	/// derivation; the proof itself is left as it is.
	pub fn from_proof(proof: &Proof) -> Derivation {
		let mut printer = Printer::new(&proof.arena);
		let lines = proof
			.trace
			.iter()
			.map(|step| Line {
				rule: step.rule,
				formula: printer.render(step.node),
			})
			.collect();
		Derivation { lines }
	}
}

impl fmt::Display for Derivation {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for line in &self.lines {
			writeln!(f, "{}:{}", line.rule, line.formula)?;
		}
		Ok(())
	}
}

/// Renders a single formula with its own fresh-symbol numbering.
pub fn render_formula(arena: &Arena, id: NodeId) -> String {
	Printer::new(arena).render(id)
}

struct Printer<'a> {
	arena: &'a Arena,
	fresh: HashMap<NodeId, Symbol>,
}

impl<'a> Printer<'a> {
	fn new(arena: &'a Arena) -> Printer<'a> {
		Printer {
			arena,
			fresh: HashMap::new(),
		}
	}

	fn render(&mut self, id: NodeId) -> String {
		let mut out = String::new();
		// writing into a String cannot fail
		let _ = self.render_recurse(id, &mut out);
		out
	}

	fn render_recurse(&mut self, id: NodeId, out: &mut String) -> fmt::Result {
		match self.arena[id].kind {
			NodeKind::Unknown => {
				let next = -(self.fresh.len() as Symbol) - 1;
				let symbol = *self.fresh.entry(id).or_insert(next);
				write!(out, "[{}]", symbol)
			}
			NodeKind::Leaf(symbol) => write!(out, "[{}]", symbol),
			NodeKind::Negative(a) => {
				out.push('~');
				self.render_recurse(a, out)
			}
			NodeKind::Virtual(target) => self.render_recurse(target, out),
			NodeKind::Imply(a, b) | NodeKind::MpRoot(a, b) => {
				out.push('(');
				self.render_recurse(a, out)?;
				out.push_str("->");
				self.render_recurse(b, out)?;
				out.push(')');
				Ok(())
			}
		}
	}
}
