use crate::arena::{Arena, NodeId, NodeKind};

impl Arena {
	/// Makes `a` and `b` structurally identical if possible, binding metavariables
	/// in place. Bindings made before a failure are not undone; callers unify on a
	/// branch copy and drop it when this returns false.
	pub fn unify(&mut self, a: NodeId, b: NodeId) -> bool {
		if a == b {
			return true;
		}
		match (self[a].kind, self[b].kind) {
			(NodeKind::Virtual(target), _) => self.unify(target, b),
			(_, NodeKind::Virtual(target)) => self.unify(a, target),
			(NodeKind::Unknown, _) => self.bind(a, b),
			(_, NodeKind::Unknown) => self.bind(b, a),
			(NodeKind::Leaf(x), NodeKind::Leaf(y)) => x == y,
			(NodeKind::Negative(x), NodeKind::Negative(y)) => self.unify(x, y),
			(ka, kb) => match (ka.implication(), kb.implication()) {
				(Some((al, ar)), Some((bl, br))) => self.unify(al, bl) && self.unify(ar, br),
				_ => false,
			},
		}
	}

	// var must be Unknown
	fn bind(&mut self, var: NodeId, target: NodeId) -> bool {
		if self.is_descendant_or_self(target, var) {
			return false;
		}
		self.set_kind(var, NodeKind::Virtual(target));
		true
	}
}

#[cfg(test)]
mod test {
	use crate::arena::{Arena, NodeId, NodeKind};
	use crate::derivation::render_formula;
	use proptest::prelude::*;

	fn leaf(arena: &mut Arena, symbol: i64) -> NodeId {
		arena.push(NodeKind::Leaf(symbol)).unwrap()
	}

	fn imply(arena: &mut Arena, l: NodeId, r: NodeId) -> NodeId {
		arena.push(NodeKind::Imply(l, r)).unwrap()
	}

	#[test]
	fn test_leaves() {
		let mut arena = Arena::with_capacity(8);
		let p = leaf(&mut arena, 1);
		let p2 = leaf(&mut arena, 1);
		let q = leaf(&mut arena, 2);
		assert!(arena.unify(p, p2));
		assert!(!arena.unify(p, q));
		let not_p = arena.push(NodeKind::Negative(p)).unwrap();
		assert!(!arena.unify(not_p, p));
	}

	#[test]
	fn test_bind_keeps_next() {
		let mut arena = Arena::with_capacity(8);
		let p = leaf(&mut arena, 1);
		let x = arena.push_node(NodeKind::Unknown, Some(p)).unwrap();
		let q = leaf(&mut arena, 2);
		assert!(arena.unify(q, x));
		assert_eq!(arena[x].kind, NodeKind::Virtual(q));
		assert_eq!(arena[x].next, Some(p));
		// already bound, so the second attempt goes through the binding
		assert!(!arena.unify(x, p));
		let q2 = leaf(&mut arena, 2);
		assert!(arena.unify(x, q2));
	}

	#[test]
	fn test_occurs_check() {
		let mut arena = Arena::with_capacity(8);
		let x = arena.push(NodeKind::Unknown).unwrap();
		let p = leaf(&mut arena, 1);
		let x_to_p = imply(&mut arena, x, p);
		assert!(!arena.unify(x, x_to_p));
		assert_eq!(arena[x].kind, NodeKind::Unknown);

		// same cycle hidden behind a binding
		let y = arena.push(NodeKind::Unknown).unwrap();
		assert!(arena.unify(y, x_to_p));
		assert!(!arena.unify(x, y));
		assert_eq!(arena[x].kind, NodeKind::Unknown);
	}

	#[test]
	fn test_synthetic_implication() {
		let mut arena = Arena::with_capacity(16);
		let x = arena.push(NodeKind::Unknown).unwrap();
		let p = leaf(&mut arena, 1);
		let mp = arena.push(NodeKind::MpRoot(x, p)).unwrap();
		let q = leaf(&mut arena, 2);
		let p2 = leaf(&mut arena, 1);
		let plain = imply(&mut arena, q, p2);
		assert!(arena.unify(mp, plain));
		assert_eq!(arena.resolve(x), q);
	}

	#[derive(Clone, Debug)]
	enum TermDesc {
		Var(u8),
		Leaf(u8),
		Not(Box<TermDesc>),
		Imply(Box<TermDesc>, Box<TermDesc>),
	}

	fn arb_term_desc() -> BoxedStrategy<TermDesc> {
		let atom = prop_oneof![
			(0..3u8).prop_map(TermDesc::Var),
			(0..3u8).prop_map(TermDesc::Leaf),
		];
		atom.prop_recursive(4, 24, 2, |inner| {
			prop_oneof![
				inner.clone().prop_map(|t| TermDesc::Not(Box::new(t))),
				(inner.clone(), inner).prop_map(|(a, b)| TermDesc::Imply(Box::new(a), Box::new(b))),
			]
		})
		.boxed()
	}

	// variables with the same number share one Unknown node
	fn build(desc: &TermDesc, arena: &mut Arena, vars: &mut [Option<NodeId>; 3]) -> NodeId {
		match desc {
			TermDesc::Var(i) => {
				*vars[*i as usize].get_or_insert_with(|| arena.push(NodeKind::Unknown).unwrap())
			}
			TermDesc::Leaf(i) => leaf(arena, *i as i64),
			TermDesc::Not(a) => {
				let a = build(a, arena, vars);
				arena.push(NodeKind::Negative(a)).unwrap()
			}
			TermDesc::Imply(a, b) => {
				let a = build(a, arena, vars);
				let b = build(b, arena, vars);
				imply(arena, a, b)
			}
		}
	}

	fn build_pair(a: &TermDesc, b: &TermDesc) -> (Arena, NodeId, NodeId) {
		let mut arena = Arena::with_capacity(1024);
		let mut vars = [None; 3];
		let a = build(a, &mut arena, &mut vars);
		let b = build(b, &mut arena, &mut vars);
		(arena, a, b)
	}

	fn children(kind: NodeKind) -> Vec<NodeId> {
		match kind {
			NodeKind::Leaf(_) | NodeKind::Unknown => vec![],
			NodeKind::Negative(a) | NodeKind::Virtual(a) => vec![a],
			NodeKind::Imply(a, b) | NodeKind::MpRoot(a, b) => vec![a, b],
		}
	}

	fn acyclic(arena: &Arena) -> bool {
		fn visit(arena: &Arena, id: NodeId, state: &mut Vec<u8>) -> bool {
			match state[id.index()] {
				1 => return false,
				2 => return true,
				_ => {}
			}
			state[id.index()] = 1;
			let ok = children(arena[id].kind)
				.into_iter()
				.all(|child| visit(arena, child, state));
			state[id.index()] = 2;
			ok
		}
		let mut state = vec![0; arena.len()];
		arena.iter().all(|(id, _)| visit(arena, id, &mut state))
	}

	proptest! {
		#[test]
		fn prop_unify_reflexive(desc in arb_term_desc()) {
			let mut arena = Arena::with_capacity(1024);
			let a = build(&desc, &mut arena, &mut [None; 3]);
			let before = arena.clone();
			prop_assert!(arena.unify(a, a));
			prop_assert_eq!(arena, before);
		}

		#[test]
		fn prop_unify_never_binds_cycles(a in arb_term_desc(), b in arb_term_desc()) {
			let (mut arena, a, b) = build_pair(&a, &b);
			arena.unify(a, b);
			prop_assert!(acyclic(&arena));
		}

		#[test]
		fn prop_unified_terms_agree(a in arb_term_desc(), b in arb_term_desc()) {
			let (mut arena, a, b) = build_pair(&a, &b);
			if arena.unify(a, b) {
				prop_assert_eq!(render_formula(&arena, a), render_formula(&arena, b));
			}
		}
	}
}
