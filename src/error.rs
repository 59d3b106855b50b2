use thiserror::Error;

/// An arena ran out of room while growing. Fatal for the whole search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("arena capacity of {capacity} nodes exceeded")]
pub struct CapacityExceeded {
	pub capacity: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProveError {
	#[error(transparent)]
	CapacityExceeded(#[from] CapacityExceeded),

	// every branch ended at a goal no rule applies to, so no larger bound can help
	#[error("formula is unprovable: every branch dead-ends at bound {bound}")]
	Unprovable { bound: u32 },

	#[error("no proof found up to bound {bound}")]
	BoundLimit { bound: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("unexpected character {0:?}")]
	UnexpectedCharacter(String),

	#[error("symbol {0} is out of range")]
	InvalidSymbol(String),

	#[error("unbalanced parentheses")]
	Unbalanced,

	#[error("operator without operand")]
	MissingOperand,

	#[error("malformed implication, expected `(A -> B)`")]
	MalformedImplication,

	#[error("trailing input after formula")]
	Trailing,

	#[error("empty formula")]
	Empty,

	#[error(transparent)]
	CapacityExceeded(#[from] CapacityExceeded),
}

#[derive(Debug, Error)]
pub enum Error {
	#[error("parse error: {0}")]
	Parse(#[from] ParseError),

	#[error(transparent)]
	Prove(#[from] ProveError),
}
