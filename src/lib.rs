//! Backward-chaining proof search for implicational propositional logic.
//!
//! Goals are discharged by three axiom templates, `A -> (C -> A)`,
//! `(A -> (B -> C)) -> ((A -> B) -> (A -> C))` and `(~A -> ~B) -> (B -> A)`, or split
//! by modus ponens, under iterative deepening. Templates are fitted by unification
//! against metavariables that grow into whatever shape a template asks for.

pub mod arena;
pub mod config;
pub mod derivation;
pub mod error;
pub mod parse;
pub mod rules;
pub mod search;
mod unify;

pub use crate::config::ProverConfig;
pub use crate::derivation::Derivation;
pub use crate::error::{Error, ParseError, ProveError};

/// Parses `string`, searches for a proof and renders it.
pub fn solve(string: &str, config: &ProverConfig) -> Result<Derivation, Error> {
	let problem = parse::parse(string, config.capacity)?;
	let solution = search::prove(&problem, config)?;
	Ok(Derivation::from_proof(&solution.proof))
}
