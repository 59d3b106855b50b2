use crate::arena::{Arena, NodeId, NodeKind, Symbol};
use crate::error::ParseError;
use plex::lexer;

/// A goal formula ready for search. Nodes are pushed children first, so `root`
/// is also the last populated slot.
#[derive(Clone, Debug)]
pub struct Problem {
	pub arena: Arena,
	pub root: NodeId,
}

#[derive(Debug)]
enum TokenOrUnit {
	Whitespace,
	Symbol(String),
	LeftParenthesis,
	RightParenthesis,
	Imply,
	Not,
	Unexpected(String),
	Unit(NodeId),
}

lexer! {
	fn next_token(text: 'a) -> TokenOrUnit;

	r#"[ \t\r\n]+"# => TokenOrUnit::Whitespace,
	r#"[0-9]+"# => TokenOrUnit::Symbol(text.to_owned()),
	r#"\[-?[0-9]+\]"# => TokenOrUnit::Symbol(text[1..text.len() - 1].to_owned()),
	r#"\("# => TokenOrUnit::LeftParenthesis,
	r#"\)"# => TokenOrUnit::RightParenthesis,
	r#"->|>|,"# => TokenOrUnit::Imply,
	r#"\~|/"# => TokenOrUnit::Not,
	r#"."# => TokenOrUnit::Unexpected(text.to_owned()),
}

/// Reads one formula. Atoms are integers, optionally bracketed, `~` or `/` negates,
/// and implications are parenthesized with `->`, `>` or `,` between the sides.
///
/// `capacity` is the node limit of the arena the search will grow.
pub fn parse(string: &str, capacity: usize) -> Result<Problem, ParseError> {
	let mut arena = Arena::with_capacity(capacity);
	let mut token_stack: Vec<TokenOrUnit> = Vec::new();
	let mut remaining = string;
	// ( - A - -> - B <<< TOKEN STACK, collapsed into one unit at ")"
	while let Some((token, new_remaining)) = next_token(remaining) {
		match token {
			TokenOrUnit::Whitespace => {}
			TokenOrUnit::Unit(_) => unreachable!(),
			TokenOrUnit::Unexpected(text) => return Err(ParseError::UnexpectedCharacter(text)),
			TokenOrUnit::Symbol(digits) => {
				let symbol: Symbol = match digits.parse() {
					Ok(symbol) => symbol,
					Err(_) => return Err(ParseError::InvalidSymbol(digits)),
				};
				let id = arena.push(NodeKind::Leaf(symbol))?;
				push_unit(&mut arena, &mut token_stack, id)?;
			}
			TokenOrUnit::RightParenthesis => {
				let consequent = pop_unit(&mut token_stack)?;
				match token_stack.pop() {
					Some(TokenOrUnit::Imply) => {}
					None => return Err(ParseError::Unbalanced),
					Some(_) => return Err(ParseError::MalformedImplication),
				}
				let antecedent = pop_unit(&mut token_stack)?;
				match token_stack.pop() {
					Some(TokenOrUnit::LeftParenthesis) => {}
					None => return Err(ParseError::Unbalanced),
					Some(_) => return Err(ParseError::MalformedImplication),
				}
				let id = arena.push(NodeKind::Imply(antecedent, consequent))?;
				push_unit(&mut arena, &mut token_stack, id)?;
			}
			any_token => token_stack.push(any_token),
		}
		remaining = new_remaining;
	}
	if let Some(ch) = remaining.chars().next() {
		return Err(ParseError::UnexpectedCharacter(ch.to_string()));
	}

	let root = match token_stack.pop() {
		Some(TokenOrUnit::Unit(root)) => root,
		Some(TokenOrUnit::LeftParenthesis) => return Err(ParseError::Unbalanced),
		Some(_) => return Err(ParseError::MissingOperand),
		None => return Err(ParseError::Empty),
	};
	if token_stack
		.iter()
		.any(|token| matches!(token, TokenOrUnit::LeftParenthesis))
	{
		return Err(ParseError::Unbalanced);
	}
	match token_stack.last() {
		None => Ok(Problem { arena, root }),
		Some(TokenOrUnit::Unit(_)) => Err(ParseError::Trailing),
		Some(TokenOrUnit::Imply) => Err(ParseError::MalformedImplication),
		Some(_) => Err(ParseError::MissingOperand),
	}
}

// prefix negations apply as soon as their operand is complete
fn push_unit(
	arena: &mut Arena,
	token_stack: &mut Vec<TokenOrUnit>,
	mut id: NodeId,
) -> Result<(), ParseError> {
	while let Some(TokenOrUnit::Not) = token_stack.last() {
		token_stack.pop();
		id = arena.push(NodeKind::Negative(id))?;
	}
	token_stack.push(TokenOrUnit::Unit(id));
	Ok(())
}

fn pop_unit(token_stack: &mut Vec<TokenOrUnit>) -> Result<NodeId, ParseError> {
	match token_stack.pop() {
		Some(TokenOrUnit::Unit(id)) => Ok(id),
		None => Err(ParseError::Unbalanced),
		Some(_) => Err(ParseError::MissingOperand),
	}
}
