/// Default node limit for one search branch.
pub const DEFAULT_CAPACITY: usize = 256;

pub const INITIAL_BOUND: u32 = 1;

// bounds stay odd
pub const BOUND_STEP: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProverConfig {
	/// Maximum number of nodes one search branch may hold, input formula included.
	pub capacity: usize,
	/// Stop deepening once the bound would pass this. `None` searches until a proof turns up.
	pub max_bound: Option<u32>,
}

impl Default for ProverConfig {
	fn default() -> Self {
		ProverConfig {
			capacity: DEFAULT_CAPACITY,
			max_bound: None,
		}
	}
}

impl ProverConfig {
	/// The depth bounds the driver tries, in order.
	pub fn bounds(&self) -> impl Iterator<Item = u32> {
		let max_bound = self.max_bound;
		(0..)
			.map(|i: u32| INITIAL_BOUND + i * BOUND_STEP)
			.take_while(move |bound| max_bound.map_or(true, |max| *bound <= max))
	}
}
