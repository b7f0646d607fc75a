mod block_ranges;

pub use block_ranges::AR_BLOCK_RANGES;
