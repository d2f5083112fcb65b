pub mod block_slicing;
pub mod normalise;
pub mod significance;
