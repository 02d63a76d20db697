mod core;
mod compress;
pub use compress::CompressionCounts;
