mod core;
mod utils;
pub(crate) use utils::*;
