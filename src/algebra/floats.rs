use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point values stored in a sparse table.
///
/// All numeric values held by [`SparseMatrix`](crate::table::SparseMatrix)
/// and its compressed views implement `FloatT`.  Implementations are provided
/// for any type satisfying the bounds below, which in practice means `f32`
/// and `f64`.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static + Send + Sync + Float + NumAssign + Default + Display + LowerExp + Debug + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + NumAssign
        + Default
        + Display
        + LowerExp
        + Debug
        + Sized
{
}
