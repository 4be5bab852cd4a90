//! Order-preserving fan-out for batch rendering.
//!
//! With the `rayon-executor` feature the work runs on rayon's global
//! work-stealing pool; without it, items are processed in sequence. Either
//! way results come back in input order.

#[cfg(feature = "rayon-executor")]
use rayon::prelude::*;

#[cfg(feature = "rayon-executor")]
pub(crate) fn map_ordered<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "rayon-executor"))]
pub(crate) fn map_ordered<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    items.iter().map(f).collect()
}

/// Number of workers a batch can use.
pub fn parallelism() -> usize {
    #[cfg(feature = "rayon-executor")]
    {
        rayon::current_num_threads()
    }
    #[cfg(not(feature = "rayon-executor"))]
    {
        1
    }
}
