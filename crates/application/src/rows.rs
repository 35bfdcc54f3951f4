//! Order-preserving per-row fan-out.

use rayon::prelude::*;

/// Map every row index through `f`, in parallel once `len` reaches
/// `parallel_threshold`. Output order always follows row order.
pub(crate) fn map_rows<T, F>(len: usize, parallel_threshold: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if len >= parallel_threshold {
        (0..len).into_par_iter().map(f).collect()
    } else {
        (0..len).map(f).collect()
    }
}

/// Like [`map_rows`], keeping only the `Some` results.
pub(crate) fn filter_map_rows<T, F>(len: usize, parallel_threshold: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> Option<T> + Sync + Send,
{
    if len >= parallel_threshold {
        (0..len).into_par_iter().filter_map(f).collect()
    } else {
        (0..len).filter_map(f).collect()
    }
}
