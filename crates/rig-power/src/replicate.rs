//! Batch execution of independent replicates.

use rig_core::{ReplicateId, ReplicateRng};

use crate::PowerResult;

/// Run `n_sims` replicates of `f` and collect the results in replicate
/// order.
///
/// Replicate `i` receives `ReplicateRng::new(master_seed, ReplicateId(i))`,
/// so its draws do not depend on which thread runs it.  With the `parallel`
/// feature the replicates run on Rayon's pool.  The first error aborts the
/// batch.
pub fn run_replicates<T, F>(n_sims: u32, master_seed: u64, f: F) -> PowerResult<Vec<T>>
where
    T: Send,
    F: Fn(ReplicateRng) -> PowerResult<T> + Sync + Send,
{
    let rng_for = |i: u32| ReplicateRng::new(master_seed, ReplicateId(i));

    #[cfg(not(feature = "parallel"))]
    {
        (0..n_sims).map(|i| f(rng_for(i))).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..n_sims).into_par_iter().map(|i| f(rng_for(i))).collect()
    }
}
