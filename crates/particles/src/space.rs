// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Memory domains and the parallel backends that run kernels over them.
//!
//! Both are plain marker types used as generic parameters.  A storage instance, an evaluator or
//! a container is bound to exactly one [`MemorySpace`] when its type is written down; there is
//! no run-time switch and no dynamic dispatch on the per-slot paths.

use std::{fmt, marker::PhantomData, sync::OnceLock};

use rayon::{ThreadPool, ThreadPoolBuilder};

/// A parallel-dispatch backend.
///
/// Kernels are written once as rayon parallel iterators and executed inside
/// [`ExecutionSpace::install`], which decides how many workers drive them.
pub trait ExecutionSpace: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Display name of the backend.
    const NAME: &'static str;

    /// Runs `op` on this backend.  Parallel iterators started inside `op` are driven by the
    /// backend's workers, and `install` returns only once all of them have finished.
    fn install<OP, R>(op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send;

    /// Number of workers available to a kernel.
    fn concurrency() -> usize;
}

/// Work-stealing dispatch over rayon's global thread pool.
#[derive(Copy, Clone, Debug, Default)]
pub struct Threads;

impl ExecutionSpace for Threads {
    const NAME: &'static str = "Threads";

    #[inline]
    fn install<OP, R>(op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        op()
    }

    fn concurrency() -> usize {
        rayon::current_num_threads()
    }
}

/// Sequential dispatch: kernels run on a dedicated pool with a single worker, so a slot loop
/// visits slots one after the other in index order.
#[derive(Copy, Clone, Debug, Default)]
pub struct Serial;

fn serial_pool() -> Option<&'static ThreadPool> {
    static POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();
    POOL.get_or_init(|| {
        match ThreadPoolBuilder::new()
            .num_threads(1)
            .thread_name(|_| "ljmd-serial".to_owned())
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                log::warn!("unable to start the serial worker, falling back to the global pool: {err}");
                None
            }
        }
    })
    .as_ref()
}

impl ExecutionSpace for Serial {
    const NAME: &'static str = "Serial";

    fn install<OP, R>(op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match serial_pool() {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    fn concurrency() -> usize {
        1
    }
}

/// A memory domain that particle columns can live in.
pub trait MemorySpace: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Backend that executes per-slot kernels over data in this domain.
    type Exec: ExecutionSpace;

    /// Display name of the domain.
    const NAME: &'static str;

    /// True if the host can address this memory directly.
    const IS_HOST: bool;

    /// Batches in this domain are padded with dummy slots to a multiple of this many slots.
    const BATCH_WIDTH: usize;
}

/// Host-resident memory, with kernels dispatched by `E`.
#[derive(Copy, Clone, Debug, Default)]
pub struct HostSpace<E: ExecutionSpace = Threads>(PhantomData<E>);

impl<E: ExecutionSpace> MemorySpace for HostSpace<E> {
    type Exec = E;
    const NAME: &'static str = "HostSpace";
    const IS_HOST: bool = true;
    // One 512-bit register of f64 lanes.
    const BATCH_WIDTH: usize = 8;
}

/// Accelerator-resident memory.
///
/// Columns in this domain are their own allocation; data reaches the host only through an
/// explicit deep copy ([`crate::SoA::to_space`]).  Without an accelerator runtime the kernels
/// are driven by [`Threads`].
#[derive(Copy, Clone, Debug, Default)]
pub struct DeviceSpace;

impl MemorySpace for DeviceSpace {
    type Exec = Threads;
    const NAME: &'static str = "DeviceSpace";
    const IS_HOST: bool = false;
    // One warp.
    const BATCH_WIDTH: usize = 32;
}

/// The memory space selected for this build.
#[cfg(feature = "device")]
pub type DefaultSpace = DeviceSpace;

/// The memory space selected for this build.
#[cfg(not(feature = "device"))]
pub type DefaultSpace = HostSpace;

/// Returns `"<memory>/<exec>"` for log lines.
pub fn describe<M: MemorySpace>() -> String {
    format!("{}/{}", M::NAME, <M::Exec as ExecutionSpace>::NAME)
}


// End of File
