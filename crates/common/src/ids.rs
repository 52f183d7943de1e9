// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::ops::Range;

/// The identifier of a particle. Stable for the particle's lifetime and unique among the owned
/// particles of one process. Halo particles mirror a particle owned by a neighbouring domain and
/// carry that particle's id, which therefore never collides with a local owned id.
pub type ParticleId = u64;

/// The species tag of a particle. Reserved for per-type parameter lookup; the force law
/// currently applies the same parameters to every type.
pub type ParticleTypeId = u64;

/// Hands out consecutive, never reused particle ids.
///
/// Population code uses one allocator per process so that owned ids `0..n` are followed by halo
/// ids `n..n + h`, which keeps both sets disjoint by construction.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: ParticleId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves `count` consecutive ids and returns them as a range.
    pub fn reserve(&mut self, count: usize) -> Range<ParticleId> {
        let start = self.next;
        self.next += count as ParticleId;
        start..self.next
    }
}


// End of File
