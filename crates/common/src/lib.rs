// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Small primitives shared by every crate of the workspace: the domain box and the integer
//! aliases used to name particles and particle species.

mod bounding_box;
pub mod ids;

pub use bounding_box::BoundingBox;
pub use ids::{IdAllocator, ParticleId, ParticleTypeId};

// End of File
