// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::DVec3;

/// An axis-aligned bounding box defined by two opposite corners (`min` and `max`).
/// `min.x <= max.x`, `min.y <= max.y`, `min.z <= max.z`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// A cube spanning `min..=max` along every axis.
    pub fn cube(min: f64, max: f64) -> Self {
        Self {
            min: DVec3::splat(min),
            max: DVec3::splat(max),
        }
    }

    /// Returns true if the provided `point` is inside this `BoundingBox`.
    /// Otherwise returns false.
    pub fn contains(&self, point: DVec3) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
            && self.min.z <= point.z
            && point.z <= self.max.z
    }

    /// Returns a copy grown by `margin` on every side. The halo region of a domain is the domain
    /// box expanded by the interaction cutoff.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: self.min - DVec3::splat(margin),
            max: self.max + DVec3::splat(margin),
        }
    }

    /// Edge lengths along each axis.
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// True if the box has positive extent along every axis.
    pub fn is_valid(&self) -> bool {
        let extent = self.extent();
        extent.x > 0.0 && extent.y > 0.0 && extent.z > 0.0
    }
}


// End of File
