#![allow(clippy::missing_inline_in_public_items)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::{Sphere, Vector};

#[derive(Debug, Deserialize, Serialize)]
struct SphereSer {
    center: Vector,
    radius: f32,
}

impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let &Vector { x, y, z } = self;

        [x, y, z].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y, z] = <[f32; 3]>::deserialize(deserializer)?;
        Ok(Vector::new(x, y, z))
    }
}

impl Serialize for Sphere {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SphereSer {
            center: self.center(),
            radius: self.radius(),
        }
        .serialize(serializer)
    }
}

/// Unlike [`Sphere::new()`], a negative radius is rejected rather than clamped,
/// since stored data with one is corrupt.
impl<'de> Deserialize<'de> for Sphere {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let SphereSer { center, radius } = SphereSer::deserialize(deserializer)?;
        Sphere::try_new(center, radius).map_err(serde::de::Error::custom)
    }
}
