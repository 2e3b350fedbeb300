//! Values assembled from several fields.
//!
//! None of these extractors check the range of what they read.

use alloc::format;

use crate::format::FieldIndex;

use super::{Error, FieldValue};

#[cfg(feature = "std")]
extern crate std;

/// A three-axis quantity.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl FieldValue for Vector3 {
    fn extract(index: &FieldIndex, record: &[u8], label: &str) -> Result<Option<Self>, Error> {
        let mut axes = [0.0f32; 3];

        for (axis, suffix) in axes.iter_mut().zip(['X', 'Y', 'Z']) {
            match index.get(record, &format!("{label}{suffix}"))? {
                Some(value) => *axis = value,
                None => return Ok(None),
            }
        }

        let [x, y, z] = axes;
        Ok(Some(Self { x, y, z }))
    }
}

/// A geographic position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Latitude in degrees ×1e7.
    pub lat: i32,
    /// Longitude in degrees ×1e7.
    pub lng: i32,
    /// Altitude, in the units of the record.
    pub alt: i32,
}

impl Location {
    pub fn latitude_deg(&self) -> f64 {
        self.lat as f64 * 1e-7
    }

    pub fn longitude_deg(&self) -> f64 {
        self.lng as f64 * 1e-7
    }
}

/// Units of the fields a ground velocity is assembled from.
///
/// Each raw value is multiplied by its scale: the defaults read speed in
/// centimetres per second and course in centidegrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundVelocity {
    pub speed_scale: f32,
    pub course_scale: f32,
}

impl Default for GroundVelocity {
    fn default() -> Self {
        Self {
            speed_scale: 0.01,
            course_scale: 0.01,
        }
    }
}

#[cfg(feature = "std")]
impl GroundVelocity {
    /// Assemble a north, east, down velocity from a ground speed, a course
    /// (clockwise from north) and a vertical speed.
    ///
    /// _Requires Cargo feature `std`._
    pub fn extract(
        &self,
        index: &FieldIndex,
        record: &[u8],
        speed: &str,
        course: &str,
        vz: &str,
    ) -> Result<Vector3, Error> {
        let speed = index.require::<u32>(record, speed)? as f32 * self.speed_scale;
        let course = index.require::<i32>(record, course)? as f32 * self.course_scale;
        let vz = index.require::<f32>(record, vz)?;

        let (sin, cos) = course.to_radians().sin_cos();

        Ok(Vector3::new(speed * cos, speed * sin, vz))
    }
}

impl FieldIndex {
    /// Read a position from required latitude, longitude and altitude fields.
    pub fn location(
        &self,
        record: &[u8],
        lat: &str,
        lng: &str,
        alt: &str,
    ) -> Result<Location, Error> {
        Ok(Location {
            lat: self.require(record, lat)?,
            lng: self.require(record, lng)?,
            alt: self.require(record, alt)?,
        })
    }

    /// Read a velocity from required speed, course and vertical speed fields,
    /// in the default units of [`GroundVelocity`].
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn ground_velocity(
        &self,
        record: &[u8],
        speed: &str,
        course: &str,
        vz: &str,
    ) -> Result<Vector3, Error> {
        GroundVelocity::default().extract(self, record, speed, course, vz)
    }

    /// Read an attitude from required roll, pitch and yaw fields, as stored.
    pub fn attitude(
        &self,
        record: &[u8],
        roll: &str,
        pitch: &str,
        yaw: &str,
    ) -> Result<Vector3, Error> {
        Ok(Vector3::new(
            self.require(record, roll)?,
            self.require(record, pitch)?,
            self.require(record, yaw)?,
        ))
    }
}
