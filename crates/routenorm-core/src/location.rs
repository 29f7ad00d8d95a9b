//! Location collaborator.
//!
//! Only route requests consult it. Callers with an asynchronous location
//! source fetch first and pass the result in as an `Option<Coordinate>`, which
//! keeps every normalization call synchronous.

use crate::types::Coordinate;

/// Capability returning the device's current known position, if any.
pub trait LocationProvider {
    fn current_location(&self) -> Option<Coordinate>;
}

/// A provider that never knows the location.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_location(&self) -> Option<Coordinate> {
        None
    }
}

impl LocationProvider for Option<Coordinate> {
    fn current_location(&self) -> Option<Coordinate> {
        *self
    }
}

impl LocationProvider for Coordinate {
    fn current_location(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for &T {
    fn current_location(&self) -> Option<Coordinate> {
        (**self).current_location()
    }
}
