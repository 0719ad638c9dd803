// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated observer position.
//!
//! The free functions of this crate accept raw `Degrees` and leave range
//! checking to the caller. [`Location`] performs that check once and then
//! exposes the same queries as methods.

use crate::{
    astronomical_twilight, civil_twilight, day_length, day_period, is_astronomical_twilight,
    is_civil_twilight, is_day, is_day_now, is_nautical_twilight, is_night, is_twilight,
    nautical_twilight, solar_noon, sunrise_sunset, sunrise_sunset_with_altitude, DayPeriod,
    LocationError, SunWindow,
};
use chrono::{DateTime, Duration, TimeZone};
use qtty::Degrees;
use std::fmt;

/// A point on Earth: latitude in `[-90°, 90°]`, longitude in
/// `[-180°, 180°]` with East positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Location {
    latitude: Degrees,
    longitude: Degrees,
}

impl Location {
    /// Validate and build a location.
    ///
    /// # Errors
    ///
    /// [`LocationError`] if either coordinate is non-finite or out of range.
    ///
    /// ```
    /// use qtty::Degrees;
    /// use sunrise_sunset::{Location, LocationError};
    ///
    /// let paris = Location::new(Degrees::new(48.8567), Degrees::new(2.351)).unwrap();
    /// assert_eq!(paris.to_string(), "48.8567°, 2.351°");
    ///
    /// assert_eq!(
    ///     Location::new(Degrees::new(91.0), Degrees::new(0.0)),
    ///     Err(LocationError::LatitudeOutOfRange(91.0))
    /// );
    /// ```
    pub fn new(latitude: Degrees, longitude: Degrees) -> Result<Self, LocationError> {
        let lat = latitude.value();
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(LocationError::LatitudeOutOfRange(lat));
        }
        let lon = longitude.value();
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(LocationError::LongitudeOutOfRange(lon));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude, North positive.
    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, East positive.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    // ── Solver ───────────────────────────────────────────────────────────

    /// See [`sunrise_sunset`](crate::sunrise_sunset).
    pub fn sunrise_sunset<Tz: TimeZone>(&self, day: &DateTime<Tz>) -> Option<SunWindow<Tz>> {
        sunrise_sunset(day, self.latitude, self.longitude)
    }

    /// See [`sunrise_sunset_with_altitude`](crate::sunrise_sunset_with_altitude).
    pub fn sunrise_sunset_with_altitude<Tz: TimeZone>(
        &self,
        day: &DateTime<Tz>,
        depression: Degrees,
    ) -> Option<SunWindow<Tz>> {
        sunrise_sunset_with_altitude(day, self.latitude, self.longitude, depression)
    }

    /// See [`civil_twilight`](crate::civil_twilight).
    pub fn civil_twilight<Tz: TimeZone>(&self, day: &DateTime<Tz>) -> Option<SunWindow<Tz>> {
        civil_twilight(day, self.latitude, self.longitude)
    }

    /// See [`nautical_twilight`](crate::nautical_twilight).
    pub fn nautical_twilight<Tz: TimeZone>(&self, day: &DateTime<Tz>) -> Option<SunWindow<Tz>> {
        nautical_twilight(day, self.latitude, self.longitude)
    }

    /// See [`astronomical_twilight`](crate::astronomical_twilight).
    pub fn astronomical_twilight<Tz: TimeZone>(
        &self,
        day: &DateTime<Tz>,
    ) -> Option<SunWindow<Tz>> {
        astronomical_twilight(day, self.latitude, self.longitude)
    }

    /// See [`solar_noon`](crate::solar_noon).
    pub fn solar_noon<Tz: TimeZone>(&self, day: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        solar_noon(day, self.latitude, self.longitude)
    }

    /// See [`day_length`](crate::day_length).
    pub fn day_length<Tz: TimeZone>(&self, day: &DateTime<Tz>) -> Duration {
        day_length(day, self.latitude, self.longitude)
    }

    // ── Classification ───────────────────────────────────────────────────

    /// See [`day_period`](crate::day_period).
    pub fn day_period<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DayPeriod {
        day_period(instant, self.latitude, self.longitude)
    }

    /// See [`is_day`](crate::is_day).
    pub fn is_day<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        is_day(instant, self.latitude, self.longitude)
    }

    /// See [`is_night`](crate::is_night).
    pub fn is_night<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        is_night(instant, self.latitude, self.longitude)
    }

    /// See [`is_civil_twilight`](crate::is_civil_twilight).
    pub fn is_civil_twilight<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        is_civil_twilight(instant, self.latitude, self.longitude)
    }

    /// See [`is_nautical_twilight`](crate::is_nautical_twilight).
    pub fn is_nautical_twilight<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        is_nautical_twilight(instant, self.latitude, self.longitude)
    }

    /// See [`is_astronomical_twilight`](crate::is_astronomical_twilight).
    pub fn is_astronomical_twilight<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        is_astronomical_twilight(instant, self.latitude, self.longitude)
    }

    /// See [`is_twilight`](crate::is_twilight).
    pub fn is_twilight<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        is_twilight(instant, self.latitude, self.longitude)
    }

    /// See [`is_day_now`](crate::is_day_now).
    pub fn is_day_now(&self) -> bool {
        is_day_now(self.latitude, self.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}°", self.latitude.value(), self.longitude.value())
    }
}

impl TryFrom<(f64, f64)> for Location {
    type Error = LocationError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(Degrees::new(latitude), Degrees::new(longitude))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Location;
    use qtty::Degrees;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Raw {
        latitude: f64,
        longitude: f64,
    }

    impl Serialize for Location {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Raw {
                latitude: self.latitude.value(),
                longitude: self.longitude.value(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Location {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Raw::deserialize(deserializer)?;
            Location::new(Degrees::new(raw.latitude), Degrees::new(raw.longitude))
                .map_err(serde::de::Error::custom)
        }
    }
}
