// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise, sunset and twilight
//!
//! This crate computes, for any point on Earth and any calendar day, the
//! times of sunrise, sunset, solar noon and the three twilight bands, plus
//! day/night/twilight predicates and a [`DayPeriod`] classifier. It also
//! converts between Gregorian timestamps and Julian Dates, the numeric
//! substrate the solar formulas run on.
//!
//! # Core types
//!
//! - [`JulianDate`]: continuous day count, noon-UTC anchored.
//! - [`Interval<T>`]: a `[start, end]` window over any [`TimeInstant`].
//! - [`SunWindow<Tz>`]: rising → setting window in the caller's timezone.
//! - [`Horizon`]: the four standard depression thresholds.
//! - [`DayPeriod`]: NIGHT / ASTRONOMICAL / NAUTICAL / CIVIL / DAY.
//! - [`Location`]: validated latitude/longitude with query methods.
//!
//! # Thresholds
//!
//! | Event | Depression |
//! |-------|------------|
//! | Sunrise / sunset | [`SUN_ALTITUDE_SUNRISE_SUNSET`] (0.833°) |
//! | Civil twilight | [`SUN_ALTITUDE_CIVIL_TWILIGHT`] (6°) |
//! | Nautical twilight | [`SUN_ALTITUDE_NAUTICAL_TWILIGHT`] (12°) |
//! | Astronomical twilight | [`SUN_ALTITUDE_ASTRONOMICAL_TWILIGHT`] (18°) |
//!
//! # Conventions
//!
//! Instants are `chrono::DateTime<Tz>`; results come back in the timezone of
//! the day passed in. Latitude and longitude are `qtty::Degrees`, longitude
//! East-positive. Days without a crossing (polar day or night) yield `None`,
//! never a NaN-tainted instant.
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use qtty::Degrees;
//! use sunrise_sunset::{day_period, sunrise_sunset, DayPeriod};
//!
//! let cet = FixedOffset::east_opt(3600).unwrap();
//! let day = cet.with_ymd_and_hms(2013, 1, 20, 12, 0, 0).unwrap();
//! let (lat, lon) = (Degrees::new(48.8567), Degrees::new(2.351));
//!
//! let sun = sunrise_sunset(&day, lat, lon).unwrap();
//! assert_eq!(sun.start.format("%H").to_string(), "08");
//! assert_eq!(day_period(&day, lat, lon), DayPeriod::Day);
//! ```

mod error;
mod interval;
mod julian;
mod location;
mod queries;
pub(crate) mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::LocationError;
pub use interval::{Interval, SunWindow, TimeInstant};
pub use julian::{gregorian_to_julian, julian_to_gregorian, JulianDate};
pub use location::Location;
pub use queries::{
    astronomical_twilight, civil_twilight, day_length, day_period, is_astronomical_twilight,
    is_civil_twilight, is_day, is_day_now, is_nautical_twilight, is_night, is_night_now,
    is_twilight, nautical_twilight, solar_noon, DayPeriod,
};
pub use solar::{
    sunrise_sunset, sunrise_sunset_with_altitude, Horizon, SUN_ALTITUDE_ASTRONOMICAL_TWILIGHT,
    SUN_ALTITUDE_CIVIL_TWILIGHT, SUN_ALTITUDE_NAUTICAL_TWILIGHT, SUN_ALTITUDE_SUNRISE_SUNSET,
};
