// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Queries derived from the sunrise equation.
//!
//! Everything here is a thin layer over [`SolarDay`]: twilight windows are
//! the solver run at a deeper depression, solar noon is the solver's transit,
//! and the predicates and [`DayPeriod`] classifier test an instant against
//! the four nested windows of the solar day nearest to it.
//!
//! Windows are closed on both ends and the classifier checks them from the
//! narrowest ([`Horizon::SunriseSunset`]) to the widest
//! ([`Horizon::Astronomical`]), so an instant exactly at a boundary belongs
//! to the brighter period: the sunrise instant is [`DayPeriod::Day`].

use crate::solar::{Crossing, SolarDay};
use crate::{
    sunrise_sunset_with_altitude, Horizon, SunWindow, SUN_ALTITUDE_ASTRONOMICAL_TWILIGHT,
    SUN_ALTITUDE_CIVIL_TWILIGHT, SUN_ALTITUDE_NAUTICAL_TWILIGHT, SUN_ALTITUDE_SUNRISE_SUNSET,
};
use chrono::{DateTime, Duration, Local, TimeZone};
use qtty::Degrees;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Twilight windows
// ═══════════════════════════════════════════════════════════════════════════

/// Civil dawn → civil dusk (Sun 6° below the horizon).
pub fn civil_twilight<Tz: TimeZone>(
    day: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> Option<SunWindow<Tz>> {
    sunrise_sunset_with_altitude(day, latitude, longitude, SUN_ALTITUDE_CIVIL_TWILIGHT)
}

/// Nautical dawn → nautical dusk (Sun 12° below the horizon).
pub fn nautical_twilight<Tz: TimeZone>(
    day: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> Option<SunWindow<Tz>> {
    sunrise_sunset_with_altitude(day, latitude, longitude, SUN_ALTITUDE_NAUTICAL_TWILIGHT)
}

/// Astronomical dawn → astronomical dusk (Sun 18° below the horizon).
pub fn astronomical_twilight<Tz: TimeZone>(
    day: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> Option<SunWindow<Tz>> {
    sunrise_sunset_with_altitude(day, latitude, longitude, SUN_ALTITUDE_ASTRONOMICAL_TWILIGHT)
}

// ═══════════════════════════════════════════════════════════════════════════
// Solar noon and day length
// ═══════════════════════════════════════════════════════════════════════════

/// Solar noon (transit) of `day`, in `day`'s timezone.
///
/// Taken directly from the solver's transit rather than the midpoint of
/// sunrise and sunset. Returns `None` on days without a standard sunrise and
/// sunset (polar day or polar night).
pub fn solar_noon<Tz: TimeZone>(
    day: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> Option<DateTime<Tz>> {
    let solar = SolarDay::new(day, longitude);
    match solar.crossing(latitude, SUN_ALTITUDE_SUNRISE_SUNSET)? {
        Crossing::Between(_) => solar
            .transit()
            .to_gregorian()
            .map(|noon| noon.with_timezone(&day.timezone())),
        Crossing::AlwaysAbove | Crossing::AlwaysBelow => None,
    }
}

/// Time between sunrise and sunset of `day`.
///
/// Under polar night this is zero; under polar day it is a full 24 hours.
pub fn day_length<Tz: TimeZone>(
    day: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> Duration {
    let solar = SolarDay::new(day, longitude);
    match band(&solar, &day.timezone(), latitude, Horizon::SunriseSunset) {
        Band::Window(window) => window.duration(),
        Band::AllDay => Duration::milliseconds(MILLIS_PER_DAY),
        Band::Never => Duration::zero(),
    }
}

const MILLIS_PER_DAY: i64 = 86_400_000;

// ═══════════════════════════════════════════════════════════════════════════
// Day periods
// ═══════════════════════════════════════════════════════════════════════════

/// Classification of an instant by how far the Sun is below the horizon.
///
/// Variants are ordered from darkest to brightest, so
/// `DayPeriod::Night < DayPeriod::Day`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DayPeriod {
    Night,
    AstronomicalTwilight,
    NauticalTwilight,
    CivilTwilight,
    Day,
}

impl DayPeriod {
    /// Upper-case name, e.g. `"CIVIL_TWILIGHT"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            DayPeriod::Night => "NIGHT",
            DayPeriod::AstronomicalTwilight => "ASTRONOMICAL_TWILIGHT",
            DayPeriod::NauticalTwilight => "NAUTICAL_TWILIGHT",
            DayPeriod::CivilTwilight => "CIVIL_TWILIGHT",
            DayPeriod::Day => "DAY",
        }
    }

    /// Whether this is one of the three twilight bands.
    pub const fn is_twilight(self) -> bool {
        matches!(
            self,
            DayPeriod::AstronomicalTwilight | DayPeriod::NauticalTwilight | DayPeriod::CivilTwilight
        )
    }
}

impl From<Horizon> for DayPeriod {
    /// The period covering instants inside `horizon`'s window but outside
    /// every narrower one.
    fn from(horizon: Horizon) -> Self {
        match horizon {
            Horizon::SunriseSunset => DayPeriod::Day,
            Horizon::Civil => DayPeriod::CivilTwilight,
            Horizon::Nautical => DayPeriod::NauticalTwilight,
            Horizon::Astronomical => DayPeriod::AstronomicalTwilight,
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `instant` at the given location.
///
/// The instant is tested against the windows of the solar day whose transit
/// is nearest to it, so the result depends only on the moment and not on the
/// timezone it is written in.
///
/// Near the poles the classification follows the Sun's actual depression: on
/// a day when the Sun never rises but climbs above -12° around noon, those
/// hours are [`DayPeriod::NauticalTwilight`], not [`DayPeriod::Night`].
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use qtty::Degrees;
/// use sunrise_sunset::{day_period, DayPeriod};
///
/// let pst = FixedOffset::west_opt(8 * 3600).unwrap();
/// let (lat, lon) = (Degrees::new(34.0522), Degrees::new(-118.2437));
///
/// let noon = pst.with_ymd_and_hms(2013, 1, 20, 12, 0, 0).unwrap();
/// assert_eq!(day_period(&noon, lat, lon), DayPeriod::Day);
///
/// let midnight = pst.with_ymd_and_hms(2013, 1, 20, 0, 0, 0).unwrap();
/// assert_eq!(day_period(&midnight, lat, lon), DayPeriod::Night);
/// ```
pub fn day_period<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> DayPeriod {
    let solar = SolarDay::at(instant, longitude);
    let tz = instant.timezone();
    Horizon::ALL
        .into_iter()
        .find(|&horizon| band(&solar, &tz, latitude, horizon).contains(instant))
        .map_or(DayPeriod::Night, DayPeriod::from)
}

// ═══════════════════════════════════════════════════════════════════════════
// Predicates
// ═══════════════════════════════════════════════════════════════════════════

/// Whether `instant` lies between sunrise and sunset.
pub fn is_day<Tz: TimeZone>(instant: &DateTime<Tz>, latitude: Degrees, longitude: Degrees) -> bool {
    day_period(instant, latitude, longitude) == DayPeriod::Day
}

/// Whether `instant` lies outside astronomical twilight.
///
/// Twilight is neither day nor night, so `is_night` is not `!is_day` here.
pub fn is_night<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> bool {
    day_period(instant, latitude, longitude) == DayPeriod::Night
}

/// Whether `instant` falls in civil twilight, morning or evening.
pub fn is_civil_twilight<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> bool {
    day_period(instant, latitude, longitude) == DayPeriod::CivilTwilight
}

/// Whether `instant` falls in nautical twilight, morning or evening.
pub fn is_nautical_twilight<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> bool {
    day_period(instant, latitude, longitude) == DayPeriod::NauticalTwilight
}

/// Whether `instant` falls in astronomical twilight, morning or evening.
pub fn is_astronomical_twilight<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> bool {
    day_period(instant, latitude, longitude) == DayPeriod::AstronomicalTwilight
}

/// Whether `instant` falls in any of the three twilight bands.
pub fn is_twilight<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> bool {
    day_period(instant, latitude, longitude).is_twilight()
}

/// Whether the Sun is currently up, using the host's local clock and zone.
pub fn is_day_now(latitude: Degrees, longitude: Degrees) -> bool {
    let now = Local::now();
    let up = is_day(&now, latitude, longitude);
    log::debug!("is_day_now at {now}: {up}");
    up
}

/// Negation of [`is_day_now`]: here twilight counts as night.
pub fn is_night_now(latitude: Degrees, longitude: Degrees) -> bool {
    !is_day_now(latitude, longitude)
}

// ── Windows over a whole day ────────────────────────────────────────────────

/// Where the Sun stands with respect to one threshold over a calendar day.
enum Band<Tz: TimeZone> {
    Window(SunWindow<Tz>),
    AllDay,
    Never,
}

impl<Tz: TimeZone> Band<Tz> {
    fn contains(&self, instant: &DateTime<Tz>) -> bool {
        match self {
            Band::Window(window) => window.contains(instant),
            Band::AllDay => true,
            Band::Never => false,
        }
    }
}

fn band<Tz: TimeZone>(solar: &SolarDay, tz: &Tz, latitude: Degrees, horizon: Horizon) -> Band<Tz> {
    match solar.crossing(latitude, horizon.depression()) {
        Some(Crossing::Between(omega)) => solar
            .events(omega)
            .to_gregorian(tz)
            .map_or(Band::Never, Band::Window),
        Some(Crossing::AlwaysAbove) => Band::AllDay,
        Some(Crossing::AlwaysBelow) | None => Band::Never,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
