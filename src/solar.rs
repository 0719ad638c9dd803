// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise equation solver.
//!
//! Implements the closed-form sunrise equation (NOAA / Wikipedia
//! formulation): from the Julian cycle of the requested day the solver
//! derives the Sun's mean anomaly, equation of center, ecliptic longitude,
//! transit and declination, then solves the hour angle at which the Sun's
//! centre sits a given number of degrees below the horizon.
//!
//! The single `depression` input unifies sunrise/sunset and the three
//! twilight bands:
//!
//! | Horizon | Depression |
//! |---------|------------|
//! | [`Horizon::SunriseSunset`] | 0.833° (refraction + solar radius) |
//! | [`Horizon::Civil`] | 6° |
//! | [`Horizon::Nautical`] | 12° |
//! | [`Horizon::Astronomical`] | 18° |
//!
//! Longitudes are East-positive at the API boundary; the formula itself is
//! West-positive, so the solver negates them internally.

use crate::{Interval, JulianDate, SunWindow};
use chrono::{DateTime, TimeZone};
use qtty::{Degree, Degrees, Radians};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard sunrise/sunset: atmospheric refraction plus the solar semi-diameter.
pub const SUN_ALTITUDE_SUNRISE_SUNSET: Degrees = Degrees::new(0.833);
/// Civil twilight depression.
pub const SUN_ALTITUDE_CIVIL_TWILIGHT: Degrees = Degrees::new(6.0);
/// Nautical twilight depression.
pub const SUN_ALTITUDE_NAUTICAL_TWILIGHT: Degrees = Degrees::new(12.0);
/// Astronomical twilight depression.
pub const SUN_ALTITUDE_ASTRONOMICAL_TWILIGHT: Degrees = Degrees::new(18.0);

const J2000_DAY: f64 = 2_451_545.0;
const CONST_0009: f64 = 0.0009;
const FULL_TURN_DEG: f64 = 360.0;
const OBLIQUITY: Degrees = Degrees::new(23.45);

/// The four solar depression thresholds, ordered from the narrowest window
/// (sunrise → sunset) to the widest (astronomical dawn → dusk).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Horizon {
    SunriseSunset,
    Civil,
    Nautical,
    Astronomical,
}

impl Horizon {
    /// Every threshold, narrowest window first.
    pub const ALL: [Horizon; 4] = [
        Horizon::SunriseSunset,
        Horizon::Civil,
        Horizon::Nautical,
        Horizon::Astronomical,
    ];

    /// Degrees below the horizon defining this event.
    #[inline]
    pub const fn depression(self) -> Degrees {
        match self {
            Horizon::SunriseSunset => SUN_ALTITUDE_SUNRISE_SUNSET,
            Horizon::Civil => SUN_ALTITUDE_CIVIL_TWILIGHT,
            Horizon::Nautical => SUN_ALTITUDE_NAUTICAL_TWILIGHT,
            Horizon::Astronomical => SUN_ALTITUDE_ASTRONOMICAL_TWILIGHT,
        }
    }
}

/// How the Sun meets a depression threshold on a given day.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Crossing {
    /// The Sun rises through and sets through the threshold; the payload is
    /// the hour angle ω of the setting event.
    Between(Degrees),
    /// The Sun never drops below the threshold (polar day for this band).
    AlwaysAbove,
    /// The Sun never climbs above the threshold (polar night for this band).
    AlwaysBelow,
}

/// Intermediate quantities of the sunrise equation for one calendar day at
/// one longitude. They do not depend on latitude or depression, so every
/// threshold of the same day shares them.
#[derive(Debug, Copy, Clone)]
pub(crate) struct SolarDay {
    /// Julian cycle since J2000.
    cycle: f64,
    /// Longitude, West-positive.
    west_longitude: Degrees,
    mean_anomaly: Degrees,
    ecliptic_longitude: Degrees,
    transit: JulianDate,
    declination: Radians,
}

impl SolarDay {
    /// Solve the latitude-independent part of the equation for the calendar
    /// day of `day` (in its own timezone).
    pub(crate) fn new<Tz: TimeZone>(day: &DateTime<Tz>, longitude: Degrees) -> Self {
        Self::at(&local_noon(day), longitude)
    }

    /// Solve for the solar day whose transit is nearest to `instant`.
    ///
    /// Only the absolute moment matters, so the same instant written in any
    /// timezone yields the same solar day.
    pub(crate) fn at<Tz: TimeZone>(instant: &DateTime<Tz>, longitude: Degrees) -> Self {
        let west_longitude = -longitude;
        let julian_date = JulianDate::from_gregorian(instant);

        let cycle = (julian_date.value()
            - J2000_DAY
            - CONST_0009
            - west_longitude.value() / FULL_TURN_DEG)
            .round();

        // Approximate solar noon.
        let j_star = J2000_DAY + CONST_0009 + west_longitude.value() / FULL_TURN_DEG + cycle;

        let mean_anomaly =
            Degrees::new((357.5291 + 0.985_600_28 * (j_star - J2000_DAY)) % FULL_TURN_DEG);

        let equation_of_center = 1.9148 * mean_anomaly.sin()
            + 0.0200 * (mean_anomaly * 2.0).sin()
            + 0.0003 * (mean_anomaly * 3.0).sin();

        let ecliptic_longitude = Degrees::new(
            (mean_anomaly.value() + 102.9372 + equation_of_center + 180.0) % FULL_TURN_DEG,
        );

        let transit = JulianDate::new(
            j_star + 0.0053 * mean_anomaly.sin() - 0.0069 * (ecliptic_longitude * 2.0).sin(),
        );

        let declination = Radians::new((ecliptic_longitude.sin() * OBLIQUITY.sin()).asin());

        log::trace!(
            "solar day: n={cycle} M={} λ={} transit={} δ={}",
            mean_anomaly.value(),
            ecliptic_longitude.value(),
            transit.value(),
            declination.to::<Degree>().value()
        );

        Self {
            cycle,
            west_longitude,
            mean_anomaly,
            ecliptic_longitude,
            transit,
            declination,
        }
    }

    /// Solar transit (local apparent noon) as a Julian Date.
    #[inline]
    pub(crate) fn transit(&self) -> JulianDate {
        self.transit
    }

    /// Classify how the Sun meets `depression` at `latitude`.
    ///
    /// Returns `None` when the hour-angle cosine is not a number, which only
    /// happens for inputs outside the documented ranges.
    pub(crate) fn crossing(&self, latitude: Degrees, depression: Degrees) -> Option<Crossing> {
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let (sin_dec, cos_dec) = self.declination.sin_cos();
        let cos_omega = ((-depression).sin() - sin_lat * sin_dec) / (cos_lat * cos_dec);

        if cos_omega.is_nan() {
            log::warn!(
                "hour angle undefined at latitude {}° (depression {}°)",
                latitude.value(),
                depression.value()
            );
            None
        } else if cos_omega > 1.0 {
            log::debug!(
                "sun stays below -{}° all day at latitude {}°",
                depression.value(),
                latitude.value()
            );
            Some(Crossing::AlwaysBelow)
        } else if cos_omega < -1.0 {
            log::debug!(
                "sun stays above -{}° all day at latitude {}°",
                depression.value(),
                latitude.value()
            );
            Some(Crossing::AlwaysAbove)
        } else {
            Some(Crossing::Between(
                Radians::new(cos_omega.acos()).to::<Degree>(),
            ))
        }
    }

    /// Rising and setting Julian Dates for hour angle `omega`.
    pub(crate) fn events(&self, omega: Degrees) -> Interval<JulianDate> {
        let set = JulianDate::new(
            J2000_DAY
                + CONST_0009
                + ((omega.value() + self.west_longitude.value()) / FULL_TURN_DEG
                    + self.cycle
                    + 0.0053 * self.mean_anomaly.sin()
                    - 0.0069 * (self.ecliptic_longitude * 2.0).sin()),
        );
        let rise = self.transit - (set - self.transit);
        Interval::new(rise, set)
    }
}

/// Noon of `day`'s calendar date in `day`'s own timezone.
///
/// Only the date of the requested day matters; anchoring at local noon keeps
/// the Julian cycle stable whatever time of day the caller passed. Falls
/// back to `day` itself if local noon does not exist in that zone.
fn local_noon<Tz: TimeZone>(day: &DateTime<Tz>) -> DateTime<Tz> {
    day.date_naive()
        .and_hms_opt(12, 0, 0)
        .and_then(|noon| day.timezone().from_local_datetime(&noon).earliest())
        .unwrap_or_else(|| day.clone())
}

/// Sunrise and sunset of `day` for a custom depression below the horizon.
///
/// `latitude` and `longitude` are in degrees, longitude East-positive.
/// `depression` selects the event: [`SUN_ALTITUDE_SUNRISE_SUNSET`] for the
/// standard sunrise/sunset, or one of the twilight constants.
///
/// The result is expressed in the timezone of `day`. Returns `None` when the
/// Sun does not cross the requested altitude on that day (polar day or polar
/// night for this band), or when the inputs are outside the valid ranges.
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use qtty::Degrees;
/// use sunrise_sunset::{sunrise_sunset_with_altitude, SUN_ALTITUDE_CIVIL_TWILIGHT};
///
/// let pst = FixedOffset::west_opt(8 * 3600).unwrap();
/// let day = pst.with_ymd_and_hms(2013, 1, 20, 12, 0, 0).unwrap();
/// let civil = sunrise_sunset_with_altitude(
///     &day,
///     Degrees::new(34.0522),
///     Degrees::new(-118.2437),
///     SUN_ALTITUDE_CIVIL_TWILIGHT,
/// )
/// .expect("Los Angeles has a civil dawn in January");
/// assert!(civil.start < civil.end);
/// ```
pub fn sunrise_sunset_with_altitude<Tz: TimeZone>(
    day: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
    depression: Degrees,
) -> Option<SunWindow<Tz>> {
    let solar = SolarDay::new(day, longitude);
    match solar.crossing(latitude, depression)? {
        Crossing::Between(omega) => solar.events(omega).to_gregorian(&day.timezone()),
        Crossing::AlwaysAbove | Crossing::AlwaysBelow => None,
    }
}

/// Standard sunrise and sunset of `day` (0.833° depression).
///
/// Same as [`sunrise_sunset_with_altitude`] with
/// [`SUN_ALTITUDE_SUNRISE_SUNSET`].
pub fn sunrise_sunset<Tz: TimeZone>(
    day: &DateTime<Tz>,
    latitude: Degrees,
    longitude: Degrees,
) -> Option<SunWindow<Tz>> {
    sunrise_sunset_with_altitude(day, latitude, longitude, SUN_ALTITUDE_SUNRISE_SUNSET)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
