// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian ↔ Julian Date conversion.
//!
//! [`JulianDate`] stores a single [`Days`] quantity: the continuous day count
//! used by the sunrise equation. Day 0 starts at noon UTC on the proleptic
//! epoch, so the fractional part encodes the time of day (`.0` is noon,
//! `.5` is midnight UTC).
//!
//! Both directions follow the integer formulation of the Julian Day Number
//! (Fliegel & Van Flandern). Accuracy is to the second: sub-second parts of
//! the input are dropped, and the inverse rounds the seconds field once
//! (add ½ then truncate). A round trip therefore reproduces any instant from
//! 1 CE onwards to within one second.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use qtty::Days;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SECONDS_PER_DAY: f64 = 86_400.0;
const MINUTES_PER_DAY: f64 = 1_440.0;
const HOURS_PER_DAY: f64 = 24.0;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_CENTURY: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;
const DAYS_PER_5_MONTHS: i64 = 153;

/// A point on the Julian Day axis (UTC based).
///
/// The struct is `Copy` and layout-identical to [`Days`] (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// 2000-01-01T12:00:00 (JD 2 451 545.0), the reference epoch of the
    /// sunrise equation.
    pub const J2000: Self = Self::new(2_451_545.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Date of a civil instant in any timezone.
    ///
    /// See [`gregorian_to_julian`].
    #[inline]
    pub fn from_gregorian<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        gregorian_to_julian(instant)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since [`JulianDate::J2000`].
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Convert back to a UTC instant.
    ///
    /// See [`julian_to_gregorian`].
    #[inline]
    pub fn to_gregorian(&self) -> Option<DateTime<Utc>> {
        julian_to_gregorian(*self)
    }

    /// Midpoint between two Julian Dates.
    #[inline]
    pub fn mean(self, other: Self) -> Self {
        Self::new((self.value() + other.value()) / 2.0)
    }
}

/// Convert a Gregorian instant (any timezone) to a Julian Date.
///
/// The instant is normalised to UTC before its calendar fields are read.
/// Years use astronomical numbering (1 BC is year 0), and every integer
/// division is a floor division so negative intermediates stay correct.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunrise_sunset::gregorian_to_julian;
///
/// let instant = Utc.with_ymd_and_hms(1976, 3, 2, 15, 15, 45).unwrap();
/// let jd = gregorian_to_julian(&instant);
/// assert!((jd.value() - 2_442_840.135_937_5).abs() < 1e-6);
/// ```
pub fn gregorian_to_julian<Tz: TimeZone>(instant: &DateTime<Tz>) -> JulianDate {
    let utc = instant.with_timezone(&Utc);

    let year = i64::from(utc.year());
    let month = i64::from(utc.month());
    let day = i64::from(utc.day());

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let day_number = day + (DAYS_PER_5_MONTHS * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045;

    let hour = f64::from(utc.hour());
    let minute = f64::from(utc.minute());
    let second = f64::from(utc.second());

    JulianDate::new(
        day_number as f64
            + (hour - 12.0) / HOURS_PER_DAY
            + minute / MINUTES_PER_DAY
            + second / SECONDS_PER_DAY,
    )
}

/// Convert a Julian Date to a Gregorian instant in UTC.
///
/// Callers re-express the result in a local zone with
/// [`DateTime::with_timezone`]. Hours and minutes are truncated; only the
/// seconds field is rounded, which absorbs the floating-point drift of the
/// day fraction.
///
/// Returns `None` if `julian_date` is not finite or falls outside chrono's
/// representable range.
pub fn julian_to_gregorian(julian_date: JulianDate) -> Option<DateTime<Utc>> {
    let jd = julian_date.value();
    if !jd.is_finite() {
        return None;
    }

    // Shift the epoch back half a day so that days start at 00:00 UTC.
    let shifted = jd + 0.5;
    let day_number = shifted.floor();
    if day_number.abs() > i32::MAX as f64 {
        return None;
    }
    let day_number = day_number as i64;

    // Epoch moved to March 1, 4801 BC.
    let j = day_number + 32_044;

    let g = j.div_euclid(DAYS_PER_400_YEARS);
    let dg = j.rem_euclid(DAYS_PER_400_YEARS);

    let c = ((dg / DAYS_PER_CENTURY + 1) * 3) / 4;
    let dc = dg - c * DAYS_PER_CENTURY;

    let b = dc / DAYS_PER_4_YEARS;
    let db = dc % DAYS_PER_4_YEARS;

    let a = ((db / 365 + 1) * 3) / 4;
    let da = db - a * 365;

    // Full years since March 1, 4801 BC, and full months since the last March 1.
    let y = g * 400 + c * 100 + b * 4 + a;
    let m = (da * 5 + 308) / DAYS_PER_5_MONTHS - 2;
    let d = da - ((m + 4) * DAYS_PER_5_MONTHS) / 5 + 122;

    let year = y - 4800 + (m + 2) / 12;
    let month = (m + 2) % 12 + 1;
    let day = d + 1;

    let fraction = shifted - day_number as f64;
    let hours = (fraction * HOURS_PER_DAY) as i64;
    let minutes = ((fraction * HOURS_PER_DAY - hours as f64) * 60.0) as i64;
    let seconds =
        (fraction * SECONDS_PER_DAY - (hours * 3_600 + minutes * 60) as f64 + 0.5) as i64;

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;
    // Adding the time as a duration lets a rounded `60` seconds carry over.
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let naive = midnight.checked_add_signed(Duration::seconds(
        hours * 3_600 + minutes * 60 + seconds,
    ))?;
    Some(Utc.from_utc_datetime(&naive))
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Julian Day: {}", self.value())
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn assert_jd(instant: DateTime<Utc>, expected: f64) {
        let jd = gregorian_to_julian(&instant);
        assert!(
            (jd.value() - expected).abs() < 0.01,
            "expected {expected} for {instant}, got {}",
            jd.value()
        );
        let back = julian_to_gregorian(JulianDate::new(expected)).expect("in range");
        assert!(
            (back - instant).num_seconds().abs() <= 1,
            "expected {instant} for JD {expected}, got {back}"
        );
    }

    #[test]
    fn known_utc_conversions() {
        assert_jd(utc(1976, 3, 2, 15, 15, 45), 2_442_840.135_937_5);
        assert_jd(utc(1901, 1, 1, 23, 59, 59), 2_415_386.499_988_4);
        assert_jd(utc(1901, 1, 1, 9, 0, 0), 2_415_385.875);
        assert_jd(utc(1901, 1, 1, 0, 0, 0), 2_415_385.5);
        assert_jd(utc(1900, 12, 31, 23, 59, 59), 2_415_385.499_988_4);
        assert_jd(utc(1900, 7, 1, 0, 0, 0), 2_415_201.5);
        assert_jd(utc(1900, 3, 1, 0, 0, 0), 2_415_079.5);
        assert_jd(utc(1900, 2, 28, 0, 0, 0), 2_415_078.5);
        assert_jd(utc(1900, 2, 1, 0, 0, 0), 2_415_051.5);
        assert_jd(utc(1900, 1, 31, 0, 3, 18), 2_415_050.502_291_667);
        assert_jd(utc(1880, 5, 16, 10, 19, 0), 2_407_851.929_861_111);
        assert_jd(utc(1850, 7, 12, 0, 17, 18), 2_396_950.512_013_889);
        assert_jd(utc(1801, 1, 1, 9, 0, 0), 2_378_861.875);
    }

    #[test]
    fn exact_value_at_second_resolution() {
        let jd = gregorian_to_julian(&utc(1976, 3, 2, 15, 15, 45));
        assert!((jd.value() - 2_442_840.135_937_5).abs() < 1e-9);
    }

    #[test]
    fn fixed_offset_is_normalised_to_utc() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = est.with_ymd_and_hms(1976, 3, 2, 10, 15, 45).unwrap();
        let jd = gregorian_to_julian(&local);
        assert!((jd.value() - 2_442_840.135_937_5).abs() < 1e-9);
    }

    #[test]
    fn j2000_is_noon_on_new_year_2000() {
        let noon = utc(2000, 1, 1, 12, 0, 0);
        assert_eq!(gregorian_to_julian(&noon), JulianDate::J2000);
        assert_eq!(JulianDate::J2000.to_gregorian(), Some(noon));
    }

    #[test]
    fn inverse_uses_floor_for_day_boundaries() {
        // Just before midnight UTC the day number must not round up.
        let jd = JulianDate::new(2_451_545.499_99);
        let back = jd.to_gregorian().unwrap();
        assert_eq!(back.date_naive(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn rounded_sixty_seconds_carries_into_next_minute() {
        // 23:59:59.7 rounds to midnight of the next day.
        let jd = JulianDate::new(2_451_545.5 - 0.3 / SECONDS_PER_DAY);
        let back = jd.to_gregorian().unwrap();
        assert_eq!(back, utc(2000, 1, 2, 0, 0, 0));
    }

    #[test]
    fn roundtrip_within_one_second_from_year_one() {
        let samples = [
            utc(1, 1, 1, 0, 0, 0),
            utc(582, 10, 15, 6, 30, 1),
            utc(1582, 10, 15, 23, 59, 59),
            utc(1899, 12, 31, 12, 0, 0),
            utc(1970, 1, 1, 0, 0, 0),
            utc(2000, 2, 29, 18, 45, 12),
            utc(2024, 2, 29, 0, 0, 1),
            utc(2100, 3, 1, 11, 11, 11),
            utc(9999, 12, 31, 23, 59, 59),
        ];
        for instant in samples {
            let back = julian_to_gregorian(gregorian_to_julian(&instant)).unwrap();
            let drift = (back - instant).num_seconds().abs();
            assert!(drift <= 1, "{instant} came back as {back}");
        }
    }

    #[test]
    fn sub_second_part_is_dropped() {
        let with_millis = utc(2013, 1, 20, 12, 0, 0) + Duration::milliseconds(999);
        let jd = gregorian_to_julian(&with_millis);
        assert_eq!(jd, gregorian_to_julian(&utc(2013, 1, 20, 12, 0, 0)));
    }

    #[test]
    fn non_finite_input_has_no_gregorian_date() {
        assert_eq!(julian_to_gregorian(JulianDate::new(f64::NAN)), None);
        assert_eq!(julian_to_gregorian(JulianDate::new(f64::INFINITY)), None);
        assert_eq!(julian_to_gregorian(JulianDate::new(1.0e300)), None);
    }

    #[test]
    fn arithmetic_and_mean() {
        let jd = JulianDate::new(2_451_545.0);
        let later = jd + Days::new(1.5);
        assert_eq!(later.value(), 2_451_546.5);
        assert_eq!((later - Days::new(0.5)).value(), 2_451_546.0);
        assert_eq!(later - jd, Days::new(1.5));
        assert_eq!(jd.mean(later).value(), 2_451_545.75);
        assert_eq!(later.days_since_j2000(), Days::new(1.5));
        assert!(jd < later);
    }

    #[test]
    fn into_days_roundtrip() {
        let jd = JulianDate::new(2_451_547.5);
        let days: Days = jd.into();
        assert_eq!(days, Days::new(2_451_547.5));
        assert_eq!(JulianDate::from(days), jd);
    }

    #[test]
    fn display_has_label() {
        let s = format!("{}", JulianDate::J2000);
        assert!(s.starts_with("Julian Day:"));
        assert!(s.contains("2451545"));
    }
}
