// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time windows between two instants.
//!
//! This module provides:
//! - [`TimeInstant`]: points in time that can be differenced
//! - [`Interval<T>`]: a generic `[start, end]` window over any [`TimeInstant`]
//! - [`SunWindow<Tz>`]: the sunrise → sunset window returned by the solver

use crate::JulianDate;
use chrono::{DateTime, TimeZone};
use qtty::Days;
use std::fmt;

/// Trait for types that represent a point in time.
pub trait TimeInstant: Clone + PartialOrd {
    /// The duration type returned by [`TimeInstant::difference`].
    type Duration;

    /// Compute `self - other`.
    fn difference(&self, other: &Self) -> Self::Duration;
}

impl TimeInstant for JulianDate {
    type Duration = Days;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }
}

impl<Tz: TimeZone> TimeInstant for DateTime<Tz> {
    type Duration = chrono::Duration;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        self.clone() - other.clone()
    }
}

/// An interval between two instants.
///
/// For solar events `start` is the rising instant and `end` the setting
/// instant of the same calendar day.
///
/// # Examples
///
/// ```
/// use sunrise_sunset::{Interval, JulianDate};
/// use qtty::Days;
///
/// let window = Interval::new(JulianDate::new(2451545.25), JulianDate::new(2451545.75));
/// assert_eq!(window.duration(), Days::new(0.5));
/// assert!(window.contains(&JulianDate::new(2451545.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Sunrise → sunset (or dawn → dusk) window in the caller's timezone.
pub type SunWindow<Tz> = Interval<DateTime<Tz>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new interval between two instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns `end - start`.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies inside the window.
    ///
    /// Both ends are inclusive: an instant exactly at sunrise or sunset is
    /// inside the day window.
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

impl Interval<JulianDate> {
    /// Convert both ends to Gregorian instants expressed in `tz`.
    ///
    /// Returns `None` if either end falls outside chrono's range.
    pub fn to_gregorian<Tz: TimeZone>(&self, tz: &Tz) -> Option<SunWindow<Tz>> {
        let start = self.start.to_gregorian()?.with_timezone(tz);
        let end = self.end.to_gregorian()?.with_timezone(tz);
        Some(Interval::new(start, end))
    }

    /// Midpoint of the window.
    pub fn midpoint(&self) -> JulianDate {
        self.start.mean(self.end)
    }
}

impl<Tz: TimeZone> Interval<DateTime<Tz>> {
    /// Returns the duration in whole milliseconds.
    pub fn duration_millis(&self) -> i64 {
        self.duration().num_milliseconds()
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
