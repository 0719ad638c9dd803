// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Rejected coordinates passed to [`Location::new`](crate::Location::new).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LocationError {
    /// Latitude is not a finite value in `[-90, 90]` degrees.
    #[error("latitude {0}° is outside [-90°, 90°]")]
    LatitudeOutOfRange(f64),

    /// Longitude is not a finite value in `[-180, 180]` degrees.
    #[error("longitude {0}° is outside [-180°, 180°]")]
    LongitudeOutOfRange(f64),
}
