use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use qtty::Degrees;
use sunrise_sunset::{
    day_period, gregorian_to_julian, is_day, is_day_now, is_night_now, julian_to_gregorian,
    sunrise_sunset, DayPeriod, JulianDate, Location,
};

fn assert_julian(instant: DateTime<Tz>, expected: f64) {
    let jd = gregorian_to_julian(&instant);
    assert!(
        (jd.value() - expected).abs() < 0.01,
        "{instant}: expected {expected}, got {}",
        jd.value()
    );
    let back = julian_to_gregorian(JulianDate::new(expected)).expect("in range");
    let drift = (back - instant.with_timezone(&Utc)).num_seconds().abs();
    assert!(drift <= 1, "JD {expected} came back as {back}, not {instant}");
}

#[test]
fn julian_dates_in_named_zones() {
    use chrono_tz::America::Anchorage;

    let eastern = chrono_tz::EST
        .with_ymd_and_hms(1976, 3, 2, 10, 15, 45)
        .unwrap();
    assert_julian(eastern, 2_442_840.135_937_5);

    // Anchorage was UTC-10 until late 1983, UTC-9 afterwards.
    let cases = [
        (1946, 2_431_821.916_667),
        (1967, 2_439_491.916_667),
        (1969, 2_440_222.916_667),
        (1983, 2_445_335.916_667),
        (1984, 2_445_700.875),
        (1985, 2_446_066.875),
        (1990, 2_447_892.875),
        (2000, 2_451_544.875),
        (2013, 2_456_293.875),
    ];
    for (year, expected) in cases {
        let new_year = Anchorage.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
        assert_julian(new_year, expected);
    }
}

#[test]
fn same_instant_in_any_zone_has_one_julian_date() {
    let utc = Utc.with_ymd_and_hms(2013, 1, 20, 15, 0, 0).unwrap();
    let paris = utc.with_timezone(&chrono_tz::Europe::Paris);
    let tokyo = utc.with_timezone(&chrono_tz::Asia::Tokyo);
    assert_eq!(gregorian_to_julian(&utc), gregorian_to_julian(&paris));
    assert_eq!(gregorian_to_julian(&utc), gregorian_to_julian(&tokyo));
}

#[test]
fn sunrise_is_reported_in_the_days_zone() {
    let (lat, lon) = (Degrees::new(48.8567), Degrees::new(2.351));
    let paris = chrono_tz::Europe::Paris
        .with_ymd_and_hms(2013, 1, 20, 12, 0, 0)
        .unwrap();
    let window = sunrise_sunset(&paris, lat, lon).unwrap();
    assert_eq!(window.start.timezone(), chrono_tz::Europe::Paris);
    assert_eq!(window.start.format("%Y%m%d").to_string(), "20130120");

    // Same calendar day asked from UTC lands on the same instants.
    let utc = Utc.with_ymd_and_hms(2013, 1, 20, 12, 0, 0).unwrap();
    let from_utc = sunrise_sunset(&utc, lat, lon).unwrap();
    let drift = (from_utc.start - window.start.with_timezone(&Utc)).num_seconds();
    assert!(drift.abs() < 60);
}

#[test]
fn dst_day_still_yields_a_window() {
    // Clocks in Paris jump from 02:00 to 03:00 on 2013-03-31.
    let (lat, lon) = (Degrees::new(48.8567), Degrees::new(2.351));
    let day = chrono_tz::Europe::Paris
        .with_ymd_and_hms(2013, 3, 31, 1, 30, 0)
        .unwrap();
    let window = sunrise_sunset(&day, lat, lon).unwrap();
    assert_eq!(window.start.format("%H").to_string(), "07");
    assert_eq!(window.end.format("%H").to_string(), "20");
    assert!(window.duration() > Duration::hours(12));
}

#[test]
fn consecutive_days_advance_by_about_a_day() {
    let (lat, lon) = (Degrees::new(34.0522), Degrees::new(-118.2437));
    let la = chrono_tz::America::Los_Angeles;
    let first = sunrise_sunset(&la.with_ymd_and_hms(2013, 1, 20, 12, 0, 0).unwrap(), lat, lon)
        .unwrap();
    let second = sunrise_sunset(&la.with_ymd_and_hms(2013, 1, 21, 12, 0, 0).unwrap(), lat, lon)
        .unwrap();
    let step = second.start - first.start;
    assert!((step - Duration::days(1)).num_minutes().abs() <= 2);
}

#[test]
fn day_period_display_names() {
    let names: Vec<String> = [
        DayPeriod::Night,
        DayPeriod::AstronomicalTwilight,
        DayPeriod::NauticalTwilight,
        DayPeriod::CivilTwilight,
        DayPeriod::Day,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(
        names,
        [
            "NIGHT",
            "ASTRONOMICAL_TWILIGHT",
            "NAUTICAL_TWILIGHT",
            "CIVIL_TWILIGHT",
            "DAY"
        ]
    );
}

#[test]
fn evening_walks_back_down_to_night() {
    let (lat, lon) = (Degrees::new(48.8567), Degrees::new(2.351));
    let paris = chrono_tz::CET;
    let mut seen = Vec::new();
    for minute in (12 * 60)..(24 * 60) {
        let instant = paris
            .with_ymd_and_hms(2013, 1, 20, minute / 60, minute % 60, 0)
            .unwrap();
        let period = day_period(&instant, lat, lon);
        if seen.last() != Some(&period) {
            seen.push(period);
        }
    }
    assert_eq!(
        seen,
        [
            DayPeriod::Day,
            DayPeriod::CivilTwilight,
            DayPeriod::NauticalTwilight,
            DayPeriod::AstronomicalTwilight,
            DayPeriod::Night,
        ]
    );
}

#[test]
fn day_period_ignores_the_zone_an_instant_is_written_in() {
    let (lat, lon) = (Degrees::new(34.0522), Degrees::new(-118.2437));
    let la = chrono_tz::America::Los_Angeles;
    for minute in 0..24 * 60 {
        let local = la
            .with_ymd_and_hms(2013, 1, 20, minute / 60, minute % 60, 0)
            .unwrap();
        let period = day_period(&local, lat, lon);
        let paris = local.with_timezone(&chrono_tz::Europe::Paris);
        let utc = local.with_timezone(&Utc);
        assert_eq!(day_period(&paris, lat, lon), period, "{local}");
        assert_eq!(day_period(&utc, lat, lon), period, "{local}");
    }

    let afternoon = Utc.with_ymd_and_hms(2013, 1, 21, 1, 0, 0).unwrap();
    assert!(is_day(&afternoon, lat, lon));
}

#[test]
fn now_predicates_never_agree() {
    let sites = [
        (21.3069, -157.8583),
        (34.0522, -118.2437),
        (53.3441, -6.2675),
        (-33.86, 151.2111),
        (-77.8456, 166.6693),
        (82.5018, -62.3481),
    ];
    for (lat, lon) in sites {
        let (lat, lon) = (Degrees::new(lat), Degrees::new(lon));
        assert_ne!(is_day_now(lat, lon), is_night_now(lat, lon));
    }
}

#[test]
fn location_rejects_bad_input() {
    assert!(Location::new(Degrees::new(-91.0), Degrees::new(0.0)).is_err());
    assert!(Location::new(Degrees::new(0.0), Degrees::new(181.0)).is_err());
    assert!(Location::new(Degrees::new(-77.8456), Degrees::new(166.6693)).is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn serde_location_and_julian_date() {
    let location = Location::new(Degrees::new(34.0522), Degrees::new(-118.2437)).unwrap();
    let json = serde_json::to_string(&location).unwrap();
    assert!(json.contains("\"latitude\":34.0522"));
    assert!(json.contains("\"longitude\":-118.2437"));

    let jd: JulianDate = serde_json::from_str("2451545.0").unwrap();
    assert_eq!(jd, JulianDate::J2000);
    assert_eq!(serde_json::to_string(&jd).unwrap(), "2451545.0");
}
