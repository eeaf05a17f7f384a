//! Coordinates, great-circle distances and ETAs for ad-hoc passage
//! calculations.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeoError {
    #[error("Latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),

    #[error("Speed must be positive, got {0} kn")]
    InvalidSpeed(f64),

    #[error("Distance must be a finite non-negative number, got {0} nm")]
    InvalidDistance(f64),

    #[error("Passage of {hours:.1} h is too long to schedule")]
    EtaOverflow { hours: f64 },
}

/// A position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Degrees and decimal minutes, e.g. `51°30.0'N 000°07.5'W`.
    ///
    /// ```rust
    /// use berthguard::geo::Coordinate;
    ///
    /// let london = Coordinate::new(51.5, -0.125).unwrap();
    /// assert_eq!(london.format_dm(), "51°30.0'N 000°07.5'W");
    /// ```
    pub fn format_dm(&self) -> String {
        let lat_hemi = if self.lat < 0.0 { 'S' } else { 'N' };
        let lon_hemi = if self.lon < 0.0 { 'W' } else { 'E' };
        let (lat_deg, lat_min) = degrees_minutes(self.lat);
        let (lon_deg, lon_min) = degrees_minutes(self.lon);
        format!("{lat_deg:02}°{lat_min:04.1}'{lat_hemi} {lon_deg:03}°{lon_min:04.1}'{lon_hemi}")
    }
}

/// Split an angle into whole degrees and minutes rounded to a tenth,
/// carrying into the degrees when the minutes round up to 60.
fn degrees_minutes(value: f64) -> (u32, f64) {
    let abs = value.abs();
    let mut degrees = abs.trunc() as u32;
    let mut minutes = ((abs - abs.trunc()) * 600.0).round() / 10.0;
    if minutes >= 60.0 {
        degrees += 1;
        minutes = 0.0;
    }
    (degrees, minutes)
}

/// Great-circle distance in nautical miles (haversine).
pub fn distance_nm(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_NM * a.sqrt().min(1.0).asin()
}

/// Arrival time for a passage of `distance_nm` at `speed_knots`.
pub fn eta(
    departure: DateTime<Utc>,
    distance_nm: f64,
    speed_knots: f64,
) -> Result<DateTime<Utc>, GeoError> {
    if !speed_knots.is_finite() || speed_knots <= 0.0 {
        return Err(GeoError::InvalidSpeed(speed_knots));
    }
    if !distance_nm.is_finite() || distance_nm < 0.0 {
        return Err(GeoError::InvalidDistance(distance_nm));
    }

    let hours = distance_nm / speed_knots;
    let seconds = (hours * 3600.0).round();
    if seconds > i64::MAX as f64 / 1000.0 {
        return Err(GeoError::EtaOverflow { hours });
    }
    Duration::try_seconds(seconds as i64)
        .and_then(|passage| departure.checked_add_signed(passage))
        .ok_or(GeoError::EtaOverflow { hours })
}

/// One distance/ETA calculation, as stored in the calculation history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub from: Coordinate,
    pub to: Coordinate,
    pub speed_knots: f64,
    pub departure: DateTime<Utc>,
    pub distance_nm: f64,
    pub eta: DateTime<Utc>,
}

impl Calculation {
    pub fn compute(
        from: Coordinate,
        to: Coordinate,
        speed_knots: f64,
        departure: DateTime<Utc>,
    ) -> Result<Self, GeoError> {
        let distance_nm = distance_nm(from, to);
        let eta = eta(departure, distance_nm, speed_knots)?;
        Ok(Self {
            from,
            to,
            speed_knots,
            departure,
            distance_nm,
            eta,
        })
    }

    /// One-line summary for history listings.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {}: {:.1} nm at {:.1} kn, ETA {}",
            self.from.format_dm(),
            self.to.format_dm(),
            self.distance_nm,
            self.speed_knots,
            self.eta.format("%Y-%m-%d %H:%M UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn rejects_out_of_range_positions() {
        assert_eq!(
            Coordinate::new(90.5, 0.0),
            Err(GeoError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            Coordinate::new(0.0, -180.1),
            Err(GeoError::LongitudeOutOfRange(-180.1))
        );
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn formats_each_hemisphere() {
        assert_eq!(coord(-33.8568, 151.2153).format_dm(), "33°51.4'S 151°12.9'E");
        assert_eq!(coord(0.0, 0.0).format_dm(), "00°00.0'N 000°00.0'E");
    }

    #[test]
    fn minutes_rounding_carries_into_degrees() {
        assert_eq!(coord(10.99999, 20.0).format_dm(), "11°00.0'N 020°00.0'E");
    }

    #[test]
    fn one_degree_of_latitude_is_sixty_miles() {
        let d = distance_nm(coord(0.0, 0.0), coord(1.0, 0.0));
        assert!((d - 60.04).abs() < 0.05, "{d}");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let rotterdam = coord(51.95, 4.14);
        assert_eq!(distance_nm(rotterdam, rotterdam), 0.0);
    }

    #[test]
    fn eta_divides_distance_by_speed() {
        let departure = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap();
        let arrival = eta(departure, 120.0, 12.0).unwrap();
        assert_eq!(arrival, Utc.with_ymd_and_hms(2024, 3, 1, 16, 0, 0).unwrap());
    }

    #[test]
    fn eta_rejects_bad_inputs() {
        let now = Utc::now();
        assert_eq!(eta(now, 10.0, 0.0), Err(GeoError::InvalidSpeed(0.0)));
        assert_eq!(eta(now, 10.0, -3.0), Err(GeoError::InvalidSpeed(-3.0)));
        assert_eq!(eta(now, -1.0, 10.0), Err(GeoError::InvalidDistance(-1.0)));
        assert!(matches!(
            eta(now, 1e300, 1.0),
            Err(GeoError::EtaOverflow { .. })
        ));
    }

    #[test]
    fn calculation_summary_mentions_both_ends() {
        let departure = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap();
        let calc =
            Calculation::compute(coord(0.0, 0.0), coord(1.0, 0.0), 10.0, departure).unwrap();

        let summary = calc.summary();
        assert!(summary.starts_with("00°00.0'N 000°00.0'E -> 01°00.0'N 000°00.0'E"));
        assert!(summary.contains("kn"));
        assert!(calc.eta > departure);
    }
}
