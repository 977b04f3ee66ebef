use super::{LatLon, Nztm, ProjectionError};

/// Transverse Mercator projection parameters on a given ellipsoid
#[derive(Debug, Clone, Copy)]
pub struct TransverseMercator {
    /// Semi-major axis (m)
    pub a: f64,
    /// Flattening
    pub f: f64,
    /// Central meridian (radians)
    pub central_meridian: f64,
    /// Origin latitude (radians)
    pub origin_lat: f64,
    /// Scale factor on the central meridian
    pub scale: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

/// NZTM2000: GRS80 ellipsoid, 173°E central meridian
pub const NZTM2000: TransverseMercator = TransverseMercator {
    a: 6_378_137.0,
    f: 1.0 / 298.257_222_101,
    central_meridian: 173.0 * std::f64::consts::PI / 180.0,
    origin_lat: 0.0,
    scale: 0.9996,
    false_easting: 1_600_000.0,
    false_northing: 10_000_000.0,
};

impl TransverseMercator {
    fn e2(&self) -> f64 {
        2.0 * self.f - self.f * self.f
    }

    /// Meridian arc length from the equator to latitude `lat` (radians)
    fn meridian_arc(&self, lat: f64) -> f64 {
        let e2 = self.e2();
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        let a0 = 1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0;
        let a2 = 3.0 / 8.0 * (e2 + e4 / 4.0 + 15.0 * e6 / 128.0);
        let a4 = 15.0 / 256.0 * (e4 + 3.0 * e6 / 4.0);
        let a6 = 35.0 * e6 / 3072.0;

        self.a
            * (a0 * lat - a2 * (2.0 * lat).sin() + a4 * (4.0 * lat).sin()
                - a6 * (6.0 * lat).sin())
    }

    /// Latitude whose meridian arc equals `m`
    fn foot_point_lat(&self, m: f64) -> f64 {
        let n = self.f / (2.0 - self.f);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;

        let g = self.a * (1.0 - n) * (1.0 - n2) * (1.0 + 9.0 * n2 / 4.0 + 225.0 * n4 / 64.0);
        let sig = m / g;

        sig + (3.0 * n / 2.0 - 27.0 * n3 / 32.0) * (2.0 * sig).sin()
            + (21.0 * n2 / 16.0 - 55.0 * n4 / 32.0) * (4.0 * sig).sin()
            + (151.0 * n3 / 96.0) * (6.0 * sig).sin()
            + (1097.0 * n4 / 512.0) * (8.0 * sig).sin()
    }

    /// Grid (easting, northing) to geodetic (lat, lon) in radians
    pub fn to_geodetic(&self, easting: f64, northing: f64) -> (f64, f64) {
        let e2 = self.e2();
        let om = self.meridian_arc(self.origin_lat);

        let cn1 = (northing - self.false_northing) / self.scale + om;
        let fphi = self.foot_point_lat(cn1);
        let slt = fphi.sin();
        let clt = fphi.cos();

        let eslt = 1.0 - e2 * slt * slt;
        let eta = self.a / eslt.sqrt();
        let rho = eta * (1.0 - e2) / eslt;
        let psi = eta / rho;

        let e = easting - self.false_easting;
        let x = e / (eta * self.scale);
        let x2 = x * x;

        let t = slt / clt;
        let t2 = t * t;
        let t4 = t2 * t2;

        let trm1 = 0.5;
        let trm2 = ((-4.0 * psi + 9.0 * (1.0 - t2)) * psi + 12.0 * t2) / 24.0;
        let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 12.0 * (21.0 - 71.0 * t2)) * psi
            + 15.0 * ((15.0 * t2 - 98.0) * t2 + 15.0))
            * psi
            + 180.0 * ((-3.0 * t2 + 5.0) * t2))
            * psi
            + 360.0 * t4)
            / 720.0;
        let trm4 = (((1575.0 * t2 + 4095.0) * t2 + 3633.0) * t2 + 1385.0) / 40320.0;
        let lat = fphi + (t * x * e / (self.scale * rho)) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

        let trm1 = 1.0;
        let trm2 = (psi + 2.0 * t2) / 6.0;
        let trm3 = (((-4.0 * (1.0 - 6.0 * t2) * psi + (9.0 - 68.0 * t2)) * psi + 72.0 * t2) * psi
            + 24.0 * t4)
            / 120.0;
        let trm4 = (((720.0 * t2 + 1320.0) * t2 + 662.0) * t2 + 61.0) / 5040.0;
        let lon = self.central_meridian - (x / clt) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

        (lat, lon)
    }

    /// Geodetic (lat, lon) in radians to grid (easting, northing)
    pub fn to_grid(&self, lat: f64, lon: f64) -> (f64, f64) {
        let e2 = self.e2();
        let om = self.meridian_arc(self.origin_lat);

        let mut dlon = lon - self.central_meridian;
        if dlon > std::f64::consts::PI {
            dlon -= 2.0 * std::f64::consts::PI;
        }
        if dlon < -std::f64::consts::PI {
            dlon += 2.0 * std::f64::consts::PI;
        }

        let m = self.meridian_arc(lat);
        let slt = lat.sin();
        let clt = lat.cos();

        let eslt = 1.0 - e2 * slt * slt;
        let eta = self.a / eslt.sqrt();
        let rho = eta * (1.0 - e2) / eslt;
        let psi = eta / rho;

        let wc = clt * dlon;
        let wc2 = wc * wc;

        let t = slt / clt;
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        let trm1 = (psi - t2) / 6.0;
        let trm2 = (((4.0 * (1.0 - 6.0 * t2) * psi + (1.0 + 8.0 * t2)) * psi - 2.0 * t2) * psi + t4)
            / 120.0;
        let trm3 = (61.0 - 479.0 * t2 + 179.0 * t4 - t6) / 5040.0;
        let gce = (self.scale * eta * dlon * clt) * (((trm3 * wc2 + trm2) * wc2 + trm1) * wc2 + 1.0);
        let easting = gce + self.false_easting;

        let trm1 = 0.5;
        let trm2 = ((4.0 * psi + 1.0) * psi - t2) / 24.0;
        let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 28.0 * (1.0 - 6.0 * t2)) * psi
            + (1.0 - 32.0 * t2))
            * psi
            - 2.0 * t2)
            * psi
            + t4)
            / 720.0;
        let trm4 = (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6) / 40320.0;
        let gcn = (eta * t) * ((((trm4 * wc2 + trm3) * wc2 + trm2) * wc2 + trm1) * wc2);
        let northing = (gcn + m - om) * self.scale + self.false_northing;

        (easting, northing)
    }
}

fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Convert NZTM2000 easting/northing to WGS84 latitude/longitude
///
/// NZGD2000 and WGS84 are treated as coincident, which holds to well under a
/// metre for mapping.
pub fn nztm_to_wgs84(x: f64, y: f64) -> Result<LatLon, ProjectionError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ProjectionError::NonFinite(x, y));
    }

    let (lat, lon) = NZTM2000.to_geodetic(x, y);
    let lat = lat.to_degrees();
    let lon = lon.to_degrees();

    if !lat.is_finite() || !lon.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(ProjectionError::OutOfRange { lat, lon });
    }

    Ok(LatLon {
        lat,
        lon: normalize_lon(lon),
    })
}

/// Convert WGS84 latitude/longitude to NZTM2000 easting/northing
pub fn wgs84_to_nztm(pos: LatLon) -> Result<Nztm, ProjectionError> {
    if !pos.lat.is_finite() || !pos.lon.is_finite() {
        return Err(ProjectionError::NonFinite(pos.lat, pos.lon));
    }
    if !pos.is_valid() {
        return Err(ProjectionError::OutOfRange {
            lat: pos.lat,
            lon: pos.lon,
        });
    }

    let (x, y) = NZTM2000.to_grid(pos.lat.to_radians(), pos.lon.to_radians());
    Ok(Nztm { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_projection_origin() {
        let pos = nztm_to_wgs84(1_600_000.0, 10_000_000.0).unwrap();
        assert!(pos.lat.abs() < 1e-9);
        assert!((pos.lon - 173.0).abs() < 1e-9);
    }

    #[test]
    fn test_auckland_site() {
        // AHA site from the Transpower dataset
        let pos = nztm_to_wgs84(1_751_478.0, 5_921_654.0).unwrap();
        assert!(pos.lat > -37.0 && pos.lat < -36.7, "lat was {}", pos.lat);
        assert!(pos.lon > 174.6 && pos.lon < 174.9, "lon was {}", pos.lon);
    }

    #[test]
    fn test_forward_then_inverse() {
        let grid = wgs84_to_nztm(LatLon { lat: -41.2865, lon: 174.7762 }).unwrap();
        let back = nztm_to_wgs84(grid.x, grid.y).unwrap();
        let again = wgs84_to_nztm(back).unwrap();
        assert!((again.x - grid.x).abs() < 1e-3);
        assert!((again.y - grid.y).abs() < 1e-3);
        assert!((back.lat + 41.2865).abs() < 1e-8);
        assert!((back.lon - 174.7762).abs() < 1e-8);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            nztm_to_wgs84(f64::NAN, 5_921_654.0),
            Err(ProjectionError::NonFinite(_, _))
        ));
        assert!(matches!(
            nztm_to_wgs84(1_751_478.0, f64::INFINITY),
            Err(ProjectionError::NonFinite(_, _))
        ));
    }

    #[test]
    fn test_normalize_lon() {
        assert_eq!(normalize_lon(174.5), 174.5);
        assert_eq!(normalize_lon(190.0), -170.0);
        assert_eq!(normalize_lon(-190.0), 170.0);
    }

    proptest! {
        #[test]
        fn prop_nz_grid_projects_in_range(
            x in 1_000_000.0f64..2_200_000.0,
            y in 4_700_000.0f64..6_300_000.0,
        ) {
            let pos = nztm_to_wgs84(x, y).unwrap();
            prop_assert!(pos.is_valid());
        }

        #[test]
        fn prop_any_finite_pair_is_valid_or_rejected(
            x in -1.0e8f64..1.0e8,
            y in -1.0e8f64..1.0e8,
        ) {
            if let Ok(pos) = nztm_to_wgs84(x, y) {
                prop_assert!(pos.is_valid());
            }
        }
    }
}
