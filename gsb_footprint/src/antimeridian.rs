/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! correction of footprint polygons that cross the antimeridian (±180° longitude).
//!
//! Footprints computed from ground tracks are plain lon/lat rings, i.e. a ring that crosses the dateline has
//! consecutive vertices such as 179° → -179°, which geometry engines interpret as a polygon that spans the
//! whole globe in the opposite direction. We split such rings at the antimeridian, inserting interpolated
//! boundary vertices at exactly +180 and -180.
//!
//! We only distinguish between vertices before and after the *first* crossing, hence there are never more
//! than two output rings. Consumers rely on this (footprint values are named `footprint_0` and `footprint_1`).
//! Footprints are computed for segments of less than 100 min, which keeps ground tracks from crossing twice
//! in the same direction.

use gsb_common::geo::{GeoPoint,GeoRing};
use crate::errors::{FootprintError,Result,coords_error};

/// consecutive vertices with opposite longitude signs are only considered to cross the antimeridian if
/// the sum of their absolute longitudes exceeds this value. Smaller sums are crossings of the 0° meridian
pub const ANTIMERIDIAN_CROSSING_THRESHOLD: f64 = 270.0;

/// minimum number of points of an output ring (including the closing point). This is a hard floor imposed
/// by the polygon store
pub const MIN_RING_POINTS: usize = 4;

/// does the edge from `prev` to `p` cross the antimeridian
#[inline]
pub fn is_antimeridian_crossing (prev: &GeoPoint, p: &GeoPoint)->bool {
    prev.lon() * p.lon() < 0.0 && (p.lon().abs() + prev.lon().abs()) > ANTIMERIDIAN_CROSSING_THRESHOLD
}

/// latitude at which the edge from `prev` to `p` crosses the antimeridian. We shift longitudes by 180°
/// so that the discontinuity moves to 0° and then interpolate linearly
pub fn antimeridian_latitude (prev: &GeoPoint, p: &GeoPoint)->f64 {
    let (lon_prev, lon) = if prev.lon() > 0.0 {
        (prev.lon() - 180.0, 180.0 + p.lon())
    } else {
        (180.0 + prev.lon(), p.lon() - 180.0)
    };

    // keep the evaluation order - results have to be bit-identical with previously stored footprints
    prev.lat() - lon_prev * ((p.lat() - prev.lat()) / (lon - lon_prev))
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
enum ActiveRing {
    BeforeCrossing,
    AfterCrossing
}

/// the traversal state: two output rings and which one receives the next vertex
struct AntimeridianSplitter {
    before: GeoRing,
    after: GeoRing,
    active: ActiveRing,
    n_crossings: usize
}

impl AntimeridianSplitter {
    fn new (capacity: usize)->Self {
        AntimeridianSplitter {
            before: GeoRing::with_capacity(capacity),
            after: GeoRing::new(),
            active: ActiveRing::BeforeCrossing,
            n_crossings: 0
        }
    }

    fn active_ring (&mut self)->&mut GeoRing {
        match self.active {
            ActiveRing::BeforeCrossing => &mut self.before,
            ActiveRing::AfterCrossing => &mut self.after
        }
    }

    fn push (&mut self, p: GeoPoint) {
        self.active_ring().push(p);
    }

    /// terminate the active ring at the antimeridian and continue on the other side.
    /// Only the first crossing switches to the `after` ring, all subsequent ones continue in `before`
    fn cross (&mut self, lat: f64, lon: f64) {
        let boundary_lon = if lon > 0.0 { -180.0 } else { 180.0 };

        self.push( GeoPoint::from_lon_lat_degrees( boundary_lon, lat));
        self.active = if self.n_crossings == 0 { ActiveRing::AfterCrossing } else { ActiveRing::BeforeCrossing };
        self.push( GeoPoint::from_lon_lat_degrees( -boundary_lon, lat));

        self.n_crossings += 1;
    }

    fn into_rings (mut self)->Vec<GeoRing> {
        self.before.close( MIN_RING_POINTS);

        if self.n_crossings > 0 {
            self.after.close( MIN_RING_POINTS);
            vec![ self.before, self.after ]
        } else {
            vec![ self.before ]
        }
    }
}

/// split a (conceptually closed) ring at the antimeridian. This returns one ring if there is no antimeridian
/// crossing and two rings otherwise, the ring that contains the first vertex always comes first.
/// All returned rings are closed and have at least [`MIN_RING_POINTS`] points.
/// The input ring does not have to be explicitly closed - the edge from the last to the first vertex is always
/// checked. An empty input produces a single empty ring
pub fn split_at_antimeridian (points: &[GeoPoint])->Vec<GeoRing> {
    let n = points.len();
    let mut splitter = AntimeridianSplitter::new( n + 4);

    for (i,p) in points.iter().enumerate() {
        let prev = if i == 0 { &points[n-1] } else { &points[i-1] };

        if is_antimeridian_crossing( prev, p) {
            let lat = antimeridian_latitude( prev, p);
            splitter.cross( lat, p.lon());
        }
        splitter.push( *p);
    }

    splitter.into_rings()
}

/// parse footprint coordinate text as produced by the footprint tool ("lon,lat lon,lat ..") or as
/// alternating scalars ("lon lat lon lat .."). Embedded newlines are ignored
pub fn parse_coordinates (text: &str)->Result<Vec<GeoPoint>> {
    let mut values: Vec<f64> = Vec::new();

    for token in text.split( |c: char| c.is_whitespace() || c == ',').filter( |t| !t.is_empty()) {
        let v: f64 = token.parse().map_err( |_| coords_error!("invalid coordinate value '{}'", token))?;
        values.push(v);
    }

    if values.is_empty() {
        return Err( coords_error!("no coordinates"))
    }
    if values.len() % 2 != 0 {
        return Err( coords_error!("odd number of coordinate values ({})", values.len()))
    }

    Ok( values.chunks_exact(2).map( |c| GeoPoint::from_lon_lat_degrees( c[0], c[1])).collect() )
}

/// turn raw footprint coordinate text into one or two ring strings ("lon lat lon lat ..") that do not
/// cross the antimeridian
pub fn correct_footprint (text: &str)->Result<Vec<String>> {
    let points = parse_coordinates( text)?;
    Ok( split_at_antimeridian( &points).iter().map( |r| r.to_coordinate_string()).collect() )
}
