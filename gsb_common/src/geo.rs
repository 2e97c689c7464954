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
#![allow(unused)]

/// this module provides the geographic value types for footprint computation. We wrap the
/// [geo](https://docs.rs/geo/latest/geo/index.html) types with new types to add value semantics: a `GeoPoint` is a
/// longitude/latitude pair in degrees, a `GeoRing` is an ordered (normally closed) sequence of `GeoPoint`s.
/// Note that we do not normalize longitudes - antimeridian boundary vertices have to stay exactly at +180 or -180

use std::fmt;
use geo::Point;

use crate::fmt_f64;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64 (x: longitude, y: latitude)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( lon, lat))
    }

    #[inline] pub fn lon (&self)->f64 { self.0.x() }
    #[inline] pub fn lat (&self)->f64 { self.0.y() }

    /// is this point on the antimeridian
    pub fn is_on_antimeridian (&self)->bool { self.lon().abs() == 180.0 }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lon(), self.lat())
    }
}

/* #endregion GeoPoint */

/* #region GeoRing ************************************************************************************************/

/// an ordered sequence of GeoPoints that is supposed to describe a polygon boundary
#[derive(Debug,Clone,PartialEq,Default)]
pub struct GeoRing(Vec<GeoPoint>);

impl GeoRing {
    pub fn new ()->Self { GeoRing( Vec::new()) }

    pub fn with_capacity (len: usize)->Self { GeoRing( Vec::with_capacity(len)) }

    pub fn from_geo_points (ps: Vec<GeoPoint>)->Self { GeoRing(ps) }

    pub fn push (&mut self, p: GeoPoint) { self.0.push(p) }

    pub fn len (&self)->usize { self.0.len() }

    pub fn is_empty (&self)->bool { self.0.is_empty() }

    pub fn first (&self)->Option<&GeoPoint> { self.0.first() }

    pub fn points (&self)->&[GeoPoint] { &self.0 }

    pub fn is_closed (&self)->bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => self.0.len() > 1 && first == last,
            _ => false
        }
    }

    /// close the ring by appending its first point so that it has at least `min_len` points.
    /// If the ring is too short we repeat the last point before closing, i.e. `[a,b]` turns into `[a,b,b,a]`
    /// for a `min_len` of 4. This is a no-op for empty rings
    pub fn close (&mut self, min_len: usize) {
        if let Some(first) = self.0.first().copied() {
            while self.0.len() + 1 < min_len {
                let last = self.0[self.0.len()-1];
                self.0.push(last);
            }
            self.0.push(first);
        }
    }

    /// space separated "lon lat lon lat .." representation (as used by the event store geometry values)
    pub fn to_coordinate_string (&self)->String {
        let mut s = String::with_capacity( self.0.len() * 24);
        for (i,p) in self.0.iter().enumerate() {
            if i > 0 { s.push(' ') }
            s.push_str( &fmt_f64(p.lon()));
            s.push(' ');
            s.push_str( &fmt_f64(p.lat()));
        }
        s
    }
}

impl fmt::Display for GeoRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate_string())
    }
}

impl From<GeoRing> for Vec<GeoPoint> {
    fn from (ring: GeoRing)->Self { ring.0 }
}

/* #endregion GeoRing */
