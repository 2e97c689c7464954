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

//! clean-up of coordinate lists as they are found in datastrip, granule and tile footprint descriptions.
//! These lists are flat sequences of scalars, either `lon lat` (datastrips) or `lon lat alt` (granules and tiles).
//! They often repeat the first vertex more than once, or contain trailing values, which is not acceptable
//! for polygon stores.

/// stride of datastrip coordinate lists (lon lat)
pub const DATASTRIP_STRIDE: usize = 2;

/// stride of granule and tile coordinate lists (lon lat alt)
pub const GRANULE_STRIDE: usize = 3;

/// reduce a flat list of coordinate values with the given stride to a closed `lon lat` list. We stop at the
/// first vertex that repeats the first longitude and re-close the list with the first `lon lat` pair.
/// Lists with less than two values are returned empty, trailing incomplete vertices are ignored
pub fn correct_coordinate_list<T> (coords: &[T], stride: usize)->Vec<T> where T: PartialEq + Clone {
    let mut list: Vec<T> = Vec::with_capacity( (coords.len() / stride.max(1) + 1) * 2);

    if coords.len() > 1 && stride >= 2 {
        let first_lon = &coords[0];
        let first_lat = &coords[1];
        list.push( first_lon.clone());
        list.push( first_lat.clone());

        let mut i = stride;
        while i < coords.len() {
            let lon = &coords[i];
            if lon == first_lon { break }

            if i+1 < coords.len() {
                list.push( lon.clone());
                list.push( coords[i+1].clone());
            }
            i += stride;
        }

        list.push( first_lon.clone());
        list.push( first_lat.clone());
    }

    list
}

#[inline]
pub fn correct_coordinates_for_datastrip<T> (coords: &[T])->Vec<T> where T: PartialEq + Clone {
    correct_coordinate_list( coords, DATASTRIP_STRIDE)
}

#[inline]
pub fn correct_coordinates_for_granule<T> (coords: &[T])->Vec<T> where T: PartialEq + Clone {
    correct_coordinate_list( coords, GRANULE_STRIDE)
}

/// join coordinate values into the space separated geometry text used by geometry values
pub fn coordinates_to_geometry<S> (coords: &[S])->String where S: AsRef<str> {
    let mut s = String::new();
    for (i,c) in coords.iter().enumerate() {
        if i > 0 { s.push(' ') }
        s.push_str( c.as_ref());
    }
    s
}
