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

//! common utilities shared by the ground segment crates: time conversions, geographic rings,
//! XML output, external process execution, file helpers and config loading

pub mod macros;
pub mod errors;
pub mod datetime;
pub mod geo;
pub mod cartesian3;
pub mod xml_writer;
pub mod process;
pub mod fs;
pub mod config;

// re-exported so that our logging macros also work in crates that do not depend on tracing directly
pub use tracing;

/// format a f64 as the shortest round-trip representation that always carries a decimal point
/// (`180.0`, `-57.990952831103854`). This is what downstream geometry consumers expect for coordinates.
/// Values below 1e-4 or from 1e16 on use a signed exponent with at least two digits (`1e-05`, `1.5e+16`)
pub fn fmt_f64 (v: f64)->String {
    let s = format!("{:?}", v);
    match s.split_once('e') {
        Some((mantissa,exp)) => {
            let (sign,digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp)
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None if v.is_nan() => "nan".to_string(),
        None => s
    }
}
