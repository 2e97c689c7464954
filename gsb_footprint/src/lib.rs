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

use std::{path::PathBuf, time::Duration};
use serde::{Deserialize,Serialize};
use gsb_common::datetime::{deserialize_duration, serialize_duration};

pub mod errors;
use errors::{FootprintError,Result};

pub mod antimeridian;
pub mod coords;
pub mod record;
pub mod ephemeris;
pub mod footprint;

/* #region constants **********************************************************************************************/

/// records spanning this many days (about 100 min) or more are not worth a footprint
pub const MAX_FOOTPRINT_SPAN_DAYS: f64 = 0.0695;

/// nominal duration of a single MSI scene. The footprint tool samples the ground track once per scene
pub const SCENE_DURATION_SECS: f64 = 3.608;

/// upper bound for the number of ground track samples per footprint
pub const MAX_FOOTPRINT_ITERATIONS: u32 = 200;

/// how far the ephemeris query extends past the stop of the last record
pub const EPHEMERIS_EXTENSION_MINUTES: i64 = 100;

pub const DEFAULT_GET_FOOTPRINT_CMD: &str = "get_footprint";
pub const DEFAULT_SWATH_DEFINITION: &str = "SDF_MSI.xml";
pub const DEFAULT_MISSION: &str = "SENTINEL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/* #endregion constants */

/* #region configuration data *************************************************************************************/

/// configuration for the footprint association. The numeric fields encode mission specific physical
/// assumptions (orbit geometry and sensor scene cadence) and normally should not be changed.
/// Example RON:
/// ```text
/// FootprintConfig(
///     get_footprint_cmd: "/opt/eocfi/bin/get_footprint",
///     swath_definition: "/opt/eocfi/resources/SDF_MSI.xml",
///     timeout: "90s",
/// )
/// ```
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct FootprintConfig {
    /// name or path of the external footprint generator
    #[serde(default="default_get_footprint_cmd")]
    pub get_footprint_cmd: String,

    /// the swath definition file of the instrument
    #[serde(default="default_swath_definition")]
    pub swath_definition: PathBuf,

    /// prefix of the <Mission> element in generated ephemeris files
    #[serde(default="default_mission")]
    pub mission: String,

    /// max time we wait for a single footprint tool execution
    #[serde(default="default_timeout", deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub timeout: Duration,

    #[serde(default="default_max_span_days")]
    pub max_span_days: f64,

    #[serde(default="default_scene_duration")]
    pub scene_duration_secs: f64,

    #[serde(default="default_max_iterations")]
    pub max_iterations: u32,

    #[serde(default="default_ephemeris_extension")]
    pub ephemeris_extension_minutes: i64,
}

fn default_get_footprint_cmd()->String { DEFAULT_GET_FOOTPRINT_CMD.to_string() }
fn default_swath_definition()->PathBuf { PathBuf::from(DEFAULT_SWATH_DEFINITION) }
fn default_mission()->String { DEFAULT_MISSION.to_string() }
fn default_timeout()->Duration { Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
fn default_max_span_days()->f64 { MAX_FOOTPRINT_SPAN_DAYS }
fn default_scene_duration()->f64 { SCENE_DURATION_SECS }
fn default_max_iterations()->u32 { MAX_FOOTPRINT_ITERATIONS }
fn default_ephemeris_extension()->i64 { EPHEMERIS_EXTENSION_MINUTES }

impl Default for FootprintConfig {
    fn default()->Self {
        FootprintConfig {
            get_footprint_cmd: default_get_footprint_cmd(),
            swath_definition: default_swath_definition(),
            mission: default_mission(),
            timeout: default_timeout(),
            max_span_days: default_max_span_days(),
            scene_duration_secs: default_scene_duration(),
            max_iterations: default_max_iterations(),
            ephemeris_extension_minutes: default_ephemeris_extension(),
        }
    }
}

impl FootprintConfig {
    pub fn load (path: impl AsRef<std::path::Path>)->Result<Self> {
        Ok( gsb_common::config::load_config_path( path)? )
    }
}

/* #endregion configuration data */
