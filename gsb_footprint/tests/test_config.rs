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

use std::{path::{Path,PathBuf}, time::Duration};
use gsb_footprint::*;

#[test]
fn test_default_config() {
    let config = FootprintConfig::default();
    assert_eq!( config.get_footprint_cmd, "get_footprint");
    assert_eq!( config.swath_definition, PathBuf::from("SDF_MSI.xml"));
    assert_eq!( config.max_span_days, MAX_FOOTPRINT_SPAN_DAYS);
    assert_eq!( config.scene_duration_secs, 3.608);
    assert_eq!( config.max_iterations, 200);
    assert_eq!( config.ephemeris_extension_minutes, 100);
}

#[test]
fn test_load_config() {
    let path = Path::new( env!("CARGO_MANIFEST_DIR")).join("configs").join("footprint.ron");
    let config = FootprintConfig::load( &path).unwrap();

    assert_eq!( config.get_footprint_cmd, "/opt/eocfi/bin/get_footprint");
    assert_eq!( config.swath_definition, PathBuf::from("/opt/eocfi/resources/SDF_MSI.xml"));
    assert_eq!( config.mission, "SENTINEL");
    assert_eq!( config.timeout, Duration::from_secs(60));
    assert_eq!( config.max_span_days, 0.0695);
}

#[test]
fn test_partial_config() {
    let config: FootprintConfig = gsb_common::config::config_from_str( r#"FootprintConfig( timeout: "90s" )"#).unwrap();
    assert_eq!( config.timeout, Duration::from_secs(90));
    assert_eq!( config.get_footprint_cmd, DEFAULT_GET_FOOTPRINT_CMD);
    assert_eq!( config.mission, DEFAULT_MISSION);
}
