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
#![cfg(unix)]

use std::{fs, os::unix::fs::PermissionsExt, path::{Path,PathBuf}, time::Duration};
use chrono::{DateTime,TimeDelta,TimeZone,Utc};
use serde_json::Value;
use gsb_common::{cartesian3::Cartesian3, datetime::iso_format};
use gsb_footprint::{
    ephemeris::{EphemerisPoint,JsonEphemerisStore},
    footprint::{FootprintAssociator,FootprintGenerator,GetFootprintTool},
    record::{Record,records_from_json},
    FootprintConfig
};

fn t0 ()->DateTime<Utc> { Utc.with_ymd_and_hms( 2018, 7, 21, 8, 52, 29).unwrap() }

fn write_script (dir: &Path, name: &str, body: &str)->PathBuf {
    let path = dir.join(name);
    fs::write( &path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions( &path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn ephemeris (n: usize)->Vec<EphemerisPoint> {
    (0..n).map( |i| {
        let utc = t0() + TimeDelta::seconds( 10 * i as i64);
        EphemerisPoint {
            utc, tai: utc + TimeDelta::seconds(37), ut1: utc, orbit: 16175,
            position: Cartesian3::new( -2345678.5, 1234567.25, 6543210.0),
            velocity: Cartesian3::new( 1234.5, -6543.25, 321.0),
            quality: 0.0
        }
    }).collect()
}

fn associator (tool: &Path, timeout: Duration)->FootprintAssociator<GetFootprintTool,JsonEphemerisStore> {
    let config = FootprintConfig {
        get_footprint_cmd: tool.display().to_string(),
        swath_definition: PathBuf::from("/opt/eocfi/SDF_MSI.xml"),
        timeout,
        ..FootprintConfig::default()
    };
    FootprintAssociator::from_config( config, JsonEphemerisStore::new( Vec::new()))
}

fn record (start_offset_min: i64)->Record {
    let start = t0() + TimeDelta::minutes( start_offset_min);
    Record::new( start, start + TimeDelta::minutes(2))
}

// all scripts are written before any of them is executed, otherwise exec can fail with ETXTBSY
#[tokio::test]
async fn test_get_footprint_tool() {
    let dir = tempfile::tempdir().unwrap();
    let args_file = dir.path().join("args.txt");

    let ok_tool = write_script( dir.path(), "get_footprint", &format!(
        "printf '%s\\n' \"$@\" > '{}'\necho '170,10 175,20 -175,30 -170,40 '", args_file.display()));
    let failing_tool = write_script( dir.path(), "failing_footprint", "echo 'cannot open swath definition' >&2\nexit 2");
    let hanging_tool = write_script( dir.path(), "hanging_footprint", "sleep 10");

    //--- successful invocation
    let assoc = associator( &ok_tool, Duration::from_secs(10));
    let records = assoc.associate_footprints( vec![ record(0) ], "S2A", Some( ephemeris(10))).await.unwrap();

    assert_eq!( records[0].footprints(), vec![
        "-180.0 25.0 -180.0 25.0 -175.0 30.0 -170.0 40.0 -180.0 25.0",
        "180.0 25.0 170.0 10.0 175.0 20.0 180.0 25.0 180.0 25.0"
    ]);

    let args: Vec<String> = fs::read_to_string( &args_file).unwrap().lines().map( |l| l.to_string()).collect();
    assert_eq!( args.len(), 10);
    assert_eq!( &args[0..4], &["-b", "6776.369780092593", "-e", "6776.371168981482"]);
    assert_eq!( args[4], "-o");
    let osv: Vec<&str> = args[5].split(' ').collect();
    assert_eq!( osv.len(), 2);
    assert_eq!( osv[0], osv[1]);
    assert!( !Path::new( osv[0]).exists()); // scratch file removed
    assert_eq!( &args[6..], &["-s", "/opt/eocfi/SDF_MSI.xml", "-n", "34"]);

    //--- non-zero exit
    let assoc = associator( &failing_tool, Duration::from_secs(10));
    let records = assoc.associate_footprints( vec![ record(0), record(10) ], "S2A", Some( ephemeris(10))).await.unwrap();
    assert_eq!( records.len(), 2);
    assert!( records.iter().all( |r| !r.has_footprint()));

    //--- timeout
    let assoc = associator( &hanging_tool, Duration::from_millis(300));
    let records = assoc.associate_footprints( vec![ record(0) ], "S2A", Some( ephemeris(10))).await.unwrap();
    assert!( !records[0].has_footprint());

    //--- missing tool
    let assoc = associator( &dir.path().join("nope"), Duration::from_secs(10));
    let records = assoc.associate_footprints( vec![ record(0) ], "S2A", Some( ephemeris(10))).await.unwrap();
    assert!( !records[0].has_footprint());
}
