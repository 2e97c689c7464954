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

use chrono::{DateTime,TimeDelta,TimeZone,Utc};
use serde_json::{json,Value};
use gsb_common::{cartesian3::Cartesian3, datetime::iso_format};
use gsb_footprint::{ephemeris::*, record::{Record,records_from_json}};

fn t0 ()->DateTime<Utc> { Utc.with_ymd_and_hms( 2018, 7, 21, 8, 50, 0).unwrap() }

fn osv_record (utc: DateTime<Utc>, satellite: &str, orbit: f64)->Value {
    json!({
        "start": iso_format(&utc),
        "stop": iso_format(&(utc + TimeDelta::seconds(10))),
        "gauge": {"name": "ORBIT_PREDICTION", "system": satellite},
        "values": [{ "name": "details", "type": "object", "values": [
            {"name": "satellite", "type": "text", "value": satellite},
            {"name": "tai", "type": "timestamp", "value": iso_format(&(utc + TimeDelta::seconds(37)))},
            {"name": "ut1", "type": "timestamp", "value": iso_format(&(utc + TimeDelta::milliseconds(-125)))},
            {"name": "orbit", "type": "double", "value": orbit},
            {"name": "x", "type": "double", "value": "-2345678.5"},
            {"name": "y", "type": "double", "value": 1234567.25},
            {"name": "z", "type": "double", "value": 6543210.0},
            {"name": "vx", "type": "double", "value": 1234.5},
            {"name": "vy", "type": "double", "value": -6543.25},
            {"name": "vz", "type": "double", "value": 321.0},
            {"name": "quality", "type": "double", "value": 0.0}
        ]}]
    })
}

fn osv_records (satellite: &str, n: usize)->Vec<Value> {
    (0..n).map( |i| osv_record( t0() + TimeDelta::seconds( 10 * i as i64), satellite, 16175.0)).collect()
}

#[test]
fn test_point_from_record() {
    let rec = Record::from_json( &osv_record( t0(), "S2A", 16175.0)).unwrap();
    let p = EphemerisPoint::from_record( &rec).unwrap();

    assert_eq!( p.utc, t0());
    assert_eq!( p.tai, t0() + TimeDelta::seconds(37));
    assert_eq!( p.ut1, t0() - TimeDelta::milliseconds(125));
    assert_eq!( p.orbit, 16175);
    assert_eq!( p.position, Cartesian3::new( -2345678.5, 1234567.25, 6543210.0));
    assert_eq!( p.velocity, Cartesian3::new( 1234.5, -6543.25, 321.0));
    assert!( p.is_usable());

    let mut json = osv_record( t0(), "S2A", 16175.0);
    json["values"][0]["values"].as_array_mut().unwrap().retain( |v| v["name"] != "vz");
    assert!( EphemerisPoint::from_record( &Record::from_json( &json).unwrap()).is_err());
}

#[test]
fn test_ephemeris_from_json() {
    let mut list = osv_records( "S2A", 3);
    list.push( json!({ "start": "2018-07-21T08:45:00", "stop": "2018-07-21T08:45:10" })); // no state vector
    let json = Value::Array(list).to_string();

    let points = ephemeris_from_json( &json).unwrap();
    assert_eq!( points.len(), 3);
    assert_eq!( points[0].utc, t0());

    assert!( ephemeris_from_json( "{}").is_err());
}

#[tokio::test]
async fn test_json_store_window() {
    let mut list = osv_records( "S2A", 30);  // 08:50:00 .. 08:54:50
    list.extend( osv_records( "S2B", 30));
    let store = JsonEphemerisStore::new( records_from_json( &Value::Array(list)).unwrap());
    assert_eq!( store.len(), 60);

    let start = t0() + TimeDelta::seconds(95);
    let stop = t0() + TimeDelta::seconds(150);
    let points = store.get_ephemeris( "S2A", start, stop).await.unwrap();

    // overlapping records: 08:51:30 (covers 95s) .. 08:52:20
    assert_eq!( points.len(), 6);
    assert_eq!( points[0].utc, t0() + TimeDelta::seconds(90));
    assert_eq!( points[5].utc, t0() + TimeDelta::seconds(140));
    assert!( points.windows(2).all( |w| w[0].utc < w[1].utc));

    assert!( store.get_ephemeris( "S2C", start, stop).await.unwrap().is_empty());
}

#[test]
fn test_osv_document() {
    let points: Vec<EphemerisPoint> = osv_records( "S2A", 2).iter()
        .map( |v| EphemerisPoint::from_record( &Record::from_json(v).unwrap()).unwrap())
        .collect();
    let start = t0();
    let stop = t0() + TimeDelta::minutes(10);
    let creation = Utc.with_ymd_and_hms( 2018, 7, 21, 10, 0, 0).unwrap();

    let doc = osv_document( "S2A", "SENTINEL", &start, &stop, &points, &creation);

    assert!( doc.starts_with( "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\" ?>\n<Earth_Explorer_File>\n"));
    assert!( doc.contains( "<File_Name>S2A_OPER_MPL_ORBPRE_2018-07-21T08:50:00_2018-07-21T09:00:00_0001</File_Name>"));
    assert!( doc.contains( "<File_Description>FOS Predicted Orbit File</File_Description>"));
    assert!( doc.contains( "<Notes></Notes>"));
    assert!( doc.contains( "<Mission>SENTINEL S2A</Mission>"));
    assert!( doc.contains( "<File_Type>MPL_ORBPRE</File_Type>"));
    assert!( doc.contains( "<Validity_Start>UTC=2018-07-21T08:50:00</Validity_Start>"));
    assert!( doc.contains( "<Validity_Stop>UTC=2018-07-21T09:00:00</Validity_Stop>"));
    assert!( doc.contains( "<Creation_Date>UTC=2018-07-21T10:00:00</Creation_Date>"));
    assert!( doc.contains( "<Ref_Frame>EARTH_FIXED</Ref_Frame>"));
    assert!( doc.contains( "<Data_Block type=\"xml\">"));
    assert!( doc.contains( "<List_of_OSVs count=\"2\">"));
    assert_eq!( doc.matches("<OSV>").count(), 2);

    let osv = "      <OSV>
        <TAI>TAI=2018-07-21T08:50:37</TAI>
        <UTC>UTC=2018-07-21T08:50:00</UTC>
        <UT1>UT1=2018-07-21T08:49:59.875000</UT1>
        <Absolute_Orbit>+16175</Absolute_Orbit>
        <X unit=\"m\">-2345678.5</X>
        <Y unit=\"m\">1234567.25</Y>
        <Z unit=\"m\">6543210.0</Z>
        <VX unit=\"m/s\">1234.5</VX>
        <VY unit=\"m/s\">-6543.25</VY>
        <VZ unit=\"m/s\">321.0</VZ>
        <Quality>0.0</Quality>
      </OSV>
";
    assert!( doc.contains(osv), "{doc}");
    assert!( doc.ends_with( "    </List_of_OSVs>\n  </Data_Block>\n</Earth_Explorer_File>\n"));
}

#[test]
fn test_osv_file_is_removed() {
    let points: Vec<EphemerisPoint> = osv_records( "S2A", 2).iter()
        .map( |v| EphemerisPoint::from_record( &Record::from_json(v).unwrap()).unwrap())
        .collect();

    let osv = OsvFile::create( "S2A", "SENTINEL", &t0(), &(t0() + TimeDelta::minutes(1)), &points).unwrap();
    let path = osv.path().to_path_buf();
    assert_eq!( osv.n_points(), 2);
    assert!( path.is_file());
    assert!( std::fs::read_to_string( &path).unwrap().contains( "<List_of_OSVs count=\"2\">"));

    drop(osv);
    assert!( !path.exists());
}
