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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Serialize,Deserialize,Serializer,Deserializer,de::{Error as DeError}};
use std::time::Duration;
use parse_duration::parse;

pub const SECS_PER_DAY: f64 = 86_400.0;

/// this should be used wherever we might have to use a sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

#[inline] pub fn minutes (n: i64)->TimeDelta { TimeDelta::minutes(n) }

/// the reference epoch of modified julian day 2000 (MJD2000) values: 2000-01-01T00:00:00 UTC
pub fn mjd2000_epoch ()->DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap() // constant, can't fail
}

/// fractional days since 2000-01-01T00:00:00 UTC (negative for earlier dates).
/// Leap seconds are not taken into account (days are always 86400 sec)
pub fn mjd2000 (dt: &DateTime<Utc>)->f64 {
    fractional_days( *dt - mjd2000_epoch())
}

pub fn fractional_days (td: TimeDelta)->f64 {
    td.num_seconds() as f64 / SECS_PER_DAY + td.subsec_nanos() as f64 / (SECS_PER_DAY * 1e9)
}

/* #region ISO-8601 parsing and formatting ***********************************************************************/

const NAIVE_FORMATS: [&str; 3] = [ "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M" ];

/// parse ISO-8601-like datetime specs. Zoned input (RFC 3339) is converted to UTC, zone-less input is
/// interpreted as UTC, plain dates are taken as 00:00:00 UTC
pub fn parse_datetime (s: &str)->Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.to_utc())
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%+") {
        return Some(dt.to_utc())
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some( ndt.and_utc())
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map( |nd| nd.and_time(NaiveTime::MIN).and_utc())
}

/// zone-less ISO-8601 format with microsecond resolution. The fractional part is omitted if it is zero,
/// i.e. this produces the same strings as the datetime.isoformat() of ground segment data files
pub fn iso_format (dt: &DateTime<Utc>)->String {
    if dt.timestamp_subsec_micros() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// convert dates in three letter month format (`DD-MMM-YYYY HH:MM:SS.ffffff`) into ISO-8601
/// (`YYYY-MM-DDTHH:MM:SS.ffffff`). Returns None if the input does not follow the format
pub fn three_letter_to_iso_8601 (s: &str)->Option<String> {
    let ndt = NaiveDateTime::parse_from_str( s.trim(), "%d-%b-%Y %H:%M:%S%.f").ok()?;
    Some( ndt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string())
}

/* #endregion ISO-8601 parsing and formatting */

/// correct GPS time stamps to UTC by subtracting the GPS-UTC leap second offset
/// (16s before 2015-07-01, 17s until end of 2016, 18s afterwards)
pub fn gps_to_utc (dt: &DateTime<Utc>)->DateTime<Utc> {
    let leap_2015 = Utc.with_ymd_and_hms(2015, 6, 30, 23, 59, 59).unwrap();
    let leap_2016 = Utc.with_ymd_and_hms(2016, 12, 31, 23, 59, 59).unwrap();

    let correction = if *dt > leap_2016 {
        18
    } else if *dt > leap_2015 {
        17
    } else {
        16
    };

    *dt - TimeDelta::seconds(correction)
}

//--- support for serde

pub fn ser_iso<S: Serializer> (dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_str( &iso_format(dt))
}

pub fn de_iso <'a,D>(deserializer: D) -> Result<DateTime<Utc>,D::Error> where D: Deserializer<'a> {
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).ok_or( DeError::custom( format!("invalid datetime {s}")))
}

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
