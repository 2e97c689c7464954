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

//! orbit ephemeris (OSV) handling: obtaining orbit state vectors for a time window and writing them into the
//! Earth Explorer XML format that is consumed by the external footprint tool.

use std::{io::Write, path::Path};
use chrono::{DateTime,Utc};
use async_trait::async_trait;
use tempfile::NamedTempFile;
use gsb_common::{
    cartesian3::Cartesian3, datetime::{iso_format,parse_datetime,utc_now}, fmt_f64, fs::filepath_contents_as_string,
    xml_writer::XmlWriter, debug, warn
};
use crate::{
    errors::{FootprintError,Result,ephemeris_error},
    record::{NamedValue,Record,records_from_json}
};

/// name of the text value that identifies the satellite of ephemeris records
pub const SATELLITE: &str = "satellite";

/// a single orbit state vector in earth fixed coordinates (m, m/s)
#[derive(Debug,Clone,PartialEq)]
pub struct EphemerisPoint {
    pub utc: DateTime<Utc>,
    pub tai: DateTime<Utc>,
    pub ut1: DateTime<Utc>,
    pub orbit: u32,
    pub position: Cartesian3,
    pub velocity: Cartesian3,
    pub quality: f64,
}

impl EphemerisPoint {
    /// extract the state vector from an orbit prediction event record, which has the UTC time as its start and
    /// carries the named values `tai`, `ut1` (timestamps), `orbit`, `x`, `y`, `z`, `vx`, `vy`, `vz` and `quality`
    pub fn from_record (rec: &Record)->Result<Self> {
        let timestamp = |name: &str| {
            rec.find_value(name).and_then( NamedValue::as_str).and_then( parse_datetime)
                .ok_or_else( || ephemeris_error!("no {} timestamp in ephemeris record at {}", name, iso_format(&rec.start)))
        };
        let double = |name: &str| {
            rec.find_value(name).and_then( NamedValue::as_f64)
                .ok_or_else( || ephemeris_error!("no {} value in ephemeris record at {}", name, iso_format(&rec.start)))
        };

        let orbit = double("orbit")?;
        if orbit < 0.0 || orbit > u32::MAX as f64 {
            return Err( ephemeris_error!("invalid orbit number {} in ephemeris record at {}", orbit, iso_format(&rec.start)))
        }

        Ok( EphemerisPoint {
            utc: rec.start,
            tai: timestamp("tai")?,
            ut1: timestamp("ut1")?,
            orbit: orbit as u32,
            position: Cartesian3::new( double("x")?, double("y")?, double("z")?),
            velocity: Cartesian3::new( double("vx")?, double("vy")?, double("vz")?),
            quality: double("quality")?
        })
    }

    /// can this point be used to interpolate a ground track
    pub fn is_usable (&self)->bool {
        self.position.is_defined() && self.velocity.is_defined() && self.position.length_squared() > 0.0
    }
}

/// convert ephemeris records into points, dropping (with a warning) the ones that lack state vector values
pub fn ephemeris_from_records (records: &[Record])->Vec<EphemerisPoint> {
    let mut points: Vec<EphemerisPoint> = records.iter().filter_map( |rec| {
        match EphemerisPoint::from_record(rec) {
            Ok(p) => Some(p),
            Err(e) => { warn!("ignoring ephemeris record: {e}"); None }
        }
    }).collect();
    points.sort_by_key( |p| p.utc);
    points
}

/// parse a JSON array of orbit prediction event records
pub fn ephemeris_from_json (json: &str)->Result<Vec<EphemerisPoint>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok( ephemeris_from_records( &records_from_json( &value)?) )
}

/// the abstraction for the orbit prediction store. Implementations return the state vectors of `satellite` that
/// cover the given time window, sorted by time
#[async_trait]
pub trait EphemerisStore: Send + Sync {
    async fn get_ephemeris (&self, satellite: &str, start: DateTime<Utc>, stop: DateTime<Utc>)->Result<Vec<EphemerisPoint>>;
}

/// an `EphemerisStore` that is backed by a list of orbit prediction event records, e.g. from an exported JSON file.
/// Records that have a `satellite` text value are only returned for matching satellites
pub struct JsonEphemerisStore {
    records: Vec<Record>
}

impl JsonEphemerisStore {
    pub fn new (mut records: Vec<Record>)->Self {
        records.sort_by_key( |r| r.start);
        JsonEphemerisStore { records }
    }

    pub fn from_path (path: impl AsRef<Path>)->Result<Self> {
        let json = filepath_contents_as_string( &path)?;
        let value: serde_json::Value = serde_json::from_str( &json)?;
        Ok( Self::new( records_from_json( &value)?) )
    }

    pub fn len (&self)->usize { self.records.len() }

    fn is_satellite (rec: &Record, satellite: &str)->bool {
        match rec.find_value( SATELLITE) {
            Some(NamedValue::Text{value,..}) => value == satellite,
            _ => true
        }
    }
}

#[async_trait]
impl EphemerisStore for JsonEphemerisStore {
    /// all records of the satellite that overlap with the `[start,stop]` window
    async fn get_ephemeris (&self, satellite: &str, start: DateTime<Utc>, stop: DateTime<Utc>)->Result<Vec<EphemerisPoint>> {
        let records: Vec<Record> = self.records.iter()
            .filter( |r| r.start < stop && r.stop > start && Self::is_satellite( r, satellite))
            .cloned()
            .collect();

        Ok( ephemeris_from_records( &records) )
    }
}

/* #region OSV file ***********************************************************************************************/

/// create the Earth Explorer orbit prediction (MPL_ORBPRE) document for the given state vectors
pub fn osv_document (satellite: &str, mission: &str, start: &DateTime<Utc>, stop: &DateTime<Utc>,
                     points: &[EphemerisPoint], creation: &DateTime<Utc>)->String {
    let start = iso_format(start);
    let stop = iso_format(stop);
    let count = points.len().to_string();

    let mut w = XmlWriter::with_capacity( 2048 + points.len() * 512);
    w.write_declaration();
    w.write_element( "Earth_Explorer_File", &[], |w| {
        w.write_element( "Earth_Explorer_Header", &[], |w| {
            w.write_element( "Fixed_Header", &[], |w| {
                w.write_text_element( "File_Name", &[], format!("{satellite}_OPER_MPL_ORBPRE_{start}_{stop}_0001"));
                w.write_text_element( "File_Description", &[], "FOS Predicted Orbit File");
                w.write_text_element( "Notes", &[], "");
                w.write_text_element( "Mission", &[], format!("{mission} {satellite}"));
                w.write_text_element( "File_Class", &[], "OPER");
                w.write_text_element( "File_Type", &[], "MPL_ORBPRE");
                w.write_element( "Validity_Period", &[], |w| {
                    w.write_text_element( "Validity_Start", &[], format!("UTC={start}"));
                    w.write_text_element( "Validity_Stop", &[], format!("UTC={stop}"));
                });
                w.write_text_element( "File_Version", &[], "0001");
                w.write_element( "Source", &[], |w| {
                    w.write_text_element( "System", &[], "FOS");
                    w.write_text_element( "Creator", &[], "NAPEOS");
                    w.write_text_element( "Creator_Version", &[], "3.0");
                    w.write_text_element( "Creation_Date", &[], format!("UTC={}", iso_format(creation)));
                });
            });
            w.write_element( "Variable_Header", &[], |w| {
                w.write_text_element( "Ref_Frame", &[], "EARTH_FIXED");
                w.write_text_element( "Time_Reference", &[], "UTC");
            });
        });
        w.write_element( "Data_Block", &[("type", "xml")], |w| {
            w.write_element( "List_of_OSVs", &[("count", count.as_str())], |w| {
                for p in points {
                    write_osv( w, p);
                }
            });
        });
    });

    w.to_string()
}

fn write_osv (w: &mut XmlWriter, p: &EphemerisPoint) {
    w.write_element( "OSV", &[], |w| {
        w.write_text_element( "TAI", &[], format!("TAI={}", iso_format(&p.tai)));
        w.write_text_element( "UTC", &[], format!("UTC={}", iso_format(&p.utc)));
        w.write_text_element( "UT1", &[], format!("UT1={}", iso_format(&p.ut1)));
        w.write_text_element( "Absolute_Orbit", &[], format!("+{}", p.orbit));
        w.write_text_element( "X", &[("unit", "m")], fmt_f64(p.position.x));
        w.write_text_element( "Y", &[("unit", "m")], fmt_f64(p.position.y));
        w.write_text_element( "Z", &[("unit", "m")], fmt_f64(p.position.z));
        w.write_text_element( "VX", &[("unit", "m/s")], fmt_f64(p.velocity.x));
        w.write_text_element( "VY", &[("unit", "m/s")], fmt_f64(p.velocity.y));
        w.write_text_element( "VZ", &[("unit", "m/s")], fmt_f64(p.velocity.z));
        w.write_text_element( "Quality", &[], fmt_f64(p.quality));
    });
}

/// a scratch OSV file that is removed when this object is dropped. Each instance has a unique path so that
/// concurrent footprint computations do not interfere
pub struct OsvFile {
    file: NamedTempFile,
    n_points: usize
}

impl OsvFile {
    pub fn create (satellite: &str, mission: &str, start: &DateTime<Utc>, stop: &DateTime<Utc>, points: &[EphemerisPoint])->Result<Self> {
        let doc = osv_document( satellite, mission, start, stop, points, &utc_now());

        let mut file = tempfile::Builder::new()
            .prefix( &format!("{satellite}_MPL_ORBPRE_"))
            .suffix( ".xml")
            .tempfile()?;
        file.write_all( doc.as_bytes())?;
        file.flush()?;
        debug!("created OSV file {:?} with {} points", file.path(), points.len());

        Ok( OsvFile { file, n_points: points.len() } )
    }

    pub fn path (&self)->&Path { self.file.path() }

    pub fn n_points (&self)->usize { self.n_points }
}

/* #endregion OSV file */
