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

//! the footprint association driver. For each record of a batch we run the external footprint tool on an OSV
//! file that covers the whole batch, split the resulting polygon at the antimeridian and attach the ring(s)
//! as geometry values to the record.

use std::{path::{Path,PathBuf}, time::Duration};
use chrono::{DateTime,Utc};
use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use gsb_common::{
    datetime::{iso_format,minutes,mjd2000}, fmt_f64, process::{command_line,execute_cmd},
    trace, debug, info, warn, error, is_debug_enabled
};
use crate::{
    antimeridian::correct_footprint,
    ephemeris::{EphemerisPoint,EphemerisStore,OsvFile},
    errors::Result,
    record::{Record,attach_footprints_json,records_from_json},
    FootprintConfig
};

/// number of ground track samples for a record spanning `span_days`. The tool samples once per scene, plus
/// one for the end point, limited to `max_iterations`
pub fn footprint_iterations (span_days: f64, scene_duration_secs: f64, max_iterations: u32)->u32 {
    let n = ((span_days * 86_400.0) / scene_duration_secs) as i64 + 1;
    n.clamp( 1, max_iterations as i64) as u32
}

/// the parameters of a single footprint tool invocation
#[derive(Debug,Clone,PartialEq)]
pub struct FootprintRequest {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub start_mjd: f64,
    pub stop_mjd: f64,
    pub ephemeris_path: PathBuf,
    pub swath_definition: PathBuf,
    pub iterations: u32,
}

impl FootprintRequest {
    /// the argument vector of the tool. Note the OSV file is passed as one argument for both the ascending and
    /// descending ephemeris
    pub fn args (&self)->Vec<String> {
        let osv = self.ephemeris_path.display();
        vec![
            "-b".to_string(), fmt_f64( self.start_mjd),
            "-e".to_string(), fmt_f64( self.stop_mjd),
            "-o".to_string(), format!("{osv} {osv}"),
            "-s".to_string(), self.swath_definition.display().to_string(),
            "-n".to_string(), self.iterations.to_string(),
        ]
    }

    pub fn span_days (&self)->f64 {
        self.stop_mjd - self.start_mjd
    }
}

/// the split footprint rings of a record, plus the tool command line if it should be recorded
#[derive(Debug,Clone,PartialEq)]
struct RecordFootprints {
    rings: Vec<String>,
    command: Option<String>
}

/// the abstraction of the external footprint generator. The returned text is the raw polygon as a sequence
/// of `lon,lat` pairs
#[async_trait]
pub trait FootprintGenerator: Send + Sync {
    /// printable invocation for diagnostics
    fn command_line (&self, req: &FootprintRequest)->String;

    async fn generate (&self, req: &FootprintRequest)->Result<String>;
}

/// the native get_footprint tool, executed without a shell
pub struct GetFootprintTool {
    cmd: String,
    timeout: Duration
}

impl GetFootprintTool {
    pub fn new (cmd: impl ToString, timeout: Duration)->Self {
        GetFootprintTool { cmd: cmd.to_string(), timeout }
    }

    pub fn from_config (config: &FootprintConfig)->Self {
        Self::new( &config.get_footprint_cmd, config.timeout)
    }

    fn command (&self, req: &FootprintRequest)->Command {
        let mut cmd = Command::new( &self.cmd);
        cmd.args( req.args());
        cmd
    }
}

#[async_trait]
impl FootprintGenerator for GetFootprintTool {
    fn command_line (&self, req: &FootprintRequest)->String {
        command_line( &self.command(req))
    }

    async fn generate (&self, req: &FootprintRequest)->Result<String> {
        let mut cmd = self.command(req);
        Ok( execute_cmd( &mut cmd, self.timeout).await? )
    }
}

/// associates footprints with batches of records
pub struct FootprintAssociator<G,S> where G: FootprintGenerator, S: EphemerisStore {
    config: FootprintConfig,
    generator: G,
    store: S
}

impl<S> FootprintAssociator<GetFootprintTool,S> where S: EphemerisStore {
    /// an associator that runs the configured native footprint tool
    pub fn from_config (config: FootprintConfig, store: S)->Self {
        let generator = GetFootprintTool::from_config( &config);
        FootprintAssociator { config, generator, store }
    }
}

impl<G,S> FootprintAssociator<G,S> where G: FootprintGenerator, S: EphemerisStore {
    pub fn new (config: FootprintConfig, generator: G, store: S)->Self {
        FootprintAssociator { config, generator, store }
    }

    pub fn config (&self)->&FootprintConfig { &self.config }

    pub fn generator (&self)->&G { &self.generator }

    pub fn store (&self)->&S { &self.store }

    /// attach footprints to all records that don't have one yet and are short enough. The records are returned
    /// sorted by start time. Records for which the footprint tool fails are returned without footprint.
    /// If `ephemeris` is not provided it is retrieved from the store
    pub async fn associate_footprints (&self, mut records: Vec<Record>, satellite: &str, ephemeris: Option<Vec<EphemerisPoint>>)->Result<Vec<Record>> {
        records.sort_by_key( |r| r.start);

        let footprints = self.compute_footprints( &records, satellite, ephemeris).await?;
        for (rec,fp) in records.iter_mut().zip( footprints) {
            if let Some(fp) = fp {
                rec.attach_footprints( &fp.rings, fp.command.as_deref());
            }
        }

        Ok(records)
    }

    /// the untyped entry point: `records` has to be a JSON array of record objects, otherwise this fails with
    /// `EventsStructureIncorrect`. The returned elements are sorted by start time. Only the details of records
    /// that got a footprint are extended, all other elements are returned as they came in
    pub async fn associate_footprints_json (&self, records: &Value, satellite: &str, ephemeris: Option<Vec<EphemerisPoint>>)->Result<Value> {
        let parsed = records_from_json( records)?;
        let mut batch: Vec<(Record,Value)> = parsed.into_iter()
            .zip( records.as_array().into_iter().flatten().cloned())
            .collect();
        batch.sort_by_key( |(r,_)| r.start);
        let (parsed, mut elems): (Vec<Record>,Vec<Value>) = batch.into_iter().unzip();

        let footprints = self.compute_footprints( &parsed, satellite, ephemeris).await?;
        for (elem,fp) in elems.iter_mut().zip( footprints) {
            if let Some(fp) = fp {
                attach_footprints_json( elem, &fp.rings, fp.command.as_deref())?;
            }
        }

        Ok( Value::Array(elems) )
    }

    /// compute the footprints of a batch of records that is sorted by start time. The result has one entry per
    /// record, which is `None` if the record does not get a footprint
    async fn compute_footprints (&self, records: &[Record], satellite: &str, ephemeris: Option<Vec<EphemerisPoint>>)->Result<Vec<Option<RecordFootprints>>> {
        let (first,last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first,last),
            _ => {
                debug!("there are no records for associating footprints");
                return Ok( Vec::new())
            }
        };

        // overlapping records can end after the last one, which matters for the ephemeris we need
        let start = first.start;
        let stop = last.stop;
        let max_stop = records.iter().map( |r| r.stop).max().unwrap_or(stop);
        debug!("associating footprints for {} records from {} to {}", records.len(), iso_format(&start), iso_format(&stop));

        let mut points = match ephemeris {
            Some(points) => points,
            None => {
                let query_stop = max_stop + minutes( self.config.ephemeris_extension_minutes);
                self.store.get_ephemeris( satellite, start, query_stop).await?
            }
        };
        points.retain( EphemerisPoint::is_usable);
        points.sort_by_key( |p| p.utc);

        if points.len() <= 1 {
            error!("footprints for {} could not be built because there is not enough orbit prediction information ({} points)", satellite, points.len());
            return Ok( vec![None; records.len()])
        }
        debug!("orbit predictions cover {} to {}", iso_format(&points[0].utc), iso_format(&points[points.len()-1].utc));

        // the scratch file gets removed when osv goes out of scope
        let osv = OsvFile::create( satellite, &self.config.mission, &start, &stop, &points)?;

        let mut footprints = Vec::with_capacity( records.len());
        for rec in records {
            footprints.push( self.compute_footprint( rec, osv.path()).await);
        }
        let n_footprints = footprints.iter().filter( |fp| fp.is_some()).count();
        info!("associated footprints with {} out of {} records for {}", n_footprints, records.len(), satellite);

        Ok(footprints)
    }

    /// the footprint of a single record. All failures are logged and return `None`
    async fn compute_footprint (&self, rec: &Record, osv_path: &Path)->Option<RecordFootprints> {
        if rec.has_footprint() {
            trace!("record at {} already has a footprint", iso_format(&rec.start));
            return None
        }
        if rec.stop < rec.start {
            warn!("ignoring record with stop {} before start {}", iso_format(&rec.stop), iso_format(&rec.start));
            return None
        }

        let start_mjd = mjd2000( &rec.start);
        let stop_mjd = mjd2000( &rec.stop);
        let span_days = stop_mjd - start_mjd;

        if span_days >= self.config.max_span_days {
            debug!("record with start {} and stop {} is too large for a footprint", iso_format(&rec.start), iso_format(&rec.stop));
            return None
        }

        let req = FootprintRequest {
            start: rec.start,
            stop: rec.stop,
            start_mjd,
            stop_mjd,
            ephemeris_path: osv_path.to_path_buf(),
            swath_definition: self.config.swath_definition.clone(),
            iterations: footprint_iterations( span_days, self.config.scene_duration_secs, self.config.max_iterations)
        };
        let cmd_line = self.generator.command_line( &req);

        match self.generator.generate( &req).await.and_then( |output| correct_footprint( &output)) {
            Ok(rings) => {
                let command = if is_debug_enabled!() { Some(cmd_line) } else { None };
                Some( RecordFootprints { rings, command })
            }
            Err(e) => {
                error!("the footprint of the record at {} could not be built because the command {} ended in error: {}", iso_format(&rec.start), cmd_line, e);
                None
            }
        }
    }
}
