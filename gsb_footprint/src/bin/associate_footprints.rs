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

use std::path::PathBuf;
use anyhow::Result;
use tracing_subscriber::EnvFilter;
use gsb_common::{define_cli, check_cli, fs::{filepath_contents_as_string,set_filepath_contents}};
use gsb_footprint::{
    ephemeris::JsonEphemerisStore,
    footprint::FootprintAssociator,
    FootprintConfig
};

define_cli! { ARGS [about="associate footprints with records of a JSON file, using orbit predictions of another JSON file"] =
    config: Option<String> [help="pathname of RON footprint config (defaults are used if not set)", short, long],
    output: Option<String> [help="pathname of output JSON file (stdout if not set)", short, long],
    satellite: String [help="satellite id (e.g. S2A)"],
    ephemeris: String [help="pathname of JSON file with orbit prediction records"],
    records: String [help="pathname of JSON file with records to annotate"]
}

#[tokio::main]
async fn main()->Result<()> {
    check_cli!(ARGS);

    // log to stderr so that we can pipe the result. Use RUST_LOG to set the level
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .with_writer( std::io::stderr)
        .init();

    let config = match &ARGS.config {
        Some(path) => FootprintConfig::load( path)?,
        None => FootprintConfig::default()
    };

    let store = JsonEphemerisStore::from_path( &ARGS.ephemeris)?;
    let associator = FootprintAssociator::from_config( config, store);

    let records: serde_json::Value = serde_json::from_str( &filepath_contents_as_string( &ARGS.records)?)?;
    let records = associator.associate_footprints_json( &records, &ARGS.satellite, None).await?;
    let json = serde_json::to_string_pretty( &records)?;

    if let Some(path) = &ARGS.output {
        set_filepath_contents( path, json.as_bytes())?;
    } else {
        println!("{json}");
    }

    Ok(())
}
