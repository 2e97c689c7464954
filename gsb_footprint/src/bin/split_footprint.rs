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

use std::io::Read;
use anyhow::Result;
use tracing_subscriber::EnvFilter;
use gsb_common::{define_cli, check_cli, fs::filepath_contents_as_string};
use gsb_footprint::antimeridian::correct_footprint;

define_cli! { ARGS [about="split footprint polygons at the antimeridian, printing one ring per line"] =
    input: Option<String> [help="pathname of file with 'lon,lat lon,lat ..' coordinates (stdin if not set)"]
}

fn main()->Result<()> {
    check_cli!(ARGS);

    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .with_writer( std::io::stderr)
        .init();

    let text = match &ARGS.input {
        Some(path) => filepath_contents_as_string( path)?,
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string( &mut s)?;
            s
        }
    };

    for ring in correct_footprint( &text)? {
        println!("{ring}");
    }

    Ok(())
}
