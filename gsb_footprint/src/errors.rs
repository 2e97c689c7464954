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

use thiserror::Error;
use gsb_common::errors::GsbCommonError;

pub type Result<T> = std::result::Result<T, FootprintError>;
 
#[derive(Error,Debug)]
pub enum FootprintError {

    #[error("events structure incorrect: {0}")]
    EventsStructureIncorrect( String ),

    #[error("invalid footprint coordinates: {0}")]
    CoordinatesError( String ),

    #[error("ephemeris error {0}")]
    EphemerisError( String ),

    #[error("{0}")]
    CommonError( #[from] GsbCommonError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("operation failed {0}")]
    OpFailedError(String),
}

macro_rules! events_structure_incorrect {
    ($fmt:literal $(, $arg:expr )* ) => {
        FootprintError::EventsStructureIncorrect( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use events_structure_incorrect;

macro_rules! coords_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        FootprintError::CoordinatesError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use coords_error;

macro_rules! ephemeris_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        FootprintError::EphemerisError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use ephemeris_error;
