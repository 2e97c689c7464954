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

//! the event record model we annotate with footprints.
//!
//! Records are generic time-windowed events of the ground segment data store, i.e. we only need `start`,
//! `stop` and the list of named values. Everything else a record carries (gauge, explicit references etc.)
//! is passed through verbatim.
//! ```text
//! { "start": "2018-07-21T08:52:29", "stop": "2018-07-21T09:02:10",
//!   "gauge": {"name": "PLANNED_CUT_IMAGING", "system": "S2A"},
//!   "values": [ { "name": "details", "type": "object", "values": [
//!       { "name": "footprint", "type": "geometry", "value": "-10.0 40.0 -9.0 41.0 ..." }
//!   ]}]
//! }
//! ```

use chrono::{DateTime,TimeDelta,Utc};
use serde::{Deserialize,Serialize};
use serde_json::{Map,Value};
use serde_with::{serde_as,DisplayFromStr,PickFirst};
use gsb_common::datetime::{de_iso,ser_iso};
use crate::errors::{FootprintError,Result,events_structure_incorrect};

/// name of the geometry value that holds a single (non-split) footprint
pub const FOOTPRINT: &str = "footprint";

/// name of the object value we create if a record does not have one yet
pub const DETAILS: &str = "details";

/// name of the text value that holds the footprint tool invocation (only attached in debug mode)
pub const GET_FOOTPRINT_COMMAND: &str = "get_footprint_command";

/// the typed named values of event records. The JSON representation is internally tagged with `type`.
/// Since data files often store numbers and booleans as strings, we accept both forms for `double` and `boolean`
#[serde_as]
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(tag="type", rename_all="lowercase")]
pub enum NamedValue {
    Text { name: String, value: String },

    Double { name: String, #[serde_as(as="PickFirst<(_, DisplayFromStr)>")] value: f64 },

    Timestamp { name: String, value: String },

    Boolean { name: String, #[serde_as(as="PickFirst<(_, DisplayFromStr)>")] value: bool },

    Geometry { name: String, value: String },

    Object { name: String, #[serde(default)] values: Vec<NamedValue> }
}

impl NamedValue {
    pub fn text (name: impl ToString, value: impl ToString)->Self {
        NamedValue::Text { name: name.to_string(), value: value.to_string() }
    }

    pub fn geometry (name: impl ToString, value: impl ToString)->Self {
        NamedValue::Geometry { name: name.to_string(), value: value.to_string() }
    }

    pub fn object (name: impl ToString, values: Vec<NamedValue>)->Self {
        NamedValue::Object { name: name.to_string(), values }
    }

    pub fn name (&self)->&str {
        match self {
            NamedValue::Text{name,..} | NamedValue::Double{name,..} | NamedValue::Timestamp{name,..} |
            NamedValue::Boolean{name,..} | NamedValue::Geometry{name,..} | NamedValue::Object{name,..} => name.as_str()
        }
    }

    /// empty strings and empty objects count as empty, numbers and booleans never do
    pub fn is_empty (&self)->bool {
        match self {
            NamedValue::Text{value,..} | NamedValue::Timestamp{value,..} | NamedValue::Geometry{value,..} => value.is_empty(),
            NamedValue::Object{values,..} => values.is_empty(),
            _ => false
        }
    }

    pub fn as_str (&self)->Option<&str> {
        match self {
            NamedValue::Text{value,..} | NamedValue::Timestamp{value,..} | NamedValue::Geometry{value,..} => Some(value.as_str()),
            _ => None
        }
    }

    pub fn as_f64 (&self)->Option<f64> {
        match self {
            NamedValue::Double{value,..} => Some(*value),
            NamedValue::Text{value,..} => value.trim().parse().ok(),
            _ => None
        }
    }

    /// depth first search for the first value called `name`, including `self`
    pub fn find (&self, name: &str)->Option<&NamedValue> {
        if self.name() == name {
            Some(self)
        } else if let NamedValue::Object{values,..} = self {
            find_value( values, name)
        } else {
            None
        }
    }
}

/// depth first search through a list of named values
pub fn find_value<'a> (values: &'a [NamedValue], name: &str)->Option<&'a NamedValue> {
    values.iter().find_map( |v| v.find(name))
}

/// is this the name of a footprint geometry (`footprint`, `footprint_0`, `footprint_1` ..)
pub fn is_footprint_name (name: &str)->bool {
    match name.strip_prefix(FOOTPRINT) {
        Some("") => true,
        Some(suffix) => suffix.strip_prefix('_').map( |n| !n.is_empty() && n.chars().all( |c| c.is_ascii_digit())).unwrap_or(false),
        None => false
    }
}

/// the name of the i-th footprint out of `n`
pub fn footprint_value_name (i: usize, n: usize)->String {
    if n > 1 { format!("{FOOTPRINT}_{i}") } else { FOOTPRINT.to_string() }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Record {
    #[serde(serialize_with="ser_iso", deserialize_with="de_iso")]
    pub start: DateTime<Utc>,

    #[serde(serialize_with="ser_iso", deserialize_with="de_iso")]
    pub stop: DateTime<Utc>,

    #[serde(default, skip_serializing_if="Vec::is_empty")]
    pub values: Vec<NamedValue>,

    /// everything else we don't interpret
    #[serde(flatten)]
    pub other: Map<String,Value>
}

impl Record {
    pub fn new (start: DateTime<Utc>, stop: DateTime<Utc>)->Self {
        Record { start, stop, values: Vec::new(), other: Map::new() }
    }

    pub fn with_values (mut self, values: Vec<NamedValue>)->Self {
        self.values = values;
        self
    }

    /// checked conversion from an untyped JSON value
    pub fn from_json (value: &Value)->Result<Self> {
        if !value.is_object() {
            return Err( events_structure_incorrect!("record has to be an object, got {}", value))
        }
        serde_json::from_value( value.clone()).map_err( |e| events_structure_incorrect!("not a record: {e}"))
    }

    pub fn to_json (&self)->Result<Value> {
        Ok( serde_json::to_value(self)? )
    }

    pub fn duration (&self)->TimeDelta {
        self.stop - self.start
    }

    /// the values of the details object, which is the first top level object value
    pub fn details (&self)->Option<&Vec<NamedValue>> {
        self.values.iter().find_map( |v| match v {
            NamedValue::Object{values,..} => Some(values),
            _ => None
        })
    }

    /// the values of the details object, which gets appended if the record does not have one yet
    pub fn details_mut_or_insert (&mut self)->&mut Vec<NamedValue> {
        let idx = match self.values.iter().position( |v| matches!( v, NamedValue::Object{..})) {
            Some(idx) => idx,
            None => {
                self.values.push( NamedValue::object( DETAILS, Vec::new()));
                self.values.len() - 1
            }
        };

        match &mut self.values[idx] {
            NamedValue::Object{values,..} => values,
            _ => unreachable!("details index does not refer to an object")
        }
    }

    pub fn find_value (&self, name: &str)->Option<&NamedValue> {
        find_value( &self.values, name)
    }

    /// does this record already carry a non-empty footprint value anywhere in its values
    pub fn has_footprint (&self)->bool {
        fn has_fp (values: &[NamedValue])->bool {
            values.iter().any( |v| {
                (is_footprint_name( v.name()) && !v.is_empty()) ||
                matches!( v, NamedValue::Object{values,..} if has_fp(values))
            })
        }
        has_fp( &self.values)
    }

    /// add the given (already split) footprint rings as geometry values to the details object. Empty rings are
    /// skipped but still count for naming. If `command` is set it is added as a text value for diagnosis
    pub fn attach_footprints<S: AsRef<str>> (&mut self, rings: &[S], command: Option<&str>) {
        let values = footprint_values( rings, command);
        self.details_mut_or_insert().extend( values);
    }

    pub fn footprints (&self)->Vec<&str> {
        let mut list = Vec::new();
        if let Some(details) = self.details() {
            for v in details {
                if let NamedValue::Geometry{name,value} = v {
                    if is_footprint_name(name) { list.push( value.as_str()) }
                }
            }
        }
        list
    }
}

/// parse an untyped JSON array into records. This fails with `EventsStructureIncorrect` if `value` is not an
/// array or any of its elements is not a record object
pub fn records_from_json (value: &Value)->Result<Vec<Record>> {
    match value {
        Value::Array(elems) => elems.iter().map( Record::from_json).collect(),
        _ => Err( events_structure_incorrect!("records have to be a list, got {}", value))
    }
}

/// the geometry values for the given footprint rings, followed by the optional command text value
fn footprint_values<S: AsRef<str>> (rings: &[S], command: Option<&str>)->Vec<NamedValue> {
    let n = rings.len();
    let mut values: Vec<NamedValue> = rings.iter().enumerate()
        .filter( |(_,ring)| !ring.as_ref().is_empty())
        .map( |(i,ring)| NamedValue::geometry( footprint_value_name(i,n), ring.as_ref()))
        .collect();

    if let Some(cmd) = command {
        values.push( NamedValue::text( GET_FOOTPRINT_COMMAND, cmd));
    }
    values
}

/// the untyped counterpart of [`Record::attach_footprints`], which leaves all other parts of `record` as they are.
/// This fails with `EventsStructureIncorrect` if `record` is not an object or its values are not lists
pub fn attach_footprints_json<S: AsRef<str>> (record: &mut Value, rings: &[S], command: Option<&str>)->Result<()> {
    let Some(rec) = record.as_object_mut() else {
        return Err( events_structure_incorrect!("record has to be an object"))
    };
    let values = match rec.entry("values").or_insert_with( || Value::Array(Vec::new())) {
        Value::Array(values) => values,
        v => return Err( events_structure_incorrect!("record values have to be a list, got {}", v))
    };

    let is_object = |v: &Value| v.get("type").and_then( Value::as_str) == Some("object");
    let idx = match values.iter().position( is_object) {
        Some(idx) => idx,
        None => {
            values.push( serde_json::to_value( NamedValue::object( DETAILS, Vec::new()))?);
            values.len() - 1
        }
    };
    let details = match values[idx].as_object_mut().map( |o| o.entry("values").or_insert_with( || Value::Array(Vec::new()))) {
        Some(Value::Array(details)) => details,
        _ => return Err( events_structure_incorrect!("details values have to be a list"))
    };

    for v in footprint_values( rings, command) {
        details.push( serde_json::to_value(v)?);
    }
    Ok(())
}
