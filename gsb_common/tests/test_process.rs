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

use std::time::Duration;
use tokio::process::Command;
use gsb_common::{process::{command_line, execute_cmd}, errors::GsbCommonError};

#[test]
fn test_command_line() {
    let mut cmd = Command::new("get_footprint");
    cmd.arg("-o").arg("/tmp/a /tmp/a").arg("-n").arg("12");
    assert_eq!( command_line(&cmd), "get_footprint -o '/tmp/a /tmp/a' -n 12");
}

#[tokio::test]
async fn test_stdout() {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg("echo '1,2 3,4'; echo 'some diagnostics' >&2");

    let out = execute_cmd( &mut cmd, Duration::from_secs(10)).await.unwrap();
    assert_eq!( out, "1,2 3,4\n");
}

#[tokio::test]
async fn test_failure() {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg("echo 'no ephemeris' >&2; exit 3");

    match execute_cmd( &mut cmd, Duration::from_secs(10)).await {
        Err(GsbCommonError::ExecError{cmd,msg}) => {
            println!("failed as expected: {cmd} : {msg}");
            assert!( cmd.starts_with("sh -c"));
        }
        other => panic!("unexpected result {other:?}")
    }
}

#[tokio::test]
async fn test_missing_program() {
    let mut cmd = Command::new("/this/program/does/not/exist");
    let res = execute_cmd( &mut cmd, Duration::from_secs(10)).await;
    assert!( matches!( res, Err(GsbCommonError::ExecError{..})));
}

#[tokio::test]
async fn test_timeout() {
    let mut cmd = Command::new("sleep");
    cmd.arg("10");

    let res = execute_cmd( &mut cmd, Duration::from_millis(200)).await;
    assert!( matches!( res, Err(GsbCommonError::ExecTimeout{..})));
}
