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

use std::{ffi::OsStr, process::Stdio, time::Duration};
use tokio::process::Command;
use crate::{debug, warn, errors::{GsbCommonError, Result}};

/// the printable command line of `cmd`. Arguments that contain whitespace are single quoted so that
/// the result can be pasted into a shell for diagnosis
pub fn command_line (cmd: &Command)->String {
    let cmd = cmd.as_std();
    let mut s = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        s.push(' ');
        push_quoted( &mut s, arg);
    }
    s
}

fn push_quoted (s: &mut String, arg: &OsStr) {
    let arg = arg.to_string_lossy();
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace()) {
        s.push('\'');
        s.push_str( &arg);
        s.push('\'');
    } else {
        s.push_str( &arg);
    }
}

/// run `cmd` to completion (without a shell) and return its stdout if it terminated with a zero exit status.
/// The child process is killed if it does not terminate within `timeout`. Anything the child writes to stderr
/// is routed to the log
pub async fn execute_cmd (cmd: &mut Command, timeout: Duration) -> Result<String> {
    let cmd_line = command_line(cmd);
    debug!("executing {cmd_line}");

    cmd.stdin( Stdio::null())
       .stdout( Stdio::piped())
       .stderr( Stdio::piped())
       .kill_on_drop(true);

    let child = cmd.spawn().map_err( |e| GsbCommonError::ExecError{ cmd: cmd_line.clone(), msg: e.to_string() })?;

    // if we time out the child future is dropped, which kills the process
    match tokio::time::timeout( timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => {
            let stderr = String::from_utf8_lossy( &output.stderr);
            let stderr = stderr.trim();

            if output.status.success() {
                if !stderr.is_empty() { debug!("{cmd_line} stderr: {stderr}") }
                Ok( String::from_utf8_lossy( &output.stdout).into_owned() )
            } else {
                if !stderr.is_empty() { warn!("{cmd_line} stderr: {stderr}") }
                Err( GsbCommonError::ExecError{ cmd: cmd_line, msg: format!("terminated with {}", output.status) })
            }
        }
        Ok(Err(e)) => Err( GsbCommonError::ExecError{ cmd: cmd_line, msg: e.to_string() }),
        Err(_) => Err( GsbCommonError::ExecTimeout{ cmd: cmd_line, secs: timeout.as_secs() })
    }
}
