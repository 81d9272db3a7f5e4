//! Child-process launch with the augmented environment.

use std::io::{self, BufReader, Write};
use std::process::{Command, Stdio};
use std::thread::JoinHandle;

use ssmrun_core::{Error, Result, ResolvedSecrets};

use crate::scanner;

/// Execute `command` with the ambient environment plus the resolved secrets,
/// relaying the child's stdout and stderr to the given writers.
///
/// Ambient entries are applied first and resolved entries last, so a resolved
/// secret shadows an ambient variable with the same name. Stdin is not
/// connected. Blocks until the child exits and both relay threads drain.
pub fn execute(
    environ: &[String],
    secrets: &ResolvedSecrets,
    command: &str,
    args: &[String],
    stdout: Box<dyn Write + Send>,
    stderr: Box<dyn Write + Send>,
) -> Result<()> {
    let mut cmd = Command::new(command);
    cmd.args(args)
        .env_clear()
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for entry in environ {
        if let Some((key, value)) = scanner::split_entry(entry) {
            cmd.env(key, value);
        }
    }
    for (key, value) in secrets.iter() {
        cmd.env(key, value);
    }

    let mut child = cmd
        .spawn()
        .map_err(|e| Error::command_start_with_source(command, e.to_string(), e))?;

    // Stdio::piped above guarantees both handles are present.
    let child_stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::command_start(command, "failed to capture stdout"))?;
    let child_stderr = child
        .stderr
        .take()
        .ok_or_else(|| Error::command_start(command, "failed to capture stderr"))?;

    let stdout_thread = std::thread::spawn(move || {
        let mut writer = stdout;
        io::copy(&mut BufReader::new(child_stdout), &mut writer)
    });
    let stderr_thread = std::thread::spawn(move || {
        let mut writer = stderr;
        io::copy(&mut BufReader::new(child_stderr), &mut writer)
    });

    let status = child.wait().map_err(|e| {
        Error::command_start_with_source(command, format!("failed to wait for command: {e}"), e)
    })?;

    join_relay_thread(stdout_thread, command, "stdout")?;
    join_relay_thread(stderr_thread, command, "stderr")?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(Error::command_exit(command, code)),
        None => Err(Error::command_start(
            command,
            format!("terminated by signal: {status}"),
        )),
    }
}

fn join_relay_thread(
    handle: JoinHandle<io::Result<u64>>,
    command: &str,
    stream: &str,
) -> Result<()> {
    match handle.join() {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(Error::command_start(
            command,
            format!("failed to relay {stream}: {e}"),
        )),
        Err(_) => Err(Error::command_start(
            command,
            format!("{stream} relay thread panicked"),
        )),
    }
}
