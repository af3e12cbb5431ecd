use super::{ExecMode, ExecOutcome, Launcher};
use crate::error::{PocketError, Result};
use crate::invocation::Invocation;
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Launches invocations as real OS processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation, mode: ExecMode) -> (String, Command) {
        match mode {
            ExecMode::Direct => {
                let mut cmd = Command::new(&invocation.program);
                cmd.args(&invocation.args);
                (invocation.program.clone(), cmd)
            }
            ExecMode::Shell => {
                let (shell, flag) = shell_program();
                let mut cmd = Command::new(shell);
                cmd.arg(flag).arg(invocation.command_line());
                (shell.to_string(), cmd)
            }
        }
    }
}

#[cfg(windows)]
fn shell_program() -> (&'static str, &'static str) {
    ("cmd", "/C")
}

#[cfg(not(windows))]
fn shell_program() -> (&'static str, &'static str) {
    ("sh", "-c")
}

impl Launcher for SystemLauncher {
    fn launch(&mut self, invocation: &Invocation, mode: ExecMode) -> Result<ExecOutcome> {
        let (program, mut cmd) = Self::command(invocation, mode);
        info!(%program, ?mode, "launching pipeline");
        debug!(argv = ?invocation.argv(), "pipeline arguments");

        let mut child = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PocketError::Launch { program, source })?;

        let mut captured = Vec::new();
        if let Some(mut pipe) = child.stderr.take() {
            tee(&mut pipe, &mut io::stderr(), &mut captured)?;
        }
        let status = child.wait()?;

        let outcome = ExecOutcome {
            code: status.code(),
            stderr: String::from_utf8_lossy(&captured).into_owned(),
        };
        debug!(code = ?outcome.code, "pipeline finished");
        Ok(outcome)
    }
}

/// Copies `source` to `sink` chunk by chunk until EOF, keeping a copy of
/// everything read.
fn tee<R: Read, W: Write>(source: &mut R, sink: &mut W, captured: &mut Vec<u8>) -> io::Result<()> {
    let mut buf = [0u8; 8192];
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        captured.extend_from_slice(&buf[..n]);
        // A closed terminal must not stop the capture.
        let _ = sink.write_all(&buf[..n]).and_then(|_| sink.flush());
    }
}

#[cfg(test)]
mod tee_tests {
    use super::*;

    #[test]
    fn test_tee_forwards_and_keeps_copy() {
        let mut source = io::Cursor::new(b"WARN: low memory\nWARN: retrying\n".to_vec());
        let mut sink = Vec::new();
        let mut captured = Vec::new();
        tee(&mut source, &mut sink, &mut captured).unwrap();
        assert_eq!(sink, b"WARN: low memory\nWARN: retrying\n");
        assert_eq!(captured, sink);
    }
}
