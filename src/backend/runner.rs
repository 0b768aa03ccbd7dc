//! Bounded execution of external display tools.
//!
//! Every xrandr/ddcutil invocation funnels through [`CommandRunner::run`],
//! which enforces a wall-clock timeout so a wedged i2c bus or unreachable X
//! server never hangs a batch operation.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use crate::constants::PROCESS_POLL_INTERVAL_MS;

/// Captured result of one tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Stdout followed by stderr, for tools that report through either stream.
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        text.push_str(&self.stderr);
        text
    }

    /// Best error text for a failed invocation.
    pub fn error_text(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Runs external commands with a hard timeout.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
    echo_commands: bool,
}

impl CommandRunner {
    pub fn new(timeout: Duration, echo_commands: bool) -> Self {
        Self {
            timeout,
            echo_commands,
        }
    }

    /// Spawns the command and polls it until exit, killing it once the
    /// timeout elapses. A non-zero exit is not an error here; callers decide
    /// what failure means because ddcutil reports some expected conditions
    /// through a failing exit code.
    ///
    /// Output is read after exit. The tools driven here emit at most a few
    /// kilobytes, well under the pipe buffer size.
    pub fn run(&self, mut command: Command) -> Result<ToolOutput> {
        if self.echo_commands {
            log_debug!("Running {:?}", command);
        }
        let program = command.get_program().to_string_lossy().into_owned();
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to launch '{program}'"))?;

        let deadline = Instant::now() + self.timeout;
        let poll = Duration::from_millis(PROCESS_POLL_INTERVAL_MS);
        let status = loop {
            match child.try_wait().context("failed to poll child process")? {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    bail!(
                        "'{}' did not finish within {}s and was killed",
                        program,
                        self.timeout.as_secs()
                    );
                }
                None => thread::sleep(poll),
            }
        };

        let mut stdout = String::new();
        if let Some(mut pipe) = child.stdout.take() {
            pipe.read_to_string(&mut stdout)
                .with_context(|| format!("failed to read stdout of '{program}'"))?;
        }
        let mut stderr = String::new();
        if let Some(mut pipe) = child.stderr.take() {
            pipe.read_to_string(&mut stderr)
                .with_context(|| format!("failed to read stderr of '{program}'"))?;
        }

        Ok(ToolOutput {
            success: status.success(),
            stdout,
            stderr,
        })
    }
}
