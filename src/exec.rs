//! Bounded external command execution.
//!
//! Every git invocation the engine makes goes through [`run`], which caps
//! execution at [`COMMAND_TIMEOUT`]. Git commands can stall indefinitely
//! (interactive credential prompts, hung hooks, slow network), so a hard
//! deadline keeps a single stuck process from wedging the whole session.

use crate::error::EngineError;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Deadline applied to every external command.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// Captured output of a completed external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run `program` with `args` in `cwd`, bounded by [`COMMAND_TIMEOUT`].
///
/// The working directory is always passed explicitly; the engine never
/// mutates the process-wide current directory.
pub fn run(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput, EngineError> {
    run_with_timeout(program, args, cwd, COMMAND_TIMEOUT)
}

/// Run a command with an explicit deadline.
///
/// On deadline expiry the child is killed and `Timeout` is returned; any
/// partial output is discarded. A non-zero exit returns `CommandFailed`
/// carrying the captured stderr verbatim.
pub fn run_with_timeout(
    program: &str,
    args: &[&str],
    cwd: &Path,
    timeout: Duration,
) -> Result<CommandOutput, EngineError> {
    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        // Never inherit stdin: a child prompting for input would block
        // until the deadline instead of failing fast.
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Drain the pipes on dedicated threads so a child that fills its pipe
    // buffer can't deadlock against the timeout wait below. Killing the
    // child closes the pipes and unblocks the readers.
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let stdout_thread = std::thread::spawn(move || read_to_string(stdout_handle));
    let stderr_thread = std::thread::spawn(move || read_to_string(stderr_handle));

    let status = wait_with_timeout(&mut child, timeout)?;

    let stdout = stdout_thread.join().unwrap_or_default();
    let stderr = stderr_thread.join().unwrap_or_default();

    if status.success() {
        Ok(CommandOutput { stdout, stderr })
    } else {
        Err(EngineError::CommandFailed {
            stderr: stderr.trim_end().to_string(),
        })
    }
}

/// Spawn `program` detached and return immediately without waiting.
///
/// Used for editor launches, where the engine must not block on the
/// editor process lifetime.
pub fn spawn_detached(program: &str, args: &[&str], cwd: &Path) -> Result<(), EngineError> {
    Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

fn read_to_string<R: Read>(handle: Option<R>) -> String {
    let mut content = String::new();
    if let Some(mut reader) = handle {
        reader.read_to_string(&mut content).ok();
    }
    content
}

/// Wait for a child process, killing it if it outlives `timeout`.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<ExitStatus, EngineError> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(100);

    loop {
        match child.try_wait()? {
            Some(status) => return Ok(status),
            None => {
                if start.elapsed() >= timeout {
                    child.kill().ok();
                    // Reap the killed child so it doesn't linger as a zombie.
                    child.wait().ok();
                    return Err(EngineError::Timeout {
                        seconds: timeout.as_secs(),
                    });
                }
                std::thread::sleep(poll_interval);
            }
        }
    }
}
