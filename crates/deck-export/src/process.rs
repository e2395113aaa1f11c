//! Running the compiler with a deadline.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{ExportError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long output is still collected once the compiler has exited or been
/// killed. Build servers spawned by the compiler can keep the pipes open
/// indefinitely.
const DRAIN_GRACE: Duration = Duration::from_secs(2);

/// What a compiler run produced.
#[derive(Debug)]
pub struct CompilerRun {
    /// `None` when the run was killed at the deadline.
    pub status: Option<ExitStatus>,
    /// Stdout followed by stderr, possibly cut short.
    pub output: String,
}

impl CompilerRun {
    pub fn timed_out(&self) -> bool {
        self.status.is_none()
    }

    pub fn succeeded(&self) -> bool {
        self.status.is_some_and(|status| status.success())
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<Vec<u8>> {
    let (tx, rx): (Sender<Vec<u8>>, _) = channel();
    if let Some(mut pipe) = pipe {
        thread::spawn(move || {
            let mut buf = [0u8; 8192];
            loop {
                match pipe.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        if tx.send(buf[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }
    rx
}

/// Everything received on `rx` before it closes or `deadline` passes.
fn collect(rx: &Receiver<Vec<u8>>, deadline: Instant) -> String {
    let mut bytes = Vec::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(chunk) => bytes.extend_from_slice(&chunk),
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if started.elapsed() >= timeout {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Start the compiler as the leader of a new process group so the whole
/// tree can be killed at the deadline.
#[cfg(unix)]
fn isolate(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(not(unix))]
fn isolate(_command: &mut Command) {}

/// Kill the compiler and everything it started.
fn kill_tree(child: &mut Child) {
    let pid = child.id().to_string();

    #[cfg(unix)]
    let group_kill = Command::new("kill")
        .args(["-KILL", "--", &format!("-{pid}")])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    #[cfg(windows)]
    let group_kill = Command::new("taskkill")
        .args(["/PID", &pid, "/T", "/F"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    #[cfg(not(any(unix, windows)))]
    let group_kill: std::io::Result<ExitStatus> =
        Err(std::io::Error::other("process tree kill unsupported"));

    if !group_kill.is_ok_and(|status| status.success()) {
        tracing::debug!(%pid, "process tree kill failed, killing compiler only");
    }
    let _ = child.kill();
    let _ = child.wait();
}

/// Run `command` to completion or until `timeout`, killing its process tree
/// on expiry.
///
/// Pipes are drained on helper threads so a chatty compiler cannot block on
/// a full pipe. Output is collected for at most a short grace period after
/// the compiler is gone; whatever arrived by then is returned.
pub fn run_with_timeout(mut command: Command, timeout: Duration) -> Result<CompilerRun> {
    let program = command.get_program().to_string_lossy().into_owned();
    isolate(&mut command);
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExportError::Spawn {
            program: program.clone(),
            source,
        })?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match wait_with_deadline(&mut child, timeout) {
        Ok(Some(status)) => Some(status),
        Ok(None) => {
            tracing::warn!(%program, timeout_secs = timeout.as_secs(), "compiler timed out, killing");
            kill_tree(&mut child);
            None
        }
        Err(source) => {
            kill_tree(&mut child);
            return Err(ExportError::Spawn { program, source });
        }
    };

    let deadline = Instant::now() + DRAIN_GRACE;
    let mut output = collect(&stdout, deadline);
    let errors = collect(&stderr, deadline);
    if !errors.is_empty() {
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&errors);
    }

    Ok(CompilerRun { status, output })
}
