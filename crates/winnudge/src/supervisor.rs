//! Runs the hotkey listener as a child process and tails its output.

use std::ffi::OsString;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;

use winnudge_core::status::{self, StatusSlot};

/// `CREATE_NO_WINDOW`: the listener gets no console window of its own.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// A listener child process owned by the control panel.
///
/// Every line the child writes to stdout or stderr lands in the shared
/// [`StatusSlot`]; only the newest line is kept.
pub struct ListenerProcess {
    program: PathBuf,
    args: Vec<OsString>,
    child: Option<Child>,
    status: StatusSlot,
}

impl ListenerProcess {
    pub fn new(program: impl Into<PathBuf>, args: &[&str], status: StatusSlot) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(OsString::from).collect(),
            child: None,
            status,
        }
    }

    /// The listener is this same executable run as `winnudge listen`.
    pub fn current_exe(status: StatusSlot) -> io::Result<Self> {
        Ok(Self::new(std::env::current_exe()?, &["listen"], status))
    }

    /// Whether the child was started and has not exited yet.
    pub fn is_running(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Starts the listener, stopping a running one first.
    ///
    /// Returns the new child's PID.
    pub fn start(&mut self) -> io::Result<u32> {
        self.stop();

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        let mut child = command.spawn()?;
        let pid = child.id();
        tracing::info!(pid, program = %self.program.display(), "listener started");

        if let Some(stdout) = child.stdout.take() {
            let slot = self.status.clone();
            thread::spawn(move || status::pump_lines(BufReader::new(stdout), &slot));
        }
        if let Some(stderr) = child.stderr.take() {
            let slot = self.status.clone();
            thread::spawn(move || status::pump_lines(BufReader::new(stderr), &slot));
        }

        self.child = Some(child);
        Ok(pid)
    }

    /// Asks the listener to terminate.
    ///
    /// Returns `false` when nothing was running; that is not an error.
    pub fn stop(&mut self) -> bool {
        let Some(mut child) = self.child.take() else {
            return false;
        };
        if !matches!(child.try_wait(), Ok(None)) {
            return false;
        }

        let pid = child.id();
        if let Err(e) = child.kill() {
            tracing::warn!(pid, "could not stop listener: {e}");
            return false;
        }
        // Reap the killed child; this returns as soon as the OS has torn it down.
        let _ = child.wait();
        tracing::info!(pid, "listener stopped");
        true
    }
}

impl Drop for ListenerProcess {
    fn drop(&mut self) {
        self.stop();
    }
}
