use crate::error::SelpgError;
use log::{debug, info, warn};
use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

/// Where selected units are written.
pub trait OutputSink {
    fn write_unit(&mut self, unit: &[u8]) -> Result<(), SelpgError>;

    /// Flush and release the sink. Must be called once writing is done.
    fn finish(&mut self) -> Result<(), SelpgError>;
}

/// Writes straight to an in-process stream, normally stdout.
pub struct StreamSink<W: Write> {
    out: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W) -> Self {
        StreamSink { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StreamSink<io::BufWriter<io::StdoutLock<'static>>> {
    pub fn stdout() -> Self {
        StreamSink::new(io::BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> OutputSink for StreamSink<W> {
    fn write_unit(&mut self, unit: &[u8]) -> Result<(), SelpgError> {
        self.out
            .write_all(unit)
            .map_err(|e| SelpgError::io("write to output", e))
    }

    fn finish(&mut self) -> Result<(), SelpgError> {
        self.out
            .flush()
            .map_err(|e| SelpgError::io("flush output", e))
    }
}

/// Feeds selected units into the stdin of a spooling subprocess. The child's
/// stdout and stderr are inherited from this process.
pub struct PipeSink {
    program: String,
    child: Child,
    stdin: Option<ChildStdin>,
}

impl PipeSink {
    /// Spawn `<spooler> -d<destination>`.
    pub fn printer(spooler: &str, destination: &str) -> Result<Self, SelpgError> {
        let mut cmd = Command::new(spooler);
        cmd.arg(format!("-d{}", destination));
        Self::spawn(cmd)
    }

    pub fn spawn(mut cmd: Command) -> Result<Self, SelpgError> {
        let program = cmd.get_program().to_string_lossy().into_owned();
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SelpgError::Spawn {
                program: program.clone(),
                source,
            })?;
        info!("piping output to `{}` (pid {})", program, child.id());

        let stdin = child.stdin.take();
        Ok(PipeSink {
            program,
            child,
            stdin,
        })
    }
}

impl OutputSink for PipeSink {
    fn write_unit(&mut self, unit: &[u8]) -> Result<(), SelpgError> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| SelpgError::io("write to spooler", io::ErrorKind::BrokenPipe.into()))?;
        stdin
            .write_all(unit)
            .map_err(|e| SelpgError::io("write to spooler", e))
    }

    fn finish(&mut self) -> Result<(), SelpgError> {
        // Closing stdin lets the spooler see end of input.
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| SelpgError::io("wait for spooler", e))?;
        debug!("`{}` exited with {}", self.program, status);
        if status.success() {
            Ok(())
        } else {
            warn!("`{}` exited with {}", self.program, status);
            Err(SelpgError::SpoolerFailed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

impl Drop for PipeSink {
    fn drop(&mut self) {
        if self.stdin.take().is_some() {
            let _ = self.child.wait();
        }
    }
}
