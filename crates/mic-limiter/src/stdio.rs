//! Line-oriented terminal IO over the standard streams.

use mic_limiter_core::{CoreResult, LineIo};

use std::io::{BufRead, Write};

/// [`LineIo`] implementation over locked stdin/stdout.
pub(crate) struct StdLineIo;

impl StdLineIo {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl LineIo for StdLineIo {
    fn write_line(&mut self, line: &str) -> CoreResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> CoreResult<String> {
        let mut buffer = String::new();
        let read = std::io::stdin().lock().read_line(&mut buffer)?;

        // EOF: a closed stdin must not satisfy an acquisition re-prompt loop.
        if read == 0 {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }

        Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
    }
}
