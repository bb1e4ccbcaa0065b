//! Request/response exchange over the hub's command port.

use log::{debug, warn};

use crate::config::TransportConfig;
use crate::errors::Error;
use crate::runtime::{self, AsyncTcpStream, TcpStream};

type Result<T> = std::result::Result<T, Error>;

const READ_CHUNK: usize = 256;

/// Sends one command and returns the first reply line, terminator included.
///
/// Each attempt opens its own connection and closes it before returning,
/// whatever the outcome. Connections are never pooled or reused. Connect
/// failures and timeouts are retried according to `config.retry`; everything
/// else is returned immediately.
pub async fn send(command: &str, addr: &str, config: &TransportConfig) -> Result<String> {
    let mut attempt = 0;
    loop {
        match exchange(command, addr, config).await {
            Ok(line) => return Ok(line),
            Err(e) if e.is_transient() && attempt < config.retry.max_retries => {
                let delay = config.retry.delay(attempt);
                warn!(
                    "command to {} failed ({}), retrying in {:?}",
                    addr, e, delay
                );
                runtime::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn exchange(command: &str, addr: &str, config: &TransportConfig) -> Result<String> {
    debug!("sending {:?} to {}", command, addr);

    let mut stream = runtime::timeout(config.connect_timeout, TcpStream::connect(addr))
        .await
        .map_err(|_| Error::timed_out("connect", config.connect_timeout))?
        .map_err(|err| Error::Connection {
            addr: addr.to_string(),
            err,
        })?;

    let result = runtime::timeout(
        config.read_timeout,
        write_and_read_line(&mut stream, command),
    )
    .await
    .map_err(|_| Error::timed_out("reading reply", config.read_timeout))
    .and_then(|r| r);

    if let Err(e) = stream.shutdown().await {
        debug!("closing connection to {}: {}", addr, e);
    }

    let line = result?;
    debug!("reply from {}: {:?}", addr, line);
    Ok(line)
}

async fn write_and_read_line<S: AsyncTcpStream>(stream: &mut S, command: &str) -> Result<String> {
    stream
        .write_all(command.as_bytes())
        .await
        .map_err(|e| Error::socket("write", e))?;
    read_line(stream).await
}

/// Reads until the first `\n`. Bytes the hub sends after it are discarded.
async fn read_line<S: AsyncTcpStream>(stream: &mut S) -> Result<String> {
    let mut line = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let n = stream
            .read(&mut chunk)
            .await
            .map_err(|e| Error::Protocol(format!("reading reply failed: {}", e)))?;
        if n == 0 {
            return Err(Error::Protocol(format!(
                "connection closed before end of line ({} bytes received)",
                line.len()
            )));
        }

        if let Some(pos) = chunk[..n].iter().position(|&b| b == b'\n') {
            line.extend_from_slice(&chunk[..=pos]);
            return String::from_utf8(line).map_err(Error::Utf8Decode);
        }
        line.extend_from_slice(&chunk[..n]);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;

    use super::*;

    /// Replays canned reads and records writes.
    struct ScriptedStream {
        reads: VecDeque<io::Result<Vec<u8>>>,
        written: Vec<u8>,
    }

    impl ScriptedStream {
        fn new(reads: Vec<io::Result<&[u8]>>) -> Self {
            ScriptedStream {
                reads: reads.into_iter().map(|r| r.map(<[u8]>::to_vec)).collect(),
                written: Vec::new(),
            }
        }
    }

    impl AsyncTcpStream for ScriptedStream {
        async fn connect(_addr: &str) -> io::Result<Self> {
            Err(io::Error::other("not connectable"))
        }

        async fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
            self.written.extend_from_slice(buf);
            Ok(())
        }

        async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.reads.pop_front() {
                Some(Ok(bytes)) => {
                    buf[..bytes.len()].copy_from_slice(&bytes);
                    Ok(bytes.len())
                }
                Some(Err(e)) => Err(e),
                None => Ok(0),
            }
        }

        async fn shutdown(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_line_split_across_reads() {
        let mut stream =
            ScriptedStream::new(vec![Ok(&b"HA"[..]), Ok(&b"CK\r"[..]), Ok(&b"\n"[..])]);
        let line = write_and_read_line(&mut stream, "HB\r\n").await.unwrap();
        assert_eq!(line, "HACK\r\n");
        assert_eq!(stream.written, b"HB\r\n");
    }

    #[tokio::test]
    async fn test_bytes_after_newline_dropped() {
        let mut stream = ScriptedStream::new(vec![Ok(&b"CB\r\nextra"[..])]);
        assert_eq!(read_line(&mut stream).await.unwrap(), "CB\r\n");
    }

    #[tokio::test]
    async fn test_close_before_newline() {
        let mut stream = ScriptedStream::new(vec![Ok(&b"GLB 3CB8"[..])]);
        assert!(matches!(
            read_line(&mut stream).await,
            Err(Error::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn test_read_error_is_protocol_error() {
        let mut stream = ScriptedStream::new(vec![Err(io::Error::from(
            io::ErrorKind::ConnectionReset,
        ))]);
        assert!(matches!(
            read_line(&mut stream).await,
            Err(Error::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let mut stream = ScriptedStream::new(vec![Ok(&b"\xff\xfe\n"[..])]);
        assert!(matches!(
            read_line(&mut stream).await,
            Err(Error::Utf8Decode(_))
        ));
    }
}
