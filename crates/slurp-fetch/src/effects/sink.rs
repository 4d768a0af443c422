use std::future::Future;
use std::io;

use tokio::io::AsyncWriteExt;

/// Caller-owned writable destination for downloaded bytes.
///
/// The fetcher forwards every received chunk via [`write`](ByteSink::write)
/// in arrival order and calls [`close`](ByteSink::close) exactly once, after
/// the body stream ends. The overall download does not report success until
/// `close` has returned, since write completion may lag network completion.
pub trait ByteSink: Send {
    /// Accept one chunk. Chunks arrive in network order, untransformed.
    fn write(&mut self, chunk: &[u8]) -> impl Future<Output = io::Result<()>> + Send;

    /// Flush buffered data and release the destination.
    fn close(&mut self) -> impl Future<Output = io::Result<()>> + Send;
}

impl ByteSink for tokio::fs::File {
    async fn write(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.write_all(chunk).await
    }

    async fn close(&mut self) -> io::Result<()> {
        self.flush().await?;
        self.shutdown().await
    }
}

/// In-memory sink, mainly for tests and small downloads.
impl ByteSink for Vec<u8> {
    async fn write(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.extend_from_slice(chunk);
        Ok(())
    }

    async fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_vec_sink_appends_in_order() {
        let mut sink: Vec<u8> = Vec::new();
        ByteSink::write(&mut sink, b"hello ").await.unwrap();
        ByteSink::write(&mut sink, b"world").await.unwrap();
        ByteSink::close(&mut sink).await.unwrap();
        assert_eq!(sink, b"hello world");
    }

    #[tokio::test]
    async fn test_file_sink_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let mut file = tokio::fs::File::create(&path).await.unwrap();
        ByteSink::write(&mut file, &[1, 2, 3]).await.unwrap();
        ByteSink::write(&mut file, &[4, 5]).await.unwrap();
        ByteSink::close(&mut file).await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), vec![1, 2, 3, 4, 5]);
    }
}
