pub mod commands;
pub mod credential;
pub mod error;
pub mod logging;
pub mod retry;
pub mod runtime;
pub mod sender;
pub mod slack;

/// Test utilities for inspecting log output.
#[cfg(test)]
pub mod test_utils {
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing::subscriber::DefaultGuard;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::MakeWriter;

    use crate::logging::{DEFAULT_FILTER, subscriber};

    /// In-memory log sink that can stand in for either logging sink.
    #[derive(Clone, Default)]
    pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl LogCapture {
        /// Captured output split into entries.
        pub fn lines(&self) -> Vec<String> {
            let buf = self.0.lock().unwrap();
            String::from_utf8_lossy(&buf)
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogCapture {
        type Writer = LogCapture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Routes this thread's events into `logs` until the guard drops.
    /// Works with `#[tokio::test]`, whose runtime stays on the test thread.
    pub fn capture_logs(logs: &LogCapture) -> DefaultGuard {
        let sub = subscriber(
            logs.clone(),
            None::<LogCapture>,
            EnvFilter::new(DEFAULT_FILTER),
        );
        tracing::subscriber::set_default(sub)
    }
}
