//! Stop and interrupt handling for a conversion run

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Ways the user can end a recording or abandon a run.
///
/// Shares the use case's stop flag: while it is clear (recording), Enter or
/// Ctrl+C sets it. Ctrl+C once it is already set abandons the run.
pub struct StopTriggers {
    flag: Arc<AtomicBool>,
}

impl StopTriggers {
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Set the flag when a line arrives on stdin.
    ///
    /// Uses a detached thread; a blocked stdin read must not hold up
    /// runtime shutdown. EOF leaves the flag alone.
    pub fn watch_enter(&self) {
        let flag = Arc::clone(&self.flag);
        std::thread::spawn(move || {
            let mut line = String::new();
            if let Ok(n) = std::io::stdin().lock().read_line(&mut line) {
                if n > 0 {
                    tracing::debug!("Enter pressed, stopping recording");
                    flag.store(true, Ordering::SeqCst);
                }
            }
        });
    }

    /// Resolves on the Ctrl+C that should abandon the run
    pub async fn interrupted(&self) {
        loop {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
            if self.flag.swap(true, Ordering::SeqCst) {
                return;
            }
            tracing::debug!("Ctrl+C received, stopping recording");
        }
    }

    /// Mark capture as over so the next Ctrl+C abandons the run
    pub fn capture_finished(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }
}
