//! Sensor input capability
//!
//! The gyroscope is a platform singleton in the reference device; here it is
//! an injected capability pushing samples into a channel so the pipeline is
//! testable without hardware. Exactly one producer feeds exactly one
//! synchronous consumer; there is no queueing or rate limiting beyond the
//! channel itself.

use crate::domain::models::GyroSample;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// A push source of gyroscope samples.
///
/// `start` registers the sink and begins delivery at a source-chosen cadence
/// (nominally game rate, ~50 Hz, but consumers must accept arbitrary
/// irregular intervals). `stop` detaches the listener.
pub trait SensorSource {
    fn start(&mut self, sender: mpsc::UnboundedSender<GyroSample>) -> Result<()>;
    fn stop(&mut self);
}

/// Deterministic source replaying a recorded sample trace.
///
/// Used by the demo binary and tests. Delivery is paced at the configured
/// interval on a spawned task; pass `Duration::ZERO` to replay as fast as
/// the channel accepts.
pub struct ReplaySensorSource {
    samples: Vec<GyroSample>,
    interval: Duration,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl ReplaySensorSource {
    pub fn new(samples: Vec<GyroSample>, interval: Duration) -> Self {
        Self {
            samples,
            interval,
            handle: None,
        }
    }
}

impl SensorSource for ReplaySensorSource {
    fn start(&mut self, sender: mpsc::UnboundedSender<GyroSample>) -> Result<()> {
        if self.handle.is_some() {
            anyhow::bail!("Replay already running");
        }

        let samples = self.samples.clone();
        let interval = self.interval;
        info!("Starting sample replay ({} samples)", samples.len());

        self.handle = Some(tokio::spawn(async move {
            for sample in samples {
                if sender.send(sample).is_err() {
                    debug!("Sample sink dropped, stopping replay");
                    return;
                }
                if !interval.is_zero() {
                    tokio::time::sleep(interval).await;
                }
            }
            debug!("Sample replay finished");
        }));

        Ok(())
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Sample replay stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_all_samples_in_order() {
        let samples = vec![
            GyroSample::new(0.0, 0.0, 0.0, 0),
            GyroSample::new(1.0, 0.0, 0.0, 20_000_000),
            GyroSample::new(0.0, 1.0, 0.0, 40_000_000),
        ];
        let mut source = ReplaySensorSource::new(samples.clone(), Duration::ZERO);

        let (tx, mut rx) = mpsc::unbounded_channel();
        source.start(tx).unwrap();

        for expected in &samples {
            let got = rx.recv().await.expect("sample");
            assert_eq!(got, *expected);
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn double_start_is_rejected() {
        let mut source = ReplaySensorSource::new(Vec::new(), Duration::ZERO);
        let (tx, _rx) = mpsc::unbounded_channel();
        source.start(tx.clone()).unwrap();
        assert!(source.start(tx).is_err());
    }
}
