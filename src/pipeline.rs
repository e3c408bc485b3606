//! Sample pipeline
//!
//! Wires sensor input through the integrator into the display event stream
//! and the HID emitter: sensor -> integrator -> [display | emitter]. Samples
//! are processed synchronously and unconditionally on the delivery context;
//! emitter failures never reach the integrator.

use crate::domain::integrator::OrientationIntegrator;
use crate::domain::mapper::MotionMapper;
use crate::domain::models::{AppEvent, GyroSample, OrientationState};
use crate::infrastructure::hid::HidMouseManager;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

pub struct GyroPipeline {
    integrator: OrientationIntegrator,
    mapper: MotionMapper,
    hid: Arc<HidMouseManager>,
    event_sender: mpsc::UnboundedSender<AppEvent>,
}

impl GyroPipeline {
    pub fn new(
        mapper: MotionMapper,
        hid: Arc<HidMouseManager>,
        event_sender: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            integrator: OrientationIntegrator::new(),
            mapper,
            hid,
            event_sender,
        }
    }

    /// Process one sample: integrate, emit motion, publish the new state.
    ///
    /// The seeding sample after attach or reset only establishes the
    /// reference and emits no report.
    pub fn handle_sample(&mut self, sample: &GyroSample) -> OrientationState {
        let was_seeded = self.integrator.is_seeded();
        let state = self.integrator.update(sample);

        if was_seeded {
            self.hid.send_motion(self.mapper.to_delta(&state));
        }

        let _ = self.event_sender.send(AppEvent::Orientation(state));
        state
    }

    /// External reset trigger (the tap gesture on the reference device).
    pub fn reset(&mut self) {
        self.integrator.reset();
        info!("Pipeline reset");
        let _ = self
            .event_sender
            .send(AppEvent::Orientation(self.integrator.state()));
    }

    pub fn orientation(&self) -> OrientationState {
        self.integrator.state()
    }

    /// Consume samples until the sensor channel closes.
    pub async fn run(&mut self, samples: &mut mpsc::UnboundedReceiver<GyroSample>) {
        while let Some(sample) = samples.recv().await {
            self.handle_sample(&sample);
        }
        info!("Sensor stream ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::hid::descriptor::RegistrationConfig;
    use crate::infrastructure::hid::link::{LinkError, PeerLink};
    use std::sync::Mutex;

    const NS_PER_SEC: u64 = 1_000_000_000;

    struct RecordingLink {
        reports: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl PeerLink for RecordingLink {
        fn submit(&mut self, report: &[u8]) -> Result<(), LinkError> {
            self.reports.lock().unwrap().push(report.to_vec());
            Ok(())
        }
    }

    fn pipeline_with_link() -> (GyroPipeline, Arc<Mutex<Vec<Vec<u8>>>>) {
        let (tx, _rx) = mpsc::unbounded_channel();
        let hid = Arc::new(HidMouseManager::new(RegistrationConfig::default(), tx.clone()));
        hid.on_app_registered();
        let reports = Arc::new(Mutex::new(Vec::new()));
        hid.on_peer_connected(Box::new(RecordingLink {
            reports: reports.clone(),
        }));
        (GyroPipeline::new(MotionMapper::default(), hid, tx), reports)
    }

    #[test]
    fn seeding_sample_emits_no_report() {
        let (mut pipeline, reports) = pipeline_with_link();
        pipeline.handle_sample(&GyroSample::new(1.0, 1.0, 0.0, 0));
        assert!(reports.lock().unwrap().is_empty());
    }

    #[test]
    fn motion_flows_through_to_the_peer() {
        let (mut pipeline, reports) = pipeline_with_link();
        pipeline.handle_sample(&GyroSample::new(0.1, 0.2, 0.0, 0));
        pipeline.handle_sample(&GyroSample::new(0.0, 0.0, 0.0, NS_PER_SEC));

        // x=0.1, y=0.2 after one second -> dx=-2, dy=1.
        let sent = reports.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], vec![0x00, 0x00, 0xFE, 0x01]);
    }

    #[test]
    fn reset_reseeds_and_zeroes_the_state() {
        let (mut pipeline, reports) = pipeline_with_link();
        pipeline.handle_sample(&GyroSample::new(1.0, 0.0, 0.0, 0));
        pipeline.handle_sample(&GyroSample::new(1.0, 0.0, 0.0, NS_PER_SEC));
        pipeline.reset();
        assert_eq!(pipeline.orientation(), OrientationState::default());

        let before = reports.lock().unwrap().len();
        pipeline.handle_sample(&GyroSample::new(1.0, 0.0, 0.0, 3 * NS_PER_SEC));
        // Post-reset sample only seeds; no new report.
        assert_eq!(reports.lock().unwrap().len(), before);
    }

    #[test]
    fn emitter_failure_does_not_stop_integration() {
        struct FailingLink;
        impl PeerLink for FailingLink {
            fn submit(&mut self, _report: &[u8]) -> Result<(), LinkError> {
                Err(LinkError::Transport("link lost".to_string()))
            }
        }

        let (tx, _rx) = mpsc::unbounded_channel();
        let hid = Arc::new(HidMouseManager::new(RegistrationConfig::default(), tx.clone()));
        hid.on_app_registered();
        hid.on_peer_connected(Box::new(FailingLink));
        let mut pipeline = GyroPipeline::new(MotionMapper::default(), hid, tx);

        pipeline.handle_sample(&GyroSample::new(1.0, 0.0, 0.0, 0));
        let state = pipeline.handle_sample(&GyroSample::new(1.0, 0.0, 0.0, NS_PER_SEC));
        assert!((state.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orientation_events_are_published_per_sample() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let hid = Arc::new(HidMouseManager::new(RegistrationConfig::default(), tx.clone()));
        let mut pipeline = GyroPipeline::new(MotionMapper::default(), hid, tx);

        pipeline.handle_sample(&GyroSample::new(1.0, 0.0, 0.0, 0));
        pipeline.handle_sample(&GyroSample::new(1.0, 0.0, 0.0, NS_PER_SEC));

        let mut states = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let AppEvent::Orientation(state) = event {
                states.push(state);
            }
        }
        assert_eq!(states.len(), 2);
        assert_eq!(states[0], OrientationState::default());
        assert!((states[1].x - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn run_drains_the_sensor_channel() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let hid = Arc::new(HidMouseManager::new(RegistrationConfig::default(), tx.clone()));
        let mut pipeline = GyroPipeline::new(MotionMapper::default(), hid, tx);

        let (sample_tx, mut sample_rx) = mpsc::unbounded_channel();
        sample_tx.send(GyroSample::new(2.0, 0.0, 0.0, 0)).unwrap();
        sample_tx
            .send(GyroSample::new(2.0, 0.0, 0.0, NS_PER_SEC / 2))
            .unwrap();
        drop(sample_tx);

        pipeline.run(&mut sample_rx).await;
        assert!((pipeline.orientation().x - 1.0).abs() < 1e-6);
    }
}
