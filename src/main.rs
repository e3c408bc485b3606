use gyro_cursor::domain::cursor::CursorView;
use gyro_cursor::domain::models::{AppEvent, GyroSample};
use gyro_cursor::domain::settings::SettingsService;
use gyro_cursor::infrastructure::hid::descriptor::RegistrationConfig;
use gyro_cursor::infrastructure::hid::link::{LinkError, PeerLink};
use gyro_cursor::infrastructure::hid::HidMouseManager;
use gyro_cursor::infrastructure::logging;
use gyro_cursor::infrastructure::sensor::{ReplaySensorSource, SensorSource};
use gyro_cursor::{GyroPipeline, MotionMapper};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Demo peer that logs submitted report bytes instead of a Bluetooth host.
struct ConsolePeerLink;

impl PeerLink for ConsolePeerLink {
    fn submit(&mut self, report: &[u8]) -> Result<(), LinkError> {
        info!("HID report: {:02X?}", report);
        Ok(())
    }
}

/// Synthetic trace: a second of pitch, then a second of yaw.
fn demo_samples() -> Vec<GyroSample> {
    let mut samples = Vec::new();
    for i in 0..100u64 {
        let t = i * 20_000_000; // 20 ms cadence
        let (wx, wy) = if i < 50 { (0.5, 0.0) } else { (0.0, 0.8) };
        samples.push(GyroSample::new(wx, wy, 0.0, t));
    }
    samples
}

fn main() -> anyhow::Result<()> {
    let settings_service = SettingsService::new()?;
    let settings = settings_service.get().clone();

    let _logging_guard = logging::init_logger(&settings.log_settings)?;
    info!("Starting GyroCursor demo");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let config = RegistrationConfig {
        name: settings.hid_name.clone(),
        description: settings.hid_description.clone(),
        provider: settings.hid_provider.clone(),
        ..RegistrationConfig::default()
    };
    let hid = Arc::new(HidMouseManager::new(config, event_tx.clone()));
    info!(
        "HID registration: '{}' by {} ({} descriptor bytes, token rate {})",
        hid.config().name,
        hid.config().provider,
        hid.config().descriptor.len(),
        hid.config().qos.token_rate
    );

    // Stand-ins for the platform callbacks: register and "connect" the
    // console peer up front.
    hid.on_app_registered();
    hid.on_peer_connected(Box::new(ConsolePeerLink));

    let mapper = MotionMapper::new(settings.mouse_sensitivity);
    let mut pipeline = GyroPipeline::new(mapper, hid.clone(), event_tx);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async move {
        // Display sink: print the cursor position for each orientation.
        let view = CursorView::new(1080.0, 2340.0).with_scale(settings.display_scale);
        let display = tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                match event {
                    AppEvent::Orientation(state) => {
                        let (cx, cy) = view.position(&state);
                        info!(
                            "orientation x={:+.3} y={:+.3} z={:+.3}  cursor=({:.0}, {:.0})",
                            state.x, state.y, state.z, cx, cy
                        );
                    }
                    AppEvent::LinkStatus(status) => info!("Link status: {:?}", status),
                    AppEvent::LogMessage(msg) => info!("{}", msg.message),
                }
            }
        });

        let (sample_tx, mut sample_rx) = mpsc::unbounded_channel();
        let mut source = ReplaySensorSource::new(demo_samples(), Duration::from_millis(20));
        source.start(sample_tx)?;

        pipeline.run(&mut sample_rx).await;
        source.stop();
        hid.on_peer_disconnected();

        // Drop every sender so the display task sees the channel close.
        drop(pipeline);
        drop(hid);
        let _ = display.await;
        anyhow::Ok(())
    })?;

    info!("Demo finished");
    Ok(())
}
