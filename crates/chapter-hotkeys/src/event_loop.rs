use crate::{AppResult, Session};

use std::time::{Duration, Instant};

use global_hotkey::GlobalHotKeyEvent;
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{info, instrument};

/// How often pending hotkey events are drained.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Pump OS events and dispatch hotkey presses until the process exits.
///
/// The session must hold an online registry created on this thread: tao's
/// event loop pumps the messages hotkey delivery depends on.
#[instrument(skip_all)]
pub fn run(session: Session) -> AppResult<()> {
    let event_loop = EventLoopBuilder::new().build();
    let receiver = GlobalHotKeyEvent::receiver();

    info!(
        chapters = session.registry.action_count(),
        "Listening for chapter hotkeys"
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL);

        if let Event::LoopDestroyed = event {
            info!("Event loop stopped");
            return;
        }

        while let Ok(hotkey_event) = receiver.try_recv() {
            session.registry.dispatch(&hotkey_event);
        }
    });
}
