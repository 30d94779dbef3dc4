//! Headless walkthrough of the demo host.
//!
//! Taps the trigger, waits for the sheet to settle, taps DISMISS and exits
//! once the sheet has gone. Run with `RUST_LOG=debug` to follow the state
//! transitions.

use std::time::{Duration, Instant};

use alert_sheet::constants::PATH_TOLERANCE;
use alert_sheet::host::{HostConfig, HostScreen};
use alert_sheet::renderer::PaintContext;
use alert_sheet::widgets::{Event, SheetState, Widget};
use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal};

/// Scripted user actions, performed in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    TapTrigger,
    WaitVisible,
    TapDismiss,
    WaitGone,
    Done,
}

struct Demo {
    host: HostScreen,
    step: Step,
    frames: u32,
    paint: PaintContext,
    signal: LoopSignal,
}

impl Demo {
    fn tap(&mut self, (x, y): (f32, f32)) {
        for event in Event::tap(x, y) {
            self.host.event(&event);
        }
    }

    fn frame(&mut self, now: Instant) {
        self.frames += 1;
        self.host.tick(now);

        self.step = match self.step {
            Step::TapTrigger => {
                let center = self.host.trigger().bounds().center();
                self.tap(center);
                Step::WaitVisible
            }
            Step::WaitVisible => match self.host.sheet().map(|s| s.state()) {
                Some(SheetState::Visible) => Step::TapDismiss,
                _ => Step::WaitVisible,
            },
            Step::TapDismiss => {
                let button = self
                    .host
                    .sheet()
                    .and_then(|sheet| sheet.button())
                    .map(|button| button.bounds().center());
                if let Some(center) = button {
                    self.tap(center);
                }
                Step::WaitGone
            }
            Step::WaitGone if self.host.sheet().is_none() => Step::Done,
            other => other,
        };

        self.paint.clear();
        self.host.paint(&mut self.paint);
        let mesh = self.paint.build_mesh(PATH_TOLERANCE);
        log::trace!(
            "frame {}: {} commands, {} triangles, {} vertex bytes, {} index bytes",
            self.frames,
            self.paint.commands().len(),
            mesh.triangle_count(),
            mesh.vertex_bytes().len(),
            mesh.index_bytes().len()
        );

        if self.step == Step::Done {
            self.signal.stop();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = HostConfig::default();
    let frame_interval = config.frame_interval;

    let mut event_loop: EventLoop<Demo> = EventLoop::try_new()?;
    let mut demo = Demo {
        host: HostScreen::new(config),
        step: Step::TapTrigger,
        frames: 0,
        paint: PaintContext::with_capacity(64),
        signal: event_loop.get_signal(),
    };

    event_loop
        .handle()
        .insert_source(Timer::from_duration(frame_interval), move |_, _, demo| {
            demo.frame(Instant::now());
            TimeoutAction::ToDuration(frame_interval)
        })
        .map_err(|err| err.error)?;

    log::info!("Running alert sheet demo");
    event_loop.run(Duration::from_secs(1), &mut demo, |_| {})?;

    let delegate = demo.host.delegate().borrow();
    log::info!(
        "Demo finished after {} frames: {} button tap(s), {} dismissal(s)",
        demo.frames,
        delegate.clicks().len(),
        delegate.dismissals()
    );
    Ok(())
}
