//! Frame loop tying a mount to a renderer.

use std::io::{self, Write};
use std::time::Duration;

use crate::config::AnimationConfig;
use crate::counter::{CounterView, CycleOutcome, Mount};
use crate::render::{Spring, TerminalRenderer};

/// Render `mount` until its fetch cycle ends and the count animation settles.
///
/// Non-live renderers skip the frame loop and only print the final card.
pub async fn drive<W: Write>(
    mount: Mount,
    renderer: &mut TerminalRenderer<W>,
    animation: &AnimationConfig,
) -> io::Result<CycleOutcome> {
    let counter = mount.counter().clone();

    if renderer.is_live() {
        let frame = Duration::from_millis(animation.frame_ms);
        let mut spring = Spring::new(counter.snapshot().count.unwrap_or(0) as f64, animation);
        let mut ticker = tokio::time::interval(frame);
        let mut tick = 0usize;

        loop {
            ticker.tick().await;
            let snapshot = counter.snapshot();
            if let Some(count) = snapshot.count {
                spring.set_target(count as f64);
            }
            spring.step(frame.as_secs_f64());

            let shown = snapshot
                .count
                .map(|count| if spring.is_settled() { count } else { spring.value() });
            renderer.draw_frame(&CounterView::new(snapshot.status, shown), tick)?;
            tick = tick.wrapping_add(1);

            if mount.is_settled() && spring.is_settled() {
                break;
            }
        }
    }

    let outcome = mount.settled().await;
    renderer.finish(&counter.view())?;
    Ok(outcome)
}
