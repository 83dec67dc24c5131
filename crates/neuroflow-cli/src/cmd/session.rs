use neuroflow_core::timer::{format_remaining, SessionTimer, TimerEvent};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Drive the 10-minute focus countdown.
///
/// The tick source is a `tokio::time::interval` local to the loop below;
/// leaving the loop drops it, so no tick source can outlive the session.
pub fn run(_root: &Path) -> anyhow::Result<()> {
    let rt = super::runtime()?;
    rt.block_on(async {
        let mut timer = SessionTimer::new();
        timer.start();
        println!(
            "Quick session: {} of total focus, or just preparation.",
            format_remaining(timer.remaining())
        );
        println!("Press Ctrl-C to stop.");

        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first tick completes immediately; consume it so the countdown
        // runs at a true 1 Hz cadence.
        interval.tick().await;

        loop {
            interval.tick().await;
            match timer.tick() {
                Some(TimerEvent::Expired) => {
                    println!("\r  0:00");
                    println!();
                    println!("Victory! Dopamine successfully released.");
                    break;
                }
                None => {
                    print!("\r  {}  ", format_remaining(timer.remaining()));
                    std::io::stdout().flush()?;
                }
            }
        }
        Ok(())
    })
}
