use std::sync::Arc;

use countdown_core::error::Result;
use countdown_core::{AlertPlayer, Config, Delivery, RodioOutput};

/// Play the alert in the foreground, useful for checking the sound setup.
pub fn run() -> Result<()> {
    let config = Config::load_or_default();
    let player = AlertPlayer::new(Arc::new(RodioOutput::new(config.volume_gain())))
        .with_fallback(config.fallback_clip());

    let delivery = player.spawn()?.join().unwrap_or(Delivery::Silent);
    match delivery {
        Delivery::Synthesized => println!("played synthesized chime"),
        Delivery::Fallback => println!("chime unavailable, played fallback clip"),
        Delivery::Silent => println!("no audio output available (see countdown.log)"),
    }
    Ok(())
}
