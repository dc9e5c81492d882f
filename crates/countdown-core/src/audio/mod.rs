//! Alert tone synthesis and playback.

mod chime;
mod output;
mod player;

pub use chime::Chime;
pub use output::{AudioOutput, RodioOutput};
pub use player::{sound_alert, AlertPlayer, AlertTone, Delivery};
