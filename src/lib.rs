#![no_std]

pub mod animation;
pub mod channel;
pub mod color;
pub mod command;
pub mod config;
mod diag;
pub mod dispatcher;
pub mod engine;
pub mod frame_scheduler;
pub mod playlist;
pub mod sink;

pub use animation::{Animation, AnimationMode, AnimationSlot, StepOutcome};
pub use channel::{CommandChannel, CommandReceiver, CommandSender};
pub use command::{ButtonAction, ButtonBinding, Command, DecodeError};
pub use config::AnimatorConfig;
pub use dispatcher::CommandDispatcher;
pub use engine::{Animator, TickOutcome, TransitionError};
pub use frame_scheduler::{FrameDecision, FrameScheduler, is_due};
pub use playlist::{Playlist, PlaylistError};
pub use sink::{DualStrandSink, PixelSink, SmartLedsOutput, Strand};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Each strand of a [`DualStrandSink`] presents through its own driver.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
