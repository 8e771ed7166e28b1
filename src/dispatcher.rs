//! Command dispatching
//!
//! Maps queued commands onto animator operations.

use embassy_time::Instant;

use crate::channel::CommandReceiver;
use crate::command::{ButtonAction, Command, action_for};
use crate::config::AnimatorConfig;
use crate::diag::diag;
use crate::engine::Animator;
use crate::sink::PixelSink;

/// Drains the command queue into an [`Animator`]
///
/// Borrows the same [`AnimatorConfig`] the animator was built from, so the
/// button table and intervals cannot drift from the startup settings.
pub struct CommandDispatcher<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
    config: &'a AnimatorConfig,
}

impl<'a, const SIZE: usize> CommandDispatcher<'a, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, SIZE>, config: &'a AnimatorConfig) -> Self {
        Self { commands, config }
    }

    /// Apply all pending commands (non-blocking)
    ///
    /// Returns the number of commands taken from the queue.
    pub fn process_pending<S: PixelSink, const P: usize>(
        &mut self,
        animator: &mut Animator<S, P>,
        now: Instant,
    ) -> usize {
        let mut processed = 0;
        while let Ok(command) = self.commands.try_receive() {
            self.dispatch(animator, command, now);
            processed += 1;
        }
        processed
    }

    /// Apply a single command
    pub fn dispatch<S: PixelSink, const P: usize>(
        &self,
        animator: &mut Animator<S, P>,
        command: Command,
        now: Instant,
    ) {
        match command {
            Command::SetColor(color) => animator.set_solid_color(color),
            Command::Button { id, pressed: false } => {
                diag!("[CommandDispatcher] button {} released", id);
            }
            Command::Button { id, pressed: true } => {
                diag!("[CommandDispatcher] button {} pressed", id);
                let Some(action) = action_for(self.config.buttons, id) else {
                    return;
                };
                self.apply_action(animator, action, now);
            }
        }
    }

    fn apply_action<S: PixelSink, const P: usize>(
        &self,
        animator: &mut Animator<S, P>,
        action: ButtonAction,
        now: Instant,
    ) {
        match action {
            ButtonAction::Start(mode) => {
                animator.start_playlist(mode, self.config.interval_for(mode), now);
            }
            ButtonAction::Pause => {
                let _ = animator.pause();
            }
            ButtonAction::Resume => {
                let _ = animator.resume(now);
            }
        }
    }

    pub const fn config(&self) -> &'a AnimatorConfig {
        self.config
    }
}
