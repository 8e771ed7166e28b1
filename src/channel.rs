//! Bounded command queue between the radio and the control loop.
//!
//! The radio side (interrupt handler or task) pushes decoded commands with
//! [`CommandSender::try_send`]; the control loop drains them with
//! [`CommandReceiver::try_receive`] once per pass. Backed by a fixed-size
//! `heapless::Deque` guarded by a `critical-section` mutex.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;
use thiserror::Error;

use crate::command::{Command, DecodeError};

/// The queue was full; the command is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("command queue is full, dropped {0:?}")]
pub struct TrySendError(pub Command);

/// The queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("command queue is empty")]
pub struct TryReceiveError;

/// Failure of [`CommandSender::try_send_payload`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("malformed payload: {0}")]
    Decode(#[source] DecodeError),
    #[error("command queue is full, dropped {0:?}")]
    Full(Command),
}

/// Interrupt-safe bounded command queue.
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    fn push(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    fn pop(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle, copied freely into interrupt handlers or tasks.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Queue a decoded command, handing it back if the queue is full
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        self.channel.push(command)
    }

    /// Decode a tagged payload and queue it
    pub fn try_send_payload(&self, payload: &[u8]) -> Result<(), PayloadError> {
        let command = Command::decode(payload).map_err(PayloadError::Decode)?;
        self.try_send(command)
            .map_err(|TrySendError(command)| PayloadError::Full(command))
    }
}

/// Consumer handle owned by the control loop.
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the oldest queued command without waiting
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.channel.pop()
    }
}
