//! Inbound commands and the button table
//!
//! Payloads arrive already framed and checksummed by the radio link; the
//! first byte is the type tag.

use thiserror::Error;

use crate::animation::AnimationMode;
use crate::color::Rgb;

/// Tag of a solid color payload: `C r g b`
pub const TAG_COLOR: u8 = b'C';
/// Tag of a button payload: `B <id digit> <pressed digit>`
pub const TAG_BUTTON: u8 = b'B';

const COLOR_PAYLOAD_LEN: usize = 4;
const BUTTON_PAYLOAD_LEN: usize = 3;

/// Decoded command event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fill the strip with one color and stop animating
    SetColor(Rgb),
    /// Controller pad button pressed or released
    Button { id: u8, pressed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty payload")]
    Empty,
    #[error("unknown command tag {0:#04x}")]
    UnknownTag(u8),
    #[error("payload too short: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("expected an ASCII digit, got {0:#04x}")]
    InvalidDigit(u8),
}

impl Command {
    /// Decode a tagged payload
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let (&tag, _) = payload.split_first().ok_or(DecodeError::Empty)?;
        match tag {
            TAG_COLOR => {
                let [_, r, g, b] = fixed::<COLOR_PAYLOAD_LEN>(payload)?;
                Ok(Self::SetColor(Rgb { r, g, b }))
            }
            TAG_BUTTON => {
                let [_, id, pressed] = fixed::<BUTTON_PAYLOAD_LEN>(payload)?;
                Ok(Self::Button {
                    id: ascii_digit(id)?,
                    pressed: ascii_digit(pressed)? != 0,
                })
            }
            other => Err(DecodeError::UnknownTag(other)),
        }
    }
}

/// Leading `N` bytes of the payload; trailing bytes are ignored
fn fixed<const N: usize>(payload: &[u8]) -> Result<[u8; N], DecodeError> {
    payload
        .get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or(DecodeError::Truncated {
            expected: N,
            actual: payload.len(),
        })
}

fn ascii_digit(byte: u8) -> Result<u8, DecodeError> {
    if byte.is_ascii_digit() {
        Ok(byte - b'0')
    } else {
        Err(DecodeError::InvalidDigit(byte))
    }
}

/// Engine operation bound to a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Start a mode from the top of the playlist
    Start(AnimationMode),
    Pause,
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonBinding {
    pub button: u8,
    pub action: ButtonAction,
}

impl ButtonBinding {
    pub const fn new(button: u8, action: ButtonAction) -> Self {
        Self { button, action }
    }
}

/// Controller pad layout
pub const DEFAULT_BUTTONS: &[ButtonBinding] = &[
    ButtonBinding::new(1, ButtonAction::Start(AnimationMode::LarsonScanner)),
    ButtonBinding::new(2, ButtonAction::Start(AnimationMode::ColorWipe)),
    ButtonBinding::new(3, ButtonAction::Start(AnimationMode::TheaterChase)),
    ButtonBinding::new(4, ButtonAction::Start(AnimationMode::RainbowCycle)),
    ButtonBinding::new(5, ButtonAction::Resume),
    ButtonBinding::new(6, ButtonAction::Pause),
    ButtonBinding::new(8, ButtonAction::Start(AnimationMode::RotatingColorWipe)),
];

/// Look up the action bound to `button`
pub fn action_for(bindings: &[ButtonBinding], button: u8) -> Option<ButtonAction> {
    bindings
        .iter()
        .find(|binding| binding.button == button)
        .map(|binding| binding.action)
}
