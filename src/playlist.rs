//! Cyclic color playlist consumed by the completing animations

use heapless::Vec;
use thiserror::Error;

use crate::color::{BLACK, Rgb, rgb_from_u32};

/// Default playlist capacity
pub const DEFAULT_PLAYLIST_SIZE: usize = 8;

/// Violet, blue, cyan and pale pink wipes, each followed by a dark wipe
pub const DEFAULT_COLORS: [Rgb; DEFAULT_PLAYLIST_SIZE] = [
    rgb_from_u32(0x0072_00FF),
    BLACK,
    rgb_from_u32(0x0000_32FF),
    BLACK,
    rgb_from_u32(0x0000_DCFF),
    BLACK,
    rgb_from_u32(0x00FF_E1FF),
    BLACK,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("playlist must contain at least one color")]
    Empty,
    #[error("playlist capacity of {capacity} colors exceeded")]
    Full { capacity: usize },
}

/// Ordered, non-empty, fixed-capacity sequence of colors.
///
/// Indexing wraps, so any cursor value maps onto a color.
#[derive(Debug, Clone)]
pub struct Playlist<const N: usize> {
    colors: Vec<Rgb, N>,
}

impl<const N: usize> Playlist<N> {
    /// Build a playlist from a slice of colors
    pub fn new(colors: &[Rgb]) -> Result<Self, PlaylistError> {
        if colors.is_empty() {
            return Err(PlaylistError::Empty);
        }
        let colors =
            Vec::from_slice(colors).map_err(|()| PlaylistError::Full { capacity: N })?;
        Ok(Self { colors })
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: construction rejects empty playlists
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping past the end
    pub fn color_at(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    /// Cursor position following `cursor`
    pub fn next_cursor(&self, cursor: usize) -> usize {
        (cursor + 1) % self.colors.len()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for Playlist<DEFAULT_PLAYLIST_SIZE> {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.into_iter().collect(),
        }
    }
}
