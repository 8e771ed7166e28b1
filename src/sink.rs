//! Pixel sink: the buffered, two-strand view of the LED hardware
//!
//! Animations write into the sink by index; nothing reaches the hardware
//! until [`PixelSink::present`] is called, so several writes within one frame
//! are coalesced into a single transfer per strand.

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::diag::diag;

/// One of the two physically parallel LED runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    A,
    B,
}

impl Strand {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    const fn slot(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Addressable pixel buffer shared by both strands.
///
/// Writes outside `[0, count())` must be silently dropped.
pub trait PixelSink {
    /// Number of pixels per strand
    fn count(&self) -> usize;

    /// Write one pixel of a single strand
    fn set_strand_pixel(&mut self, strand: Strand, index: usize, color: Rgb);

    /// Write the same pixel on both strands
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        for strand in Strand::ALL {
            self.set_strand_pixel(strand, index, color);
        }
    }

    /// Write every pixel of both strands
    fn fill(&mut self, color: Rgb) {
        for index in 0..self.count() {
            self.set_pixel(index, color);
        }
    }

    /// Push the buffered pixels to the hardware
    fn present(&mut self);

    /// Set the global brightness applied on present (255 = unscaled)
    fn set_brightness(&mut self, level: u8);
}

/// Frame buffers for two strands of `N` pixels, each presented to its own
/// [`OutputDriver`].
pub struct DualStrandSink<A: OutputDriver, B: OutputDriver, const N: usize> {
    primary: A,
    secondary: B,
    buffers: [[Rgb; N]; 2],
    brightness: u8,
    dirty: bool,
}

impl<A: OutputDriver, B: OutputDriver, const N: usize> DualStrandSink<A, B, N> {
    /// Create a sink with both strands dark and full brightness
    pub const fn new(primary: A, secondary: B) -> Self {
        Self {
            primary,
            secondary,
            buffers: [[BLACK; N]; 2],
            brightness: u8::MAX,
            dirty: true,
        }
    }

    /// Buffered (unscaled) pixels of one strand
    pub const fn strand(&self, strand: Strand) -> &[Rgb; N] {
        &self.buffers[strand.slot()]
    }

    /// Current global brightness
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Check if there are writes that have not been presented yet
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Drivers for strand A and strand B
    pub const fn drivers(&self) -> (&A, &B) {
        (&self.primary, &self.secondary)
    }
}

impl<A: OutputDriver, B: OutputDriver, const N: usize> PixelSink for DualStrandSink<A, B, N> {
    fn count(&self) -> usize {
        N
    }

    fn set_strand_pixel(&mut self, strand: Strand, index: usize, color: Rgb) {
        if let Some(slot) = self.buffers[strand.slot()].get_mut(index) {
            *slot = color;
            self.dirty = true;
        }
    }

    fn present(&mut self) {
        if !self.dirty {
            return;
        }
        write_scaled(&mut self.primary, &self.buffers[0], self.brightness);
        write_scaled(&mut self.secondary, &self.buffers[1], self.brightness);
        self.dirty = false;
    }

    fn set_brightness(&mut self, level: u8) {
        if level != self.brightness {
            self.brightness = level;
            self.dirty = true;
        }
    }
}

fn write_scaled<D: OutputDriver, const N: usize>(driver: &mut D, frame: &[Rgb; N], level: u8) {
    if level == u8::MAX {
        driver.write(frame);
        return;
    }
    let mut scaled = [BLACK; N];
    for (dst, src) in scaled
        .iter_mut()
        .zip(smart_leds::brightness(frame.iter().copied(), level))
    {
        *dst = src;
    }
    driver.write(&scaled);
}

/// [`OutputDriver`] over any `smart-leds` writer (ws2812 SPI/RMT/PIO drivers).
///
/// Write failures are logged and dropped: a missed frame is repainted by
/// the next present.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Wrapped `smart-leds` writer
    pub const fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: core::fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(err) = self.writer.write(colors.iter().copied()) {
            diag!("[SmartLedsOutput.write] dropped frame: {:?}", err);
        }
    }
}
