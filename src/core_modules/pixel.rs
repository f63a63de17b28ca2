// THEORY:
// The `Pixel` module is the smallest unit of the engine. It is a "dumb" data
// container for one RGBA sample plus the handful of single-pixel heuristics the
// profilers need. Nothing here looks at neighbors; gradients live in the edge
// profiler and aggregates live in the color and brightness profilers.
//
// Key principles:
// 1) Single-pixel scope: a heuristic here only reads the pixel's own channels.
// 2) Luminance is the plain channel mean (R+G+B)/3 on the 0..255 scale. Every
//    profiler uses this same definition so their outputs are comparable.
// 3) Quantization floors each channel to a bin boundary; the bin key packs the
//    three floored channels into one integer for cheap hashing.

pub mod pixel {
    pub type Byte = u8;
    pub type Channel = Byte;
    pub type Luminance = f64;
    pub type BinKey = u32;

    pub const CHANNELS: usize = 4;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Unweighted channel mean on the 0..255 scale.
        #[inline]
        pub fn luminance(&self) -> Luminance {
            (self.red as Luminance + self.green as Luminance + self.blue as Luminance) / 3.0
        }

        /// Whether the pixel carries color signal rather than background.
        #[inline]
        pub fn is_opaque(&self, alpha_cutoff: Channel) -> bool {
            self.alpha >= alpha_cutoff
        }

        /// Floors each color channel to a multiple of `step`. Alpha is dropped.
        #[inline]
        pub fn quantized(&self, step: Channel) -> (Channel, Channel, Channel) {
            (
                quantize_channel(self.red, step),
                quantize_channel(self.green, step),
                quantize_channel(self.blue, step),
            )
        }

        /// Packed key of the quantized color, unique per bin.
        #[inline]
        pub fn bin_key(&self, step: Channel) -> BinKey {
            let (red, green, blue) = self.quantized(step);
            ((red as BinKey) << 16) | ((green as BinKey) << 8) | blue as BinKey
        }
    }

    #[inline]
    pub fn quantize_channel(value: Channel, step: Channel) -> Channel {
        (value / step) * step
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for [Byte; CHANNELS] {
        fn from(pixel: Pixel) -> Self {
            [pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}
