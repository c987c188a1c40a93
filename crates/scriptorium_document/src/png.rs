//! Minimal PNG header inspection.

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Pixel dimensions read from a PNG `IHDR` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct PngDimensions {
    width: u32,
    height: u32,
}

impl PngDimensions {
    /// Read width and height from PNG bytes.
    ///
    /// Returns `None` unless the buffer starts with the PNG signature
    /// followed by a non-degenerate `IHDR` chunk.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptorium_document::PngDimensions;
    ///
    /// assert!(PngDimensions::read(b"GIF89a").is_none());
    /// ```
    pub fn read(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 24 || bytes[..8] != SIGNATURE || &bytes[12..16] != b"IHDR" {
            return None;
        }

        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        if width == 0 || height == 0 {
            return None;
        }

        Some(Self { width, height })
    }

    /// Height in EMU that keeps the aspect ratio at `width_emu`.
    pub fn scaled_height(&self, width_emu: u32) -> u32 {
        let height = u64::from(width_emu) * u64::from(self.height) / u64::from(self.width);
        height.min(u64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = SIGNATURE.to_vec();
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes
    }

    #[test]
    fn reads_ihdr_dimensions() {
        let dims = PngDimensions::read(&header(512, 768)).unwrap();
        assert_eq!(*dims.width(), 512);
        assert_eq!(*dims.height(), 768);
    }

    #[test]
    fn rejects_truncated_and_zero_sized() {
        assert!(PngDimensions::read(&header(512, 768)[..20]).is_none());
        assert!(PngDimensions::read(&header(0, 768)).is_none());
    }

    #[test]
    fn scales_portrait_height() {
        let dims = PngDimensions::read(&header(512, 768)).unwrap();
        assert_eq!(dims.scaled_height(5_486_400), 8_229_600);
    }
}
