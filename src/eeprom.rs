//! Block layout of the radio's EEPROM image.

use std::ops::Range;

use crate::crc::calculate;
use crate::error::Error;

/// Total size of a full EEPROM dump.
pub const EEPROM_SIZE: usize = 0x2000;

/// Start of the calibration block; everything below it is configuration.
pub const CALIBRATION_OFFSET: usize = 0x1E00;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Region {
    Config,
    Calibration,
    All,
}

impl Region {
    pub fn range(self) -> Range<usize> {
        match self {
            Region::Config => 0..CALIBRATION_OFFSET,
            Region::Calibration => CALIBRATION_OFFSET..EEPROM_SIZE,
            Region::All => 0..EEPROM_SIZE,
        }
    }

    /// Checksum of this region within `image`, which must be at least as
    /// long as the end of the region.
    pub fn checksum(self, image: &[u8]) -> Result<u16, Error> {
        let range = self.range();
        tracing::debug!(region = ?self, start = range.start, end = range.end, "region checksum");
        // Every region is below 64 KiB.
        window_checksum(image, range.start, range.len() as u16)
    }
}

/// Checksum of `image[offset..offset + length]`.
pub fn window_checksum(image: &[u8], offset: usize, length: u16) -> Result<u16, Error> {
    let out_of_bounds = || Error::WindowOutOfBounds {
        offset,
        length: length as usize,
        available: image.len(),
    };

    let tail = image.get(offset..).ok_or_else(out_of_bounds)?;
    calculate(tail, length).map_err(|_| out_of_bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::crc16_ccitt;

    #[test]
    fn regions_partition_the_image() {
        assert_eq!(Region::Config.range(), 0..0x1E00);
        assert_eq!(Region::Calibration.range(), 0x1E00..0x2000);
        assert_eq!(Region::All.range().len(), EEPROM_SIZE);
        assert_eq!(
            Region::Config.range().len() + Region::Calibration.range().len(),
            EEPROM_SIZE
        );
    }

    #[test]
    fn region_checksum_covers_only_its_block() {
        let mut image = vec![0u8; EEPROM_SIZE];
        image[CALIBRATION_OFFSET] = 0x01;

        assert_eq!(Region::Config.checksum(&image).unwrap(), 0x0000);
        assert_eq!(
            Region::Calibration.checksum(&image).unwrap(),
            crc16_ccitt(&image[CALIBRATION_OFFSET..])
        );
        assert_eq!(
            Region::All.checksum(&image).unwrap(),
            crc16_ccitt(&image)
        );
    }

    #[test]
    fn short_image_is_rejected() {
        let image = vec![0u8; CALIBRATION_OFFSET];
        assert!(Region::Config.checksum(&image).is_ok());
        assert!(matches!(
            Region::Calibration.checksum(&image),
            Err(Error::WindowOutOfBounds {
                offset: CALIBRATION_OFFSET,
                length: 0x200,
                available: CALIBRATION_OFFSET,
            })
        ));
    }

    #[test]
    fn window_checksum_bounds() {
        let image = b"xx123456789";
        assert_eq!(window_checksum(image, 2, 9).unwrap(), 0x31C3);
        assert_eq!(window_checksum(image, 11, 0).unwrap(), 0);
        assert!(window_checksum(image, 12, 0).is_err());
        assert!(window_checksum(image, 3, 9).is_err());
    }
}
