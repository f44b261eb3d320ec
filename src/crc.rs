use crate::error::Error;

/// Generator polynomial x^16 + x^12 + x^5 + 1.
pub const POLYNOMIAL: u16 = 0x1021;

/// Lifecycle hook kept for parity with the other drivers. Does nothing.
pub fn init() {}

/// CRC-16/CCITT (poly 0x1021, init 0x0000, MSB first, no final XOR),
/// bit-by-bit implementation over the whole slice.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc: u16 = 0x0000;

    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }

    crc
}

/// Checksum of the first `length` bytes of `buffer`.
///
/// Fails with [`Error::OutOfBounds`] before touching any data if `buffer`
/// is shorter than `length`.
pub fn calculate(buffer: &[u8], length: u16) -> Result<u16, Error> {
    let data = buffer
        .get(..length as usize)
        .ok_or(Error::OutOfBounds {
            length,
            available: buffer.len(),
        })?;
    Ok(crc16_ccitt(data))
}
