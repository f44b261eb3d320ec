//! CRC-16/CCITT checksum used by the radio firmware to validate EEPROM
//! blocks and protocol frames.
//!
//! The checksum is polynomial 0x1021, MSB first, initial value 0 and no
//! final XOR. [`crc::calculate`] takes an explicit length and checks it
//! against the buffer; [`crc::crc16_ccitt`] hashes a whole slice.

pub mod crc;
pub mod eeprom;
pub mod error;

pub use error::Error;
