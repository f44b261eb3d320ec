#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("length {length} exceeds buffer of {available} bytes")]
    OutOfBounds { length: u16, available: usize },

    #[error("window 0x{offset:04X}+{length} does not fit in image of {available} bytes")]
    WindowOutOfBounds {
        offset: usize,
        length: usize,
        available: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
