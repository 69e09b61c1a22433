use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum AddressingModeError {
    #[error("unsupported pointer width: {0} bit")]
    UnsupportedPointerWidth(u32),
    #[error("not a wasm32 or wasm64 target")]
    UnrecognizedTarget,
}
