// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for tile construction and position lookup.

use thiserror::Error;

/// Errors raised at the boundary of the symmetry engine.
///
/// `Configuration` and `InvalidRawBits` mean a placement does not fit the
/// fixed 12-position geometry; callers should treat them as fatal.
/// The position errors reject external input and can be recovered from
/// by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("placement has {len} positions, expected 12")]
    Configuration { len: usize },

    #[error("raw bits {bits:#06x} fall outside the 12 arm positions")]
    InvalidRawBits { bits: u16 },

    #[error("invalid position name {name:?} (expected [abg][1-4])")]
    InvalidPositionName { name: String },

    #[error("invalid position index {index} (must be in [0, 12))")]
    InvalidPositionIndex { index: usize },

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl TileError {
    /// Whether the error signals a broken geometry rather than bad user input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TileError::Configuration { .. } | TileError::InvalidRawBits { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TileError>;
