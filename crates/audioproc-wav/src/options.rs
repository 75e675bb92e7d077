//! Parser configuration.

use crate::profile::SupportedProfile;

/// How the walker treats the declared size of the `RIFF` identity chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentitySizing {
    /// Read the 4-byte form code and ignore the declared size. Sub-chunks are
    /// walked until the buffer ends.
    #[default]
    FixedRecord,
    /// Read the form code, then limit the walk to the identity chunk's
    /// declared extent. Bytes trailing the container are never visited.
    BoundedByDeclaredSize,
}

/// Options for [`parse_wav_with`](crate::parse_wav_with).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Identity-chunk sizing rule.
    pub identity_sizing: IdentitySizing,
    /// Profile the stream is validated against.
    pub profile: SupportedProfile,
}

impl ParseOptions {
    /// Options that bound the walk to the container's declared size.
    pub fn bounded() -> Self {
        Self {
            identity_sizing: IdentitySizing::BoundedByDeclaredSize,
            ..Self::default()
        }
    }
}
