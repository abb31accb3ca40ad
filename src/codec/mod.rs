//! Codec selection core
//!
//! Enumerates the platform codec list, applies device quirk policy and
//! resolves decoders and hardware encoders. Every public entry point
//! degrades failures to "codec unavailable" instead of returning a fault.

pub mod classify;
pub mod crypto;
pub mod decoder;
pub mod encoder;
pub mod quirks;
pub mod registry;
pub mod resolver;

pub use classify::is_software_codec;
pub use encoder::{HardwareEncoderMatch, HwEncoderRule, HW_ENCODER_RULES};
pub use registry::CodecRegistry;
pub use resolver::CodecResolver;

use crate::platform::PlatformError;

/// Well-known mime types
pub mod mime_types {
  pub const VIDEO_H264: &str = "video/avc";
  /// Alternate spelling of H.264 some callers pass through
  pub const VIDEO_H264_AVC1: &str = "video/avc1";
  pub const VIDEO_H265: &str = "video/hevc";
  pub const VIDEO_VP8: &str = "video/x-vnd.on2.vp8";
  pub const VIDEO_VP9: &str = "video/x-vnd.on2.vp9";
  pub const AUDIO_OPUS: &str = "audio/opus";
}

/// Codec direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
  Decoder,
  Encoder,
}

impl Direction {
  pub(crate) fn of(is_encoder: bool) -> Self {
    if is_encoder {
      Direction::Encoder
    } else {
      Direction::Decoder
    }
  }
}

/// Bitrate compensation a caller must apply for a resolved encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitrateAdjustment {
  /// Encoder has no known bitrate problem
  #[default]
  None,
  /// Encoder budgets bits from the configured frame rate instead of real
  /// frame timestamps, so the caller must scale bitrate by actual fps
  FramerateBased,
}

/// A successfully constructed codec together with its properties
#[derive(Debug)]
pub struct CreatedCodec<C> {
  pub codec: C,
  pub supports_adaptive_playback: bool,
  pub bitrate_adjustment: BitrateAdjustment,
}

/// Outcome of a codec creation request
///
/// Not-found, policy denial and platform faults all collapse into
/// [`CodecCreation::Unavailable`].
#[derive(Debug)]
pub enum CodecCreation<C> {
  Created(CreatedCodec<C>),
  Unavailable,
}

impl<C> CodecCreation<C> {
  pub fn is_available(&self) -> bool {
    matches!(self, CodecCreation::Created(_))
  }

  pub fn codec(&self) -> Option<&C> {
    match self {
      CodecCreation::Created(created) => Some(&created.codec),
      CodecCreation::Unavailable => None,
    }
  }

  pub fn into_codec(self) -> Option<C> {
    match self {
      CodecCreation::Created(created) => Some(created.codec),
      CodecCreation::Unavailable => None,
    }
  }

  /// Always false when no codec was created
  pub fn supports_adaptive_playback(&self) -> bool {
    match self {
      CodecCreation::Created(created) => created.supports_adaptive_playback,
      CodecCreation::Unavailable => false,
    }
  }

  pub fn bitrate_adjustment(&self) -> BitrateAdjustment {
    match self {
      CodecCreation::Created(created) => created.bitrate_adjustment,
      CodecCreation::Unavailable => BitrateAdjustment::None,
    }
  }
}

impl<C> From<CodecResult<CreatedCodec<C>>> for CodecCreation<C> {
  fn from(result: CodecResult<CreatedCodec<C>>) -> Self {
    match result {
      Ok(created) => CodecCreation::Created(created),
      Err(_) => CodecCreation::Unavailable,
    }
  }
}

/// Reason a resolution step did not produce a codec
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
  #[error("Platform error: {0}")]
  Platform(#[from] PlatformError),

  #[error("No {direction:?} found for type {mime}")]
  NoCodecFound { mime: String, direction: Direction },

  #[error("Secure decoding requires API level {min}, device has {sdk_int}")]
  SecureUnsupported { sdk_int: u32, min: u32 },

  #[error("Decoder for type {mime} is not supported on this device")]
  DeniedForDevice { mime: String },

  #[error("HW encoder for {mime} is not available on this device")]
  NoHardwareEncoder { mime: String },
}

pub type CodecResult<T> = Result<T, CodecError>;
