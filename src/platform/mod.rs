//! Platform codec layer interfaces
//!
//! The resolver never reaches into the platform on its own. Device
//! identification, codec enumeration, codec construction and the crypto
//! pattern setter are all supplied by the embedder through these traits.

pub mod error;
pub mod types;
pub mod version;

pub use error::{PlatformError, PlatformResult};
pub use types::*;
pub use version::version_codes;

/// Device/platform identification primitive
pub trait DeviceInfo {
  /// Read the current device fingerprint.
  ///
  /// Called once per top-level operation; the result is never cached.
  fn fingerprint(&self) -> DeviceFingerprint;
}

/// Platform codec enumeration primitive
///
/// Platforms expose two enumeration calls depending on their version. Both
/// are declared here; [`crate::codec::CodecRegistry`] picks one when it is
/// built.
pub trait CodecList {
  /// Snapshot of every registered codec (API 21 and later)
  fn all_codec_infos(&self) -> Vec<CodecDescriptor>;

  /// Number of codecs reported by the legacy per-index call
  fn legacy_codec_count(&self) -> usize;

  /// Codec at `index` from the legacy per-index call
  fn legacy_codec_info_at(&self, index: usize) -> Option<CodecDescriptor>;
}

/// A constructed platform codec instance
pub trait MediaCodecHandle {
  /// Descriptor of the implementation backing this instance
  fn codec_info(&self) -> PlatformResult<CodecDescriptor>;

  /// Release the underlying platform resources
  fn release(&mut self) -> PlatformResult<()>;
}

/// Platform codec construction primitive
pub trait CodecFactory {
  type Codec: MediaCodecHandle;

  /// Instantiate the codec registered under exactly `name`
  fn create_by_codec_name(&self, name: &str) -> PlatformResult<Self::Codec>;

  /// Instantiate the platform's preferred decoder for `mime`
  fn create_decoder_by_type(&self, mime: &str) -> PlatformResult<Self::Codec>;

  /// Instantiate the platform's preferred encoder for `mime`
  fn create_encoder_by_type(&self, mime: &str) -> PlatformResult<Self::Codec>;
}

/// Per-sample crypto descriptor handed to a secure decoder
pub trait CryptoInfo {
  fn set_pattern(&mut self, pattern: EncryptionPattern);
}

impl<T: DeviceInfo + ?Sized> DeviceInfo for &T {
  fn fingerprint(&self) -> DeviceFingerprint {
    (**self).fingerprint()
  }
}

impl<T: CodecList + ?Sized> CodecList for &T {
  fn all_codec_infos(&self) -> Vec<CodecDescriptor> {
    (**self).all_codec_infos()
  }

  fn legacy_codec_count(&self) -> usize {
    (**self).legacy_codec_count()
  }

  fn legacy_codec_info_at(&self, index: usize) -> Option<CodecDescriptor> {
    (**self).legacy_codec_info_at(index)
  }
}

impl<T: CodecFactory + ?Sized> CodecFactory for &T {
  type Codec = T::Codec;

  fn create_by_codec_name(&self, name: &str) -> PlatformResult<Self::Codec> {
    (**self).create_by_codec_name(name)
  }

  fn create_decoder_by_type(&self, mime: &str) -> PlatformResult<Self::Codec> {
    (**self).create_decoder_by_type(mime)
  }

  fn create_encoder_by_type(&self, mime: &str) -> PlatformResult<Self::Codec> {
    (**self).create_encoder_by_type(mime)
  }
}
