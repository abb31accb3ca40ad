//! Caller-facing codec resolver
//!
//! Bundles the platform collaborators and exposes the operations the media
//! pipeline calls. Each call reads the device fingerprint once and
//! re-enumerates the codec list; nothing is cached between calls.

use crate::platform::{CodecFactory, CodecList, CryptoInfo, DeviceInfo, MediaCodecHandle};

use super::{
  crypto, decoder, encoder, quirks, CodecCreation, CodecRegistry, Direction,
  HardwareEncoderMatch,
};

/// Codec resolver over a platform implementation
#[derive(Debug, Clone)]
pub struct CodecResolver<P> {
  platform: P,
}

impl<P> CodecResolver<P> {
  pub fn new(platform: P) -> Self {
    Self { platform }
  }

  #[inline]
  pub fn platform(&self) -> &P {
    &self.platform
  }
}

impl<P: DeviceInfo> CodecResolver<P> {
  /// Whether decoding `mime` is allowed on the running device
  pub fn is_decoder_supported_for_device(&self, mime: &str) -> bool {
    quirks::is_decoder_supported_for_device(mime, &self.platform.fingerprint())
  }

  pub fn platform_supports_cbcs_encryption(&self) -> bool {
    crypto::platform_supports_cbcs_encryption(&self.platform.fingerprint())
  }

  pub fn set_pattern_if_supported<C: CryptoInfo + ?Sized>(
    &self,
    crypto_info: &mut C,
    encrypt_blocks: u32,
    skip_blocks: u32,
  ) {
    crypto::set_pattern_if_supported(
      crypto_info,
      encrypt_blocks,
      skip_blocks,
      &self.platform.fingerprint(),
    );
  }
}

impl<P: DeviceInfo + CodecList> CodecResolver<P> {
  fn registry(&self, sdk_int: u32) -> CodecRegistry {
    CodecRegistry::new(&self.platform, sdk_int)
  }

  /// Whether a supported hardware encoder for `mime` exists on this device
  pub fn is_encoder_supported_by_device(&self, mime: &str) -> bool {
    let device = self.platform.fingerprint();
    encoder::is_encoder_supported_by_device(&self.platform, mime, &device)
  }

  /// Name of the first codec of `direction` handling `mime`
  pub fn default_codec_name(
    &self,
    mime: &str,
    direction: Direction,
    require_software: bool,
  ) -> Option<String> {
    let device = self.platform.fingerprint();
    let name = self
      .registry(device.sdk_int)
      .find_codec(mime, direction, require_software)
      .map(|info| info.name.clone());

    if name.is_none() {
      tracing::error!(
        target: "mediacodec",
        "Decoder for type {} is not supported on this device",
        mime
      );
    }
    name
  }

  /// Color formats of the first encoder handling `mime`
  pub fn encoder_color_formats_for_mime(&self, mime: &str) -> Option<Vec<i32>> {
    let device = self.platform.fingerprint();
    self.registry(device.sdk_int).encoder_color_formats(mime)
  }

  /// The hardware encoder that would be used for `mime`, if any
  pub fn find_hardware_encoder(&self, mime: &str) -> Option<HardwareEncoderMatch> {
    let device = self.platform.fingerprint();
    encoder::find_hw_encoder(&self.registry(device.sdk_int), mime, &device)
  }
}

impl<P: DeviceInfo + CodecList + CodecFactory> CodecResolver<P> {
  /// Create a decoder for `mime`
  pub fn create_decoder(
    &self,
    mime: &str,
    secure: bool,
    require_software: bool,
  ) -> CodecCreation<P::Codec> {
    let device = self.platform.fingerprint();
    decoder::create_decoder(&self.platform, mime, secure, require_software, &device)
  }

  /// Create a hardware encoder for `mime`
  pub fn create_encoder(&self, mime: &str) -> CodecCreation<P::Codec> {
    let device = self.platform.fingerprint();
    encoder::create_encoder(&self.platform, mime, &device)
  }

  /// Whether a decoder for `mime` can be created right now.
  ///
  /// The decoder is released again before returning.
  pub fn can_decode(&self, mime: &str, secure: bool) -> bool {
    let Some(mut codec) = self.create_decoder(mime, secure, false).into_codec() else {
      return false;
    };

    if let Err(e) = codec.release() {
      tracing::error!(target: "mediacodec", "Cannot release media codec: {}", e);
    }
    true
  }
}
