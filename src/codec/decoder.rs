//! Decoder resolution
//!
//! Resolves and constructs a platform decoder for a mime type, honoring the
//! device quirk policy and the secure-decoder capability workaround.

use crate::platform::{
  version_codes, CodecFactory, CodecList, DeviceFingerprint, MediaCodecHandle,
  FEATURE_ADAPTIVE_PLAYBACK,
};

use super::{
  quirks, BitrateAdjustment, CodecCreation, CodecError, CodecRegistry, CodecResult, CreatedCodec,
  Direction,
};

/// Name suffix selecting the secure variant of a decoder
pub const SECURE_SUFFIX: &str = ".secure";

/// Transient codec instance, released when dropped
struct ProbeCodec<C: MediaCodecHandle>(C);

impl<C: MediaCodecHandle> Drop for ProbeCodec<C> {
  fn drop(&mut self) {
    if let Err(e) = self.0.release() {
      tracing::error!(target: "mediacodec", "Cannot release media codec: {}", e);
    }
  }
}

/// Whether `codec` supports dynamic resolution changes for `mime`.
///
/// Platform faults while querying are reported as unsupported.
pub fn supports_adaptive_playback<C: MediaCodecHandle + ?Sized>(
  codec: &C,
  mime: &str,
  device: &DeviceFingerprint,
) -> bool {
  if device.sdk_int < version_codes::KITKAT {
    return false;
  }

  let info = match codec.codec_info() {
    Ok(info) => info,
    Err(e) => {
      tracing::error!(target: "mediacodec", "Cannot retrieve codec information: {}", e);
      return false;
    }
  };

  if info.is_encoder {
    return false;
  }

  if !quirks::is_adaptive_playback_allowed(mime, device) {
    return false;
  }

  info.capabilities_for_type(mime)
    .is_some_and(|caps| caps.is_feature_supported(FEATURE_ADAPTIVE_PLAYBACK))
}

/// Create a decoder for `mime`.
///
/// Never fails loudly: policy denials, missing codecs and platform faults
/// all yield [`CodecCreation::Unavailable`].
pub fn create_decoder<P>(
  platform: &P,
  mime: &str,
  secure: bool,
  require_software: bool,
  device: &DeviceFingerprint,
) -> CodecCreation<P::Codec>
where
  P: CodecList + CodecFactory + ?Sized,
{
  let result = try_create_decoder(platform, mime, secure, require_software, device);
  match &result {
    Err(e @ (CodecError::DeniedForDevice { .. } | CodecError::NoCodecFound { .. })) => {
      tracing::error!(target: "mediacodec", "{}", e);
    }
    Err(CodecError::Platform(e)) => {
      tracing::error!(
        target: "mediacodec",
        "Failed to create MediaCodec: {}, isSecure: {}, requireSoftwareCodec: {}, {}",
        mime,
        secure,
        if require_software { "yes" } else { "no" },
        e
      );
    }
    _ => {}
  }
  result.into()
}

fn try_create_decoder<P>(
  platform: &P,
  mime: &str,
  secure: bool,
  require_software: bool,
  device: &DeviceFingerprint,
) -> CodecResult<CreatedCodec<P::Codec>>
where
  P: CodecList + CodecFactory + ?Sized,
{
  // Secure instances can crash the media server instead of failing on
  // older releases.
  if secure && device.sdk_int < version_codes::JELLY_BEAN_MR2 {
    return Err(CodecError::SecureUnsupported {
      sdk_int: device.sdk_int,
      min: version_codes::JELLY_BEAN_MR2,
    });
  }

  if !quirks::is_decoder_supported_for_device(mime, device) {
    return Err(CodecError::DeniedForDevice {
      mime: mime.to_string(),
    });
  }

  // The secure flag only applies to video.
  if secure && mime.starts_with("video") {
    return create_secure_video_decoder(platform, mime, require_software, device);
  }

  let codec = if require_software {
    let name = default_decoder_name(platform, mime, true, device)?;
    platform.create_by_codec_name(&name)?
  } else {
    platform.create_decoder_by_type(mime)?
  };

  let supports_adaptive_playback = supports_adaptive_playback(&codec, mime, device);
  Ok(CreatedCodec {
    codec,
    supports_adaptive_playback,
    bitrate_adjustment: BitrateAdjustment::None,
  })
}

fn create_secure_video_decoder<P>(
  platform: &P,
  mime: &str,
  require_software: bool,
  device: &DeviceFingerprint,
) -> CodecResult<CreatedCodec<P::Codec>>
where
  P: CodecList + CodecFactory + ?Sized,
{
  let name = default_decoder_name(platform, mime, require_software, device)?;

  // Secure instances do not answer capability queries reliably, so ask an
  // insecure instance of the same implementation. It has to be gone before
  // the secure one is created.
  let mut supports_adaptive = false;
  if device.sdk_int >= version_codes::KITKAT {
    let probe = ProbeCodec(platform.create_by_codec_name(&name)?);
    supports_adaptive = supports_adaptive_playback(&probe.0, mime, device);
  }

  let codec = platform.create_by_codec_name(&format!("{name}{SECURE_SUFFIX}"))?;
  Ok(CreatedCodec {
    codec,
    supports_adaptive_playback: supports_adaptive,
    bitrate_adjustment: BitrateAdjustment::None,
  })
}

fn default_decoder_name<L: CodecList + ?Sized>(
  list: &L,
  mime: &str,
  require_software: bool,
  device: &DeviceFingerprint,
) -> CodecResult<String> {
  CodecRegistry::new(list, device.sdk_int)
    .find_codec(mime, Direction::Decoder, require_software)
    .map(|info| info.name.clone())
    .ok_or_else(|| CodecError::NoCodecFound {
      mime: mime.to_string(),
      direction: Direction::Decoder,
    })
}
