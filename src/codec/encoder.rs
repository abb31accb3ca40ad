//! Hardware encoder resolution
//!
//! Only vendor implementations listed in [`HW_ENCODER_RULES`] are used for
//! encoding. The codec list is walked in platform order and, for every
//! hardware candidate, the rule table in declaration order; the first rule
//! whose version gate is satisfied wins.

use crate::platform::{version_codes, CodecFactory, CodecList, DeviceFingerprint};

use super::{
  classify::is_software_codec, mime_types, quirks, BitrateAdjustment, CodecCreation, CodecError,
  CodecRegistry, CodecResult, CreatedCodec,
};

/// A known-good hardware encoder family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwEncoderRule {
  pub mime: &'static str,
  /// Implementation name prefix of the vendor
  pub prefix: &'static str,
  /// Lowest API level on which this encoder behaves
  pub min_sdk: u32,
  pub bitrate_adjustment: BitrateAdjustment,
}

/// Supported hardware encoders, in priority order
pub const HW_ENCODER_RULES: &[HwEncoderRule] = &[
  HwEncoderRule {
    mime: mime_types::VIDEO_VP8,
    prefix: "OMX.qcom.",
    min_sdk: version_codes::KITKAT,
    bitrate_adjustment: BitrateAdjustment::None,
  },
  HwEncoderRule {
    mime: mime_types::VIDEO_H264,
    prefix: "OMX.qcom.",
    min_sdk: version_codes::KITKAT,
    bitrate_adjustment: BitrateAdjustment::None,
  },
  HwEncoderRule {
    mime: mime_types::VIDEO_VP8,
    prefix: "OMX.Exynos.",
    min_sdk: version_codes::M,
    bitrate_adjustment: BitrateAdjustment::None,
  },
  HwEncoderRule {
    mime: mime_types::VIDEO_H264,
    prefix: "OMX.Exynos.",
    min_sdk: version_codes::LOLLIPOP,
    bitrate_adjustment: BitrateAdjustment::FramerateBased,
  },
];

/// Hardware encoder selected for a mime type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareEncoderMatch {
  /// Name of the platform codec that satisfied the rule
  pub codec_name: String,
  pub rule: HwEncoderRule,
}

/// Find the hardware encoder for `mime` using the built-in rule table
pub fn find_hw_encoder(
  registry: &CodecRegistry,
  mime: &str,
  device: &DeviceFingerprint,
) -> Option<HardwareEncoderMatch> {
  find_hw_encoder_with_rules(registry, HW_ENCODER_RULES, mime, device)
}

/// Find the hardware encoder for `mime` against an explicit rule table.
///
/// A rule whose version gate is not met is skipped, and the search carries
/// on with the next rule and then the next candidate.
pub fn find_hw_encoder_with_rules(
  registry: &CodecRegistry,
  rules: &[HwEncoderRule],
  mime: &str,
  device: &DeviceFingerprint,
) -> Option<HardwareEncoderMatch> {
  let candidates = registry
    .iter()
    .filter(|info| info.is_encoder && !is_software_codec(&info.name))
    .filter(|info| info.supports_type(mime).is_some());

  for info in candidates {
    let encoder_name = info.name.as_str();

    for rule in rules {
      if !mime.eq_ignore_ascii_case(rule.mime) || !encoder_name.starts_with(rule.prefix) {
        continue;
      }

      if device.sdk_int < rule.min_sdk {
        tracing::warn!(
          target: "mediacodec",
          "Codec {} is disabled due to SDK version {}",
          encoder_name,
          device.sdk_int
        );
        continue;
      }

      tracing::debug!(
        target: "mediacodec",
        "Found target encoder for mime {} : {}",
        mime,
        encoder_name
      );
      return Some(HardwareEncoderMatch {
        codec_name: encoder_name.to_string(),
        rule: *rule,
      });
    }
  }

  tracing::warn!(
    target: "mediacodec",
    "HW encoder for {} is not available on this device.",
    mime
  );
  None
}

/// Whether a hardware encoder for `mime` may be used on this device.
///
/// The codec list is only enumerated once the device-level checks pass.
pub fn is_encoder_supported_by_device<L: CodecList + ?Sized>(
  list: &L,
  mime: &str,
  device: &DeviceFingerprint,
) -> bool {
  if !quirks::is_encoder_allowed_for_device(mime, device) {
    return false;
  }

  let registry = CodecRegistry::new(list, device.sdk_int);
  find_hw_encoder(&registry, mime, device).is_some()
}

/// Create the platform encoder for `mime` if a supported hardware encoder exists
pub fn create_encoder<P>(
  platform: &P,
  mime: &str,
  device: &DeviceFingerprint,
) -> CodecCreation<P::Codec>
where
  P: CodecList + CodecFactory + ?Sized,
{
  let result = try_create_encoder(platform, mime, device);
  if let Err(CodecError::Platform(e)) = &result {
    tracing::error!(target: "mediacodec", "Failed to create MediaCodec: {}, {}", mime, e);
  }
  result.into()
}

fn try_create_encoder<P>(
  platform: &P,
  mime: &str,
  device: &DeviceFingerprint,
) -> CodecResult<CreatedCodec<P::Codec>>
where
  P: CodecList + CodecFactory + ?Sized,
{
  let registry = CodecRegistry::new(platform, device.sdk_int);
  let found = find_hw_encoder(&registry, mime, device).ok_or_else(|| {
    CodecError::NoHardwareEncoder {
      mime: mime.to_string(),
    }
  })?;

  let codec = platform.create_encoder_by_type(mime)?;
  Ok(CreatedCodec {
    codec,
    supports_adaptive_playback: false,
    bitrate_adjustment: found.rule.bitrate_adjustment,
  })
}
