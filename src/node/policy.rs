//! CodecPolicy - codec selection policy for JavaScript callers
//!
//! JavaScript hands in a device description and a codec list snapshot (for
//! example collected on-device and shipped to a test harness); the policy
//! answers the same questions the native resolver does, without touching
//! any platform codec.

use crate::codec::{self, BitrateAdjustment, CodecResolver, Direction};
use crate::platform::{self, CodecCapabilities, CodecDescriptor, DeviceFingerprint};
use napi::bindgen_prelude::*;
use napi_derive::napi;

/// Device identity as reported by the platform build properties
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct DeviceProfile {
  /// Manufacturer (any case), e.g. "samsung"
  pub manufacturer: String,
  /// Model, e.g. "GT-I9300"
  pub model: String,
  /// Hardware/board name, e.g. "mt6589"
  pub hardware: String,
  /// Platform API level
  pub sdk_int: u32,
  /// Release string, e.g. "4.4.2"
  pub release: String,
}

/// Capabilities of a codec for one mime type
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct CodecTypeCapabilities {
  pub mime: String,
  /// Platform color format constants
  pub color_formats: Option<Vec<i32>>,
  /// Optional features, e.g. "adaptive-playback"
  pub features: Option<Vec<String>>,
}

/// One entry of the platform codec list
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct CodecInfo {
  pub name: String,
  pub is_encoder: bool,
  pub supported_types: Vec<String>,
  pub capabilities: Option<Vec<CodecTypeCapabilities>>,
}

/// Codec direction
#[napi(string_enum)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDirection {
  #[napi(value = "decoder")]
  Decoder,
  #[napi(value = "encoder")]
  Encoder,
}

/// Bitrate compensation required by a hardware encoder
#[napi(string_enum)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitrateAdjustmentType {
  /// No adjustment needed
  #[default]
  #[napi(value = "none")]
  None,
  /// Scale the bitrate by the real frame rate
  #[napi(value = "framerate")]
  Framerate,
}

/// Hardware encoder selected for a mime type
#[napi(object)]
#[derive(Debug, Clone)]
pub struct HardwareEncoder {
  pub codec_name: String,
  pub bitrate_adjustment: BitrateAdjustmentType,
}

impl From<CodecDirection> for Direction {
  fn from(direction: CodecDirection) -> Self {
    match direction {
      CodecDirection::Decoder => Direction::Decoder,
      CodecDirection::Encoder => Direction::Encoder,
    }
  }
}

impl From<BitrateAdjustment> for BitrateAdjustmentType {
  fn from(adjustment: BitrateAdjustment) -> Self {
    match adjustment {
      BitrateAdjustment::None => BitrateAdjustmentType::None,
      BitrateAdjustment::FramerateBased => BitrateAdjustmentType::Framerate,
    }
  }
}

impl From<DeviceProfile> for DeviceFingerprint {
  fn from(profile: DeviceProfile) -> Self {
    DeviceFingerprint::new(
      profile.manufacturer,
      profile.model,
      profile.hardware,
      profile.sdk_int,
      profile.release,
    )
  }
}

impl From<CodecInfo> for CodecDescriptor {
  fn from(info: CodecInfo) -> Self {
    let capabilities = info
      .capabilities
      .unwrap_or_default()
      .into_iter()
      .map(|caps| CodecCapabilities {
        mime: caps.mime,
        color_formats: caps.color_formats.unwrap_or_default(),
        features: caps.features.unwrap_or_default(),
      })
      .collect();

    CodecDescriptor {
      name: info.name,
      is_encoder: info.is_encoder,
      supported_types: info.supported_types,
      capabilities,
    }
  }
}

/// Immutable device + codec list snapshot standing in for the platform
#[derive(Debug, Clone)]
pub(crate) struct SnapshotPlatform {
  device: DeviceFingerprint,
  codecs: Vec<CodecDescriptor>,
}

impl platform::DeviceInfo for SnapshotPlatform {
  fn fingerprint(&self) -> DeviceFingerprint {
    self.device.clone()
  }
}

impl platform::CodecList for SnapshotPlatform {
  fn all_codec_infos(&self) -> Vec<CodecDescriptor> {
    self.codecs.clone()
  }

  fn legacy_codec_count(&self) -> usize {
    self.codecs.len()
  }

  fn legacy_codec_info_at(&self, index: usize) -> Option<CodecDescriptor> {
    self.codecs.get(index).cloned()
  }
}

/// Validate and convert a JavaScript snapshot
pub(crate) fn snapshot_platform(
  device: DeviceProfile,
  codecs: Vec<CodecInfo>,
) -> Result<SnapshotPlatform> {
  if let Some(index) = codecs.iter().position(|c| c.name.is_empty()) {
    return Err(Error::new(
      Status::InvalidArg,
      format!("codecs[{index}].name must not be empty"),
    ));
  }

  Ok(SnapshotPlatform {
    device: device.into(),
    codecs: codecs.into_iter().map(CodecDescriptor::from).collect(),
  })
}

/// CodecPolicy - answers codec selection questions for a device snapshot
///
/// Example:
/// ```javascript
/// const policy = new CodecPolicy(
///   {
///     manufacturer: 'samsung',
///     model: 'SM-G900F',
///     hardware: 'universal5422',
///     sdkInt: 21,
///     release: '5.0',
///   },
///   [{ name: 'OMX.Exynos.AVC.Encoder', isEncoder: true, supportedTypes: ['video/avc'] }],
/// );
///
/// policy.findHardwareEncoder('video/avc');
/// // => { codecName: 'OMX.Exynos.AVC.Encoder', bitrateAdjustment: 'framerate' }
/// ```
#[napi]
pub struct CodecPolicy {
  resolver: CodecResolver<SnapshotPlatform>,
}

#[napi]
impl CodecPolicy {
  /// Create a policy over a device profile and its codec list
  #[napi(constructor)]
  pub fn new(device: DeviceProfile, codecs: Vec<CodecInfo>) -> Result<Self> {
    Ok(Self {
      resolver: CodecResolver::new(snapshot_platform(device, codecs)?),
    })
  }

  /// Platform API level of the snapshot device
  #[napi(getter)]
  pub fn sdk_int(&self) -> u32 {
    self.resolver.platform().device.sdk_int
  }

  /// Whether decoding `mime` is allowed on this device
  #[napi]
  pub fn is_decoder_supported_for_device(&self, mime: String) -> bool {
    self.resolver.is_decoder_supported_for_device(&mime)
  }

  /// Whether a supported hardware encoder for `mime` exists on this device
  #[napi]
  pub fn is_encoder_supported_by_device(&self, mime: String) -> bool {
    self.resolver.is_encoder_supported_by_device(&mime)
  }

  /// Name of the first matching codec, or an empty string
  #[napi]
  pub fn get_default_codec_name(
    &self,
    mime: String,
    direction: CodecDirection,
    require_software: Option<bool>,
  ) -> String {
    self
      .resolver
      .default_codec_name(&mime, direction.into(), require_software.unwrap_or(false))
      .unwrap_or_default()
  }

  /// Color formats of the first encoder handling `mime`, or null
  #[napi]
  pub fn get_encoder_color_formats_for_mime(&self, mime: String) -> Option<Vec<i32>> {
    self.resolver.encoder_color_formats_for_mime(&mime)
  }

  /// The hardware encoder that would be used for `mime`, or null
  #[napi]
  pub fn find_hardware_encoder(&self, mime: String) -> Option<HardwareEncoder> {
    self
      .resolver
      .find_hardware_encoder(&mime)
      .map(|found| HardwareEncoder {
        codec_name: found.codec_name,
        bitrate_adjustment: found.rule.bitrate_adjustment.into(),
      })
  }

  /// Whether adaptive playback may be enabled for `mime` on this device
  #[napi]
  pub fn is_adaptive_playback_allowed(&self, mime: String) -> bool {
    codec::quirks::is_adaptive_playback_allowed(&mime, &self.resolver.platform().device)
  }

  /// Whether the device handles 'cbcs' pattern encryption
  #[napi]
  pub fn platform_supports_cbcs_encryption(&self) -> bool {
    self.resolver.platform_supports_cbcs_encryption()
  }
}

/// Check whether a codec name denotes a software implementation
#[napi(js_name = "isSoftwareCodec")]
pub fn is_software_codec_name(name: String) -> bool {
  codec::is_software_codec(&name)
}
