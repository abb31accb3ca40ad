//! Plain data types exchanged with the platform layer

/// Capability feature name for dynamic resolution changes
pub const FEATURE_ADAPTIVE_PLAYBACK: &str = "adaptive-playback";

/// Capabilities a codec advertises for one of its mime types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecCapabilities {
  /// Mime type these capabilities describe
  pub mime: String,
  /// Supported color formats (platform color format constants)
  pub color_formats: Vec<i32>,
  /// Supported optional features (e.g. "adaptive-playback")
  pub features: Vec<String>,
}

impl CodecCapabilities {
  pub fn new(mime: impl Into<String>) -> Self {
    Self {
      mime: mime.into(),
      ..Self::default()
    }
  }

  pub fn with_color_formats(mut self, color_formats: impl Into<Vec<i32>>) -> Self {
    self.color_formats = color_formats.into();
    self
  }

  pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
    self.features.push(feature.into());
    self
  }

  pub fn is_feature_supported(&self, feature: &str) -> bool {
    self.features.iter().any(|f| f == feature)
  }
}

/// Read-only description of one platform codec implementation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecDescriptor {
  /// Implementation name, e.g. "OMX.qcom.video.decoder.avc"
  pub name: String,
  /// Whether this implementation encodes
  pub is_encoder: bool,
  /// Mime types handled by this implementation, as declared by the platform
  pub supported_types: Vec<String>,
  /// Per-mime capabilities
  pub capabilities: Vec<CodecCapabilities>,
}

impl CodecDescriptor {
  pub fn new(name: impl Into<String>, is_encoder: bool) -> Self {
    Self {
      name: name.into(),
      is_encoder,
      ..Self::default()
    }
  }

  /// Declare a supported mime type with no capability details
  pub fn with_type(mut self, mime: impl Into<String>) -> Self {
    self.supported_types.push(mime.into());
    self
  }

  /// Declare a supported mime type together with its capabilities
  pub fn with_capabilities(mut self, capabilities: CodecCapabilities) -> Self {
    if self.supports_type(&capabilities.mime).is_none() {
      self.supported_types.push(capabilities.mime.clone());
    }
    self.capabilities.push(capabilities);
    self
  }

  /// The declared type matching `mime` (case-insensitive), if any
  pub fn supports_type(&self, mime: &str) -> Option<&str> {
    self.supported_types
      .iter()
      .find(|t| t.eq_ignore_ascii_case(mime))
      .map(String::as_str)
  }

  /// Capabilities for `mime` (case-insensitive), if the codec reports any
  pub fn capabilities_for_type(&self, mime: &str) -> Option<&CodecCapabilities> {
    self.capabilities
      .iter()
      .find(|c| c.mime.eq_ignore_ascii_case(mime))
  }
}

/// Identity of the running device and platform release
///
/// Read fresh from [`super::DeviceInfo`] for every operation and passed by
/// reference into each policy check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFingerprint {
  /// Device manufacturer as reported by the platform (any case)
  pub manufacturer: String,
  /// Device model, e.g. "GT-I9300"
  pub model: String,
  /// Hardware/board name, e.g. "mt6589"
  pub hardware: String,
  /// Platform API level
  pub sdk_int: u32,
  /// User-visible release string, e.g. "4.4.2"
  pub release: String,
}

impl DeviceFingerprint {
  pub fn new(
    manufacturer: impl Into<String>,
    model: impl Into<String>,
    hardware: impl Into<String>,
    sdk_int: u32,
    release: impl Into<String>,
  ) -> Self {
    Self {
      manufacturer: manufacturer.into(),
      model: model.into(),
      hardware: hardware.into(),
      sdk_int,
      release: release.into(),
    }
  }

  /// Whether the manufacturer matches `name`, ignoring case
  pub fn is_manufacturer(&self, name: &str) -> bool {
    self.manufacturer.to_lowercase() == name
  }
}

/// Pattern (cbcs-style) encryption block counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncryptionPattern {
  /// Number of encrypted 16-byte blocks per pattern run
  pub encrypt_blocks: u32,
  /// Number of clear 16-byte blocks per pattern run
  pub skip_blocks: u32,
}
