//! Scripted in-memory platform used by unit tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::platform::{
  CodecDescriptor, CodecFactory, CodecList, CryptoInfo, DeviceFingerprint, DeviceInfo,
  EncryptionPattern, MediaCodecHandle, PlatformError, PlatformResult,
};

/// Platform call recorded by [`FakePlatform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  Fingerprint,
  AllCodecInfos,
  LegacyCount,
  LegacyInfoAt(usize),
  CreateByName(String),
  CreateDecoderByType(String),
  CreateEncoderByType(String),
  Release(String),
}

type Journal = Rc<RefCell<Vec<Call>>>;

pub struct FakePlatform {
  fingerprint: DeviceFingerprint,
  codecs: Vec<CodecDescriptor>,
  name_faults: HashMap<String, PlatformError>,
  type_faults: HashMap<String, PlatformError>,
  info_fault: Option<PlatformError>,
  release_fault: Option<PlatformError>,
  journal: Journal,
}

impl FakePlatform {
  pub fn new(fingerprint: DeviceFingerprint) -> Self {
    Self {
      fingerprint,
      codecs: Vec::new(),
      name_faults: HashMap::new(),
      type_faults: HashMap::new(),
      info_fault: None,
      release_fault: None,
      journal: Rc::default(),
    }
  }

  /// A generic, quirk-free device at the given API level
  pub fn fingerprint_at(sdk_int: u32) -> DeviceFingerprint {
    DeviceFingerprint::new("Google", "Pixel", "qcom", sdk_int, "test")
  }

  pub fn with_codecs(mut self, codecs: Vec<CodecDescriptor>) -> Self {
    self.codecs = codecs;
    self
  }

  /// Make construction by exact `name` fail
  pub fn fail_name(mut self, name: &str, error: PlatformError) -> Self {
    self.name_faults.insert(name.to_string(), error);
    self
  }

  /// Make construction by `mime` fail, for decoders and encoders alike
  pub fn fail_type(mut self, mime: &str, error: PlatformError) -> Self {
    self.type_faults.insert(mime.to_string(), error);
    self
  }

  /// Make `codec_info()` fail on every created codec
  pub fn fail_codec_info(mut self, error: PlatformError) -> Self {
    self.info_fault = Some(error);
    self
  }

  /// Make `release()` fail on every created codec
  pub fn fail_release(mut self, error: PlatformError) -> Self {
    self.release_fault = Some(error);
    self
  }

  pub fn calls(&self) -> Vec<Call> {
    self.journal.borrow().clone()
  }

  /// Whether any enumeration or construction call was made
  pub fn touched_codecs(&self) -> bool {
    self.journal
      .borrow()
      .iter()
      .any(|call| !matches!(call, Call::Fingerprint))
  }

  fn record(&self, call: Call) {
    self.journal.borrow_mut().push(call);
  }

  fn instantiate(&self, info: CodecDescriptor) -> FakeCodec {
    FakeCodec {
      info,
      info_fault: self.info_fault.clone(),
      release_fault: self.release_fault.clone(),
      journal: Rc::clone(&self.journal),
    }
  }

  fn create_by_type(&self, mime: &str, is_encoder: bool) -> PlatformResult<FakeCodec> {
    if let Some(error) = self.type_faults.get(mime) {
      return Err(error.clone());
    }
    self.codecs
      .iter()
      .find(|c| c.is_encoder == is_encoder && c.supports_type(mime).is_some())
      .cloned()
      .map(|info| self.instantiate(info))
      .ok_or_else(|| PlatformError::InvalidArgument(format!("no codec for {mime}")))
  }
}

impl DeviceInfo for FakePlatform {
  fn fingerprint(&self) -> DeviceFingerprint {
    self.record(Call::Fingerprint);
    self.fingerprint.clone()
  }
}

impl CodecList for FakePlatform {
  fn all_codec_infos(&self) -> Vec<CodecDescriptor> {
    self.record(Call::AllCodecInfos);
    self.codecs.clone()
  }

  fn legacy_codec_count(&self) -> usize {
    self.record(Call::LegacyCount);
    self.codecs.len()
  }

  fn legacy_codec_info_at(&self, index: usize) -> Option<CodecDescriptor> {
    self.record(Call::LegacyInfoAt(index));
    self.codecs.get(index).cloned()
  }
}

impl CodecFactory for FakePlatform {
  type Codec = FakeCodec;

  fn create_by_codec_name(&self, name: &str) -> PlatformResult<FakeCodec> {
    self.record(Call::CreateByName(name.to_string()));
    if let Some(error) = self.name_faults.get(name) {
      return Err(error.clone());
    }

    let base = name.strip_suffix(".secure").unwrap_or(name);
    self.codecs
      .iter()
      .find(|c| c.name == base)
      .map(|c| CodecDescriptor {
        name: name.to_string(),
        ..c.clone()
      })
      .map(|info| self.instantiate(info))
      .ok_or_else(|| PlatformError::NameNotFound(name.to_string()))
  }

  fn create_decoder_by_type(&self, mime: &str) -> PlatformResult<FakeCodec> {
    self.record(Call::CreateDecoderByType(mime.to_string()));
    self.create_by_type(mime, false)
  }

  fn create_encoder_by_type(&self, mime: &str) -> PlatformResult<FakeCodec> {
    self.record(Call::CreateEncoderByType(mime.to_string()));
    self.create_by_type(mime, true)
  }
}

#[derive(Debug)]
pub struct FakeCodec {
  info: CodecDescriptor,
  info_fault: Option<PlatformError>,
  release_fault: Option<PlatformError>,
  journal: Journal,
}

impl FakeCodec {
  pub fn name(&self) -> &str {
    &self.info.name
  }
}

impl MediaCodecHandle for FakeCodec {
  fn codec_info(&self) -> PlatformResult<CodecDescriptor> {
    match &self.info_fault {
      Some(error) => Err(error.clone()),
      None => Ok(self.info.clone()),
    }
  }

  fn release(&mut self) -> PlatformResult<()> {
    self.journal
      .borrow_mut()
      .push(Call::Release(self.info.name.clone()));
    match &self.release_fault {
      Some(error) => Err(error.clone()),
      None => Ok(()),
    }
  }
}

#[derive(Debug, Default)]
pub struct FakeCryptoInfo {
  pub pattern: Option<EncryptionPattern>,
}

impl CryptoInfo for FakeCryptoInfo {
  fn set_pattern(&mut self, pattern: EncryptionPattern) {
    self.pattern = Some(pattern);
  }
}
