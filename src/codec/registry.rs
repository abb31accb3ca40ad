//! Codec registry adapter
//!
//! Wraps the platform enumeration primitive behind one snapshot. The
//! enumeration call is chosen once, at construction, from the platform
//! version; callers only ever see `count()` / `descriptor_at()`.

use crate::platform::{version_codes, CodecDescriptor, CodecList};

use super::{classify::is_software_codec, Direction};

/// Which platform enumeration call populated a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStrategy {
  /// Single snapshot call covering all codecs (API 21 and later)
  AllCodecs,
  /// Legacy count + per-index calls
  Legacy,
}

impl ListStrategy {
  pub fn for_sdk(sdk_int: u32) -> Self {
    if sdk_int >= version_codes::LOLLIPOP {
      ListStrategy::AllCodecs
    } else {
      ListStrategy::Legacy
    }
  }
}

/// One enumeration snapshot of the platform codec list
#[derive(Debug, Clone)]
pub struct CodecRegistry {
  strategy: ListStrategy,
  codecs: Vec<CodecDescriptor>,
}

impl CodecRegistry {
  /// Enumerate `list` using the call appropriate for `sdk_int`
  pub fn new<L: CodecList + ?Sized>(list: &L, sdk_int: u32) -> Self {
    let strategy = ListStrategy::for_sdk(sdk_int);
    let codecs = match strategy {
      ListStrategy::AllCodecs => list.all_codec_infos(),
      // Read every index now so indices stay stable for the whole
      // resolution.
      ListStrategy::Legacy => (0..list.legacy_codec_count())
        .filter_map(|index| list.legacy_codec_info_at(index))
        .collect(),
    };

    Self { strategy, codecs }
  }

  pub fn strategy(&self) -> ListStrategy {
    self.strategy
  }

  #[inline]
  pub fn count(&self) -> usize {
    self.codecs.len()
  }

  #[inline]
  pub fn descriptor_at(&self, index: usize) -> Option<&CodecDescriptor> {
    self.codecs.get(index)
  }

  pub fn iter(&self) -> impl Iterator<Item = &CodecDescriptor> {
    self.codecs.iter()
  }

  /// First codec of `direction` declaring `mime`.
  ///
  /// When `require_software` is set only software implementations are
  /// considered; otherwise both kinds are.
  pub fn find_codec(
    &self,
    mime: &str,
    direction: Direction,
    require_software: bool,
  ) -> Option<&CodecDescriptor> {
    self.iter().find(|info| {
      Direction::of(info.is_encoder) == direction
        && (!require_software || is_software_codec(&info.name))
        && info.supports_type(mime).is_some()
    })
  }

  /// Color formats of the first encoder declaring `mime`
  pub fn encoder_color_formats(&self, mime: &str) -> Option<Vec<i32>> {
    self.iter()
      .filter(|info| info.is_encoder)
      .find_map(|info| {
        let declared = info.supports_type(mime)?;
        Some(
          info.capabilities_for_type(declared)
            .map(|caps| caps.color_formats.clone())
            .unwrap_or_default(),
        )
      })
  }
}
