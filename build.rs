//! Build script for mediacodec-compat
//!
//! Only the NAPI-RS setup is needed: the platform codec layer is reached
//! through trait objects supplied by the embedder, so nothing is linked here.

fn main() {
  napi_build::setup();

  println!("cargo:rerun-if-changed=build.rs");
}
