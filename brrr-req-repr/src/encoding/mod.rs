//! Canonical encodings of tree fragments.

mod fingerprint;

pub use fingerprint::{canonical_form, fingerprint, FINGERPRINT_MODULUS};
