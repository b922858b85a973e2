//! Byte-level wire echo for debugging.
//!
//! When the `defmt` feature is enabled and the client's debug flag is set,
//! every byte sent or received is mirrored to the defmt trace channel.
//! Without the feature these calls compile to nothing.

/// Mirror a transmitted byte.
#[cfg(feature = "defmt")]
pub(crate) fn tx(byte: u8) {
    defmt::trace!("tx {=u8:x}", byte);
}

#[cfg(not(feature = "defmt"))]
pub(crate) fn tx(_byte: u8) {}

/// Mirror a received byte.
#[cfg(feature = "defmt")]
pub(crate) fn rx(byte: u8) {
    defmt::trace!("rx {=u8:x}", byte);
}

#[cfg(not(feature = "defmt"))]
pub(crate) fn rx(_byte: u8) {}
