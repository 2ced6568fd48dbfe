//! # Thermal Capability
//!
//! Constant body temperature, declared per species. The temperature is an
//! associated constant rather than a field: it is a fact about the kind,
//! not about any one individual, and dispatch wants it at compile time.

/// An animal that regulates its body temperature to a constant.
pub trait Homeothermic {
    /// Regulated body temperature in degrees Celsius.
    const BODY_TEMPERATURE: i32;

    /// The regulated temperature, as a value.
    fn temperature(&self) -> i32 {
        Self::BODY_TEMPERATURE
    }
}
