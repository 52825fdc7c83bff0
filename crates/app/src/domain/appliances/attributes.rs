//! Enumerated appliance attributes and their integer codes.
//!
//! Codes are what storage and the transport layer carry. `code` is total;
//! decoding is fallible and never falls back to a default variant.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// An integer code that does not map to any known variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCode {
    #[error("the voltage code is null")]
    MissingVoltage,

    #[error("invalid voltage code: {0}")]
    Voltage(i16),

    #[error("invalid classification code: {0}")]
    Classification(i16),
}

/// Supply voltage of an appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voltage {
    Monovoltage127,
    Monovoltage230,
    Bivoltage,
}

impl Voltage {
    pub const ALL: [Self; 3] = [Self::Monovoltage127, Self::Monovoltage230, Self::Bivoltage];

    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Monovoltage127 => 0,
            Self::Monovoltage230 => 1,
            Self::Bivoltage => 2,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Monovoltage127 => "127V",
            Self::Monovoltage230 => "230V",
            Self::Bivoltage => "127V/230V",
        }
    }

    /// Decodes a voltage code. Voltage is mandatory, so a missing code fails.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCode`] when the code is absent or unmapped.
    pub fn decode(code: Option<i16>) -> Result<Self, InvalidCode> {
        code.ok_or(InvalidCode::MissingVoltage)
            .and_then(Self::try_from)
    }
}

impl TryFrom<i16> for Voltage {
    type Error = InvalidCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|voltage| voltage.code() == code)
            .ok_or(InvalidCode::Voltage(code))
    }
}

impl From<Voltage> for i16 {
    fn from(value: Voltage) -> Self {
        value.code()
    }
}

impl Display for Voltage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.description())
    }
}

/// Energy efficiency class, A (best) through G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Classification {
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::E => 4,
            Self::F => 5,
            Self::G => 6,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::A => "Efficiency class: A",
            Self::B => "Efficiency class: B",
            Self::C => "Efficiency class: C",
            Self::D => "Efficiency class: D",
            Self::E => "Efficiency class: E",
            Self::F => "Efficiency class: F",
            Self::G => "Efficiency class: G",
        }
    }

    /// Decodes an optional classification code. A missing code means the
    /// classification is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCode`] when a code is present but unmapped.
    pub fn decode(code: Option<i16>) -> Result<Option<Self>, InvalidCode> {
        code.map(Self::try_from).transpose()
    }
}

impl TryFrom<i16> for Classification {
    type Error = InvalidCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|classification| classification.code() == code)
            .ok_or(InvalidCode::Classification(code))
    }
}

impl From<Classification> for i16 {
    fn from(value: Classification) -> Self {
        value.code()
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.description())
    }
}

/// Decodes both enumerated attributes of an appliance in one step.
///
/// # Errors
///
/// Returns the first [`InvalidCode`] encountered, voltage first.
pub fn decode_attributes(
    voltage: Option<i16>,
    classification: Option<i16>,
) -> Result<(Voltage, Option<Classification>), InvalidCode> {
    Ok((Voltage::decode(voltage)?, Classification::decode(classification)?))
}
