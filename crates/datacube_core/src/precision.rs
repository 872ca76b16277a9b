use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The scalar precisions accepted by the downstream compute unit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Precision {
    Int8,
    Int16,
    Fp16,
    Fp32,
}

/// Whether a scalar format holds signed integers or IEEE floats.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ScalarClass {
    SignedInt,
    Float,
}

/// A concrete scalar storage format: bit width plus number class.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScalarFormat {
    pub bits: u32,
    pub class: ScalarClass,
}

impl ScalarFormat {
    /// The storage width in whole bytes.
    #[inline]
    pub const fn bytes(&self) -> usize {
        (self.bits / 8) as usize
    }

    /// How many bytes `num_scalars` values occupy in this format.
    #[inline]
    pub const fn encoded_len(&self, num_scalars: usize) -> usize {
        num_scalars * self.bytes()
    }
}

/// The given precision tag is not one of the supported formats.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unsupported precision tag {tag:?}; expected one of int8, int16, fp16, fp32")]
pub struct InvalidPrecision {
    pub tag: String,
}

impl Precision {
    pub const ALL: [Precision; 4] = [
        Precision::Int8,
        Precision::Int16,
        Precision::Fp16,
        Precision::Fp32,
    ];

    /// Resolves this precision to its concrete storage format.
    #[inline]
    pub const fn format(self) -> ScalarFormat {
        match self {
            Precision::Int8 => ScalarFormat {
                bits: 8,
                class: ScalarClass::SignedInt,
            },
            Precision::Int16 => ScalarFormat {
                bits: 16,
                class: ScalarClass::SignedInt,
            },
            Precision::Fp16 => ScalarFormat {
                bits: 16,
                class: ScalarClass::Float,
            },
            Precision::Fp32 => ScalarFormat {
                bits: 32,
                class: ScalarClass::Float,
            },
        }
    }

    /// The canonical string tag for this precision.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Precision::Int8 => "int8",
            Precision::Int16 => "int16",
            Precision::Fp16 => "fp16",
            Precision::Fp32 => "fp32",
        }
    }

    /// Parses a precision tag. Unrecognized tags are a hard error, never a fallback format.
    pub fn from_tag(tag: &str) -> Result<Self, InvalidPrecision> {
        match tag {
            "int8" => Ok(Precision::Int8),
            "int16" => Ok(Precision::Int16),
            "fp16" => Ok(Precision::Fp16),
            "fp32" => Ok(Precision::Fp32),
            _ => Err(InvalidPrecision {
                tag: tag.to_owned(),
            }),
        }
    }
}

impl FromStr for Precision {
    type Err = InvalidPrecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
