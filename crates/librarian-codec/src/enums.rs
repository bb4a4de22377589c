//! Closed enumerations stored as single raw bytes.
//!
//! Decoding is total: a byte the hardware does not define resolves to the
//! documented fallback member. Encoding is exact (`to_byte`), and callers that
//! accept raw numbers check them against [`ByteEnum::COUNT`] first.

use serde::{Deserialize, Serialize};

use crate::field::Logical;

/// A header enumeration with raw values `0..COUNT`.
pub trait ByteEnum: Sized + Copy {
    /// Number of raw values defined for this enumeration.
    const COUNT: u8;

    fn from_byte(byte: u8) -> Self;

    fn to_byte(self) -> u8;
}

macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
        unmapped => $fallback:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl ByteEnum for $name {
            const COUNT: u8 = [$($value),+].len() as u8;

            fn from_byte(byte: u8) -> Self {
                match byte {
                    $($value => $name::$variant,)+
                    _ => $name::$fallback,
                }
            }

            #[inline]
            fn to_byte(self) -> u8 {
                self as u8
            }
        }

        impl From<u8> for $name {
            fn from(byte: u8) -> Self {
                <$name as ByteEnum>::from_byte(byte)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.to_byte()
            }
        }

        impl Logical for $name {
            fn to_logical(self) -> f64 {
                self.to_byte() as f64
            }

            fn from_logical(value: f64) -> Self {
                <$name as ByteEnum>::from_byte(value as u8)
            }
        }
    };
}

byte_enum! {
    /// LFO waveform.
    pub enum Waveform {
        #[default]
        Triangle = 0,
        Sawtooth = 1,
        Square = 2,
        Random = 3,
    }
    unmapped => Triangle;
}

byte_enum! {
    /// Zone playback mode in a key group.
    ///
    /// `PlayToSampleEnd` has no raw value in 0..=3; it is what any other
    /// byte decodes to, and it is written back as 4.
    pub enum ZonePlayback {
        #[default]
        AsSample = 0,
        LoopInRelease = 1,
        LoopUntilRelease = 2,
        NoLoops = 3,
        PlayToSampleEnd = 4,
    }
    unmapped => PlayToSampleEnd;
}

byte_enum! {
    /// Sample header playback type.
    pub enum PlaybackType {
        #[default]
        LoopInRelease = 0,
        LoopUntilRelease = 1,
        NoLooping = 2,
        PlayToSampleEnd = 3,
    }
    unmapped => LoopInRelease;
}

byte_enum! {
    pub enum FilterType {
        #[default]
        LowPass = 0,
        BandPass = 1,
        HighPass = 2,
        Eq = 3,
    }
    unmapped => LowPass;
}

byte_enum! {
    /// Modulation input source.
    pub enum ModulationSource {
        #[default]
        NoSource = 0,
        Modwheel = 1,
        Bend = 2,
        Pressure = 3,
        External = 4,
        NoteOnVelocity = 5,
        Key = 6,
        Lfo1 = 7,
        Lfo2 = 8,
        Env1 = 9,
        Env2 = 10,
        NotModwheel = 11,
        NotBend = 12,
        NotExternal = 13,
        Env3 = 14,
    }
    unmapped => NoSource;
}

byte_enum! {
    pub enum BendMode {
        #[default]
        Normal = 0,
        Held = 1,
    }
    unmapped => Held;
}

byte_enum! {
    /// Zone pitch tracking.
    pub enum Pitch {
        #[default]
        Track = 0,
        Const = 1,
    }
    unmapped => Const;
}

byte_enum! {
    /// Voice reassignment policy.
    pub enum Reassignment {
        #[default]
        Oldest = 0,
        Quietest = 1,
    }
    unmapped => Quietest;
}

byte_enum! {
    pub enum PortamentoType {
        #[default]
        Rate = 0,
        Time = 1,
    }
    unmapped => Time;
}
