//! Layout table macros.
//!
//! - `field!` - numeric field bound to a record place
//! - `name!` - 12-character name field bound to a `String` place
//!
//! ```ignore
//! field!(Program; 24 => PM50; master_pan.stereo_pan)
//! name!(KeyGroup; 34; zones[0].sample_name)
//! ```

macro_rules! field {
    ($record:ty; $offset:expr => $codec:expr; $($place:tt)+) => {
        $crate::layout::Field::<$record>::numeric(
            $offset,
            stringify!($($place)+),
            $codec,
            |r: &$record| ::librarian_codec::Logical::to_logical(r.$($place)+),
            |r: &mut $record, v: f64| r.$($place)+ = ::librarian_codec::Logical::from_logical(v),
        )
    };
}

macro_rules! name {
    ($record:ty; $offset:expr; $($place:tt)+) => {
        $crate::layout::Field::<$record>::name(
            $offset,
            stringify!($($place)+),
            |r: &$record| r.$($place)+.as_str(),
            |r: &mut $record, v: String| r.$($place)+ = v,
        )
    };
}
