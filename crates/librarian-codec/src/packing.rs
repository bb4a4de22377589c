//! Little-endian multi-byte packing.

#[inline]
pub const fn pack_u16(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

#[inline]
pub const fn pack_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Packs the low 48 bits of `value`; higher bits are dropped.
pub const fn pack_u48(value: u64) -> [u8; 6] {
    let b = value.to_le_bytes();
    [b[0], b[1], b[2], b[3], b[4], b[5]]
}

#[inline]
pub const fn unpack_u16(bytes: [u8; 2]) -> u16 {
    bytes[0] as u16 | (bytes[1] as u16) << 8
}

#[inline]
pub const fn unpack_u32(bytes: [u8; 4]) -> u32 {
    bytes[0] as u32 | (bytes[1] as u32) << 8 | (bytes[2] as u32) << 16 | (bytes[3] as u32) << 24
}

pub const fn unpack_u48(bytes: [u8; 6]) -> u64 {
    let mut value = 0u64;
    let mut i = 0;
    while i < 6 {
        value |= (bytes[i] as u64) << (8 * i);
        i += 1;
    }
    value
}
