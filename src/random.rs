use crate::aliases::RandGen;
use rand::SeedableRng;

/// Bob Jenkins' 32-bit integer avalanche hash.
pub fn hash32(a: u32) -> u32 {
    let mut a = a;
    a = a.wrapping_add(0x7ed5_5d16).wrapping_add(a << 12);
    a = (a ^ 0xc761_c23c) ^ (a >> 19);
    a = a.wrapping_add(0x1656_67b1).wrapping_add(a << 5);
    a = a.wrapping_add(0xd3a2_646c) ^ (a << 9);
    a = a.wrapping_add(0xfd70_46c5).wrapping_add(a << 3);
    (a ^ 0xb55a_4f09) ^ (a >> 16)
}

/// Iterations must stay below this; the iteration fills bits 0..22 of the packed key.
pub const MAX_ITERATIONS: u32 = 1 << 22;
/// Depths must stay below this; the depth fills bits 22..31 of the packed key.
pub const MAX_DEPTH: u32 = 1 << 9;
/// Pixel indices must fit in 32 bits.
pub const MAX_PIXELS: u64 = 1 << 32;

/// Random source of one path segment at one bounce.
/// Distinct (iteration, pixel_index, depth) triples within the limits above
/// give independent streams, whichever thread ends up shading the segment.
pub fn segment_rng(iteration: u32, pixel_index: usize, depth: u32) -> RandGen {
    debug_assert!(iteration < MAX_ITERATIONS && depth < MAX_DEPTH);
    debug_assert!((pixel_index as u64) < MAX_PIXELS);
    let h = hash32((1 << 31) | (depth << 22) | iteration) ^ hash32(pixel_index as u32);
    RandGen::seed_from_u64(h as u64)
}
