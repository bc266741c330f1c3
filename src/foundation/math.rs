pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Floor division by two. Placement offsets are tuned against this rounding, toward the top-left.
pub(crate) fn half_floor(v: i64) -> i64 {
    v.div_euclid(2)
}

/// Source-over of one premultiplied RGBA8 pixel onto an opaque RGB8 pixel.
pub(crate) fn over_opaque(dst: [u8; 3], src_premul: [u8; 4]) -> [u8; 3] {
    let a = src_premul[3];
    if a == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(a);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = src_premul[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
