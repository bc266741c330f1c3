use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn half_floor_rounds_toward_negative_infinity() {
    assert_eq!(half_floor(177), 88);
    assert_eq!(half_floor(120), 60);
    assert_eq!(half_floor(-1), -1);
    assert_eq!(half_floor(-3), -2);
}

#[test]
fn over_opaque_handles_alpha_extremes() {
    let dst = [10, 20, 30];
    assert_eq!(over_opaque(dst, [200, 200, 200, 0]), dst);
    assert_eq!(over_opaque(dst, [1, 2, 3, 255]), [1, 2, 3]);
}

#[test]
fn over_opaque_half_alpha_mixes() {
    let out = over_opaque([255, 255, 255], [0, 0, 0, 128]);
    assert_eq!(out, [127, 127, 127]);
}
