use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(0, 200), 0);
}

#[test]
fn over_opaque_endpoints() {
    assert_eq!(over_opaque(200, 255, 10), 200);
    assert_eq!(over_opaque(200, 0, 10), 10);
}

#[test]
fn unpremultiply_restores_straight_values() {
    assert_eq!(unpremultiply(0, 0), 0);
    assert_eq!(unpremultiply(100, 255), 100);
    assert_eq!(unpremultiply(64, 128), 128);
}
