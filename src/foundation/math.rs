pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Blend a straight-alpha channel over an opaque background channel.
pub(crate) fn over_opaque(src: u8, alpha: u8, bg: u8) -> u8 {
    let a = u16::from(alpha);
    let v = mul_div255_u16(u16::from(src), a) + mul_div255_u16(u16::from(bg), 255 - a);
    v.min(255) as u8
}

/// Undo premultiplication for one channel.
pub(crate) fn unpremultiply(c: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(alpha) / 2) / u32::from(alpha);
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
