use crate::foundation::core::Rgba8;
use crate::foundation::error::{ReelError, ReelResult};

/// Parse a color as written in project configs.
///
/// Accepted forms: a small set of named colors, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)` where `a` is in `0.0..=1.0`.
pub fn parse_color(s: &str) -> ReelResult<Rgba8> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(args, true);
    }
    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(args, false);
    }
    named(&lower).ok_or_else(|| ReelError::validation(format!("unknown color \"{s}\"")))
}

fn named(name: &str) -> Option<Rgba8> {
    let c = match name {
        "white" => Rgba8::opaque(255, 255, 255),
        "black" => Rgba8::opaque(0, 0, 0),
        "red" => Rgba8::opaque(255, 0, 0),
        "green" => Rgba8::opaque(0, 128, 0),
        "blue" => Rgba8::opaque(0, 0, 255),
        "yellow" => Rgba8::opaque(255, 255, 0),
        "navy" => Rgba8::opaque(0, 0, 128),
        "gray" | "grey" => Rgba8::opaque(128, 128, 128),
        "transparent" => Rgba8 {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        },
        _ => return None,
    };
    Some(c)
}

fn parse_hex(s: &str) -> ReelResult<Rgba8> {
    fn hex_byte(pair: &str) -> ReelResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| ReelError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(ReelError::validation("hex color must be ASCII"));
    }
    match s.len() {
        6 => Ok(Rgba8::opaque(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8 {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: hex_byte(&s[6..8])?,
        }),
        _ => Err(ReelError::validation(
            "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

fn parse_functional(args: &str, with_alpha: bool) -> ReelResult<Rgba8> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ReelError::validation(format!(
            "color function expects {expected} components, got {}",
            parts.len()
        )));
    }

    let channel = |p: &str| -> ReelResult<u8> {
        p.parse::<u8>()
            .map_err(|_| ReelError::validation(format!("color channel \"{p}\" is not in 0..=255")))
    };
    let a = if with_alpha {
        let a: f64 = parts[3]
            .parse()
            .map_err(|_| ReelError::validation(format!("invalid alpha \"{}\"", parts[3])))?;
        if !(0.0..=1.0).contains(&a) {
            return Err(ReelError::validation("alpha must be within 0.0..=1.0"));
        }
        (a * 255.0).round() as u8
    } else {
        255
    };

    Ok(Rgba8 {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a,
    })
}
