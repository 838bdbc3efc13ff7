use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn defaults_derive_the_stock_canvas() {
    let s = RenderSettings::default();
    let c = s.canvas().unwrap();
    assert_eq!((c.width, c.height), (1024, 720));
    assert_eq!(c.background, Rgba8::opaque(0, 0, 162));
    assert_eq!(c.text_color, Rgba8::opaque(255, 255, 255));
    assert_eq!((c.padding_x, c.padding_y), (10, 10));
    assert_eq!(c.row_pitch, 57);
    assert_eq!(s.fps().unwrap(), Fps { num: 2, den: 1 });
    assert_eq!(s.font_spec().size, 55);
}

#[test]
fn kebab_case_keys_override_defaults() {
    let s: RenderSettings = serde_yaml::from_str(
        "font-size: 40\nimage-width: 640\nbackground-color: '#102030'\ncenter-vertically: true\n",
    )
    .unwrap();
    assert_eq!(s.font_size, 40);
    assert_eq!(s.image_width, 640);
    assert_eq!(s.image_height, 720);
    assert!(s.center_vertically);
    let c = s.canvas().unwrap();
    assert_eq!(c.background, Rgba8::opaque(0x10, 0x20, 0x30));
    assert_eq!(c.row_pitch, 42);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = serde_yaml::from_str::<RenderSettings>("font_size: 40\n").unwrap_err();
    assert!(err.to_string().contains("font_size"));
}

#[test]
fn invalid_values_fail_canvas_derivation() {
    let s = RenderSettings {
        image_width: 0,
        ..RenderSettings::default()
    };
    assert!(s.canvas().is_err());

    let s = RenderSettings {
        text_color: "chartreuse-ish".to_owned(),
        ..RenderSettings::default()
    };
    assert!(s.canvas().is_err());

    let s = RenderSettings {
        video_fps: 0,
        ..RenderSettings::default()
    };
    assert!(s.fps().is_err());
}
