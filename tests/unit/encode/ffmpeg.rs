use super::*;
use crate::encode::sink::AudioInputConfig;

fn cfg(width: u32, height: u32, audio: Option<&str>) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(2, 1).unwrap(),
        audio: audio.map(|p| AudioInputConfig {
            path: PathBuf::from(p),
        }),
    }
}

fn args_of(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn flatten_alpha_0_returns_bg() {
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &[0, 0, 0, 0], true, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
    flatten_to_opaque_rgba8(&mut dst, &[200, 200, 200, 0], false, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 4], false, [0, 0, 0, 255]).is_err());
}

#[test]
fn command_muxes_audio_as_aac() {
    let sink = FfmpegSink::new(FfmpegSinkOpts::new("out/movie.mp4"));
    let args = args_of(&sink.build_command(&cfg(64, 48, Some("narration.mp3"))));
    let joined = args.join(" ");
    assert!(joined.contains("-s 64x48"));
    assert!(joined.contains("-i pipe:0 -i narration.mp3"));
    assert!(joined.contains("-c:v libx264 -preset faster -pix_fmt yuv420p"));
    assert!(joined.contains("-c:a aac"));
    assert!(joined.contains("-r 2/1"));
    assert_eq!(args.last().map(String::as_str), Some("out/movie.mp4"));
}

#[test]
fn command_without_audio_disables_audio_stream() {
    let sink = FfmpegSink::new(FfmpegSinkOpts::new("silent.mp4"));
    let args = args_of(&sink.build_command(&cfg(64, 48, None)));
    assert!(args.iter().any(|a| a == "-an"));
    assert!(!args.iter().any(|a| a == "aac"));
}

#[test]
fn begin_rejects_odd_sizes_and_missing_audio() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    assert!(matches!(
        sink.begin(cfg(63, 48, None)),
        Err(ReelError::Validation(_))
    ));
    assert!(matches!(
        sink.begin(cfg(64, 48, Some("no/such/audio.mp3"))),
        Err(ReelError::MissingAsset(_))
    ));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: false,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
}

#[test]
fn flatten_honors_the_alpha_convention() {
    let bg = [200, 200, 200, 255];
    let mut dst = vec![0u8; 4];
    // Premultiplied: source channels already carry their alpha.
    flatten_to_opaque_rgba8(&mut dst, &[64, 0, 0, 128], true, bg).unwrap();
    assert_eq!(dst, vec![164, 100, 100, 255]);
    // Straight: the same bytes blend differently.
    flatten_to_opaque_rgba8(&mut dst, &[64, 0, 0, 128], false, bg).unwrap();
    assert_eq!(dst, vec![132, 100, 100, 255]);
}
