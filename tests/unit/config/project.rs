use super::*;
use crate::foundation::error::ReelError;

fn doc(yaml: &str) -> Value {
    serde_yaml::from_str(yaml).unwrap()
}

fn cfg_path() -> PathBuf {
    PathBuf::from("data/sample/config.yaml")
}

#[test]
fn minimal_document_resolves_paths_against_config_dir() {
    let p = validate_document(
        &doc("audio: voice.mp3\nimages:\n  - text: Hello\n    duration: 3\n  - text: World\n    duration: 3.5\n    name: out/second.png\n"),
        &cfg_path(),
    )
    .unwrap();
    assert_eq!(p.audio_path, PathBuf::from("data/sample/voice.mp3"));
    assert_eq!(p.video_path, PathBuf::from("data/sample/movie.mp4"));
    assert_eq!(p.slides.len(), 2);
    assert_eq!(p.slides[0].text, "Hello");
    assert_eq!(p.slides[0].duration, 3.0);
    assert_eq!(
        p.slides[0].output,
        PathBuf::from("data/sample/text_image_1.png")
    );
    assert_eq!(p.slides[1].duration, 3.5);
    assert_eq!(p.slides[1].output, PathBuf::from("data/sample/out/second.png"));
    assert_eq!(p.settings, RenderSettings::default());
}

#[test]
fn missing_images_section_is_fatal() {
    let err = validate_document(&doc("audio: voice.mp3\n"), &cfg_path()).unwrap_err();
    assert_eq!(err.issues, vec![ConfigIssue::MissingSection("images")]);
    assert_eq!(err.path, cfg_path());
}

#[test]
fn every_violation_is_collected() {
    let err = validate_document(
        &doc("video: 5\nimages:\n  - text: ok\n  - duration: three\n  - text: x\n    duration: -1\n  - plain string\n"),
        &cfg_path(),
    )
    .unwrap_err();
    assert!(err.has(&ConfigIssue::MissingSection("audio")));
    assert!(err.has(&ConfigIssue::InvalidPath { key: "video" }));
    assert!(err.has(&ConfigIssue::MissingField {
        index: 0,
        field: "duration"
    }));
    assert!(err.has(&ConfigIssue::MissingField {
        index: 1,
        field: "text"
    }));
    assert!(err.has(&ConfigIssue::NonNumericDuration { index: 1 }));
    assert!(err.has(&ConfigIssue::NonPositiveDuration {
        index: 2,
        value: -1.0
    }));
    assert!(err.has(&ConfigIssue::ImageNotAMapping { index: 3 }));
    assert_eq!(err.issues.len(), 7);

    let msg = err.to_string();
    assert!(msg.contains("missing `audio` section"), "{msg}");
    assert!(msg.contains("images[1]: `duration` must be a number"), "{msg}");
}

#[test]
fn non_mapping_and_non_list_shapes_are_rejected() {
    let err = validate_document(&doc("- a\n- b\n"), &cfg_path()).unwrap_err();
    assert_eq!(err.issues, vec![ConfigIssue::NotAMapping]);

    let err = validate_document(&doc("audio: a.mp3\nimages: nope\n"), &cfg_path()).unwrap_err();
    assert_eq!(err.issues, vec![ConfigIssue::ImagesNotASequence]);
}

#[test]
fn canvas_section_is_parsed_and_checked() {
    let p = validate_document(
        &doc("audio: a.mp3\nimages: []\ncanvas:\n  font-size: 30\n  font-path: fonts/Custom.ttf\n  max-lines: 8\n"),
        &cfg_path(),
    )
    .unwrap();
    assert_eq!(p.settings.font_size, 30);
    assert_eq!(p.settings.max_lines, 8);
    assert_eq!(
        p.settings.font_path,
        PathBuf::from("data/sample/fonts/Custom.ttf")
    );

    let err = validate_document(
        &doc("audio: a.mp3\nimages: []\ncanvas:\n  font-colour: red\n"),
        &cfg_path(),
    )
    .unwrap_err();
    assert!(matches!(err.issues.as_slice(), [ConfigIssue::InvalidCanvas(_)]));

    let err = validate_document(
        &doc("audio: a.mp3\nimages: []\ncanvas:\n  text-color: not-a-color\n"),
        &cfg_path(),
    )
    .unwrap_err();
    assert!(matches!(err.issues.as_slice(), [ConfigIssue::InvalidCanvas(_)]));
}

#[test]
fn multi_line_text_is_kept_verbatim() {
    let p = validate_document(
        &doc("audio: a.mp3\nimages:\n  - text: |\n      first line\n      second line\n    duration: 2\n"),
        &cfg_path(),
    )
    .unwrap();
    assert_eq!(p.slides[0].text, "first line\nsecond line\n");
}

#[test]
fn load_project_reports_config_errors_and_syntax() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    std::fs::write(&path, "audio: voice.mp3\n").unwrap();
    match load_project(&path) {
        Err(ReelError::Config(e)) => {
            assert_eq!(e.issues, vec![ConfigIssue::MissingSection("images")])
        }
        other => panic!("unexpected result: {other:?}"),
    }

    std::fs::write(&path, "audio: [unclosed\n").unwrap();
    match load_project(&path) {
        Err(ReelError::Config(e)) => {
            assert!(matches!(e.issues.as_slice(), [ConfigIssue::Syntax(_)]))
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert!(matches!(
        load_project(&dir.path().join("absent.yaml")),
        Err(ReelError::Other(_))
    ));
}

#[test]
fn load_project_tolerates_missing_audio() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "audio: missing.mp3\nvideo: final.mp4\nimages:\n  - text: Hi\n    duration: 1\n",
    )
    .unwrap();
    let p = load_project(&path).unwrap();
    assert_eq!(p.audio_path, dir.path().join("missing.mp3"));
    assert_eq!(p.video_path, dir.path().join("final.mp4"));
    assert_eq!(p.slides[0].output, dir.path().join("text_image_1.png"));
}

#[test]
fn format_project_lists_paths_and_slides() {
    let p = validate_document(
        &doc("audio: voice.mp3\nimages:\n  - text: \"Hello\\nthere\"\n    duration: 3\n"),
        &cfg_path(),
    )
    .unwrap();
    let shown = format_project(&p);
    assert!(shown.contains("audio:  data/sample/voice.mp3"));
    assert!(shown.contains("video:  data/sample/movie.mp4"));
    assert!(shown.contains("slides: 1 (requested 3.00s)"));
    assert!(shown.contains("\"Hello\""));
    assert!(!shown.contains("there"));
}
