use super::*;

const EPS: f64 = 1e-9;

fn timed(names: &[(&str, f64)]) -> Vec<TimedImage> {
    names
        .iter()
        .map(|(n, d)| TimedImage {
            image: PathBuf::from(n),
            requested: *d,
        })
        .collect()
}

#[test]
fn last_clip_absorbs_the_remainder() {
    assert_eq!(reconcile(&[3.0, 3.0], 5.0).unwrap(), vec![3.0, 2.0]);
    assert_eq!(reconcile(&[1.0, 2.0, 1.0], 10.0).unwrap(), vec![1.0, 2.0, 7.0]);
}

#[test]
fn single_clip_takes_the_whole_limit() {
    assert_eq!(reconcile(&[1.0], 10.0).unwrap(), vec![10.0]);
    assert_eq!(reconcile(&[99.0], 10.0).unwrap(), vec![10.0]);
}

#[test]
fn sums_exactly_and_keeps_prefix() {
    let cases: &[(&[f64], f64)] = &[
        (&[0.1, 0.2, 0.3], 1.0),
        (&[2.5, 4.25, 1.0, 1.0], 12.345),
        (&[1.0 / 3.0, 1.0 / 3.0, 5.0], 1.0),
        (&[7.0, 0.5], 7.5),
    ];
    for (durations, limit) in cases {
        let out = reconcile(durations, *limit).unwrap();
        assert_eq!(out.len(), durations.len());
        assert_eq!(&out[..out.len() - 1], &durations[..durations.len() - 1]);
        let sum: f64 = out.iter().sum();
        assert!((sum - limit).abs() < EPS, "sum {sum} != {limit}");
    }
}

#[test]
fn prefix_over_limit_is_fatal() {
    let err = reconcile(&[4.0, 4.0, 1.0], 7.5).unwrap_err();
    match err {
        ReelError::DurationLimitExceeded { requested, limit } => {
            assert_eq!(requested, 8.0);
            assert_eq!(limit, 7.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn prefix_equal_to_limit_leaves_zero_for_the_last() {
    assert_eq!(reconcile(&[2.0, 3.0, 4.0], 5.0).unwrap(), vec![2.0, 3.0, 0.0]);
}

#[test]
fn inexact_prefix_summing_to_limit_is_accepted() {
    // 0.1 + 0.2 == 0.30000000000000004 in binary floating point.
    let out = reconcile(&[0.1, 0.2, 5.0], 0.3).unwrap();
    assert_eq!(&out[..2], &[0.1, 0.2]);
    assert_eq!(out[2], 0.0);

    let out = reconcile(&[1.1, 2.2, 4.0], 3.3).unwrap();
    assert_eq!(&out[..2], &[1.1, 2.2]);
    assert!(out[2] >= 0.0 && out[2] < EPS);

    assert!(matches!(
        reconcile(&[0.1, 0.2001, 1.0], 0.3),
        Err(ReelError::DurationLimitExceeded { .. })
    ));
}

#[test]
fn rejects_degenerate_inputs() {
    assert!(matches!(reconcile(&[], 5.0), Err(ReelError::Validation(_))));
    assert!(matches!(reconcile(&[1.0], 0.0), Err(ReelError::Validation(_))));
    assert!(matches!(
        reconcile(&[1.0], f64::NAN),
        Err(ReelError::Validation(_))
    ));
    assert!(matches!(
        reconcile(&[1.0, -2.0], 5.0),
        Err(ReelError::Validation(_))
    ));
}

#[test]
fn schedule_preserves_order_and_paths() {
    let images = timed(&[("a.png", 3.0), ("b.png", 3.0)]);
    let sched = ReconciledSchedule::build(&images, 5.0).unwrap();
    let clips = sched.clips();
    assert_eq!(clips.len(), 2);
    assert_eq!(clips[0].image, PathBuf::from("a.png"));
    assert_eq!(clips[1].image, PathBuf::from("b.png"));
    assert_eq!(clips[0].duration, 3.0);
    assert_eq!(clips[1].duration, 2.0);
    assert_eq!(sched.total_secs(), 5.0);
}

#[test]
fn frame_counts_add_up_without_drift() {
    let images = timed(&[("a", 0.7), ("b", 0.7), ("c", 0.7), ("d", 1.0)]);
    let sched = ReconciledSchedule::build(&images, 3.3).unwrap();
    let fps = Fps::new(2, 1).unwrap();
    let counts = sched.frame_counts(fps);
    assert_eq!(counts.len(), 4);
    assert_eq!(counts.iter().sum::<u64>(), 7);
    // boundaries at 0.7, 1.4, 2.1 -> frames 1, 3, 4, then 7
    assert_eq!(counts, vec![1, 2, 1, 3]);
}

#[test]
fn frame_counts_match_scenario_durations() {
    let images = timed(&[("hello.png", 3.0), ("world.png", 3.0)]);
    let sched = ReconciledSchedule::build(&images, 5.0).unwrap();
    let counts = sched.frame_counts(Fps::new(2, 1).unwrap());
    assert_eq!(counts, vec![6, 4]);
}
