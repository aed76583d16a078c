use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use toyunda_tools::adapters::ScriptedDurationProvider;
use toyunda_tools::*;

/// Test utilities for sidecar batches
mod test_utils {
    use super::*;

    /// Run one batch with scripted prompt answers
    pub fn run(
        videos: &[PathBuf],
        replies: Vec<DurationReply>,
    ) -> (BatchReport, ScriptedDurationProvider, String) {
        let mut interactor =
            SidecarInteractor::new(ScriptedDurationProvider::new(replies), Vec::new());
        let report = interactor.run_batch(videos);
        let (provider, status) = interactor.into_parts();
        (report, provider, String::from_utf8(status).unwrap())
    }

    /// Load the sidecar next to `video`
    pub fn load(video: &Path) -> SidecarRecord {
        let content = fs::read_to_string(video.with_extension("yaml")).unwrap();
        SidecarRecord::parse(&content).unwrap()
    }

    pub fn line(text: &str) -> DurationReply {
        DurationReply::Line(text.to_string())
    }
}

use test_utils::*;

#[test]
fn test_video_path_is_base_name() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("season/01")).unwrap();
    let videos = vec![
        dir.path().join("season/01/op.mp4"),
        dir.path().join("ed.final.avi"),
        dir.path().join("no_extension"),
    ];

    let (report, _, _) = run(&videos, vec![]);

    assert_eq!(report.updated_count(), 3);
    assert_eq!(load(&videos[0]).video_path(), Some("op.mp4"));
    assert_eq!(load(&videos[1]).video_path(), Some("ed.final.avi"));
    assert_eq!(
        SidecarRecord::parse(&fs::read_to_string(dir.path().join("no_extension.yaml")).unwrap())
            .unwrap()
            .video_path(),
        Some("no_extension")
    );
}

#[test]
fn test_unknown_fields_are_preserved() {
    let dir = TempDir::new().unwrap();
    let video = dir.path().join("song.mp4");
    fs::write(
        dir.path().join("song.yaml"),
        "video_path: \"old name.mp4\"\nlyr_path: song.lyr\nmeta_info:\n  song_name: Hare Hare Yukai\n  year: 2006\n",
    )
    .unwrap();

    let (report, _, _) = run(&[video.clone()], vec![line("5")]);
    assert_eq!(report.updated_count(), 1);

    let record = load(&video);
    assert_eq!(record.video_path(), Some("song.mp4"));
    assert_eq!(record.video_duration(), Some(5000));
    assert_eq!(
        record.get("lyr_path").and_then(|v| v.as_str()),
        Some("song.lyr")
    );
    let meta = record.get("meta_info").unwrap();
    assert_eq!(meta.get("song_name").and_then(|v| v.as_str()), Some("Hare Hare Yukai"));
    assert_eq!(meta.get("year").and_then(|v| v.as_u64()), Some(2006));

    let keys: Vec<&str> = record.keys().collect();
    assert_eq!(keys, vec!["video_path", "lyr_path", "meta_info", "video_duration"]);
}

#[test]
fn test_second_run_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let video = dir.path().join("clip.mkv");
    fs::write(dir.path().join("clip.yaml"), "author: someone\n").unwrap();

    run(&[video.clone()], vec![line("12.25")]);
    let first = fs::read_to_string(dir.path().join("clip.yaml")).unwrap();
    run(&[video.clone()], vec![line("12.25")]);
    let second = fs::read_to_string(dir.path().join("clip.yaml")).unwrap();

    assert_eq!(first, second);
    assert_eq!(load(&video).video_duration(), Some(12_250));
}

#[test]
fn test_end_of_input_without_prior_duration() {
    let dir = TempDir::new().unwrap();
    let video = dir.path().join("a.mp4");

    let (report, _, _) = run(&[video.clone()], vec![DurationReply::EndOfInput]);

    assert!(matches!(
        report.outcomes[0],
        FileOutcome::Updated { duration_ms: None, .. }
    ));
    assert!(!load(&video).contains_key("video_duration"));
}

#[test]
fn test_end_of_input_keeps_prior_duration() {
    let dir = TempDir::new().unwrap();
    let video = dir.path().join("a.mp4");
    fs::write(dir.path().join("a.yaml"), "video_path: a.mp4\nvideo_duration: 777\n").unwrap();

    run(&[video.clone()], vec![DurationReply::EndOfInput]);

    assert_eq!(load(&video).video_duration(), Some(777));
}

#[test]
fn test_fresh_sidecar_contains_only_known_fields() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.mp4");
    let empty = dir.path().join("empty.mp4");
    fs::write(dir.path().join("empty.yaml"), "").unwrap();

    run(&[missing.clone(), empty.clone()], vec![line("2.5")]);

    assert_eq!(
        fs::read_to_string(dir.path().join("missing.yaml")).unwrap(),
        "video_path: missing.mp4\nvideo_duration: 2500\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("empty.yaml")).unwrap(),
        "video_path: empty.mp4\n"
    );
}

#[test]
fn test_malformed_sidecar_does_not_stop_batch() {
    let dir = TempDir::new().unwrap();
    let videos = vec![
        dir.path().join("one.mp4"),
        dir.path().join("two.mp4"),
        dir.path().join("three.mp4"),
    ];
    let malformed = "video_path: [broken\n";
    fs::write(dir.path().join("two.yaml"), malformed).unwrap();

    let (report, provider, status) = run(&videos, vec![line("1"), line("3")]);

    assert!(!report.cancelled);
    assert_eq!(report.updated_count(), 2);
    assert_eq!(report.failed_count(), 1);
    match &report.outcomes[1] {
        FileOutcome::Failed { sidecar, error } => {
            assert_eq!(sidecar, &dir.path().join("two.yaml"));
            assert!(matches!(error, SidecarError::Parse { .. }));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert_eq!(load(&videos[0]).video_duration(), Some(1000));
    assert_eq!(load(&videos[2]).video_duration(), Some(3000));
    assert_eq!(
        fs::read_to_string(dir.path().join("two.yaml")).unwrap(),
        malformed
    );
    // Only files that parsed were prompted for.
    assert_eq!(provider.asked(), &[videos[0].clone(), videos[2].clone()]);
    assert!(status.contains("two.yaml"));
}

#[test]
fn test_invalid_duration_does_not_stop_batch() {
    let dir = TempDir::new().unwrap();
    let videos = vec![dir.path().join("x.mp4"), dir.path().join("y.mp4")];

    let (report, _, status) = run(&videos, vec![line("twelve"), line("0.5")]);

    assert!(matches!(
        &report.outcomes[0],
        FileOutcome::Failed {
            error: SidecarError::Conversion { .. },
            ..
        }
    ));
    assert_eq!(load(&videos[1]).video_duration(), Some(500));
    assert!(status.contains("invalid duration"));
}

#[test]
fn test_cancellation_aborts_remaining_files() {
    let dir = TempDir::new().unwrap();
    let videos = vec![
        dir.path().join("first.mp4"),
        dir.path().join("second.mp4"),
        dir.path().join("third.mp4"),
    ];
    let before = "video_path: second.mp4\nvideo_duration: 42\ncomment: untouched\n";
    fs::write(dir.path().join("second.yaml"), before).unwrap();

    let (report, provider, _) = run(
        &videos,
        vec![line("10"), DurationReply::Cancelled, line("30")],
    );

    assert!(report.cancelled);
    assert_eq!(report.outcomes.len(), 2);
    assert!(matches!(report.outcomes[1], FileOutcome::Cancelled { .. }));

    assert_eq!(load(&videos[0]).video_duration(), Some(10_000));
    assert_eq!(
        fs::read_to_string(dir.path().join("second.yaml")).unwrap(),
        before
    );
    assert!(!dir.path().join("third.yaml").exists());
    assert_eq!(provider.asked().len(), 2);
}

#[test]
fn test_empty_batch_does_nothing() {
    let (report, provider, status) = run(&[], vec![line("1")]);

    assert!(report.outcomes.is_empty());
    assert!(!report.cancelled);
    assert!(provider.asked().is_empty());
    assert!(status.is_empty());
}
