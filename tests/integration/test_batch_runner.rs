// バッチランナーの振る舞いに関する統合テスト
use crate::fixtures::RecordingTransformer;
use image_resizer::{
    core::{ProcessingOptions, ProgressEvent, DEFAULT_QUALITY},
    engine::{run_batch, BatchRunner},
    services::NoOpProgressSink,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

fn files(count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| PathBuf::from(format!("/batch/file{i}.jpg")))
        .collect()
}

#[tokio::test]
async fn test_failure_at_index_two_of_five() {
    let inputs = files(5);
    let transformer = RecordingTransformer::new(800, 600).failing_on(&inputs[2]);
    let runner = BatchRunner::new(transformer);

    let results = runner
        .run(
            &inputs,
            &ProcessingOptions::pixels(Some(400), None),
            &NoOpProgressSink::new(),
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 5);
    for (i, (result, input)) in results.iter().zip(&inputs).enumerate() {
        assert_eq!(&result.file, input);
        assert_eq!(result.success, i != 2, "index {i}");
    }
    assert_eq!(results[2].error.as_deref(), Some("simulated encoder failure"));

    // 失敗後もファイル3,4,5が処理されている
    let attempted: Vec<PathBuf> = runner
        .transformer()
        .recorded_plans()
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(attempted, inputs);
}

#[tokio::test]
async fn test_progress_events_are_monotonic() {
    let events = Arc::new(Mutex::new(Vec::<ProgressEvent>::new()));
    let sink = {
        let events = Arc::clone(&events);
        move |event: &ProgressEvent| events.lock().unwrap().push(event.clone())
    };

    let transformer = RecordingTransformer::new(100, 100);
    run_batch(&files(7), &ProcessingOptions::default(), &transformer, &sink)
        .await
        .unwrap();

    let events = events.lock().unwrap();
    let currents: Vec<usize> = events.iter().map(|e| e.current).collect();
    assert_eq!(currents, (1..=7).collect::<Vec<_>>());
    assert!(events.iter().all(|e| e.total == 7));
    assert_eq!(events[0].filename, "file0.jpg");
}

#[tokio::test]
async fn test_every_plan_uses_default_quality() {
    let transformer = RecordingTransformer::new(640, 480);

    run_batch(
        &files(3),
        &ProcessingOptions::percentage(50.0),
        &transformer,
        &NoOpProgressSink::new(),
    )
    .await
    .unwrap();

    let plans = transformer.recorded_plans();
    assert_eq!(plans.len(), 3);
    for (_, plan) in plans {
        assert_eq!(plan.quality, DEFAULT_QUALITY);
        assert_eq!((plan.target_width, plan.target_height), (Some(320), Some(240)));
    }
}

#[tokio::test]
async fn test_uppercase_extension_is_folded() {
    let transformer = RecordingTransformer::new(10, 10);

    let results = run_batch(
        &[PathBuf::from("/batch/Photo.PNG")],
        &ProcessingOptions::default(),
        &transformer,
        &NoOpProgressSink::new(),
    )
    .await
    .unwrap();

    let (_, plan) = &transformer.recorded_plans()[0];
    assert_eq!(plan.output_format, "png");
    assert!(!plan.requests_resize());
    assert_eq!(
        results[0].output_path,
        Some(PathBuf::from("/batch/Photo-resized.png"))
    );
}

#[tokio::test]
async fn test_probe_failure_is_recorded_verbatim() {
    let transformer = RecordingTransformer::default();

    let results = run_batch(
        &files(2),
        &ProcessingOptions::default(),
        &transformer,
        &NoOpProgressSink::new(),
    )
    .await
    .unwrap();

    assert!(transformer.recorded_plans().is_empty());
    assert_eq!(
        results[0].error.as_deref(),
        Some("cannot read /batch/file0.jpg")
    );
}

#[tokio::test]
async fn test_separate_runners_are_independent() {
    let first = BatchRunner::new(RecordingTransformer::new(10, 10));
    let second = BatchRunner::new(RecordingTransformer::new(20, 20));
    let options = ProcessingOptions::default();
    let sink = NoOpProgressSink::new();

    let first_files = files(2);
    let second_files = files(3);
    let (a, b) = tokio::join!(
        first.run(&first_files, &options, &sink),
        second.run(&second_files, &options, &sink)
    );

    assert_eq!(a.unwrap().len(), 2);
    assert_eq!(b.unwrap().len(), 3);
}
