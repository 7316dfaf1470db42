mod common;

use common::{RecordingModel, lazy_over};
use filegen::core::models::SummaryParams;
use filegen::summarize::{MAX_INPUT_CHARS, summarize_text, truncate_input};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_short_text_is_forwarded_unmodified() {
    let model = RecordingModel::new("abstract");
    let text = "A short document that fits well under the limit.";

    let summary = summarize_text(model.as_ref(), text, &SummaryParams::default())
        .await
        .unwrap();

    assert_eq!(summary, "abstract");
    let (input, _) = model.last_call().unwrap();
    assert_eq!(input, text);
}

#[tokio::test]
async fn test_long_text_is_cut_to_first_thousand_characters() {
    let model = RecordingModel::new("abstract");
    let text: String = (0..1500).map(|i| char::from(b'a' + (i % 26) as u8)).collect();

    summarize_text(model.as_ref(), &text, &SummaryParams::default())
        .await
        .unwrap();

    let (input, params) = model.last_call().unwrap();
    assert_eq!(input.chars().count(), MAX_INPUT_CHARS);
    assert_eq!(input, text[..1000]);
    assert_eq!(params.max_length, 130);
    assert_eq!(params.min_length, 50);
    assert!(!params.do_sample);
}

#[tokio::test]
async fn test_length_bounds_pass_through_unchanged() {
    let model = RecordingModel::new("abstract");
    let params = SummaryParams {
        max_length: 60,
        min_length: 10,
        do_sample: false,
    };

    summarize_text(model.as_ref(), "text", &params).await.unwrap();
    assert_eq!(model.last_call().unwrap().1, params);
}

#[test]
fn test_truncate_is_a_prefix() {
    let text = "word ".repeat(400);
    let cut = truncate_input(&text);
    assert!(text.starts_with(cut));
    assert_eq!(cut.chars().count(), MAX_INPUT_CHARS);
}

#[tokio::test]
async fn test_lazy_handle_builds_model_once_across_requests() {
    let model = RecordingModel::new("abstract");
    let (lazy, builds) = lazy_over(model.clone());

    for _ in 0..3 {
        let handle = lazy.get().unwrap();
        summarize_text(handle.as_ref(), "text", &SummaryParams::default())
            .await
            .unwrap();
    }

    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert_eq!(model.call_count(), 3);
}
