//! Integration tests for the fill-mask pipeline
//! Run with: cargo test --features integration

#![cfg(feature = "integration")]

use tahlil::models::BertFillMaskModel;
use tahlil::pipelines::fill_mask::FillMaskPipelineBuilder;

#[test]
fn completes_a_masked_arabic_sentence() -> tahlil::Result<()> {
    let pipeline = FillMaskPipelineBuilder::new("asafaya/bert-base-arabic")
        .cpu()
        .build::<BertFillMaskModel>()?;

    let candidates = pipeline.run("الطقس [MASK] اليوم")?;
    assert!(!candidates.is_empty());
    assert!(candidates.len() <= 5);
    for candidate in &candidates {
        assert!(!candidate.token.is_empty());
        assert!(!candidate.sequence.contains("[MASK]"));
        assert!((0.0..=1.0).contains(&candidate.score));
    }
    // Ranked by descending score.
    for pair in candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    Ok(())
}

#[test]
fn top_k_caps_the_candidate_count() -> tahlil::Result<()> {
    let pipeline = FillMaskPipelineBuilder::new("asafaya/bert-base-arabic")
        .cpu()
        .build::<BertFillMaskModel>()?;

    let candidates = pipeline.run_top_k("الطقس [MASK] اليوم", 2)?;
    assert!(candidates.len() <= 2);
    Ok(())
}
