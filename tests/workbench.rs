//! Orchestrator contract tests with mock collaborators. No model downloads.

use std::cell::RefCell;
use std::rc::Rc;

use tahlil::error::Result;
use tahlil::pipelines::fill_mask::{Completion, MaskCompleter};
use tahlil::pipelines::ner::{Entity, EntityRecognizer};
use tahlil::translate::{TargetLanguage, Translator};
use tahlil::Workbench;

struct StubRecognizer {
    entities: Vec<Entity>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl EntityRecognizer for StubRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        self.calls.borrow_mut().push(text.to_string());
        Ok(self.entities.clone())
    }

    fn model_id(&self) -> &str {
        "stub/arabic-ner"
    }
}

struct StubCompleter {
    candidates: Vec<Completion>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl MaskCompleter for StubCompleter {
    fn complete(&self, text: &str) -> Result<Vec<Completion>> {
        self.calls.borrow_mut().push(text.to_string());
        Ok(self.candidates.clone())
    }

    fn mask_token(&self) -> &str {
        "[MASK]"
    }
}

struct StubTranslator {
    calls: Rc<RefCell<Vec<(String, String)>>>,
}

impl Translator for StubTranslator {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String> {
        self.calls
            .borrow_mut()
            .push((text.to_string(), target.code().to_string()));
        Ok(format!("<{}>", target.code()))
    }
}

struct Calls {
    ner: Rc<RefCell<Vec<String>>>,
    fill: Rc<RefCell<Vec<String>>>,
    translate: Rc<RefCell<Vec<(String, String)>>>,
}

fn workbench(
    entities: Vec<Entity>,
    candidates: Vec<Completion>,
) -> (Workbench<StubRecognizer, StubCompleter, StubTranslator>, Calls) {
    let calls = Calls {
        ner: Rc::new(RefCell::new(vec![])),
        fill: Rc::new(RefCell::new(vec![])),
        translate: Rc::new(RefCell::new(vec![])),
    };
    let bench = Workbench::new(
        StubRecognizer {
            entities,
            calls: calls.ner.clone(),
        },
        StubCompleter {
            candidates,
            calls: calls.fill.clone(),
        },
        StubTranslator {
            calls: calls.translate.clone(),
        },
    );
    (bench, calls)
}

fn entity(word: &str, score: f32) -> Entity {
    Entity {
        word: word.to_string(),
        label: "B-ORGANIZATION".to_string(),
        score,
        start: 0,
        end: word.len(),
    }
}

fn candidate(token: &str, score: f32) -> Completion {
    Completion {
        sequence: format!("الطقس {token} اليوم"),
        token: token.to_string(),
        score,
    }
}

#[test]
fn recognize_calls_service_once_with_exact_text() {
    let (bench, calls) = workbench(vec![entity("جوجل", 0.95), entity("في", 0.5)], vec![]);

    let report = bench.recognize("أحمد يعمل في جوجل").unwrap().unwrap();

    assert_eq!(calls.ner.borrow().as_slice(), ["أحمد يعمل في جوجل"]);
    assert_eq!(report.model_id, "stub/arabic-ner");
    assert_eq!(report.entities.len(), 1);
    assert_eq!(report.entities[0].word, "جوجل");
    assert!(report.entities.iter().all(|e| e.score >= 0.8));
}

#[test]
fn recognize_preserves_service_order() {
    let (bench, _) = workbench(
        vec![entity("b", 0.81), entity("a", 0.99), entity("c", 0.85)],
        vec![],
    );

    let report = bench.recognize("نص").unwrap().unwrap();
    let words: Vec<&str> = report.entities.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, ["b", "a", "c"]);
}

#[test]
fn complete_renders_all_candidates_in_service_order() {
    // Deliberately not sorted by score: order must be the service's rank.
    let candidates = vec![
        candidate("جميل", 0.4),
        candidate("بارد", 0.7),
        candidate("حار", 0.1),
    ];
    let (bench, calls) = workbench(vec![], candidates.clone());

    let rendered = bench.complete("الطقس [MASK] اليوم").unwrap().unwrap();

    assert_eq!(calls.fill.borrow().len(), 1);
    assert_eq!(rendered.len(), candidates.len());
    let tokens: Vec<&str> = rendered.iter().map(|c| c.token.as_str()).collect();
    assert_eq!(tokens, ["جميل", "بارد", "حار"]);
    // No threshold filtering on this path.
    assert!(rendered.iter().any(|c| c.score < 0.8));
}

#[test]
fn complete_rejects_double_mask_without_invoking() {
    let (bench, calls) = workbench(vec![], vec![candidate("x", 0.9)]);

    let err = bench.complete("مرحبا [MASK] [MASK]").unwrap_err();

    assert!(err.is_invalid_input());
    assert!(calls.fill.borrow().is_empty());
}

#[test]
fn complete_rejects_zero_masks_without_invoking() {
    let (bench, calls) = workbench(vec![], vec![]);

    assert!(bench.complete("مرحبا").unwrap_err().is_invalid_input());
    assert!(calls.fill.borrow().is_empty());
}

#[tokio::test]
async fn translate_to_hebrew_uses_he_and_labels_hebrew() {
    let (bench, calls) = workbench(vec![], vec![]);

    let report = bench
        .translate("Hello", TargetLanguage::Hebrew)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        calls.translate.borrow().as_slice(),
        [("Hello".to_string(), "he".to_string())]
    );
    assert_eq!(report.language, "Hebrew");
    assert_eq!(report.text, "<he>");
}

#[tokio::test]
async fn every_language_maps_to_its_fixed_code() {
    let (bench, calls) = workbench(vec![], vec![]);

    for lang in TargetLanguage::all() {
        bench.translate("نص", lang).await.unwrap();
    }

    let codes: Vec<String> = calls
        .translate
        .borrow()
        .iter()
        .map(|(_, code)| code.clone())
        .collect();
    assert_eq!(codes, ["en", "fr", "zh-cn", "he"]);
}

#[tokio::test]
async fn blank_input_is_a_no_op_for_every_action() {
    let (bench, calls) = workbench(vec![entity("a", 0.9)], vec![candidate("x", 0.9)]);

    assert!(bench.recognize("  ").unwrap().is_none());
    assert!(bench.complete("\n").unwrap().is_none());
    assert!(bench
        .translate("", TargetLanguage::English)
        .await
        .unwrap()
        .is_none());

    assert!(calls.ner.borrow().is_empty());
    assert!(calls.fill.borrow().is_empty());
    assert!(calls.translate.borrow().is_empty());
}
