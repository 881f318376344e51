use gatekeep_domain::Intent;

use super::{ClassificationError, IntentClassifier};

fn classifier() -> IntentClassifier {
    IntentClassifier::with_embedded_corpus()
}

#[test]
fn detects_edit_intent() {
    let detected = classifier().detect("Can I edit this document?");
    assert_eq!(detected, Ok(Intent::EditDocument));
}

#[test]
fn detects_edit_intent_from_paraphrase() {
    let detected = classifier().detect("Need to modify this document");
    assert_eq!(detected, Ok(Intent::EditDocument));
}

#[test]
fn detects_view_intent() {
    assert_eq!(
        classifier().detect("Can I view this document?"),
        Ok(Intent::ViewDocument)
    );
    assert_eq!(
        classifier().detect("Show me this file"),
        Ok(Intent::ViewDocument)
    );
}

#[test]
fn detects_delete_intent() {
    assert_eq!(
        classifier().detect("Can I delete this document?"),
        Ok(Intent::DeleteDocument)
    );
    assert_eq!(
        classifier().detect("Remove this file"),
        Ok(Intent::DeleteDocument)
    );
}

#[test]
fn off_domain_input_is_not_recognized() {
    let detected = classifier().detect("Can I fly this document to the moon?");
    assert!(matches!(
        detected,
        Err(ClassificationError::UnrecognizedLabel(_))
    ));
}

#[test]
fn unrecognized_label_is_reported_for_diagnostics() {
    let detected = classifier().detect("What is the weather like today?");
    assert_eq!(
        detected,
        Err(ClassificationError::UnrecognizedLabel(
            "out_of_scope".to_owned()
        ))
    );
}

#[test]
fn detection_is_deterministic() {
    let classifier = classifier();
    let first = classifier.detect("I want to see the document");
    let second = classifier.detect("I want to see the document");
    assert_eq!(first, second);
    assert_eq!(first, Ok(Intent::ViewDocument));
}

#[test]
fn empty_input_terminates_without_panicking() {
    let detected = classifier().detect("");
    assert!(detected.is_err());
}

#[test]
fn symbol_only_input_terminates_without_panicking() {
    let detected = classifier().detect("123 !!! ???");
    assert!(detected.is_err());
}

#[test]
fn empty_corpus_reports_no_prediction() {
    let classifier = IntentClassifier::new(&[]);
    assert_eq!(
        classifier.detect("Can I edit this document?"),
        Err(ClassificationError::NoPrediction)
    );
}

#[test]
fn fitted_model_exposes_its_dimensions() {
    let classifier = classifier();
    assert!(classifier.vocabulary_size() > 0);
    assert_eq!(classifier.label_count(), 4);
}
