//! Embedded training corpus for the intent model.

/// Hand-curated `(utterance, label)` pairs the model is fitted on.
///
/// The `out_of_scope` class covers inputs the system must refuse to act on;
/// its label is deliberately absent from the closed intent set, so a top-1
/// prediction of it degrades to "not recognized" at the classifier boundary.
pub(crate) const TRAINING_CORPUS: &[(&str, &str)] = &[
    ("Can I edit this document?", "edit_document"),
    ("I want to edit the document", "edit_document"),
    ("Let me edit this file", "edit_document"),
    ("Need to modify this document", "edit_document"),
    ("Can I view this document?", "view_document"),
    ("I want to see the document", "view_document"),
    ("Show me this file", "view_document"),
    ("Let me read this document", "view_document"),
    ("Can I delete this document?", "delete_document"),
    ("I want to remove this file", "delete_document"),
    ("Delete this document", "delete_document"),
    ("Remove this file", "delete_document"),
    ("Can I fly this to the moon?", "out_of_scope"),
    ("Send this document to the moon", "out_of_scope"),
    ("What is the weather today?", "out_of_scope"),
    ("Tell me a joke", "out_of_scope"),
    ("Order me a pizza", "out_of_scope"),
    ("Sing a song for me", "out_of_scope"),
];
