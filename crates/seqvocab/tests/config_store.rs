#![allow(missing_docs)]

use seqvocab::{
    VocabError,
    config::{
        VocabularyConfig,
        default_vocabulary,
        init_vocabulary_config,
        resolve_vocabulary_path,
        vocabulary_config,
    },
};

// The store is process-wide; this file holds a single test so the
// initialization order is fixed.
#[test]
fn config_store_lifecycle() {
    let config = VocabularyConfig::default()
        .with_path("/models/cc_all.32000/sentencepiece.model")
        .with_extra_ids(64);

    let stored = init_vocabulary_config(config.clone()).unwrap();
    assert_eq!(stored, &config);
    assert_eq!(vocabulary_config(), &config);

    assert_eq!(
        resolve_vocabulary_path(None),
        "/models/cc_all.32000/sentencepiece.model"
    );
    assert_eq!(
        resolve_vocabulary_path(Some("./local.model")),
        "./local.model"
    );
    assert_eq!(
        resolve_vocabulary_path(Some("")),
        "/models/cc_all.32000/sentencepiece.model"
    );

    let spec = default_vocabulary();
    assert_eq!(spec.model_path, "/models/cc_all.32000/sentencepiece.model");
    assert_eq!(spec.extra_ids, 64);

    // Load once.
    assert!(matches!(
        init_vocabulary_config(VocabularyConfig::default()),
        Err(VocabError::ConfigAlreadyInitialized)
    ));
    assert_eq!(vocabulary_config(), &config);
}
