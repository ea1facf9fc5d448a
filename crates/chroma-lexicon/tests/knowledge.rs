//! Tests for the builtin knowledge base and TOML overlays.

use std::path::Path;

use chroma_lexicon::{KnowledgeBase, LexiconError};
use chroma_model::{ColorEntry, HarmonyType, Mood};

#[test]
fn builtin_tables_pass_validation() {
    let kb = KnowledgeBase::builtin();
    kb.validate().expect("builtin knowledge base is valid");
    assert!(kb.colors.len() > 150);
    assert!(kb.compounds.len() > 20);
    for mood in Mood::ALL {
        assert!(kb.mood_defaults.iter().any(|d| d.mood == mood), "{mood}");
        assert_eq!(kb.mood_range(mood).is_none(), mood == Mood::Balanced, "{mood}");
    }
}

#[test]
fn builtin_covers_both_languages() {
    let kb = KnowledgeBase::builtin();
    assert_eq!(kb.color("ocean"), Some(ColorEntry::new(200, 80, 45)));
    assert_eq!(kb.color("azul"), kb.color("blue"));
    assert!(kb.is_stop_word("the"));
    assert!(kb.is_stop_word("los"));
    assert_eq!(kb.context_tag("noche"), Some("night"));
    assert_eq!(kb.context_tag("cyberpunk"), Some("neon"));
    assert_eq!(kb.harmony_keyword("monocromo"), Some(HarmonyType::Monochromatic));
}

#[test]
fn synonym_candidates_list_canonical_keys_first() {
    let kb = KnowledgeBase::builtin();
    let reverse = kb.synonym_candidates("mar");
    assert_eq!(reverse[0].term, "ocean");
    assert!(reverse[0].canonical);
    let siblings: Vec<&str> = reverse[1..].iter().map(|c| c.term).collect();
    assert!(reverse[1..].iter().all(|c| !c.canonical));
    assert!(siblings.contains(&"sea"));
    assert!(!siblings.contains(&"mar"));

    let forward = kb.synonym_candidates("ocean");
    assert!(forward.iter().all(|c| !c.canonical));
    assert!(forward.iter().any(|c| c.term == "sea"));
}

#[test]
fn overlay_adds_and_replaces_entries() {
    let overlay = KnowledgeBase::from_toml_str(
        r#"
        [colors]
        ocean = { hue = 190, saturation = 70, lightness = 40 }
        bioluminescent = { hue = 175, saturation = 90, lightness = 55 }

        [synonyms]
        ocean = ["deep"]

        [[emotions]]
        label = "calm"
        words = ["still"]

        [[mood_defaults]]
        mood = "calm"
        hue = 190
        saturation = 30
        lightness = 75

        [[mood_ranges]]
        mood = "balanced"
        range = { hues = [[0, 360]], saturation = [0, 100] }
        "#,
    )
    .expect("parse overlay");

    let merged = KnowledgeBase::builtin().overlay(&overlay);
    assert_eq!(merged.color("ocean"), Some(ColorEntry::new(190, 70, 40)));
    assert_eq!(merged.color("bioluminescent"), Some(ColorEntry::new(175, 90, 55)));
    assert!(merged.synonyms["ocean"].iter().any(|s| s == "sea"));
    assert!(merged.synonyms["ocean"].iter().any(|s| s == "deep"));
    let calm = merged
        .emotions
        .iter()
        .find(|e| e.label == "calm")
        .expect("calm emotion");
    assert!(calm.words.iter().any(|w| w == "peaceful"));
    assert!(calm.words.iter().any(|w| w == "still"));
    assert_eq!(merged.mood_default(Mood::Calm), ColorEntry::new(190, 30, 75));
    assert!(merged.mood_range(Mood::Balanced).is_some());
    // The builtin tables are untouched.
    assert_eq!(
        KnowledgeBase::builtin().color("ocean"),
        Some(ColorEntry::new(200, 80, 45))
    );
}

#[test]
fn out_of_range_entries_are_rejected() {
    let err = KnowledgeBase::from_toml_str(
        r#"
        [colors]
        broken = { hue = 400, saturation = 50, lightness = 50 }
        "#,
    )
    .expect_err("hue above 360");
    assert!(matches!(err, LexiconError::InvalidEntry { ref entry, .. } if entry == "broken"));
}

#[test]
fn malformed_toml_reports_origin() {
    let err = KnowledgeBase::from_toml_str("colors = 3").expect_err("colors must be a table");
    assert!(matches!(err, LexiconError::Toml { ref origin, .. } if origin == "<inline>"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = KnowledgeBase::from_path(Path::new("/nonexistent/chroma/kb.toml"))
        .expect_err("file does not exist");
    insta::assert_snapshot!(
        err.to_string().split(':').next().unwrap_or_default(),
        @"failed to read knowledge base /nonexistent/chroma/kb.toml"
    );
}
