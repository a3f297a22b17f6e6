//! Stop-word list behavior across the embedded lists.

use talpa::StopWords;

const SENTENCE: &str = "The quick brown fox jumps over the lazy dog, by and by.";

#[test]
fn list_aggressiveness_orders_as_documented() {
    // Each embedded list keeps a different slice of the same sentence.
    let minimal = StopWords::minimal().filter(SENTENCE);
    let english = StopWords::english().filter(SENTENCE);
    let innodb = StopWords::innodb().filter(SENTENCE);
    let none = StopWords::none().filter(SENTENCE);

    assert_eq!(none.len(), 12, "nothing dropped without stop words");
    assert!(english.len() <= minimal.len());
    assert!(minimal.len() < none.len());
    assert!(innodb.contains(&"and".to_string()), "InnoDB keeps 'and'");
    assert!(!minimal.contains(&"and".to_string()));
}

#[test]
fn default_is_the_minimal_list() {
    assert_eq!(StopWords::default(), StopWords::minimal());
}

#[test]
fn add_and_contains_normalize() {
    let mut stops = StopWords::none();
    stops.add("  Fox ").add("DOG");

    assert_eq!(stops.len(), 2);
    assert!(stops.contains("fox"));
    assert!(stops.contains(" FOX "));
    assert!(stops.contains("dog"));
    assert!(!stops.contains("lazy"));

    let tokens = stops.filter(SENTENCE);
    assert!(!tokens.contains(&"fox".to_string()));
    assert!(tokens.contains(&"lazy".to_string()));
}

#[test]
fn set_discards_the_previous_list() {
    let mut stops = StopWords::english();
    stops.set(["quick", "lazy"]);

    assert_eq!(stops.len(), 2);
    assert!(!stops.contains("the"));
    assert_eq!(
        stops.filter("the quick lazy dog"),
        vec!["the", "dog"]
    );
}

#[test]
fn words_lists_the_set_in_order() {
    let stops = StopWords::with_words(["zeta", "Alpha", "  mid  "]);

    assert_eq!(stops.words(), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn lists_survive_serde_round_trips() {
    let stops = StopWords::general_text();
    let json = serde_json::to_string(&stops).unwrap();
    let restored: StopWords = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, stops);
    assert_eq!(restored.filter(SENTENCE), stops.filter(SENTENCE));
}
