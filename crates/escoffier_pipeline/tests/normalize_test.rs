use escoffier_pipeline::{MAX_LIST_ITEMS, clean_restaurant_name, normalize_lines};
use std::collections::HashSet;

#[test]
fn strips_markers_dedupes_and_preserves_order() {
    let items = normalize_lines("- Pad Thai\n- Pad Thai\n2. Tom Yum\n\n* Green Curry");
    assert_eq!(items, vec!["Pad Thai", "Tom Yum", "Green Curry"]);
}

#[test]
fn truncates_to_six_entries() {
    let raw = "1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g\n8. h";
    let items = normalize_lines(raw);
    assert_eq!(items.len(), MAX_LIST_ITEMS);
    assert_eq!(items, vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn empty_and_marker_only_input_yields_empty_list() {
    assert!(normalize_lines("").is_empty());
    assert!(normalize_lines("\n\n   \n").is_empty());
    assert!(normalize_lines("- \n* \n3.").is_empty());
}

#[test]
fn strips_marker_once_not_recursively() {
    // The bullet run is one marker; the numeric prefix behind it survives.
    let items = normalize_lines("-- 1. Tacos");
    assert_eq!(items, vec!["1. Tacos"]);
}

#[test]
fn handles_unicode_bullets_and_dashes() {
    let items = normalize_lines("\u{2022} Horchata\n\u{2013} Agua Fresca\n\u{2014} Limeade");
    assert_eq!(items, vec!["Horchata", "Agua Fresca", "Limeade"]);
}

#[test]
fn output_is_bounded_deduplicated_and_nonempty_for_arbitrary_input() {
    let inputs = [
        "",
        "plain text",
        "1) one\n1) one\n2) two",
        "\t - spaced \n\u{2022}\u{2022} doubled bullet\n9. nine",
        "a\nb\nc\nd\ne\nf\ng",
        "🌮 taco line\n--\n***",
        "same\nsame\nsame\nsame",
    ];

    for input in inputs {
        let items = normalize_lines(input);
        assert!(items.len() <= MAX_LIST_ITEMS, "bounded for {input:?}");
        let unique: HashSet<&String> = items.iter().collect();
        assert_eq!(unique.len(), items.len(), "deduplicated for {input:?}");
        assert!(
            items.iter().all(|item| !item.is_empty()),
            "no empties for {input:?}"
        );
    }
}

#[test]
fn idempotent_on_its_own_output() {
    let inputs = [
        "- Pad Thai\n- Pad Thai\n2. Tom Yum\n\n* Green Curry",
        "Tacos\nBurritos\nQuesadillas\nNachos\nElote\nChurros\nExtra",
        "",
        "  spaced out  \n\u{2022} bullet",
    ];

    for input in inputs {
        let once = normalize_lines(input);
        let twice = normalize_lines(&once.join("\n"));
        assert_eq!(once, twice, "idempotent for {input:?}");
    }
}

#[test]
fn cleans_quoted_restaurant_name() {
    assert_eq!(clean_restaurant_name(" \"Spice Route\"  "), "Spice Route");
    assert_eq!(clean_restaurant_name("'Casa Verde'"), "Casa Verde");
    assert_eq!(
        clean_restaurant_name("\u{201c}La Bonne Table\u{201d}"),
        "La Bonne Table"
    );
    assert_eq!(clean_restaurant_name("`Ember & Oak`"), "Ember & Oak");
}

#[test]
fn clean_restaurant_name_is_total() {
    assert_eq!(clean_restaurant_name(""), "");
    assert_eq!(clean_restaurant_name("   "), "");
    assert_eq!(clean_restaurant_name("\"\""), "");
    assert_eq!(clean_restaurant_name("unquoted"), "unquoted");
}
