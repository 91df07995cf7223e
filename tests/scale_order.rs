use hebrew_number::{ConversionError, convert};

#[test]
fn test_invalid_repeated_or_ascending_scales() {
    let cases = [
        "2 מיליון ומיליון וחצי",
        "2 מליון ומיליון וחצי",
        "מליון מיליון",
        "מיליון מיליון",
        "אלף מיליון",
        "שלוש מאות מיליון מיליון",
        "חמש אלף אלף",
        "שלוש אלף אלף",
        "מיליון מיליון מיליון",
        "אלף אלף אלף",
        "מיליון שלוש מיליון",
        "מיליארד מיליארד",
        "אלף שלוש מאות אלף",
        "מיליון שלוש מאות מיליון מיליון",
        "מיליון אלף מיליון",
        "אלפיים אלף",
    ];

    for text in cases {
        assert!(
            matches!(
                convert(text),
                Err(ConversionError::NonDecreasingScale { .. })
            ),
            "'{}' should be rejected for scale order, got {:?}",
            text,
            convert(text)
        );
    }
}

#[test]
fn test_descending_scales_are_accepted() {
    assert_eq!(convert("מיליארד מיליון אלף"), Ok(1_001_001_000.0));
    assert_eq!(convert("מיליארד אלף"), Ok(1_000_001_000.0));
    assert_eq!(convert("שני מיליון שלוש אלף"), Ok(2_003_000.0));
}

#[test]
fn test_spelling_variants_share_a_multiplier() {
    assert_eq!(
        convert("מליארד מיליארד"),
        Err(ConversionError::NonDecreasingScale {
            word: "מיליארד".to_string(),
            multiplier: 1_000_000_000,
            previous: 1_000_000_000,
        })
    );
    assert!(convert("אלפים אלף").is_err());
}
