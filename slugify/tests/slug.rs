use slugify::prelude::*;
use test_utils::{expect, expect_eq, TestResult};

const SAMPLES: &[&str] = &[
    "",
    "Café Münster",
    "Đorđe Šumić",
    "  Hello   World  ",
    "100% Organic!",
    "Straße im Ærø",
    "snake_case and kebab-case",
    "\t\nmixed \u{00A0}whitespace\u{2003}kinds\r\n",
    "Ŕeally ŕough ÞÞ þ",
    "日本語 テキスト",
    "emoji 😀 in 🎉 text",
    "ALL CAPS TITLE: A Story",
    "__already_slugged-text__",
    "  -  ",
    "ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÑÒÓÔÕÖØÙÚÛÜÝÞß",
    "àáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ",
];

#[test]
fn literal_cases() {
    assert_eq!(slug("Café Münster"), "cafe_munster");
    assert_eq!(slug("Đorđe Šumić"), "djordje_sumic");
    assert_eq!(slug("  Hello   World  "), "hello_world");
    assert_eq!(slug("100% Organic!"), "100_organic");
    assert_eq!(slug_with_max_length("abcdefgh", 5), "abcd");
    assert_eq!(slug(""), "");
}

#[test]
fn full_latin1_rows() {
    assert_eq!(
        slug("ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÑÒÓÔÕÖØÙÚÛÜÝÞß"),
        "aaaaaaaceeeeiiiinoooooouuuuybss"
    );
    assert_eq!(
        slug("àáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ"),
        "aaaaaaaceeeeiiiionoooooouuuuyby"
    );
}

#[test]
fn idempotent() {
    for text in SAMPLES {
        let once = slug(text);
        assert_eq!(slug(&once), once, "input: {text:?}");
    }
}

#[test]
fn output_alphabet_is_closed() {
    for text in SAMPLES {
        let out = slug(text);
        assert!(
            out.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
            "input: {text:?}, output: {out:?}"
        );
        assert_eq!(out, out.to_ascii_lowercase());
    }
}

#[test]
fn length_bound() {
    let exact = Slugifier::new().truncation(Truncation::Exact);
    for text in SAMPLES {
        let full = slug(text).len();
        for max_len in 1..=full + 2 {
            let bounded = slug_with_max_length(text, max_len);
            assert!(bounded.len() <= max_len, "input: {text:?}, max_len: {max_len}");
            assert!(slug(text).starts_with(&bounded));

            let bounded = exact.slug_with_max_length(text, max_len);
            assert_eq!(bounded.len(), full.min(max_len));
        }
        assert_eq!(slug_with_max_length(text, 0), "");
    }
}

#[test]
fn trait_on_string_types() {
    let owned = String::from("Café Münster");
    let cow = std::borrow::Cow::Borrowed("Café Münster");
    assert_eq!(owned.to_slug(), "cafe_munster");
    assert_eq!("Café Münster".to_slug(), "cafe_munster");
    assert_eq!(cow.to_slug(), "cafe_munster");
    assert_eq!(owned.to_slug_with_max_length(5), "cafe");
}

#[test]
fn config_from_json() -> TestResult {
    let config: SlugConfig = serde_json::from_str(
        r#"{ "truncation": "exact", "transliterations": { "œ": "oe", "&": "and" } }"#,
    )?;
    let slugifier = Slugifier::from_config(config)?;
    expect_eq!(slugifier.slug("Bœuf & Café"), "boeuf_and_cafe");
    expect_eq!(slugifier.slug_with_max_length("abcdefgh", 5), "abcde");
    Ok(())
}

#[test]
fn config_rejects_unknown_keys() -> TestResult {
    let err = serde_json::from_str::<SlugConfig>(r#"{ "trunaction": "exact" }"#).unwrap_err();
    expect!(err.to_string().contains("unknown field `trunaction`"));

    let config: SlugConfig = serde_json::from_str(r#"{ "truncation": "exact" }"#)?;
    expect_eq!(config.truncation, Truncation::Exact);
    Ok(())
}

#[test]
fn config_defaults_from_empty_json() -> TestResult {
    let config: SlugConfig = serde_json::from_str("{}")?;
    expect_eq!(config, SlugConfig::default());
    let slugifier = Slugifier::from_config(config)?;
    expect_eq!(slugifier.slug_with_max_length("Café Münster", 5), "cafe");
    Ok(())
}

#[test]
fn config_replacing_default_table() -> TestResult {
    let config: SlugConfig = serde_json::from_str(
        r#"{ "replace_default_table": true, "transliterations": { "ä": "ae" } }"#,
    )?;
    let slugifier = Slugifier::from_config(config)?;
    expect_eq!(slugifier.table().len(), 1);
    expect_eq!(slugifier.slug("Bär Café"), "baer_caf");
    Ok(())
}

#[test]
fn invalid_table_json_is_rejected() {
    let err = serde_json::from_str::<TranslitTable>(r#"{ "é": "é" }"#).unwrap_err();
    assert!(err.to_string().contains("ASCII letters"), "{err}");

    let err = serde_json::from_str::<TranslitTable>(r#"{ "ae": "a" }"#).unwrap_err();
    assert!(err.to_string().contains("exactly one character"), "{err}");

    let config: SlugConfig =
        serde_json::from_str(r#"{ "transliterations": { "-": "dash" } }"#).unwrap();
    assert_eq!(
        Slugifier::from_config(config).unwrap_err(),
        TableError::KeyInAllowedAlphabet('-')
    );
}

#[test]
fn table_from_json() -> TestResult {
    let table: TranslitTable = serde_json::from_str(r#"{ "œ": "oe", "Œ": "OE" }"#)?;
    expect_eq!(table.get('œ'), Some("oe"));
    expect_eq!(table.get('Œ'), Some("OE"));
    expect_eq!(table.get('é'), None);
    Ok(())
}

#[test]
fn default_table_shared_across_threads() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| SAMPLES.iter().map(|text| slug(text)).collect::<Vec<_>>()))
            .collect();
        let expected: Vec<_> = SAMPLES.iter().map(|text| slug(text)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
