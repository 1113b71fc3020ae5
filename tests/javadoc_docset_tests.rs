//! End-to-end tests for Javadoc documentation roots
mod common;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use docset_builder::application::DocsetCreator;
use docset_builder::domain::{BuilderError, Flavor, IndexEntry, JavadocMatchType};
use docset_builder::infrastructure::parsing::{CollectingSink, Diagnostic, DocSetParser, JavadocParser};
use docset_builder::infrastructure::SearchIndexConnection;
use proptest::prelude::*;
use sqlx::Row;
use tempfile::tempdir;

fn parser_with_sink() -> (JavadocParser, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    (JavadocParser::with_sink(sink.clone()), sink)
}

#[test]
fn monolithic_index_is_located_and_classified() {
    let temp = tempdir().unwrap();
    common::write(
        &temp.path().join("index-all.html"),
        &common::index_page(&[common::definition_term("Foo.html", "Foo", "Class in com.example")]),
    );

    let (parser, sink) = parser_with_sink();
    let location = parser.find_index_file(temp.path()).unwrap();
    assert_eq!(location.front_page_file(), Some("index-all.html"));
    assert_eq!(location.files_to_index(), &[temp.path().join("index-all.html")]);

    let values = parser.find_search_index_values(location.files_to_index()).unwrap();
    assert_eq!(values, vec![IndexEntry::new("Foo", JavadocMatchType::Class, "Foo.html")]);
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn split_index_uses_overview_and_every_index_page() {
    let temp = tempdir().unwrap();
    let pages = common::split_javadoc(temp.path());
    common::write(&temp.path().join("index-files/allclasses.html"), "<html></html>");

    let (parser, _) = parser_with_sink();
    let location = parser.find_index_file(temp.path()).unwrap();
    assert_eq!(location.front_page_file(), Some("overview-summary.html"));

    let found: HashSet<PathBuf> = location.files_to_index().iter().cloned().collect();
    let expected: HashSet<PathBuf> = pages.into_iter().collect();
    assert_eq!(found, expected);
}

#[test]
fn split_index_lists_top_level_html_pages_in_directory_order() {
    let temp = tempdir().unwrap();
    common::split_javadoc(temp.path());
    let index_files = temp.path().join("index-files");
    common::write(&index_files.join("sub/index-9.html"), "<html></html>");
    common::write(&index_files.join("index-5.html/index-6.html"), "<html></html>");
    common::write(&index_files.join("index-4.htm"), "<html></html>");
    common::write(&index_files.join("index-x.txt"), "");
    common::write(&index_files.join("allclasses.html"), "<html></html>");

    let expected: Vec<PathBuf> = fs::read_dir(&index_files)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.is_file()
                && path.extension().is_some_and(|ext| ext == "html")
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("index-"))
        })
        .collect();
    assert_eq!(expected.len(), 3);

    let location = JavadocParser::new().find_index_file(temp.path()).unwrap();
    assert_eq!(location.files_to_index(), expected.as_slice());
}

#[test]
fn split_index_without_overview_falls_back_to_first_page() {
    let temp = tempdir().unwrap();
    let pages = common::split_javadoc(temp.path());
    fs::remove_file(temp.path().join("overview-summary.html")).unwrap();

    let location = JavadocParser::new().find_index_file(temp.path()).unwrap();
    assert_eq!(location.front_page_file(), Some("index-1.html"));
    assert_eq!(location.files_to_index().len(), pages.len());
}

#[test]
fn split_index_takes_priority_over_monolithic_index() {
    let temp = tempdir().unwrap();
    common::split_javadoc(temp.path());
    common::monolithic_javadoc(temp.path());

    let location = JavadocParser::new().find_index_file(temp.path()).unwrap();
    assert_eq!(location.files_to_index().len(), 3);
    assert!(location
        .files_to_index()
        .iter()
        .all(|file| file.parent() == Some(temp.path().join("index-files").as_path())));
}

#[test]
fn malformed_link_is_skipped_and_processing_continues() {
    let temp = tempdir().unwrap();
    let file = common::write(
        &temp.path().join("index-all.html"),
        &common::index_page(&[
            common::definition_term("Foo.html", "Foo", "Class in com.example"),
            common::definition_term("", "Broken", "Class in com.example"),
            common::definition_term("Bar.html#run()", "run()", "Method in class com.example.Bar"),
        ]),
    );

    let (parser, sink) = parser_with_sink();
    let values = parser.find_search_index_values(&[file]).unwrap();
    assert_eq!(
        values,
        vec![
            IndexEntry::new("Foo", JavadocMatchType::Class, "Foo.html"),
            IndexEntry::new("run()", JavadocMatchType::Method, "Bar.html#run()"),
        ]
    );
    assert_eq!(
        sink.messages(),
        vec![
            "Something went wrong with parsing a link, possibly unescaped tags in Javadoc. (Name: Broken, Type: CLASS, Link: )".to_string(),
            "Most recently parsed value was: (Name: Foo, Type: CLASS, Path: Foo.html)".to_string(),
        ]
    );
}

#[test]
fn most_recent_value_spans_files() {
    let temp = tempdir().unwrap();
    let first = common::write(
        &temp.path().join("index-files/index-1.html"),
        &common::index_page(&[common::definition_term("A.html", "A", "Class in p")]),
    );
    let second = common::write(
        &temp.path().join("index-files/index-2.html"),
        &common::index_page(&[common::definition_term("", "B", "Class in p")]),
    );

    let (parser, sink) = parser_with_sink();
    let values = parser.find_search_index_values(&[first, second]).unwrap();
    assert_eq!(values.len(), 1);
    assert!(matches!(
        sink.diagnostics().last(),
        Some(Diagnostic::MostRecentValue { name, .. }) if name == "A"
    ));
}

#[test]
fn missing_root_is_fatal() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("does-not-exist");

    let error = JavadocParser::new().find_index_file(&missing).unwrap_err();
    assert!(matches!(error, BuilderError::NotADirectory { .. }));
    assert!(error.to_string().ends_with("does not exist, or is not a directory"));
}

#[test]
fn root_without_index_pages_is_fatal() {
    let temp = tempdir().unwrap();
    common::write(&temp.path().join("overview-summary.html"), "<html></html>");

    let error = JavadocParser::new().find_index_file(temp.path()).unwrap_err();
    assert!(matches!(error, BuilderError::NoDocumentation { flavor: Flavor::Javadoc, .. }));
    assert!(error.to_string().starts_with("Did not find any javadoc files."));
}

#[test]
fn extraction_is_deterministic() {
    let temp = tempdir().unwrap();
    common::monolithic_javadoc(temp.path());

    let (parser, _) = parser_with_sink();
    let location = parser.find_index_file(temp.path()).unwrap();
    let first = parser.find_search_index_values(location.files_to_index()).unwrap();
    let second = parser.find_search_index_values(location.files_to_index()).unwrap();
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[tokio::test]
async fn docset_index_matches_extracted_entries() -> anyhow::Result<()> {
    let temp = tempdir()?;
    let doc_root = temp.path().join("apidocs");
    common::monolithic_javadoc(&doc_root);

    let docset = DocsetCreator::builder("Widgets", &doc_root)
        .display_name("Widgets API")
        .keyword("wdg")
        .output_directory(temp.path().join("out"))
        .diagnostics(Arc::new(CollectingSink::new()))
        .build()?
        .make_docset()
        .await?;

    assert!(docset.join("Contents/Resources/Documents/com/example/Widget.html").is_file());
    let plist = plist::Value::from_file(docset.join("Contents/Info.plist"))?;
    let info = plist.as_dictionary().expect("Info.plist is a dictionary");
    let string = |key: &str| info.get(key).and_then(plist::Value::as_string);
    assert_eq!(string("CFBundleIdentifier"), Some("Widgets"));
    assert_eq!(string("CFBundleName"), Some("Widgets API"));
    assert_eq!(string("DocSetPlatformFamily"), Some("wdg"));

    let connection = SearchIndexConnection::open(&docset.join("Contents/Resources")).await?;
    let rows = sqlx::query("SELECT type, COUNT(*) AS total FROM searchIndex GROUP BY type")
        .fetch_all(connection.pool())
        .await?;
    let counts: BTreeMap<String, i64> = rows
        .iter()
        .map(|row| (row.get("type"), row.get("total")))
        .collect();
    connection.close().await;

    let expected: BTreeMap<String, i64> = [("Class", 1), ("Method", 2), ("Package", 1)]
        .into_iter()
        .map(|(kind, total)| (kind.to_string(), total))
        .collect();
    assert_eq!(counts, expected);
    Ok(())
}

#[tokio::test]
async fn docset_written_inside_doc_root() -> anyhow::Result<()> {
    let temp = tempdir()?;
    let doc_root = temp.path().join("apidocs");
    common::monolithic_javadoc(&doc_root);

    let docset = DocsetCreator::builder("Foo", &doc_root)
        .output_directory(&doc_root)
        .diagnostics(Arc::new(CollectingSink::new()))
        .build()?
        .make_docset()
        .await?;

    let documents = docset.join("Contents/Resources/Documents");
    assert_eq!(docset, doc_root.join("Foo.docset"));
    assert!(documents.join("index-all.html").is_file());
    assert!(documents.join("com/example/Widget.html").is_file());
    assert!(!documents.join("Foo.docset").exists());
    Ok(())
}

proptest! {
    #[test]
    fn emitted_entries_never_have_empty_fields(
        terms in prop::collection::vec(("[A-Za-z]{0,6}", "[a-z]{0,6}"), 0..12)
    ) {
        let html = common::index_page(
            &terms
                .iter()
                .map(|(name, href)| common::definition_term(href, name, "Class in p"))
                .collect::<Vec<_>>(),
        );

        let (parser, sink) = parser_with_sink();
        let mut values = Vec::new();
        parser.index_html(&html, &mut values).unwrap();

        let well_formed = terms.iter().filter(|(name, href)| !name.is_empty() && !href.is_empty()).count();
        prop_assert_eq!(values.len(), well_formed);
        prop_assert!(values.iter().all(|v| !v.name.is_empty() && !v.path.is_empty()));
        let malformed = sink
            .diagnostics()
            .iter()
            .filter(|d| matches!(d, Diagnostic::MalformedLink { .. }))
            .count();
        prop_assert_eq!(malformed, terms.len() - well_formed);
    }
}
