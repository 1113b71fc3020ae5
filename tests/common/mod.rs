//! Fixture builders shared by the integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// One `<dt>` in the layout Javadoc 8 emits
pub fn definition_term(href: &str, name: &str, caption: &str) -> String {
    format!(r#"<dt><a href="{href}"><span class="typeNameLink">{name}</span></a> - {caption}</dt><dd>&nbsp;</dd>"#)
}

/// A complete index page holding `terms`
pub fn index_page(terms: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Index</title></head><body>\
         <div class=\"contentContainer\"><h2 class=\"title\">A</h2><dl>{}</dl></div>\
         </body></html>",
        terms.concat()
    )
}

pub fn write(path: &Path, contents: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, contents).expect("write fixture file");
    path.to_path_buf()
}

/// Javadoc root with a monolithic `index-all.html`
pub fn monolithic_javadoc(root: &Path) {
    write(
        &root.join("index-all.html"),
        &index_page(&[
            definition_term("com/example/Widget.html", "Widget", "Class in com.example"),
            definition_term("com/example/Widget.html#size()", "size()", "Method in class com.example.Widget"),
            definition_term("com/example/Widget.html#of(int)", "of(int)", "Static method in class com.example.Widget"),
            definition_term("com/example/package-summary.html", "com.example", "package com.example"),
        ]),
    );
    write(&root.join("com/example/Widget.html"), "<html><body>Widget</body></html>");
}

/// Javadoc root with an overview page and one split index page per letter
pub fn split_javadoc(root: &Path) -> Vec<PathBuf> {
    write(&root.join("overview-summary.html"), "<html><body>Overview</body></html>");
    vec![
        write(
            &root.join("index-files/index-1.html"),
            &index_page(&[definition_term("com/example/Alpha.html", "Alpha", "Interface in com.example")]),
        ),
        write(
            &root.join("index-files/index-2.html"),
            &index_page(&[definition_term("com/example/Beta.html", "Beta", "Enum in com.example")]),
        ),
        write(
            &root.join("index-files/index-3.html"),
            &index_page(&[definition_term(
                "com/example/Gamma.html#Gamma()",
                "Gamma()",
                "Constructor for class com.example.Gamma",
            )]),
        ),
    ]
}

pub const JSDOC_INDEX: &str = r#"{
    "classes": [{"name": "Widget", "link": "Widget.html"}],
    "functions": [{"name": "render", "link": "global.html#render"}, {"name": "mount", "link": "global.html#mount"}],
    "members": [{"name": "size", "link": "Widget.html#size"}],
    "namespaces": [{"name": "ui", "link": "ui.html"}]
}"#;

/// JSDoc root with `index.json` and an `index.html` front page
pub fn jsdoc(root: &Path) {
    write(&root.join("index.json"), JSDOC_INDEX);
    write(&root.join("index.html"), "<html><body>Home</body></html>");
}
