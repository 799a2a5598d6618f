//! Edge cases: unusual call shapes, configuration switches and failures

#[path = "../common/mod.rs"]
mod common;
use common::*;

use lognotice_rewrite::features::call_site::CallSiteScanner;
use lognotice_rewrite::features::patch::TextPatcher;
use lognotice_rewrite::{rewrite_corpus, JavaParser, RewriteConfig, RewriteError, SourceParser};
use pretty_assertions::assert_eq;

fn rewrite_one(body: &str) -> String {
    let corpus = Corpus::new();
    corpus.write("com/acme/E.java", &fixture_class("com.acme", "E", body));
    rewrite_corpus(corpus.root(), "com.acme", &RewriteConfig::default()).unwrap();
    corpus.read("com/acme/E.java")
}

// ═══════════════════════════════════════════════════════════════════════════
// Call shapes
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_comment_between_arguments_is_dropped() {
    let content = rewrite_one("        LogNotice.info(\"a\" /* why */, \"b\", e);");
    assert!(content.contains("        LogMsg.info(\"a, b\", e);\n"));
}

#[test]
fn test_braceless_if_statement() {
    let content = rewrite_one("        if (x != null) LogNotice.info(\"a\", x.toString(), e);");
    assert!(content.contains("if (x != null) LogMsg.info(\"a\" + x.toString(), e);"));
}

#[test]
fn test_chained_call_is_not_a_target() {
    let body = "        LogNotice.info(\"a\", \"b\", e).toString();";
    assert_eq!(rewrite_one(body), fixture_class("com.acme", "E", body));
}

#[test]
fn test_fully_qualified_scope_is_not_a_target() {
    let body = "        com.santaba.common.logger.LogNotice.info(\"a\", \"b\", e);";
    assert_eq!(rewrite_one(body), fixture_class("com.acme", "E", body));
}

#[test]
fn test_other_receivers_untouched() {
    let body = "        LogMsg.info(\"a\", e);\n        logger.info(\"a\", \"b\", e);\n        System.out.println(\"LogNotice\");";
    assert_eq!(rewrite_one(body), fixture_class("com.acme", "E", body));
}

#[test]
fn test_initializer_blocks_are_not_visited() {
    let source = "package com.acme;\n\
                  \n\
                  import com.santaba.common.logger.LogNotice;\n\
                  \n\
                  public class Init {\n\
                  \x20   static { LogNotice.info(\"static\", \"init\", null); }\n\
                  \n\
                  \x20   { LogNotice.info(\"instance\", \"init\", null); }\n\
                  \n\
                  \x20   void run() { LogNotice.info(\"method\", \"body\", null); }\n\
                  }\n";
    let corpus = Corpus::new();
    corpus.write("com/acme/Init.java", source);

    let report = rewrite_corpus(corpus.root(), "com.acme", &RewriteConfig::default()).unwrap();
    let content = corpus.read("com/acme/Init.java");

    assert_eq!(report.rewrite_count(), 1);
    assert!(content.contains("static { LogNotice.info(\"static\", \"init\", null); }"));
    assert!(content.contains("{ LogNotice.info(\"instance\", \"init\", null); }"));
    assert!(content.contains("void run() { LogMsg.info(\"method, body\", null); }"));
}

// ═══════════════════════════════════════════════════════════════════════════
// Failure handling
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_without_preflight_earlier_rewrites_stay_written() {
    let corpus = Corpus::new();
    corpus.write(
        "com/acme/A.java",
        &fixture_class(
            "com.acme",
            "A",
            "        LogNotice.info(\"fine\", \"call\", e);\n        LogNotice.info(\"a\", \"b\", \"c\", \"d\", e);",
        ),
    );
    let config = RewriteConfig {
        preflight_arity: false,
        ..RewriteConfig::default()
    };

    let err = rewrite_corpus(corpus.root(), "com.acme", &config).unwrap_err();

    assert!(matches!(err, RewriteError::Arity { count: 5, line: 8, .. }));
    let content = corpus.read("com/acme/A.java");
    assert!(content.contains("LogMsg.info(\"fine, call\", e);"));
    assert!(content.contains("LogNotice.info(\"a\", \"b\", \"c\", \"d\", e);"));
}

#[test]
fn test_file_changed_between_scan_and_patch() {
    let corpus = Corpus::new();
    let path = corpus.write(
        "com/acme/A.java",
        &fixture_class("com.acme", "A", &fixture_n_calls(1)),
    );
    let unit = JavaParser::new().parse_file(&path).unwrap();
    let edit = CallSiteScanner::new(&RewriteConfig::default())
        .scan(&unit)
        .unwrap()
        .unwrap();

    let changed = format!("// header\n{}", corpus.read("com/acme/A.java"));
    corpus.write("com/acme/A.java", &changed);

    let err = TextPatcher::new().apply(&path, &edit).unwrap_err();
    match err {
        RewriteError::RangeMismatch { expected, found, .. } => {
            assert_eq!(expected, edit.original);
            assert_ne!(found, expected);
        }
        other => panic!("expected range mismatch, got {other}"),
    }
    assert_eq!(corpus.read("com/acme/A.java"), changed);
}

#[test]
fn test_strict_parse_aborts_whole_run() {
    let corpus = Corpus::new();
    corpus.write(
        "com/acme/A.java",
        &fixture_class("com.acme", "A", &fixture_n_calls(1)),
    );
    corpus.write("com/acme/B.java", "class B { void f( }\n");
    let before = corpus.snapshot();

    let err = rewrite_corpus(corpus.root(), "com.acme", &RewriteConfig::default()).unwrap_err();

    assert!(matches!(err, RewriteError::Parse { .. }));
    assert_eq!(corpus.snapshot(), before);
}

#[test]
fn test_lenient_parse_skips_unparsable_files() {
    let corpus = Corpus::new();
    corpus.write(
        "com/acme/A.java",
        &fixture_class("com.acme", "A", &fixture_n_calls(1)),
    );
    let broken = "import com.santaba.common.logger.LogNotice;\nclass B { void f( LogNotice.info(a, b, c); }\n";
    corpus.write("com/acme/B.java", broken);
    let config = RewriteConfig {
        strict_parse: false,
        ..RewriteConfig::default()
    };

    let report = rewrite_corpus(corpus.root(), "com.acme", &config).unwrap();

    assert_eq!(report.rewrite_count(), 1);
    assert_eq!(report.files_unparsable, vec![corpus.path("com/acme/B.java")]);
    assert_eq!(corpus.read("com/acme/B.java"), broken);
}

#[test]
fn test_missing_start_package() {
    let corpus = Corpus::new();
    let err = rewrite_corpus(corpus.root(), "com.nowhere", &RewriteConfig::default()).unwrap_err();
    assert!(matches!(err, RewriteError::Io { .. }));
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_yaml_config_changes_target_and_separator() {
    let config = RewriteConfig::from_yaml_str(
        "version: 1\n\
         target_api: OldLog\n\
         target_import: org.legacy.OldLog\n\
         replacement_api: NewLog\n\
         literal_separator: \" - \"\n",
    )
    .unwrap();

    let corpus = Corpus::new();
    corpus.write(
        "com/acme/A.java",
        "package com.acme;\n\
         \n\
         import org.legacy.OldLog;\n\
         \n\
         class A {\n\
         \x20   void f(Exception e) {\n\
         \x20       OldLog.info(\"ctx\", \"detail\", e);\n\
         \x20       LogNotice.info(\"left\", \"alone\", e);\n\
         \x20   }\n\
         }\n",
    );

    let report = rewrite_corpus(corpus.root(), "com.acme", &config).unwrap();
    let content = corpus.read("com/acme/A.java");

    assert_eq!(report.rewrite_count(), 1);
    assert!(content.contains("NewLog.info(\"ctx - detail\", e);"));
    assert!(content.contains("LogNotice.info(\"left\", \"alone\", e);"));
}

#[test]
fn test_yaml_config_from_file() {
    let corpus = Corpus::new();
    let path = corpus.write("rewrite.yaml", "version: 1\nmax_passes_per_unit: 3\n");

    let config = RewriteConfig::from_yaml(&path).unwrap();
    assert_eq!(config.max_passes_per_unit, 3);
    assert_eq!(config.replacement_api, "LogMsg");
}

#[test]
fn test_reject_nested_bodies_rewrites_inner_calls_only() {
    let body = "        LogNotice.info(new Object() {\n\
                \x20           public String toString() {\n\
                \x20               LogNotice.debug(\"in\", \"ner\", e);\n\
                \x20               return \"x\";\n\
                \x20           }\n\
                \x20       }, \"outer\", e);";
    let corpus = Corpus::new();
    corpus.write("com/acme/A.java", &fixture_class("com.acme", "A", body));
    let config = RewriteConfig {
        reject_nested_bodies: true,
        ..RewriteConfig::default()
    };

    let report = rewrite_corpus(corpus.root(), "com.acme", &config).unwrap();
    let content = corpus.read("com/acme/A.java");

    assert_eq!(report.rewrite_count(), 1);
    assert!(content.contains("        LogNotice.info(new Object() {\n"));
    assert!(content.contains("LogMsg.debug(\"in, ner\", e);"));
    assert!(content.contains("        }, \"outer\", e);"));
}

#[test]
fn test_reject_nested_bodies_second_argument_is_fatal() {
    let corpus = Corpus::new();
    corpus.write(
        "com/acme/A.java",
        &fixture_class(
            "com.acme",
            "A",
            "        LogNotice.info(\"a\", new Object() { }, e);",
        ),
    );
    let config = RewriteConfig {
        reject_nested_bodies: true,
        ..RewriteConfig::default()
    };

    let err = rewrite_corpus(corpus.root(), "com.acme", &config).unwrap_err();
    assert!(matches!(err, RewriteError::UnsupportedShape { line: 7, .. }));
}
