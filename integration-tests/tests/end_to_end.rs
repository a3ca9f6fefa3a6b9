use integration_tests::harness::write_log;
use nexus_logs_core::analyze::{AnalyzeError, AnalyzeOptions, PackageFormat, analyze_file};
use pretty_assertions::assert_eq;

const MAVEN_LINE: &str = r#"10.0.0.1 - - [1] "GET /repository/internal-libs/com/foo/1.0/foo-1.0.jar HTTP/1.1" 200 - 1024 5 "Apache-Maven/3.8.1" [qtp]"#;
const FAVICON_LINE: &str = r#"10.0.0.1 - - [1] "GET /favicon.ico HTTP/1.1" 200 - 1024 5 "Mozilla/5.0" [qtp]"#;

#[test]
fn maven_request_is_counted_in_every_tally() {
    let log = write_log(&[MAVEN_LINE]);

    let analysis =
        analyze_file(log.path(), &AnalyzeOptions::default(), |_| {}).expect("readable log");

    assert_eq!(analysis.stats.repository_count("internal-libs"), 1);
    assert_eq!(analysis.stats.format_count(PackageFormat::Maven), 1);
    assert_eq!(
        analysis.stats.client_count(PackageFormat::Maven, "10.0.0.1"),
        1
    );
}

#[test]
fn non_repository_request_leaves_tallies_untouched() {
    let log = write_log(&[FAVICON_LINE]);

    let analysis =
        analyze_file(log.path(), &AnalyzeOptions::default(), |_| {}).expect("readable log");

    assert_eq!(analysis.stats.total_requests(), 0);
    assert!(analysis.stats.repositories_by_count().is_empty());
    assert!(analysis.stats.formats_by_count().is_empty());
}

#[test]
fn ambiguous_repository_name_follows_table_order() {
    let log = write_log(&[
        r#"10.1.1.1 - - [1] "GET /repository/maven-npm-hybrid/some/thing HTTP/1.1" 200 - 10 1 "" [qtp]"#,
        r#"10.1.1.2 - - [1] "GET /repository/maven-mirror/left-pad HTTP/1.1" 200 - 10 1 "npm/10.2.4" [qtp]"#,
    ]);

    let analysis =
        analyze_file(log.path(), &AnalyzeOptions::default(), |_| {}).expect("readable log");

    assert_eq!(analysis.stats.format_count(PackageFormat::Maven), 2);
    assert_eq!(analysis.stats.format_count(PackageFormat::Npm), 0);
}

#[test]
fn empty_log_yields_empty_tallies() {
    let log = write_log::<&str>(&[]);

    let analysis =
        analyze_file(log.path(), &AnalyzeOptions::default(), |_| {}).expect("readable log");

    assert_eq!(analysis.summary.lines, 0);
    assert_eq!(analysis.stats.total_requests(), 0);
}

#[test]
fn unreadable_log_fails_before_counting() {
    let dir = tempfile::tempdir().expect("temp dir");

    let err = analyze_file(
        &dir.path().join("does-not-exist.log"),
        &AnalyzeOptions::default(),
        |_| panic!("no progress expected"),
    )
    .expect_err("missing log must fail");

    assert!(matches!(err, AnalyzeError::Open { .. }));
    assert!(err.to_string().contains("does-not-exist.log"));
}
