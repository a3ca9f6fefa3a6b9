use crate::analyze::tests::test_helpers::RawLogLine;
use crate::analyze::{AnalyzeError, AnalyzeOptions, PackageFormat, analyze_file, analyze_reader};
use pretty_assertions::assert_eq;
use std::io::{Cursor, Write};
use std::path::Path;

const MAVEN_LINE: &str = r#"10.0.0.1 - - [1] "GET /repository/internal-libs/com/foo/1.0/foo-1.0.jar HTTP/1.1" 200 - 1024 5 "Apache-Maven/3.8.1" [qtp]"#;
const FAVICON_LINE: &str = r#"10.0.0.1 - - [1] "GET /favicon.ico HTTP/1.1" 200 - 1024 5 "Mozilla/5.0" [qtp]"#;

fn analyze_str(input: &str) -> crate::analyze::Analysis {
    analyze_reader(
        Cursor::new(input.as_bytes().to_vec()),
        Path::new("<memory>"),
        &AnalyzeOptions::default(),
        |_| {},
    )
    .expect("in-memory read cannot fail")
}

#[test]
fn single_maven_line_counts_everywhere() {
    let analysis = analyze_str(MAVEN_LINE);
    let stats = &analysis.stats;

    assert_eq!(stats.repository_count("internal-libs"), 1);
    assert_eq!(stats.format_count(PackageFormat::Maven), 1);
    assert_eq!(stats.client_count(PackageFormat::Maven, "10.0.0.1"), 1);
    assert_eq!(analysis.summary.matched, 1);
}

#[test]
fn non_repository_line_changes_nothing() {
    let analysis = analyze_str(FAVICON_LINE);

    assert_eq!(analysis.stats.total_requests(), 0);
    assert!(analysis.stats.formats_by_count().is_empty());
    assert_eq!(analysis.summary.lines, 1);
    assert_eq!(analysis.summary.skipped, 1);
}

#[test]
fn matched_lines_equal_repository_total() {
    let lines = [
        MAVEN_LINE.to_string(),
        FAVICON_LINE.to_string(),
        RawLogLine::new("10.0.0.2", "/repository/npm-proxy/react")
            .user_agent("npm/10.2.4")
            .build(),
        String::new(),
        "garbage".to_string(),
        RawLogLine::new("10.0.0.3", "/repository/raw/readme.txt").build(),
        RawLogLine::new("10.0.0.3", "/repository/raw/readme.txt").build(),
    ];
    let analysis = analyze_str(&lines.join("\n"));
    let stats = &analysis.stats;

    assert_eq!(analysis.summary.lines, 7);
    assert_eq!(analysis.summary.matched, 4);
    assert_eq!(analysis.summary.skipped, 3);
    assert_eq!(stats.total_requests(), analysis.summary.matched);

    let format_total: u64 = stats.formats_by_count().iter().map(|(_, c)| c).sum();
    assert_eq!(format_total, stats.total_requests());
    assert_eq!(stats.format_count(PackageFormat::Other), 2);
    assert_eq!(stats.client_count(PackageFormat::Other, "10.0.0.3"), 2);
}

#[test]
fn crlf_line_endings_are_handled() {
    let input = format!("{MAVEN_LINE}\r\n{MAVEN_LINE}\r\n");
    let analysis = analyze_str(&input);

    assert_eq!(analysis.summary.lines, 2);
    assert_eq!(analysis.stats.format_count(PackageFormat::Maven), 2);
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let mut input = b"10.0.0.7 - - [1] \"GET /repository/pypi-proxy/simple/caf\xe9/ HTTP/1.1\" 200 - 1 1 \"pip/24.0\" [qtp]\n".to_vec();
    input.extend_from_slice(b"\xff\xfe not a log line\n");

    let analysis = analyze_reader(
        Cursor::new(input),
        Path::new("<memory>"),
        &AnalyzeOptions::default(),
        |_| {},
    )
    .expect("in-memory read cannot fail");

    assert_eq!(analysis.summary.lines, 2);
    assert_eq!(analysis.summary.matched, 1);
    assert_eq!(analysis.stats.repository_count("pypi-proxy"), 1);
    assert_eq!(analysis.stats.format_count(PackageFormat::PyPi), 1);
}

#[test]
fn progress_fires_every_interval() {
    let input = vec![MAVEN_LINE; 25].join("\n");
    let options = AnalyzeOptions {
        progress_interval: 10,
    };
    let mut ticks = Vec::new();

    analyze_reader(
        Cursor::new(input.into_bytes()),
        Path::new("<memory>"),
        &options,
        |n| ticks.push(n),
    )
    .expect("in-memory read cannot fail");

    assert_eq!(ticks, vec![10, 20]);
}

#[test]
fn zero_interval_disables_progress() {
    let input = vec![MAVEN_LINE; 5].join("\n");
    let options = AnalyzeOptions {
        progress_interval: 0,
    };
    let mut ticks = 0;

    analyze_reader(
        Cursor::new(input.into_bytes()),
        Path::new("<memory>"),
        &options,
        |_| ticks += 1,
    )
    .expect("in-memory read cannot fail");

    assert_eq!(ticks, 0);
}

#[test]
fn analyze_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "{MAVEN_LINE}").expect("write");
    writeln!(file, "{FAVICON_LINE}").expect("write");

    let analysis =
        analyze_file(file.path(), &AnalyzeOptions::default(), |_| {}).expect("readable file");

    assert_eq!(analysis.summary.lines, 2);
    assert_eq!(analysis.stats.repository_count("internal-libs"), 1);
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nexus.log");

    let err = analyze_file(&missing, &AnalyzeOptions::default(), |_| {})
        .expect_err("missing file must fail");

    match err {
        AnalyzeError::Open { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Open, got {:?}", other),
    }
}
