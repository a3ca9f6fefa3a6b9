use crate::analyze::constants::REPOSITORY_PREFIX;
use crate::analyze::types::RequestRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// "<METHOD> /repository/<name>/<rest> HTTP/<version>" <status> <size> <bytes> <time> "<user-agent>"
static REQUEST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""(?<method>[A-Z]+) (?<path>/repository/(?<repo>[^/\s"]+)/[^\s"]*) HTTP/[^"\s]+" \d{3} \S+ \S+ \S+ "(?<ua>[^"]*)""#,
    )
    .expect("request line pattern must compile")
});

/// Pull a repository request out of one raw access log line.
///
/// Returns `None` for anything that does not carry a quoted
/// `/repository/<name>/...` request followed by the status/timing fields and a
/// quoted user-agent. Such lines are not errors, they are just not counted.
pub fn extract_request(line: &str) -> Option<RequestRecord<'_>> {
    // Cheap reject before running the pattern.
    if !line.contains(REPOSITORY_PREFIX) {
        return None;
    }

    let caps = REQUEST_LINE.captures(line)?;

    let method = caps.name("method")?.as_str();
    let path = caps.name("path")?.as_str();
    let repository = caps.name("repo")?.as_str();
    let user_agent = caps.name("ua").map_or("", |m| m.as_str());

    // Only looked at once the request itself matched.
    let client_address = line.split_whitespace().next()?;

    Some(RequestRecord {
        method,
        path,
        repository,
        user_agent,
        client_address,
    })
}
