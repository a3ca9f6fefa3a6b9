use crate::analyze::rules::{FORMAT_RULES, FormatRule};
use crate::analyze::types::PackageFormat;

/// Attribute a request to a package format.
///
/// Formats are tried in [`FORMAT_RULES`] order. For each one the user-agent,
/// path and repository-name signals are checked in that order, and the first
/// hit decides the format. No hit anywhere yields [`PackageFormat::Other`].
pub fn classify(repository: &str, user_agent: &str, path: &str) -> PackageFormat {
    classify_with(FORMAT_RULES, repository, user_agent, path)
}

pub(crate) fn classify_with(
    rules: &[FormatRule],
    repository: &str,
    user_agent: &str,
    path: &str,
) -> PackageFormat {
    let repository = repository.to_lowercase();
    let user_agent = user_agent.to_lowercase();
    let path = path.to_lowercase();

    for rule in rules {
        if contains_any(&user_agent, rule.user_agents)
            || contains_any(&path, rule.paths)
            || contains_any(&repository, rule.repo_names)
        {
            return rule.format;
        }
    }

    PackageFormat::Other
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    !haystack.is_empty()
        && needles
            .iter()
            .any(|needle| !needle.is_empty() && haystack.contains(needle))
}
