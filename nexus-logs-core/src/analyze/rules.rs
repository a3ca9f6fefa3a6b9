use crate::analyze::types::PackageFormat;

/// Signals that attribute a request to one package format.
///
/// All substrings are lower-case and non-empty; inputs are lower-cased before
/// matching.
#[derive(Debug)]
pub struct FormatRule {
    pub format: PackageFormat,
    pub user_agents: &'static [&'static str],
    pub paths: &'static [&'static str],
    pub repo_names: &'static [&'static str],
}

/// Ordered rule table. The first format with any matching signal wins, so the
/// order here decides ambiguous requests.
pub static FORMAT_RULES: &[FormatRule] = &[
    FormatRule {
        format: PackageFormat::Maven,
        user_agents: &["apache-maven", "gradle/", "sbt/", "apache-ivy", "aether"],
        paths: &[".pom", "maven-metadata.xml", ".war", ".aar"],
        repo_names: &["maven"],
    },
    FormatRule {
        format: PackageFormat::Npm,
        user_agents: &["npm/", "yarn/", "pnpm/"],
        paths: &["/-/"],
        repo_names: &["npm"],
    },
    FormatRule {
        format: PackageFormat::Docker,
        user_agents: &["docker/", "containerd/", "podman/", "skopeo/", "buildkit/"],
        paths: &["/v2/_catalog", "/manifests/", "/blobs/sha256:"],
        repo_names: &["docker"],
    },
    FormatRule {
        format: PackageFormat::NuGet,
        user_agents: &["nuget"],
        paths: &[".nupkg", "/v3/index.json", "findpackagesbyid"],
        repo_names: &["nuget"],
    },
    FormatRule {
        format: PackageFormat::PyPi,
        user_agents: &["pip/", "poetry/", "twine/", "pdm/"],
        paths: &["/simple/", ".whl", "/packages/"],
        repo_names: &["pypi", "python"],
    },
    FormatRule {
        format: PackageFormat::P2Eclipse,
        user_agents: &["eclipse", "equinox", "p2/"],
        paths: &[
            "content.jar",
            "artifacts.jar",
            "compositecontent",
            "compositeartifacts",
            "p2.index",
        ],
        repo_names: &["p2", "eclipse"],
    },
];
