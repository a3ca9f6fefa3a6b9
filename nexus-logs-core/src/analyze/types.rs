use serde::Serialize;
use std::fmt;

/// One repository request pulled out of a log line.
///
/// Borrows from the raw line; it only lives for the duration of a single
/// extract/classify/record step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestRecord<'a> {
    pub method: &'a str,
    /// Full request path, `/repository/<name>/...` included.
    pub path: &'a str,
    /// Never empty.
    pub repository: &'a str,
    /// May be empty.
    pub user_agent: &'a str,
    pub client_address: &'a str,
}

/// Package ecosystem a request is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PackageFormat {
    #[serde(rename = "Maven")]
    Maven,
    #[serde(rename = "npm")]
    Npm,
    #[serde(rename = "Docker")]
    Docker,
    #[serde(rename = "NuGet")]
    NuGet,
    #[serde(rename = "PyPI")]
    PyPi,
    #[serde(rename = "P2/Eclipse")]
    P2Eclipse,
    #[serde(rename = "Other")]
    Other,
}

impl PackageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageFormat::Maven => "Maven",
            PackageFormat::Npm => "npm",
            PackageFormat::Docker => "Docker",
            PackageFormat::NuGet => "NuGet",
            PackageFormat::PyPi => "PyPI",
            PackageFormat::P2Eclipse => "P2/Eclipse",
            PackageFormat::Other => "Other",
        }
    }
}

impl fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
