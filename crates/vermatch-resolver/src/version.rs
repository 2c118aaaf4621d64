//! Semantic version parsing and precedence.
//!
//! The accepted syntax is slightly looser than strict semver so that registry
//! data written by hand still resolves:
//! - an optional leading `v` (`v1.2.3`)
//! - one to three numeric release segments, missing ones default to `0`
//! - an optional `-prerelease` and `+build` part, validated as in semver
//!
//! Ordering follows semver precedence. Build metadata and the original text
//! never affect ordering or equality.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::{BuildMetadata, Prerelease};

use crate::error::VersionError;

const RELEASE_SEGMENTS: usize = 3;

/// A parsed version that remembers the exact text it came from.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    pub original: String,
    release: [u64; RELEASE_SEGMENTS],
    precision: usize,
    pre: Prerelease,
    build: BuildMetadata,
}

impl SemanticVersion {
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let body = input.strip_prefix('v').unwrap_or(input);
        if body.is_empty() {
            return Err(VersionError::new(input, "empty version"));
        }

        let (body, build) = match body.split_once('+') {
            Some((_, "")) => return Err(VersionError::new(input, "empty build metadata")),
            Some((rest, build)) => {
                let build = BuildMetadata::new(build)
                    .map_err(|e| VersionError::new(input, format!("build metadata: {e}")))?;
                (rest, build)
            }
            None => (body, BuildMetadata::EMPTY),
        };

        let (core, pre) = match body.split_once('-') {
            Some((_, "")) => return Err(VersionError::new(input, "empty prerelease")),
            Some((core, pre)) => {
                let pre = Prerelease::new(pre)
                    .map_err(|e| VersionError::new(input, format!("prerelease: {e}")))?;
                (core, pre)
            }
            None => (body, Prerelease::EMPTY),
        };

        let segments: Vec<&str> = core.split('.').collect();
        if segments.len() > RELEASE_SEGMENTS {
            return Err(VersionError::new(
                input,
                format!("expected at most {RELEASE_SEGMENTS} release segments"),
            ));
        }

        let mut release = [0u64; RELEASE_SEGMENTS];
        for (slot, segment) in release.iter_mut().zip(&segments) {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::new(
                    input,
                    format!("release segment '{segment}' is not a number"),
                ));
            }
            *slot = segment.parse().map_err(|_| {
                VersionError::new(input, format!("release segment '{segment}' is too large"))
            })?;
        }

        Ok(Self {
            original: input.to_string(),
            release,
            precision: segments.len(),
            pre,
            build,
        })
    }

    pub fn major(&self) -> u64 {
        self.release[0]
    }

    pub fn minor(&self) -> u64 {
        self.release[1]
    }

    pub fn patch(&self) -> u64 {
        self.release[2]
    }

    /// Release segment by index (0 = major). Out-of-range indices read as `0`.
    pub fn segment(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }

    /// Number of release segments written in the original text (1 to 3).
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn prerelease(&self) -> &str {
        self.pre.as_str()
    }

    pub fn build(&self) -> &str {
        self.build.as_str()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Whether both versions share `major.minor.patch`, ignoring prerelease.
    pub fn same_release(&self, other: &Self) -> bool {
        self.release == other.release
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.release
            .cmp(&other.release)
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn parses_full_version() {
        let ver = v("1.2.3-rc.1+build.5");
        assert_eq!((ver.major(), ver.minor(), ver.patch()), (1, 2, 3));
        assert_eq!(ver.prerelease(), "rc.1");
        assert_eq!(ver.build(), "build.5");
        assert_eq!(ver.precision(), 3);
        assert!(ver.is_prerelease());
    }

    #[test]
    fn short_forms_pad_with_zero() {
        let ver = v("1.2");
        assert_eq!(ver.patch(), 0);
        assert_eq!(ver.precision(), 2);
        assert_eq!(v("1"), v("1.0.0"));
        assert_eq!(v("1").precision(), 1);
    }

    #[test]
    fn leading_v_is_kept_in_original() {
        let ver = v("v1.4.0");
        assert_eq!(ver.major(), 1);
        assert_eq!(ver.to_string(), "v1.4.0");
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            "",
            "v",
            "not-a-version",
            "1.2.3.4",
            "1..2",
            "1.2.x",
            "1.0.0-",
            "1.0.0+",
            "1.0.0-01",
            "1.0.0-beta..1",
            " 1.0.0",
            "1.0.0 ",
        ] {
            assert!(SemanticVersion::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn error_names_input() {
        let err = SemanticVersion::parse("1.x").unwrap_err();
        assert_eq!(err.input, "1.x");
        assert!(err.to_string().contains("'1.x'"));
    }

    #[test]
    fn release_ordering() {
        assert!(v("1.0.0") < v("1.0.1"));
        assert!(v("1.0.9") < v("1.1.0"));
        assert!(v("1.9.9") < v("2.0.0"));
        assert!(v("0.10.0") > v("0.9.0"));
    }

    #[test]
    fn prerelease_precedence() {
        // Examples from the semver precedence rules.
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn numeric_prerelease_compares_numerically() {
        assert!(v("0.2.1-1.beta") < v("0.2.1-10.beta"));
        assert!(v("0.2.1-2.beta") < v("0.2.1-10.beta"));
    }

    #[test]
    fn build_metadata_ignored() {
        assert_eq!(v("1.0.0+a"), v("1.0.0+b"));
        assert_eq!(v("0.2.1-10.beta+ga9fa278"), v("0.2.1-10.beta"));
    }

    #[test]
    fn same_release_ignores_prerelease() {
        assert!(v("1.1.0-beta").same_release(&v("1.1.0-0")));
        assert!(!v("1.1.0-beta").same_release(&v("1.1.1-beta")));
    }
}
