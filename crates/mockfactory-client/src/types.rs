//! Request and response types for the execution API.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language token or file extension outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0} (supported: python, javascript, php, perl, go, shell, html)")]
pub struct UnsupportedLanguage(pub String);

/// Languages the execution backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python 3.
    Python,
    /// Node.js JavaScript.
    Javascript,
    /// PHP.
    Php,
    /// Perl.
    Perl,
    /// Go.
    Go,
    /// POSIX shell.
    Shell,
    /// HTML (rendered, not executed).
    Html,
}

/// Fixed extension-to-language table.
const EXTENSION_TABLE: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("js", Language::Javascript),
    ("php", Language::Php),
    ("pl", Language::Perl),
    ("go", Language::Go),
    ("sh", Language::Shell),
    ("html", Language::Html),
];

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 7] = [
        Self::Python,
        Self::Javascript,
        Self::Php,
        Self::Perl,
        Self::Go,
        Self::Shell,
        Self::Html,
    ];

    /// Wire name of the language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::Php => "php",
            Self::Perl => "perl",
            Self::Go => "go",
            Self::Shell => "shell",
            Self::Html => "html",
        }
    }

    /// Resolve a language from a file path's extension.
    ///
    /// Lookup is case-insensitive on the extension.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedLanguage`] naming the extension when it is not in
    /// the table, or naming the whole file name when there is no extension.
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedLanguage> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| UnsupportedLanguage(path.display().to_string()))?;
        let lowered = ext.to_ascii_lowercase();
        EXTENSION_TABLE
            .iter()
            .find(|(e, _)| *e == lowered)
            .map(|&(_, lang)| lang)
            .ok_or_else(|| UnsupportedLanguage(format!(".{ext}")))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == lowered)
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// A code-execution request submitted to the backend.
///
/// Always carries exactly one language and one source payload. A `timeout`
/// overrides the server-side default for this run; callers validate that it
/// is positive before constructing the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionRequest {
    /// Language to execute the code as.
    pub language: Language,
    /// Source code payload.
    pub code: String,
    /// Per-run timeout override in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

/// Account quota class controlling execution rate limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Unauthenticated access.
    #[default]
    Anonymous,
    /// Free registered account.
    Free,
    /// Paid account.
    Pro,
}

impl Tier {
    /// Display label for the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a code execution, produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Standard output of the executed program.
    #[serde(default)]
    pub stdout: String,
    /// Standard error of the executed program.
    #[serde(default)]
    pub stderr: String,
    /// Exit code of the executed program.
    #[serde(default)]
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    #[serde(default)]
    pub duration_ms: u64,
    /// Tier the run was accounted against.
    #[serde(default)]
    pub tier: Tier,
    /// Executions remaining in the current quota window, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_executions: Option<u32>,
}

impl ExecutionResult {
    /// Whether the executed program exited cleanly.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Current usage counters for the caller's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Executions consumed in the current window.
    pub runs_used: u32,
    /// Execution quota for the current window.
    pub runs_limit: u32,
    /// Account tier.
    #[serde(default)]
    pub tier: Tier,
    /// Whether the snapshot belongs to an authenticated account.
    #[serde(default, rename = "is_authenticated")]
    pub authenticated: bool,
}

impl UsageSnapshot {
    /// Executions remaining in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.runs_limit.saturating_sub(self.runs_used)
    }
}

/// Account profile from `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Account email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Subscription tier.
    #[serde(default, rename = "subscription_tier")]
    pub tier: Tier,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn every_documented_extension_resolves() {
        let cases = [
            ("script.py", Language::Python),
            ("app.js", Language::Javascript),
            ("index.php", Language::Php),
            ("legacy.pl", Language::Perl),
            ("main.go", Language::Go),
            ("setup.sh", Language::Shell),
            ("page.html", Language::Html),
        ];
        for (name, expected) in cases {
            let got = Language::from_path(Path::new(name)).expect(name);
            assert_eq!(got, expected, "{name}");
        }
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        let lang = Language::from_path(Path::new("SCRIPT.PY")).expect("resolve");
        assert_eq!(lang, Language::Python);
    }

    #[test]
    fn unknown_extension_names_the_extension() {
        let err = Language::from_path(Path::new("script.xyz")).unwrap_err();
        assert_eq!(err.0, ".xyz");
        assert!(err.to_string().contains(".xyz"));
    }

    #[test]
    fn missing_extension_is_unsupported() {
        let err = Language::from_path(&PathBuf::from("Makefile")).unwrap_err();
        assert!(err.to_string().contains("Makefile"));
    }

    #[test]
    fn explicit_token_parses() {
        for lang in Language::ALL {
            let parsed: Language = lang.as_str().parse().expect("parse");
            assert_eq!(parsed, lang);
        }
        assert_eq!("PYTHON".parse::<Language>().expect("parse"), Language::Python);
    }

    #[test]
    fn unknown_token_names_the_token() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn request_omits_absent_timeout() {
        let request = ExecutionRequest {
            language: Language::Python,
            code: "print('hi')".into(),
            timeout: None,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["language"], "python");
        assert!(json.get("timeout").is_none());
    }

    #[test]
    fn request_carries_timeout_override() {
        let request = ExecutionRequest {
            language: Language::Go,
            code: "package main".into(),
            timeout: Some(60),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["timeout"], 60);
    }

    #[test]
    fn result_success_tracks_exit_code() {
        let result: ExecutionResult = serde_json::from_value(serde_json::json!({
            "stdout": "hi\n",
            "exit_code": 0,
        }))
        .expect("deserialize");
        assert!(result.success());
        assert_eq!(result.stdout, "hi\n");
        assert_eq!(result.tier, Tier::Anonymous);

        let failed: ExecutionResult = serde_json::from_value(serde_json::json!({
            "stderr": "ZeroDivisionError: division by zero",
            "exit_code": 1,
        }))
        .expect("deserialize");
        assert!(!failed.success());
    }

    #[test]
    fn usage_remaining_saturates() {
        let snapshot = UsageSnapshot {
            runs_used: 12,
            runs_limit: 10,
            tier: Tier::Free,
            authenticated: true,
        };
        assert_eq!(snapshot.remaining(), 0);
    }

    #[test]
    fn tier_deserializes_lowercase() {
        let tier: Tier = serde_json::from_str("\"pro\"").expect("deserialize");
        assert_eq!(tier, Tier::Pro);
        assert_eq!(tier.to_string(), "pro");
    }
}
