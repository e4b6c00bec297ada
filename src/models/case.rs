//! Suite case models
//!
//! Defines the built-in submission cases and the wire payload they carry.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// The built-in smoke suite.
///
/// Three snippets, one per supported language, each exercising double-quote
/// handling end to end through the submission endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteCase {
    PythonQuotes,
    JavaQuotes,
    BallerinaQuotes,
}

impl SuiteCase {
    /// Get case number (1-3)
    pub fn number(&self) -> u8 {
        match self {
            SuiteCase::PythonQuotes => 1,
            SuiteCase::JavaQuotes => 2,
            SuiteCase::BallerinaQuotes => 3,
        }
    }

    /// Get case display name
    pub fn name(&self) -> &'static str {
        match self {
            SuiteCase::PythonQuotes => "Python with double quotes",
            SuiteCase::JavaQuotes => "Java with double quotes",
            SuiteCase::BallerinaQuotes => "Ballerina with double quotes",
        }
    }

    /// Get the language tag sent on the wire
    pub fn language(&self) -> &'static str {
        match self {
            SuiteCase::PythonQuotes => "python",
            SuiteCase::JavaQuotes => "java",
            SuiteCase::BallerinaQuotes => "ballerina",
        }
    }

    /// Get the source text submitted for this case
    pub fn source(&self) -> &'static str {
        match self {
            SuiteCase::PythonQuotes => "print(\"Hello World\")\nprint(\"Line 2\")",
            SuiteCase::JavaQuotes => {
                r#"public class Main { public static void main(String[] args) { System.out.println("Hello World"); } }"#
            }
            SuiteCase::BallerinaQuotes => {
                r#"import ballerina/io; public function main() { io:println("Hello World"); }"#
            }
        }
    }

    /// Build the wire payload for this case
    pub fn submission(&self) -> Submission {
        Submission::new(self.source(), self.language())
    }

    /// Get all cases in suite order
    pub fn all() -> Vec<SuiteCase> {
        vec![
            SuiteCase::PythonQuotes,
            SuiteCase::JavaQuotes,
            SuiteCase::BallerinaQuotes,
        ]
    }

    /// Parse from case number
    pub fn from_number(n: u8) -> Option<SuiteCase> {
        match n {
            1 => Some(SuiteCase::PythonQuotes),
            2 => Some(SuiteCase::JavaQuotes),
            3 => Some(SuiteCase::BallerinaQuotes),
            _ => None,
        }
    }

    /// Parse from a case name or language tag
    pub fn from_name(s: &str) -> Option<SuiteCase> {
        match s.to_lowercase().as_str() {
            "python" | "python-quotes" => Some(SuiteCase::PythonQuotes),
            "java" | "java-quotes" => Some(SuiteCase::JavaQuotes),
            "ballerina" | "ballerina-quotes" => Some(SuiteCase::BallerinaQuotes),
            _ => None,
        }
    }
}

impl fmt::Display for SuiteCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {}: {}", self.number(), self.name())
    }
}

/// Request body accepted by the submission endpoint.
///
/// Serializes to `{"code": <string>, "language": <string>}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub code: String,
    pub language: String,
}

impl Submission {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_numbers() {
        assert_eq!(SuiteCase::PythonQuotes.number(), 1);
        assert_eq!(SuiteCase::BallerinaQuotes.number(), 3);
    }

    #[test]
    fn test_case_from_number() {
        assert_eq!(SuiteCase::from_number(1), Some(SuiteCase::PythonQuotes));
        assert_eq!(SuiteCase::from_number(3), Some(SuiteCase::BallerinaQuotes));
        assert_eq!(SuiteCase::from_number(4), None);
    }

    #[test]
    fn test_case_from_name() {
        assert_eq!(SuiteCase::from_name("python"), Some(SuiteCase::PythonQuotes));
        assert_eq!(SuiteCase::from_name("JAVA"), Some(SuiteCase::JavaQuotes));
        assert_eq!(SuiteCase::from_name("rust"), None);
    }

    #[test]
    fn test_all_cases_ordered() {
        let all = SuiteCase::all();
        assert_eq!(all.len(), 3);
        let numbers: Vec<u8> = all.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_sources_keep_double_quotes() {
        for case in SuiteCase::all() {
            assert!(case.source().contains("\"Hello World\""));
        }
    }

    #[test]
    fn test_submission_wire_shape() {
        let payload = SuiteCase::PythonQuotes.submission();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["code"], "print(\"Hello World\")\nprint(\"Line 2\")");
        assert_eq!(value["language"], "python");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
