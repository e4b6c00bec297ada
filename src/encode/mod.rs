//! Payload encoding helpers
//!
//! Base64 encoding for source snippets, for endpoints that accept encoded
//! payloads. Ships a couple of built-in snippets so an encoded payload can be
//! produced without any input file.

#![allow(dead_code)]

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::path::Path;

const PYTHON_BUBBLE_SORT: &str = r#"numbers = [64, 34, 25, 12, 22]
print("Original:", numbers)
for i in range(len(numbers)):
    for j in range(0, len(numbers)-i-1):
        if numbers[j] > numbers[j+1]:
            numbers[j], numbers[j+1] = numbers[j+1], numbers[j]
print("Sorted:", numbers)"#;

// The two blank lines carry trailing spaces; they are part of the payload
const JAVA_BUBBLE_SORT: &str = r#"public class Main {
    public static void main(String[] args) {
        int[] arr = {64, 34, 25, 12, 22};
        int n = arr.length;
        
        for (int i = 0; i < n-1; i++) {
            for (int j = 0; j < n-i-1; j++) {
                if (arr[j] > arr[j+1]) {
                    int temp = arr[j];
                    arr[j] = arr[j+1];
                    arr[j+1] = temp;
                }
            }
        }
        
        System.out.print("Sorted: ");
        for (int x : arr) {
            System.out.print(x + " ");
        }
        System.out.println();
        System.out.println("Time: O(n^2)");
    }
}"#;

/// Built-in source snippets for the `encode` command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleSnippet {
    PythonBubbleSort,
    JavaBubbleSort,
}

impl SampleSnippet {
    pub fn name(&self) -> &'static str {
        match self {
            SampleSnippet::PythonBubbleSort => "python-bubble-sort",
            SampleSnippet::JavaBubbleSort => "java-bubble-sort",
        }
    }

    pub fn language(&self) -> &'static str {
        match self {
            SampleSnippet::PythonBubbleSort => "python",
            SampleSnippet::JavaBubbleSort => "java",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            SampleSnippet::PythonBubbleSort => PYTHON_BUBBLE_SORT,
            SampleSnippet::JavaBubbleSort => JAVA_BUBBLE_SORT,
        }
    }

    pub fn all() -> Vec<SampleSnippet> {
        vec![
            SampleSnippet::PythonBubbleSort,
            SampleSnippet::JavaBubbleSort,
        ]
    }

    pub fn from_name(name: &str) -> Option<SampleSnippet> {
        match name.to_lowercase().as_str() {
            "python" | "python-bubble-sort" => Some(SampleSnippet::PythonBubbleSort),
            "java" | "java-bubble-sort" => Some(SampleSnippet::JavaBubbleSort),
            _ => None,
        }
    }
}

impl fmt::Display for SampleSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name(), self.language())
    }
}

/// Encode a source snippet as standard base64.
pub fn encode_source(source: &str) -> String {
    STANDARD.encode(source.as_bytes())
}

/// Read a file and encode its contents as standard base64.
pub fn encode_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(STANDARD.encode(bytes))
}
