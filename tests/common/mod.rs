//! Common test utilities and helpers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use csvdiff::parser::CsvParser;
use csvdiff::Dataset;
use tempfile::TempDir;

/// Temporary directory holding csv inputs for one test
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Get the root path of the test fixture
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a csv file from rows of fields, header first
    pub fn create_csv(&self, name: &str, data: &[&[&str]]) -> PathBuf {
        let mut content = String::new();
        for row in data {
            content.push_str(&row.join(","));
            content.push('\n');
        }
        self.create_file(name, &content)
    }

    /// Write a file with raw contents
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).expect("write test file");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read output file")
    }
}

/// Parse csv text held in memory
pub fn dataset(source: &str, data: &[&[&str]]) -> Dataset {
    let text: String = data.iter().map(|row| row.join(",") + "\n").collect();
    CsvParser
        .parse_reader(source, text.as_bytes())
        .expect("parse test csv")
}

/// Vulnerability scan style inputs shared by several tests
pub const VULNS_LEFT: &[&[&str]] = &[
    &["vuln_id", "package", "severity"],
    &["CVE-2023-0001", "openssl", "high"],
    &["CVE-2023-0002", "curl", "low"],
    &["CVE-2023-0003", "zlib", "medium"],
];

pub const VULNS_RIGHT: &[&[&str]] = &[
    &["vuln_id", "package", "severity"],
    &["CVE-2023-0001", "openssl", "high"],
    &["CVE-2023-0003", "zlib", "medium"],
    &["CVE-2023-0004", "glibc", "critical"],
];
