#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sloccount binary.
#[macro_export]
macro_rules! sloccount {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sloccount"))
    };
}

/// A temporary source tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file, and any missing parents, under the fixture root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The Python sample with two code lines, a comment, a blank line and a
    /// docstring block.
    pub fn create_python_sample(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "# comment\nx = 1\n\n\"\"\"\nblock\ncomment\n\"\"\"\ny = 2\n",
        );
    }

    /// A small mixed-language project.
    pub fn create_project(&self) {
        self.create_python_sample("setup.py");
        self.create_file("src/main.c", "/* entry */\nint main(void) {\n    return 0;\n}\n");
        self.create_file("src/lib/util.rs", "// util\npub fn util() {}\n");
        self.create_file("src/lib/helpers.rs", "pub fn a() {}\n\npub fn b() {}\n");
        self.create_file("scripts/run.sh", "#!/bin/sh\necho run\n");
        self.create_file("Makefile", "all:\n\tcc src/main.c\n");
        self.create_bytes("assets/logo.bin", b"\x89PNG\r\n\x1a\n");
        self.create_dir("empty");
    }
}
