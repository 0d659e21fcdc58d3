use libtest_mimic::{run_tests, Arguments, Outcome, Test};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

#[macro_use]
mod common;
mod emit_test;

use common::*;
use emit_test::ExactEmitTest;
use exec::*;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();
    let test_files = collect_test_files()?;
    let tests = test_files.into_iter().map(TestCase::new).collect();
    run_tests(&args, tests, TestCase::drive_test).exit();
}

/// Collects all `.exact` system test files, starting from exact/src/test and visiting all nested
/// directories.
fn collect_test_files() -> Result<Vec<Test<PathBuf>>, Box<dyn Error>> {
    let root_test_path = Path::new("src/test");
    let mut dirs_to_visit = vec![root_test_path.to_path_buf()];
    let mut tests = Vec::with_capacity(64);
    while let Some(dir) = dirs_to_visit.pop() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let entry_type = entry.file_type()?;
            if entry_type.is_dir() {
                dirs_to_visit.push(path);
                continue;
            }
            if path.extension() == Some(OsStr::new("exact")) {
                let name = path.strip_prefix(root_test_path)?.display().to_string();

                tests.push(Test {
                    name,
                    kind: "system".to_owned(),
                    is_ignored: false,
                    is_bench: false,
                    data: path,
                });
            }
        }
    }
    tests.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tests)
}

#[derive(Clone)]
struct TestCase {
    path: PathBuf,
    variant: TestCaseVariant,
}

impl TestCase {
    /// Executes an exact system test.
    fn drive_test(test: &Test<Self>) -> Outcome {
        let test_name = test.name.clone();
        let test_path = test.data.path.clone();
        match test.data.variant.clone() {
            TestCaseVariant::FailedTestConstruction(msg) => fail!("{}", msg),
            TestCaseVariant::ExactEmit(tc) => tc.drive_test(test_name, test_path),
        }
    }

    /// Creates a test case from an exact system test file.
    fn new(test_file: Test<PathBuf>) -> Test<Self> {
        let variant = match fs::read_to_string(&test_file.data) {
            Ok(content) => match ExactEmitTest::new(&test_file, content) {
                Ok(test) => test.into(),
                Err(msg) => msg.into(),
            },
            Err(e) => format!("Failed to read test file: {}", e).into(),
        };

        Test {
            name: test_file.name,
            data: TestCase {
                path: test_file.data,
                variant,
            },
            kind: "system".to_owned(),
            is_ignored: false,
            is_bench: false,
        }
    }
}

#[derive(Clone)]
enum TestCaseVariant {
    ExactEmit(ExactEmitTest),
    FailedTestConstruction(String),
}

macro_rules! variant_from_test {
    ($($variant:ident from $test:ident)*) => {$(
        impl From<$test> for TestCaseVariant {
            fn from(test: $test) -> Self {
                Self::$variant(test)
            }
        }
    )*};
}

variant_from_test! {
    ExactEmit from ExactEmitTest
    FailedTestConstruction from String
}

/// Returns the command to bless a test file.
fn get_bless_cmd(test_name: &str) -> String {
    format!("BLESS=1 cargo test --test system_tests -- \"{}\"", test_name)
}
