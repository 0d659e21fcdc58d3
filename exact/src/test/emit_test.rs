use super::*;

use difference::{Changeset, Difference};
use libtest_mimic::{Outcome, Test};
use std::collections::HashMap;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

/// Describes a test case for testing the emit of an exact invocation.
#[derive(Clone)]
pub struct ExactEmitTest {
    /// Annotation name -> Annotation message
    pub annotations: HashMap<String, String>,
    pub annotation_order: Vec<String>,
    pub args: String,
    pub input: String,
    pub stdout: String,
    pub stderr: String,
    pub exitcode: String,
}

impl ExactEmitTest {
    /// Creates an exact emit test case from a .exact test file.
    pub fn new(test_file: &Test<PathBuf>, mut content: String) -> Result<Self, String> {
        // First we need to parse out annotations at the top of the file.
        let mut annotations = HashMap::<String, String>::new();
        let mut annotation_order = Vec::new();
        while content.starts_with('@') {
            let line_split = content.find('\n').unwrap_or_else(|| content.len());
            let rest_content = content.split_off(line_split);
            let annotation = content;
            content = rest_content.trim_start_matches('\n').to_owned();

            let mut annotation_parts = annotation.splitn(2, ':');
            let annotation = annotation_parts.next().unwrap_or_default();
            let annotation_msg = annotation_parts.next().map(|s| s.trim()).unwrap_or("");

            annotations.insert(annotation.into(), annotation_msg.into());
            annotation_order.push(annotation.into());
        }

        // Next we get all the clauses.
        let clause_names = ["args", "in", "stdout", "stderr", "exitcode"];
        let mut clauses = Vec::with_capacity(clause_names.len());
        for clause in clause_names.iter() {
            let mut splits: Vec<_> = content
                .split(&format!("{}\n", get_clause_delim(clause)))
                .map(String::from)
                .collect();

            if splits.len() != 3 {
                if clause == &"args" || (*BLESS && can_be_blessed(clause)) {
                    // Args are optional, so we can skip them if not found.
                    // If running in bless mode, blessable clauses will get updated later, so just
                    // make them empty for now.
                    clauses.push(String::new());
                    content = splits.pop().unwrap_or_default();
                    continue;
                }

                return Err(Self::missing_clause_failure(test_file, clause));
            }

            content = splits.pop().unwrap_or_default(); // next content is the last split
            let mut clause_content = splits.pop().unwrap_or_default(); // clause content is the second split

            if clause == &"in" {
                // The split input always has a trailing newline that isn't intended for the test.
                // ===in
                // <program>
                //          ^ newline here
                // ===in
                clause_content.pop();
            }
            clauses.push(clause_content);
        }
        let mut clauses = clauses.into_iter();

        Ok(ExactEmitTest {
            annotations,
            annotation_order,
            args: clauses.next().unwrap_or_default(),
            input: clauses.next().unwrap_or_default(),
            stdout: clauses.next().unwrap_or_default(),
            stderr: clauses.next().unwrap_or_default(),
            exitcode: clauses.next().unwrap_or_default(),
        })
    }

    /// Executes an exact emit test, ensuring the stdout and exit code of exact are as expected
    /// from the test file, and that every line of the expected stderr is present in order.
    /// If run in bless mode, the test file is updated with the actual stdout and stderr.
    /// If run in fail-todo mode, the test fails on any @TODO annotations.
    pub fn drive_test(self, test_name: String, test_path: PathBuf) -> Outcome {
        if *FAIL_TODO && self.annotations.contains_key("@TODO") {
            return fail!("Test is marked @TODO, which the test runner is set to fail on.");
        }

        let (stdout, stderr, exitcode) = run_exact_cli(&self.args, &self.input);

        if *BLESS {
            let blessed = self.make_bless_file(&stdout, &stderr, &exitcode);
            return match fs::write(test_path, blessed) {
                Ok(_) => Outcome::Passed,
                Err(e) => fail!("{}", e),
            };
        }

        // Right ends of bless content may be inaccurate because we always force a newline, so
        // just check that the actual content is correct.

        macro_rules! t {
            ($expr:expr) => {
                $expr.trim_end()
            };
        }

        let stderr_ok = contains_lines_in_order(&stderr, &self.stderr);
        if t!(stdout) == t!(self.stdout) && stderr_ok && t!(exitcode) == t!(self.exitcode) {
            return Outcome::Passed;
        }

        let mut msg = String::new();
        if t!(stdout) != t!(self.stdout) {
            msg.push_str("Mismatch in stdout:\n");
            msg.push_str(&diff(t!(self.stdout), t!(stdout)));
        }
        if !stderr_ok {
            msg.push_str("Expected lines missing from stderr:\n");
            msg.push_str(&diff(t!(self.stderr), t!(stderr)));
        }
        if t!(exitcode) != t!(self.exitcode) {
            msg.push_str("Mismatch in exit code:\n");
            msg.push_str(&diff(t!(self.exitcode), t!(exitcode)));
        }
        let _ = write!(
            msg,
            "Hint: If this is expected, try running `{}`.",
            get_bless_cmd(&test_name)
        );
        Outcome::Failed { msg: Some(msg) }
    }

    /// Generates the actual ("bless"ed) contents of a test case.
    fn make_bless_file(&self, stdout: &str, stderr: &str, exitcode: &str) -> String {
        let mut content = String::with_capacity(256);

        if !self.annotations.is_empty() {
            for annotation in self.annotation_order.iter() {
                match self.annotations.get(annotation) {
                    Some(msg) if !msg.is_empty() => {
                        content.push_str(&format!("{}: {}\n", annotation, msg));
                    }
                    _ => {
                        content.push_str(annotation);
                        content.push('\n');
                    }
                }
            }
            content.push('\n');
        }

        let mut push = |clause: &str, clause_content: &str| {
            let clause_delim = get_clause_delim(clause);
            content.push_str(&format!("{}\n", clause_delim));
            content.push_str(clause_content);
            if !clause_content.is_empty() && !clause_content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&format!("{}\n\n", clause_delim));
        };

        if !self.args.is_empty() {
            push("args", &self.args);
        }
        push("in", &format!("{}\n", self.input));
        push("stdout", stdout);
        push("stderr", stderr);
        push("exitcode", exitcode);
        content.pop(); // drop trailing newline
        content
    }

    /// Describes a missing clause in a test file.
    fn missing_clause_failure(test_file: &Test<PathBuf>, clause: &str) -> String {
        let clause_delim = get_clause_delim(clause);
        let mut msg = format!(
            "{} clause missing in test case.\n\
            Hint: Add a\n\
            \n\
            \t{}\n\
            \t<text>\n\
            \t{}\n\
            \n\
            section to the test file.",
            clause_delim, clause_delim, clause_delim
        );
        if can_be_blessed(clause) {
            let _ = write!(
                msg,
                "\nHint: You can run `{}` to do this for you.",
                get_bless_cmd(&test_file.name)
            );
        }
        msg
    }
}

/// Returns the delimiter for a test case clause in a .exact test file.
fn get_clause_delim(clause: &str) -> String {
    let prefix = match clause {
        "args" => "!!!",
        "in" => "===",
        _ => "~~~",
    };
    format!("{}{}", prefix, clause)
}

/// Returns whether a clause can be auto-generated with BLESS=1.
fn can_be_blessed(clause: &str) -> bool {
    matches!(clause, "exitcode" | "stdout" | "stderr")
}

/// Whether every non-empty line of `expected` appears in `actual`, in order, ignoring
/// surrounding whitespace.
fn contains_lines_in_order(actual: &str, expected: &str) -> bool {
    let mut actual_lines = actual.lines().map(str::trim);
    expected
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .all(|expected_line| actual_lines.any(|line| line == expected_line))
}

/// Renders a line diff between two texts.
fn diff(text1: &str, text2: &str) -> String {
    let Changeset { diffs, .. } = Changeset::new(text1, text2, "\n");

    let mut rendered = String::new();
    for diff in diffs {
        let (content, prefix) = match diff {
            Difference::Same(ref x) => (x, " "),
            Difference::Add(ref x) => (x, "+"),
            Difference::Rem(ref x) => (x, "-"),
        };
        for line in content.lines() {
            rendered.push_str(prefix);
            rendered.push_str(line);
            rendered.push('\n');
        }
    }
    rendered
}
