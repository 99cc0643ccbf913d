//! Doctor mode.
//!
//! Inspects every entry of the variable and reports one line per path.
//! The whole list is always inspected; any problem makes the run fail.

use serde::Serialize;

use crate::error::Result;
use crate::paths::{diagnose, inspect, PathList, PathProperties, Problem};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand {
    list: PathList,
    json: bool,
}

/// One inspected entry in a JSON doctor report.
#[derive(Debug, Serialize)]
pub struct EntryReport {
    #[serde(flatten)]
    pub properties: PathProperties,
    pub problem: Option<Problem>,
}

/// JSON doctor report.
#[derive(Debug, Serialize)]
pub struct DoctorReport<'a> {
    pub variable: &'a str,
    pub ok: bool,
    pub entries: Vec<EntryReport>,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(list: PathList, json: bool) -> Self {
        Self { list, json }
    }

    /// Get the list being checked.
    pub fn list(&self) -> &PathList {
        &self.list
    }

    /// Inspect and classify every entry, in order.
    pub fn inspect_all(&self) -> Vec<EntryReport> {
        self.list
            .entries()
            .iter()
            .map(|entry| {
                let properties = inspect(entry);
                let problem = diagnose(&properties);
                EntryReport {
                    properties,
                    problem,
                }
            })
            .collect()
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self.inspect_all();
        let failed = entries.iter().filter(|e| e.problem.is_some()).count();

        tracing::debug!(
            "Checked {} entries of ${}, {} with problems",
            entries.len(),
            self.list.variable(),
            failed
        );

        if self.json {
            let report = DoctorReport {
                variable: self.list.variable(),
                ok: failed == 0,
                entries,
            };
            ui.message(&serde_json::to_string_pretty(&report)?);
        } else {
            let show_successes = ui.output_mode().shows_successes();
            for entry in &entries {
                let path = &entry.properties.raw_path;
                match entry.problem {
                    Some(problem) => ui.path_problem(path, problem),
                    None if show_successes => ui.path_ok(path),
                    None => {}
                }
            }
        }

        if failed == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::join_entries;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn command_for(entries: &[&str], json: bool) -> DoctorCommand {
        DoctorCommand::new(PathList::parse("PATH", &join_entries(entries)), json)
    }

    fn make_dirs(temp: &TempDir, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|name| {
                let dir = temp.path().join(name);
                fs::create_dir(&dir).unwrap();
                dir.to_str().unwrap().to_string()
            })
            .collect()
    }

    #[test]
    fn healthy_list_succeeds_silently() {
        let temp = TempDir::new().unwrap();
        let dirs = make_dirs(&temp, &["a", "b"]);
        let refs: Vec<&str> = dirs.iter().map(String::as_str).collect();
        let cmd = command_for(&refs, false);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.successes().is_empty());
        assert!(ui.problems().is_empty());
    }

    #[test]
    fn verbose_lists_every_healthy_path_in_order() {
        let temp = TempDir::new().unwrap();
        let dirs = make_dirs(&temp, &["z", "a", "m"]);
        let refs: Vec<&str> = dirs.iter().map(String::as_str).collect();
        let cmd = command_for(&refs, false);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.successes(), dirs.as_slice());
    }

    #[test]
    fn reports_every_problem_without_stopping() {
        let temp = TempDir::new().unwrap();
        let good = make_dirs(&temp, &["good"]).remove(0);
        let missing = temp.path().join("missing");
        let file = temp.path().join("file");
        fs::write(&file, "x").unwrap();
        let missing = missing.to_str().unwrap();
        let file = file.to_str().unwrap();

        let cmd = command_for(&[missing, good.as_str(), file], false);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_problem(missing, Problem::DoesNotExist));
        assert!(ui.has_problem(file, Problem::NotADirectory));
        assert_eq!(ui.successes(), [good.as_str()]);
    }

    #[test]
    fn empty_segment_is_reported_missing() {
        let temp = TempDir::new().unwrap();
        let dirs = make_dirs(&temp, &["bin"]);
        let cmd = command_for(&[dirs[0].as_str(), ""], false);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_problem("", Problem::DoesNotExist));
    }

    #[test]
    fn duplicates_are_reported_twice() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        let missing = missing.to_str().unwrap();
        let cmd = command_for(&[missing, missing], false);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.problems().len(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_unicode_directory_is_healthy() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(OsString::from_vec(b"caf\xe9".to_vec()));
        fs::create_dir(&dir).unwrap();
        let cmd = DoctorCommand::new(PathList::parse("PATH", &dir), false);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.problems().is_empty());
        assert_eq!(ui.successes().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let temp = TempDir::new().unwrap();
        let locked = make_dirs(&temp, &["locked"]).remove(0);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let cmd = command_for(&[locked.as_str()], false);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_problem(&locked, Problem::NotReadable));
    }

    #[test]
    fn json_report_lists_entries() {
        let temp = TempDir::new().unwrap();
        let dirs = make_dirs(&temp, &["ok"]);
        let missing = temp.path().join("missing");
        let cmd = command_for(&[dirs[0].as_str(), missing.to_str().unwrap()], true);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.problems().is_empty());
        assert_eq!(ui.messages().len(), 1);
        let report: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(report["variable"], "PATH");
        assert_eq!(report["ok"], false);
        assert_eq!(report["entries"][0]["problem"], serde_json::Value::Null);
        assert_eq!(report["entries"][0]["is_directory"], true);
        assert_eq!(report["entries"][1]["problem"], "does_not_exist");
    }
}
