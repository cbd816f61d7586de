//! A scripted [`CommandRunner`] for unit tests.

use std::cell::RefCell;
use std::path::Path;

use super::command::{CommandResult, CommandRunner, Invocation};
use crate::error::{Result, ScaffoldError};

type Effect = Box<dyn Fn(&Invocation)>;

/// Records every invocation and answers with a canned result per program.
#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    failures: Vec<(String, CommandResult)>,
    unspawnable: Vec<String>,
    effects: Vec<(String, Effect)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with `code` and the given stderr.
    pub fn fail(mut self, program: &str, code: i32, stderr: &str) -> Self {
        self.failures.push((
            program.to_string(),
            CommandResult::failure(Some(code), String::new(), stderr.to_string()),
        ));
        self
    }

    /// Make `program` fail to spawn.
    pub fn missing(mut self, program: &str) -> Self {
        self.unspawnable.push(program.to_string());
        self
    }

    /// Run `effect` whenever `program` is invoked (before answering).
    pub fn on(mut self, program: &str, effect: impl Fn(&Invocation) + 'static) -> Self {
        self.effects.push((program.to_string(), Box::new(effect)));
        self
    }

    /// Simulate `git clone` by writing `files` under the destination argument.
    pub fn clone_writes(self, files: &'static [(&'static str, &'static str)]) -> Self {
        self.on("git", move |inv| {
            let Some(dest) = inv.args.last() else { return };
            let root = match &inv.cwd {
                Some(cwd) => cwd.join(dest),
                None => Path::new(dest).to_path_buf(),
            };
            for (rel, contents) in files {
                let path = root.join(rel);
                std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                std::fs::write(path, contents).unwrap();
            }
        })
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, program: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|inv| inv.program == program)
            .count()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.calls.borrow_mut().push(invocation.clone());

        if self.unspawnable.contains(&invocation.program) {
            return Err(ScaffoldError::SpawnFailed {
                command: invocation.program.clone(),
                message: "cannot find binary path".to_string(),
            });
        }

        for (program, effect) in &self.effects {
            if *program == invocation.program {
                effect(invocation);
            }
        }

        for (program, result) in &self.failures {
            if *program == invocation.program {
                return Ok(result.clone());
            }
        }

        Ok(CommandResult::success(String::new(), String::new()))
    }
}
