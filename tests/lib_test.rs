//! Library integration tests.

use create_smithery::ScaffoldError;

#[test]
fn error_types_are_public() {
    let err = ScaffoldError::Clone {
        url: "https://example.com/sdk.git".into(),
        message: "not found".into(),
    };
    assert!(err.to_string().contains("https://example.com/sdk.git"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> create_smithery::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use create_smithery::cli::Cli;
    use create_smithery::config::Transport;

    let cli = Cli::parse_from(["create-smithery", "demo", "-t", "stdio"]);
    let args = cli.resolve_args();

    assert_eq!(args.project_name.as_deref(), Some("demo"));
    assert_eq!(args.transport, Some(Transport::Stdio));
}

#[test]
fn custom_command_runner_drives_scaffolder() {
    use create_smithery::config::ResolveArgs;
    use create_smithery::scaffold::Scaffolder;
    use create_smithery::shell::{CommandResult, CommandRunner, Invocation};
    use create_smithery::ui::MockUI;

    struct Offline;

    impl CommandRunner for Offline {
        fn run(&self, invocation: &Invocation) -> create_smithery::Result<CommandResult> {
            Ok(CommandResult::failure(
                Some(128),
                String::new(),
                format!("offline: {}", invocation.program),
            ))
        }
    }

    let temp = tempfile::TempDir::new().unwrap();
    let mut ui = MockUI::new();
    let args = ResolveArgs {
        project_name: Some("demo".into()),
        ..Default::default()
    };

    let outcome = Scaffolder::new(temp.path(), &Offline, None)
        .run(&args, &mut ui)
        .unwrap();

    assert_eq!(outcome.exit_code, 1);
    assert!(ui.has_error("offline: git"));
}
