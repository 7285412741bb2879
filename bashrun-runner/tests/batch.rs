//! Batch execution against a real shell

use bashrun_core::domain::command::CommandOutcome;
use bashrun_core::dto::command::CreateCommands;
use bashrun_runner::{
    ExecError, ExecutionService, RunnerConfig, StandardExecutionService,
};

fn request(commands: &[&str]) -> CreateCommands {
    CreateCommands::new(commands.iter().map(|c| c.to_string()).collect())
}

fn sorted(mut outcomes: Vec<CommandOutcome>) -> Vec<CommandOutcome> {
    outcomes.sort_by(|a, b| a.command.cmp(&b.command));
    outcomes
}

#[tokio::test]
async fn test_echo_produces_stdout_outcome() {
    let service = StandardExecutionService::default();
    let req = request(&["echo hello world!!!"]);

    let result = service.exec_commands(Some(&req)).await.unwrap();

    assert_eq!(
        result.outcomes,
        vec![CommandOutcome::succeeded(
            "echo hello world!!!",
            "hello world!!!\n"
        )]
    );
    assert!(result.error().is_none());
}

#[tokio::test]
async fn test_unknown_command_reports_stderr() {
    let service = StandardExecutionService::default();
    let req = request(&["pws"]);

    let result = service.exec_commands(Some(&req)).await.unwrap();

    assert_eq!(result.outcomes.len(), 1);
    let outcome = &result.outcomes[0];
    assert_eq!(outcome.command, "pws");
    assert!(outcome.is_error);
    assert!(outcome.log.contains("not found"));
    assert!(result.error().is_none());
}

#[tokio::test]
async fn test_two_commands_in_any_order() {
    let service = StandardExecutionService::default();
    let req = request(&["echo a", "echo b"]);

    let result = service.exec_commands(Some(&req)).await.unwrap();

    assert_eq!(
        sorted(result.outcomes),
        vec![
            CommandOutcome::succeeded("echo a", "a\n"),
            CommandOutcome::succeeded("echo b", "b\n"),
        ]
    );
    assert_eq!(result.failures, 0);
}

#[tokio::test]
async fn test_empty_request() {
    let service = StandardExecutionService::default();

    let result = service.exec_commands(Some(&request(&[]))).await.unwrap();

    assert!(result.outcomes.is_empty());
    assert!(result.error().is_none());
}

#[tokio::test]
async fn test_absent_request_is_rejected() {
    let service = StandardExecutionService::default();

    let err = service.exec_commands(None).await.unwrap_err();

    assert_eq!(err, ExecError::InvalidInput);
}

#[tokio::test]
async fn test_every_input_has_one_outcome_including_duplicates() {
    let service = StandardExecutionService::default();
    let commands: Vec<String> = (0..25)
        .map(|i| format!("echo {}", i % 5))
        .collect();
    let req = CreateCommands::new(commands.clone());

    let result = service.exec_commands(Some(&req)).await.unwrap();

    let mut got: Vec<String> = result.outcomes.iter().map(|o| o.command.clone()).collect();
    let mut want = commands;
    got.sort();
    want.sort();
    assert_eq!(got, want);
    assert!(result.outcomes.iter().all(|o| !o.is_error));
}

#[tokio::test]
async fn test_exit_status_does_not_decide_classification() {
    let service = StandardExecutionService::default();
    let req = request(&["echo partial; exit 3", "true", "echo boom 1>&2"]);

    let result = service.exec_commands(Some(&req)).await.unwrap();

    assert_eq!(
        sorted(result.outcomes),
        vec![
            CommandOutcome::failed("echo boom 1>&2", "boom\n"),
            CommandOutcome::succeeded("echo partial; exit 3", "partial\n"),
            CommandOutcome::failed("true", ""),
        ]
    );
}

#[tokio::test]
async fn test_shell_syntax_is_honored() {
    let service = StandardExecutionService::default();
    let req = request(&["printf 'b\\na\\n' | sort | head -n 1"]);

    let result = service.exec_commands(Some(&req)).await.unwrap();

    assert_eq!(result.outcomes[0].log, "a\n");
}

#[tokio::test]
async fn test_commands_run_concurrently() {
    let service = StandardExecutionService::default();
    let req = request(&["sleep 1; echo x", "sleep 1; echo y", "sleep 1; echo z"]);

    let started = std::time::Instant::now();
    let result = service.exec_commands(Some(&req)).await.unwrap();

    assert_eq!(result.outcomes.len(), 3);
    assert!(started.elapsed() < std::time::Duration::from_millis(2500));
}

#[tokio::test]
async fn test_unspawnable_shell_is_infrastructure_failure() {
    let config = RunnerConfig::new("/nonexistent/bashrun-shell", "-c");
    let service = StandardExecutionService::new(&config);
    let req = request(&["echo a", "echo b"]);

    let result = service.exec_commands(Some(&req)).await.unwrap();

    assert!(result.outcomes.is_empty());
    assert_eq!(result.error(), Some(ExecError::Subprocess { failures: 2 }));
}
