use super::*;

fn required_inputs() -> Inputs {
    Inputs::new()
        .with("project-id", "test-project-id")
        .with("auth-token", "test-auth")
}

fn ctx() -> ActionContext {
    ActionContext::with_repository("owner/repo")
}

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert!(config.user_agent.starts_with("glitch-sync/"));
    assert!(config.timeout.is_none());
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn test_http_config_with_api_url() {
    let config = HttpConfig::default().with_api_url("http://127.0.0.1:8080");
    assert_eq!(config.api_url, "http://127.0.0.1:8080");
}

#[test]
fn test_http_config_build_client() {
    assert!(HttpConfig::default().build_client().is_ok());
}

#[test]
fn test_resolve_required_only() {
    let config = RunConfig::resolve(&required_inputs(), &ctx()).unwrap();

    assert_eq!(config.project_id, "test-project-id");
    assert_eq!(config.auth_token.as_str(), "test-auth");
    assert_eq!(config.path, None);
    assert_eq!(config.repo, "owner/repo");
}

#[test]
fn test_resolve_with_path() {
    let inputs = required_inputs().with("path", "test-path");
    let config = RunConfig::resolve(&inputs, &ctx()).unwrap();
    assert_eq!(config.path.as_deref(), Some("test-path"));
}

#[test]
fn test_resolve_empty_path_is_none() {
    let inputs = required_inputs().with("path", "");
    let config = RunConfig::resolve(&inputs, &ctx()).unwrap();
    assert_eq!(config.path, None);
}

#[test]
fn test_resolve_explicit_repo_overrides_context() {
    let inputs = required_inputs().with("repo", "octocat/Hello-World");
    let config = RunConfig::resolve(&inputs, &ctx()).unwrap();
    assert_eq!(config.repo, "octocat/Hello-World");
}

#[test]
fn test_resolve_empty_repo_falls_back_to_context() {
    let inputs = required_inputs().with("repo", "");
    let config = RunConfig::resolve(&inputs, &ctx()).unwrap();
    assert_eq!(config.repo, "owner/repo");
}

#[test]
fn test_resolve_missing_project_id() {
    let inputs = Inputs::new().with("auth-token", "test-auth");
    let err = RunConfig::resolve(&inputs, &ctx()).unwrap_err();
    assert_eq!(err.to_string(), "Input required and not supplied: project-id");
}

#[test]
fn test_resolve_missing_auth_token() {
    let inputs = Inputs::new().with("project-id", "test-project-id");
    let err = RunConfig::resolve(&inputs, &ctx()).unwrap_err();
    assert_eq!(err.to_string(), "Input required and not supplied: auth-token");
}

#[test]
fn test_resolve_missing_both_reports_project_id_first() {
    let err = RunConfig::resolve(&Inputs::new(), &ctx()).unwrap_err();
    assert_eq!(err.to_string(), "Input required and not supplied: project-id");
}

#[test]
fn test_resolve_repository_not_detected() {
    let err = RunConfig::resolve(&required_inputs(), &ActionContext::default()).unwrap_err();
    assert!(matches!(err, SyncError::RepositoryNotDetected));
}

#[test]
fn test_run_config_debug_hides_token() {
    let config = RunConfig::resolve(&required_inputs(), &ctx()).unwrap();
    assert!(!format!("{:?}", config).contains("test-auth"));
}
