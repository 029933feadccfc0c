use common::domain::{ApiKey, ModelName};
use common::llm::Role;
use std::path::PathBuf;

use super::harness::{Harness, ADR, DESIGN, PROMPT};
use crate::adapter::StubCompletion;
use crate::domain::{AdrError, InputSource, OutputTarget, PromptLocation};
use crate::usecase::{Outcome, Settings};

fn settings(h: &Harness, input: InputSource) -> Settings {
    Settings {
        input,
        prompt: PromptLocation::BesideExecutable(PathBuf::from("prompt.txt")),
        output: OutputTarget::File(h.path("adr.md")),
        model: ModelName::new("gpt-4"),
        api_key: ApiKey::new("sk-test"),
        api_key_env: "OPENAI_API_KEY".to_string(),
        base_url: None,
        dry_run: false,
    }
}

#[test]
fn test_end_to_end_writes_trimmed_completion() {
    let h = Harness::new(StubCompletion::text(&format!("\n  {}\n\n", ADR)), "", true);
    let input = h.write_input(DESIGN);

    let outcome = h.app.generate.run(settings(&h, InputSource::File(input))).unwrap();

    let written = std::fs::read_to_string(h.path("adr.md")).unwrap();
    assert_eq!(written, ADR);
    assert!(matches!(outcome, Outcome::Written(ref r) if r.as_str() == ADR));
}

#[test]
fn test_request_carries_prompt_then_design() {
    let h = Harness::new(StubCompletion::text(ADR), "", true);
    let input = h.write_input(DESIGN);
    h.app.generate.run(settings(&h, InputSource::File(input))).unwrap();

    assert_eq!(h.completion.call_count(), 1);
    let calls = h.completion.calls.lock().unwrap();
    let (config, messages) = &calls[0];
    assert_eq!(config.model.as_str(), "gpt-4");
    assert_eq!(config.max_tokens, 500);
    assert_eq!(config.temperature, 0.7);
    assert_eq!(config.api_key.as_ref().unwrap().expose(), "sk-test");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, PROMPT);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, DESIGN);
}

#[test]
fn test_stdin_input_read_once_and_passed_unchanged() {
    let body = "Option A: Kafka\nOption B: RabbitMQ\n\nWe pick RabbitMQ.\n";
    let h = Harness::new(StubCompletion::text(ADR), body, true);
    h.app.generate.run(settings(&h, InputSource::Stdin)).unwrap();

    assert_eq!(h.stdin.reads(), 1);
    let calls = h.completion.calls.lock().unwrap();
    assert_eq!(calls[0].1[1].content, body);
}

#[test]
fn test_status_lines_in_order() {
    let h = Harness::new(StubCompletion::text(ADR), "text", true);
    h.app.generate.run(settings(&h, InputSource::Stdin)).unwrap();

    let out = h.path("adr.md");
    assert_eq!(
        h.status.lines(),
        vec![
            "reading from stdin".to_string(),
            "generating using model gpt-4".to_string(),
            format!("writing output to {}", out.display()),
            "done".to_string(),
        ]
    );
}

#[test]
fn test_missing_input_file_stops_before_completion() {
    let h = Harness::new(StubCompletion::text(ADR), "", true);
    let missing = h.path("nope.md");
    let err = h
        .app
        .generate
        .run(settings(&h, InputSource::File(missing.clone())))
        .unwrap_err();

    assert!(matches!(err, AdrError::MissingInputFile(ref p) if *p == missing));
    assert_eq!(err.exit_code(), 66);
    assert_eq!(h.completion.call_count(), 0);
    assert!(!h.path("adr.md").exists());
}

#[test]
fn test_missing_prompt_stops_before_completion() {
    let h = Harness::new(StubCompletion::text(ADR), "", true);
    h.remove_default_prompt();
    let input = h.write_input(DESIGN);
    let err = h.app.generate.run(settings(&h, InputSource::File(input))).unwrap_err();

    assert!(matches!(err, AdrError::MissingPromptFile(_)));
    assert_eq!(err.exit_code(), 72);
    assert_eq!(h.completion.call_count(), 0);
    assert!(!h.path("adr.md").exists());
}

#[test]
fn test_missing_credential_fails_before_reading_input() {
    let h = Harness::new(StubCompletion::text(ADR), "never read", false);
    let mut s = settings(&h, InputSource::Stdin);
    s.api_key = None;
    let err = h.app.generate.run(s).unwrap_err();

    assert!(matches!(err, AdrError::MissingCredential { ref env_var } if env_var == "OPENAI_API_KEY"));
    assert_eq!(err.exit_code(), 77);
    assert_eq!(h.stdin.reads(), 0);
    assert_eq!(h.completion.call_count(), 0);
    assert!(h.status.lines().is_empty());
}

#[test]
fn test_service_error_leaves_existing_output_untouched() {
    let h = Harness::new(StubCompletion::failing("Rate limit reached for gpt-4"), "", true);
    std::fs::write(h.path("adr.md"), "previous ADR").unwrap();
    let input = h.write_input(DESIGN);
    let err = h.app.generate.run(settings(&h, InputSource::File(input))).unwrap_err();

    assert!(matches!(err, AdrError::ExternalService(ref m) if m.contains("Rate limit reached")));
    assert_eq!(err.exit_code(), 69);
    assert_eq!(h.completion.call_count(), 1);
    assert_eq!(std::fs::read_to_string(h.path("adr.md")).unwrap(), "previous ADR");
    assert!(!h.status.lines().contains(&"done".to_string()));
}

#[test]
fn test_output_write_failure() {
    let h = Harness::new(StubCompletion::text(ADR), "", true);
    let input = h.write_input(DESIGN);
    let mut s = settings(&h, InputSource::File(input));
    s.output = OutputTarget::File(h.path("no/such/dir/adr.md"));
    let err = h.app.generate.run(s).unwrap_err();

    assert!(matches!(err, AdrError::OutputWrite { .. }));
    assert_eq!(err.exit_code(), 73);
}

#[test]
fn test_dry_run_needs_no_key_and_writes_nothing() {
    let h = Harness::new(StubCompletion::text(ADR), "", false);
    let input = h.write_input(DESIGN);
    let mut s = settings(&h, InputSource::File(input));
    s.api_key = None;
    s.dry_run = true;
    let outcome = h.app.generate.run(s).unwrap();

    assert_eq!(outcome, Outcome::Previewed("preview gpt-4 2".to_string()));
    assert_eq!(h.completion.call_count(), 0);
    assert!(!h.path("adr.md").exists());
}
