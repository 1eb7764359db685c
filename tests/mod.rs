use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use warp::http::StatusCode;
use warp::Filter;

use neuralint_cli::adapters::http_backend::HttpBackend;
use neuralint_cli::enums::session_status::SessionStatus;
use neuralint_cli::errors::{NeuralintError, ANALYSIS_FAILED_MESSAGE};
use neuralint_cli::logger::report_logger::ReportLogger;
use neuralint_cli::services::analysis_session::AnalysisSession;
use neuralint_cli::structs::analysis_result::CodeAnalysisResult;
use neuralint_cli::structs::analyze_request::AnalyzeRequest;
use neuralint_cli::traits::analysis_backend::AnalysisBackend;

/// The javascript fixture from the product mock data: score 78, one finding
/// in every category, optional fields present.
fn javascript_fixture() -> serde_json::Value {
    serde_json::json!({
        "suggestions": [{
            "id": "s1",
            "line": 5,
            "column": 10,
            "message": "Consider using const for variables that are not reassigned",
            "severity": "info",
            "code_snippet": "var x = 10;",
            "suggested_fix": "const x = 10;"
        }],
        "security_issues": [{
            "id": "sec1",
            "type": "XSS",
            "line": 23,
            "column": 5,
            "message": "Potential XSS vulnerability with innerHTML",
            "severity": "high",
            "code_snippet": "element.innerHTML = userInput;",
            "suggested_fix": "element.textContent = userInput;",
            "cwe": "CWE-79",
            "owasp": "A7:2017"
        }],
        "performance_issues": [{
            "id": "perf1",
            "line": 45,
            "column": 3,
            "message": "Array inside loop could be hoisted",
            "impact": "medium",
            "code_snippet": "const arr = [1, 2, 3];",
            "suggested_fix": "hoist the array",
            "estimated_improvement": "15% faster loop execution"
        }],
        "best_practices": [{
            "id": "bp1",
            "line": 67,
            "column": 1,
            "message": "Function is too long",
            "code_snippet": "function processData() {}",
            "suggested_fix": "break it down",
            "reference": "https://en.wikipedia.org/wiki/Single_responsibility_principle"
        }],
        "overall_score": 78
    })
}

/// Fixture server answering POST /api/analyze with the given body, recording
/// each request body it sees.
fn spawn_fixture_server(
    response: serde_json::Value,
) -> (SocketAddr, Arc<Mutex<Vec<serde_json::Value>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_filter = seen.clone();

    let route = warp::post()
        .and(warp::path("api"))
        .and(warp::path("analyze"))
        .and(warp::body::json())
        .map(move |body: serde_json::Value| {
            seen_filter.lock().unwrap().push(body);
            warp::reply::json(&response)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, seen)
}

fn spawn_failing_server(status: StatusCode) -> SocketAddr {
    let route = warp::post()
        .and(warp::path("api"))
        .and(warp::path("analyze"))
        .map(move || warp::reply::with_status("backend exploded", status));

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

#[tokio::test]
async fn analyze_posts_code_and_language_and_renders_one_suggestion() {
    let (addr, seen) = spawn_fixture_server(javascript_fixture());
    let backend = HttpBackend::new(format!("http://{}/api", addr), 10).unwrap();

    let request = AnalyzeRequest::new("var x = 10;".to_string(), "javascript".to_string());
    let result = backend.analyze(&request).await.unwrap();

    // The wire body carries exactly code and language; no project_context
    // key is sent when none was supplied.
    let bodies = seen.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        serde_json::json!({"code": "var x = 10;", "language": "javascript"})
    );

    assert_eq!(result.overall_score, 78);
    assert_eq!(result.suggestions.len(), 1);

    let panel = ReportLogger::render_suggestions_panel(&result.suggestions);
    assert!(panel.contains("SUGGESTIONS (1)"));
    assert_eq!(panel.matches("[info]").count(), 1);
}

#[tokio::test]
async fn project_context_is_forwarded_when_supplied() {
    let (addr, seen) = spawn_fixture_server(javascript_fixture());
    let backend = HttpBackend::new(format!("http://{}/api", addr), 10).unwrap();

    let request = AnalyzeRequest::with_context(
        "print(1)".to_string(),
        "python".to_string(),
        Some("small flask service".to_string()),
    );
    backend.analyze(&request).await.unwrap();

    let bodies = seen.lock().unwrap();
    assert_eq!(bodies[0]["project_context"], "small flask service");
}

#[tokio::test]
async fn transport_failure_leaves_session_idle_with_the_fixed_message() {
    let addr = spawn_failing_server(StatusCode::INTERNAL_SERVER_ERROR);
    let backend = HttpBackend::new(format!("http://{}/api", addr), 10).unwrap();

    let mut session = AnalysisSession::new(Arc::new(backend));
    let outcome = session
        .submit(AnalyzeRequest::new("var x = 10;".to_string(), "javascript".to_string()))
        .await;

    assert!(outcome.is_err());
    assert_eq!(session.status(), SessionStatus::Idle);
    assert!(session.last_result().is_none());

    let error = session.last_error().unwrap();
    assert_eq!(error.user_message(), ANALYSIS_FAILED_MESSAGE);
    assert!(error.is_recoverable());
    match error {
        NeuralintError::TransportError { status_code, .. } => assert_eq!(*status_code, Some(500)),
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_response_body_is_a_transport_failure_not_a_panic() {
    let (addr, _seen) = spawn_fixture_server(serde_json::json!({"unexpected": true}));
    let backend = HttpBackend::new(format!("http://{}/api", addr), 10).unwrap();

    let request = AnalyzeRequest::new(String::new(), "javascript".to_string());
    let err = backend.analyze(&request).await.unwrap_err();

    assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
    assert!(matches!(err, NeuralintError::TransportError { .. }));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    // Port 9 (discard) should refuse connections on localhost.
    let backend = HttpBackend::new("http://127.0.0.1:9/api".to_string(), 2).unwrap();
    let err = backend
        .analyze(&AnalyzeRequest::new("x".to_string(), "python".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
}

#[tokio::test]
async fn security_issue_without_optional_fields_deserializes_and_renders() {
    let mut fixture = javascript_fixture();
    let issue = &mut fixture["security_issues"][0];
    issue.as_object_mut().unwrap().remove("cwe");
    issue.as_object_mut().unwrap().remove("owasp");

    let (addr, _seen) = spawn_fixture_server(fixture);
    let backend = HttpBackend::new(format!("http://{}/api", addr), 10).unwrap();

    let result = backend
        .analyze(&AnalyzeRequest::new("x".to_string(), "javascript".to_string()))
        .await
        .unwrap();

    let issue = &result.security_issues[0];
    assert!(issue.cwe.is_none());
    assert!(issue.owasp.is_none());

    let panel = ReportLogger::render_security_panel(&result.security_issues);
    assert!(panel.contains("XSS at line 23, column 5"));
    assert!(!panel.contains("🏷"));
}

#[test]
fn result_round_trips_through_the_wire_shape() {
    let result: CodeAnalysisResult = serde_json::from_value(javascript_fixture()).unwrap();

    assert_eq!(result.security_issues[0].issue_type, "XSS");
    assert_eq!(result.security_issues[0].cwe.as_deref(), Some("CWE-79"));

    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(serialized, javascript_fixture());

    let reparsed: CodeAnalysisResult = serde_json::from_value(serialized).unwrap();
    assert_eq!(reparsed, result);
}

#[test]
fn result_round_trips_with_optional_fields_absent() {
    let mut fixture = javascript_fixture();
    fixture["security_issues"][0].as_object_mut().unwrap().remove("cwe");
    fixture["security_issues"][0].as_object_mut().unwrap().remove("owasp");
    fixture["performance_issues"][0].as_object_mut().unwrap().remove("estimated_improvement");
    fixture["best_practices"][0].as_object_mut().unwrap().remove("reference");

    let result: CodeAnalysisResult = serde_json::from_value(fixture.clone()).unwrap();
    assert!(result.performance_issues[0].estimated_improvement.is_none());

    // Absent optionals stay absent on the way back out.
    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(serialized, fixture);
}

#[test]
fn missing_category_lists_default_to_empty() {
    let result: CodeAnalysisResult =
        serde_json::from_value(serde_json::json!({"overall_score": 92})).unwrap();

    assert!(result.suggestions.is_empty());
    assert!(result.security_issues.is_empty());
    assert_eq!(result.total_findings(), 0);
    assert_eq!(result.overall_score, 92);
}
