//! Sample REST payloads mirroring what the Jira and Confluence APIs return.
//!
//! These are wire-shaped JSON values; the fakes decode them through the same
//! serde models the real clients use, so the projections get exercised
//! end to end.

/// A Jira search page with one fully populated issue and one with every
/// optional relation absent.
pub fn sample_search_response() -> serde_json::Value {
  serde_json::json!({
    "issues": [
      {
        "key": "PROJ-101",
        "fields": {
          "summary": "Checkout button unresponsive on mobile",
          "status": {"name": "In Progress"},
          "assignee": {"displayName": "Grace Hopper"},
          "priority": {"name": "High"},
          "created": "2025-03-01T09:15:00.000+0000",
          "updated": "2025-03-04T16:42:00.000+0000"
        }
      },
      {
        "key": "PROJ-102",
        "fields": {
          "summary": "Update onboarding docs",
          "status": {"name": "Open"},
          "assignee": null,
          "priority": null,
          "created": "2025-03-02T11:00:00.000+0000",
          "updated": "2025-03-02T11:00:00.000+0000"
        }
      }
    ],
    "total": 2
  })
}

/// A full issue read with a structured-document description.
pub fn sample_issue_response() -> serde_json::Value {
  serde_json::json!({
    "key": "PROJ-101",
    "fields": {
      "summary": "Checkout button unresponsive on mobile",
      "status": {"name": "In Progress"},
      "assignee": {"displayName": "Grace Hopper"},
      "reporter": {"displayName": "Alan Turing"},
      "priority": {"name": "High"},
      "issuetype": {"name": "Bug"},
      "description": {
        "type": "doc",
        "version": 1,
        "content": [{
          "type": "paragraph",
          "content": [{"type": "text", "text": "Tapping checkout does nothing on iOS Safari."}]
        }]
      },
      "created": "2025-03-01T09:15:00.000+0000",
      "updated": "2025-03-04T16:42:00.000+0000"
    }
  })
}

/// An issue whose optional relations are all absent.
pub fn sample_bare_issue_response() -> serde_json::Value {
  serde_json::json!({
    "key": "PROJ-102",
    "fields": {
      "summary": "Update onboarding docs",
      "status": {"name": "Open"},
      "issuetype": {"name": "Task"},
      "created": "2025-03-02T11:00:00.000+0000",
      "updated": "2025-03-02T11:00:00.000+0000"
    }
  })
}

/// The error body Jira returns for an unknown issue key.
pub fn issue_not_found_body() -> String {
  r#"{"errorMessages":["Issue does not exist or you do not have permission to see it."],"errors":{}}"#.to_string()
}

/// A transitions listing offering two target statuses.
pub fn sample_transitions_response() -> serde_json::Value {
  serde_json::json!({
    "transitions": [
      {"id": "11", "to": {"name": "In Progress"}},
      {"id": "21", "to": {"name": "In Review"}},
      {"id": "31", "to": {"name": "Done"}}
    ]
  })
}

/// A Confluence content search page with two results.
pub fn sample_content_search_response() -> serde_json::Value {
  serde_json::json!({
    "results": [
      {
        "id": "123456",
        "title": "Getting Started Guide",
        "type": "page",
        "_links": {"webui": "/spaces/DOCS/pages/123456/Getting+Started+Guide"}
      },
      {
        "id": "789012",
        "title": "Release Checklist",
        "type": "page",
        "_links": {"webui": "/spaces/ENG/pages/789012/Release+Checklist"}
      }
    ],
    "totalSize": 2
  })
}

/// A full page read with storage body and version expanded.
pub fn sample_page_response() -> serde_json::Value {
  serde_json::json!({
    "id": "123456",
    "title": "Getting Started Guide",
    "type": "page",
    "version": {"number": 7},
    "body": {
      "storage": {
        "value": "<h1>Getting Started</h1><p>Welcome to our documentation.</p>",
        "representation": "storage"
      }
    },
    "_links": {"webui": "/spaces/DOCS/pages/123456/Getting+Started+Guide"}
  })
}

/// A space listing with two spaces.
pub fn sample_spaces_response() -> serde_json::Value {
  serde_json::json!({
    "results": [
      {"key": "DOCS", "name": "Documentation", "type": "global"},
      {"key": "~grace", "name": "Grace Hopper", "type": "personal"}
    ]
  })
}
