//! Collection fixtures written to temp directories for integration tests.
//!
//! The document mirrors a real exported collection: Postman-only members
//! (`_postman_id`, `auth`, `event`, `protocolProfileBehavior`) the model does
//! not know about, template hosts, query parameters and nested sections.
//! "Legacy Imports" holds the looser shapes Postman also accepts: string
//! requests and URLs, no method, no `header`/`path`, `null` header values,
//! a body without `mode` and an object description.

use std::path::{Path, PathBuf};

pub const COLLECTION_JSON: &str = r#"{
  "info": {
    "_postman_id": "6f1c2a0e-6d7b-4b61-9a51-2f1f3c9d8e11",
    "name": "Tymbl API",
    "description": "Tymbl API Collection",
    "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
  },
  "item": [
    {
      "name": "Authentication",
      "item": [
        {
          "name": "Login",
          "request": {
            "method": "POST",
            "header": [
              { "key": "Content-Type", "value": "application/json" }
            ],
            "body": {
              "mode": "raw",
              "raw": "{\"email\":\"user@example.com\",\"password\":\"password\"}",
              "options": { "raw": { "language": "json" } }
            },
            "url": {
              "raw": "{{base_url}}/api/v1/auth/login",
              "host": ["{{base_url}}"],
              "path": ["api", "v1", "auth", "login"]
            }
          },
          "event": [
            {
              "listen": "test",
              "script": { "type": "text/javascript", "exec": ["pm.environment.set('token', pm.response.json().token);"] }
            }
          ],
          "response": []
        }
      ]
    },
    {
      "name": "Job Search",
      "item": [
        {
          "name": "Search Jobs",
          "request": {
            "method": "GET",
            "header": [
              { "key": "Authorization", "value": "Bearer {{token}}" }
            ],
            "url": {
              "raw": "{{base_url}}/api/v1/jobs/search?keyword=java&location=New%20York&page=0&size=10",
              "host": ["{{base_url}}"],
              "path": ["api", "v1", "jobs", "search"],
              "query": [
                { "key": "keyword", "value": "java" },
                { "key": "location", "value": "New%20York" },
                { "key": "page", "value": "0" },
                { "key": "size", "value": "10" }
              ]
            }
          },
          "protocolProfileBehavior": { "disableBodyPruning": true },
          "response": [
            {
              "name": "Success",
              "originalRequest": {
                "method": "GET",
                "header": [],
                "url": {
                  "raw": "{{base_url}}/api/v1/jobs/search?keyword=java",
                  "host": ["{{base_url}}"],
                  "path": ["api", "v1", "jobs", "search"],
                  "query": [{ "key": "keyword", "value": "java" }]
                }
              },
              "status": "OK",
              "code": 200,
              "_postman_previewlanguage": "json",
              "header": [{ "key": "Content-Type", "value": "application/json" }],
              "body": "{\"content\":[],\"totalElements\":0}"
            }
          ]
        }
      ]
    },
    {
      "name": "AI & Utilities",
      "description": "AI helpers and maintenance endpoints",
      "item": [
        {
          "name": "AIController",
          "item": [
            {
              "name": "Crawl Company",
              "request": {
                "method": "POST",
                "header": [],
                "url": "{{base_url}}/api/v1/ai/crawl?companyId=42"
              }
            }
          ]
        }
      ]
    },
    {
      "name": "Legacy Imports",
      "description": { "content": "Requests imported from **v2.0** exports", "type": "text/markdown" },
      "item": [
        { "name": "Docs", "request": "{{base_url}}/api/v1/docs" },
        {
          "name": "Ping",
          "request": { "url": { "raw": "{{base_url}}/ping", "host": ["{{base_url}}"] } }
        },
        {
          "name": "Draft Upload",
          "request": {
            "method": "POST",
            "body": { "formdata": [{ "key": "file", "type": "file", "src": [] }] }
          }
        },
        {
          "name": "Traced Search",
          "request": {
            "method": "GET",
            "header": [{ "key": "X-Trace-Id", "value": null, "disabled": true }],
            "url": "http://localhost:8080/api/v1/../v1/jobs?q=a%20b"
          }
        }
      ]
    }
  ],
  "auth": {
    "type": "bearer",
    "bearer": [{ "key": "token", "value": "{{token}}", "type": "string" }]
  },
  "variable": [
    { "key": "base_url", "value": "http://localhost:8080", "type": "string" },
    { "key": "token", "value": "your_jwt_token_here", "type": "string" }
  ]
}
"#;

/// Writes the fixture collection into `dir` and returns its path.
pub fn write_collection(dir: &Path) -> PathBuf {
    write_file(dir, "Tymbl.postman_collection.json", COLLECTION_JSON)
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Parses `path` as generic JSON for structural comparison.
pub fn read_json(path: &Path) -> serde_json::Value {
    let bytes = std::fs::read(path).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
