//! End-to-end decoding of full server payloads.

use crate::*;

const FINISHED_BUILD: &str = r#"{
    "id": 1234,
    "buildTypeId": "Backend_Test",
    "number": "2.14.0.387",
    "status": "FAILURE",
    "state": "finished",
    "branchName": "refs/heads/main",
    "defaultBranch": true,
    "personal": false,
    "running": false,
    "pinned": true,
    "href": "/app/rest/builds/id:1234",
    "webUrl": "https://ci.example.com/viewLog.html?buildId=1234&buildTypeId=Backend_Test",
    "statusText": "Tests failed: 1 (1 new), passed: 211",
    "buildType": {
        "id": "Backend_Test",
        "name": "Test",
        "description": "",
        "projectName": "Backend",
        "projectId": "Backend",
        "href": "/app/rest/buildTypes/id:Backend_Test",
        "webUrl": "https://ci.example.com/viewType.html?buildTypeId=Backend_Test"
    },
    "queuedDate": "20230101T000000+0000",
    "startDate": "20230101T000500+0000",
    "finishDate": "20230101T001000+0000",
    "triggered": {
        "type": "user",
        "date": "20230101T000000+0000",
        "user": {"username": "ana", "name": "Ana"}
    },
    "changes": {
        "count": 1,
        "href": "/app/rest/changes?locator=build:(id:1234)",
        "change": [{
            "id": 880,
            "version": "9f2c1e7",
            "username": "ana",
            "date": "20221231T235500+0000",
            "href": "/app/rest/changes/id:880",
            "webUrl": "https://ci.example.com/viewModification.html?modId=880"
        }]
    },
    "agent": {
        "id": 12,
        "name": "linux-agent-3",
        "typeId": 4,
        "href": "/app/rest/agents/id:12"
    },
    "problemOccurrences": {
        "count": 1,
        "problemOccurrence": [{
            "id": "problem:(id:77),build:(id:1234)",
            "type": "TC_FAILED_TESTS",
            "identity": "TC_FAILED_TESTS",
            "href": "/app/rest/problemOccurrences/problem:(id:77),build:(id:1234)"
        }]
    },
    "testOccurrences": {
        "count": 1,
        "testOccurrence": [{
            "id": "build:(id:1234),id:5001",
            "name": "api::orders::test_refund",
            "status": "FAILURE",
            "duration": 318,
            "href": "/app/rest/testOccurrences/build:(id:1234),id:5001"
        }]
    },
    "tags": {"count": 2, "tag": [{"name": "release"}, {"name": "flaky"}]},
    "artifacts": {"href": "/app/rest/builds/id:1234/artifacts/children/"},
    "properties": {
        "count": 3,
        "property": [
            {"name": "env.PROFILE", "value": "ci"},
            {"name": "system.retries", "value": "0"},
            {"name": "env.PROFILE", "value": "ci-strict"}
        ]
    }
}"#;

#[test]
fn test_finished_build_decodes_fully() {
    let build: Build = decode(FINISHED_BUILD).unwrap();

    assert_eq!(build.id, 1234);
    assert_eq!(build.number, "2.14.0.387");
    assert_eq!(build.build_type.project_id, "Backend");
    assert_eq!(build.triggered.trigger_type, "user");
    assert_eq!(build.triggered.user.username, "ana");
    assert_eq!(build.agent.name, "linux-agent-3");
    assert_eq!(build.agent.type_id, 4);
    assert!(build.pinned);
    assert!(build.default_branch);
    assert_eq!(build.changes[0].version, "9f2c1e7");
    assert_eq!(build.problem_occurrences[0].problem_type, "TC_FAILED_TESTS");
    assert_eq!(build.test_occurrences[0].duration, 318);
    assert_eq!(
        build.artifacts.href,
        "/app/rest/builds/id:1234/artifacts/children/"
    );

    assert_eq!(build.tags, vec!["release", "flaky"]);
    assert_eq!(build.properties.len(), 2);
    assert_eq!(build.property("env.PROFILE"), Some("ci-strict"));

    assert_eq!(build.computed_state(), LifecycleState::Finished);
    assert_eq!(build.to_string(), "Build 1234, Finished state=finished");

    let finished_at = build.finish_date.to_datetime().unwrap().unwrap();
    let started_at = build.start_date.to_datetime().unwrap().unwrap();
    assert_eq!((finished_at - started_at).num_minutes(), 5);
}

#[test]
fn test_queued_build_without_agent() {
    let build: Build = decode(
        r#"{
            "id": 1300,
            "state": "queued",
            "queuedDate": "20230101T010000+0000",
            "startDate": "",
            "finishDate": "",
            "tags": {"count": 0, "tag": []},
            "properties": {"count": 0, "property": []}
        }"#,
    )
    .unwrap();

    assert_eq!(build.computed_state(), LifecycleState::Queued);
    assert_eq!(build.agent, Agent::default());
    assert!(build.tags.is_empty());
    assert!(build.properties.is_empty());
    assert!(build.start_date.to_datetime().unwrap().is_none());
}

#[test]
fn test_build_reencodes_and_decodes_to_same_record() {
    let build: Build = decode(FINISHED_BUILD).unwrap();
    let encoded = serde_json::to_vec(&build).unwrap();
    let decoded: Build = decode(&encoded).unwrap();
    assert_eq!(build, decoded);
}

#[test]
fn test_artifact_listing_for_build() {
    let artifacts: ArtifactCollection = decode(
        r#"{
            "count": 2,
            "file": [
                {
                    "size": 18432,
                    "modificationTime": "20230101T001000+0000",
                    "name": "coverage.xml",
                    "href": "/app/rest/builds/id:1234/artifacts/metadata/coverage.xml",
                    "content": {"href": "/app/rest/builds/id:1234/artifacts/content/coverage.xml"}
                },
                {
                    "modificationTime": "20230101T001000+0000",
                    "name": "logs",
                    "href": "/app/rest/builds/id:1234/artifacts/metadata/logs"
                }
            ]
        }"#,
    )
    .unwrap();

    let files: Vec<&str> = artifacts
        .files
        .iter()
        .filter(|a| !a.is_directory())
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(files, vec!["coverage.xml"]);
}

#[test]
fn test_build_type_parameters() {
    let params: ParameterList = decode(
        r#"{
            "count": 2,
            "property": [
                {"name": "env.JDK", "value": "17", "inherited": true},
                {"name": "deploy.target", "value": "staging", "inherited": false}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(params.own().count(), 1);
    assert_eq!(params.to_map()["env.JDK"], "17");
}
