//! Files published by a build.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// The artifact listing of one build: `{"count": n, "file": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ArtifactCollection {
    /// Number of entries as reported by the server.
    #[serde(deserialize_with = "null_as_default")]
    pub count: usize,
    /// Files and directories at this level.
    #[serde(rename = "file", deserialize_with = "null_as_default")]
    pub files: Vec<Artifact>,
}

/// Metadata for a single artifact entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Artifact {
    /// Bytes.
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    /// Last modification, in the server's timestamp format.
    #[serde(deserialize_with = "null_as_default")]
    pub modification_time: String,
    /// Entry name relative to its directory.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// REST API link to the entry's metadata.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    /// Only set for files; directories have no content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ArtifactContent>,
}

/// Link to a file artifact's bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ArtifactContent {
    /// REST API link to the content.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
}

impl Artifact {
    pub fn is_directory(&self) -> bool {
        self.content.is_none()
    }

    /// Link to the artifact's bytes, if it is a file.
    pub fn content_href(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_collection_deserializes_files_and_directories() {
        let collection: ArtifactCollection = serde_json::from_value(json!({
            "count": 2,
            "file": [
                {
                    "size": 2048,
                    "modificationTime": "20230101T001000+0000",
                    "name": "app.tar.gz",
                    "href": "/app/rest/builds/id:42/artifacts/metadata/app.tar.gz",
                    "content": {"href": "/app/rest/builds/id:42/artifacts/content/app.tar.gz"}
                },
                {
                    "modificationTime": "20230101T001000+0000",
                    "name": "reports",
                    "href": "/app/rest/builds/id:42/artifacts/metadata/reports",
                    "children": {"href": "/app/rest/builds/id:42/artifacts/children/reports"}
                }
            ]
        }))
        .unwrap();

        assert_eq!(collection.count, 2);
        let [file, dir] = collection.files.as_slice() else {
            panic!("expected two entries");
        };

        assert!(!file.is_directory());
        assert_eq!(file.size, 2048);
        assert_eq!(
            file.content_href(),
            Some("/app/rest/builds/id:42/artifacts/content/app.tar.gz")
        );

        assert!(dir.is_directory());
        assert_eq!(dir.content_href(), None);
        assert_eq!(dir.size, 0);
    }

    #[test]
    fn test_directory_serializes_without_content() {
        let dir = Artifact {
            name: "reports".to_string(),
            ..Artifact::default()
        };
        let value = serde_json::to_value(&dir).unwrap();
        assert!(value.get("content").is_none());
        assert_eq!(value["name"], "reports");
    }

    #[test]
    fn test_empty_collection() {
        let collection: ArtifactCollection = serde_json::from_value(json!({"count": 0})).unwrap();
        assert_eq!(collection.count, 0);
        assert!(collection.files.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_zero_values() {
        let collection: ArtifactCollection = serde_json::from_value(json!({
            "count": null,
            "file": [{"name": "logs", "size": null, "content": null}]
        }))
        .unwrap();
        assert_eq!(collection.count, 0);
        assert_eq!(collection.files[0].size, 0);
        assert!(collection.files[0].is_directory());
    }
}
