#[cfg(test)]
mod tests {
    use dcl::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_BASE_URL};
    use dcl::libs::error::DclError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// A temporary configuration directory for each config test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl ConfigTestContext {
        fn write(&self, yaml: &str) {
            fs::write(&self.config_path, yaml).unwrap();
        }

        fn read(&self) -> Result<Config, DclError> {
            Config::read_from(&self.config_path)
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_full_config(ctx: &mut ConfigTestContext) {
        ctx.write(
            r#"
workspace_id: ws1
api_key: key1
user_id: u1
base_url: https://eu.api.clockify.me/api/v1/
buckets:
  gtd_meeting:
    project_id: p1
    task_id: t1
    description: Weekly planning
    tag_ids: [tag1]
    billable: false
"#,
        );
        let config = ctx.read().unwrap();

        assert_eq!(config.workspace_id, "ws1");
        assert_eq!(config.api_key, "key1");
        assert_eq!(config.user_id.as_deref(), Some("u1"));
        assert_eq!(config.base_url, "https://eu.api.clockify.me/api/v1");

        let bucket = config.bucket("gtd_meeting").unwrap();
        assert_eq!(bucket.name, "gtd_meeting");
        assert_eq!(bucket.project_id, "p1");
        assert_eq!(bucket.task_id.as_deref(), Some("t1"));
        assert_eq!(bucket.description, "Weekly planning");
        assert_eq!(bucket.tag_ids, vec!["tag1".to_string()]);
        assert!(!bucket.billable);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults_for_optional_keys(ctx: &mut ConfigTestContext) {
        ctx.write("workspace_id: ws1\napi_key: key1\nbuckets:\n  lunch:\n    project_id: p1\n");
        let config = ctx.read().unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_id.is_none());
        let bucket = config.bucket("lunch").unwrap();
        assert!(bucket.task_id.is_none());
        assert!(bucket.tag_ids.is_empty());
        assert_eq!(bucket.description, "");
        assert!(bucket.billable);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file(ctx: &mut ConfigTestContext) {
        match ctx.read() {
            Err(DclError::ConfigNotFound(path)) => assert_eq!(path, ctx.config_path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_yaml(ctx: &mut ConfigTestContext) {
        ctx.write("workspace_id: [unclosed\napi_key: key1\n");
        match ctx.read() {
            Err(DclError::ConfigParseError { path, .. }) => assert_eq!(path, ctx.config_path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_wrong_type_is_parse_error(ctx: &mut ConfigTestContext) {
        ctx.write("workspace_id: ws1\napi_key: key1\nbuckets: [a, b]\n");
        assert!(matches!(ctx.read(), Err(DclError::ConfigParseError { .. })));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_api_key(ctx: &mut ConfigTestContext) {
        ctx.write("workspace_id: ws1\nbuckets:\n  lunch:\n    project_id: p1\n");
        match ctx.read() {
            Err(DclError::ConfigInvalid(reason)) => assert!(reason.contains("api_key")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_blank_workspace_id(ctx: &mut ConfigTestContext) {
        ctx.write("workspace_id: '  '\napi_key: key1\n");
        match ctx.read() {
            Err(DclError::ConfigInvalid(reason)) => assert!(reason.contains("workspace_id")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_file_is_invalid(ctx: &mut ConfigTestContext) {
        ctx.write("");
        assert!(matches!(ctx.read(), Err(DclError::ConfigInvalid(_))));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_bucket_without_project(ctx: &mut ConfigTestContext) {
        ctx.write("workspace_id: ws1\napi_key: key1\nbuckets:\n  lunch:\n    task_id: t1\n");
        match ctx.read() {
            Err(DclError::ConfigInvalid(reason)) => assert!(reason.contains("buckets.lunch.project_id")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_reserved_bucket_name(ctx: &mut ConfigTestContext) {
        ctx.write("workspace_id: ws1\napi_key: key1\nbuckets:\n  stop:\n    project_id: p1\n");
        assert!(matches!(ctx.read(), Err(DclError::ConfigInvalid(_))));
    }

    #[test]
    fn test_unknown_bucket_lists_sorted_names() {
        let config = Config::parse("workspace_id: ws1\napi_key: key1\nbuckets:\n  zoo:\n    project_id: p1\n  alpha:\n    project_id: p2\n").unwrap();
        assert_eq!(config.bucket_names(), vec!["alpha", "zoo"]);
        match config.bucket("beta") {
            Err(DclError::UnknownBucket { valid, .. }) => assert_eq!(valid, vec!["alpha", "zoo"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::parse("workspace_id: ws1\napi_key: very-secret\n").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
