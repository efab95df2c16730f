use uk_core::config::BuildConfig;

#[test]
fn default_config() {
    let cfg = BuildConfig::default();
    assert_eq!(cfg.build.plugins, vec!["leptos", "tailwind"]);
    assert_eq!(cfg.build.out_dir, "dist");
    assert_eq!(cfg.build.public_url, "/");
    assert_eq!(cfg.serve.host, "127.0.0.1");
    assert_eq!(cfg.serve.port, 5173);
    assert_eq!(cfg.test.environment, "headless-chrome");
    assert!(cfg.test.setup_files.is_empty());
    assert_eq!(cfg.serve_addr(), "127.0.0.1:5173");
    cfg.validate().expect("defaults validate");
}

#[test]
fn config_roundtrip() {
    let cfg = BuildConfig::default();
    let toml_str = cfg.to_toml().expect("serialize to toml");
    assert!(toml_str.contains("dist"));

    let parsed = BuildConfig::from_toml_str(&toml_str).expect("parse toml back");
    assert_eq!(parsed.serve.port, cfg.serve.port);
    assert_eq!(parsed.build.plugins, cfg.build.plugins);
}

#[test]
fn config_partial_toml() {
    let partial = r#"
[serve]
port = 3000

[test]
environment = "node"
"#;
    let cfg = BuildConfig::from_toml_str(partial).expect("parse partial");
    assert_eq!(cfg.serve.port, 3000);
    assert_eq!(cfg.test.environment, "node");
    // defaults should fill in the rest
    assert_eq!(cfg.serve.host, "127.0.0.1");
    assert_eq!(cfg.build.out_dir, "dist");
}

#[test]
fn zero_port_fails_validation() {
    let err = BuildConfig::from_toml_str("[serve]\nport = 0\n")
        .expect_err("validation should fail");
    assert!(err.to_string().contains("serve.port"));
}

#[test]
fn unknown_test_environment_fails_validation() {
    let mut cfg = BuildConfig::default();
    cfg.test.environment = "jsdom".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("test.environment"));
}

#[test]
fn duplicate_plugin_fails_validation() {
    let mut cfg = BuildConfig::default();
    cfg.build.plugins.push("leptos".to_string());
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("duplicate plugin 'leptos'"));
}

#[test]
fn empty_out_dir_fails_validation() {
    let mut cfg = BuildConfig::default();
    cfg.build.out_dir = "  ".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = BuildConfig::from_toml_str("[serve\nport = 1").expect_err("parse should fail");
    assert!(err.to_string().starts_with("parse:"));
}

#[test]
fn load_from_file_and_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ui-kit.toml");
    std::fs::write(&path, "[build]\nout_dir = \"target/site\"\n").expect("write config");

    let cfg = BuildConfig::load_from(&path).expect("load");
    assert_eq!(cfg.build.out_dir, "target/site");

    let missing = dir.path().join("nope.toml");
    assert!(BuildConfig::load_from(&missing).is_err());
    let fallback = BuildConfig::load_or_default(&missing).expect("defaults");
    assert_eq!(fallback.build.out_dir, "dist");
}
