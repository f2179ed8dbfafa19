use clap::Parser;
use schemaform::cli::Cli;
use schemaform::config::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let settings = Settings::from_root(temp_dir.path())?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    Ok(())
}

#[test]
fn test_load_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("schemaform.toml"),
        r#"
[server]
host = "0.0.0.0"
port = 8080
"#,
    )?;

    let settings = Settings::from_root(temp_dir.path())?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    Ok(())
}

#[test]
fn test_empty_host_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("schemaform.toml"),
        "[server]\nhost = \"\"\nport = 3000\n",
    )?;

    let err = Settings::from_root(temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("server.host"));
    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[server]\nhost = \"127.0.0.1\"\nport = 4000\n")?;

    let config_arg = config_path.to_string_lossy().to_string();
    let cli = Cli::parse_from(["schemaform", "--config", &config_arg, "--port", "5050"]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 5050);
    Ok(())
}

#[test]
fn test_zero_port_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("schemaform.toml"),
        "[server]\nhost = \"127.0.0.1\"\nport = 0\n",
    )?;

    let err = Settings::from_root(temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("Port must be greater than 0"));
    Ok(())
}
