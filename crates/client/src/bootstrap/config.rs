use dnslookup_domain::{ClientConfig, ConfigOverrides};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    overrides: ConfigOverrides,
) -> anyhow::Result<ClientConfig> {
    let config = ClientConfig::load(config_path, overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        base_url = %config.api.base_url,
        default_nameserver = %config.ui.default_nameserver,
        "Configuration loaded"
    );

    Ok(config)
}
