use anyhow::Context;
use neuroflow_core::app::App;
use neuroflow_core::config::ProfileConfig;
use neuroflow_core::paths;
use neuroflow_core::store::FileStore;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing NeuroFlow profile in: {}", root.display());

    let store = FileStore::create(root)
        .with_context(|| format!("failed to create {}", root.display()))?;
    println!("  created: {}/", paths::STORE_DIR);

    let config_path = paths::config_path(root);
    if !config_path.exists() {
        let config = ProfileConfig::default();
        config.save(root).context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    // First-run acknowledgement
    let mut app = App::new(store);
    if !app.welcome_seen()? {
        app.mark_welcome_seen()?;
        println!("  welcome acknowledged");
    }

    println!();
    println!("Next: neuroflow quiz show");
    Ok(())
}
