//! Hosted capsule module demo
//!
//! Run with:
//! `cargo run -p capsule_runtime --example hosted`
//!
//! Plays both sides of the boundary in one process: first the host loader's
//! side (announce a shell with a resource bridge), then the module's ordinary
//! startup, which finds the link and adapts to it.

use anyhow::Result;
use capsule_runtime::prelude::*;

/// Stand-in for a host shell's compiled resource table.
struct ShellBridge {
    table: Resources,
}

impl ResourceBridge for ShellBridge {
    fn bridge_resources(&self, app: &AppHandle) -> Result<Resources, BridgeError> {
        tracing::info!("shell bridging resources for {app}");
        Ok(self.table.clone())
    }
}

fn main() -> Result<()> {
    init_logging();

    // Host loader side: announce the shell before any module starts.
    let shell_table = Resources::from_resolver(
        StaticResources::new("shell")
            .with_str("app.title", "Capsule Notes (in shell)")
            .with_str("shell.banner", "served from the shell's table"),
    );
    install_host_link(HostLink::new("shell", ShellBridge { table: shell_table }));

    // Module side: ordinary startup, unaware of the loader beyond the link.
    let config = CapsuleConfig::new("com.capsule.notes");
    let resources = Resources::from_resolver(
        StaticResources::new("module").with_str("app.title", "Capsule Notes"),
    );
    let base = BaseContext::new(resources, StyleId::NONE).with_scale_factor(2.0);

    let mut activity = CapsuleActivity::new(config, base);
    activity.on_create();

    println!("package : {}", activity.package());
    println!("hosted  : {}", activity.is_hosted());
    println!("theme   : {}", activity.theme());
    println!("title   : {}", activity.resources().resolve_str("app.title")?);
    println!("banner  : {}", activity.resources().resolve_str("shell.banner")?);
    if let Some(ctx) = activity.context() {
        println!("scale   : {}", ctx.base().scale_factor());
        println!("origin  : {}", ctx.resources().origin());
    }

    // Loader unload path.
    activity.on_destroy();
    uninstall_host_link();
    Ok(())
}
