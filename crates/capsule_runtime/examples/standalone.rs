//! Standalone capsule module demo
//!
//! Run with:
//! `cargo run -p capsule_runtime --example standalone`
//!
//! No host loader announces itself here, so the module starts against its
//! own resource table and the descriptor's standalone theme.

use anyhow::Result;
use capsule_runtime::prelude::*;

fn main() -> Result<()> {
    init_logging();

    let config = CapsuleConfig::from_toml_str(
        r#"
        [module]
        package = "com.capsule.notes"
        display_name = "Capsule Notes"

        [theme]
        standalone = "theme.light"
        "#,
    )?;

    let resources = Resources::from_resolver(
        StaticResources::new("module")
            .with_str("app.title", "Capsule Notes")
            .with_str("app.greeting", "Hello from the module's own table"),
    );
    let base = BaseContext::new(resources, StyleId::NONE);

    let mut activity = CapsuleActivity::new(config, base);
    activity.on_create();

    println!("package : {}", activity.package());
    println!("hosted  : {}", activity.is_hosted());
    println!("theme   : {}", activity.theme());
    println!("title   : {}", activity.resources().resolve_str("app.title")?);
    println!("greeting: {}", activity.resources().resolve_str("app.greeting")?);

    activity.on_destroy();
    Ok(())
}
