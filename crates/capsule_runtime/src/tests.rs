//! Tests for the capsule runtime API

use std::path::Path;

use pretty_assertions::assert_eq;

use capsule_core::{AppHandle, Resources, StaticResources, StyleId};
use capsule_host::{BridgeError, HostLink, HostRegistry, ResourceBridge};
use capsule_theme::{catalog, StyleTable};

use crate::{
    AdaptError, BaseContext, CapsuleActivity, CapsuleConfig, CapsuleError, ContextAdapter,
};

/// Bridge that serves one fixed handle, as a host's compiled table would
struct FixedBridge {
    resources: Resources,
}

impl ResourceBridge for FixedBridge {
    fn bridge_resources(&self, _app: &AppHandle) -> Result<Resources, BridgeError> {
        Ok(self.resources.clone())
    }
}

/// Bridge that refuses every module
struct FailingBridge;

impl ResourceBridge for FailingBridge {
    fn bridge_resources(&self, app: &AppHandle) -> Result<Resources, BridgeError> {
        Err(BridgeError::UnknownModule(app.package().to_string()))
    }
}

fn module_resources() -> Resources {
    Resources::from_resolver(StaticResources::new("module").with_str("app.title", "Capsule Demo"))
}

fn host_resources() -> Resources {
    Resources::from_resolver(StaticResources::new("shell").with_str("app.title", "Shell"))
}

fn hosted_registry(bridge: impl ResourceBridge + 'static) -> HostRegistry {
    let registry = HostRegistry::new();
    registry.install(HostLink::new("shell", bridge));
    registry
}

fn test_activity(base: BaseContext) -> CapsuleActivity {
    CapsuleActivity::new(CapsuleConfig::new("com.capsule.demo"), base)
}

#[test]
fn test_standalone_when_no_link() {
    let registry = HostRegistry::new();
    let styles = StyleTable::with_builtin();
    let module = module_resources();

    let mut activity = test_activity(BaseContext::new(module.clone(), StyleId::NONE));
    activity.create_with(&registry, &styles);

    assert!(!activity.is_hosted());
    assert!(activity.context().is_none());
    assert!(activity.resources().ptr_eq(&module));
}

#[test]
fn test_standalone_theme_comes_from_descriptor() {
    let registry = HostRegistry::new();
    let styles = StyleTable::with_builtin();

    let mut activity = test_activity(BaseContext::new(module_resources(), StyleId::NONE));
    activity.create_with(&registry, &styles);

    // The default descriptor asks for "theme.light" in standalone mode.
    assert_eq!(activity.theme(), catalog::THEME_LIGHT);
}

#[test]
fn test_embedder_set_base_theme_wins_over_descriptor() {
    let registry = HostRegistry::new();
    let styles = StyleTable::with_builtin();

    let mut activity = test_activity(BaseContext::new(module_resources(), catalog::THEME_DARK));
    activity.create_with(&registry, &styles);

    assert_eq!(activity.theme(), catalog::THEME_DARK);
}

#[test]
fn test_hosted_flag_follows_link() {
    let host = host_resources();
    let registry = hosted_registry(FixedBridge { resources: host });
    let styles = StyleTable::with_builtin();

    let mut activity = test_activity(BaseContext::new(module_resources(), StyleId::NONE));
    activity.create_with(&registry, &styles);

    assert!(activity.is_hosted());
}

#[test]
fn test_adaptation_binds_host_resources_and_theme() {
    let host = host_resources();
    let registry = hosted_registry(FixedBridge {
        resources: host.clone(),
    });
    let styles = StyleTable::with_builtin();

    let mut activity = test_activity(BaseContext::new(module_resources(), StyleId::NONE));
    activity.create_with(&registry, &styles);

    let ctx = activity.context().expect("hosted startup adapts the context");
    assert!(ctx.resources().ptr_eq(&host));
    assert_eq!(ctx.theme(), catalog::THEME_DAY_NIGHT);

    // The effective accessors read through the adapted context.
    assert!(activity.resources().ptr_eq(&host));
    assert_eq!(activity.theme(), catalog::THEME_DAY_NIGHT);
}

#[test]
fn test_bridge_failure_leaves_context_unset() {
    let registry = hosted_registry(FailingBridge);
    let styles = StyleTable::with_builtin();
    let module = module_resources();

    let mut activity = test_activity(BaseContext::new(module.clone(), StyleId::NONE));
    activity.create_with(&registry, &styles);

    // Startup must survive the failure: hosted, but unadapted.
    assert!(activity.is_hosted());
    assert!(activity.context().is_none());
    assert!(activity.resources().ptr_eq(&module));
}

#[test]
fn test_theme_miss_keeps_base_theme() {
    let host = host_resources();
    let registry = hosted_registry(FixedBridge {
        resources: host.clone(),
    });
    // Empty table: the configured theme name resolves to nothing.
    let styles = StyleTable::new();

    let mut activity = test_activity(BaseContext::new(module_resources(), catalog::THEME_DARK));
    activity.create_with(&registry, &styles);

    let ctx = activity.context().expect("resource patching still succeeds");
    assert!(ctx.resources().ptr_eq(&host));
    assert_eq!(ctx.theme_override(), StyleId::NONE);
    assert_eq!(ctx.theme(), catalog::THEME_DARK);
}

#[test]
fn test_adapter_without_link_reports_not_hosted() {
    let registry = HostRegistry::new();
    let styles = StyleTable::with_builtin();
    let adapter = ContextAdapter::new(
        &registry,
        &styles,
        AppHandle::new("com.capsule.demo"),
        catalog::DAY_NIGHT,
    );

    let err = adapter
        .adapt(BaseContext::new(module_resources(), StyleId::NONE))
        .unwrap_err();
    assert!(matches!(err, AdaptError::NotHosted));
}

#[test]
fn test_adaptation_is_idempotent() {
    let host = host_resources();
    let registry = hosted_registry(FixedBridge {
        resources: host.clone(),
    });
    let styles = StyleTable::with_builtin();
    let adapter = ContextAdapter::new(
        &registry,
        &styles,
        AppHandle::new("com.capsule.demo"),
        catalog::DAY_NIGHT,
    );

    let base = BaseContext::new(module_resources(), StyleId::NONE);
    let first = adapter.adapt(base.clone()).unwrap();
    let second = adapter.adapt(base).unwrap();

    assert!(first.resources().ptr_eq(second.resources()));
    assert_eq!(first.theme(), second.theme());
    assert_eq!(first.theme_override(), second.theme_override());
}

#[test]
fn test_destroy_then_recreate_reprobes() {
    let registry = HostRegistry::new();
    let styles = StyleTable::with_builtin();
    let host = host_resources();

    let mut activity = test_activity(BaseContext::new(module_resources(), StyleId::NONE));
    activity.create_with(&registry, &styles);
    assert!(!activity.is_hosted());

    // Loader attaches late; the component restarts and picks it up.
    registry.install(HostLink::new("shell", FixedBridge {
        resources: host.clone(),
    }));
    activity.on_destroy();
    activity.create_with(&registry, &styles);
    assert!(activity.is_hosted());
    assert!(activity.context().is_some());

    // Loader detaches again.
    registry.uninstall();
    activity.on_destroy();
    activity.create_with(&registry, &styles);
    assert!(!activity.is_hosted());
    assert!(activity.context().is_none());
}

#[test]
fn test_descriptor_defaults() {
    let config = CapsuleConfig::from_toml_str(
        r#"
        [module]
        package = "com.capsule.notes"
        display_name = "Notes"
        "#,
    )
    .unwrap();

    assert_eq!(config.module.package, "com.capsule.notes");
    assert_eq!(config.module.version, "0.1.0");
    assert_eq!(config.theme.hosted, catalog::DAY_NIGHT);
    assert_eq!(config.theme.standalone, catalog::LIGHT);
    assert_eq!(config.app_handle().display_name(), "Notes");
}

#[test]
fn test_descriptor_roundtrips_through_toml() {
    let mut config = CapsuleConfig::new("com.capsule.notes");
    config.module.display_name = Some("Notes".to_string());
    config.theme.hosted = "theme.dark".to_string();

    let reparsed = CapsuleConfig::from_toml_str(&config.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed.module.package, config.module.package);
    assert_eq!(reparsed.module.display_name, config.module.display_name);
    assert_eq!(reparsed.theme.hosted, config.theme.hosted);
    assert_eq!(reparsed.theme.standalone, config.theme.standalone);
}

#[test]
fn test_missing_descriptor_reports_its_directory() {
    let err = CapsuleConfig::load_from_dir(Path::new("/nonexistent/capsule-module")).unwrap_err();
    assert!(matches!(err, CapsuleError::MissingDescriptor(_)));
}

#[test]
fn test_malformed_descriptor_reports_parse_error() {
    let err = CapsuleConfig::from_toml_str("module = 3").unwrap_err();
    assert!(matches!(err, CapsuleError::DescriptorParse(_)));
}
