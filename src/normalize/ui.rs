//! UI option derivation
//!
//! Derives UI feature toggles from the resolved storage and ingress state.
//! A key the user set explicitly is never overwritten, and a value of an
//! unexpected shape makes the derivation leave the table alone.
//!
//! Must run after every other stage.

use crate::config::OperatorConfig;
use crate::crd::{FreeForm, IngressSecurityType, JaegerIngressSpec, JaegerSpec, TriState};
use crate::storage::{self, MEMORY};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const ARCHIVE_ENABLED_KEY: &str = "archiveEnabled";
pub const DEPENDENCIES_KEY: &str = "dependencies";
pub const MENU_ENABLED_KEY: &str = "menuEnabled";
pub const MENU_KEY: &str = "menu";

/// Storage options that switch on an archive backend
const ARCHIVE_OPTIONS: [&str; 2] = ["es-archive.enabled", "cassandra-archive.enabled"];

/// Sign-in path of the OAuth proxy, used as the log out target
const LOG_OUT_URL: &str = "/oauth/sign_in";

/// Derive UI options and write them back onto the spec
pub fn normalize_ui(spec: &mut JaegerSpec, config: &OperatorConfig) {
    let mut ui_opts = spec.ui.options.as_map().unwrap_or_default();

    enable_archive_button(&mut ui_opts, &spec.storage.options.map());
    disable_dependencies_tab(
        &mut ui_opts,
        &spec.storage.storage_type,
        spec.storage.dependencies.enabled,
    );
    enable_log_out(&mut ui_opts, &spec.ingress, &config.documentation_url);

    if !ui_opts.is_empty() {
        spec.ui.options = FreeForm::new(ui_opts);
    }
}

/// The archive button is hidden unless an archive backend is configured
fn enable_archive_button(ui_opts: &mut Map<String, Value>, storage_opts: &BTreeMap<String, String>) {
    if ui_opts.contains_key(ARCHIVE_ENABLED_KEY) {
        return;
    }

    let archive = ARCHIVE_OPTIONS.iter().any(|key| {
        storage_opts
            .get(*key)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    });
    if archive {
        info!("Archive storage configured. Enabling the archive button");
        ui_opts.insert(ARCHIVE_ENABLED_KEY.to_string(), Value::Bool(true));
    }
}

/// The dependencies tab is shown by default; hide it when nothing feeds it
fn disable_dependencies_tab(
    ui_opts: &mut Map<String, Value>,
    storage_type: &str,
    dependencies_enabled: TriState,
) {
    // in-memory storage computes dependencies on its own
    if storage::is_type(storage_type, MEMORY) || dependencies_enabled.is_enabled() {
        return;
    }

    let mut deps = match ui_opts.get(DEPENDENCIES_KEY) {
        None => Map::new(),
        Some(Value::Object(existing)) => existing.clone(),
        Some(other) => {
            debug!(value = %other, "UI dependencies option is not a map, leaving it untouched");
            return;
        }
    };

    if deps.contains_key(MENU_ENABLED_KEY) {
        return;
    }

    info!(storage = %storage_type, "No dependencies job. Hiding the dependencies tab");
    deps.insert(MENU_ENABLED_KEY.to_string(), Value::Bool(false));
    ui_opts.insert(DEPENDENCIES_KEY.to_string(), Value::Object(deps));
}

/// Behind the OAuth proxy the UI gets a menu with a log out entry
fn enable_log_out(ui_opts: &mut Map<String, Value>, ingress: &JaegerIngressSpec, documentation_url: &str) {
    if ingress.enabled.is_disabled() || ingress.security != IngressSecurityType::OAuthProxy {
        return;
    }

    if ui_opts.contains_key(MENU_KEY) {
        return;
    }

    info!("Ingress behind OAuth proxy. Adding a log out menu entry");
    ui_opts.insert(MENU_KEY.to_string(), log_out_menu(documentation_url));
}

fn log_out_menu(documentation_url: &str) -> Value {
    json!([
        {
            "label": "About",
            "items": [
                {
                    "label": "Documentation",
                    "url": documentation_url
                }
            ]
        },
        {
            "label": "Log Out",
            "url": LOG_OUT_URL,
            "anchorTarget": "_self"
        }
    ])
}
