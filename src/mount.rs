//! Widget mount lifecycle: container resolution, instance registry, the
//! global host-page API, and script-tag auto-mount.
//!
//! DESIGN
//! ======
//! At most one live widget instance exists per container. Mounting onto an
//! already-mounted container tears the previous instance down first, and
//! destroy is idempotent. The registry is thread-local; all mutation happens
//! synchronously on the single UI thread, so no locking is needed.
//!
//! Container resolution precedence: explicit element, then CSS selector,
//! then container id (falling back to the conventional default id), then an
//! auto-created `<div>` appended to `<body>`. Auto-created containers are
//! tagged so destroy knows the widget owns them.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use thiserror::Error;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::Closure;
#[cfg(feature = "browser")]
use wasm_bindgen::{JsCast, JsValue};

/// Id given to the container the widget creates when none is supplied.
pub const DEFAULT_CONTAINER_ID: &str = "support-widget";
/// Attribute tagging containers the widget created and may remove again.
pub const AUTO_CREATED_ATTR: &str = "data-support-widget-auto-created";
/// Name of the global API object installed on `window`.
pub const GLOBAL_NAMESPACE: &str = "SupportWidget";
/// Legacy global alias: `mountSupportWidget(container, clientKey)`.
pub const LEGACY_MOUNT_FN: &str = "mountSupportWidget";

/// Host-page configuration for one widget instance.
#[derive(Clone, Debug, Default)]
pub struct MountConfig {
    pub client_key: String,
    pub target_selector: Option<String>,
    pub container_id: Option<String>,
    pub custom_user_id: Option<String>,
    pub api_url: Option<String>,
    pub remove_container_on_destroy: Option<bool>,
}

impl MountConfig {
    /// Validate the parts of the config that do not need a DOM.
    ///
    /// # Errors
    ///
    /// Returns `MountError::MissingClientKey` when the client key is absent
    /// or blank.
    pub fn validate(&self) -> Result<(), MountError> {
        if self.client_key.trim().is_empty() {
            return Err(MountError::MissingClientKey);
        }
        Ok(())
    }
}

/// Synchronous failures raised by `mount`. Fatal to that mount call only.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("a configuration object is required to mount the widget")]
    MissingConfig,
    #[error("clientKey is required to mount the widget")]
    MissingClientKey,
    #[error("the widget can only be mounted in a browser environment")]
    BrowserUnavailable,
    #[error("no element found for selector {0:?}")]
    SelectorNotFound(String),
}

/// Container lookup strategy when no explicit element was supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerPlan {
    /// Query a CSS selector; failing to match is a mount error.
    Selector(String),
    /// Find an element by id, creating and tagging one when absent.
    ById(String),
}

impl ContainerPlan {
    /// Decide the lookup strategy for `config`: selector beats container id,
    /// and a missing id falls back to the conventional default.
    #[must_use]
    pub fn for_config(config: &MountConfig) -> Self {
        if let Some(selector) = &config.target_selector {
            return Self::Selector(selector.clone());
        }
        Self::ById(
            config
                .container_id
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTAINER_ID.to_owned()),
        )
    }
}

/// Teardown policy when the caller did not set one: only containers the
/// widget itself created default to removal.
#[must_use]
pub fn remove_on_destroy(requested: Option<bool>, auto_created: bool) -> bool {
    requested.unwrap_or(auto_created)
}

/// Whether destroy may take the container out of the document. Pre-existing
/// containers are never removed, even when the caller opted in.
#[must_use]
pub fn should_remove_container(remove_on_destroy: bool, auto_created: bool) -> bool {
    remove_on_destroy && auto_created
}

// =============================================================
// Browser-side registry and lifecycle
// =============================================================

/// One live widget instance bound to one container element.
#[cfg(feature = "browser")]
struct MountedInstance {
    container: web_sys::HtmlElement,
    auto_created: bool,
    remove_on_destroy: bool,
    teardown: Option<Box<dyn FnOnce()>>,
}

#[cfg(feature = "browser")]
thread_local! {
    static MOUNTED: std::cell::RefCell<Vec<MountedInstance>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

/// Resolved container plus its teardown policy.
#[cfg(feature = "browser")]
struct ResolvedContainer {
    element: web_sys::HtmlElement,
    auto_created: bool,
    remove_on_destroy: bool,
}

#[cfg(feature = "browser")]
fn resolve_container(
    explicit: Option<web_sys::HtmlElement>,
    config: &MountConfig,
) -> Result<ResolvedContainer, MountError> {
    if let Some(element) = explicit {
        return Ok(ResolvedContainer {
            element,
            auto_created: false,
            remove_on_destroy: remove_on_destroy(config.remove_container_on_destroy, false),
        });
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::BrowserUnavailable)?;

    match ContainerPlan::for_config(config) {
        ContainerPlan::Selector(selector) => {
            let found = document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
            match found {
                Some(element) => Ok(ResolvedContainer {
                    element,
                    auto_created: false,
                    remove_on_destroy: remove_on_destroy(config.remove_container_on_destroy, false),
                }),
                None => Err(MountError::SelectorNotFound(selector)),
            }
        }
        ContainerPlan::ById(id) => {
            if let Some(element) = document
                .get_element_by_id(&id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                return Ok(ResolvedContainer {
                    element,
                    auto_created: false,
                    remove_on_destroy: remove_on_destroy(config.remove_container_on_destroy, false),
                });
            }

            let element = document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .ok_or(MountError::BrowserUnavailable)?;
            element.set_id(&id);
            let _ = element.set_attribute(AUTO_CREATED_ATTR, "true");
            document
                .body()
                .ok_or(MountError::BrowserUnavailable)?
                .append_child(&element)
                .map_err(|_| MountError::BrowserUnavailable)?;

            Ok(ResolvedContainer {
                element,
                auto_created: true,
                remove_on_destroy: remove_on_destroy(config.remove_container_on_destroy, true),
            })
        }
    }
}

/// Unmount an instance's UI tree and remove its container when policy allows.
#[cfg(feature = "browser")]
fn cleanup_instance(mut record: MountedInstance) {
    if let Some(teardown) = record.teardown.take() {
        teardown();
    }
    if should_remove_container(record.remove_on_destroy, record.auto_created) {
        if let Some(parent) = record.container.parent_node() {
            let _ = parent.remove_child(&record.container);
        }
    }
}

/// Mount a widget instance per `config`, optionally into an explicit
/// container element. Returns the container the widget rendered into.
///
/// Re-mounting onto a container that already holds an instance tears the
/// previous instance down first, so a container never holds two.
///
/// # Errors
///
/// Returns a `MountError` when the client key is missing, no browser
/// document is available, or `target_selector` matches nothing. No container
/// is created or mutated on error.
#[cfg(feature = "browser")]
pub fn mount(
    explicit: Option<web_sys::HtmlElement>,
    config: &MountConfig,
) -> Result<web_sys::HtmlElement, MountError> {
    config.validate()?;
    let resolved = resolve_container(explicit, config)?;

    destroy(Some(&resolved.element));

    let client_key = config.client_key.clone();
    let custom_user_id = config.custom_user_id.clone();
    let api_url = config.api_url.clone();
    let handle = leptos::mount::mount_to(resolved.element.clone(), move || {
        use crate::app::App;
        leptos::prelude::view! {
            <App client_key=client_key custom_user_id=custom_user_id api_url=api_url/>
        }
    });
    let teardown: Box<dyn FnOnce()> = Box::new(move || drop(handle));

    MOUNTED.with_borrow_mut(|list| {
        list.push(MountedInstance {
            container: resolved.element.clone(),
            auto_created: resolved.auto_created,
            remove_on_destroy: resolved.remove_on_destroy,
            teardown: Some(teardown),
        });
    });

    Ok(resolved.element)
}

/// Destroy the instance mounted in `container`, or every tracked instance
/// when `container` is `None`. A no-op for unknown or already-destroyed
/// containers.
#[cfg(feature = "browser")]
pub fn destroy(container: Option<&web_sys::HtmlElement>) {
    let records = MOUNTED.with_borrow_mut(|list| match container {
        Some(target) => {
            let mut removed = Vec::new();
            let mut i = 0;
            while i < list.len() {
                if &list[i].container == target {
                    removed.push(list.remove(i));
                } else {
                    i += 1;
                }
            }
            removed
        }
        None => std::mem::take(list),
    });

    // Run teardown outside the registry borrow in case unmount re-enters.
    for record in records {
        cleanup_instance(record);
    }
}

// =============================================================
// Host-page API surface
// =============================================================

#[cfg(feature = "browser")]
fn to_js_error(error: &MountError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// Build the `{container, destroy}` object handed back to host-page callers.
#[cfg(feature = "browser")]
fn mount_result_object(container: &web_sys::HtmlElement) -> JsValue {
    let result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        result.as_ref(),
        &JsValue::from_str("container"),
        container.as_ref(),
    );

    let element = container.clone();
    let destroy_fn = Closure::<dyn Fn()>::new(move || destroy(Some(&element)));
    let _ = js_sys::Reflect::set(
        result.as_ref(),
        &JsValue::from_str("destroy"),
        destroy_fn.as_ref(),
    );
    destroy_fn.forget();

    result.into()
}

/// Read a `MountConfig` (and optional explicit container) out of a host-page
/// configuration object.
#[cfg(feature = "browser")]
fn config_from_js(value: &JsValue) -> Result<(Option<web_sys::HtmlElement>, MountConfig), MountError> {
    if !value.is_object() {
        return Err(MountError::MissingConfig);
    }

    let get = |key: &str| js_sys::Reflect::get(value, &JsValue::from_str(key)).ok();
    let get_string = |key: &str| {
        get(key)
            .and_then(|v| v.as_string())
            .filter(|s| !s.is_empty())
    };

    let explicit = get("container").and_then(|v| v.dyn_into::<web_sys::HtmlElement>().ok());
    let config = MountConfig {
        client_key: get_string("clientKey").unwrap_or_default(),
        target_selector: get_string("targetSelector"),
        container_id: get_string("containerId"),
        custom_user_id: get_string("customUserId"),
        api_url: get_string("apiUrl"),
        remove_container_on_destroy: get("removeContainerOnDestroy").and_then(|v| v.as_bool()),
    };
    Ok((explicit, config))
}

#[cfg(feature = "browser")]
fn mount_from_js(value: &JsValue) -> Result<JsValue, JsValue> {
    let (explicit, config) = config_from_js(value).map_err(|e| to_js_error(&e))?;
    let container = mount(explicit, &config).map_err(|e| to_js_error(&e))?;
    Ok(mount_result_object(&container))
}

/// Install the `SupportWidget` namespace and the legacy mount alias on
/// `window`, so inline host scripts can control the widget without a module
/// loader.
#[cfg(feature = "browser")]
pub fn install_global_api() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let api = js_sys::Object::new();

    let mount_fn = Closure::<dyn Fn(JsValue) -> JsValue>::new(|config: JsValue| -> JsValue {
        match mount_from_js(&config) {
            Ok(result) => result,
            Err(e) => wasm_bindgen::throw_val(e),
        }
    });
    let _ = js_sys::Reflect::set(
        api.as_ref(),
        &JsValue::from_str("mount"),
        mount_fn.as_ref(),
    );
    mount_fn.forget();

    let destroy_fn = Closure::<dyn Fn(JsValue)>::new(|target: JsValue| {
        let element = target.dyn_into::<web_sys::HtmlElement>().ok();
        destroy(element.as_ref());
    });
    let _ = js_sys::Reflect::set(
        api.as_ref(),
        &JsValue::from_str("destroy"),
        destroy_fn.as_ref(),
    );
    destroy_fn.forget();

    let _ = js_sys::Reflect::set(
        window.as_ref(),
        &JsValue::from_str(GLOBAL_NAMESPACE),
        api.as_ref(),
    );

    let legacy_fn = Closure::<dyn Fn(web_sys::HtmlElement, String) -> JsValue>::new(
        |container: web_sys::HtmlElement, client_key: String| -> JsValue {
            let config = MountConfig {
                client_key,
                ..MountConfig::default()
            };
            match mount(Some(container), &config) {
                Ok(element) => mount_result_object(&element),
                Err(e) => wasm_bindgen::throw_val(to_js_error(&e)),
            }
        },
    );
    let _ = js_sys::Reflect::set(
        window.as_ref(),
        &JsValue::from_str(LEGACY_MOUNT_FN),
        legacy_fn.as_ref(),
    );
    legacy_fn.forget();
}

// =============================================================
// Script-tag auto-mount
// =============================================================

/// Self-mount from the executing `<script>` tag's data attributes:
/// `data-client-key`, `data-custom-user-id`, `data-api-url`, `data-target`,
/// `data-container-id`, and `data-auto-mount` (set to `"false"` to disable).
///
/// Misconfiguration logs a warning instead of throwing, since there is no
/// host-page caller to catch it.
#[cfg(feature = "browser")]
pub fn auto_mount() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(script) = resolve_executing_script(&document) else {
        return;
    };

    let dataset = script.dataset();
    if dataset.get("autoMount").as_deref() == Some("false") {
        return;
    }

    let Some(client_key) = dataset.get("clientKey").filter(|k| !k.is_empty()) else {
        log::warn!("data-client-key attribute is required for auto-mounting");
        return;
    };

    let config = MountConfig {
        client_key,
        target_selector: dataset.get("target"),
        container_id: dataset.get("containerId"),
        custom_user_id: dataset.get("customUserId"),
        api_url: dataset.get("apiUrl"),
        remove_container_on_destroy: None,
    };

    if document.ready_state() == "loading" {
        let run = Closure::once_into_js(move || run_auto_mount(&config));
        let _ = document.add_event_listener_with_callback("DOMContentLoaded", run.unchecked_ref());
    } else {
        run_auto_mount(&config);
    }
}

#[cfg(feature = "browser")]
fn run_auto_mount(config: &MountConfig) {
    if let Err(e) = mount(None, config) {
        log::warn!("auto-mount failed: {e}");
    }
}

/// The script tag that loaded the widget. `currentScript` is unset by the
/// time wasm runs asynchronously, so fall back to the last widget script tag
/// in the document.
#[cfg(feature = "browser")]
fn resolve_executing_script(document: &web_sys::Document) -> Option<web_sys::HtmlScriptElement> {
    if let Some(script) = document
        .current_script()
        .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
    {
        return Some(script);
    }

    let scripts = document.query_selector_all("script[data-client-key]").ok()?;
    let last = scripts.get(scripts.length().checked_sub(1)?)?;
    last.dyn_into::<web_sys::HtmlScriptElement>().ok()
}
