use super::*;

fn config_with_key() -> MountConfig {
    MountConfig {
        client_key: "ck-1".to_owned(),
        ..MountConfig::default()
    }
}

// =============================================================
// Config validation
// =============================================================

#[test]
fn validate_rejects_missing_client_key() {
    let config = MountConfig::default();
    assert_eq!(config.validate(), Err(MountError::MissingClientKey));
}

#[test]
fn validate_rejects_blank_client_key() {
    let config = MountConfig {
        client_key: "   ".to_owned(),
        ..MountConfig::default()
    };
    assert_eq!(config.validate(), Err(MountError::MissingClientKey));
}

#[test]
fn validate_accepts_present_client_key() {
    assert_eq!(config_with_key().validate(), Ok(()));
}

// =============================================================
// Container plan precedence
// =============================================================

#[test]
fn selector_wins_over_container_id() {
    let config = MountConfig {
        target_selector: Some("#host".to_owned()),
        container_id: Some("custom-id".to_owned()),
        ..config_with_key()
    };
    assert_eq!(
        ContainerPlan::for_config(&config),
        ContainerPlan::Selector("#host".to_owned())
    );
}

#[test]
fn container_id_used_when_no_selector() {
    let config = MountConfig {
        container_id: Some("custom-id".to_owned()),
        ..config_with_key()
    };
    assert_eq!(
        ContainerPlan::for_config(&config),
        ContainerPlan::ById("custom-id".to_owned())
    );
}

#[test]
fn default_container_id_is_the_fallback() {
    assert_eq!(
        ContainerPlan::for_config(&config_with_key()),
        ContainerPlan::ById(DEFAULT_CONTAINER_ID.to_owned())
    );
}

// =============================================================
// Teardown policy
// =============================================================

#[test]
fn explicit_policy_wins_over_defaults() {
    assert!(remove_on_destroy(Some(true), false));
    assert!(!remove_on_destroy(Some(false), true));
}

#[test]
fn auto_created_containers_default_to_removal() {
    assert!(remove_on_destroy(None, true));
    assert!(!remove_on_destroy(None, false));
}

#[test]
fn pre_existing_containers_are_never_removed() {
    // Even an explicit opt-in cannot remove a container the widget did not
    // create.
    assert!(!should_remove_container(true, false));
    assert!(should_remove_container(true, true));
    assert!(!should_remove_container(false, true));
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn selector_not_found_names_the_selector() {
    let error = MountError::SelectorNotFound("#missing".to_owned());
    assert_eq!(error.to_string(), "no element found for selector \"#missing\"");
}

#[test]
fn missing_client_key_message_names_the_field() {
    assert_eq!(
        MountError::MissingClientKey.to_string(),
        "clientKey is required to mount the widget"
    );
}
