use error_map::transform::{ParseLogVerbosityError, UNKNOWN_MODULE};
use error_map::{
    ErrorMapBuilder, ErrorTransformer, ErrorValue, LogOptions, LogVerbosity, TransformerConfig, TransformerOptions,
};

#[test]
fn verbosity_defaults_to_never() {
    let verbosity = LogVerbosity::default();

    assert_eq!(verbosity, LogVerbosity::Never);
    assert!(!verbosity.logs_known());
    assert!(!verbosity.logs_unknown());
}

#[test]
fn verbosity_flags() {
    assert!(LogVerbosity::Known.logs_known());
    assert!(!LogVerbosity::Known.logs_unknown());
    assert!(LogVerbosity::Unknown.logs_unknown());
    assert!(!LogVerbosity::Unknown.logs_known());
    assert!(LogVerbosity::All.logs_known() && LogVerbosity::All.logs_unknown());
}

#[test]
fn verbosity_gates_matched_and_fallback_outcomes() {
    assert!(!LogVerbosity::Never.allows(true));
    assert!(!LogVerbosity::Never.allows(false));
    assert!(LogVerbosity::Known.allows(true));
    assert!(!LogVerbosity::Known.allows(false));
    assert!(!LogVerbosity::Unknown.allows(true));
    assert!(LogVerbosity::Unknown.allows(false));
    assert!(LogVerbosity::All.allows(true));
    assert!(LogVerbosity::All.allows(false));
}

#[test]
fn verbosity_parses_case_insensitively() {
    assert_eq!("never".parse::<LogVerbosity>(), Ok(LogVerbosity::Never));
    assert_eq!(" Known ".parse::<LogVerbosity>(), Ok(LogVerbosity::Known));
    assert_eq!("UNKNOWN".parse::<LogVerbosity>(), Ok(LogVerbosity::Unknown));
    assert_eq!("all".parse::<LogVerbosity>(), Ok(LogVerbosity::All));

    let err: ParseLogVerbosityError = "loud".parse::<LogVerbosity>().unwrap_err();
    assert!(err.to_string().contains("loud"));
}

#[test]
fn verbosity_deserializes_from_lowercase_names() {
    let verbosity: LogVerbosity = serde_json::from_str("\"unknown\"").unwrap();

    assert_eq!(verbosity, LogVerbosity::Unknown);
}

#[test]
fn options_builder() {
    let options = TransformerOptions::default().log(LogVerbosity::All).log_options(LogOptions::plain());

    assert_eq!(options.log, LogVerbosity::All);
    assert!(!options.log_options.colored);
}

#[test]
fn config_carries_module_name_and_options() {
    let map = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL"));
    let config = TransformerConfig::new(map).module_name("orders");

    let transformer = ErrorTransformer::from_config(config, TransformerOptions::default().log(LogVerbosity::Known));

    assert_eq!(transformer.module_name(), "orders");
    assert_eq!(transformer.options().log, LogVerbosity::Known);
}

#[test]
fn empty_module_name_is_unknown() {
    let map = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL"));

    let transformer = ErrorTransformer::new(map, "");

    assert_eq!(transformer.module_name(), UNKNOWN_MODULE);
}

#[test]
fn verbose_transformers_still_produce_results() {
    let map = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL"))
        .equals("known")
        .throw_string("KNOWN")
        .equals("instance")
        .throw_error_instance(ErrorValue::conflict("CONFLICT"));
    let transformer = ErrorTransformer::from_config(
        TransformerConfig::new(map).module_name("noisy"),
        TransformerOptions::default().log(LogVerbosity::All).log_options(LogOptions::plain()),
    );

    assert_eq!(transformer.transform("known", ()), "KNOWN");
    assert_eq!(transformer.transform("instance", ()).code(), Some("CONFLICT"));
    assert_eq!(transformer.transform("other", ()).code(), Some("INTERNAL"));
}
