use demo_functions::handlers::simple::{build_record, function_handler};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{Value, json};

#[test]
fn test_record_passes_event_through() {
    let events = [
        json!({}),
        json!({"key1": "value1", "key2": [1, 2, {"deep": true}]}),
        json!("a bare string"),
        json!(42),
        Value::Null,
    ];

    for event in events {
        let record = build_record(event.clone());
        assert_eq!(record.event, event);
    }
}

#[test]
fn test_record_fixed_values() {
    let record = build_record(json!({}));

    assert_eq!(record.formatted, "He said his name is Fred.");
    assert_eq!(record.primes, vec![2, 3, 5, 7]);
    assert_eq!(record.one_thousand, 1000);
    assert_eq!(record.one_million_underscore, "1_000_000");
}

#[test]
fn test_record_version_fields_agree() {
    let record = build_record(json!({}));
    let info = &record.sys_version_info;

    let prefix = format!("{}.{}.{} (", info.major, info.minor, info.patch);
    assert!(
        record.sys_version.starts_with(&prefix),
        "sys_version {:?} should start with {:?}",
        record.sys_version,
        prefix
    );
}

#[tokio::test]
async fn test_handler_output_shape() {
    let event = json!({"hello": "world"});

    let output = function_handler(LambdaEvent::new(event.clone(), Context::default()))
        .await
        .unwrap();

    let object = output.as_object().expect("handler should return a JSON object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "event",
            "formatted",
            "one_million_underscore",
            "one_thousand",
            "primes",
            "sys_version",
            "sys_version_info",
        ]
    );

    assert_eq!(output["event"], event);
    assert_eq!(output["formatted"], "He said his name is Fred.");
    assert_eq!(output["primes"], json!([2, 3, 5, 7]));
    assert_eq!(output["one_thousand"], json!(1000));
    assert_eq!(output["one_million_underscore"], "1_000_000");
    assert!(output["sys_version"].is_string());

    let info = output["sys_version_info"]
        .as_array()
        .expect("sys_version_info should serialise as a tuple");
    assert_eq!(info.len(), 5);
    assert_eq!(info[3], "final");
}
