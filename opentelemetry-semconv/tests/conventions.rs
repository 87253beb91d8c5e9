use opentelemetry_semconv::attribute::{self, HttpRequestMethod, NetworkTransport};
use opentelemetry_semconv::registry::{self, Kind, Stability};
use opentelemetry_semconv::{event, metric, EnumValue, UnknownValue};
use rstest::rstest;

#[test]
fn well_known_names() {
    assert_eq!(attribute::DB_SYSTEM_NAME, "db.system.name");
    assert_eq!(attribute::HTTP_REQUEST_METHOD_VALUE_OTHER, "_OTHER");
    assert_eq!(
        metric::HTTP_SERVER_REQUEST_DURATION,
        "http.server.request.duration"
    );
    assert_eq!(event::EXCEPTION, "exception");
}

#[test]
fn domain_modules_are_re_exported() {
    assert_eq!(
        attribute::http::HTTP_REQUEST_METHOD,
        attribute::HTTP_REQUEST_METHOD
    );
    assert_eq!(attribute::network::SERVER_ADDRESS, attribute::SERVER_ADDRESS);
    assert_eq!(
        metric::http::HTTP_CLIENT_REQUEST_DURATION,
        metric::HTTP_CLIENT_REQUEST_DURATION
    );
}

#[rstest]
#[case(attribute::http_request_header("content-type"), "http.request.header.content-type")]
#[case(attribute::http_response_header("x-trace"), "http.response.header.x-trace")]
#[case(attribute::http_request_header(""), "http.request.header.")]
fn templated_keys(#[case] actual: String, #[case] expected: &str) {
    assert_eq!(actual, expected);
}

#[test]
fn constants_match_registry() {
    let entry = registry::attribute(attribute::HTTP_REQUEST_METHOD).unwrap();
    assert_eq!(entry.name, "HTTP_REQUEST_METHOD");
    assert_eq!(entry.kind, Kind::Attribute);

    let value = registry::values_of(attribute::HTTP_REQUEST_METHOD)
        .find(|entry| entry.name == "HTTP_REQUEST_METHOD_VALUE_OTHER")
        .unwrap();
    assert_eq!(
        value.value.as_str(),
        Some(attribute::HTTP_REQUEST_METHOD_VALUE_OTHER)
    );
}

fn registry_agrees_with<T: EnumValue>() {
    let listed: Vec<_> = registry::values_of(T::ATTRIBUTE)
        .filter_map(|entry| entry.value.as_str())
        .collect();
    let typed: Vec<_> = T::all().iter().map(|value| value.as_str()).collect();
    assert_eq!(listed, typed, "{}", T::ATTRIBUTE);
}

#[test]
fn typed_enums_match_registry() {
    registry_agrees_with::<HttpRequestMethod>();
    registry_agrees_with::<NetworkTransport>();
    registry_agrees_with::<attribute::ErrorType>();
    registry_agrees_with::<attribute::OtelStatusCode>();
}

#[test]
fn typed_enums_parse() {
    assert_eq!(
        "CONNECT".parse::<HttpRequestMethod>(),
        Ok(HttpRequestMethod::Connect)
    );
    assert_eq!(NetworkTransport::Udp.to_string(), "udp");
    assert_eq!(
        "UDP".parse::<NetworkTransport>(),
        Err(UnknownValue {
            attribute: "network.transport",
            value: "UDP".to_owned(),
        })
    );
}

#[test]
fn stable_constants_are_always_available() {
    let stable = registry::entries()
        .filter(|entry| entry.stability == Stability::Stable)
        .count();
    assert!(stable > 0);
    assert_eq!(attribute::URL_FULL, "url.full");
    assert_eq!(attribute::SERVICE_NAME, "service.name");
}

#[rstest]
#[case("file")]
#[case("http")]
#[case("k8s")]
#[case("feature_flag")]
#[case("gen_ai")]
#[case("vcs")]
fn every_namespace_has_entries(#[case] namespace: &str) {
    let prefix = format!("{namespace}.");
    assert!(
        registry::entries().any(|entry| entry.kind.is_attribute()
            && entry.value.as_str().is_some_and(|key| key.starts_with(&prefix))),
        "no attributes under {namespace}"
    );
}

#[test]
fn deprecated_metrics_point_at_their_replacement() {
    let entry = registry::metric("k8s.replication_controller.desired_pods").unwrap();
    assert!(entry.is_deprecated());
    assert_eq!(
        registry::replacement("k8s.replication_controller.available_pods"),
        Some("k8s.replicationcontroller.available_pods")
    );
    assert!(registry::metric("k8s.replicationcontroller.available_pods").is_some());
}

#[cfg(not(feature = "semconv_experimental"))]
#[test]
fn experimental_domains_keep_their_registry_rows() {
    let path = registry::attribute("file.path").unwrap();
    assert_eq!(path.stability, Stability::Experimental);
    assert!(registry::attribute("android.app.state").is_some());
    assert_eq!(attribute::http::HTTP_ROUTE, "http.route");
}

#[cfg(feature = "semconv_experimental")]
mod experimental {
    use super::*;

    #[test]
    fn experimental_names() {
        assert_eq!(attribute::HTTP_CONNECTION_STATE, "http.connection.state");
        assert_eq!(attribute::GEN_AI_SYSTEM, "gen_ai.system");
        assert_eq!(
            attribute::RPC_GRPC_STATUS_CODE_VALUE_UNAVAILABLE,
            14_i64
        );
        assert_eq!(
            attribute::rpc_grpc_request_metadata("x-user"),
            "rpc.grpc.request.metadata.x-user"
        );
        assert_eq!(event::SESSION_START, "session.start");
        assert_eq!(attribute::FILE_PATH, "file.path");
        assert_eq!(
            attribute::file::FILE_SYMBOLIC_LINK_TARGET_PATH,
            "file.symbolic_link.target_path"
        );
    }

    #[test]
    fn experimental_typed_enum() {
        assert_eq!(
            attribute::HttpConnectionState::ALL,
            &[
                attribute::HttpConnectionState::Active,
                attribute::HttpConnectionState::Idle
            ]
        );
        registry_agrees_with::<attribute::HttpConnectionState>();
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_names_stay_available() {
        assert_eq!(attribute::HTTP_METHOD, "http.method");
        assert_eq!(
            metric::K8S_REPLICATION_CONTROLLER_DESIRED_PODS,
            "k8s.replication_controller.desired_pods"
        );
        assert_eq!(
            registry::replacement(attribute::HTTP_METHOD),
            Some(attribute::HTTP_REQUEST_METHOD)
        );
    }
}

#[cfg(feature = "opentelemetry")]
mod interop {
    use super::*;
    use opentelemetry::{KeyValue, Value};

    #[test]
    fn key_value() {
        assert_eq!(
            HttpRequestMethod::Get.key_value(),
            KeyValue::new(attribute::HTTP_REQUEST_METHOD, "GET")
        );
    }

    #[test]
    fn into_value() {
        let value: Value = NetworkTransport::Quic.into();
        assert_eq!(value, Value::from("quic"));
    }
}
