//! # StoreAPI Info Exchange
//!
//! A querier receives info responses from its endpoints, each carrying the
//! raw `store_type` integer the endpoint announced. Tests that:
//!
//! 1. **Announce → resolve**: every StoreAPI component announces a value
//!    that resolves back to the very same catalog constant.
//! 2. **Foreign values**: values with no local component are skipped, not
//!    mistaken for the zero value.
//! 3. **Logging**: unresolved values are logged with the offending value.
//! 4. **Arbitrary responses**: any integer an endpoint sends either resolves
//!    to the component announcing that exact value or is dropped.

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use proptest::prelude::*;
    use serde_json::{json, Value};

    use component_registry::{
        catalog, from_proto, from_proto_value, store_apis, Component, SourceStoreApiComponent,
        StoreApi, QUERY, RECEIVE, RULE, SIDECAR, STORE,
    };
    use shared_types::StoreType;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Info response as an endpoint puts it on the wire.
    fn announce(component: &dyn StoreApi) -> Value {
        json!({
            "store_type": component.to_proto().unwrap().as_i32(),
            "labels": [{ "name": "replica", "value": component.name() }],
        })
    }

    /// Resolve every response to a component, dropping unknown endpoints.
    fn resolve_endpoints(responses: &[Value]) -> Vec<&'static SourceStoreApiComponent> {
        responses
            .iter()
            .filter_map(|r| r["store_type"].as_i64())
            .filter_map(|raw| i32::try_from(raw).ok())
            .filter_map(from_proto_value)
            .collect()
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_every_endpoint_resolves_to_itself() {
        let responses: Vec<_> = store_apis().iter().map(|c| announce(*c)).collect();
        let resolved = resolve_endpoints(&responses);

        assert_eq!(resolved.len(), store_apis().len());
        for (announced, resolved) in store_apis().iter().zip(resolved) {
            assert!(std::ptr::eq(*announced, resolved));
        }
    }

    #[test]
    fn test_sidecar_announcement() {
        let response = announce(&SIDECAR);
        assert_eq!(response["store_type"], StoreType::Sidecar.as_i32());

        let resolved = resolve_endpoints(&[response]);
        assert_eq!(resolved.len(), 1);
        assert!(std::ptr::eq(resolved[0], &SIDECAR));
    }

    #[test]
    fn test_foreign_endpoints_are_skipped() {
        let responses = vec![
            announce(&QUERY),
            json!({ "store_type": StoreType::Unknown.as_i32() }),
            json!({ "store_type": StoreType::Debug.as_i32() }),
            json!({ "store_type": 17 }),
            json!({ "store_type": i64::from(i32::MAX) + 1 }),
            announce(&RECEIVE),
        ];

        let resolved = resolve_endpoints(&responses);
        let names: Vec<_> = resolved.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["query", "receive"]);
    }

    #[test]
    fn test_wire_value_round_trip() {
        for store_type in [
            StoreType::Query,
            StoreType::Rule,
            StoreType::Sidecar,
            StoreType::Store,
            StoreType::Receive,
        ] {
            let component = from_proto(store_type).unwrap();
            assert_eq!(component.to_proto(), Ok(store_type));
        }
        assert!(std::ptr::eq(from_proto(StoreType::Rule).unwrap(), &RULE));
        assert!(std::ptr::eq(from_proto(StoreType::Store).unwrap(), &STORE));
    }

    #[test]
    fn test_capability_profiles_across_catalog() {
        let queryable: Vec<_> = catalog()
            .iter()
            .filter(|c| c.capabilities().implements_store_api())
            .map(|c| c.name())
            .collect();

        assert_eq!(queryable, vec!["query", "rule", "sidecar", "store", "receive"]);
        assert!(catalog().iter().all(|c| c.capabilities().produces_blocks()));
    }

    #[test]
    fn test_unresolved_value_is_logged() {
        let (resolved, logs) = with_captured_logs(|| from_proto(StoreType::Debug));

        assert!(resolved.is_none());
        assert!(logs.contains("No component for store type"), "logs: {logs}");
        assert!(logs.contains("DEBUG"));
    }

    #[test]
    fn test_out_of_range_value_is_logged() {
        let (resolved, logs) = with_captured_logs(|| from_proto_value(-7));

        assert!(resolved.is_none());
        assert!(logs.contains("-7"), "logs: {logs}");
    }

    #[test]
    fn test_known_values_log_nothing() {
        let (resolved, logs) = with_captured_logs(|| from_proto(StoreType::Query));

        assert!(resolved.is_some());
        assert!(logs.is_empty(), "logs: {logs}");
    }

    proptest! {
        #[test]
        fn prop_arbitrary_responses_resolve_exactly(raw in any::<i64>()) {
            let response = json!({ "store_type": raw });
            let resolved = resolve_endpoints(&[response]);

            match resolved.as_slice() {
                [component] => {
                    prop_assert_eq!(i64::from(component.to_proto().unwrap().as_i32()), raw);
                }
                [] => {
                    prop_assert!(!(1..=5).contains(&raw));
                }
                _ => {
                    prop_assert!(false, "one response resolved to {} components", resolved.len());
                }
            }
        }

        #[test]
        fn prop_known_values_survive_noise(
            noise in proptest::collection::vec(
                any::<i32>().prop_filter("foreign value", |v| !(1..=5).contains(v)),
                0..8,
            ),
            index in 0usize..5,
        ) {
            let expected = store_apis()[index];
            let mut responses: Vec<Value> = noise.iter().map(|v| json!({ "store_type": v })).collect();
            responses.push(announce(expected));

            let resolved = resolve_endpoints(&responses);
            prop_assert_eq!(resolved.len(), 1);
            prop_assert!(std::ptr::eq(resolved[0], expected));
        }
    }
}
