//! # Concurrent Reads
//!
//! The registry holds no mutable state, so any number of threads may read
//! and translate components without synchronization.

#[cfg(test)]
mod tests {
    use std::thread;

    use component_registry::{catalog, from_proto_value, lookup, store_apis, StoreApi};
    use component_telemetry::TelemetryConfig;

    #[test]
    fn test_parallel_round_trips() {
        thread::scope(|scope| {
            for worker in 0..8 {
                scope.spawn(move || {
                    for _ in 0..1_000 {
                        for component in store_apis() {
                            let value = component.to_proto().unwrap().as_i32();
                            let resolved = from_proto_value(value).unwrap();
                            assert!(std::ptr::eq(resolved, *component), "worker {worker}");
                        }
                    }
                });
            }
        });
    }

    #[test]
    fn test_parallel_lookups_share_statics() {
        let addresses: Vec<Vec<usize>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        catalog()
                            .iter()
                            .map(|c| {
                                let found = lookup(c.name()).unwrap();
                                found as *const _ as *const () as usize
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_per_thread_telemetry_labels() {
        let labels: Vec<String> = thread::scope(|scope| {
            let handles: Vec<_> = catalog()
                .iter()
                .map(|c| scope.spawn(move || TelemetryConfig::for_component(*c).full_service_name()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (label, component) in labels.iter().zip(catalog()) {
            assert!(label.ends_with(component.name()));
        }
    }
}
