//! Property-based tests for batch add.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use produce_domain::{normalize_code, validate_record, Produce};
    use produce_storage::{MemoryProduceStore, ProduceStore};

    use crate::handlers::batch::ProduceHandler;

    /// Strategy to generate codes from a small pool, in either case, so
    /// that batches regularly contain case-variant duplicates
    fn pooled_code_strategy() -> impl Strategy<Value = String> {
        (0u8..6, any::<bool>()).prop_map(|(slot, lower)| {
            let code = format!("AAAA-BBBB-CCCC-{slot:04}");
            if lower {
                code.to_ascii_lowercase()
            } else {
                code
            }
        })
    }

    /// Strategy to generate records that are valid, malformed or duplicated
    fn candidate_strategy() -> impl Strategy<Value = Produce> {
        let code = prop_oneof![
            3 => pooled_code_strategy(),
            1 => "[A-Za-z0-9!_ ]{0,20}",
        ];
        let name = prop_oneof![
            4 => Just("Fig".to_string()),
            1 => Just(" Fig".to_string()),
        ];
        let price = prop_oneof![
            4 => Just("$1.5".to_string()),
            1 => Just("1.505".to_string()),
        ];
        (code, name, price).prop_map(|(code, name, price)| Produce::new(code, name, price))
    }

    fn run_batch(records: Vec<Produce>) -> (usize, usize, usize, usize) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async move {
            let handler = ProduceHandler::new(MemoryProduceStore::new_shared());
            let response = handler.batch_add(records).await;
            (
                response.accepted.len(),
                response.rejected.len(),
                response.dispatched,
                handler.store().len().await,
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_every_record_is_accounted_for(
            records in prop::collection::vec(candidate_strategy(), 0..24),
        ) {
            let total = records.len();
            let valid: Vec<&Produce> = records
                .iter()
                .filter(|p| validate_record(p).is_ok())
                .collect();
            let distinct: HashSet<String> =
                valid.iter().map(|p| normalize_code(&p.code)).collect();
            let valid_count = valid.len();
            let distinct_count = distinct.len();

            let (accepted, rejected, dispatched, stored) = run_batch(records);

            prop_assert_eq!(accepted + rejected, total);
            prop_assert_eq!(dispatched, valid_count);
            prop_assert_eq!(accepted, distinct_count);
            prop_assert_eq!(stored, accepted);
        }
    }
}
