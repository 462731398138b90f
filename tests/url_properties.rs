//! Property-based tests for URL templates and parameter encoding
//!
//! These tests verify identifier substitution, path formatting and query
//! encoding across every resource definition using randomized inputs.

use proptest::prelude::*;
use surveygizmo::resource::definitions;
use surveygizmo::{Params, ResourceDef, SurveyGizmo, SurveyGizmoError};

/// Generate identifier values, including characters that need
/// percent-encoding
fn arb_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ./:#&?={}-]{1,24}"
}

/// Fill every identifier of a definition from the value pool
fn id_params(def: &ResourceDef, values: &[String]) -> Params {
    def.id_keys()
        .iter()
        .zip(values.iter().cycle())
        .fold(Params::new(), |params, (key, value)| params.set(*key, value))
}

proptest! {
    /// With every identifier present, formatting succeeds for all endpoints
    /// and leaves no placeholder or raw reserved character behind
    #[test]
    fn complete_params_format_every_template(
        values in prop::collection::vec(arb_id(), 3)
    ) {
        for def in definitions() {
            let params = id_params(def, &values);
            let path = def.item_path(&params);
            prop_assert!(path.is_ok(), "`{}` failed: {:?}", def.name(), path);
            let path = path.unwrap();
            // hoisted into bindings: braces in the stringified condition
            // would break prop_assert!'s generated format message
            let has_open_brace = path.contains('{');
            let has_close_brace = path.contains('}');
            prop_assert!(!has_open_brace);
            prop_assert!(!has_close_brace);
            prop_assert!(!path.contains(' '));
            prop_assert!(!path.contains('?'));
            prop_assert!(!path.contains('#'));
        }
    }

    /// The item path extends the collection path by the encoded item id
    #[test]
    fn item_path_extends_collection_path(
        values in prop::collection::vec(arb_id(), 3)
    ) {
        for def in definitions() {
            let params = id_params(def, &values);
            let item = def.item_path(&params).unwrap();
            let collection = def.collection_path(&params).unwrap();
            let last_key = def.id_keys().last().expect("definitions have ids");
            let encoded = urlencoding::encode(params.get(last_key).unwrap());
            prop_assert_eq!(item, format!("{collection}/{encoded}"));
        }
    }

    /// Omitting any single identifier is reported with exactly that key
    #[test]
    fn missing_identifier_is_reported(
        values in prop::collection::vec(arb_id(), 3),
        drop_index in 0usize..3
    ) {
        for def in definitions() {
            let keys = def.id_keys();
            let dropped = keys[drop_index % keys.len()];
            let params = def
                .id_keys()
                .iter()
                .zip(values.iter().cycle())
                .filter(|(key, _)| **key != dropped)
                .fold(Params::new(), |params, (key, value)| params.set(*key, value));

            match def.item_path(&params) {
                Err(SurveyGizmoError::MissingId { resource, key }) => {
                    prop_assert_eq!(resource, def.name());
                    prop_assert_eq!(key, dropped);
                }
                other => prop_assert!(
                    false,
                    "expected MissingId for `{}`, got {:?}",
                    def.name(),
                    other
                ),
            }
        }
    }

    /// Unrelated parameters and filters never alter the path
    #[test]
    fn extra_params_leave_the_path_alone(
        values in prop::collection::vec(arb_id(), 3),
        extra_key in "[a-z]{1,12}",
        extra_value in arb_id()
    ) {
        for def in definitions() {
            let params = id_params(def, &values);
            let bare = def.item_path(&params).unwrap();

            // identifier keys all contain an underscore, so a plain
            // lowercase key cannot collide with one
            let decorated = params
                .clone()
                .set(extra_key.as_str(), extra_value.as_str())
                .filter("status", "=", "Complete");
            prop_assert_eq!(bare, def.item_path(&decorated).unwrap());
        }
    }
}

/// Query-string encoding properties
mod query_encoding_tests {
    use super::*;

    proptest! {
        /// Any number of filters encodes as densely indexed triples
        #[test]
        fn filters_index_densely(
            fields in prop::collection::vec("[a-z]{1,10}", 0..5)
        ) {
            let mut params = Params::new();
            for field in &fields {
                params = params.filter(field, "=", "x");
            }

            let pairs = params.pairs();
            prop_assert_eq!(pairs.len(), fields.len() * 3);
            for (i, field) in fields.iter().enumerate() {
                // hoisted into bindings: `{i}` in the stringified condition
                // would break prop_assert!'s generated format message
                let field_pair = (format!("filter[field][{i}]"), field.clone());
                let operator_pair = (format!("filter[operator][{i}]"), "=".to_string());
                let value_pair = (format!("filter[value][{i}]"), "x".to_string());
                prop_assert!(pairs.contains(&field_pair));
                prop_assert!(pairs.contains(&operator_pair));
                prop_assert!(pairs.contains(&value_pair));
            }
        }

        /// The signed URL round-trips every parameter plus the credential
        /// pair, in order
        #[test]
        fn signed_url_round_trips_parameters(
            values in prop::collection::vec(arb_id(), 3)
        ) {
            let api = SurveyGizmo::new("prop-token", "prop-secret").unwrap();
            for def in definitions() {
                let params = id_params(def, &values);
                let tail = def.item_path(&params).unwrap();
                let url = api.prepare_url(&tail, &params).unwrap();

                prop_assert!(url.path().starts_with("/v5/"));

                let decoded: Vec<(String, String)> = url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();

                let mut expected = params.pairs();
                expected.push(("api_token".into(), "prop-token".into()));
                expected.push(("api_token_secret".into(), "prop-secret".into()));
                prop_assert_eq!(decoded, expected);
            }
        }

        /// Plain entries serialize in a canonical order regardless of how
        /// they were inserted
        #[test]
        fn entry_order_is_canonical(
            keys in prop::collection::btree_set("[a-z_]{1,10}", 1..6)
        ) {
            let keys: Vec<String> = keys.into_iter().collect();
            let forward = keys
                .iter()
                .fold(Params::new(), |p, k| p.set(k.as_str(), "v"));
            let reverse = keys
                .iter()
                .rev()
                .fold(Params::new(), |p, k| p.set(k.as_str(), "v"));
            prop_assert_eq!(forward.pairs(), reverse.pairs());
        }
    }
}
