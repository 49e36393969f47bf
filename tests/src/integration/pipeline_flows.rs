//! # Pipeline Flows
//!
//! End-to-end generation through `ConfigGenerationService`:
//!
//! 1. **Reference synthesizer**: committee checks, blob layout, digest
//! 2. **Mock synthesizer**: plugin record and digest fallback
//! 3. **JSON surface**: request parsing and output field names

#[cfg(test)]
mod tests {
    use crate::fixtures::{node, random_request, request};
    use ocr_config_gen::{
        config_digest, ConfigGenError, ConfigGenerationApi, ConfigGenerationService,
        GeneratorConfig, KeyLengthPolicy, MockSynthesizer, OffchainConfigBlob, OutputConfig,
        ReferenceSynthesizer, UnifiedRequest, OFFCHAIN_CONFIG_VERSION,
    };
    use serde_json::Value;
    use shared_crypto::EvmAddress;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn reference() -> ConfigGenerationService<ReferenceSynthesizer> {
        ConfigGenerationService::new(ReferenceSynthesizer::new(), GeneratorConfig::default())
    }

    fn mock(blob: Option<Vec<u8>>) -> ConfigGenerationService<MockSynthesizer> {
        ConfigGenerationService::new(
            MockSynthesizer {
                blob,
                version: OFFCHAIN_CONFIG_VERSION,
                ..Default::default()
            },
            GeneratorConfig::default(),
        )
    }

    fn decode_blob(output: &OutputConfig) -> OffchainConfigBlob {
        OffchainConfigBlob::decode(&hex::decode(&output.offchain_config).unwrap()).unwrap()
    }

    fn plugin_record(output: &OutputConfig) -> Value {
        serde_json::from_slice(&decode_blob(output).reporting_plugin_config).unwrap()
    }

    // =============================================================================
    // REFERENCE SYNTHESIZER FLOWS
    // =============================================================================

    #[test]
    fn test_commit_four_nodes_with_feed_selector() {
        let mut req = request(4, "commit");
        req.feed_chain_selector = Some("12345".to_string());

        let output = reference().generate(&req).unwrap();

        assert_eq!(output.f, 1);
        assert_eq!(output.signers.len(), 4);
        assert_eq!(output.transmitters.len(), 4);
        assert_eq!(output.offchain_config_version, OFFCHAIN_CONFIG_VERSION);

        let blob = hex::decode(&output.offchain_config).unwrap();
        assert_eq!(output.config_digest, Some(config_digest(&blob)));
        assert_eq!(
            output.config_digest.as_deref(),
            Some(format!("0x{}", &output.offchain_config[..64]).as_str())
        );

        let record = plugin_record(&output);
        assert_eq!(record["priceFeedChainSelector"], 12345);
        assert_eq!(record["remoteGasPriceBatchWriteFrequency"], "10m0s");
        assert_eq!(decode_blob(&output).f, 1);
    }

    #[test]
    fn test_generation_is_idempotent() {
        for plugin in ["automation", "commit", "exec"] {
            let req = random_request(7, 10, plugin);
            assert_eq!(
                reference().generate(&req).unwrap(),
                reference().generate(&req).unwrap()
            );
        }
    }

    #[test]
    fn test_committee_order_is_preserved() {
        let req = random_request(42, 7, "exec");
        let output = reference().generate(&req).unwrap();

        for (i, node) in req.nodes.iter().enumerate() {
            let hex = node.onchain_key.trim_start_matches("ocr2on_evm_");
            let expected = EvmAddress::from_hex_normalized(hex.trim_start_matches("0x"))
                .unwrap()
                .to_checksum_string();
            assert_eq!(output.signers[i], expected);
            assert_eq!(output.transmitters[i], node.transmitter);
            assert_eq!(decode_blob(&output).peer_ids[i], node.peer_id);
        }
    }

    #[test]
    fn test_fault_tolerance_table() {
        for n in 1..=31u8 {
            let output = reference().generate(&request(n, "automation")).unwrap();
            assert_eq!(usize::from(output.f), (usize::from(n) - 1) / 3, "n={n}");
        }
    }

    #[test]
    fn test_oversized_committee_rejected() {
        let err = reference().generate(&request(32, "commit")).unwrap_err();
        assert!(matches!(err, ConfigGenError::SynthesisRejected(_)));
    }

    #[test]
    fn test_empty_committee_rejected() {
        let err = reference().generate(&request(0, "exec")).unwrap_err();
        assert!(matches!(err, ConfigGenError::SynthesisRejected(_)));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut req = request(4, "exec");
        req.nodes[3] = req.nodes[0].clone();
        let err = reference().generate(&req).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_unknown_plugin_rejected() {
        let err = reference().generate(&request(4, "bogus")).unwrap_err();
        assert!(matches!(err, ConfigGenError::UnsupportedPluginType(ref p) if p == "bogus"));
    }

    #[test]
    fn test_short_key_strict_vs_legacy() {
        let mut req = request(4, "commit");
        req.nodes[1].config_key = format!("ocr2cfg_evm_{}", "81".repeat(31));

        let err = reference().generate(&req).unwrap_err();
        assert!(matches!(
            err,
            ConfigGenError::InvalidKeyLength {
                node: 1,
                expected: 32,
                actual: 31,
                ..
            }
        ));

        let legacy = ConfigGenerationService::new(
            ReferenceSynthesizer::new(),
            GeneratorConfig {
                key_length_policy: KeyLengthPolicy::LegacyZeroPad,
                ..Default::default()
            },
        );
        let output = legacy.generate(&req).unwrap();
        let mut padded = [0x81u8; 32];
        padded[31] = 0;
        assert_eq!(decode_blob(&output).config_encryption_public_keys[1], padded);
    }

    #[test]
    fn test_invalid_hex_fails_in_legacy_mode() {
        let mut req = request(4, "commit");
        req.nodes[0].onchain_key = "ocr2on_evm_0xZZ".to_string();
        let legacy = ConfigGenerationService::new(
            ReferenceSynthesizer::new(),
            GeneratorConfig {
                key_length_policy: KeyLengthPolicy::LegacyZeroPad,
                ..Default::default()
            },
        );
        assert!(matches!(
            legacy.generate(&req),
            Err(ConfigGenError::InvalidEncoding { node: 0, .. })
        ));
    }

    // =============================================================================
    // MOCK SYNTHESIZER FLOWS
    // =============================================================================

    #[test]
    fn test_short_blob_digest_encodes_length() {
        let output = mock(Some(vec![0xEE; 10])).generate(&request(4, "exec")).unwrap();
        assert_eq!(
            output.config_digest.as_deref(),
            Some("0x000000000000000000000000000000000000000000000000000000000000000a")
        );
        assert_eq!(output.offchain_config, "ee".repeat(10));
    }

    #[test]
    fn test_exec_record_reaches_synthesizer() {
        let output = mock(None).generate(&request(4, "exec")).unwrap();
        let record: Value =
            serde_json::from_slice(&hex::decode(&output.offchain_config).unwrap()).unwrap();
        assert_eq!(record["batchGasLimit"], 5_000_000);
        assert_eq!(record["rootSnoozeTime"], "2m0s");
        assert_eq!(record["transmissionDelayMultiplier"], 10_000_000_000u64);
    }

    #[test]
    fn test_automation_record_reaches_synthesizer() {
        let output = mock(None).generate(&request(4, "automation")).unwrap();
        let record: Value =
            serde_json::from_slice(&hex::decode(&output.offchain_config).unwrap()).unwrap();
        assert_eq!(record["targetProbability"], "0.999");
        assert_eq!(record["gasLimitPerReport"], 5_300_000);
        assert_eq!(output.config_digest, None);
    }

    // =============================================================================
    // JSON SURFACE
    // =============================================================================

    #[test]
    fn test_json_request_to_json_output() {
        let nodes: Vec<Value> = (0..4)
            .map(|i| serde_json::to_value(node(i)).unwrap())
            .collect();
        let text = serde_json::json!({
            "nodes": nodes,
            "pluginType": "commit",
            "chainSelector": "777"
        })
        .to_string();

        let output = reference().generate_from_json(&text).unwrap();
        assert_eq!(plugin_record(&output)["priceFeedChainSelector"], 777);

        let json: Value = serde_json::from_str(&output.to_json(false).unwrap()).unwrap();
        for key in [
            "signers",
            "transmitters",
            "f",
            "offchainConfigVersion",
            "offchainConfig",
            "configDigest",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_automation_output_omits_digest_key() {
        let output = reference().generate(&request(4, "automation")).unwrap();
        let json: Value = serde_json::from_str(&output.to_json(true).unwrap()).unwrap();
        assert!(json.get("configDigest").is_none());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            UnifiedRequest::from_json(r#"{"nodes": 5}"#),
            Err(ConfigGenError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_bad_selector_rejected() {
        let mut req = request(4, "commit");
        req.feed_chain_selector = Some("not-a-number".to_string());
        assert!(matches!(
            reference().generate(&req),
            Err(ConfigGenError::MalformedRequest(_))
        ));
    }
}
