//! Request builders shared by the integration tests and benchmarks.

use ocr_config_gen::{NodeDescriptor, UnifiedRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Node descriptor with prefixed keys derived from `i`.
pub fn node(i: u8) -> NodeDescriptor {
    NodeDescriptor {
        onchain_key: format!("ocr2on_evm_0x{}", format!("{:02x}", i + 1).repeat(20)),
        offchain_key: format!("ocr2off_evm_{}", format!("{:02x}", i + 0x40).repeat(32)),
        config_key: format!("ocr2cfg_evm_{}", format!("{:02x}", i + 0x80).repeat(32)),
        peer_id: format!("12D3KooWNode{i}"),
        transmitter: format!("0x{:040x}", 0x1000 + u32::from(i)),
    }
}

/// Node descriptor with random keys from a seeded generator.
pub fn random_node(rng: &mut StdRng, i: usize) -> NodeDescriptor {
    let onchain: [u8; 20] = rng.gen();
    let offchain: [u8; 32] = rng.gen();
    let config: [u8; 32] = rng.gen();
    NodeDescriptor {
        onchain_key: format!("ocr2on_evm_0x{}", hex::encode(onchain)),
        offchain_key: format!("ocr2off_evm_{}", hex::encode(offchain)),
        config_key: format!("ocr2cfg_evm_{}", hex::encode(config)),
        peer_id: format!("12D3KooWRandom{i}"),
        transmitter: format!("0x{}", hex::encode(rng.gen::<[u8; 20]>())),
    }
}

/// Request for `n` deterministic nodes.
pub fn request(n: u8, plugin: &str) -> UnifiedRequest {
    UnifiedRequest {
        nodes: (0..n).map(node).collect(),
        plugin_type: plugin.to_string(),
        chain_selector: None,
        feed_chain_selector: None,
    }
}

/// Request for `n` random nodes from `seed`.
pub fn random_request(seed: u64, n: usize, plugin: &str) -> UnifiedRequest {
    let mut rng = StdRng::seed_from_u64(seed);
    UnifiedRequest {
        nodes: (0..n).map(|i| random_node(&mut rng, i)).collect(),
        plugin_type: plugin.to_string(),
        chain_selector: None,
        feed_chain_selector: None,
    }
}
