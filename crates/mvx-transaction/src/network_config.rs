//! Network parameters that seed transaction defaults.

/// Snapshot of a network's transaction parameters.
///
/// Read once (either the built-in defaults or the values reported by a
/// node) and passed explicitly to [`Transaction::new`](crate::Transaction::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Identifier of the target chain (e.g. `1` for mainnet, `D` for devnet).
    pub chain_id: String,
    /// Gas charged per byte of transaction data.
    pub gas_per_data_byte: u64,
    /// Minimum gas limit accepted for any transaction.
    pub min_gas_limit: u64,
    /// Minimum gas price accepted for any transaction.
    pub min_gas_price: u64,
    /// Lowest transaction version the network accepts.
    pub min_transaction_version: u32,
}

impl NetworkConfig {
    /// Gas limit covering the base cost plus the per-byte cost of `data`.
    ///
    /// Saturates instead of overflowing.
    pub fn gas_limit_for_data(&self, data: &[u8]) -> u64 {
        let data_cost = self
            .gas_per_data_byte
            .saturating_mul(data.len() as u64);
        self.min_gas_limit.saturating_add(data_cost)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: "1".to_string(),
            gas_per_data_byte: 1_500,
            min_gas_limit: 50_000,
            min_gas_price: 1_000_000_000,
            min_transaction_version: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.chain_id, "1");
        assert_eq!(config.gas_per_data_byte, 1_500);
        assert_eq!(config.min_gas_limit, 50_000);
        assert_eq!(config.min_gas_price, 1_000_000_000);
        assert_eq!(config.min_transaction_version, 1);
    }

    #[test]
    fn test_gas_limit_for_data() {
        let config = NetworkConfig::default();
        assert_eq!(config.gas_limit_for_data(b""), 50_000);
        assert_eq!(config.gas_limit_for_data(b"hello"), 50_000 + 5 * 1_500);
    }

    #[test]
    fn test_gas_limit_saturates() {
        let config = NetworkConfig {
            gas_per_data_byte: u64::MAX,
            ..NetworkConfig::default()
        };
        assert_eq!(config.gas_limit_for_data(b"xy"), u64::MAX);
    }
}
