pub static MAINNET_API_URL: &str = "https://api.hyperliquid.xyz";
pub static TESTNET_API_URL: &str = "https://api.hyperliquid-testnet.xyz";
pub static LOCAL_API_URL: &str = "http://localhost:3001";

/// Chain id of the EIP-712 domain used for L1 action signatures.
pub(crate) const L1_SIGNING_CHAIN_ID: u64 = 1337;
