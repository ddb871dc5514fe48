/// Prefix of keys sent in the `Idempotency-Key` header.
pub const IDEMPOTENCY_KEY_PREFIX: &str = "idem";

/// Exclusive upper bound of the random suffix appended to generated ids.
pub const ID_RANDOM_SUFFIX_UPPER_BOUND: u32 = 999_999;

/// Bound on every outbound provider call, in seconds. There is no retry.
pub const CONNECTOR_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "PAYMENT_GATEWAY";

/// Environment variable selecting which `config/<env>.toml` is loaded.
pub const RUN_ENV: &str = "RUN_ENV";

/// Currency reported when the provider does not know the order.
pub const DEFAULT_CURRENCY: &str = "USD";

pub const NO_ERROR_CODE: &str = "No error code";
pub const NO_ERROR_MESSAGE: &str = "No error message";

/// Header carrying the request id assigned to inbound calls.
pub const X_REQUEST_ID: &str = "x-request-id";
