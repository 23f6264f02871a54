use soroban_sdk::contracterror;

/// Custom error types for the vesting vault contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VestingVaultError {
    // Authorization errors (100-199)
    Unauthorized = 100,
    NotOwner = 101,

    // Validation errors (200-299)
    InvalidAddress = 200,
    InvalidTimestamp = 201,
    InvalidDuration = 202,

    // Initialization errors (300-399)
    AlreadyInitialized = 300,
    NotInitialized = 301,

    // Vesting errors (400-499)
    BeneficiaryNotSet = 400,
    MathOverflow = 401,

    // Sweep errors (500-599)
    BalanceZero = 500,
    TimelockNotExpired = 501,
    ReceiverMismatch = 502,
    ProtectedTokenSweep = 503,

    // Payment errors (600-699)
    TransferFailed = 600,
}
