use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–4) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AlreadyExists = 3,
    NotFound = 4,

    // --- Validation (5–7) ---
    InvalidConfiguration = 5,
    ZeroAmount = 6,
    WrongPaymentAsset = 7,

    // --- Authorization (8–9) ---
    Unauthorized = 8,
    NotAllowed = 9,

    // --- State (10–14) ---
    NotLive = 10,
    WindowClosed = 11,
    AlreadyFunded = 12,
    NotYetEnded = 13,
    AlreadyWithdrawn = 14,

    // --- Capacity (15–17) ---
    LimitExceeded = 15,
    CapExceeded = 16,
    InsufficientRemainingSupply = 17,

    // --- Arithmetic (18) ---
    ArithmeticOverflow = 18,
}
