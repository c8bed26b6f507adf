use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file.");

// Store parsing.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(
    UnexpectedStoreColumns,
    "Unexpected columns in absence store: '{found}'.",
    { found: &str }
);
define_client_error!(
    MalformedStoreFile,
    "Malformed absence store: line {line}, column '{column}'.",
    { line: usize, column: &str }
);
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(UnknownAbsenceStatus, "Unknown absence status: '{label}'.", { label: &str });
define_client_error!(UnknownCareType, "Unknown care type: '{label}'.", { label: &str });
define_client_error!(
    InvalidFinancialLoss,
    "Invalid financial loss: '{value}'.",
    { value: &str }
);

// Ledger-related.
define_client_error!(
    NegativeFinancialLoss,
    "Financial loss cannot be negative ({amount}).",
    { amount: f64 }
);
define_client_error!(
    RowOutOfBounds,
    "Row {row} does not exist (ledger has {len} rows).",
    { row: usize, len: usize }
);

// Configuration.
define_client_error!(InvalidConfig, "Invalid dashboard configuration (invalid RON format).");

// Report generation.
define_internal_error!(
    DocumentSerializationFailed,
    "Failed to serialize report for '{patient}'.",
    { patient: &str }
);
