// Macros file - tracing macros are imported within the macro definitions

/// Standardized logging macros for consistent field names and message
/// patterns across the client.
///
/// These macros ensure:
/// - Consistent field naming conventions
/// - Appropriate logging levels for different scenarios
/// - Structured logging with context

// ============================================================================
// API Client Logging Macros
// ============================================================================

/// Log the start of a remote quiz service call
#[macro_export]
macro_rules! log_api_start {
    ($operation:expr, category_ids = $ids:expr) => {
        tracing::debug!(
            operation = $operation,
            category_ids = ?$ids,
            "API request started"
        );
    };
    ($operation:expr) => {
        tracing::debug!(operation = $operation, "API request started");
    };
}

/// Log successful completion of a remote quiz service call
#[macro_export]
macro_rules! log_api_success {
    ($operation:expr, count = $count:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            count = $count,
            "API request completed: {}", $msg
        );
    };
    ($operation:expr, session_id = $session_id:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            session_id = %$session_id,
            "API request completed: {}", $msg
        );
    };
    ($operation:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            "API request completed: {}", $msg
        );
    };
}

/// Log remote quiz service failures with consistent structure
#[macro_export]
macro_rules! log_api_error {
    ($operation:expr, error = $error:expr, $msg:expr) => {
        tracing::error!(
            operation = $operation,
            error = %$error,
            "API request failed: {}", $msg
        );
    };
}

// ============================================================================
// Quiz Store Logging Macros
// ============================================================================

/// Log store mutations with the fields relevant to each operation
#[macro_export]
macro_rules! log_store_event {
    ($operation:expr, session_id = $session_id:expr) => {
        tracing::debug!(
            component = "quiz_store",
            operation = $operation,
            session_id = %$session_id,
            "Store updated"
        )
    };
    ($operation:expr, question_index = $qi:expr, answer_index = $ai:expr) => {
        tracing::debug!(
            component = "quiz_store",
            operation = $operation,
            question_index = $qi,
            answer_index = $ai,
            "Store updated"
        )
    };
    ($operation:expr, $msg:expr) => {
        tracing::debug!(
            component = "quiz_store",
            operation = $operation,
            "Store updated: {}", $msg
        )
    };
}

/// Log ignored store operations (violated preconditions are silent no-ops
/// by contract, but they still get a trace for debugging)
#[macro_export]
macro_rules! log_store_noop {
    ($operation:expr, $reason:expr) => {
        tracing::trace!(
            component = "quiz_store",
            operation = $operation,
            reason = $reason,
            "Store operation ignored"
        );
    };
}

// ============================================================================
// System Event Logging Macros
// ============================================================================

/// Log startup and configuration events
#[macro_export]
macro_rules! log_system_event {
    (startup, component = $component:expr, $msg:expr) => {
        tracing::info!(
            event_type = "startup",
            component = $component,
            "System event: {}",
            $msg
        );
    };
    (config, $msg:expr) => {
        tracing::info!(event_type = "configuration", "System event: {}", $msg);
    };
}

// ============================================================================
// Validation Logging Macros
// ============================================================================

/// Log validation results consistently
#[macro_export]
macro_rules! log_validation {
    (success, $component:expr, $msg:expr) => {
        tracing::debug!(
            event_type = "validation",
            component = $component,
            result = "success",
            "Validation completed: {}", $msg
        );
    };
    (failure, $component:expr, error = $error:expr) => {
        tracing::warn!(
            event_type = "validation",
            component = $component,
            result = "failure",
            error = %$error,
            "Validation failed"
        );
    };
}
