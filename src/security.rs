//! Screening for free-text search terms on the listing endpoints.
//!
//! Search input is always bound as a query parameter, never spliced into
//! SQL. These helpers add a second line: reject terms that look like SQL
//! statements outright and strip comment/statement characters from what
//! remains before it becomes an ILIKE pattern.

use validator::ValidationError;

pub fn sanitize_input(input: &str) -> String {
    let sanitized = input
        .replace("'", "''")
        .replace(";", "")
        .replace("--", "")
        .replace("/*", "")
        .replace("*/", "");

    sanitized.trim().to_string()
}

pub fn validate_sql_input(input: &str) -> Result<(), ValidationError> {
    let sql_patterns = [
        "SELECT", "INSERT", "UPDATE", "DELETE", "DROP", "UNION", "ALTER", "EXEC", "EXECUTE",
        "DECLARE", "WAITFOR",
    ];

    for pattern in sql_patterns.iter() {
        if input.to_uppercase().contains(pattern) {
            return Err(ValidationError::new("sql_injection"));
        }
    }

    Ok(())
}
