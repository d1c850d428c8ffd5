//! Heuristic SQL-injection detection
//!
//! Flags strings that resemble injection payloads on a login/search
//! surface. A keyword alone is not enough: legitimate text may contain
//! English words that double as SQL keywords, so rule 1 requires a
//! structural special character alongside one. Rules 2 and 3 catch
//! payloads built from special characters or tautologies without any
//! keyword.

/// SQL keywords that only count when paired with a structural character
pub const SQL_KEYWORDS: [&str; 20] = [
    "SELECT", "INSERT", "UPDATE", "DELETE", "DROP", "CREATE", "ALTER",
    "EXEC", "EXECUTE", "UNION", "JOIN", "FROM", "WHERE", "HAVING",
    "GROUP BY", "ORDER BY", "INTO", "VALUES", "SET", "TABLE",
];

/// Operators and tokens flagged regardless of keyword co-occurrence
pub const SQL_OPERATORS: [&str; 15] = [
    "'", "\"", ";", "--", "/*", "*/", "@@", "CHAR", "ASCII", "WAITFOR",
    "DELAY", "SHUTDOWN", "XP_", "SP_", "DBCC",
];

/// Always-true conditions used to bypass filter clauses
const TAUTOLOGY_PATTERNS: [&str; 4] = [
    "OR '1'='1",
    "OR 1=1",
    "OR 'A'='A",
    "OR 'X'='X",
];

/// Whether the input heuristically resembles a SQL-injection payload
///
/// Case-insensitive; empty and whitespace-only input is never flagged.
/// This is a defense-in-depth signal, not a substitute for
/// parameterized queries at the storage boundary.
pub fn looks_like_injection(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    let upper = input.to_uppercase();

    // Rule 1: keyword plus structural special character
    if has_structural_char(&upper) && SQL_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
        return true;
    }

    // Rule 2: operator/token blacklist
    if SQL_OPERATORS.iter().any(|op| upper.contains(op)) {
        return true;
    }

    // Rule 3: tautologies, matched against a whitespace-collapsed copy
    let collapsed = upper.split_whitespace().collect::<Vec<_>>().join(" ");
    TAUTOLOGY_PATTERNS.iter().any(|t| collapsed.contains(t))
}

fn has_structural_char(upper: &str) -> bool {
    upper.contains('\'')
        || upper.contains("--")
        || upper.contains(';')
        || upper.contains("/*")
        || upper.contains("*/")
}
