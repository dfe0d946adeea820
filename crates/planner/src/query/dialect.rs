//! Defines the `Dialect` trait for database-specific SQL syntax.

pub trait Dialect: Send + Sync {
    /// Renders an identifier (like a table or column name), quoting it only
    /// when it would not survive unquoted.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for the parameter at `index` (zero-based).
    fn get_placeholder(&self, index: usize) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Postgres {
    fn is_plain_identifier(ident: &str) -> bool {
        let mut chars = ident.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }
}

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        // Unquoted names fold to lower case, so anything else must be quoted.
        if Self::is_plain_identifier(ident) {
            ident.to_string()
        } else {
            format!(r#""{}""#, ident.replace('"', r#""""#))
        }
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_one_based() {
        assert_eq!(Postgres.get_placeholder(0), "$1");
        assert_eq!(Postgres.get_placeholder(9), "$10");
    }

    #[test]
    fn test_quotes_only_when_needed() {
        assert_eq!(Postgres.quote_identifier("cost_per_night"), "cost_per_night");
        assert_eq!(Postgres.quote_identifier("Owner"), r#""Owner""#);
        assert_eq!(Postgres.quote_identifier("2nd"), r#""2nd""#);
        assert_eq!(Postgres.quote_identifier(r#"a"b"#), r#""a""b""#);
    }
}
