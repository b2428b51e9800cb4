//! Error types for the roster seed-and-report CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("environment variable {env_var} must be set")]
    MissingCredential { env_var: &'static str },

    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("statement failed: {0}")]
    Statement(#[source] sqlx::Error),

    #[error("integrity constraint violated: {0}")]
    Integrity(#[source] sqlx::Error),
}

impl RosterError {
    /// Process exit code for this error. Missing credentials are checked
    /// before any network activity and exit with 1; everything else is a
    /// runtime failure and exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::MissingCredential { .. } => 1,
            _ => 2,
        }
    }
}

/// Classify driver errors into the crate taxonomy.
///
/// SQLSTATE class 23 covers constraint violations, class 28 authentication,
/// class 08 connection exceptions, and 3D an invalid catalog name. Transport
/// level failures (IO, TLS, protocol) never reach the database and are
/// connection errors outright.
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(
            err,
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::Protocol(_)
                | sqlx::Error::Configuration(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
        ) {
            return RosterError::Connection(err);
        }

        let class: Option<String> = err
            .as_database_error()
            .and_then(|db| db.code())
            .map(|code| code.chars().take(2).collect());

        match class.as_deref() {
            Some("23") => RosterError::Integrity(err),
            Some("28") | Some("08") | Some("3D") => RosterError::Connection(err),
            _ => RosterError::Statement(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = RosterError::MissingCredential {
            env_var: "COMPOSE_USERNAME",
        };
        assert_eq!(missing.exit_code(), 1);

        let io = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ));
        assert_eq!(RosterError::from(io).exit_code(), 2);
    }

    #[test]
    fn test_transport_errors_classify_as_connection() {
        let io = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        ));
        assert!(matches!(RosterError::from(io), RosterError::Connection(_)));

        let protocol = sqlx::Error::Protocol("unexpected message".into());
        assert!(matches!(
            RosterError::from(protocol),
            RosterError::Connection(_)
        ));
    }

    #[test]
    fn test_non_database_errors_classify_as_statement() {
        let decode = sqlx::Error::RowNotFound;
        assert!(matches!(
            RosterError::from(decode),
            RosterError::Statement(_)
        ));
    }

    #[test]
    fn test_missing_credential_message_names_the_variable() {
        let err = RosterError::MissingCredential {
            env_var: crate::PASSWORD_ENV_VAR,
        };
        assert!(err.to_string().contains("COMPOSE_PASSWORD"));
    }
}
