//! Error codes and exit status for toolshelfctl

use crate::client::ClientError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when daemon returns a body we cannot decode
pub const EXIT_INVALID_RESPONSE: i32 = 65;

/// Exit code when daemon rejects the request (not found, conflict, bad input)
pub const EXIT_REJECTED: i32 = 69;

/// Exit code when daemon is unavailable/unreachable
pub const EXIT_DAEMON_UNAVAILABLE: i32 = 70;

/// Map a command failure to its exit status
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ClientError>() {
        Some(ClientError::Unavailable { .. }) => EXIT_DAEMON_UNAVAILABLE,
        Some(ClientError::InvalidResponse(_)) => EXIT_INVALID_RESPONSE,
        Some(ClientError::Api { status, .. }) if *status < 500 => EXIT_REJECTED,
        _ => EXIT_GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let rejected = anyhow::Error::new(ClientError::Api {
            status: 409,
            message: Some("Tool already in favorites".into()),
        });
        assert_eq!(exit_code(&rejected), EXIT_REJECTED);

        let server = anyhow::Error::new(ClientError::Api {
            status: 500,
            message: None,
        });
        assert_eq!(exit_code(&server), EXIT_GENERAL_ERROR);

        let invalid = anyhow::Error::new(ClientError::InvalidResponse("eof".into()));
        assert_eq!(exit_code(&invalid), EXIT_INVALID_RESPONSE);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), EXIT_GENERAL_ERROR);
    }
}
