//! Spell service restart via `killall`.
//!
//! Implements the `ServiceRestarter` trait from `localdic-core` by killing
//! the spell-check helper. The OS relaunches it on the next spelling request,
//! at which point it reads the updated dictionary.

use std::process::{Command, Stdio};

use tracing::{debug, info};

use localdic_core::service::restart::ServiceRestarter;
use localdic_types::config::DictionaryConfig;
use localdic_types::error::DictionaryError;

/// stderr messages that mean no process matched, i.e. the service is
/// already stopped. macOS `killall` prints the first; psmisc `killall`
/// prints `NAME: no process found`.
pub const ALREADY_STOPPED_MESSAGES: &[&str] = &[
    "No matching processes belonging to you were found",
    "no process found",
];

/// How a kill attempt ended, judged from its exit status and stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillOutcome {
    Killed,
    AlreadyStopped,
    /// Failure with the trimmed stderr text, if there was any.
    Failed(Option<String>),
}

/// Classify a finished kill command.
///
/// Any stderr output other than an already-stopped message is a failure,
/// even with a zero exit status.
pub fn classify(success: bool, stderr: &str) -> KillOutcome {
    let message = stderr.trim_matches(|c: char| c == '\n' || c == '\r');

    if message.is_empty() {
        return if success {
            KillOutcome::Killed
        } else {
            KillOutcome::Failed(None)
        };
    }

    if ALREADY_STOPPED_MESSAGES.iter().any(|m| message.ends_with(m)) {
        KillOutcome::AlreadyStopped
    } else {
        KillOutcome::Failed(Some(message.to_string()))
    }
}

/// `ServiceRestarter` that runs `killall -KILL <service>`.
#[derive(Debug, Clone)]
pub struct KillallRestarter {
    service: String,
    program: String,
    args: Vec<String>,
}

impl KillallRestarter {
    /// Restarter for the named process.
    pub fn new(service: impl Into<String>) -> Self {
        let service = service.into();
        Self {
            args: vec!["-KILL".to_string(), service.clone()],
            program: "killall".to_string(),
            service,
        }
    }

    /// Restarter for the configured spell service.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(config.spell_service.clone())
    }

    /// Run an arbitrary command instead of `killall` (useful for testing).
    pub fn with_command<I, A>(service: impl Into<String>, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            service: service.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl ServiceRestarter for KillallRestarter {
    fn restart(&self) -> Result<(), DictionaryError> {
        debug!(program = %self.program, args = ?self.args, "restarting spell service");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                DictionaryError::restart(&self.service, format!("failed to run {}: {e}", self.program))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            debug!(stdout = %stdout.trim(), "restart command output");
        }

        match classify(output.status.success(), &stderr) {
            KillOutcome::Killed => {
                info!(service = %self.service, "spell service restarted");
                Ok(())
            }
            KillOutcome::AlreadyStopped => {
                info!(service = %self.service, "spell service was not running");
                Ok(())
            }
            KillOutcome::Failed(Some(message)) => {
                Err(DictionaryError::restart(&self.service, message))
            }
            KillOutcome::Failed(None) => Err(DictionaryError::restart(
                &self.service,
                format!("{} exited with {}", self.program, output.status),
            )),
        }
    }
}
