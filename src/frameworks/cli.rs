use crate::domain::{
    AuthApi, ConfirmRegistration, Credentials, GatewayError, LoginResponse, MessageResponse,
    ResetPassword, ResetPasswordCode,
};
use crate::interface_adapters::state::AppContext;
use crate::use_cases::sign_in::SignInUseCase;
use crate::use_cases::sign_out::SignOutUseCase;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

pub const USAGE: &str = "\
usage: ks_client <command> [args]

commands:
  login <email> <password>
  register <email> <password>
  confirm <email> <code>
  send-reset-code <email>
  confirm-reset <email> <code> <password>
  reset-password <email> <code> <password>
  resend-code <email> <password>
  logout
  get <endpoint>";

// One user action, parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(Credentials),
    Register(Credentials),
    Confirm(ConfirmRegistration),
    SendResetCode(ResetPasswordCode),
    ConfirmReset(ResetPassword),
    ResetPassword(ResetPassword),
    ResendCode(Credentials),
    Logout,
    Get(String),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("usage: {command} {expected}")]
    Arguments {
        command: &'static str,
        expected: &'static str,
    },
}

fn arguments(command: &'static str, expected: &'static str) -> UsageError {
    UsageError::Arguments { command, expected }
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn reset_password(email: &str, code: &str, password: &str) -> ResetPassword {
    ResetPassword {
        email: email.to_string(),
        verification_code: code.to_string(),
        password: password.to_string(),
    }
}

impl Command {
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or(UsageError::MissingCommand)?;
        let rest: Vec<String> = args.collect();

        match (name.as_str(), rest.as_slice()) {
            ("login", [email, password]) => Ok(Command::Login(credentials(email, password))),
            ("login", _) => Err(arguments("login", "<email> <password>")),
            ("register", [email, password]) => {
                Ok(Command::Register(credentials(email, password)))
            }
            ("register", _) => Err(arguments("register", "<email> <password>")),
            ("confirm", [email, code]) => Ok(Command::Confirm(ConfirmRegistration {
                email: email.clone(),
                verification_code: code.clone(),
            })),
            ("confirm", _) => Err(arguments("confirm", "<email> <code>")),
            ("send-reset-code", [email]) => Ok(Command::SendResetCode(ResetPasswordCode {
                email: email.clone(),
            })),
            ("send-reset-code", _) => Err(arguments("send-reset-code", "<email>")),
            ("confirm-reset", [email, code, password]) => Ok(Command::ConfirmReset(
                reset_password(email, code, password),
            )),
            ("confirm-reset", _) => Err(arguments("confirm-reset", "<email> <code> <password>")),
            ("reset-password", [email, code, password]) => Ok(Command::ResetPassword(
                reset_password(email, code, password),
            )),
            ("reset-password", _) => {
                Err(arguments("reset-password", "<email> <code> <password>"))
            }
            ("resend-code", [email, password]) => {
                Ok(Command::ResendCode(credentials(email, password)))
            }
            ("resend-code", _) => Err(arguments("resend-code", "<email> <password>")),
            ("logout", []) => Ok(Command::Logout),
            ("logout", _) => Err(arguments("logout", "")),
            ("get", [endpoint]) => Ok(Command::Get(endpoint.clone())),
            ("get", _) => Err(arguments("get", "<endpoint>")),
            (other, _) => Err(UsageError::UnknownCommand(other.to_string())),
        }
    }
}

// Result of a successful command, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    SignedIn(LoginResponse),
    Message(MessageResponse),
    Payload(Value),
    SignedOut,
}

impl Outcome {
    // Compact JSON of the server payload; logout has none and renders as `null`.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            Outcome::SignedIn(res) => serde_json::to_string(res),
            Outcome::Message(res) => serde_json::to_string(res),
            Outcome::Payload(value) => serde_json::to_string(value),
            Outcome::SignedOut => serde_json::to_string(&Value::Null),
        }
    }
}

pub async fn execute(ctx: &AppContext, command: Command) -> Result<Outcome, GatewayError> {
    let auth = &ctx.auth;
    let outcome = match command {
        Command::Login(req) => {
            let use_case = SignInUseCase {
                auth: Arc::clone(auth),
                tokens: Arc::clone(&ctx.tokens),
            };
            Outcome::SignedIn(use_case.execute(req).await?)
        }
        Command::Register(req) => Outcome::Message(auth.register(req).await?),
        Command::Confirm(req) => Outcome::Message(auth.confirm_code(req).await?),
        Command::SendResetCode(req) => Outcome::Message(auth.send_reset_code(req).await?),
        Command::ConfirmReset(req) => Outcome::Message(auth.confirm_reset_code(req).await?),
        Command::ResetPassword(req) => Outcome::Message(auth.reset_password(req).await?),
        Command::ResendCode(req) => {
            Outcome::Message(auth.send_confirmation_code_again(req).await?)
        }
        Command::Logout => {
            SignOutUseCase {
                tokens: Arc::clone(&ctx.tokens),
            }
            .execute();
            Outcome::SignedOut
        }
        Command::Get(endpoint) => Outcome::Payload(ctx.gateway.get(&endpoint).await?),
    };

    Ok(outcome)
}

// Writes the pending modal to `err`, then dismisses it.
pub fn show_modal(ctx: &AppContext, err: &mut impl Write) {
    let modal = ctx.notifications.snapshot();
    if modal.is_open {
        let _ = writeln!(err, "error: {}", modal.error_message);
        ctx.notifications.close_modal();
    }
}

/// Runs one invocation and returns the process exit code.
///
/// Payloads go to `out` as JSON. Usage errors and the failure modal go to `err`.
pub async fn run<I>(
    args: I,
    ctx: &AppContext,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8
where
    I: IntoIterator<Item = String>,
{
    let command = match Command::parse(args) {
        Ok(command) => command,
        Err(error) => {
            let _ = writeln!(err, "{error}\n\n{USAGE}");
            return EXIT_USAGE;
        }
    };

    match execute(ctx, command).await {
        Ok(outcome) => match outcome.render() {
            Ok(rendered) => {
                let _ = writeln!(out, "{rendered}");
                EXIT_SUCCESS
            }
            Err(error) => {
                tracing::error!(%error, "failed to render payload");
                EXIT_FAILURE
            }
        },
        Err(_) => {
            // The gateway already logged the failure and opened the modal.
            show_modal(ctx, err);
            EXIT_FAILURE
        }
    }
}
