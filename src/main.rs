use std::process::ExitCode;

use clap::Parser;
use register_form::config::{ConfigError, Settings};
use register_form::feedback::ConsoleFeedback;
use register_form::transport::HttpTransport;
use register_form::{FormTarget, RegisterFormData, RegistrationFormController, SubmitMode};

#[derive(Parser, Debug)]
#[command(name = "register-form")]
#[command(about = "Validates a registration form and submits it", long_about = None)]
struct Args {
    #[arg(long, value_name = "EMAIL")]
    email: String,

    #[arg(long, value_name = "USERNAME")]
    username: String,

    #[arg(long, value_name = "PASSWORD")]
    password: String,

    /// Password confirmation
    #[arg(long = "confirm-password", value_name = "PASSWORD")]
    confirm_password: String,

    /// Form action URL, overrides REGISTER_ACTION
    #[arg(long, value_name = "URL")]
    action: Option<String>,

    /// Form method, overrides REGISTER_METHOD
    #[arg(long, value_name = "METHOD")]
    method: Option<String>,

    /// `submit` or `validate`, overrides REGISTER_MODE
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,
}

fn load_form(settings: &Settings) -> Result<(FormTarget, SubmitMode), ConfigError> {
    let target = settings.target()?;
    let mode = settings.submit_mode()?;

    Ok((target, mode))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();

    let mut settings = Settings::from_env();
    if let Some(action) = args.action {
        settings.action = action;
    }
    if let Some(method) = args.method {
        settings.method = method;
    }
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }

    let (target, mode) = match load_form(&settings) {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };

    log::info!("registration form bound to {} {}", target.method, target.action);

    let feedback = ConsoleFeedback::new(target.clone());
    let controller = RegistrationFormController::new(target, mode, HttpTransport::new(), feedback);

    let input = RegisterFormData::new(args.email, args.username, args.password, args.confirm_password);

    match controller.on_submit(&input).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
