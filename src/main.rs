use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::error;

use edu_records::cli::{CliArgs, dispatch, render};
use edu_records::config::AppConfig;
use edu_records::errors::{EduError, Result};
use edu_records::runtime::lifetime::startup;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    setup_panic!();

    let args = CliArgs::parse();

    // 初始化配置
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            print_error(&EduError::from(e));
            return ExitCode::FAILURE;
        }
    };

    // 初始化日志
    let _guard = startup::init_tracing(&config);

    match run(&args, &config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("[{}] {}", e.code(), e.message());
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &CliArgs, config: &AppConfig) -> Result<String> {
    let context = startup::prepare_startup(config).await?;
    let outcome = dispatch(args, context.storage.as_ref(), config).await?;
    render(&outcome, args.format)
}

fn print_error(err: &EduError) {
    #[cfg(debug_assertions)]
    eprintln!("{}", err.format_colored());

    #[cfg(not(debug_assertions))]
    eprintln!("{}", err.format_simple());
}
