use clap::Parser;
use job_search::app::{command::HELP, render, Command, SearchController, ViewStatus};
use job_search::core::ConfigProvider;
use job_search::utils::error::{AppError, ErrorSeverity};
use job_search::utils::logger;
use job_search::{CliConfig, JobSource, RetryingSource, ScraperClient, Settings};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

fn exit_code(e: &AppError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(e: &AppError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

fn build_source(settings: &Settings, retry: bool) -> Result<Box<dyn JobSource>, AppError> {
    let client = ScraperClient::from_config(settings)?;
    if retry {
        tracing::info!(
            "🔁 Retry enabled: {} attempts, {:?} apart",
            settings.retry_attempts(),
            settings.retry_delay()
        );
        Ok(Box::new(
            RetryingSource::new(client)
                .with_attempts(settings.retry_attempts())
                .with_delay(settings.retry_delay()),
        ))
    } else {
        Ok(Box::new(client))
    }
}

async fn run_once(
    controller: &mut SearchController<Box<dyn JobSource>>,
    keyword: &str,
    page: usize,
) -> Result<(), AppError> {
    let status = controller.search_for(keyword).await;
    if status == ViewStatus::Success && !controller.go_to_page(page) {
        let total = controller.state().total_pages();
        return Err(AppError::InvalidConfigValueError {
            field: "page".to_string(),
            value: page.to_string(),
            reason: format!("Page must be between 1 and {}", total.max(1)),
        });
    }
    print!("{}", render(controller.state()));

    match controller.state().failure() {
        Some(e) if status != ViewStatus::Success => Err(AppError::Fetch(e.clone())),
        _ => Ok(()),
    }
}

async fn run_interactive(
    controller: &mut SearchController<Box<dyn JobSource>>,
) -> Result<(), AppError> {
    println!("{}", HELP);
    print!("{}", render(controller.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{}", HELP);
                continue;
            }
            Ok(Command::Search(keyword)) => {
                controller.set_keyword(keyword);
                println!("⏳ Searching...");
                controller.search().await;
            }
            Ok(Command::Experience(filter)) => {
                if !controller.select_experience(filter) {
                    println!("Search in progress, try again when it finishes");
                    continue;
                }
            }
            Ok(Command::Next) => {
                if !controller.next_page() {
                    println!("Already on the last page");
                    continue;
                }
            }
            Ok(Command::Previous) => {
                if !controller.previous_page() {
                    println!("Already on the first page");
                    continue;
                }
            }
            Ok(Command::Page(page)) => {
                if !controller.go_to_page(page) {
                    let total = controller.state().total_pages();
                    println!("Page must be between 1 and {}", total.max(1));
                    continue;
                }
            }
            Ok(Command::Show) => {}
            Err(message) => {
                println!("{}", message);
                continue;
            }
        }

        print!("{}", render(controller.state()));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting job-search");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    };

    let source = match build_source(&settings, cli.retry) {
        Ok(source) => source,
        Err(e) => {
            report(&e);
            std::process::exit(exit_code(&e).max(1));
        }
    };

    let mut controller =
        SearchController::new(source, settings.normalizer(), settings.page_size());
    controller.select_experience(cli.experience);

    let result = match &cli.keyword {
        Some(keyword) => run_once(&mut controller, keyword, cli.page).await,
        None => run_interactive(&mut controller).await,
    };

    if let Err(e) = result {
        report(&e);
        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
