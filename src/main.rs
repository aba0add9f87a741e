use booking_wizard::domain::model::ServiceCatalog;
use booking_wizard::domain::ports::BookingApi;
use booking_wizard::utils::error::ErrorCategory;
use booking_wizard::utils::{logger, validation::Validate};
use booking_wizard::{
    BookingError, BookingWizard, CliConfig, ConsolePresenter, HttpBookingApi, SubmitOutcome,
};
use clap::Parser;
use std::sync::Arc;

const EXIT_BLOCKED: i32 = 4;

fn exit_code(e: &BookingError) -> i32 {
    match e.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Selection => 2,
        ErrorCategory::Network | ErrorCategory::Data => 3,
    }
}

fn fail(e: BookingError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting booking-wizard CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_wizard_config() {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    if let Err(e) = config.validate() {
        fail(e);
    }

    let api = match config.request_timeout() {
        Some(timeout) => HttpBookingApi::with_timeout(&config.api.base_url, timeout)?,
        None => HttpBookingApi::new(&config.api.base_url),
    };

    let catalog = if cli.fetch_services {
        match api.list_services().await {
            Ok(services) => ServiceCatalog::new(services),
            Err(e) => fail(e),
        }
    } else {
        config.catalog()
    };
    tracing::info!("{} services on offer", catalog.len());

    let wizard = BookingWizard::new(
        api,
        Arc::new(ConsolePresenter::new()),
        catalog,
        config.timings(),
    );
    wizard.render_initial();

    if let Some(page_url) = &cli.page_url {
        if let Err(e) = wizard.init_from_url(page_url).await {
            fail(e);
        }
    }
    if let Some(service) = &cli.service {
        if let Err(e) = wizard.on_service_change(service).await {
            fail(e);
        }
    }
    if let Some(staff) = &cli.staff {
        if let Err(e) = wizard.on_staff_change(staff).await {
            fail(e);
        }
    }
    if let Some(schedule) = &cli.schedule {
        if let Err(e) = wizard.on_schedule_change(schedule) {
            fail(e);
        }
    }

    match wizard.on_submit() {
        SubmitOutcome::Proceed(form) => {
            tracing::info!("✅ Booking ready for submission");
            for (name, value) in form.fields() {
                println!("{}={}", name, value);
            }
            Ok(())
        }
        SubmitOutcome::Blocked { missing } => {
            tracing::warn!("Booking incomplete, missing: {:?}", missing);
            std::process::exit(EXIT_BLOCKED);
        }
    }
}
