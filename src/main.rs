//! `invoicer` command-line front end.

use std::io;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use invoicer::core::{InvoiceForm, InvoicerError, render_invoice};
use invoicer::gateway::{Gateway, Settings, find_country};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "invoicer",
    about = "Form a service invoice with the applicable VAT",
    version
)]
struct Cli {
    /// Country directory endpoint. Overrides `INVOICER__DIRECTORY_URL`.
    #[arg(long, global = true, value_name = "url")]
    directory_url: Option<String>,
    /// VAT rate endpoint. Overrides `INVOICER__RATES_URL`.
    #[arg(long, global = true, value_name = "url")]
    rates_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the available country choices.
    Countries,
    /// Validate the form fields and print the invoice.
    Invoice(InvoiceArgs),
}

#[derive(Debug, Args)]
struct InvoiceArgs {
    #[arg(long, default_value = "")]
    service_name: String,
    #[arg(long, default_value = "")]
    service_price: String,
    #[arg(long, default_value = "")]
    provider_name: String,
    /// Provider country code, e.g. `LT`.
    #[arg(long, value_name = "code")]
    provider_country: Option<String>,
    /// Provider is not subject to VAT.
    #[arg(long)]
    provider_not_vat_payer: bool,
    #[arg(long, default_value = "")]
    client_name: String,
    /// Client country code, e.g. `DE`.
    #[arg(long, value_name = "code")]
    client_country: Option<String>,
    /// Client is not subject to VAT.
    #[arg(long)]
    client_not_vat_payer: bool,
    /// Print the evaluated invoice as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: create Tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(InvoicerError::Validation(errors)) => {
            for e in errors {
                eprintln!("{e}");
            }
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), InvoicerError> {
    let mut settings = Settings::load()?;
    if let Some(url) = cli.directory_url {
        settings.directory_url = url;
    }
    if let Some(url) = cli.rates_url {
        settings.rates_url = url;
    }
    let gateway = Gateway::new(settings)?;
    let countries = gateway.list_countries().await;

    match cli.command {
        Command::Countries => {
            for c in &countries {
                println!("{}\t{}", c.code, c.name);
            }
        }
        Command::Invoice(args) => {
            let form = InvoiceForm {
                service_name: args.service_name,
                service_price: args.service_price,
                provider_name: args.provider_name,
                provider_country: args
                    .provider_country
                    .and_then(|code| find_country(&countries, &code)),
                is_provider_vat_payer: !args.provider_not_vat_payer,
                client_name: args.client_name,
                client_country: args
                    .client_country
                    .and_then(|code| find_country(&countries, &code)),
                is_client_vat_payer: !args.client_not_vat_payer,
            };
            let transaction = form.validate().map_err(InvoicerError::Validation)?;
            let invoice = gateway.evaluate(transaction).await?;

            if args.json {
                let json = serde_json::to_string_pretty(&invoice)
                    .map_err(|e| InvoicerError::Render(e.to_string()))?;
                println!("{json}");
            } else {
                print!("{}", render_invoice(&invoice));
            }
        }
    }
    Ok(())
}
