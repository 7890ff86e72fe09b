use crate::server;
use clap::{Args, Parser, Subcommand};
use partner_landing::config::AppConfig;
use partner_landing::error::AppError;
use partner_landing::leads::{LeadForm, RedirectUrlBuilder};
use partner_landing::partners::{generator, Branding, PartnerDirectory, PartnerResolver};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "Partner Landing",
    about = "Serve partner-branded landing data and build order redirects",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Manage the generated partner dataset
    Partners {
        #[command(subcommand)]
        command: PartnersCommand,
    },
    /// Print the order-system redirect URL for a lead
    Redirect(RedirectArgs),
}

#[derive(Subcommand, Debug)]
enum PartnersCommand {
    /// Generate the partner JSON dataset from the affiliate mapping CSV
    Generate(GenerateArgs),
    /// Show the branding a partner code resolves to
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the partner dataset path
    #[arg(long)]
    pub(crate) partners: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// CSV with `cp_afid,affiliate_name` columns
    #[arg(long)]
    csv: PathBuf,
    /// Destination for the generated JSON dataset
    #[arg(long, default_value = "data/partners.json")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Partner code as passed in `cp_afid`
    code: String,
    /// Override the partner dataset path
    #[arg(long)]
    partners: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RedirectArgs {
    /// Five digit ZIP code
    #[arg(long)]
    zip: String,
    /// Home size (small, medium, large, xlarge)
    #[arg(long, default_value = "medium")]
    home_size: String,
    /// Partner code to forward as `cp_afid`
    #[arg(long)]
    cp_afid: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Partners {
            command: PartnersCommand::Generate(args),
        } => run_generate(args),
        Command::Partners {
            command: PartnersCommand::Show(args),
        } => run_show(args),
        Command::Redirect(args) => run_redirect(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let dataset = generator::generate_file(&args.csv, &args.out)?;
    println!(
        "Generated configuration for {} partners",
        dataset.partners.len()
    );
    println!("Partners configuration written to {}", args.out.display());

    let examples: Vec<_> = dataset.partners.values().take(3).collect();
    if !examples.is_empty() {
        println!("\nExample configurations:");
        for record in examples {
            match serde_json::to_string_pretty(record) {
                Ok(json) => println!("{}: {}", record.code, json),
                Err(err) => println!("{}: unavailable ({})", record.code, err),
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = args.partners.unwrap_or(config.partners.data_path);
    let directory = Arc::new(PartnerDirectory::from_path(&path)?);
    let resolver = PartnerResolver::new(directory);

    let branding = Branding::resolve(resolver.resolve(Some(args.code.as_str())));
    if branding.is_partner() {
        println!("Partner '{}' resolves to partner branding", args.code);
    } else {
        println!(
            "Partner '{}' is unknown or inactive; house branding applies",
            args.code
        );
    }

    match serde_json::to_string_pretty(&branding) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Branding payload unavailable: {err}"),
    }
    Ok(())
}

fn run_redirect(args: RedirectArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let submission = LeadForm {
        zip_code: args.zip,
        home_size: Some(args.home_size),
        partner_code: args.cp_afid,
    }
    .validate()?;

    let builder = RedirectUrlBuilder::new(&config.orders);
    println!("{}", builder.build_for(&submission));
    Ok(())
}
