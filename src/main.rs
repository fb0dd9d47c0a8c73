use clap::{Args, Parser, Subcommand};
use leviart::config::{self, SiteConfig};
use leviart::contact::{ContactForm, HttpRelay, SubmitOutcome};
use leviart::notify::AlertNotifier;
use leviart::pricing::{PriceEstimator, Size};
use leviart::types::ContactFields;
use leviart::upload::{Attachment, FileUpload};
use leviart::validate::is_valid_email;
use leviart::{logging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leviart")]
#[command(about = "Behaviour layer of the LeviArt portfolio site")]
#[command(long_about = "\
Behaviour layer of the LeviArt portfolio site

Runs the site's form logic from the command line: price estimates for
portrait commissions, email and reference-photo checks, and contact form
submission to the configured form relay.

Configuration is read from config.toml in the --config directory. Every
key is optional; missing keys take their stock defaults.

Run 'leviart gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Log controller transitions at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate a portrait price range and the budget options it produces
    Estimate {
        /// Portrait size: a4, a3, a2, a1 or a0
        #[arg(long)]
        size: String,
        /// Number of people: 1, 2, 3, 4 or 5+
        #[arg(long)]
        people: Option<String>,
        /// Service type the estimate is for
        #[arg(long, default_value = "portrait")]
        service: String,
        /// Print the quote and options as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check an email address against the contact form's rule
    CheckEmail { address: String },
    /// Check reference photos against the upload limits
    CheckFiles {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Validate and post a contact form submission
    Submit(SubmitArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(Args)]
struct SubmitArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    service: String,
    #[arg(long)]
    message: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    people: String,
    #[arg(long, default_value = "")]
    size: String,
    #[arg(long, default_value = "")]
    budget: String,
    #[arg(long, default_value = "")]
    timeline: String,
    /// Reference photo to attach (repeatable)
    #[arg(long = "attach")]
    attachments: Vec<PathBuf>,
}

impl SubmitArgs {
    fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
            people: self.people.clone(),
            size: self.size.clone(),
            budget: self.budget.clone(),
            timeline: self.timeline.clone(),
            message: self.message.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Estimate {
            size,
            people,
            service,
            json,
        } => {
            let site = config::load_config(&cli.config)?;
            size.parse::<Size>()?;
            let mut estimator = PriceEstimator::new(&site.pricing.currency, Some(Vec::new()));
            estimator.set_service(&service);
            if let Some(people) = &people {
                estimator.set_people(people);
            }
            let quote = estimator
                .set_size(&size)
                .ok_or("no estimate for this selection")?;
            let options = estimator.budget_options().unwrap_or_default();
            if json {
                println!(
                    "{}",
                    output::estimate_json(&quote, &site.pricing.currency, options)?
                );
            } else {
                output::print_estimate(
                    &size,
                    people.as_deref(),
                    &quote,
                    &site.pricing.currency,
                    options,
                );
            }
        }
        Command::CheckEmail { address } => {
            let valid = is_valid_email(&address);
            output::print_email_check(&address, valid);
            if !valid {
                return Err(format!("invalid email address: {address}").into());
            }
        }
        Command::CheckFiles { paths } => {
            let site = config::load_config(&cli.config)?;
            let files = read_attachments(&paths)?;
            let mut upload = FileUpload::new(site.uploads);
            if !upload.select(files, &mut AlertNotifier::stderr()) {
                return Err("selection rejected".into());
            }
            output::print_file_preview(&upload.preview());
        }
        Command::Submit(args) => {
            let site = config::load_config(&cli.config)?;
            submit(&site, &args).await?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn read_attachments(paths: &[PathBuf]) -> std::io::Result<Vec<Attachment>> {
    paths.iter().map(|p| Attachment::from_path(p)).collect()
}

/// Run one submission the way the page does, then let the redirect delay pass.
async fn submit(site: &SiteConfig, args: &SubmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut notifier = AlertNotifier::stderr();
    let mut form = ContactForm::new(&site.form);
    form.fields = args.fields();

    if !args.attachments.is_empty() {
        let mut upload = FileUpload::new(site.uploads);
        if !upload.select(read_attachments(&args.attachments)?, &mut notifier) {
            return Err("attachments rejected".into());
        }
        form = form.with_upload(upload);
    }

    let relay = HttpRelay::new(&site.form.endpoint);
    let outcome = form.submit(&relay, &mut notifier).await;
    let navigations = form.advance(site.form.redirect_delay());
    output::print_submit(relay.endpoint(), outcome, &navigations);

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        _ => Err("contact form was not delivered".into()),
    }
}
