use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_cards_core::{CardAssembler, CardPayload, DetailOutcome, RenderContext};

mod inputs;

#[derive(Parser)]
#[command(name = "ticket-cards")]
#[command(about = "Render support ticket cards as channel-agnostic JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the create-ticket card
    NewTicket {
        /// Field template (YAML)
        #[arg(long)]
        template: PathBuf,
        /// String table (YAML mapping of key to text)
        #[arg(long)]
        strings: PathBuf,
        /// Ticket state used to pre-fill and validate the form (YAML)
        #[arg(long)]
        ticket: Option<PathBuf>,
        /// Show validation markers
        #[arg(long)]
        validate: bool,
        /// Date treated as today (YYYY-MM-DD, defaults to the current UTC date)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Render the submitted/edited ticket card
    Detail {
        /// Field template (YAML)
        #[arg(long)]
        template: PathBuf,
        /// String table (YAML mapping of key to text)
        #[arg(long)]
        strings: PathBuf,
        /// Ticket state (YAML)
        #[arg(long)]
        ticket: PathBuf,
        /// Announce an edit rather than a new submission
        #[arg(long)]
        edited: bool,
    },
    /// Compile a field template and list its fields
    CheckTemplate {
        /// Field template (YAML)
        #[arg(long)]
        template: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ticket_cards=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = inputs::card_config(
        std::env::var(inputs::CARD_VERSION_ENV).ok(),
        std::env::var(inputs::DYNAMIC_FIELDS_ENV).ok(),
    )?;
    let assembler = CardAssembler::new(config);

    match cli.command {
        Commands::NewTicket {
            template,
            strings,
            ticket,
            validate,
            today,
        } => {
            let template = inputs::load_template(&template)?;
            let strings = inputs::load_strings(&strings)?;
            warn_missing_strings(&strings, &template);
            let ticket = ticket.as_deref().map(inputs::load_ticket).transpose()?;

            let ctx = match today {
                Some(date) => RenderContext::new(&strings, date),
                None => RenderContext::utc_today(&strings),
            };
            let card = assembler.new_ticket_card(&template, ticket.as_ref(), validate, &ctx)?;
            print_card(&card)?;
        }
        Commands::Detail {
            template,
            strings,
            ticket,
            edited,
        } => {
            let template = inputs::load_template(&template)?;
            let strings = inputs::load_strings(&strings)?;
            warn_missing_strings(&strings, &template);
            let ticket = inputs::load_ticket(&ticket)?;

            let outcome = if edited {
                DetailOutcome::Edited
            } else {
                DetailOutcome::Submitted
            };
            let ctx = RenderContext::utc_today(&strings);
            let card = assembler.ticket_detail_card(&template, &ticket, outcome, &ctx);
            print_card(&card)?;
        }
        Commands::CheckTemplate { template } => {
            let template = inputs::load_template(&template)?;
            if template.is_empty() {
                println!("Template has no fields.");
            }
            for field in template.fields() {
                println!(
                    "{} ({}{}) label: {}, choices: {}",
                    field.id,
                    field.field_type,
                    if field.required { ", required" } else { "" },
                    field.label_key,
                    field.choices.len()
                );
            }
        }
    }

    Ok(())
}

fn warn_missing_strings(
    strings: &ticket_cards_core::StringTable,
    template: &ticket_cards_core::CompiledTemplate,
) {
    let missing = inputs::missing_strings(strings, template);
    if !missing.is_empty() {
        tracing::warn!("string table is missing {} keys: {}", missing.len(), missing.join(", "));
    }
}

fn print_card(card: &CardPayload) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(card)?);
    Ok(())
}
