use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use common::{Pet, PetStatus, Priority};
use dashboard::config::DashboardConfig;
use dashboard::form::PetDraft;
use dashboard::list_view::{FilterPatch, SortBy};
use dashboard::notification::NotificationKind;
use dashboard::{ApiClient, Dashboard, PetApi, PetChange};

#[derive(Parser)]
#[command(name = "vetdesk", version, about = "Track pets in care from the terminal")]
struct Cli {
    /// Pet service URL. Overrides `api.base_url` from config.
    #[arg(long, global = true, env = "VETDESK_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show pets, optionally searched, filtered and sorted
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// Animal type name, or "all"
        #[arg(long = "type", default_value = "all")]
        filter_type: String,
        /// name, priority or priority-desc
        #[arg(long, default_value = "name")]
        sort: SortBy,
    },
    /// Show all animal types
    Types,
    /// Add a pet
    Add {
        name: String,
        /// Existing animal type id
        #[arg(long)]
        type_id: Option<i32>,
        /// Create this animal type and use it
        #[arg(long)]
        new_type: Option<String>,
        #[arg(long, default_value_t = PetStatus::default())]
        status: PetStatus,
        #[arg(long, default_value_t = Priority::default())]
        priority: Priority,
    },
    /// Change a pet's status
    SetStatus { id: i32, status: PetStatus },
    /// Change a pet's priority
    SetPriority { id: i32, priority: Priority },
    /// Delete a pet
    Delete { id: i32 },
    /// Add an animal type
    AddType { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = match cli.base_url {
        Some(url) => url,
        None => {
            DashboardConfig::load()
                .context("Failed to load config")?
                .api
                .base_url
        }
    };

    let mut dashboard = Dashboard::new(ApiClient::new(base_url));
    if !dashboard.load().await {
        bail!(dashboard.notification().message);
    }

    match cli.command {
        Command::List {
            search,
            filter_type,
            sort,
        } => {
            dashboard.update_filter_settings(FilterPatch {
                search_term: Some(search),
                filter_type: Some(filter_type),
                sort_by: Some(sort),
            });
            print_list(&mut dashboard);
            return Ok(());
        }
        Command::Types => {
            for animal_type in dashboard.animal_types() {
                println!("{:>4}  {}", animal_type.id, animal_type.name);
            }
            return Ok(());
        }
        Command::Add {
            name,
            type_id,
            new_type,
            status,
            priority,
        } => {
            let mut draft = PetDraft::default();
            draft.set_name(name);
            draft.select_animal_type(type_id);
            if let Some(new_type) = new_type {
                // Set directly so giving both inputs is reported instead of silently resolved.
                draft.new_animal_type = new_type;
            }
            draft.set_status(status);
            draft.set_priority(priority);

            if !dashboard.submit_draft(&mut draft).await && !draft.errors().is_empty() {
                let problems: Vec<&str> = draft.errors().values().map(String::as_str).collect();
                bail!(problems.join("\n"));
            }
        }
        Command::SetStatus { id, status } => {
            dashboard.update_pet(id, PetChange::Status(status)).await;
        }
        Command::SetPriority { id, priority } => {
            dashboard.update_pet(id, PetChange::Priority(priority)).await;
        }
        Command::Delete { id } => {
            dashboard.delete_pet(id).await;
        }
        Command::AddType { name } => {
            dashboard.add_animal_type(&name).await;
        }
    }

    let notification = dashboard.notification();
    if notification.kind == NotificationKind::Error {
        bail!(notification.message);
    }
    println!("{}", notification.message);
    Ok(())
}

fn print_list<A: PetApi>(dashboard: &mut Dashboard<A>) {
    let options = dashboard.filter_options();
    let empty = dashboard.empty_message();
    let pets = dashboard.visible_pets();

    if pets.is_empty() {
        println!("{empty}");
    } else {
        println!(
            "{:>4}  {:<16} {:<10} {:<24} PRIORITY",
            "ID", "NAME", "TYPE", "STATUS"
        );
        for pet in pets {
            print_pet(pet);
        }
    }
    if !options.is_empty() {
        println!("\nTypes: {}", options.join(", "));
    }
}

fn print_pet(pet: &Pet) {
    println!(
        "{:>4}  {:<16} {:<10} {:<24} {}",
        pet.id,
        pet.name,
        pet.animal_type.as_deref().unwrap_or("-"),
        pet.status.as_str(),
        pet.priority.as_str()
    );
}
