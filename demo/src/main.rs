//! capgate: Contract Back Office Reference Demo CLI
//!
//! Runs the reference surface walkthroughs, or compiles an arbitrary schema
//! file for a given actor and prints what the rendering layer would receive.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- action-menu
//!   cargo run -p demo -- compile --schema schemas/contract_edit_dialog.toml \
//!       --actor sales-agent --entity contract.json
//!   cargo run -p demo -- compile --schema schemas/contract_list_columns.toml \
//!       --credentials me.json --permitted customer --permitted site

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use capgate_contracts::{
    credential::CredentialSet,
    error::{CapgateError, CapgateResult},
    schema::Surface,
};
use capgate_core::{
    traits::{StaticCredentials, StaticPermittedFields},
    Resolver,
};
use capgate_ref_contracts::{fixtures, surfaces};
use capgate_schema::TomlSchema;

// ── CLI definition ────────────────────────────────────────────────────────────

/// capgate: credential-based UI capability resolver demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "capgate contract back office reference demo",
    long_about = "Resolves which fields, columns, and actions a user may see or use\n\
                  on the contract back office surfaces."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four surface walkthroughs in sequence.
    RunAll,
    /// Surface 1: create wizard (SHOW vs HIDE gates).
    CreateWizard,
    /// Surface 2: edit dialog (independent visible/editable).
    EditDialog,
    /// Surface 3: list columns (permitted-fields filter).
    ListColumns,
    /// Surface 4: action menu (confirm/unconfirm and hold toggles).
    ActionMenu,
    /// Compile a schema file and print the result as JSON.
    Compile {
        /// Path to a TOML capability schema.
        #[arg(long)]
        schema: PathBuf,

        /// Path to a JSON credential snapshot.
        #[arg(long, conflicts_with = "actor")]
        credentials: Option<PathBuf>,

        /// Use a built-in actor profile instead of a credentials file.
        #[arg(long)]
        actor: Option<String>,

        /// Path to a JSON entity snapshot for toggle resolution.
        #[arg(long)]
        entity: Option<PathBuf>,

        /// Server-permitted column keys (repeatable). Omit for "not loaded".
        #[arg(long = "permitted")]
        permitted: Vec<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll => with_banner(surfaces::run_all),
        Command::CreateWizard => with_banner(surfaces::create_wizard::run_scenario),
        Command::EditDialog => with_banner(surfaces::edit_dialog::run_scenario),
        Command::ListColumns => with_banner(surfaces::list_columns::run_scenario),
        Command::ActionMenu => with_banner(surfaces::action_menu::run_scenario),
        Command::Compile { schema, credentials, actor, entity, permitted } => run_compile(
            &schema,
            credentials.as_deref(),
            actor.as_deref(),
            entity.as_deref(),
            permitted,
        ),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Walkthroughs ──────────────────────────────────────────────────────────────

fn with_banner(run: fn() -> CapgateResult<()>) -> CapgateResult<()> {
    print_banner();
    run()?;
    println!("All selected walkthroughs completed successfully.");
    Ok(())
}

fn print_banner() {
    println!();
    println!("capgate: Credential-based UI Capability Resolver");
    println!("Contract Back Office Reference Demo");
    println!("=================================================");
    println!();
    println!("Per element and request:");
    println!("  [1] SHOW gate: granted if any listed credential is held (superadmin always passes)");
    println!("  [2] HIDE gate: revoked if the credential is held (superadmin does NOT override)");
    println!("  [3] No rule: the declared default applies");
    println!("  [4] Toggles: entity state picks the action, its own gate decides availability");
    println!("  [5] List columns: server permitted-fields set filters first, local rules second");
    println!();
}

// ── compile ───────────────────────────────────────────────────────────────────

fn run_compile(
    schema_path: &Path,
    credentials_path: Option<&Path>,
    actor: Option<&str>,
    entity_path: Option<&Path>,
    permitted: Vec<String>,
) -> CapgateResult<()> {
    let schema = TomlSchema::from_file(schema_path)?.into_schema();
    let credentials = load_credentials(credentials_path, actor)?;
    let entity = entity_path.map(load_entity).transpose()?;

    info!(
        schema_id = %schema.schema_id,
        credentials = credentials.len(),
        entity = entity.is_some(),
        "compiling from command line"
    );

    let resolver = Resolver::new(
        Box::new(StaticCredentials(credentials)),
        Box::new(StaticPermittedFields::from_keys(permitted)),
    );

    let compiled = resolver.compile(&schema, entity.as_ref())?;
    let mut output = json!({ "compiled": compiled });
    if schema.surface == Surface::ListColumns {
        let columns = resolver.columns(&schema)?;
        output["columns"] = json!(columns);
    }

    let rendered = serde_json::to_string_pretty(&output).map_err(|e| CapgateError::ConfigError {
        reason: format!("failed to render output: {}", e),
    })?;
    println!("{}", rendered);
    Ok(())
}

fn load_credentials(path: Option<&Path>, actor: Option<&str>) -> CapgateResult<CredentialSet> {
    match (path, actor) {
        (Some(path), _) => {
            let contents = std::fs::read_to_string(path).map_err(|e| CapgateError::CredentialSource {
                reason: format!("failed to read credentials '{}': {}", path.display(), e),
            })?;
            CredentialSet::from_json(&contents)
        }
        (None, Some(name)) => fixtures::actor(name).ok_or_else(|| CapgateError::CredentialSource {
            reason: format!(
                "unknown actor '{}'; expected one of: {}",
                name,
                fixtures::ACTORS.join(", ")
            ),
        }),
        (None, None) => Err(CapgateError::CredentialSource {
            reason: "either --credentials or --actor is required".to_string(),
        }),
    }
}

fn load_entity(path: &Path) -> CapgateResult<Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| CapgateError::EntityParse {
        reason: format!("failed to read entity '{}': {}", path.display(), e),
    })?;
    serde_json::from_str(&contents).map_err(|e| CapgateError::EntityParse {
        reason: format!("failed to parse entity '{}': {}", path.display(), e),
    })
}
