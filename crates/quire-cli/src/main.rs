// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quire_authz::{Action, ResourceType};
use quire_config::{load_config, load_config_with_file, LoggingConfig, QuireConfig};
use quire_documents::DocumentInput;
use quire_service::{DocumentId, DocumentService, Resource, User, UserId};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod demo;

/// Quire - documents with role- and attribute-based access control
#[derive(Parser, Debug)]
#[command(name = "quire", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Log level (overrides config)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

/// Username and password of the acting user.
#[derive(clap::Args, Debug)]
struct Login {
	/// Username (admin, newuser or viewer for the demo accounts)
	#[arg(short, long)]
	user: String,

	#[arg(long, env = "QUIRE_PASSWORD", hide_env_values = true)]
	password: String,
}

#[derive(clap::Args, Debug)]
struct DocumentFields {
	#[arg(long)]
	title: String,

	#[arg(long, default_value = "")]
	content: String,

	/// Make the document readable by everyone
	#[arg(long)]
	public: bool,
}

impl From<DocumentFields> for DocumentInput {
	fn from(fields: DocumentFields) -> Self {
		DocumentInput::new(fields.title, fields.content, fields.public)
	}
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List the documents visible to a user
	List {
		#[command(flatten)]
		login: Login,
	},
	/// Show one document
	Show {
		#[command(flatten)]
		login: Login,
		#[arg(long)]
		id: String,
	},
	/// Create a document owned by the user
	Create {
		#[command(flatten)]
		login: Login,
		#[command(flatten)]
		fields: DocumentFields,
	},
	/// Replace a document's title, content and visibility
	Update {
		#[command(flatten)]
		login: Login,
		#[arg(long)]
		id: String,
		#[command(flatten)]
		fields: DocumentFields,
	},
	/// Delete a document
	Delete {
		#[command(flatten)]
		login: Login,
		#[arg(long)]
		id: String,
	},
	/// Ask whether a user may perform an action
	Check {
		#[command(flatten)]
		login: Login,
		/// create, read, update, delete or access
		#[arg(long)]
		action: Action,
		/// document or admin-panel
		#[arg(long, default_value = "document")]
		resource: ResourceType,
		/// Specific document id; owner and visibility are looked up
		#[arg(long, conflicts_with_all = ["owner", "public"])]
		document: Option<String>,
		/// Owner of a hypothetical document
		#[arg(long)]
		owner: Option<String>,
		/// The hypothetical document is public
		#[arg(long, requires = "owner")]
		public: bool,
	},
	/// Run a scripted walkthrough against a fresh store
	Demo,
}

fn init_tracing(logging: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

	// Logs go to stderr; stdout carries command output.
	if logging.json {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.init();
	}
}

fn load(args: &Args) -> Result<QuireConfig> {
	let mut config = match &args.config {
		Some(path) => load_config_with_file(path),
		None => load_config(),
	}
	.context("failed to load configuration")?;

	if let Some(level) = &args.log_level {
		config.logging.level = level.clone();
	}
	if args.json_logs {
		config.logging.json = true;
	}
	Ok(config)
}

fn login(service: &DocumentService, login: &Login) -> Result<User> {
	service
		.authenticate(&login.user, &login.password)
		.with_context(|| format!("login failed for '{}'", login.user))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

async fn resolve_resource(
	service: &DocumentService,
	user: &User,
	resource: ResourceType,
	document: Option<String>,
	owner: Option<String>,
	public: bool,
) -> Result<Resource> {
	Ok(match (resource, document) {
		(ResourceType::AdminPanel, _) => Resource::admin_panel(),
		(ResourceType::Document, Some(id)) => {
			let id = DocumentId::new(id);
			// Looked up as admin so the check itself sees private documents.
			let admin = service
				.directory()
				.users()
				.find(|u| u.subject().is_admin())
				.map(|u| u.id.clone())
				.unwrap_or_else(|| user.id.clone());
			let doc = service
				.get_document(&admin, &id)
				.await?
				.with_context(|| format!("no document with id '{id}'"))?;
			Resource::document(doc.id, doc.owner_id, doc.is_public)
		}
		(ResourceType::Document, None) => match owner {
			Some(owner) => Resource::document(DocumentId::generate(), UserId::new(owner), public),
			None => Resource::any_document(),
		},
	})
}

async fn run(service: DocumentService, command: Command) -> Result<()> {
	match command {
		Command::List { login: creds } => {
			let user = login(&service, &creds)?;
			print_json(&service.list_documents(&user.id).await?)
		}
		Command::Show { login: creds, id } => {
			let user = login(&service, &creds)?;
			let doc = service
				.get_document(&user.id, &DocumentId::new(id.clone()))
				.await?
				.with_context(|| format!("document '{id}' not found"))?;
			print_json(&doc)
		}
		Command::Create {
			login: creds,
			fields,
		} => {
			let user = login(&service, &creds)?;
			print_json(&service.create_document(&user.id, fields.into()).await?)
		}
		Command::Update {
			login: creds,
			id,
			fields,
		} => {
			let user = login(&service, &creds)?;
			let doc = service
				.update_document(&user.id, &DocumentId::new(id), fields.into())
				.await?;
			print_json(&doc)
		}
		Command::Delete { login: creds, id } => {
			let user = login(&service, &creds)?;
			print_json(&service.delete_document(&user.id, &DocumentId::new(id)).await?)
		}
		Command::Check {
			login: creds,
			action,
			resource,
			document,
			owner,
			public,
		} => {
			let user = login(&service, &creds)?;
			let resource = resolve_resource(&service, &user, resource, document, owner, public).await?;
			let allowed = service.check_permission(&user.id, action, &resource).await;
			println!("{}", if allowed { "allowed" } else { "denied" });
			Ok(())
		}
		Command::Demo => demo::run(&service).await,
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();
	let config = load(&args)?;

	init_tracing(&config.logging);

	let service =
		DocumentService::from_config(&config).context("failed to start document service")?;
	info!(decider = service.decider_name(), "starting quire");

	run(service, args.command).await
}
