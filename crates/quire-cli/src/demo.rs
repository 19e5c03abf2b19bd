// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scripted walkthrough of every document operation for the three demo
//! accounts.

use anyhow::{Context, Result};
use quire_documents::DocumentInput;
use quire_identity::DEMO_PASSWORD;
use quire_service::{DocumentId, DocumentService, User};

fn report<T>(step: &str, result: &quire_service::Result<T>) {
	match result {
		Ok(_) => println!("  ok      {step}"),
		Err(e) => println!("  refused {step}: {e}"),
	}
}

async fn show_list(service: &DocumentService, user: &User) -> Result<()> {
	let docs = service.list_documents(&user.id).await?;
	let titles: Vec<_> = docs.iter().map(|d| d.title.as_str()).collect();
	println!("  {} sees {} document(s): {}", user.username, docs.len(), titles.join(", "));
	Ok(())
}

pub async fn run(service: &DocumentService) -> Result<()> {
	let admin = service
		.authenticate("admin", DEMO_PASSWORD)
		.context("demo admin account missing")?;
	let editor = service
		.authenticate("newuser", DEMO_PASSWORD)
		.context("demo editor account missing")?;
	let viewer = service
		.authenticate("viewer", DEMO_PASSWORD)
		.context("demo viewer account missing")?;

	println!("Decider: {}", service.decider_name());

	println!("\nListing");
	for user in [&admin, &editor, &viewer] {
		show_list(service, user).await?;
	}

	println!("\nCreating");
	let created = service
		.create_document(&editor.id, DocumentInput::new("Team Notes", "Weekly sync", false))
		.await;
	report("editor creates a private document", &created);
	report(
		"viewer creates a document",
		&service
			.create_document(&viewer.id, DocumentInput::new("Viewer Notes", "", true))
			.await,
	);
	report(
		"admin creates a document with a blank title",
		&service
			.create_document(&admin.id, DocumentInput::new("   ", "", true))
			.await,
	);

	println!("\nReading");
	let security_policy = DocumentId::new("2");
	for user in [&admin, &editor, &viewer] {
		let found = service.get_document(&user.id, &security_policy).await?;
		println!(
			"  {} opens Security Policy: {}",
			user.username,
			if found.is_some() { "visible" } else { "not found" }
		);
	}

	println!("\nUpdating");
	let manual = DocumentId::new("3");
	report(
		"editor updates their own User Manual",
		&service
			.update_document(
				&editor.id,
				&manual,
				DocumentInput::new("User Manual", "Now with screenshots.", true),
			)
			.await,
	);
	report(
		"editor updates the admin's Security Policy",
		&service
			.update_document(
				&editor.id,
				&security_policy,
				DocumentInput::new("Security Policy", "Relaxed.", true),
			)
			.await,
	);

	println!("\nDeleting");
	report(
		"editor deletes the admin's Getting Started Guide",
		&service.delete_document(&editor.id, &DocumentId::new("1")).await,
	);
	if let Ok(doc) = &created {
		report(
			"viewer deletes the editor's Team Notes",
			&service.delete_document(&viewer.id, &doc.id).await,
		);
		report(
			"editor deletes their Team Notes",
			&service.delete_document(&editor.id, &doc.id).await,
		);
		report(
			"editor deletes their Team Notes again",
			&service.delete_document(&editor.id, &doc.id).await,
		);
	}

	println!("\nAdmin panel");
	for user in [&admin, &editor, &viewer] {
		let allowed = service.can_access_admin_panel(&user.id).await;
		println!(
			"  {} {}",
			user.username,
			if allowed { "may enter" } else { "is turned away" }
		);
	}

	println!("\nFinal state");
	show_list(service, &admin).await
}
