//! qsite - content client, page loader and static host for the Qubitwise site.

mod check;
mod cli;
mod config;
mod contact;
mod content;
mod icons;
mod loader;
mod pages;
mod serve;
mod utils;

use anyhow::{Context, Result, bail};
use check::run_check;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};
use contact::{ContactForm, HttpSubmission, Inquiry, LogSubmission, SubmissionService};
use content::{ContentClient, DocumentName, source_from_config};
use loader::PageState;
use pages::{Route, load_page, render_page};
use serve::serve_site;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Fetch { document } => fetch(*document),
        Commands::Page { route } => page(route),
        Commands::Check => run_check(),
        Commands::Contact {
            name,
            email,
            company,
            industry,
            problem,
            data_ready,
        } => contact(Inquiry {
            name: name.clone(),
            email: email.clone(),
            company: company.clone(),
            industry: Some(*industry),
            problem: problem.clone(),
            data_ready: *data_ready,
        }),
        Commands::Serve { .. } => serve_site(),
    }
}

/// Print one document as pretty JSON.
fn fetch(document: DocumentName) -> Result<()> {
    let client = ContentClient::new(source_from_config(&cfg().content));
    let value = client
        .fetch_document(document)
        .with_context(|| format!("reading {}", client.source().locate(document)))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Mount `route` once and print what it renders.
///
/// A failed page still renders its error state; only the exit status
/// reports the failure.
fn page(route: &Route) -> Result<()> {
    let c = cfg();
    let client = ContentClient::new(source_from_config(&c.content));
    let state = PageState::new();

    state.mount(|| load_page(&client, route, c.content.failure));

    let result = state.with(|resource| {
        print!("{}", render_page(route, resource));
        match resource.error() {
            Some(err) => {
                if let Some(document) = err.document() {
                    log!("page"; "source: {}", client.source().locate(document));
                }
                bail!("{} failed: {err}", route.path())
            }
            None => Ok(()),
        }
    });
    state.unmount();
    result
}

fn contact(inquiry: Inquiry) -> Result<()> {
    let service: Box<dyn SubmissionService> = match &cfg().contact.endpoint {
        Some(endpoint) => Box::new(HttpSubmission::new(endpoint)),
        None => Box::new(LogSubmission),
    };

    let mut form = ContactForm::new(inquiry);
    let receipt = form.submit(service.as_ref())?;
    log!("contact"; "thank you, we'll be in touch ({})", receipt.destination);
    Ok(())
}
