//! # Registration Demo
//!
//! Walks the registration wizard end to end against the in-memory backend:
//! a rejected first step, a username collision reported by the backend, and a
//! successful submission.

use anyhow::{bail, Context, Result};
use exhibitor_registration::logging::init_structured_logging;
use exhibitor_registration::models::{AccountInfoPatch, CompanyInfoPatch, ParticipationType};
use exhibitor_registration::services::{CountryDirectory, StaticCountryLookup};
use exhibitor_registration::{
    BrochureFile, ConfigManager, InMemoryRegistrationBackend, RegistrationWizard,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

fn print_errors(wizard: &RegistrationWizard) {
    for (field, messages) in wizard.errors().iter() {
        println!("   - {field}: {}", messages.join("; "));
    }
    let submit_error = wizard.submit_error();
    if !submit_error.is_empty() {
        println!("   ! {submit_error}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_structured_logging();

    let manager = ConfigManager::load().context("loading registration configuration")?;
    info!(environment = %manager.environment(), "Configuration loaded");

    let backend = Arc::new(InMemoryRegistrationBackend::new().with_latency(Duration::from_millis(250)));
    let wizard = RegistrationWizard::from_config(manager.config(), backend.clone());
    let countries = CountryDirectory::new(StaticCountryLookup::default());

    println!("Step {}: {:?}", wizard.current_step().index(), wizard.current_step_config().map(|c| c.title));

    // An empty first step is refused.
    if wizard.go_next() {
        bail!("an empty account step should not validate");
    }
    println!("Account step rejected:");
    print_errors(&wizard);

    wizard.update_account_info(AccountInfoPatch {
        first_name: Some("Maria".to_string()),
        last_name: Some("Cruz".to_string()),
        email: Some("maria@cruzcrafts.ph".to_string()),
        username: Some("johndoe".to_string()),
        password: Some("Secret123".to_string()),
        password_confirmation: Some("Secret123".to_string()),
        participation_type: Some(ParticipationType::Exhibitor),
    });
    if !wizard.go_next() {
        bail!("account step should validate");
    }

    let country_list = countries.countries().await;
    let country = country_list
        .iter()
        .find(|c| c.code == "PH")
        .context("fallback list always carries PH")?;

    wizard.update_company_info(CompanyInfoPatch {
        company_name: Some("Cruz Crafts".to_string()),
        address_line: Some("12 Rizal Ave".to_string()),
        city: Some("Cebu City".to_string()),
        country: Some(country.code.clone()),
        year_established: Some("1999".to_string()),
        website: Some("cruzcrafts.ph".to_string()),
        brochure: Some(Some(BrochureFile::from_bytes(
            "catalogue.pdf",
            "application/pdf",
            b"%PDF-1.7 demo".to_vec(),
        ))),
        ..Default::default()
    });
    if !wizard.go_next() {
        print_errors(&wizard);
        bail!("company step should validate");
    }

    println!(
        "Reviewing {} from {} ({:.0}% done)",
        wizard.full_name(),
        countries.country_name(&wizard.company_info().country),
        wizard.progress()
    );

    // "johndoe" is already taken on the backend.
    if wizard.submit_registration().await {
        bail!("duplicate username should be rejected");
    }
    println!("Submission rejected:");
    print_errors(&wizard);

    wizard.update_account_info(AccountInfoPatch {
        username: Some("mcruz".to_string()),
        ..Default::default()
    });
    if !wizard.submit_registration().await {
        print_errors(&wizard);
        bail!("submission should succeed");
    }

    let result = wizard
        .submission_result()
        .context("a successful submission stores its result")?;
    println!("Registration complete: {}", serde_json::to_string_pretty(&result)?);
    info!(registrations = backend.registration_count(), "Demo finished");

    Ok(())
}
