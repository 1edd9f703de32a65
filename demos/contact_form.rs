//! Contact Form Walkthrough
//!
//! This example drives the contact form through a headless view.
//!
//! Key concepts:
//! - Rules loaded once from configuration
//! - Blur validation with inline errors
//! - Submission that validates, captures, clears and confirms
//! - Confirmation that expires after the configured delay
//!
//! Run with: cargo run --example contact_form

use chrono::{Duration, Utc};
use formguard::chrome::whatsapp_link;
use formguard::config::FormConfig;
use formguard::engine::defaults::CONTACT_FIELDS;
use formguard::presentation::{ContactForm, MemoryView, UiEvent};

fn main() {
    println!("=== Contact Form Example ===\n");

    let config = FormConfig::contact_defaults();
    let mut form = ContactForm::new(MemoryView::with_fields(CONTACT_FIELDS), &config)
        .expect("built-in configuration is valid");

    println!("Step 1: Blur with a malformed phone number");
    form.view_mut().set_value("phone", "123");
    let _ = form.dispatch(UiEvent::Blur("phone".to_string()));
    println!("  phone error: {:?}\n", form.view().error("phone"));

    println!("Step 2: Submit an incomplete form");
    let result = form.dispatch(UiEvent::Submit { at: Utc::now() });
    println!("  submitted: {:?}", result.map(|s| s.is_some()));
    for name in CONTACT_FIELDS {
        if let Some(error) = form.view().error(name) {
            println!("  {}: {}", name, error);
        }
    }
    println!();

    println!("Step 3: Fix the fields and submit again");
    form.view_mut().set_value("fullName", "אבי כהן");
    form.view_mut().set_value("phone", "050-1234567");
    form.view_mut().set_value("propertyType", "apartment");
    let now = Utc::now();
    match form.dispatch(UiEvent::Submit { at: now }) {
        Ok(Some(submission)) => println!("  accepted submission {}", submission.id),
        Ok(None) => println!("  form still invalid"),
        Err(e) => println!("  delivery failed: {}", e),
    }
    println!("  confirmation visible: {}", form.view().confirmation_visible());
    println!("  form cleared: {}\n", form.get_form_data().all_empty());

    println!("Step 4: Let the confirmation expire");
    let _ = form.dispatch(UiEvent::Tick {
        at: now + Duration::milliseconds(config.confirmation_delay_ms as i64),
    });
    println!("  confirmation visible: {}\n", form.view().confirmation_visible());

    match whatsapp_link(&config.whatsapp) {
        Ok(link) => println!("WhatsApp link: {}", link),
        Err(e) => println!("WhatsApp link unavailable: {}", e),
    }

    println!("\n=== Example Complete ===");
}
