//! Renders a fixed hospital-equipment quotation to `sample.pdf` (or the path
//! given as the first argument) for previewing template changes.
//!
//! With `--remote` the quotation is posted to the render server at
//! `DOCGEN_API_URL` instead of being rendered in-process.

use anyhow::Context;
use docgen::config::RendererConfig;
use docgen::documents::{DocType, TemplateData, TemplateItem};
use docgen::rendering::RenderService;
use docgen::transport::{RenderClient, RenderTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_ITEMS: [(&str, u32, u32); 22] = [
    ("OT Table Hydraulic (Advanced Model with SS 304)", 1, 45000),
    ("D.D. Autoclave (Vertical)", 1, 13000),
    ("Ambu bag (Silicon Adult)", 1, 1250),
    ("Syringe Pump (Touch Screen)", 1, 18000),
    ("3 Para Monitor with ECG/NIBP/SPO2", 3, 12500),
    ("General Bed (Deluxe with MS Frame)", 8, 6000),
    ("ICU Bed (Single Handle Manual)", 4, 15000),
    ("Monitor Stand (Adjustable Height)", 5, 1500),
    ("Cloth Streture (Standard)", 1, 3000),
    ("Medical Ventilator (Portable)", 1, 150000),
    ("Patient Monitor Pro (High Definition)", 2, 25000),
    ("Defibrillator (Biphasic)", 1, 85000),
    ("Surgical Light LED (7 Petal)", 1, 40000),
    ("Anesthesia Machine (Workstation)", 1, 120000),
    ("ECG Machine 12 Channel", 1, 35000),
    ("Oxygen Concentrator (5LPM)", 2, 45000),
    ("Suction Machine (Electric)", 3, 8000),
    ("Medical Gas Pipeline System Setup", 1, 200000),
    ("Infusion Pump (Continuous)", 5, 12000),
    ("Wheelchair Foldable (Heavy Duty)", 10, 4500),
    ("Stretcher Trolley (ABS Top)", 5, 15000),
    ("Nebulizer Machine (Compressor)", 20, 1500),
];

fn sample_quotation() -> TemplateData {
    let items = SAMPLE_ITEMS
        .iter()
        .map(|&(description, qty, price)| TemplateItem {
            description: description.to_string(),
            qty: qty.to_string(),
            price: price.to_string(),
            amount: (u64::from(qty) * u64::from(price)).to_string(),
        })
        .collect();

    TemplateData {
        doc_type: DocType::Quotation,
        to: "Dr. Amar Sharma".to_string(),
        to_address: "Director, City Hospital & Research Centre\nOpposite Gandhi Maidan, Patna- 800001"
            .to_string(),
        date: "31/01/26".to_string(),
        items,
        // Summary figures are pre-formatted display strings
        subtotal: "12,50,000".to_string(),
        gst_percent: "12".to_string(),
        gst: "1,50,000".to_string(),
        final_amount: "14,00,000".to_string(),
        advance_payment: "5,00,000".to_string(),
        payment_done: "2,00,000".to_string(),
        payment_remaining: "7,00,000".to_string(),
        terms: vec![
            "Payment 100% advance against invoice".to_string(),
            "Delivery charges and GST extra as applicable".to_string(),
            "Warranty one year from date of delivery".to_string(),
            "Subject to Patna Jurisdiction".to_string(),
        ],
        ..TemplateData::default()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let (remote, paths): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|arg| arg == "--remote");
    let output = paths.into_iter().next().unwrap_or_else(|| "sample.pdf".to_string());

    let pdf = if remote.is_empty() {
        let config = RendererConfig::from_env().context("invalid renderer configuration")?;
        let service = RenderService::from_config(&config).context("failed to set up renderer")?;
        service
            .render(sample_quotation())
            .await
            .context("failed to render sample quotation")?
    } else {
        let client = RenderClient::from_env();
        tracing::info!(base_url = %client.base_url(), "Rendering through render server");
        client
            .generate(&sample_quotation())
            .await
            .context("render server failed to generate sample quotation")?
    };

    tokio::fs::write(&output, &pdf)
        .await
        .with_context(|| format!("failed to write {}", output))?;

    tracing::info!(path = %output, bytes = pdf.len(), "Sample PDF generated");
    Ok(())
}
