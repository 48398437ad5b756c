use clap::Subcommand;
use zenpulse_core::{Catalog, EntitlementGate};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List meditations with their lock state
    List {
        /// Evaluate as a subscribed user
        #[arg(long)]
        subscribed: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve what pressing an item does
    Select {
        /// Item id (e.g. "m4")
        id: String,
        /// Evaluate as a subscribed user
        #[arg(long)]
        subscribed: bool,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();

    match action {
        CatalogAction::List { subscribed, json } => {
            let access = EntitlementGate::classify(&catalog, subscribed);
            if json {
                println!("{}", serde_json::to_string_pretty(&access)?);
            } else {
                for row in access {
                    let marker = if row.accessible { " " } else { "🔒" };
                    println!(
                        "{marker} {:<4} {:<28} {:>3} min",
                        row.id, row.title, row.duration_min
                    );
                }
            }
        }
        CatalogAction::Select { id, subscribed } => {
            let item = catalog
                .get(&id)
                .ok_or_else(|| zenpulse_core::ValidationError::UnknownItem(id.clone()))?;
            let action = EntitlementGate::on_select(item, subscribed);
            println!("{}", serde_json::to_string_pretty(&action)?);
        }
    }
    Ok(())
}
