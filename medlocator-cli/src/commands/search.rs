//! `medlocator search` - filter the registry by a name fragment.

use crate::error::CliError;
use medlocator::registry::Registry;

pub fn run(query: &str) -> Result<(), CliError> {
    let registry = Registry::builtin();
    let matches = registry.search(query);

    if matches.is_empty() {
        println!("No hospitals found");
        return Ok(());
    }

    for record in &matches {
        println!(
            "{} ({}) at {:.4}, {:.4}",
            record.name, record.category, record.latitude, record.longitude
        );
    }

    Ok(())
}
