//! `medlocator list` - print the full hospital registry.

use crate::error::CliError;
use medlocator::registry::Registry;

pub fn run() -> Result<(), CliError> {
    let registry = Registry::builtin();

    println!("{} hospitals:", registry.len());
    println!();
    for record in registry.iter() {
        println!("{}", record.name);
        println!("  Category: {}", record.category);
        println!(
            "  Location: {:.4}, {:.4}",
            record.latitude, record.longitude
        );
        println!("  Contact:  {}", record.contact);
        println!();
    }

    Ok(())
}
