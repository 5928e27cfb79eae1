//! The `gradecast fields` command.

use anyhow::Result;
use comfy_table::Table;

use gradecast_core::fields::Field;
use gradecast_core::form::FormState;

pub fn execute() -> Result<()> {
    let defaults = FormState::default();

    let mut table = Table::new();
    table.set_header(vec!["Field", "Domain", "Default"]);
    for field in Field::ALL {
        table.add_row(vec![
            field.name().to_string(),
            field.domain().to_string(),
            defaults.value(field).to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
