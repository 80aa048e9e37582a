//! Template inspection commands

use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

use seedbed_scaffold::TemplateId;

use crate::cli::{TemplateCommands, TemplateListArgs, TemplateShowArgs};
use crate::output;

pub fn run(cmd: TemplateCommands) -> Result<()> {
    match cmd {
        TemplateCommands::List(args) => list(args),
        TemplateCommands::Show(args) => show(args),
    }
}

#[derive(Tabled, serde::Serialize)]
struct TemplateRow {
    id: &'static str,
    generates: &'static str,
    /// File under <root>/templates/ that shadows the built-in body.
    override_file: &'static str,
}

fn list(args: TemplateListArgs) -> Result<()> {
    let rows: Vec<TemplateRow> = TemplateId::ALL
        .into_iter()
        .map(|id| TemplateRow {
            id: id.as_str(),
            generates: id.description(),
            override_file: id.override_file(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{}", table);
        output::info("Drop a file with the override name into <root>/templates/ to customize");
    }

    Ok(())
}

fn show(args: TemplateShowArgs) -> Result<()> {
    let id: TemplateId = args.id.parse()?;
    print!("{}", id.builtin());
    Ok(())
}
