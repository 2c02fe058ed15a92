//! Command implementations for the csv2struct CLI.

use std::fs::{self, File};
use std::path::Path;
use std::process;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info};

use csv2struct_mapper::{
    assemble_record_type, infer_types, normalize_header, normalize_headers, render_record_type,
    sample_reader,
};
use csv2struct_model::{CaseStrategy, GenerateOptions};

use crate::cli::GenerateArgs;
use crate::package::resolve_package_name;
use crate::summary::apply_table_style;
use crate::types::GenerateResult;

/// Sample header shown per strategy in the `cases` listing.
fn example_header(strategy: CaseStrategy) -> &'static str {
    match strategy {
        CaseStrategy::Pascal => "OrderId*",
        CaseStrategy::Camel => "orderId*",
        CaseStrategy::Kebab => "order-id",
        CaseStrategy::Snake => "order_id",
        CaseStrategy::Space => "order id",
    }
}

pub fn run_cases() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Strategy", "Splits on", "Example", "Field name"]);
    apply_table_style(&mut table);
    for strategy in CaseStrategy::ALL {
        let splits = match strategy.delimiter() {
            Some(' ') => "space".to_string(),
            Some(delimiter) => format!("'{delimiter}'"),
            None => "nothing".to_string(),
        };
        let example = example_header(strategy);
        table.add_row(vec![
            strategy.name().to_string(),
            splits,
            example.to_string(),
            normalize_header(example, strategy),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    if !args.separator.is_ascii() {
        bail!(
            "separator must be a single ASCII character, got '{}'",
            args.separator
        );
    }
    let options = GenerateOptions {
        type_name: args.type_name.clone(),
        strategy: args.case,
        include_package_header: true,
    };

    let file =
        File::open(&args.from).with_context(|| format!("open {}", args.from.display()))?;
    let sampled = sample_reader(file, args.separator as u8)
        .with_context(|| format!("sample {}", args.from.display()))?;
    debug!(
        headers = sampled.headers.len(),
        values = sampled.values.len(),
        "sampled csv"
    );

    let names = normalize_headers(&sampled.headers, options.strategy);
    let types = infer_types(&sampled.values);
    let package = resolve_package_name(&args.to);
    let record = assemble_record_type(&sampled.headers, &names, &types, package, &options)?;
    debug!(fields = ?record.fields, "assembled record fields");
    let rendered = render_record_type(&record)?;

    if args.dry_run {
        print!("{rendered}");
        return Ok(GenerateResult {
            type_name: record.type_name,
            package_name: record.package_name,
            destination: args.to.clone(),
            fields: record.fields,
            formatted: false,
            dry_run: true,
        });
    }

    fs::write(&args.to, &rendered).with_context(|| format!("write {}", args.to.display()))?;
    let formatted = !args.no_format;
    if formatted {
        format_file(&args.to)?;
    }
    info!(destination = %args.to.display(), "generated record type");
    Ok(GenerateResult {
        type_name: record.type_name,
        package_name: record.package_name,
        destination: args.to.clone(),
        fields: record.fields,
        formatted,
        dry_run: false,
    })
}

/// Run rustfmt on the generated file. A missing or failing formatter is fatal.
fn format_file(path: &Path) -> Result<()> {
    let output = process::Command::new("rustfmt")
        .arg(path)
        .output()
        .with_context(|| format!("run rustfmt on {}", path.display()))?;
    if !output.status.success() {
        bail!(
            "rustfmt failed on {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
